//! Campaigns and campaign statistics.

use serde::Serialize;

use super::EcomailClient;
use crate::catalog::Endpoint;
use crate::clients::{ApiResult, HttpError};
use crate::config::{QueryParams, QueryValue};

impl EcomailClient {
    /// Lists campaigns, optionally filtered.
    ///
    /// `filters` is sent as the `filters` query parameter.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request could not be completed.
    pub async fn list_campaigns(&self, filters: Option<&str>) -> Result<ApiResult, HttpError> {
        let query = filters.map(|filters| {
            let mut query = QueryParams::new();
            query.insert("filters".to_string(), QueryValue::from(filters));
            query
        });
        self.request_with_query(Endpoint::ListCampaigns, &[], query)
            .await
    }

    /// Creates a campaign.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the body cannot be serialized or the request fails.
    pub async fn add_campaign<B: Serialize + ?Sized>(
        &self,
        data: &B,
    ) -> Result<ApiResult, HttpError> {
        self.request_with_data(Endpoint::AddCampaign, &[], data)
            .await
    }

    /// Updates a campaign.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the body cannot be serialized or the request fails.
    pub async fn update_campaign<B: Serialize + ?Sized>(
        &self,
        campaign_id: &str,
        data: &B,
    ) -> Result<ApiResult, HttpError> {
        self.request_with_data(Endpoint::UpdateCampaign, &[campaign_id], data)
            .await
    }

    /// Queues a campaign for immediate sending.
    ///
    /// This cannot be undone.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request could not be completed.
    pub async fn send_campaign(&self, campaign_id: &str) -> Result<ApiResult, HttpError> {
        self.request(Endpoint::SendCampaign, &[campaign_id]).await
    }

    /// Returns statistics for a sent campaign.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request could not be completed.
    pub async fn get_campaign_stats(&self, campaign_id: &str) -> Result<ApiResult, HttpError> {
        self.request(Endpoint::GetCampaignStats, &[campaign_id])
            .await
    }

    /// Returns per-recipient statistics for a campaign.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request could not be completed.
    pub async fn get_campaign_stats_detail(
        &self,
        campaign_id: &str,
        query: Option<QueryParams>,
    ) -> Result<ApiResult, HttpError> {
        self.request_with_query(Endpoint::GetCampaignStatsDetail, &[campaign_id], query)
            .await
    }

    /// Returns campaign statistics for a segment.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request could not be completed.
    pub async fn get_segment_stats(&self, segment_id: &str) -> Result<ApiResult, HttpError> {
        self.request(Endpoint::GetSegmentStats, &[segment_id]).await
    }
}
