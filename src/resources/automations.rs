//! Automation pipelines.

use serde::Serialize;

use super::EcomailClient;
use crate::catalog::Endpoint;
use crate::clients::{ApiResult, HttpError};
use crate::config::QueryParams;

impl EcomailClient {
    /// Lists automations.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request could not be completed.
    pub async fn list_automations(&self) -> Result<ApiResult, HttpError> {
        self.request(Endpoint::ListAutomations, &[]).await
    }

    /// Triggers an automation for a contact.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the body cannot be serialized or the request fails.
    pub async fn trigger_automation<B: Serialize + ?Sized>(
        &self,
        pipeline_id: &str,
        data: &B,
    ) -> Result<ApiResult, HttpError> {
        self.request_with_data(Endpoint::TriggerAutomation, &[pipeline_id], data)
            .await
    }

    /// Returns statistics for an automation.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request could not be completed.
    pub async fn get_pipeline_stats(&self, pipeline_id: &str) -> Result<ApiResult, HttpError> {
        self.request(Endpoint::GetPipelineStats, &[pipeline_id])
            .await
    }

    /// Returns per-recipient statistics for an automation.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request could not be completed.
    pub async fn get_pipeline_stats_detail(
        &self,
        pipeline_id: &str,
        query: Option<QueryParams>,
    ) -> Result<ApiResult, HttpError> {
        self.request_with_query(Endpoint::GetPipelineStatsDetail, &[pipeline_id], query)
            .await
    }

    /// Returns automation statistics for the emails listed in `data`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the body cannot be serialized or the request fails.
    pub async fn get_pipeline_stats_for_emails<B: Serialize + ?Sized>(
        &self,
        pipeline_id: &str,
        data: &B,
        query: Option<QueryParams>,
    ) -> Result<ApiResult, HttpError> {
        self.call(
            Endpoint::GetPipelineStatsForEmails,
            &[pipeline_id],
            Some(data),
            query,
        )
        .await
    }
}
