//! Tracker events, contact search and coupons.

use serde::Serialize;
use serde_json::json;

use super::EcomailClient;
use crate::catalog::Endpoint;
use crate::clients::{ApiResult, HttpError};

impl EcomailClient {
    /// Records a tracker event.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the body cannot be serialized or the request fails.
    pub async fn add_event<B: Serialize + ?Sized>(&self, data: &B) -> Result<ApiResult, HttpError> {
        self.request_with_data(Endpoint::AddEvent, &[], data).await
    }

    /// Searches contacts.
    ///
    /// The text is sent as `{"query": "<text>"}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request could not be completed.
    pub async fn search(&self, query: &str) -> Result<ApiResult, HttpError> {
        self.request_with_data(Endpoint::Search, &[], &json!({ "query": query }))
            .await
    }

    /// Imports coupon codes.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the body cannot be serialized or the request fails.
    pub async fn import_coupons<B: Serialize + ?Sized>(
        &self,
        data: &B,
    ) -> Result<ApiResult, HttpError> {
        self.request_with_data(Endpoint::ImportCoupons, &[], data)
            .await
    }

    /// Deletes coupon codes.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the body cannot be serialized or the request fails.
    pub async fn delete_coupons<B: Serialize + ?Sized>(
        &self,
        data: &B,
    ) -> Result<ApiResult, HttpError> {
        self.request_with_data(Endpoint::DeleteCoupons, &[], data)
            .await
    }
}
