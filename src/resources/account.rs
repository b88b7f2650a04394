//! Account webhook settings.

use serde::Serialize;

use super::EcomailClient;
use crate::catalog::Endpoint;
use crate::clients::{ApiResult, HttpError};

impl EcomailClient {
    /// Sets the account webhook URL.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the body cannot be serialized or the request fails.
    pub async fn set_webhook<B: Serialize + ?Sized>(
        &self,
        data: &B,
    ) -> Result<ApiResult, HttpError> {
        self.request_with_data(Endpoint::SetWebhook, &[], data)
            .await
    }

    /// Returns the account webhook settings.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request could not be completed.
    pub async fn get_webhook(&self) -> Result<ApiResult, HttpError> {
        self.request(Endpoint::GetWebhook, &[]).await
    }

    /// Removes the account webhook.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request could not be completed.
    pub async fn delete_webhook(&self) -> Result<ApiResult, HttpError> {
        self.request(Endpoint::DeleteWebhook, &[]).await
    }
}
