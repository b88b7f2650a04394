//! Sending domains.

use serde::Serialize;

use super::EcomailClient;
use crate::catalog::Endpoint;
use crate::clients::{ApiResult, HttpError};

impl EcomailClient {
    /// Lists sending domains.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request could not be completed.
    pub async fn list_domains(&self) -> Result<ApiResult, HttpError> {
        self.request(Endpoint::ListDomains, &[]).await
    }

    /// Registers a sending domain.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the body cannot be serialized or the request fails.
    pub async fn create_domain<B: Serialize + ?Sized>(
        &self,
        data: &B,
    ) -> Result<ApiResult, HttpError> {
        self.request_with_data(Endpoint::CreateDomain, &[], data)
            .await
    }

    /// Removes a sending domain.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request could not be completed.
    pub async fn delete_domain(&self, domain_id: &str) -> Result<ApiResult, HttpError> {
        self.request(Endpoint::DeleteDomain, &[domain_id]).await
    }
}
