//! Email templates.

use serde::Serialize;

use super::EcomailClient;
use crate::catalog::Endpoint;
use crate::clients::{ApiResult, HttpError};

impl EcomailClient {
    /// Creates a template.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the body cannot be serialized or the request fails.
    pub async fn create_template<B: Serialize + ?Sized>(
        &self,
        data: &B,
    ) -> Result<ApiResult, HttpError> {
        self.request_with_data(Endpoint::CreateTemplate, &[], data)
            .await
    }

    /// Shows a template.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request could not be completed.
    pub async fn get_template(&self, template_id: &str) -> Result<ApiResult, HttpError> {
        self.request(Endpoint::GetTemplate, &[template_id]).await
    }
}
