//! Transactional email.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//!
//! client
//!     .send_transactional_email(&json!({
//!         "message": {
//!             "subject": "Order confirmation",
//!             "from_email": "shop@example.cz",
//!             "to": [{"email": "jan@example.cz"}],
//!             "html": "<p>Thanks!</p>",
//!         }
//!     }))
//!     .await?;
//! ```

use serde::Serialize;

use super::EcomailClient;
use crate::catalog::Endpoint;
use crate::clients::{ApiResult, HttpError};

impl EcomailClient {
    /// Sends a transactional message.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the body cannot be serialized or the request fails.
    pub async fn send_transactional_email<B: Serialize + ?Sized>(
        &self,
        data: &B,
    ) -> Result<ApiResult, HttpError> {
        self.request_with_data(Endpoint::SendTransactionalEmail, &[], data)
            .await
    }

    /// Sends a transactional message rendered from a template.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the body cannot be serialized or the request fails.
    pub async fn send_transactional_template<B: Serialize + ?Sized>(
        &self,
        data: &B,
    ) -> Result<ApiResult, HttpError> {
        self.request_with_data(Endpoint::SendTransactionalTemplate, &[], data)
            .await
    }

    /// Returns transactional email statistics.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request could not be completed.
    pub async fn get_transactional_stats(&self) -> Result<ApiResult, HttpError> {
        self.request(Endpoint::GetTransactionalStats, &[]).await
    }

    /// Returns double opt-in email statistics.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request could not be completed.
    pub async fn get_transactional_stats_doi(&self) -> Result<ApiResult, HttpError> {
        self.request(Endpoint::GetTransactionalStatsDoi, &[]).await
    }
}
