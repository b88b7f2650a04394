//! Product and data feeds.

use super::EcomailClient;
use crate::catalog::Endpoint;
use crate::clients::{ApiResult, HttpError};

impl EcomailClient {
    /// Asks Ecomail to re-download a product feed.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request could not be completed.
    pub async fn refresh_product_feed(&self, feed_id: &str) -> Result<ApiResult, HttpError> {
        self.request(Endpoint::RefreshProductFeed, &[feed_id]).await
    }

    /// Asks Ecomail to re-download a data feed.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request could not be completed.
    pub async fn refresh_data_feed(&self, feed_id: &str) -> Result<ApiResult, HttpError> {
        self.request(Endpoint::RefreshDataFeed, &[feed_id]).await
    }
}
