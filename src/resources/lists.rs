//! Contact lists and subscribers.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//!
//! let lists = client.list_lists().await?;
//!
//! client
//!     .add_subscriber("1", &json!({
//!         "subscriber_data": {"email": "jan@example.cz", "name": "Jan"},
//!         "update_existing": true,
//!     }))
//!     .await?;
//!
//! let subscriber = client.get_subscriber("1", "jan@example.cz").await?;
//! ```

use serde::Serialize;

use super::EcomailClient;
use crate::catalog::Endpoint;
use crate::clients::{ApiResult, HttpError};

impl EcomailClient {
    /// Lists all contact lists.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request could not be completed.
    pub async fn list_lists(&self) -> Result<ApiResult, HttpError> {
        self.request(Endpoint::ListLists, &[]).await
    }

    /// Creates a contact list.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the body cannot be serialized or the request fails.
    pub async fn add_list<B: Serialize + ?Sized>(&self, data: &B) -> Result<ApiResult, HttpError> {
        self.request_with_data(Endpoint::AddList, &[], data).await
    }

    /// Shows one contact list.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request could not be completed.
    pub async fn get_list(&self, list_id: &str) -> Result<ApiResult, HttpError> {
        self.request(Endpoint::GetList, &[list_id]).await
    }

    /// Updates a contact list.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the body cannot be serialized or the request fails.
    pub async fn update_list<B: Serialize + ?Sized>(
        &self,
        list_id: &str,
        data: &B,
    ) -> Result<ApiResult, HttpError> {
        self.request_with_data(Endpoint::UpdateList, &[list_id], data)
            .await
    }

    /// Lists the subscribers of a list.
    ///
    /// Paged; combine with [`EcomailClient::page`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request could not be completed.
    pub async fn get_subscribers(&self, list_id: &str) -> Result<ApiResult, HttpError> {
        self.request(Endpoint::GetSubscribers, &[list_id]).await
    }

    /// Shows one subscriber of a list by email.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request could not be completed.
    pub async fn get_subscriber(&self, list_id: &str, email: &str) -> Result<ApiResult, HttpError> {
        self.request(Endpoint::GetSubscriber, &[list_id, email])
            .await
    }

    /// Shows one subscriber of a list by phone number.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request could not be completed.
    pub async fn get_subscriber_by_phone(
        &self,
        list_id: &str,
        phone: &str,
    ) -> Result<ApiResult, HttpError> {
        self.request(Endpoint::GetSubscriberByPhone, &[list_id, phone])
            .await
    }

    /// Lists the segments of a list.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request could not be completed.
    pub async fn get_list_segments(&self, list_id: &str) -> Result<ApiResult, HttpError> {
        self.request(Endpoint::GetListSegments, &[list_id]).await
    }

    /// Subscribes a contact to a list.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the body cannot be serialized or the request fails.
    pub async fn add_subscriber<B: Serialize + ?Sized>(
        &self,
        list_id: &str,
        data: &B,
    ) -> Result<ApiResult, HttpError> {
        self.request_with_data(Endpoint::AddSubscriber, &[list_id], data)
            .await
    }

    /// Unsubscribes a contact from a list.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the body cannot be serialized or the request fails.
    pub async fn remove_subscriber<B: Serialize + ?Sized>(
        &self,
        list_id: &str,
        data: &B,
    ) -> Result<ApiResult, HttpError> {
        self.request_with_data(Endpoint::RemoveSubscriber, &[list_id], data)
            .await
    }

    /// Updates a subscriber of a list.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the body cannot be serialized or the request fails.
    pub async fn update_subscriber<B: Serialize + ?Sized>(
        &self,
        list_id: &str,
        data: &B,
    ) -> Result<ApiResult, HttpError> {
        self.request_with_data(Endpoint::UpdateSubscriber, &[list_id], data)
            .await
    }

    /// Subscribes many contacts to a list in one call.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the body cannot be serialized or the request fails.
    pub async fn add_subscriber_bulk<B: Serialize + ?Sized>(
        &self,
        list_id: &str,
        data: &B,
    ) -> Result<ApiResult, HttpError> {
        self.request_with_data(Endpoint::AddSubscriberBulk, &[list_id], data)
            .await
    }

    /// Lists the lists a subscriber belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request could not be completed.
    pub async fn get_subscriber_lists(&self, email: &str) -> Result<ApiResult, HttpError> {
        self.request(Endpoint::GetSubscriberLists, &[email]).await
    }

    /// Shows a subscriber across all lists.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request could not be completed.
    pub async fn get_subscriber_by_email(&self, email: &str) -> Result<ApiResult, HttpError> {
        self.request(Endpoint::GetSubscriberByEmail, &[email]).await
    }

    /// Deletes a subscriber from the account, including all list memberships.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request could not be completed.
    pub async fn delete_subscriber(&self, email: &str) -> Result<ApiResult, HttpError> {
        self.request(Endpoint::DeleteSubscriber, &[email]).await
    }
}
