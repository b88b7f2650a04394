//! E-commerce transactions.

use serde::Serialize;

use super::EcomailClient;
use crate::catalog::Endpoint;
use crate::clients::{ApiResult, HttpError};
use crate::config::QueryParams;

impl EcomailClient {
    /// Records a transaction.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the body cannot be serialized or the request fails.
    pub async fn create_transaction<B: Serialize + ?Sized>(
        &self,
        data: &B,
    ) -> Result<ApiResult, HttpError> {
        self.request_with_data(Endpoint::CreateTransaction, &[], data)
            .await
    }

    /// Records many transactions in one call.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the body cannot be serialized or the request fails.
    pub async fn create_bulk_transactions<B: Serialize + ?Sized>(
        &self,
        data: &B,
    ) -> Result<ApiResult, HttpError> {
        self.request_with_data(Endpoint::CreateBulkTransactions, &[], data)
            .await
    }

    /// Updates a transaction.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the body cannot be serialized or the request fails.
    pub async fn update_transaction<B: Serialize + ?Sized>(
        &self,
        transaction_id: &str,
        data: &B,
    ) -> Result<ApiResult, HttpError> {
        self.request_with_data(Endpoint::UpdateTransaction, &[transaction_id], data)
            .await
    }

    /// Deletes a transaction.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request could not be completed.
    pub async fn delete_transaction(&self, transaction_id: &str) -> Result<ApiResult, HttpError> {
        self.request(Endpoint::DeleteTransaction, &[transaction_id])
            .await
    }

    /// Deletes the transactions listed in `data`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the body cannot be serialized or the request fails.
    pub async fn delete_bulk_transactions<B: Serialize + ?Sized>(
        &self,
        data: &B,
    ) -> Result<ApiResult, HttpError> {
        self.request_with_data(Endpoint::DeleteBulkTransactions, &[], data)
            .await
    }

    /// Lists transactions.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request could not be completed.
    pub async fn get_transactions(
        &self,
        query: Option<QueryParams>,
    ) -> Result<ApiResult, HttpError> {
        self.request_with_query(Endpoint::GetTransactions, &[], query)
            .await
    }
}
