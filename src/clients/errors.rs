//! HTTP-specific error types for the Ecomail API SDK.
//!
//! # Error Handling
//!
//! Failures that stop a call are reported through [`HttpError`]:
//!
//! - [`HttpError::Transport`]: DNS, connection, TLS or timeout failures
//! - [`HttpError::Serialization`]: The request body could not be encoded to JSON
//! - [`HttpError::InvalidRequest`]: The request failed validation before sending
//!
//! A non-2xx response is *not* an error of this kind. It comes back as
//! [`ApiResult::Error`](crate::clients::ApiResult::Error) carrying a
//! [`RemoteError`], because rejected subscribers or unknown list ids are
//! routine outcomes.
//!
//! # Example
//!
//! ```rust,ignore
//! use ecomail_api::clients::{ApiResult, HttpError};
//!
//! match client.list_lists().await {
//!     Ok(ApiResult::Error(remote)) => println!("API said {}: {}", remote.status, remote.message),
//!     Ok(result) => println!("Lists: {result:?}"),
//!     Err(HttpError::Transport(e)) => println!("Network error: {e}"),
//!     Err(e) => println!("Request not sent: {e}"),
//! }
//! ```

use std::fmt;

use thiserror::Error;

/// Body of a non-2xx response.
///
/// Decoded as JSON when the response declared `application/json`,
/// otherwise kept as raw text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorMessage {
    /// A decoded JSON error body.
    Json(serde_json::Value),
    /// The raw response text.
    Text(String),
}

impl ErrorMessage {
    /// Returns the decoded JSON body, if the message is JSON.
    #[must_use]
    pub const fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// Returns the raw text, if the message was not JSON.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// A non-2xx response from the Ecomail API.
///
/// # Example
///
/// ```rust
/// use ecomail_api::clients::{ErrorMessage, RemoteError};
///
/// let error = RemoteError {
///     status: 404,
///     message: ErrorMessage::Json(serde_json::json!({"error": "not found"})),
/// };
///
/// assert_eq!(error.to_string(), r#"HTTP 404: {"error":"not found"}"#);
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("HTTP {status}: {message}")]
pub struct RemoteError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The response body, decoded as far as the content type allows.
    pub message: ErrorMessage,
}

/// Error returned when an HTTP request fails validation.
///
/// Raised before anything is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request path is empty.
    #[error("Request path cannot be empty.")]
    EmptyPath,

    /// The number of identifiers does not match the path template.
    #[error("Path '{template}' expects {expected} identifier(s), got {actual}.")]
    PathArguments {
        /// The path template being expanded.
        template: &'static str,
        /// The number of placeholders in the template.
        expected: usize,
        /// The number of identifiers supplied.
        actual: usize,
    },
}

/// Unified error type for calls that could not complete.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network, connection or timeout error.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request body could not be encoded as JSON.
    #[error("Failed to serialize request body: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),
}

impl HttpError {
    /// Returns `true` if the transport gave up because of a timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}
