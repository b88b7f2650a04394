//! HTTP response types for the Ecomail API SDK.
//!
//! This module turns a raw transport response into the typed [`ApiResult`]
//! callers receive. The rules live in [`classify`], a pure function that
//! can be exercised without a network:
//!
//! 1. A status outside `200..=299` yields [`ApiResult::Error`]. Its message is
//!    the decoded JSON body when the response declared `application/json`,
//!    otherwise the raw text.
//! 2. A 2xx body is decoded according to the client's [`ResponseFormat`].
//!    JSON formats fall back to the raw text when the body is not a JSON
//!    array or object.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::clients::errors::{ErrorMessage, RemoteError};
use crate::config::ResponseFormat;

/// MIME type that marks an error body as JSON.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A raw response as returned by the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// The declared `Content-Type` header, if any.
    pub content_type: Option<String>,
    /// The response body as text.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(status: u16, content_type: Option<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type,
            body: body.into(),
        }
    }

    /// Returns `true` if the status code is in `200..=299`.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        is_success(self.status)
    }

    /// Classifies and decodes this response.
    #[must_use]
    pub fn into_api_result(self, format: ResponseFormat) -> ApiResult {
        classify(self.status, self.content_type.as_deref(), self.body, format)
    }
}

/// A JSON node exposed as a record with named fields.
///
/// Produced by [`ResponseFormat::JsonObject`]. Object fields are read by
/// name; array nodes stay ordered sequences. [`Record::deserialize`] maps
/// the node onto a caller-defined struct.
///
/// # Example
///
/// ```rust
/// use ecomail_api::clients::Record;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct List {
///     id: u64,
///     name: String,
/// }
///
/// let record = Record::from(serde_json::json!({"id": 7, "name": "Newsletter"}));
/// assert_eq!(record.get("name").and_then(|v| v.as_str()), Some("Newsletter"));
///
/// let list: List = record.deserialize().unwrap();
/// assert_eq!(list.id, 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record(Value);

impl Record {
    /// Returns the named field if this node is an object.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.as_object().and_then(|fields| fields.get(field))
    }

    /// Returns the element at `index` if this node is an array.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Value> {
        self.0.as_array().and_then(|items| items.get(index))
    }

    /// Returns the field names if this node is an object.
    #[must_use]
    pub fn field_names(&self) -> Vec<&str> {
        self.0
            .as_object()
            .map(|fields| fields.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Returns `true` if this node is an array.
    #[must_use]
    pub fn is_array(&self) -> bool {
        self.0.is_array()
    }

    /// Deserializes the node into a typed record.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the node does not match `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.0.clone())
    }

    /// Returns the underlying JSON node.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the record and returns the underlying JSON node.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for Record {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// The outcome of one API call.
///
/// Transport and serialization failures are reported separately through
/// [`HttpError`](crate::clients::HttpError); everything the server answered
/// ends up here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiResult {
    /// JSON array or object, with object keys in the order received
    /// ([`ResponseFormat::JsonArray`]).
    Json(Value),
    /// JSON array or object exposed as a [`Record`]
    /// ([`ResponseFormat::JsonObject`]).
    Record(Record),
    /// The raw body: always under [`ResponseFormat::PlainText`], and as the
    /// fallback when a JSON format was requested but the body was not JSON.
    Text(String),
    /// A non-2xx response.
    Error(RemoteError),
}

impl ApiResult {
    /// Returns `true` if the server answered with a non-2xx status.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns the remote error, if any.
    #[must_use]
    pub const fn remote_error(&self) -> Option<&RemoteError> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Returns the JSON node for `Json` and `Record` results.
    #[must_use]
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Record(record) => Some(record.as_value()),
            _ => None,
        }
    }

    /// Returns the text for `Text` results.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Converts a remote error into `Err`, so it can be propagated with `?`.
    ///
    /// # Errors
    ///
    /// Returns the [`RemoteError`] if this is an `Error` result.
    pub fn into_result(self) -> Result<Self, RemoteError> {
        match self {
            Self::Error(error) => Err(error),
            other => Ok(other),
        }
    }
}

/// Returns `true` if `status` is in `200..=299`.
#[must_use]
pub const fn is_success(status: u16) -> bool {
    status >= 200 && status <= 299
}

/// Returns `true` if the content type's MIME essence is `application/json`.
///
/// Parameters such as `charset` are ignored.
#[must_use]
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|value| value.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(JSON_CONTENT_TYPE))
}

/// Classifies a response and decodes its body.
///
/// # Example
///
/// ```rust
/// use ecomail_api::clients::{classify, ApiResult, ErrorMessage};
/// use ecomail_api::ResponseFormat;
///
/// let result = classify(
///     404,
///     Some("application/json"),
///     r#"{"error":"not found"}"#.to_string(),
///     ResponseFormat::JsonArray,
/// );
/// let error = result.remote_error().unwrap();
/// assert_eq!(error.status, 404);
/// assert_eq!(error.message, ErrorMessage::Json(serde_json::json!({"error": "not found"})));
///
/// let result = classify(200, None, "plain ok".to_string(), ResponseFormat::PlainText);
/// assert_eq!(result, ApiResult::Text("plain ok".to_string()));
/// ```
#[must_use]
pub fn classify(
    status: u16,
    content_type: Option<&str>,
    body: String,
    format: ResponseFormat,
) -> ApiResult {
    if !is_success(status) {
        tracing::debug!(status, "Ecomail API returned an error status");
        return ApiResult::Error(RemoteError {
            status,
            message: decode_error_message(content_type, body),
        });
    }

    decode_success(body, format)
}

/// Decodes the body of a non-2xx response.
fn decode_error_message(content_type: Option<&str>, body: String) -> ErrorMessage {
    if is_json_content_type(content_type) {
        if let Ok(value) = serde_json::from_str::<Value>(&body) {
            return ErrorMessage::Json(value);
        }
    }
    ErrorMessage::Text(body)
}

/// Decodes the body of a 2xx response according to `format`.
#[must_use]
pub fn decode_success(body: String, format: ResponseFormat) -> ApiResult {
    if !format.parses_json() {
        return ApiResult::Text(body);
    }

    match serde_json::from_str::<Value>(&body) {
        Ok(value @ (Value::Array(_) | Value::Object(_))) => match format {
            ResponseFormat::JsonObject => ApiResult::Record(Record(value)),
            _ => ApiResult::Json(value),
        },
        _ => {
            tracing::trace!("Response body is not a JSON array or object, returning raw text");
            ApiResult::Text(body)
        }
    }
}
