//! HTTP request types for the Ecomail API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the Ecomail API, plus the URL assembly rule
//! shared by every call.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;
use crate::config::{encode_query, merge_query, BaseUrl, QueryParams, QueryValue};

/// HTTP methods supported by the Ecomail API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns `true` if requests with this method must carry a body.
    #[must_use]
    pub const fn requires_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// An HTTP request to be sent to the Ecomail API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
/// The body is always JSON.
///
/// # Example
///
/// ```rust
/// use ecomail_api::clients::{HttpRequest, HttpMethod};
/// use serde_json::json;
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "lists")
///     .build()
///     .unwrap();
///
/// let post_request = HttpRequest::builder(HttpMethod::Post, "lists/1/subscribe")
///     .body(json!({"subscriber_data": {"email": "a@b.com"}}))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path relative to the API server, without a leading `/`.
    pub path: String,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// Call-site query parameters; merged over the client defaults.
    pub query: Option<QueryParams>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `path` is empty
    /// - `http_method` is `Post` or `Put` but `body` is `None`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.trim_matches('/').is_empty() {
            return Err(InvalidHttpRequestError::EmptyPath);
        }

        if self.http_method.requires_body() && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }

    /// Returns the query that goes on the wire: `default_query` with this
    /// request's parameters layered on top.
    #[must_use]
    pub fn effective_query(&self, default_query: &QueryParams) -> QueryParams {
        merge_query(default_query, self.query.as_ref())
    }

    /// Builds the full request URL.
    ///
    /// The URL is `{base_url}/{path}?{query}`. The `?` is always present,
    /// even when the effective query is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ecomail_api::clients::{HttpRequest, HttpMethod};
    /// use ecomail_api::{BaseUrl, QueryParams, QueryValue};
    ///
    /// let request = HttpRequest::builder(HttpMethod::Get, "campaigns")
    ///     .query_param("filters", "sent")
    ///     .build()
    ///     .unwrap();
    ///
    /// let mut defaults = QueryParams::new();
    /// defaults.insert("page".to_string(), QueryValue::from(2));
    ///
    /// assert_eq!(
    ///     request.url(&BaseUrl::default(), &defaults),
    ///     "https://api2.ecomailapp.cz/campaigns?filters=sent&page=2"
    /// );
    /// ```
    #[must_use]
    pub fn url(&self, base_url: &BaseUrl, default_query: &QueryParams) -> String {
        let query = encode_query(&self.effective_query(default_query));
        format!(
            "{}/{}?{}",
            base_url,
            self.path.trim_start_matches('/'),
            query
        )
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    query: Option<QueryParams>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: None,
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets all call-site query parameters at once.
    #[must_use]
    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds a single call-site query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.query
            .get_or_insert_with(QueryParams::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
        };
        request.verify()?;
        Ok(request)
    }
}
