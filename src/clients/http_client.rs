//! HTTP client for Ecomail API communication.
//!
//! This module provides the [`HttpClient`] type that performs the transport
//! step of every call: it attaches the default headers, sends the request
//! exactly once and hands the raw response to [`classify`](crate::clients::classify).

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::{ApiResult, HttpResponse, JSON_CONTENT_TYPE};
use crate::config::EcomailConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the header that carries the API key.
pub const API_KEY_HEADER: &str = "key";

/// HTTP client for making requests to the Ecomail API.
///
/// The client handles:
/// - Default headers: `Content-Type`, `Accept` and `User-Agent`
/// - The `key` header, URL and default query, all taken from the
///   [`EcomailConfig`] passed to each call
/// - Response classification according to the configured response format
///
/// There is no retry logic: each request is attempted once, and a transport
/// failure (including a timeout) is returned as [`HttpError::Transport`].
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. Cloning it is cheap: the underlying
/// connection pool is shared.
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// The configuration's timeout, if any, is applied to the underlying
    /// transport.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] if the transport cannot be initialized
    /// (e.g., TLS backend failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use ecomail_api::{ApiKey, EcomailConfig};
    /// use ecomail_api::clients::HttpClient;
    ///
    /// let config = EcomailConfig::new(ApiKey::new("abc").unwrap());
    /// let client = HttpClient::new(&config).unwrap();
    /// assert!(client.default_headers().contains_key("User-Agent"));
    /// assert!(!client.default_headers().contains_key("key"));
    /// ```
    pub fn new(config: &EcomailConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Ecomail API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string());
        default_headers.insert("Accept".to_string(), JSON_CONTENT_TYPE.to_string());
        default_headers.insert("User-Agent".to_string(), user_agent);

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            default_headers,
        })
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request and returns the raw response.
    ///
    /// The `key` header, base URL and default query all come from `config`
    /// (see [`HttpRequest::url`]). Non-2xx statuses are returned as regular
    /// responses.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The request could not be sent or the body could not be read (`Transport`)
    pub async fn send(
        &self,
        request: &HttpRequest,
        config: &EcomailConfig,
    ) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = request.url(config.base_url(), config.default_query());
        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            "Sending request to Ecomail API"
        );

        let mut req_builder = self.client.request(request.http_method.into(), &url);

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        req_builder = req_builder.header(API_KEY_HEADER, config.api_key().as_ref());

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let status = res.status().as_u16();
        let content_type = res
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(String::from);
        let body = res.text().await?;

        Ok(HttpResponse::new(status, content_type, body))
    }

    /// Sends a request and classifies the response.
    ///
    /// # Errors
    ///
    /// Same as [`HttpClient::send`]. A non-2xx response is not an error; it is
    /// returned as [`ApiResult::Error`].
    pub async fn request(
        &self,
        request: &HttpRequest,
        config: &EcomailConfig,
    ) -> Result<ApiResult, HttpError> {
        let response = self.send(request, config).await?;
        Ok(response.into_api_result(config.response_format()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpMethod;
    use crate::config::{ApiKey, BaseUrl};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_config() -> EcomailConfig {
        EcomailConfig::new(ApiKey::new("test-api-key").unwrap())
    }

    #[test]
    fn test_api_key_is_not_a_default_header() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert!(!client.default_headers().contains_key(API_KEY_HEADER));
    }

    #[tokio::test]
    async fn test_key_header_comes_from_the_config_used_for_sending() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/lists"))
            .and(header("key", "second-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(&create_test_config()).unwrap();
        let config = EcomailConfig::builder()
            .api_key(ApiKey::new("second-key").unwrap())
            .base_url(BaseUrl::new(mock_server.uri()).unwrap())
            .build()
            .unwrap();
        let request = HttpRequest::builder(HttpMethod::Get, "lists").build().unwrap();

        let response = client.send(&request, &config).await.unwrap();

        assert_eq!(response.status, 200);
    }

    #[test]
    fn test_content_type_and_accept_headers_are_json() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(
            client.default_headers().get("Content-Type"),
            Some(&"application/json".to_string())
        );
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Ecomail API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = EcomailConfig::builder()
            .api_key(ApiKey::new("test-key").unwrap())
            .user_agent_prefix("MyShop/2.0")
            .build()
            .unwrap();

        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyShop/2.0 | "));
        assert!(user_agent.contains("Ecomail API Library"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
