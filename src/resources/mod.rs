//! The Ecomail API client and its per-area operations.
//!
//! [`EcomailClient`] exposes one async method per remote endpoint. Each
//! method names an [`Endpoint`] and forwards its arguments to
//! [`EcomailClient::call`], which resolves the path, serializes the body and
//! runs the request through the shared [`HttpClient`].
//!
//! The operations are grouped by API area:
//!
//! - `lists`: contact lists and subscribers
//! - `campaigns`: campaigns and their statistics
//! - `automations`: automation pipelines
//! - `templates` and `domains`
//! - `transactional`: transactional email
//! - `transactions`: e-commerce transactions
//! - `feeds`: product and data feeds
//! - `tracker`: tracker events, search and coupons
//! - `account`: the account webhook
//!
//! # Example
//!
//! ```rust,ignore
//! use ecomail_api::{ApiKey, ApiResult, EcomailClient, EcomailConfig};
//! use serde_json::json;
//!
//! let client = EcomailClient::new(EcomailConfig::new(ApiKey::new("abc")?))?;
//!
//! let result = client
//!     .add_subscriber("1", &json!({"subscriber_data": {"email": "a@b.com"}}))
//!     .await?;
//!
//! if let ApiResult::Error(remote) = result {
//!     eprintln!("Ecomail rejected the subscriber: {remote}");
//! }
//!
//! // Read the second page of lists without touching `client`
//! let page_two = client.page(2).list_lists().await?;
//! ```

mod account;
mod automations;
mod campaigns;
mod domains;
mod feeds;
mod lists;
mod templates;
mod tracker;
mod transactional;
mod transactions;

use serde::Serialize;
use serde_json::Value;

use crate::catalog::{BodyRequirement, Endpoint};
use crate::clients::{
    encode_body, ApiResult, HttpClient, HttpError, HttpRequest, InvalidHttpRequestError,
};
use crate::config::{EcomailConfig, QueryParams, QueryValue};

/// Placeholder body type for operations that send no data.
const NO_BODY: Option<&Value> = None;

/// Client for the Ecomail REST API.
///
/// Every derivation method (`with_query`, `without_query`, `page`) returns
/// a new client with its own configuration; the original is never changed.
/// Derived clients share the connection pool.
///
/// # Thread Safety
///
/// `EcomailClient` is `Send + Sync` and cheap to clone.
#[derive(Clone, Debug)]
pub struct EcomailClient {
    /// The transport shared with derived clients.
    http_client: HttpClient,
    /// This client's immutable configuration.
    config: EcomailConfig,
}

// Verify EcomailClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EcomailClient>();
};

impl EcomailClient {
    /// Creates a new client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] if the HTTP transport cannot be initialized.
    pub fn new(config: EcomailConfig) -> Result<Self, HttpError> {
        let http_client = HttpClient::new(&config)?;
        Ok(Self {
            http_client,
            config,
        })
    }

    /// Returns this client's configuration.
    #[must_use]
    pub const fn config(&self) -> &EcomailConfig {
        &self.config
    }

    /// Returns a client whose calls carry the given default query parameter.
    ///
    /// `None` removes the parameter. See [`EcomailConfig::with_query`].
    #[must_use]
    pub fn with_query(&self, key: impl Into<String>, value: Option<QueryValue>) -> Self {
        self.derive(self.config.with_query(key, value))
    }

    /// Returns a client without the given default query parameter.
    #[must_use]
    pub fn without_query(&self, key: &str) -> Self {
        self.derive(self.config.without_query(key))
    }

    /// Returns a client that reads the given page.
    #[must_use]
    pub fn page(&self, page: u32) -> Self {
        self.derive(self.config.page(page))
    }

    fn derive(&self, config: EcomailConfig) -> Self {
        Self {
            http_client: self.http_client.clone(),
            config,
        }
    }

    /// Calls an endpoint of the catalog.
    ///
    /// `ids` fills the endpoint's path placeholders in order. `body` is
    /// encoded as JSON before anything is sent; endpoints that take no
    /// body ignore it, and endpoints that always send one use `{}` when it
    /// is `None`. `query` is merged over the client's default query and is
    /// dropped for endpoints that do not accept extra parameters.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - the identifier count does not match the path, or a required body is
    ///   missing (`InvalidRequest`)
    /// - the body cannot be encoded as JSON, including `NaN` or infinite
    ///   floats (`Serialization`)
    /// - the request fails at the network level (`Transport`)
    ///
    /// Non-2xx responses are returned as [`ApiResult::Error`].
    pub async fn call<B: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        ids: &[&str],
        body: Option<&B>,
        query: Option<QueryParams>,
    ) -> Result<ApiResult, HttpError> {
        let descriptor = endpoint.descriptor();
        let path = descriptor.resolve_path(ids)?;

        let body = match descriptor.body {
            BodyRequirement::None => None,
            BodyRequirement::Required => {
                let body = body.ok_or_else(|| InvalidHttpRequestError::MissingBody {
                    method: descriptor.http_method.to_string(),
                })?;
                Some(encode_body(body)?)
            }
            BodyRequirement::DefaultEmpty => Some(match body {
                Some(body) => encode_body(body)?,
                None => Value::Object(serde_json::Map::new()),
            }),
        };

        let mut builder = HttpRequest::builder(descriptor.http_method, path);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        match query {
            Some(query) if descriptor.accepts_query => builder = builder.query(query),
            Some(_) => tracing::warn!(
                endpoint = descriptor.name,
                "Ignoring query parameters for an endpoint that does not accept them"
            ),
            None => {}
        }

        let request = builder.build()?;
        self.http_client.request(&request, &self.config).await
    }

    async fn request(&self, endpoint: Endpoint, ids: &[&str]) -> Result<ApiResult, HttpError> {
        self.call(endpoint, ids, NO_BODY, None).await
    }

    async fn request_with_query(
        &self,
        endpoint: Endpoint,
        ids: &[&str],
        query: Option<QueryParams>,
    ) -> Result<ApiResult, HttpError> {
        self.call(endpoint, ids, NO_BODY, query).await
    }

    async fn request_with_data<B: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        ids: &[&str],
        data: &B,
    ) -> Result<ApiResult, HttpError> {
        self.call(endpoint, ids, Some(data), None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, BaseUrl};
    use wiremock::matchers::any;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_client() -> EcomailClient {
        EcomailClient::new(EcomailConfig::new(ApiKey::new("abc").unwrap())).unwrap()
    }

    #[test]
    fn test_derived_client_does_not_affect_original() {
        let client = create_test_client();
        let paged = client.page(2);

        assert!(client.config().default_query().is_empty());
        assert_eq!(paged.config().default_query()["page"], QueryValue::Int(2));
    }

    #[test]
    fn test_with_query_and_without_query() {
        let client = create_test_client().with_query("filters", Some("sent".into()));
        assert!(client.config().default_query().contains_key("filters"));

        let cleared = client.without_query("filters");
        assert!(cleared.config().default_query().is_empty());
        assert!(client.config().default_query().contains_key("filters"));
    }

    #[tokio::test]
    async fn test_call_rejects_wrong_identifier_count() {
        let result = create_test_client().request(Endpoint::GetList, &[]).await;

        assert!(matches!(
            result,
            Err(HttpError::InvalidRequest(InvalidHttpRequestError::PathArguments { .. }))
        ));
    }

    #[tokio::test]
    async fn test_call_requires_body_for_required_endpoints() {
        let result = create_test_client()
            .call(Endpoint::AddSubscriber, &["1"], NO_BODY, None)
            .await;

        assert!(matches!(
            result,
            Err(HttpError::InvalidRequest(InvalidHttpRequestError::MissingBody { method }))
                if method == "post"
        ));
    }

    #[tokio::test]
    async fn test_call_reports_serialization_errors_before_sending() {
        let mut bad = std::collections::BTreeMap::new();
        bad.insert((1, 2), "tuple keys are not valid JSON object keys");

        let result = create_test_client()
            .call(Endpoint::AddList, &[], Some(&bad), None)
            .await;

        assert!(matches!(result, Err(HttpError::Serialization(_))));
    }

    #[tokio::test]
    async fn test_non_finite_amount_fails_before_any_request_is_sent() {
        #[derive(Serialize)]
        struct Transaction {
            order_id: &'static str,
            amount: f64,
        }

        let mock_server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let config = EcomailConfig::builder()
            .api_key(ApiKey::new("abc").unwrap())
            .base_url(BaseUrl::new(mock_server.uri()).unwrap())
            .build()
            .unwrap();
        let client = EcomailClient::new(config).unwrap();

        for amount in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = client
                .create_transaction(&Transaction {
                    order_id: "T-1",
                    amount,
                })
                .await;
            assert!(matches!(result, Err(HttpError::Serialization(_))), "{amount}");
        }

        let requests = mock_server.received_requests().await.unwrap();
        assert!(requests.is_empty());
    }

    #[test]
    fn test_with_query_none_removes_key() {
        let client = create_test_client().page(3).with_query("page", None);

        assert!(!client.config().default_query().contains_key("page"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EcomailClient>();
    }
}
