//! Configuration types for the Ecomail API SDK.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`EcomailConfig`]: Immutable client configuration (key, server, format, default query)
//! - [`EcomailConfigBuilder`]: A builder for constructing [`EcomailConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`BaseUrl`]: A validated API server URL
//! - [`ResponseFormat`]: How successful response bodies are decoded
//! - [`QueryValue`] and [`QueryParams`]: Query parameter values
//!
//! # Derivation
//!
//! Configurations are never mutated in place. [`EcomailConfig::with_query`]
//! and [`EcomailConfig::page`] return a new configuration and leave the
//! original untouched:
//!
//! ```rust
//! use ecomail_api::{ApiKey, EcomailConfig, QueryValue};
//!
//! let config = EcomailConfig::new(ApiKey::new("abc").unwrap());
//! let second_page = config.page(2);
//!
//! assert!(config.default_query().is_empty());
//! assert_eq!(second_page.default_query()["page"], QueryValue::from(2));
//! ```

mod format;
mod newtypes;
mod query;

pub use format::ResponseFormat;
pub use newtypes::{ApiKey, BaseUrl, DEFAULT_BASE_URL};
pub use query::{encode_query, merge_query, QueryParams, QueryValue};

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for the Ecomail API SDK.
///
/// Holds the API key, the server to talk to, the response format and the
/// query parameters sent with every call.
///
/// # Thread Safety
///
/// `EcomailConfig` is `Clone`, `Send`, and `Sync`. Nothing inside it is
/// mutable, so one instance can be shared by concurrent callers.
///
/// # Example
///
/// ```rust
/// use ecomail_api::{ApiKey, BaseUrl, EcomailConfig, ResponseFormat};
///
/// let config = EcomailConfig::builder()
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .base_url(BaseUrl::new("https://api2.ecomailapp.cz").unwrap())
///     .response_format(ResponseFormat::JsonObject)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.response_format(), ResponseFormat::JsonObject);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EcomailConfig {
    api_key: ApiKey,
    base_url: BaseUrl,
    response_format: ResponseFormat,
    default_query: QueryParams,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl EcomailConfig {
    /// Creates a configuration with default server, format and no default query.
    #[must_use]
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: BaseUrl::default(),
            response_format: ResponseFormat::default(),
            default_query: QueryParams::new(),
            timeout: None,
            user_agent_prefix: None,
        }
    }

    /// Creates a new builder for constructing an `EcomailConfig`.
    #[must_use]
    pub fn builder() -> EcomailConfigBuilder {
        EcomailConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API server URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the response format.
    #[must_use]
    pub const fn response_format(&self) -> ResponseFormat {
        self.response_format
    }

    /// Returns the query parameters sent with every call.
    #[must_use]
    pub const fn default_query(&self) -> &QueryParams {
        &self.default_query
    }

    /// Returns the transport timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns a new configuration with a default query parameter set or removed.
    ///
    /// `Some(value)` sets or overwrites `key`; `None` removes it. The
    /// original configuration is left untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ecomail_api::{ApiKey, EcomailConfig, QueryValue};
    ///
    /// let config = EcomailConfig::new(ApiKey::new("abc").unwrap())
    ///     .with_query("filters", Some("sent".into()));
    /// assert_eq!(config.default_query()["filters"], QueryValue::from("sent"));
    ///
    /// let cleared = config.with_query("filters", None);
    /// assert!(!cleared.default_query().contains_key("filters"));
    /// ```
    #[must_use]
    pub fn with_query(&self, key: impl Into<String>, value: Option<QueryValue>) -> Self {
        let mut derived = self.clone();
        let key = key.into();
        match value {
            Some(value) => {
                derived.default_query.insert(key, value);
            }
            None => {
                derived.default_query.remove(&key);
            }
        }
        derived
    }

    /// Returns a new configuration without the given default query parameter.
    #[must_use]
    pub fn without_query(&self, key: &str) -> Self {
        self.with_query(key, None)
    }

    /// Returns a new configuration that reads the given page.
    ///
    /// Shorthand for `with_query("page", Some(page.into()))`.
    #[must_use]
    pub fn page(&self, page: u32) -> Self {
        self.with_query("page", Some(QueryValue::from(page)))
    }
}

// Verify EcomailConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EcomailConfig>();
};

/// Builder for constructing [`EcomailConfig`] instances.
///
/// `api_key` is required. All other fields have defaults.
///
/// # Defaults
///
/// - `base_url`: `https://api2.ecomailapp.cz`
/// - `response_format`: [`ResponseFormat::JsonArray`]
/// - `default_query`: Empty
/// - `timeout`: `None` (transport default)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct EcomailConfigBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<BaseUrl>,
    response_format: Option<ResponseFormat>,
    default_query: QueryParams,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl EcomailConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API server URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the response format.
    #[must_use]
    pub const fn response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = Some(format);
        self
    }

    /// Replaces all default query parameters.
    #[must_use]
    pub fn default_query(mut self, query: QueryParams) -> Self {
        self.default_query = query;
        self
    }

    /// Adds a single default query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.default_query.insert(key.into(), value.into());
        self
    }

    /// Sets the transport timeout applied to each request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`EcomailConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    pub fn build(self) -> Result<EcomailConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(EcomailConfig {
            api_key,
            base_url: self.base_url.unwrap_or_default(),
            response_format: self.response_format.unwrap_or_default(),
            default_query: self.default_query,
            timeout: self.timeout,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
