//! # Ecomail API Rust SDK
//!
//! A Rust SDK for the Ecomail email-marketing REST API, providing type-safe
//! configuration, a catalog of every remote endpoint, and an async client
//! with one method per operation.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Immutable configuration via [`EcomailConfig`] and [`EcomailConfigBuilder`]
//! - Validated newtypes for the API key and server URL
//! - Default query parameters with copy-on-write derivation (`page`, `with_query`)
//! - A declarative endpoint catalog in [`catalog`]
//! - Response classification into [`ApiResult`], with remote errors returned as data
//!
//! ## Quick Start
//!
//! ```rust
//! use ecomail_api::{ApiKey, EcomailConfig, ResponseFormat};
//!
//! let config = EcomailConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .response_format(ResponseFormat::JsonObject)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api2.ecomailapp.cz");
//! ```
//!
//! ## Making Calls
//!
//! ```rust,ignore
//! use ecomail_api::{ApiKey, ApiResult, EcomailClient, EcomailConfig};
//! use serde_json::json;
//!
//! let client = EcomailClient::new(EcomailConfig::new(ApiKey::new("your-api-key")?))?;
//!
//! match client.get_list("1").await? {
//!     ApiResult::Error(remote) => eprintln!("HTTP {}", remote.status),
//!     ok => println!("{:?}", ok.as_json()),
//! }
//!
//! // Remote errors can also be lifted into a `Result`
//! let subscribers = client.page(3).get_subscribers("1").await?.into_result()?;
//! ```
//!
//! ## Logging
//!
//! The SDK emits [`tracing`] events at `debug` level for every request sent
//! and every error status received. Install a subscriber to see them.

pub mod catalog;
pub mod clients;
pub mod config;
pub mod error;
mod resources;

pub use resources::EcomailClient;

// Re-export configuration types at crate root for convenience
pub use config::{
    encode_query, merge_query, ApiKey, BaseUrl, EcomailConfig, EcomailConfigBuilder, QueryParams,
    QueryValue, ResponseFormat, DEFAULT_BASE_URL,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    classify, ApiResult, ErrorMessage, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, InvalidHttpRequestError, Record, RemoteError,
};

// Re-export catalog types
pub use catalog::{BodyRequirement, Endpoint, EndpointDescriptor};
