//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// Default Ecomail API server.
pub const DEFAULT_BASE_URL: &str = "https://api2.ecomailapp.cz";

/// A validated Ecomail API key.
///
/// The key is sent verbatim in the `key` header of every request. Any
/// non-empty string is accepted; its format is not checked.
///
/// # Security
///
/// The `Debug` implementation masks the value, displaying only
/// `ApiKey(*****)`, so that keys never end up in logs.
///
/// # Example
///
/// ```rust
/// use ecomail_api::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(format!("{key:?}"), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated API server URL.
///
/// The URL must carry a scheme and a host. Surrounding whitespace and
/// trailing slashes are removed so that request paths can be appended
/// with a single `/`.
///
/// # Example
///
/// ```rust
/// use ecomail_api::BaseUrl;
///
/// let url = BaseUrl::new("https://api2.ecomailapp.cz/").unwrap();
/// assert_eq!(url.as_ref(), "https://api2.ecomailapp.cz");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "api2.ecomailapp.cz");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_start >= host_end {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        // Query strings are appended by the pipeline, so the base cannot carry one.
        if remainder.contains(['?', '#']) {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        let host_start = "https://".len();
        Self {
            url: DEFAULT_BASE_URL.to_string(),
            scheme_end: "https".len(),
            host_start,
            host_end: DEFAULT_BASE_URL.len(),
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty_string() {
        let result = ApiKey::new("");
        assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_accepts_any_non_empty_string() {
        assert_eq!(ApiKey::new("abc").unwrap().as_ref(), "abc");
        assert_eq!(ApiKey::new(" spaced key ").unwrap().as_ref(), " spaced key ");
    }

    #[test]
    fn test_api_key_masks_value_in_debug() {
        let key = ApiKey::new("super-secret-key").unwrap();
        let debug_output = format!("{key:?}");
        assert_eq!(debug_output, "ApiKey(*****)");
        assert!(!debug_output.contains("super-secret-key"));
    }

    #[test]
    fn test_base_url_parses_scheme_and_host() {
        let url = BaseUrl::new("http://localhost:8080").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "localhost");
        assert_eq!(url.as_ref(), "http://localhost:8080");
    }

    #[test]
    fn test_base_url_strips_trailing_slashes_and_whitespace() {
        let url = BaseUrl::new("  https://api.example.com/v2//  ").unwrap();
        assert_eq!(url.as_ref(), "https://api.example.com/v2");
        assert_eq!(url.host_name(), "api.example.com");
    }

    #[test]
    fn test_base_url_rejects_invalid_values() {
        for bad in [
            "",
            "api2.ecomailapp.cz",
            "://host",
            "https://",
            "ht-tp://host",
            "https://host?x=1",
        ] {
            assert!(
                matches!(BaseUrl::new(bad), Err(ConfigError::InvalidBaseUrl { .. })),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_base_url_default_matches_parsed_default() {
        let parsed = BaseUrl::new(DEFAULT_BASE_URL).unwrap();
        assert_eq!(BaseUrl::default(), parsed);
        assert_eq!(BaseUrl::default().host_name(), "api2.ecomailapp.cz");
    }
}
