//! Query parameter values and merging.
//!
//! Query parameters come from two places: the defaults carried by an
//! [`EcomailConfig`](crate::EcomailConfig) and the parameters a single call
//! passes. [`merge_query`] combines them with call-site values winning.

use std::collections::BTreeMap;
use std::fmt;

/// A scalar query parameter value.
///
/// # Example
///
/// ```rust
/// use ecomail_api::QueryValue;
///
/// assert_eq!(QueryValue::from(2).to_string(), "2");
/// assert_eq!(QueryValue::from("sent").to_string(), "sent");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum QueryValue {
    /// A text value.
    Text(String),
    /// An integer value.
    Int(i64),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Int(number) => write!(f, "{number}"),
        }
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

/// Query parameters keyed by name.
///
/// A sorted map keeps the encoded query string deterministic.
pub type QueryParams = BTreeMap<String, QueryValue>;

/// Merges call-site parameters over default parameters.
///
/// On a key collision the call-site value is kept; defaults never override
/// what a caller passed explicitly.
///
/// # Example
///
/// ```rust
/// use ecomail_api::{merge_query, QueryParams, QueryValue};
///
/// let mut defaults = QueryParams::new();
/// defaults.insert("page".to_string(), QueryValue::from(1));
/// defaults.insert("per_page".to_string(), QueryValue::from(50));
///
/// let mut call = QueryParams::new();
/// call.insert("page".to_string(), QueryValue::from(3));
///
/// let merged = merge_query(&defaults, Some(&call));
/// assert_eq!(merged["page"], QueryValue::from(3));
/// assert_eq!(merged["per_page"], QueryValue::from(50));
/// ```
#[must_use]
pub fn merge_query(defaults: &QueryParams, call: Option<&QueryParams>) -> QueryParams {
    let mut merged = defaults.clone();
    if let Some(call) = call {
        for (key, value) in call {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

/// Percent-encodes parameters into an `application/x-www-form-urlencoded`
/// style query string (without the leading `?`).
#[must_use]
pub fn encode_query(params: &QueryParams) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(&value.to_string())
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, QueryValue)]) -> QueryParams {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_merge_prefers_call_site_values() {
        let defaults = params(&[("page", 1.into()), ("filters", "a".into())]);
        let call = params(&[("page", 7.into())]);

        let merged = merge_query(&defaults, Some(&call));

        assert_eq!(merged.get("page"), Some(&QueryValue::Int(7)));
        assert_eq!(merged.get("filters"), Some(&QueryValue::from("a")));
    }

    #[test]
    fn test_merge_without_call_site_returns_defaults() {
        let defaults = params(&[("page", 2.into())]);
        assert_eq!(merge_query(&defaults, None), defaults);
    }

    #[test]
    fn test_merge_does_not_touch_inputs() {
        let defaults = params(&[("page", 2.into())]);
        let call = params(&[("page", 5.into()), ("extra", "x".into())]);
        let _ = merge_query(&defaults, Some(&call));

        assert_eq!(defaults.len(), 1);
        assert_eq!(call.len(), 2);
    }

    #[test]
    fn test_encode_query_percent_encodes_keys_and_values() {
        let query = params(&[
            ("filters[status]", "sent & done".into()),
            ("page", 2.into()),
        ]);
        assert_eq!(
            encode_query(&query),
            "filters%5Bstatus%5D=sent%20%26%20done&page=2"
        );
    }

    #[test]
    fn test_encode_empty_query() {
        assert_eq!(encode_query(&QueryParams::new()), "");
    }

    #[test]
    fn test_query_value_display() {
        assert_eq!(QueryValue::Int(-4).to_string(), "-4");
        assert_eq!(QueryValue::from(String::from("x y")).to_string(), "x y");
    }
}
