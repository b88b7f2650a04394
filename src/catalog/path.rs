//! Path template expansion.
//!
//! Templates use `{name}` placeholders, e.g. `lists/{list_id}/subscriber/{email}`.
//! Identifier values are percent-encoded before substitution so that emails,
//! phone numbers with `+` and similar values form a single path segment.

use std::fmt::Display;

/// Percent-encodes a single path segment.
///
/// # Example
///
/// ```rust
/// use ecomail_api::catalog::encode_segment;
///
/// assert_eq!(encode_segment("LIST1"), "LIST1");
/// assert_eq!(encode_segment("a+b@c.cz"), "a%2Bb%40c.cz");
/// ```
#[must_use]
pub fn encode_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Builds a path from a template by interpolating identifiers.
///
/// Each `(name, value)` pair replaces `{name}` with the percent-encoded
/// value. Placeholders without a matching pair are left as-is.
///
/// # Example
///
/// ```rust
/// use ecomail_api::catalog::build_path;
///
/// let path = build_path(
///     "lists/{list_id}/subscriber/{email}",
///     &[("list_id", "12"), ("email", "jan@example.cz")],
/// );
/// assert_eq!(path, "lists/12/subscriber/jan%40example.cz");
/// ```
#[must_use]
pub fn build_path<V: Display>(template: &str, ids: &[(&str, V)]) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &encode_segment(&value.to_string()));
    }

    result
}

/// Returns the placeholder names of a template, in order of appearance.
#[must_use]
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        names.push(&rest[start + 1..start + len]);
        rest = &rest[start + len + 1..];
    }
    names
}
