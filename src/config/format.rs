//! Response format selection.

use std::fmt;

/// How successful response bodies are decoded.
///
/// The format is fixed per client; derived clients inherit it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResponseFormat {
    /// Parse JSON; object nodes stay ordered key-value mappings.
    #[default]
    JsonArray,
    /// Parse JSON; object nodes are exposed as records with named fields.
    JsonObject,
    /// Never parse; return the raw body text.
    PlainText,
}

impl ResponseFormat {
    /// Returns `true` if this format attempts to parse the body as JSON.
    #[must_use]
    pub const fn parses_json(&self) -> bool {
        matches!(self, Self::JsonArray | Self::JsonObject)
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JsonArray => write!(f, "jsona"),
            Self::JsonObject => write!(f, "jsono"),
            Self::PlainText => write!(f, "plaintext"),
        }
    }
}
