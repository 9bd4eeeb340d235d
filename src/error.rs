//! Crate-level error types.

use std::fmt;

/// Errors produced by the tapline crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    /// A JavaScript exception surfaced while wiring the page.
    Js(String),
    /// A browser global (`window`, `document`, `body`) is unavailable.
    MissingGlobal(&'static str),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// JSON serialization failure (relay payload, analytics parameters).
    Serialize(String),
    /// The email relay answered with a non-success status.
    Relay {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Response body text, as returned by the provider.
        body: String,
    },
    /// The relay request never produced a response.
    RelayTransport(String),
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Js(msg) => write!(f, "javascript error: {msg}"),
            Self::MissingGlobal(name) => {
                write!(f, "browser global unavailable: {name}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Serialize(msg) => write!(f, "serialization error: {msg}"),
            Self::Relay { status, body } => {
                write!(f, "email relay rejected the message ({status}): {body}")
            }
            Self::RelayTransport(msg) => {
                write!(f, "email relay unreachable: {msg}")
            }
        }
    }
}

impl std::error::Error for SiteError {}

impl From<serde_json::Error> for SiteError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialize(e.to_string())
    }
}

#[cfg(feature = "web")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        use wasm_bindgen::JsCast;

        let msg = value
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Js(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relay_error_mentions_status() {
        let err = SiteError::Relay {
            status: 412,
            body: "The user ID is invalid".to_owned(),
        };
        let text = err.to_string();
        assert!(text.contains("412"));
        assert!(text.contains("user ID"));
    }

    #[test]
    fn json_errors_convert() {
        let bad = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(SiteError::from(bad), SiteError::Serialize(_)));
    }
}
