//! Storefront error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors a catalog source can report.
///
/// `CatalogQuery` never propagates these; a failed fetch becomes
/// `CatalogStatus::Error`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    Request(String),

    /// HTTP error response.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Failed to decode the response body.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Request timeout.
    #[error("Request timed out")]
    Timeout,

    /// The source cannot serve a catalog at all.
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Parse(e.to_string())
    }
}

/// Errors raised while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parse error.
    #[error("Invalid TOML config: {0}")]
    Toml(String),

    /// JSON parse error.
    #[error("Invalid JSON config: {0}")]
    Json(String),

    /// Parsed but semantically invalid.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Toml(e.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::Http {
            status: 503,
            message: "down".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: down");
        assert_eq!(FetchError::Timeout.to_string(), "Request timed out");
    }

    #[test]
    fn test_json_error_maps_to_parse() {
        let err: FetchError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, FetchError::Parse(_)));
    }
}
