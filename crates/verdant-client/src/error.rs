//! Client error types.

use thiserror::Error;
use verdant_cache::CacheError;

/// Errors raised by the storefront client logic.
///
/// None of these are fatal to the UI: callers log them and fall back to an
/// empty or unchanged state.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Persisted state could not be read or written.
    #[error("Storage error: {0}")]
    Storage(#[from] CacheError),

    /// The suggestion endpoint answered with a non-success status.
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    /// The request could not be sent or timed out.
    #[error("Request error: {0}")]
    Request(String),

    /// The response body was not the expected JSON.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Request(e.to_string())
    }
}

impl From<toml::de::Error> for ClientError {
    fn from(e: toml::de::Error) -> Self {
        ClientError::Config(e.to_string())
    }
}
