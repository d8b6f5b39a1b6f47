//! Error types for gtm-client

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Missing or invalid client configuration (base URL, API key, token)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network communication error
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Unparseable route path or identifier
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Response body did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Response arrived after the user navigated elsewhere
    #[error("Response discarded after navigation")]
    Stale,
}

impl ClientError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Api { status: 401, .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status: 404, .. })
    }
}

impl From<gtm_common::Error> for ClientError {
    fn from(err: gtm_common::Error) -> Self {
        match err {
            gtm_common::Error::Config(msg) => ClientError::Config(msg),
            gtm_common::Error::InvalidInput(msg) => ClientError::InvalidInput(msg),
            other => ClientError::Decode(other.to_string()),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
