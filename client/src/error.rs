//! Transport errors

use thiserror::Error;

/// Error returned by any call that reaches the gateway
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Connection failed: {0}")]
    Connect(#[source] reqwest::Error),

    #[error("Request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    #[error("Gateway returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Expected a JSON object in response, got {0}")]
    UnexpectedShape(&'static str),

    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),
}

impl ApiError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Timeout(_))
    }

    pub fn is_connect(&self) -> bool {
        matches!(self, ApiError::Connect(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries credentials in its query string.
        let err = err.without_url();
        // A connect timeout reports both flags; classify it as a timeout.
        if err.is_timeout() {
            ApiError::Timeout(err)
        } else if err.is_connect() {
            ApiError::Connect(err)
        } else {
            ApiError::Http(err)
        }
    }
}

/// Result type for gateway calls
pub type ApiResult<T> = Result<T, ApiError>;
