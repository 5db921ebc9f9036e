//! Error types for the ENOT SDK

use thiserror::Error;

/// Main error type for configuration and data-model failures
#[derive(Error, Debug)]
pub enum EnotError {
    // ============ Configuration Errors ============
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Missing environment variable: {0}")]
    MissingEnv(String),

    // ============ Data Model Errors ============
    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    #[error("Invalid parameter {key}: {reason}")]
    InvalidParameter { key: String, reason: String },

    // ============ Serialization Errors ============
    #[error("Serialization failed: {0}")]
    SerializationError(String),

    #[error("Deserialization failed: {0}")]
    DeserializationError(String),

    // ============ General Errors ============
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for EnotError {
    fn from(err: std::io::Error) -> Self {
        EnotError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for EnotError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            EnotError::DeserializationError(err.to_string())
        } else {
            EnotError::SerializationError(err.to_string())
        }
    }
}

impl From<hex::FromHexError> for EnotError {
    fn from(err: hex::FromHexError) -> Self {
        EnotError::InvalidSignature(err.to_string())
    }
}
