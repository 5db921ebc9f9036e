//! Configuration types for the ENOT SDK

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::EnotError;
use crate::types::Credentials;

/// Default gateway host
pub const DEFAULT_API_HOST: &str = "https://enot.io";

/// Environment variables read by [`ClientConfig::from_env`]
pub const ENV_MERCHANT_ID: &str = "ENOT_MERCHANT_ID";
pub const ENV_SECRET_WORD: &str = "ENOT_SECRET_WORD";
pub const ENV_API_KEY: &str = "ENOT_API_KEY";
pub const ENV_EMAIL: &str = "ENOT_EMAIL";

/// Merchant configuration
///
/// Keys use the gateway's camelCase naming. Unknown keys are rejected so a
/// misspelled credential fails loudly instead of being dropped.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ClientConfig {
    /// Public merchant identifier
    #[serde(default)]
    pub merchant_id: String,

    /// Shared secret used to sign payment links
    #[serde(default)]
    pub secret_word: String,

    /// Key for balance and payout endpoints
    #[serde(default)]
    pub api_key: String,

    /// Account e-mail paired with the API key
    #[serde(default)]
    pub email: String,
}

impl ClientConfig {
    pub fn from_json_str(json: &str) -> Result<Self, EnotError> {
        serde_json::from_str(json).map_err(|e| EnotError::ConfigError(e.to_string()))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, EnotError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Read every credential from `ENOT_*` environment variables
    pub fn from_env() -> Result<Self, EnotError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, EnotError> {
        let var = |name: &str| lookup(name).ok_or_else(|| EnotError::MissingEnv(name.to_string()));

        Ok(Self {
            merchant_id: var(ENV_MERCHANT_ID)?,
            secret_word: var(ENV_SECRET_WORD)?,
            api_key: var(ENV_API_KEY)?,
            email: var(ENV_EMAIL)?,
        })
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(
            self.merchant_id.clone(),
            self.secret_word.clone(),
            self.api_key.clone(),
            self.email.clone(),
        )
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.credentials(), f)
    }
}

impl From<ClientConfig> for Credentials {
    fn from(config: ClientConfig) -> Self {
        Credentials {
            merchant_id: config.merchant_id,
            secret_word: config.secret_word,
            api_key: config.api_key,
            email: config.email,
        }
    }
}

/// HTTP API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    /// Base host every request path is resolved against
    pub host: String,

    /// Connect timeout in milliseconds
    pub connect_timeout_ms: u64,

    /// Total request timeout in milliseconds
    pub timeout_ms: u64,

    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_API_HOST.to_string(),
            connect_timeout_ms: 2_000,
            timeout_ms: 4_000,
            user_agent: concat!("enot-rs/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ApiConfig {
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_timeouts(mut self, connect_timeout_ms: u64, timeout_ms: u64) -> Self {
        self.connect_timeout_ms = connect_timeout_ms;
        self.timeout_ms = timeout_ms;
        self
    }
}
