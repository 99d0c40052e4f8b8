//! Connection configuration types for the HubSpot client.
//!
//! Responsibilities:
//! - Define connection settings (URL, timeouts, retries, token expiry buffer).
//! - Define the main `Config` structure combining connection and auth.
//! - Provide convenience constructors for common config patterns.
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - Default values come from `constants`, not magic numbers.

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_EXPIRY_BUFFER_SECS, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS,
};
use crate::types::auth::{AuthConfig, AuthStrategy};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for the HubSpot API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the API host (e.g., https://api.hubapi.com)
    pub base_url: String,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// Maximum number of retries for rate-limited requests
    pub max_retries: usize,
    /// Seconds before OAuth access token expiry at which it is refreshed
    #[serde(default = "default_token_expiry_buffer")]
    pub token_expiry_buffer_seconds: u64,
}

pub(crate) fn default_token_expiry_buffer() -> u64 {
    DEFAULT_EXPIRY_BUFFER_SECS
}

impl ConnectionConfig {
    fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            token_expiry_buffer_seconds: default_token_expiry_buffer(),
        }
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}

impl Config {
    /// Create a new config with the specified base URL and private app token.
    pub fn with_private_app_token(base_url: String, token: SecretString) -> Self {
        Self {
            connection: ConnectionConfig::with_base_url(base_url),
            auth: AuthConfig {
                strategy: AuthStrategy::PrivateApp { token },
            },
        }
    }

    /// Create a new config with the specified base URL and OAuth app credentials.
    pub fn with_oauth(
        base_url: String,
        client_id: String,
        client_secret: SecretString,
        refresh_token: SecretString,
    ) -> Self {
        Self {
            connection: ConnectionConfig::with_base_url(base_url),
            auth: AuthConfig {
                strategy: AuthStrategy::OAuth {
                    client_id,
                    client_secret,
                    refresh_token,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_config_default_points_at_public_api() {
        let connection = ConnectionConfig::default();
        assert_eq!(connection.base_url, "https://api.hubapi.com");
        assert_eq!(connection.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(connection.max_retries, DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn test_timeout_serialized_as_seconds() {
        let config = Config::with_private_app_token(
            "https://api.hubapi.com".to_string(),
            SecretString::new("token".to_string().into()),
        );
        let value = serde_json::to_value(&config.connection).unwrap();
        assert_eq!(value["timeout"], 30);

        let parsed: ConnectionConfig = serde_json::from_value(serde_json::json!({
            "base_url": "https://api.hubapi.com",
            "timeout": 45,
            "max_retries": 2
        }))
        .unwrap();
        assert_eq!(parsed.timeout, Duration::from_secs(45));
        assert_eq!(parsed.token_expiry_buffer_seconds, DEFAULT_EXPIRY_BUFFER_SECS);
    }
}
