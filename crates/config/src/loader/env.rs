//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `HUBSPOT_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::MAX_MAX_RETRIES;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_u64(var: &str, value: &str) -> Result<u64, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        message: "must be a number".to_string(),
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none("HUBSPOT_BASE_URL") {
        loader.set_base_url(Some(url));
    }
    if let Some(token) = env_var_or_none("HUBSPOT_PRIVATE_APP_TOKEN") {
        loader.set_private_app_token(Some(SecretString::new(token.into())));
    }
    if let Some(client_id) = env_var_or_none("HUBSPOT_CLIENT_ID") {
        loader.set_client_id(Some(client_id));
    }
    if let Some(secret) = env_var_or_none("HUBSPOT_CLIENT_SECRET") {
        loader.set_client_secret(Some(SecretString::new(secret.into())));
    }
    if let Some(refresh) = env_var_or_none("HUBSPOT_REFRESH_TOKEN") {
        loader.set_refresh_token(Some(SecretString::new(refresh.into())));
    }
    if let Some(timeout) = env_var_or_none("HUBSPOT_TIMEOUT") {
        let secs = parse_u64("HUBSPOT_TIMEOUT", &timeout)?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(retries) = env_var_or_none("HUBSPOT_MAX_RETRIES") {
        let value: usize = retries.parse().map_err(|_| ConfigError::InvalidValue {
            var: "HUBSPOT_MAX_RETRIES".to_string(),
            message: "must be a non-negative integer".to_string(),
        })?;
        if value > MAX_MAX_RETRIES {
            return Err(ConfigError::InvalidMaxRetries {
                message: format!("must be between 0 and {} (got {})", MAX_MAX_RETRIES, value),
            });
        }
        loader.set_max_retries(Some(value));
    }
    if let Some(buffer) = env_var_or_none("HUBSPOT_TOKEN_EXPIRY_BUFFER") {
        let secs = parse_u64("HUBSPOT_TOKEN_EXPIRY_BUFFER", &buffer)?;
        loader.set_token_expiry_buffer_seconds(Some(secs));
    }
    Ok(())
}
