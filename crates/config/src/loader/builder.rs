//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Support loading from environment variables and direct builder methods.
//! - Build and validate the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - A private app token takes precedence over OAuth credentials.
//! - An unset base URL falls back to the public HubSpot API host.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_EXPIRY_BUFFER_SECS, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS,
    MAX_MAX_RETRIES, MAX_TIMEOUT_SECS,
};
use crate::types::{AuthConfig, AuthStrategy, Config, ConnectionConfig};

/// Configuration loader that builds config from environment variables and builder calls.
#[derive(Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    private_app_token: Option<SecretString>,
    client_id: Option<String>,
    client_secret: Option<SecretString>,
    refresh_token: Option<SecretString>,
    timeout: Option<Duration>,
    max_retries: Option<usize>,
    token_expiry_buffer_seconds: Option<u64>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    /// Missing `.env` files are silently ignored.
    ///
    /// # Errors
    ///
    /// - `ConfigError::DotenvParse` if the file has invalid syntax
    /// - `ConfigError::DotenvIo` if the file exists but cannot be read
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from `HUBSPOT_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the private app access token.
    pub fn with_private_app_token(mut self, token: String) -> Self {
        self.private_app_token = Some(SecretString::new(token.into()));
        self
    }

    /// Set the OAuth app credentials.
    pub fn with_oauth(
        mut self,
        client_id: String,
        client_secret: String,
        refresh_token: String,
    ) -> Self {
        self.client_id = Some(client_id);
        self.client_secret = Some(SecretString::new(client_secret.into()));
        self.refresh_token = Some(SecretString::new(refresh_token.into()));
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the maximum number of retries.
    pub fn with_max_retries(mut self, retries: usize) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Set the OAuth access token expiry buffer in seconds.
    pub fn with_token_expiry_buffer_seconds(mut self, seconds: u64) -> Self {
        self.token_expiry_buffer_seconds = Some(seconds);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = match self.base_url.as_deref() {
            Some(raw) => validate_and_normalize_base_url(raw)?,
            None => DEFAULT_BASE_URL.to_string(),
        };

        let strategy = if let Some(token) = self.private_app_token {
            AuthStrategy::PrivateApp { token }
        } else {
            Self::oauth_strategy(self.client_id, self.client_secret, self.refresh_token)?
        };

        let connection = ConnectionConfig {
            base_url,
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
            token_expiry_buffer_seconds: self
                .token_expiry_buffer_seconds
                .unwrap_or(DEFAULT_EXPIRY_BUFFER_SECS),
        };

        Self::validate_connection(&connection)?;

        Ok(Config {
            connection,
            auth: AuthConfig { strategy },
        })
    }

    fn oauth_strategy(
        client_id: Option<String>,
        client_secret: Option<SecretString>,
        refresh_token: Option<SecretString>,
    ) -> Result<AuthStrategy, ConfigError> {
        match (client_id, client_secret, refresh_token) {
            (None, None, None) => Err(ConfigError::MissingAuth),
            (Some(client_id), Some(client_secret), Some(refresh_token)) => {
                Ok(AuthStrategy::OAuth {
                    client_id,
                    client_secret,
                    refresh_token,
                })
            }
            (client_id, client_secret, refresh_token) => {
                let missing: Vec<&str> = [
                    client_id.is_none().then_some("client id"),
                    client_secret.is_none().then_some("client secret"),
                    refresh_token.is_none().then_some("refresh token"),
                ]
                .into_iter()
                .flatten()
                .collect();
                Err(ConfigError::IncompleteOAuth(missing.join(", ")))
            }
        }
    }

    /// Checks:
    /// - timeout is greater than 0 and not exceeding MAX_TIMEOUT_SECS
    /// - max_retries does not exceed MAX_MAX_RETRIES
    fn validate_connection(connection: &ConnectionConfig) -> Result<(), ConfigError> {
        let timeout_secs = connection.timeout.as_secs();

        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }

        if timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }

        if connection.max_retries > MAX_MAX_RETRIES {
            return Err(ConfigError::InvalidMaxRetries {
                message: format!(
                    "must be between 0 and {} (got {})",
                    MAX_MAX_RETRIES, connection.max_retries
                ),
            });
        }

        Ok(())
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub(crate) fn set_private_app_token(&mut self, token: Option<SecretString>) {
        self.private_app_token = token;
    }

    pub(crate) fn set_client_id(&mut self, client_id: Option<String>) {
        self.client_id = client_id;
    }

    pub(crate) fn set_client_secret(&mut self, secret: Option<SecretString>) {
        self.client_secret = secret;
    }

    pub(crate) fn set_refresh_token(&mut self, token: Option<SecretString>) {
        self.refresh_token = token;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_max_retries(&mut self, retries: Option<usize>) {
        self.max_retries = retries;
    }

    pub(crate) fn set_token_expiry_buffer_seconds(&mut self, seconds: Option<u64>) {
        self.token_expiry_buffer_seconds = seconds;
    }
}

/// Validates and normalizes a base URL string.
///
/// Validation rules:
/// - Treat blank/whitespace-only as missing (returns Err(ConfigError::MissingBaseUrl))
/// - Parse as an absolute URL with an http or https scheme and a host
/// - Normalize by stripping trailing slashes
fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingBaseUrl);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "base_url".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. https://api.hubapi.com): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: format!(
                "scheme must be http or https (e.g. https://api.hubapi.com), got: {scheme}"
            ),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: "host is required (e.g. https://api.hubapi.com)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
