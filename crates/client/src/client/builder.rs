//! Client builder for constructing [`HubSpotClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (auth_strategy)
//! - Normalizing the base URL (removing trailing slashes)
//! - Warning when tokens would travel over plain HTTP
//! - Configuring the underlying HTTP client (timeouts, redirects)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`HubSpotClient`] methods)
//! - Token storage (handled by [`SessionManager`] in `auth.rs`)
//! - Retry logic for failed requests (handled by the `retry_call!` macro)
//!
//! # Invariants
//! - `auth_strategy` is required; `base_url` defaults to the public API host
//! - The base URL is always normalized to have no trailing slashes

use std::time::Duration;

use crate::auth::{AuthStrategy, SessionManager};
use crate::client::HubSpotClient;
use crate::error::{ClientError, Result};
use hubspot_config::{
    AuthStrategy as ConfigAuthStrategy, Config,
    constants::{
        DEFAULT_BASE_URL, DEFAULT_EXPIRY_BUFFER_SECS, DEFAULT_MAX_REDIRECTS, DEFAULT_MAX_RETRIES,
        DEFAULT_TIMEOUT_SECS,
    },
};

/// Builder for creating a new [`HubSpotClient`].
///
/// # Example
///
/// ```rust,ignore
/// use hubspot_client::{HubSpotClient, AuthStrategy};
/// use secrecy::SecretString;
///
/// let client = HubSpotClient::builder()
///     .auth_strategy(AuthStrategy::PrivateApp {
///         token: SecretString::new("pat-na1-...".to_string().into()),
///     })
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// ```
pub struct HubSpotClientBuilder {
    base_url: Option<String>,
    auth_strategy: Option<AuthStrategy>,
    timeout: Duration,
    max_retries: usize,
    token_expiry_buffer_seconds: u64,
}

impl Default for HubSpotClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            auth_strategy: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            token_expiry_buffer_seconds: DEFAULT_EXPIRY_BUFFER_SECS,
        }
    }
}

impl HubSpotClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API host, e.g. `https://api.hubapi.com`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the authentication strategy.
    pub fn auth_strategy(mut self, strategy: AuthStrategy) -> Self {
        self.auth_strategy = Some(strategy);
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retries for rate-limited or unavailable responses.
    ///
    /// Default is 3 retries with exponential backoff (1s, 2s, 4s delays).
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set how long before expiry an OAuth access token is refreshed.
    ///
    /// Default is 60 seconds.
    pub fn token_expiry_buffer_seconds(mut self, buffer: u64) -> Self {
        self.token_expiry_buffer_seconds = buffer;
        self
    }

    /// Create a client builder from configuration.
    ///
    /// ```rust,ignore
    /// use hubspot_client::HubSpotClient;
    /// use hubspot_config::ConfigLoader;
    ///
    /// let config = ConfigLoader::new().load_dotenv()?.from_env()?.build()?;
    /// let client = HubSpotClient::builder().from_config(&config).build()?;
    /// ```
    pub fn from_config(mut self, config: &Config) -> Self {
        let auth_strategy = match &config.auth.strategy {
            ConfigAuthStrategy::PrivateApp { token } => AuthStrategy::PrivateApp {
                token: token.clone(),
            },
            ConfigAuthStrategy::OAuth {
                client_id,
                client_secret,
                refresh_token,
            } => AuthStrategy::OAuth {
                client_id: client_id.clone(),
                client_secret: client_secret.clone(),
                refresh_token: refresh_token.clone(),
            },
        };

        self.base_url = Some(config.connection.base_url.clone());
        self.auth_strategy = Some(auth_strategy);
        self.timeout = config.connection.timeout;
        self.max_retries = config.connection.max_retries;
        self.token_expiry_buffer_seconds = config.connection.token_expiry_buffer_seconds;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// - `"https://api.hubapi.com/"` -> `"https://api.hubapi.com"`
    /// - `"https://api.hubapi.com//"` -> `"https://api.hubapi.com"`
    fn normalize_base_url(url: String) -> String {
        url.trim().trim_end_matches('/').to_string()
    }

    /// Build the [`HubSpotClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` is blank.
    /// Returns [`ClientError::AuthFailed`] if `auth_strategy` was not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<HubSpotClient> {
        let base_url = Self::normalize_base_url(
            self.base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        );
        if base_url.is_empty() {
            return Err(ClientError::InvalidUrl("base_url is empty".to_string()));
        }

        let auth_strategy = self
            .auth_strategy
            .ok_or_else(|| ClientError::AuthFailed("auth_strategy is required".to_string()))?;

        if base_url.starts_with("http://") && !is_loopback(&base_url) {
            tracing::warn!(
                base_url = %base_url,
                "base_url uses plain HTTP; bearer tokens will be sent unencrypted"
            );
        }

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .build()?;

        Ok(HubSpotClient {
            http,
            base_url,
            session_manager: SessionManager::new(auth_strategy)
                .with_expiry_buffer(self.token_expiry_buffer_seconds),
            max_retries: self.max_retries,
        })
    }
}

/// True for `http://localhost`, `http://127.0.0.1` and `http://[::1]` hosts.
fn is_loopback(base_url: &str) -> bool {
    let rest = base_url.trim_start_matches("http://");
    ["localhost", "127.0.0.1", "[::1]"].iter().any(|host| {
        rest.strip_prefix(host)
            .is_some_and(|tail| tail.is_empty() || tail.starts_with(':') || tail.starts_with('/'))
    })
}
