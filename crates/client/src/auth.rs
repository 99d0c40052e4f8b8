//! Authentication strategies and access token management.

use secrecy::{ExposeSecret, SecretString};
use hubspot_config::constants::DEFAULT_EXPIRY_BUFFER_SECS;
use std::time::{Duration, Instant};

/// Strategy for authenticating with HubSpot.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// Private app access token.
    /// Sent as-is on every request; never refreshed.
    PrivateApp { token: SecretString },
    /// OAuth app credentials.
    /// The client exchanges the refresh token for short-lived access tokens.
    OAuth {
        client_id: String,
        client_secret: SecretString,
        refresh_token: SecretString,
    },
}

/// Holds the auth strategy and the current OAuth access token.
#[derive(Debug)]
pub struct SessionManager {
    auth_strategy: AuthStrategy,
    access_token: Option<AccessToken>,
    expiry_buffer_seconds: u64,
}

/// OAuth access token with expiry information.
#[derive(Debug, Clone)]
struct AccessToken {
    value: SecretString,
    expires_at: Option<Instant>,
}

impl AccessToken {
    fn new(value: SecretString, ttl_seconds: Option<u64>) -> Self {
        Self {
            value,
            expires_at: ttl_seconds.map(|ttl| Instant::now() + Duration::from_secs(ttl)),
        }
    }

    fn is_expired(&self) -> bool {
        self.expires_at
            .map(|exp| exp.saturating_duration_since(Instant::now()).is_zero())
            .unwrap_or(false)
    }

    /// True when the remaining lifetime is inside the buffer window.
    fn will_expire_soon(&self, buffer_seconds: u64) -> bool {
        self.expires_at
            .map(|exp| {
                exp.saturating_duration_since(Instant::now()) < Duration::from_secs(buffer_seconds)
            })
            .unwrap_or(false)
    }
}

impl SessionManager {
    pub fn new(strategy: AuthStrategy) -> Self {
        Self {
            auth_strategy: strategy,
            access_token: None,
            expiry_buffer_seconds: DEFAULT_EXPIRY_BUFFER_SECS,
        }
    }

    /// Set how long before expiry an access token is proactively refreshed.
    pub fn with_expiry_buffer(mut self, seconds: u64) -> Self {
        self.expiry_buffer_seconds = seconds;
        self
    }

    pub fn strategy(&self) -> &AuthStrategy {
        &self.auth_strategy
    }

    /// Check if we're using a private app token (no refresh needed).
    pub fn is_private_app(&self) -> bool {
        matches!(self.auth_strategy, AuthStrategy::PrivateApp { .. })
    }

    /// Bearer token for API requests, if one is available.
    pub fn get_bearer_token(&self) -> Option<&str> {
        match &self.auth_strategy {
            AuthStrategy::PrivateApp { token } => Some(token.expose_secret()),
            AuthStrategy::OAuth { .. } => {
                self.access_token.as_ref().map(|t| t.value.expose_secret())
            }
        }
    }

    /// Store an access token obtained from the token endpoint.
    pub fn set_access_token(&mut self, token: String, ttl_seconds: Option<u64>) {
        self.access_token = Some(AccessToken::new(
            SecretString::new(token.into()),
            ttl_seconds,
        ));
    }

    /// Replace the refresh token after the server rotates it.
    pub fn set_refresh_token(&mut self, token: String) {
        if let AuthStrategy::OAuth { refresh_token, .. } = &mut self.auth_strategy {
            *refresh_token = SecretString::new(token.into());
        }
    }

    /// Returns false for private app auth, true if no access token exists.
    fn check_token<F>(&self, check: F) -> bool
    where
        F: FnOnce(&AccessToken) -> bool,
    {
        if self.is_private_app() {
            return false;
        }
        self.access_token.as_ref().map(check).unwrap_or(true)
    }

    pub fn is_token_expired(&self) -> bool {
        self.check_token(|t| t.is_expired())
    }

    /// Check if the access token is missing or inside the expiry buffer.
    pub fn token_expires_soon(&self) -> bool {
        let buffer = self.expiry_buffer_seconds;
        self.check_token(|t| t.will_expire_soon(buffer))
    }

    /// Drop the access token so the next request refreshes it.
    pub fn clear_token(&mut self) {
        self.access_token = None;
    }
}
