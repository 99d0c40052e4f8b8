//! Client-level token management helpers.
//!
//! # What this module does NOT handle:
//! - Token storage and expiry tracking (handled by [`SessionManager`] in `auth.rs`)
//! - The token HTTP call (handled by [`endpoints::refresh_access_token`])
//!
//! # Invariants
//! - [`HubSpotClient::get_auth_token`] requires `&mut self` because it may refresh the token
//! - Private app tokens are returned directly and never refreshed
//!
//! [`SessionManager`]: crate::auth::SessionManager

use crate::auth::AuthStrategy;
use crate::client::HubSpotClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use secrecy::ExposeSecret;

impl HubSpotClient {
    /// Get the current bearer token, refreshing the OAuth access token if
    /// it is missing or inside the expiry buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthFailed`] if the refresh is rejected.
    pub(crate) async fn get_auth_token(&mut self) -> Result<String> {
        if self.session_manager.is_private_app()
            && let Some(token) = self.session_manager.get_bearer_token()
        {
            return Ok(token.to_string());
        }

        if self.session_manager.is_token_expired() || self.session_manager.token_expires_soon() {
            self.refresh_access_token().await?;
        }

        self.session_manager
            .get_bearer_token()
            .map(|s| s.to_string())
            .ok_or_else(|| ClientError::AuthFailed("no access token available".to_string()))
    }

    /// Check if the client is using a private app token.
    pub fn is_private_app_auth(&self) -> bool {
        self.session_manager.is_private_app()
    }

    /// Exchange the refresh token for a new access token.
    ///
    /// A rotated refresh token in the response replaces the stored one.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthFailed`] for private app auth or when the
    /// token endpoint rejects the exchange.
    pub async fn refresh_access_token(&mut self) -> Result<String> {
        let AuthStrategy::OAuth {
            client_id,
            client_secret,
            refresh_token,
        } = self.session_manager.strategy()
        else {
            return Err(ClientError::AuthFailed(
                "Cannot refresh a private app token".to_string(),
            ));
        };

        let response = endpoints::refresh_access_token(
            &self.http,
            &self.base_url,
            client_id,
            client_secret.expose_secret(),
            refresh_token.expose_secret(),
            self.max_retries,
        )
        .await?;

        if let Some(rotated) = response.refresh_token {
            self.session_manager.set_refresh_token(rotated);
        }
        self.session_manager
            .set_access_token(response.access_token.clone(), response.expires_in);

        Ok(response.access_token)
    }
}
