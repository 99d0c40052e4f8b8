//! Main HubSpot CRM client and API methods.
//!
//! This module provides the primary [`HubSpotClient`] for interacting with
//! the HubSpot CRM v3 API. It handles authentication and OAuth access token
//! refresh.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `session`: Access token retrieval and refresh helpers (private module)
//! - `companies`: Company record methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Low-level token storage (delegated to [`crate::auth::SessionManager`])
//! - Authentication strategy configuration (handled by [`builder::HubSpotClientBuilder`])
//!
//! # Invariants
//! - A 401 response clears the access token, refreshes it and retries the
//!   call once (OAuth only; private app tokens are never retried)
//! - The `retry_call!` macro centralizes this retry pattern across all API methods

pub mod builder;
mod companies;
mod session;

use crate::auth::SessionManager;

/// Macro to wrap an async API call with one token refresh on 401 errors.
///
/// When a 401 is received and the client uses OAuth, it clears the access
/// token, refreshes it, and retries the call once.
///
/// # Usage
///
/// ```ignore
/// retry_call!(self, __token, endpoints::some_endpoint(&self.http, &self.base_url, &__token, arg1).await)
/// ```
///
/// The placeholder `__token` will be replaced with the actual auth token.
#[macro_export]
macro_rules! retry_call {
    ($self:expr, $token:ident, $call:expr) => {{
        let $token = $self.get_auth_token().await?;
        let result = $call;

        match result {
            Ok(data) => Ok(data),
            Err($crate::error::ClientError::ApiError { status: 401, .. })
                if !$self.is_private_app_auth() =>
            {
                ::tracing::debug!("Access token rejected (status 401), refreshing...");
                $self.session_manager.clear_token();
                let $token = $self.get_auth_token().await?;
                $call
            }
            Err(e) => Err(e),
        }
    }};
}

/// HubSpot CRM API client.
///
/// # Creating a Client
///
/// Use [`HubSpotClient::builder()`] to create a new client:
///
/// ```rust,ignore
/// use hubspot_client::{HubSpotClient, AuthStrategy};
/// use secrecy::SecretString;
///
/// let mut client = HubSpotClient::builder()
///     .auth_strategy(AuthStrategy::PrivateApp {
///         token: SecretString::new("pat-na1-...".to_string().into()),
///     })
///     .build()?;
/// ```
///
/// # Authentication
///
/// - `AuthStrategy::PrivateApp`: static private app token
/// - `AuthStrategy::OAuth`: refresh token exchanged for access tokens on demand
#[derive(Debug)]
pub struct HubSpotClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) session_manager: SessionManager,
    pub(crate) max_retries: usize,
}

impl HubSpotClient {
    /// Create a new client builder.
    pub fn builder() -> builder::HubSpotClientBuilder {
        builder::HubSpotClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
