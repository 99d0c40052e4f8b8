//! OAuth token endpoint response.

use serde::Deserialize;

/// Response from `POST /oauth/v1/token`.
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthTokenResponse {
    pub access_token: String,
    /// HubSpot may rotate the refresh token; absent means keep the old one.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Lifetime in seconds.
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub token_type: Option<String>,
}
