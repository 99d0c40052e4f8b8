//! OAuth token endpoint.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::send_request_with_retry;
use crate::error::{ClientError, Result};
use crate::models::OAuthTokenResponse;

pub const OAUTH_TOKEN_PATH: &str = "/oauth/v1/token";

/// Exchange a refresh token for a new access token.
///
/// A rejected exchange is reported as [`ClientError::AuthFailed`].
pub async fn refresh_access_token(
    client: &Client,
    base_url: &str,
    client_id: &str,
    client_secret: &str,
    refresh_token: &str,
    max_retries: usize,
) -> Result<OAuthTokenResponse> {
    debug!("Refreshing HubSpot access token for client {}", client_id);

    let url = format!("{}{}", base_url, OAUTH_TOKEN_PATH);
    let builder = client.post(&url).form(&[
        ("grant_type", "refresh_token"),
        ("client_id", client_id),
        ("client_secret", client_secret),
        ("refresh_token", refresh_token),
    ]);

    let response = match send_request_with_retry(builder, max_retries).await {
        Ok(response) => response,
        Err(ClientError::ApiError {
            status, message, ..
        }) => {
            return Err(ClientError::AuthFailed(format!(
                "token refresh rejected ({status}): {message}"
            )));
        }
        Err(e) => return Err(e),
    };

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse token response: {}", e))
    })
}
