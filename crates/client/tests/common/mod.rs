//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the HubSpot client.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock setup (use wiremock directly in tests)
//! - Test-specific assertions or test logic

use std::time::Duration;

#[allow(unused_imports)]
pub use hubspot_client::testing::load_fixture;

// Re-export commonly used types for test convenience
#[allow(unused_imports)]
pub use hubspot_client::endpoints;
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use hubspot_client::{AuthStrategy, HubSpotClient};
use secrecy::SecretString;

/// Private app token used by [`private_app_client`].
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "pat-na1-test-token";

/// A client pointed at the mock server using a private app token.
#[allow(dead_code)]
pub fn private_app_client(server: &MockServer) -> HubSpotClient {
    HubSpotClient::builder()
        .base_url(server.uri())
        .auth_strategy(AuthStrategy::PrivateApp {
            token: SecretString::new(TEST_TOKEN.to_string().into()),
        })
        .max_retries(1)
        .build()
        .expect("client should build")
}

/// A client pointed at the mock server using OAuth credentials.
#[allow(dead_code)]
pub fn oauth_client(server: &MockServer) -> HubSpotClient {
    HubSpotClient::builder()
        .base_url(server.uri())
        .auth_strategy(AuthStrategy::OAuth {
            client_id: "test-client-id".to_string(),
            client_secret: SecretString::new("test-client-secret".to_string().into()),
            refresh_token: SecretString::new("test-refresh-token".to_string().into()),
        })
        .max_retries(1)
        .build()
        .expect("client should build")
}

/// Advance Tokio's paused clock and yield so sleepers can observe the change.
#[allow(dead_code)]
pub async fn advance_and_yield(duration: Duration) {
    tokio::time::advance(duration).await;
    tokio::task::yield_now().await;
}

/// Assert that a task has not completed after yielding to the scheduler.
#[allow(dead_code)]
pub async fn assert_pending<T>(handle: &tokio::task::JoinHandle<T>, context: &str) {
    tokio::task::yield_now().await;
    assert!(!handle.is_finished(), "Expected pending task: {}", context);
}
