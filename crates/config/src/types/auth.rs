//! Authentication types for HubSpot client configuration.
//!
//! Responsibilities:
//! - Define authentication strategies (private app token, OAuth refresh token).
//! - Handle serialization of secret values.
//!
//! Does NOT handle:
//! - Token exchange or refresh (see client crate).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Strategy for authenticating with HubSpot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AuthStrategy {
    /// Private app access token sent as a static bearer token.
    #[serde(rename = "private_app")]
    PrivateApp {
        #[serde(with = "secret_string")]
        token: SecretString,
    },
    /// OAuth app credentials; access tokens are obtained from the refresh token.
    #[serde(rename = "oauth")]
    OAuth {
        client_id: String,
        #[serde(with = "secret_string")]
        client_secret: SecretString,
        #[serde(with = "secret_string")]
        refresh_token: SecretString,
    },
}

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// The authentication strategy to use.
    #[serde(flatten)]
    pub strategy: AuthStrategy,
}
