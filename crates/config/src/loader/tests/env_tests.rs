//! Environment variable tests for the configuration loader builder.

use crate::loader::builder::ConfigLoader;
use crate::loader::env::env_var_or_none;
use crate::loader::error::ConfigError;
use crate::types::AuthStrategy;
use secrecy::ExposeSecret;
use serial_test::serial;
use std::time::Duration;

use super::env_lock;

const ALL_VARS: [&str; 8] = [
    "HUBSPOT_BASE_URL",
    "HUBSPOT_PRIVATE_APP_TOKEN",
    "HUBSPOT_CLIENT_ID",
    "HUBSPOT_CLIENT_SECRET",
    "HUBSPOT_REFRESH_TOKEN",
    "HUBSPOT_TIMEOUT",
    "HUBSPOT_MAX_RETRIES",
    "HUBSPOT_TOKEN_EXPIRY_BUFFER",
];

/// Run `f` with every HUBSPOT_* variable cleared except the ones given.
fn with_hubspot_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
    let mut all: Vec<(&str, Option<&str>)> = ALL_VARS.iter().map(|k| (*k, None)).collect();
    for (key, value) in vars {
        if let Some(slot) = all.iter_mut().find(|(k, _)| k == key) {
            slot.1 = Some(*value);
        }
    }
    temp_env::with_vars(all, f);
}

#[test]
#[serial]
fn test_env_private_app_token() {
    let _lock = env_lock().lock().unwrap();

    with_hubspot_env(&[("HUBSPOT_PRIVATE_APP_TOKEN", "pat-from-env")], || {
        let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
        match config.auth.strategy {
            AuthStrategy::PrivateApp { token } => {
                assert_eq!(token.expose_secret(), "pat-from-env")
            }
            other => panic!("Expected PrivateApp, got {:?}", other),
        }
    });
}

#[test]
#[serial]
fn test_env_oauth_credentials() {
    let _lock = env_lock().lock().unwrap();

    with_hubspot_env(
        &[
            ("HUBSPOT_CLIENT_ID", "client-id"),
            ("HUBSPOT_CLIENT_SECRET", "client-secret"),
            ("HUBSPOT_REFRESH_TOKEN", "refresh-token"),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            match config.auth.strategy {
                AuthStrategy::OAuth {
                    client_id,
                    refresh_token,
                    ..
                } => {
                    assert_eq!(client_id, "client-id");
                    assert_eq!(refresh_token.expose_secret(), "refresh-token");
                }
                other => panic!("Expected OAuth, got {:?}", other),
            }
        },
    );
}

#[test]
#[serial]
fn test_env_connection_settings() {
    let _lock = env_lock().lock().unwrap();

    with_hubspot_env(
        &[
            ("HUBSPOT_BASE_URL", "http://localhost:8080/"),
            ("HUBSPOT_PRIVATE_APP_TOKEN", "pat"),
            ("HUBSPOT_TIMEOUT", "90"),
            ("HUBSPOT_MAX_RETRIES", "5"),
            ("HUBSPOT_TOKEN_EXPIRY_BUFFER", "120"),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert_eq!(config.connection.base_url, "http://localhost:8080");
            assert_eq!(config.connection.timeout, Duration::from_secs(90));
            assert_eq!(config.connection.max_retries, 5);
            assert_eq!(config.connection.token_expiry_buffer_seconds, 120);
        },
    );
}

#[test]
#[serial]
fn test_builder_after_env_overrides_env() {
    let _lock = env_lock().lock().unwrap();

    with_hubspot_env(
        &[
            ("HUBSPOT_BASE_URL", "https://env.example.com"),
            ("HUBSPOT_PRIVATE_APP_TOKEN", "pat"),
        ],
        || {
            let config = ConfigLoader::new()
                .from_env()
                .unwrap()
                .with_base_url("https://builder.example.com".to_string())
                .build()
                .unwrap();
            assert_eq!(config.connection.base_url, "https://builder.example.com");
        },
    );
}

#[test]
#[serial]
fn test_invalid_timeout_env_var() {
    let _lock = env_lock().lock().unwrap();

    with_hubspot_env(&[("HUBSPOT_TIMEOUT", "soon")], || {
        match ConfigLoader::new().from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "HUBSPOT_TIMEOUT"),
            Err(e) => panic!("Expected InvalidValue, got {:?}", e),
            Ok(_) => panic!("Expected InvalidValue, got Ok"),
        }
    });
}

#[test]
#[serial]
fn test_whitespace_only_env_var_treated_as_unset() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("HUBSPOT_CLIENT_ID", Some("   "))], || {
        assert_eq!(env_var_or_none("HUBSPOT_CLIENT_ID"), None);
    });
}

#[test]
#[serial]
fn test_env_var_value_is_trimmed() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("HUBSPOT_CLIENT_ID", Some("  client-id \n"))], || {
        assert_eq!(
            env_var_or_none("HUBSPOT_CLIENT_ID"),
            Some("client-id".to_string())
        );
    });
}

#[test]
#[serial]
fn test_dotenv_disabled_skips_loading() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("DOTENV_DISABLED", Some("1"))], || {
        assert!(ConfigLoader::new().load_dotenv().is_ok());
    });
}
