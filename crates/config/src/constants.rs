//! Centralized constants for the HubSpot client workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Public HubSpot API host used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.hubapi.com";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default buffer before OAuth access token expiry to proactively refresh it.
pub const DEFAULT_EXPIRY_BUFFER_SECS: u64 = 60;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Default maximum number of retries for rate-limited or unavailable responses.
pub const DEFAULT_MAX_RETRIES: usize = 3;

// =============================================================================
// Configuration Bounds
// =============================================================================

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Maximum allowed value for max_retries.
pub const MAX_MAX_RETRIES: usize = 10;
