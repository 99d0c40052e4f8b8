//! REST API endpoint implementations.
//!
//! Free functions taking the HTTP client, base URL and bearer token
//! explicitly. They hold no state; token refresh and the 401 retry live in
//! [`crate::client::HubSpotClient`].

mod auth;
mod objects;
mod request;
pub mod url_encoding;

pub use auth::{OAUTH_TOKEN_PATH, refresh_access_token};
pub use objects::{
    CRM_OBJECTS_PATH, create_object, delete_object, get_object, list_objects, object_path,
    search_objects, update_object,
};
pub use request::{send_create_request_with_retry, send_request_with_retry};
