//! HubSpot CRM API client.
//!
//! This crate provides a typed client for the HubSpot CRM v3 object API.
//! Records are projected onto caller-defined property structs: the
//! [`models::Company`] struct covers the well-known company properties, and
//! callers add custom properties by embedding it with `#[serde(flatten)]`.
//! Private app tokens and OAuth refresh tokens are both supported.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
mod serde_helpers;
pub mod tracing;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::{AuthStrategy, SessionManager};
pub use client::HubSpotClient;
pub use client::builder::HubSpotClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    AssociationList, AssociationResult, Company, Filter, FilterGroup, FilterOperator,
    GetResponse, HsStr, HsTime, RequestQueryOption, RequestSearchOption, ResponseResource,
    ResponseResourceMulti, Sort, SortDirection,
};
