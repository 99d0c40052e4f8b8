//! Data models for HubSpot CRM requests and responses.
//!
//! Types are organized by concern in submodules and re-exported here
//! for convenient access.

pub mod auth;
pub mod common;
pub mod companies;
pub mod envelope;
pub mod query;
pub mod scalars;

pub use auth::OAuthTokenResponse;
pub use common::{HubSpotErrorBody, NextPage, Paging};
pub use companies::{
    COMPANY_OBJECT_TYPE, Company, DEFAULT_COMPANY_PROPERTIES, PRODUCT_NAME_DELIMITER,
};
pub use envelope::{
    AssociationList, AssociationResult, GetResponse, RequestPayload, ResponseResource,
    ResponseResourceMulti,
};
pub use query::{
    Filter, FilterGroup, FilterOperator, RequestQueryOption, RequestSearchOption, Sort,
    SortDirection,
};
pub use scalars::{HsStr, HsTime};
