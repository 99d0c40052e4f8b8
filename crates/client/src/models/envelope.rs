//! Property-bag envelopes.
//!
//! HubSpot wraps every CRM record as
//! `{ "id", "properties": {..}, "createdAt", "updatedAt", "archived" }`.
//! Writes send `{ "properties": {..} }`. The caller's structure is the
//! `properties` payload in both directions, so any `Serialize` type can be
//! written and any `DeserializeOwned` type can be read back.
//!
//! Decoding is all-or-nothing: either the whole body decodes into the
//! envelope and the caller's type, or the call fails with
//! [`ClientError::InvalidResponse`]. Unknown property names are ignored
//! unless the caller's type opts into `deny_unknown_fields`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ClientError, Result};
use crate::models::common::Paging;
use crate::models::scalars::HsTime;
use crate::serde_helpers::string_from_scalar;

/// Write request body: `{ "properties": <caller structure> }`.
#[derive(Debug, Serialize)]
pub struct RequestPayload<'a, T: ?Sized> {
    pub properties: &'a T,
}

impl<'a, T: ?Sized> RequestPayload<'a, T> {
    pub fn new(properties: &'a T) -> Self {
        Self { properties }
    }
}

/// A single decoded CRM record.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseResource<T> {
    pub id: String,
    pub archived: bool,
    pub properties: T,
    pub created_at: HsTime,
    pub updated_at: HsTime,
    pub archived_at: HsTime,
}

/// A page of decoded CRM records.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseResourceMulti<T> {
    pub results: Vec<ResponseResource<T>>,
    /// Total hit count; only returned by search endpoints.
    pub total: Option<u64>,
    pub paging: Option<Paging>,
}

impl<T> ResponseResourceMulti<T> {
    /// Cursor for the next page, if there is one.
    pub fn next_after(&self) -> Option<&str> {
        self.paging
            .as_ref()
            .and_then(|p| p.next.as_ref())
            .map(|n| n.after.as_str())
    }
}

/// Link from one record to a record of another object type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssociationResult {
    #[serde(deserialize_with = "string_from_scalar")]
    pub id: String,
    #[serde(rename = "type", default)]
    pub association_type: String,
}

/// Response of the association sub-path: IDs only, no properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AssociationList {
    #[serde(default)]
    pub results: Vec<AssociationResult>,
    #[serde(default)]
    pub paging: Option<Paging>,
}

impl AssociationList {
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|r| r.id.as_str())
    }
}

/// Result of a single-record fetch.
///
/// Fetching with an association type targets a different endpoint whose
/// body is an [`AssociationList`], not a property envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum GetResponse<T> {
    Resource(ResponseResource<T>),
    Associations(AssociationList),
}

impl<T> GetResponse<T> {
    pub fn into_resource(self) -> Option<ResponseResource<T>> {
        match self {
            Self::Resource(resource) => Some(resource),
            Self::Associations(_) => None,
        }
    }

    pub fn into_associations(self) -> Option<AssociationList> {
        match self {
            Self::Resource(_) => None,
            Self::Associations(list) => Some(list),
        }
    }
}

/// Wire shape of a single record before `properties` is decoded.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawResource {
    #[serde(deserialize_with = "string_from_scalar")]
    id: String,
    #[serde(default)]
    archived: bool,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    created_at: HsTime,
    #[serde(default)]
    updated_at: HsTime,
    #[serde(default)]
    archived_at: HsTime,
}

impl RawResource {
    /// Decode `properties` into the caller's type.
    ///
    /// The envelope `id` is copied into `properties.id` when the server did
    /// not return an `id` property, so a structure declaring `id` receives
    /// the record ID.
    pub(crate) fn decode<T: DeserializeOwned>(self) -> Result<ResponseResource<T>> {
        let mut properties = self.properties.unwrap_or_default();
        if !properties.contains_key("id") {
            properties.insert("id".to_string(), Value::String(self.id.clone()));
        }

        let properties = serde_json::from_value(Value::Object(properties)).map_err(|e| {
            ClientError::InvalidResponse(format!(
                "Failed to decode properties of record '{}': {}",
                self.id, e
            ))
        })?;

        Ok(ResponseResource {
            id: self.id,
            archived: self.archived,
            properties,
            created_at: self.created_at,
            updated_at: self.updated_at,
            archived_at: self.archived_at,
        })
    }
}

/// Wire shape of a list or search response.
#[derive(Debug, Deserialize)]
pub(crate) struct RawResourceMulti {
    #[serde(default)]
    results: Vec<RawResource>,
    #[serde(default)]
    total: Option<u64>,
    #[serde(default)]
    paging: Option<Paging>,
}

impl RawResourceMulti {
    pub(crate) fn decode<T: DeserializeOwned>(self) -> Result<ResponseResourceMulti<T>> {
        let results = self
            .results
            .into_iter()
            .map(RawResource::decode)
            .collect::<Result<Vec<_>>>()?;

        Ok(ResponseResourceMulti {
            results,
            total: self.total,
            paging: self.paging,
        })
    }
}

/// Parse a single-record body.
pub(crate) fn decode_resource<T: DeserializeOwned>(body: &str) -> Result<ResponseResource<T>> {
    let raw: RawResource = serde_json::from_str(body)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse record: {}", e)))?;
    raw.decode()
}

/// Parse a list/search body.
pub(crate) fn decode_resource_multi<T: DeserializeOwned>(
    body: &str,
) -> Result<ResponseResourceMulti<T>> {
    let raw: RawResourceMulti = serde_json::from_str(body)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse record list: {}", e)))?;
    raw.decode()
}

/// Parse an association sub-path body.
pub(crate) fn decode_associations(body: &str) -> Result<AssociationList> {
    serde_json::from_str(body)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse associations: {}", e)))
}
