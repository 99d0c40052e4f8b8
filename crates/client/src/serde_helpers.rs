//! Serde helpers for HubSpot's loose JSON typing.
//!
//! Responsibilities:
//! - Accept either JSON strings or scalars where HubSpot is inconsistent
//!   (object IDs, property values written by integrations).
//! - Parse the timestamp encodings HubSpot returns for date properties.
//!
//! Invariants / assumptions:
//! - Property values are strings on the v3 wire, but numbers and booleans
//!   occasionally appear; they are converted to their string form.
//! - These helpers must not log property values.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::Deserialize;
use serde::de::Error as _;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StringOrScalar {
    String(String),
    U64(u64),
    I64(i64),
    F64(f64),
    Bool(bool),
}

impl StringOrScalar {
    fn into_string(self) -> String {
        match self {
            Self::String(s) => s,
            Self::U64(v) => v.to_string(),
            Self::I64(v) => v.to_string(),
            Self::F64(v) => v.to_string(),
            Self::Bool(v) => v.to_string(),
        }
    }
}

pub fn opt_string_from_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<StringOrScalar>::deserialize(deserializer)?;
    Ok(value.map(StringOrScalar::into_string))
}

pub fn string_from_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    StringOrScalar::deserialize(deserializer).map(StringOrScalar::into_string)
}

/// Parse a HubSpot timestamp.
///
/// Accepts RFC 3339 (`2019-10-30T03:30:17.883Z`), epoch milliseconds
/// (`1572406217883`) and date-only values (`2019-10-30`, midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(millis) = raw.parse::<i64>() {
        return Utc.timestamp_millis_opt(millis).single();
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Deserialize an optional timestamp; `null` and `""` both yield `None`.
pub fn opt_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match opt_string_from_scalar(deserializer)? {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => parse_timestamp(&s)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {s}"))),
    }
}
