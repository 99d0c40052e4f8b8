//! Nullable property scalars.
//!
//! HubSpot treats an omitted property differently from one sent as an empty
//! string: omitted leaves the stored value untouched on a partial update,
//! `""` clears it. [`HsStr`] and [`HsTime`] keep that distinction explicit.
//! An absent wrapper serializes as `null` (and is skipped entirely by resource
//! structs via `skip_serializing_if`); `null` in a response decodes to absent.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::serde_helpers::{opt_string_from_scalar, opt_timestamp};

/// String-valued property that may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HsStr(Option<String>);

impl HsStr {
    /// Create a present value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(Some(value.into()))
    }

    /// Create an absent value.
    pub const fn absent() -> Self {
        Self(None)
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn into_inner(self) -> Option<String> {
        self.0
    }
}

/// Formats the value, or nothing when absent.
impl fmt::Display for HsStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or_default())
    }
}

impl From<&str> for HsStr {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for HsStr {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<Option<String>> for HsStr {
    fn from(value: Option<String>) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for HsStr {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for HsStr {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl Serialize for HsStr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Some(value) => serializer.serialize_str(value),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for HsStr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        opt_string_from_scalar(deserializer).map(Self)
    }
}

/// Timestamp-valued property that may be absent.
///
/// Serialized as RFC 3339 in UTC. Decoding also accepts epoch milliseconds
/// and date-only values; an empty string decodes to absent since it cannot
/// name an instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HsTime(Option<DateTime<Utc>>);

impl HsTime {
    pub fn new(value: DateTime<Utc>) -> Self {
        Self(Some(value))
    }

    pub const fn absent() -> Self {
        Self(None)
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        self.0.as_ref()
    }

    fn format(value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

impl fmt::Display for HsTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => f.write_str(&Self::format(value)),
            None => Ok(()),
        }
    }
}

impl From<DateTime<Utc>> for HsTime {
    fn from(value: DateTime<Utc>) -> Self {
        Self::new(value)
    }
}

impl Serialize for HsTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Some(value) => serializer.serialize_str(&Self::format(value)),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for HsTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        opt_timestamp(deserializer).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_absent_str_serializes_as_null() {
        assert_eq!(serde_json::to_string(&HsStr::absent()).unwrap(), "null");
        let back: HsStr = serde_json::from_str("null").unwrap();
        assert!(back.is_absent());
    }

    #[test]
    fn test_empty_str_is_present() {
        let empty = HsStr::new("");
        assert!(empty.is_present());
        assert_eq!(serde_json::to_string(&empty).unwrap(), r#""""#);
        let back: HsStr = serde_json::from_str(r#""""#).unwrap();
        assert_eq!(back, empty);
        assert_ne!(back, HsStr::absent());
    }

    #[test]
    fn test_str_display() {
        assert_eq!(HsStr::new("Acme").to_string(), "Acme");
        assert_eq!(HsStr::absent().to_string(), "");
        assert_eq!(HsStr::new("Acme"), "Acme");
    }

    #[test]
    fn test_str_accepts_numbers() {
        let value: HsStr = serde_json::from_str("42").unwrap();
        assert_eq!(value, "42");
    }

    #[test]
    fn test_time_round_trip_keeps_millis() {
        let instant = Utc.timestamp_millis_opt(1_572_406_217_883).unwrap();
        let time = HsTime::new(instant);
        let json = serde_json::to_string(&time).unwrap();
        assert_eq!(json, r#""2019-10-30T03:30:17.883Z""#);
        let back: HsTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, time);
    }

    #[test]
    fn test_time_null_and_empty_are_absent() {
        let null: HsTime = serde_json::from_str("null").unwrap();
        assert!(null.is_absent());
        let empty: HsTime = serde_json::from_str(r#""""#).unwrap();
        assert!(empty.is_absent());
        assert_eq!(HsTime::absent().to_string(), "");
    }

    #[test]
    fn test_time_rejects_garbage() {
        assert!(serde_json::from_str::<HsTime>(r#""yesterday""#).is_err());
    }
}
