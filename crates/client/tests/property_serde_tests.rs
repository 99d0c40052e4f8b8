//! Property-based tests for property scalars and request shaping.
//!
//! This module uses proptest to verify:
//! - `HsStr` keeps absent and empty-string values distinct through the wire
//! - `HsTime` roundtrips through its RFC 3339 form
//! - Default property substitution never merges with an explicit list
//! - Product-name add/remove keep the no-dedup, first-match semantics
//!
//! # Test Coverage
//! - Serde roundtrip invariants: serialize -> deserialize == original
//! - Absent fields are omitted from write bodies

use chrono::{TimeZone, Utc};
use hubspot_client::models::DEFAULT_COMPANY_PROPERTIES;
use hubspot_client::{Company, HsStr, HsTime, RequestQueryOption};
use proptest::prelude::*;

// =============================================================================
// Helper Strategies
// =============================================================================

/// Optional strings including the empty string.
fn hs_str_strategy() -> impl Strategy<Value = HsStr> {
    prop_oneof![
        Just(HsStr::absent()),
        Just(HsStr::new("")),
        "[ -~]{1,40}".prop_map(|s: String| HsStr::new(s)),
    ]
}

/// Optional millisecond-precision timestamps between 2000 and 2099.
fn hs_time_strategy() -> impl Strategy<Value = HsTime> {
    prop_oneof![
        Just(HsTime::absent()),
        (946_684_800_000i64..4_102_444_800_000i64).prop_map(|ms| {
            HsTime::new(Utc.timestamp_millis_opt(ms).single().expect("valid millis"))
        }),
    ]
}

/// Property names as HubSpot allows them.
fn property_name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,20}"
}

/// Product names without the delimiter.
fn product_name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ]{1,12}"
}

// =============================================================================
// Scalar Roundtrips
// =============================================================================

proptest! {
    #[test]
    fn prop_hs_str_roundtrip(value in hs_str_strategy()) {
        let json = serde_json::to_string(&value).unwrap();
        let parsed: HsStr = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&parsed, &value);
        prop_assert_eq!(parsed.is_present(), value.is_present());
    }

    #[test]
    fn prop_hs_time_roundtrip(value in hs_time_strategy()) {
        let json = serde_json::to_string(&value).unwrap();
        let parsed: HsTime = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, value);
    }

    #[test]
    fn prop_company_body_contains_only_present_fields(
        name in hs_str_strategy(),
        domain in hs_str_strategy(),
        created in hs_time_strategy(),
    ) {
        let company = Company {
            name: name.clone(),
            domain: domain.clone(),
            hs_create_date: created,
            ..Company::default()
        };
        let body = serde_json::to_value(&company).unwrap();
        let object = body.as_object().unwrap();

        prop_assert_eq!(object.contains_key("name"), name.is_present());
        prop_assert_eq!(object.contains_key("domain"), domain.is_present());
        prop_assert_eq!(object.contains_key("hs_createdate"), created.is_present());
        prop_assert!(object.values().all(|v| !v.is_null()));

        let parsed: Company = serde_json::from_value(body).unwrap();
        prop_assert_eq!(parsed, company);
    }
}

// =============================================================================
// Request Shaping
// =============================================================================

proptest! {
    #[test]
    fn prop_setup_properties_replaces_or_defaults(
        explicit in prop::collection::vec(property_name_strategy(), 0..6),
        custom in prop::collection::vec(property_name_strategy(), 0..3),
    ) {
        let option = RequestQueryOption::new()
            .with_properties(explicit.clone())
            .with_custom_properties(custom.clone());
        let resolved = option.setup_properties(DEFAULT_COMPANY_PROPERTIES);

        let mut expected: Vec<String> = if explicit.is_empty() {
            DEFAULT_COMPANY_PROPERTIES.iter().map(|s| s.to_string()).collect()
        } else {
            explicit.clone()
        };
        expected.extend(custom.iter().cloned());

        prop_assert_eq!(&resolved.properties, &expected);
        prop_assert!(resolved.custom_properties.is_empty());
        // Input is left untouched.
        prop_assert_eq!(&option.properties, &explicit);
        prop_assert_eq!(&option.custom_properties, &custom);
    }

    #[test]
    fn prop_add_then_remove_restores_value(
        existing in prop::collection::vec(product_name_strategy(), 0..5),
        added in product_name_strategy(),
    ) {
        let mut company = Company::default();
        for name in &existing {
            company.add_product_name(name);
        }
        let before = company.product_names.clone();

        company.add_product_name(&added);
        prop_assert_eq!(company.product_names().len(), existing.len() + 1);

        // Removing drops the first occurrence, which differs from the
        // appended one only when `added` was already present.
        company.remove_product_name(&added);
        let mut expected = existing.clone();
        expected.push(added.clone());
        if let Some(pos) = expected.iter().position(|n| n == &added) {
            expected.remove(pos);
        }
        let after: Vec<String> = company.product_names().into_iter().map(String::from).collect();
        prop_assert_eq!(&after, &expected);

        if existing.is_empty() {
            prop_assert!(company.product_names.is_absent());
            prop_assert!(before.is_absent());
        }
    }
}
