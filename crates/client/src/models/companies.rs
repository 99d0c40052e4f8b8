//! Company resource model.
//!
//! [`Company`] carries the well-known company properties. Callers with
//! portal-specific fields embed it with `#[serde(flatten)]` in their own
//! struct and pass that struct to the company operations instead.

use serde::{Deserialize, Serialize};

use crate::models::scalars::{HsStr, HsTime};

/// CRM object type segment for companies.
pub const COMPANY_OBJECT_TYPE: &str = "companies";

/// Properties requested when a read names none.
pub const DEFAULT_COMPANY_PROPERTIES: &[&str] = &[
    "id",
    "name",
    "industry",
    "domain",
    "phone",
    "city",
    "state",
    "hs_createdate",
    "hs_lastmodifieddate",
    "hs_object_id",
    "hubspot_owner_assigneddate",
    "hubspot_owner_id",
    "products",
    "trial_status",
    "trial_end_date",
];

/// Separator for the multi-value `products` property.
pub const PRODUCT_NAME_DELIMITER: char = ';';

/// Well-known company properties.
///
/// Absent fields are left out of write bodies so partial updates leave the
/// stored value alone. Properties in a response that have no field here are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    #[serde(skip_serializing_if = "HsStr::is_absent")]
    pub id: HsStr,
    #[serde(skip_serializing_if = "HsStr::is_absent")]
    pub name: HsStr,
    #[serde(skip_serializing_if = "HsStr::is_absent")]
    pub industry: HsStr,
    #[serde(skip_serializing_if = "HsStr::is_absent")]
    pub domain: HsStr,
    #[serde(skip_serializing_if = "HsStr::is_absent")]
    pub phone: HsStr,
    #[serde(skip_serializing_if = "HsStr::is_absent")]
    pub city: HsStr,
    #[serde(skip_serializing_if = "HsStr::is_absent")]
    pub state: HsStr,
    #[serde(rename = "hs_createdate", skip_serializing_if = "HsTime::is_absent")]
    pub hs_create_date: HsTime,
    #[serde(
        rename = "hs_lastmodifieddate",
        skip_serializing_if = "HsTime::is_absent"
    )]
    pub hs_last_modified_date: HsTime,
    #[serde(skip_serializing_if = "HsStr::is_absent")]
    pub hs_object_id: HsStr,
    #[serde(
        rename = "hubspot_owner_assigneddate",
        skip_serializing_if = "HsTime::is_absent"
    )]
    pub hubspot_owner_assigned_date: HsTime,
    #[serde(skip_serializing_if = "HsStr::is_absent")]
    pub hubspot_owner_id: HsStr,
    /// Semicolon-joined product names.
    #[serde(rename = "products", skip_serializing_if = "HsStr::is_absent")]
    pub product_names: HsStr,
    #[serde(skip_serializing_if = "HsStr::is_absent")]
    pub trial_status: HsStr,
    #[serde(skip_serializing_if = "HsStr::is_absent")]
    pub trial_end_date: HsStr,
}

impl Company {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: HsStr::new(name),
            ..Self::default()
        }
    }

    /// Product names in stored order, duplicates included.
    pub fn product_names(&self) -> Vec<&str> {
        match self.product_names.as_str() {
            Some(raw) if !raw.is_empty() => raw.split(PRODUCT_NAME_DELIMITER).collect(),
            _ => Vec::new(),
        }
    }

    /// Append a product name. Existing names are not deduplicated.
    pub fn add_product_name(&mut self, name: &str) {
        let mut names: Vec<String> = self
            .product_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        names.push(name.to_string());
        self.set_product_names(names);
    }

    /// Remove the first occurrence of a product name.
    ///
    /// A present empty value splits into one empty token, so it stays `""`
    /// unless `name` is itself empty. The field becomes absent, not empty,
    /// once the last token is removed.
    pub fn remove_product_name(&mut self, name: &str) {
        let Some(raw) = self.product_names.as_str() else {
            return;
        };
        let mut names: Vec<String> = raw
            .split(PRODUCT_NAME_DELIMITER)
            .map(str::to_string)
            .collect();
        if let Some(pos) = names.iter().position(|n| n == name) {
            names.remove(pos);
        }
        self.set_product_names(names);
    }

    fn set_product_names(&mut self, names: Vec<String>) {
        self.product_names = if names.is_empty() {
            HsStr::absent()
        } else {
            HsStr::new(names.join(&PRODUCT_NAME_DELIMITER.to_string()))
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_add_product_name_no_dedup() {
        let mut company = Company::default();
        company.add_product_name("x");
        assert_eq!(company.product_names, "x");
        company.add_product_name("x");
        assert_eq!(company.product_names, "x;x");
        company.add_product_name("y");
        assert_eq!(company.product_names(), vec!["x", "x", "y"]);
    }

    #[test]
    fn test_add_product_name_to_empty_value() {
        let mut company = Company {
            product_names: HsStr::new(""),
            ..Company::default()
        };
        company.add_product_name("alpha");
        assert_eq!(company.product_names, "alpha");
    }

    #[test]
    fn test_remove_product_name_first_match_only() {
        let mut company = Company {
            product_names: HsStr::new("x;x"),
            ..Company::default()
        };
        company.remove_product_name("x");
        assert_eq!(company.product_names, "x");
        company.remove_product_name("x");
        assert!(company.product_names.is_absent());
    }

    #[test]
    fn test_remove_product_name_keeps_present_empty_value() {
        let mut company = Company {
            product_names: HsStr::new(""),
            ..Company::default()
        };
        company.remove_product_name("x");
        assert!(company.product_names.is_present());
        assert_eq!(company.product_names, "");

        let body = serde_json::to_value(&company).unwrap();
        assert_eq!(body, serde_json::json!({ "products": "" }));
    }

    #[test]
    fn test_remove_empty_name_from_empty_value_makes_absent() {
        let mut company = Company {
            product_names: HsStr::new(""),
            ..Company::default()
        };
        company.remove_product_name("");
        assert!(company.product_names.is_absent());
    }

    #[test]
    fn test_remove_product_name_absent_is_noop() {
        let mut company = Company::default();
        company.remove_product_name("x");
        assert!(company.product_names.is_absent());
    }

    #[test]
    fn test_remove_product_name_missing_keeps_value() {
        let mut company = Company {
            product_names: HsStr::new("a;b"),
            ..Company::default()
        };
        company.remove_product_name("c");
        assert_eq!(company.product_names, "a;b");
        company.remove_product_name("a");
        assert_eq!(company.product_names, "b");
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let body = serde_json::to_value(Company::new("Acme")).unwrap();
        assert_eq!(body, serde_json::json!({ "name": "Acme" }));
    }

    #[test]
    fn test_serialize_renamed_fields() {
        let company = Company {
            hs_create_date: HsTime::new(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()),
            product_names: HsStr::new("a;b"),
            ..Company::default()
        };
        let body = serde_json::to_value(&company).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "hs_createdate": "2024-01-02T03:04:05Z",
                "products": "a;b"
            })
        );
    }

    #[test]
    fn test_deserialize_null_and_missing() {
        let company: Company = serde_json::from_str(
            r#"{"name": "Acme", "domain": null, "hs_lastmodifieddate": "2024-05-01T10:00:00.000Z", "extra": "ignored"}"#,
        )
        .unwrap();
        assert_eq!(company.name, "Acme");
        assert!(company.domain.is_absent());
        assert!(company.phone.is_absent());
        assert!(company.hs_last_modified_date.is_present());
    }

    #[test]
    fn test_default_properties_order() {
        assert_eq!(DEFAULT_COMPANY_PROPERTIES.len(), 15);
        assert_eq!(DEFAULT_COMPANY_PROPERTIES[0], "id");
        assert_eq!(DEFAULT_COMPANY_PROPERTIES[12], "products");
        assert_eq!(DEFAULT_COMPANY_PROPERTIES[14], "trial_end_date");
    }
}
