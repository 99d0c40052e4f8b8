//! Request options for reading and searching CRM records.
//!
//! [`RequestQueryOption`] shapes GET requests: which properties to return,
//! whether to follow an association, and pagination. [`RequestSearchOption`]
//! is the JSON body of the search endpoint and is sent verbatim.

use serde::{Deserialize, Serialize};

/// Options for single-record and list reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestQueryOption {
    /// Properties to return. Empty means the resource's default list.
    pub properties: Vec<String>,
    /// Extra properties appended to the effective list, so a custom field can
    /// be requested without restating the defaults.
    pub custom_properties: Vec<String>,
    /// Association type names. Only the first is honoured, and only by
    /// single-record reads.
    pub associations: Vec<String>,
    pub archived: bool,
    /// Unique property to look records up by instead of the record ID.
    pub id_property: Option<String>,
    pub limit: Option<u32>,
    pub after: Option<String>,
}

impl RequestQueryOption {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the requested property list.
    pub fn with_properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.properties = properties.into_iter().map(Into::into).collect();
        self
    }

    /// Append to the custom property list.
    pub fn with_custom_properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_properties
            .extend(properties.into_iter().map(Into::into));
        self
    }

    pub fn with_association(mut self, association_type: impl Into<String>) -> Self {
        self.associations.push(association_type.into());
        self
    }

    pub fn with_archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }

    pub fn with_id_property(mut self, id_property: impl Into<String>) -> Self {
        self.id_property = Some(id_property.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_after(mut self, after: impl Into<String>) -> Self {
        self.after = Some(after.into());
        self
    }

    /// Resolve the property list against a resource's defaults.
    ///
    /// Returns a copy whose `properties` is the caller's list when non-empty,
    /// otherwise `default_fields` in order, followed by any custom
    /// properties. A non-empty caller list replaces the defaults entirely.
    /// `self` is never modified.
    pub fn setup_properties(&self, default_fields: &[&str]) -> Self {
        let mut option = self.clone();
        if option.properties.is_empty() {
            option.properties = default_fields.iter().map(|f| f.to_string()).collect();
        }
        option
            .properties
            .extend(std::mem::take(&mut option.custom_properties));
        option
    }

    /// First association type, which redirects single-record reads.
    pub fn association(&self) -> Option<&str> {
        self.associations.first().map(String::as_str)
    }

    /// Query string parameters. Properties are comma-joined into one value.
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        let properties: Vec<&str> = self
            .properties
            .iter()
            .chain(&self.custom_properties)
            .map(String::as_str)
            .collect();
        if !properties.is_empty() {
            params.push(("properties".to_string(), properties.join(",")));
        }
        if self.archived {
            params.push(("archived".to_string(), "true".to_string()));
        }
        if let Some(id_property) = &self.id_property {
            params.push(("idProperty".to_string(), id_property.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(after) = &self.after {
            params.push(("after".to_string(), after.clone()));
        }

        params
    }
}

/// Comparison applied by a search filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterOperator {
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
    Between,
    In,
    NotIn,
    HasProperty,
    NotHasProperty,
    ContainsToken,
    NotContainsToken,
}

/// A single property condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub property_name: String,
    pub operator: FilterOperator,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Upper bound for [`FilterOperator::Between`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_value: Option<String>,
    /// Candidates for [`FilterOperator::In`] and [`FilterOperator::NotIn`].
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

impl Filter {
    pub fn new(property_name: impl Into<String>, operator: FilterOperator) -> Self {
        Self {
            property_name: property_name.into(),
            operator,
            value: None,
            high_value: None,
            values: Vec::new(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_high_value(mut self, value: impl Into<String>) -> Self {
        self.high_value = Some(value.into());
        self
    }

    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }
}

/// Filters combined with AND. Groups are combined with OR.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroup {
    pub filters: Vec<Filter>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sort {
    pub property_name: String,
    pub direction: SortDirection,
}

impl Sort {
    pub fn new(property_name: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            property_name: property_name.into(),
            direction,
        }
    }
}

/// Search request body.
///
/// No default properties are substituted: an empty `properties` list is
/// left out of the body and the API applies its own minimal set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSearchOption {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filter_groups: Vec<FilterGroup>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sorts: Vec<Sort>,
    /// Free-text query over the object's default searchable properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

impl RequestSearchOption {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter_group(mut self, filters: Vec<Filter>) -> Self {
        self.filter_groups.push(FilterGroup { filters });
        self
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sorts.push(sort);
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.properties = properties.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_after(mut self, after: impl Into<String>) -> Self {
        self.after = Some(after.into());
        self
    }
}
