//! Pricing types: catalog filters and resolved unit prices.

use serde::{Deserialize, Serialize};

/// Exact-match (`TERM_MATCH`) filter on a pricing catalog attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceFilter {
    /// Attribute name (e.g. `regionCode`)
    pub field: String,

    /// Required value
    pub value: String,
}

impl PriceFilter {
    /// Create a new term-match filter.
    pub fn term(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for PriceFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.field, self.value)
    }
}

/// Resolved Intelligent-Tiering unit prices for one region, in USD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSet {
    /// Frequent access tier, per GB-month
    pub frequent_access_per_gb_month: f64,

    /// Archive instant access tier, per GB-month
    pub archive_instant_access_per_gb_month: f64,

    /// Monitoring and automation fee, per 1000 objects per month
    pub monitoring_per_1000_objects_month: f64,
}
