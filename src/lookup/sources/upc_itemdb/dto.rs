//! UPC ItemDB API Data Transfer Objects
//!
//! These types match what the `/prod/trial/lookup?upc=` endpoint returns.

use serde::Deserialize;

/// Lookup response
#[derive(Debug, Clone, Deserialize)]
pub struct LookupResponse {
    /// "OK" on success, an error code otherwise (e.g. "INVALID_UPC")
    pub code: String,
    /// Number of matching items
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// Catalogue item
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Item {
    pub ean: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub color: Option<String>,
    /// Free-form, e.g. "5.2 X 2.1 X 1 inches"
    pub dimension: Option<String>,
    /// Free-form, e.g. "1.2 Pounds"
    pub weight: Option<String>,
    pub lowest_recorded_price: Option<f64>,
    pub highest_recorded_price: Option<f64>,
    #[serde(default)]
    pub images: Vec<String>,
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================
