//! Google Shopping (google-data-scraper) Data Transfer Objects
//!
//! These types match what `/search/shop/{query}` returns.

use serde::Deserialize;
use serde_json::Value;

/// Shopping search response
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub shopping_results: Vec<ShoppingResult>,
}

/// One shopping listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShoppingResult {
    pub title: Option<String>,
    /// Store name
    pub source: Option<String>,
    pub extracted_category: Option<String>,
    pub thumbnail: Option<String>,
    /// Price as displayed, e.g. "R$ 19,90"
    pub price_raw: Option<String>,
    /// Number, numeric string or null
    #[serde(default)]
    pub rating: Value,
    pub link: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================
