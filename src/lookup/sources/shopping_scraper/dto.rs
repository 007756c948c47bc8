//! Google Shopping Scraper Data Transfer Objects
//!
//! `/products?q=` wraps its listings in a `data` array.

use serde::Deserialize;
use serde_json::Value;

/// Product search response
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsResponse {
    #[serde(default)]
    pub data: Vec<Listing>,
}

/// One marketplace listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Listing {
    pub title: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    /// Number or preformatted string depending on the seller
    #[serde(default)]
    pub price: Value,
    pub seller: Option<String>,
    /// Number, numeric string or null
    #[serde(default)]
    pub rating: Value,
    pub availability: Option<String>,
    /// Usually a bool; null and 0/1 also occur
    #[serde(default)]
    pub free_shipping: Value,
    pub url: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================
