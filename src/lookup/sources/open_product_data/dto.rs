//! World Wide Open Product Database Data Transfer Objects

use serde::Deserialize;
use serde_json::Value;

/// Product lookup response
#[derive(Debug, Clone, Deserialize)]
pub struct ProductResponse {
    /// `"success"` on a hit. Sibling deployments send an integer here, so
    /// the raw value is kept.
    #[serde(default)]
    pub status: Value,
    pub product: Option<Product>,
}

/// Product fields we display
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Product {
    pub product_name: Option<String>,
    pub brands: Option<String>,
    pub categories: Option<String>,
    pub image_url: Option<String>,
    pub quantity: Option<String>,
    pub countries: Option<String>,
}

impl ProductResponse {
    /// Whether the envelope reports success
    pub fn is_success(&self) -> bool {
        self.status.as_str() == Some("success")
    }
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================
