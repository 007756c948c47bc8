//! Open Food Facts API Data Transfer Objects
//!
//! These types match what the `/api/v0/product/{code}.json` endpoint returns.
//! DO NOT use these types outside this module - convert via the adapter.

use serde::Deserialize;

/// Product lookup response
#[derive(Debug, Clone, Deserialize)]
pub struct ProductResponse {
    /// 1 when the product exists, 0 otherwise
    #[serde(default)]
    pub status: i64,
    /// e.g. "product found" / "product not found"
    pub status_verbose: Option<String>,
    /// The product (absent when not found)
    pub product: Option<Product>,
}

/// Product fields we display
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Product {
    pub product_name: Option<String>,
    /// Comma-separated brand list
    pub brands: Option<String>,
    /// Comma-separated category list
    pub categories: Option<String>,
    pub image_url: Option<String>,
    /// e.g. "400 g"
    pub quantity: Option<String>,
    /// Comma-separated country list
    pub countries: Option<String>,
    pub ingredients_text: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_found_product() {
        let json = r#"{
            "code": "3017620422003",
            "status": 1,
            "status_verbose": "product found",
            "product": {
                "product_name": "Nutella",
                "brands": "Ferrero",
                "categories": "Spreads, Sweet spreads",
                "image_url": "https://images.openfoodfacts.org/nutella.jpg",
                "quantity": "400 g",
                "countries": "France, Brazil",
                "ingredients_text": "Sugar, palm oil, hazelnuts",
                "nutriments": {"energy_100g": 2252}
            }
        }"#;

        let response: ProductResponse =
            serde_json::from_str(json).expect("Should parse found product");

        assert_eq!(response.status, 1);
        let product = response.product.unwrap();
        assert_eq!(product.product_name.as_deref(), Some("Nutella"));
        assert_eq!(product.quantity.as_deref(), Some("400 g"));
    }

    #[test]
    fn test_parse_not_found() {
        let json = r#"{
            "code": "0000000000000",
            "status": 0,
            "status_verbose": "product not found"
        }"#;

        let response: ProductResponse =
            serde_json::from_str(json).expect("Should parse not found");

        assert_eq!(response.status, 0);
        assert!(response.product.is_none());
    }
}
