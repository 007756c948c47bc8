//! Adapter layer: Convert Google Shopping DTOs to domain models

use super::dto;
use crate::lookup::domain::{Details, LookupOutcome, ProductRecord};
use crate::lookup::fields::{
    NOT_AVAILABLE, NOT_RATED, NOT_SPECIFIED, UNKNOWN_BRAND, UNKNOWN_CATEGORY, UNKNOWN_PRODUCT,
    scalar, text_or,
};

pub const SOURCE_NAME: &str = "Google Shopping";

/// Convert a search response to a lookup outcome (first listing wins)
pub fn to_outcome(response: dto::SearchResponse, barcode: &str) -> LookupOutcome {
    let Some(listing) = response.shopping_results.into_iter().next() else {
        return LookupOutcome::NotFound;
    };

    let rating = scalar(Some(&listing.rating))
        .map(|r| format!("{}/5", r))
        .unwrap_or_else(|| NOT_RATED.to_string());

    let details = Details::new()
        .with("price", text_or(listing.price_raw.as_deref(), NOT_AVAILABLE))
        .with("store", text_or(listing.source.as_deref(), NOT_SPECIFIED))
        .with("rating", rating)
        .with("barcode", barcode)
        .with("link", listing.link.unwrap_or_default());

    LookupOutcome::Found(ProductRecord {
        name: text_or(listing.title.as_deref(), UNKNOWN_PRODUCT),
        // The listing carries no brand; the store is the closest thing
        brand: text_or(listing.source.as_deref(), UNKNOWN_BRAND),
        category: text_or(listing.extracted_category.as_deref(), UNKNOWN_CATEGORY),
        image: listing.thumbnail.unwrap_or_default(),
        details,
        source: SOURCE_NAME.to_string(),
        barcode: barcode.to_string(),
        product_url: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_maps_fields() {
        let response = dto::SearchResponse {
            shopping_results: vec![dto::ShoppingResult {
                title: Some("Moça 395g".to_string()),
                source: Some("Carrefour".to_string()),
                price_raw: Some("R$ 8,99".to_string()),
                rating: serde_json::json!(4.7),
                link: Some("https://example.com/p".to_string()),
                ..Default::default()
            }],
        };

        let record = to_outcome(response, "7891000100103").into_record().unwrap();
        assert_eq!(record.brand, "Carrefour");
        assert_eq!(record.details.get("rating"), Some("4.7/5"));
        assert_eq!(record.details.get("store"), Some("Carrefour"));
        assert_eq!(record.details.get("link"), Some("https://example.com/p"));
        assert_eq!(
            record.details.labels(),
            vec!["price", "store", "rating", "barcode", "link"]
        );
    }

    #[test]
    fn test_unrated_listing() {
        let response = dto::SearchResponse {
            shopping_results: vec![dto::ShoppingResult::default()],
        };
        let record = to_outcome(response, "1").into_record().unwrap();
        assert_eq!(record.details.get("rating"), Some(NOT_RATED));
        assert_eq!(record.details.get("link"), Some(""));
    }

    #[test]
    fn test_string_rating_renders() {
        let response = dto::SearchResponse {
            shopping_results: vec![dto::ShoppingResult {
                rating: serde_json::json!("4.5"),
                ..Default::default()
            }],
        };
        let record = to_outcome(response, "1").into_record().unwrap();
        assert_eq!(record.details.get("rating"), Some("4.5/5"));
    }

    #[test]
    fn test_no_results_is_not_found() {
        let response = dto::SearchResponse {
            shopping_results: vec![],
        };
        assert_eq!(to_outcome(response, "1"), LookupOutcome::NotFound);
    }
}
