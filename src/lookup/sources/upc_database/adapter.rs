//! Adapter layer: Convert UPCDatabase.org DTOs to domain models

use super::dto;
use crate::lookup::domain::{Details, LookupOutcome, ProductRecord};
use crate::lookup::fields::{
    NOT_AVAILABLE, NOT_SPECIFIED, UNKNOWN_BRAND, UNKNOWN_CATEGORY, UNKNOWN_PRODUCT, scalar,
    text_or,
};

pub const SOURCE_NAME: &str = "UPC Database";

/// Convert a product response to a lookup outcome
pub fn to_outcome(response: dto::ProductResponse, barcode: &str) -> LookupOutcome {
    if !response.is_valid() {
        return LookupOutcome::NotFound;
    }

    let price = scalar(Some(&response.msrp))
        .map(|p| format!("${}", p))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let details = Details::new()
        .with("description", text_or(response.description.as_deref(), NOT_AVAILABLE))
        .with("barcode", barcode)
        .with("size", text_or(response.size.as_deref(), NOT_SPECIFIED))
        .with("color", text_or(response.color.as_deref(), NOT_SPECIFIED))
        .with("price", price);

    LookupOutcome::Found(ProductRecord {
        name: text_or(response.title.as_deref(), UNKNOWN_PRODUCT),
        brand: text_or(response.brand.as_deref(), UNKNOWN_BRAND),
        category: text_or(response.category.as_deref(), UNKNOWN_CATEGORY),
        image: response.image.unwrap_or_default(),
        details,
        source: SOURCE_NAME.to_string(),
        barcode: barcode.to_string(),
        product_url: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_maps_fields() {
        let response = dto::ProductResponse {
            valid: json!(true),
            title: Some("Coca-Cola Classic 12oz".to_string()),
            brand: Some("Coca-Cola".to_string()),
            msrp: json!(1.29),
            ..Default::default()
        };

        let record = to_outcome(response, "0049000028911").into_record().unwrap();
        assert_eq!(record.name, "Coca-Cola Classic 12oz");
        assert_eq!(record.details.get("price"), Some("$1.29"));
        assert_eq!(record.details.get("size"), Some(NOT_SPECIFIED));
        assert_eq!(
            record.details.labels(),
            vec!["description", "barcode", "size", "color", "price"]
        );
    }

    #[test]
    fn test_missing_msrp() {
        let response = dto::ProductResponse {
            valid: json!(true),
            ..Default::default()
        };
        let record = to_outcome(response, "1").into_record().unwrap();
        assert_eq!(record.details.get("price"), Some(NOT_AVAILABLE));
    }

    #[test]
    fn test_string_true_is_not_a_hit() {
        let response = dto::ProductResponse {
            valid: json!("true"),
            title: Some("x".to_string()),
            ..Default::default()
        };
        assert_eq!(to_outcome(response, "1"), LookupOutcome::NotFound);
    }
}
