//! Adapter layer: Convert UPC ItemDB DTOs to domain models

use super::dto;
use crate::lookup::domain::{Details, LookupOutcome, ProductRecord};
use crate::lookup::fields::{
    NOT_AVAILABLE, NOT_SPECIFIED, UNKNOWN_BRAND, UNKNOWN_CATEGORY, UNKNOWN_PRODUCT, number,
    text_or,
};

pub const SOURCE_NAME: &str = "UPC ItemDB";

/// Convert a lookup response to a lookup outcome (first item wins)
pub fn to_outcome(response: dto::LookupResponse, barcode: &str) -> LookupOutcome {
    if response.code != "OK" {
        return LookupOutcome::NotFound;
    }
    let Some(item) = response.items.into_iter().next() else {
        return LookupOutcome::NotFound;
    };

    let price_range = number(item.lowest_recorded_price)
        .map(|low| {
            let high = number(item.highest_recorded_price).unwrap_or_else(|| low.clone());
            format!("${} - ${}", low, high)
        })
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let details = Details::new()
        .with("description", text_or(item.description.as_deref(), NOT_AVAILABLE))
        .with("barcode", barcode)
        .with("average price", price_range)
        .with("color", text_or(item.color.as_deref(), NOT_SPECIFIED))
        .with("dimensions", text_or(item.dimension.as_deref(), NOT_AVAILABLE))
        .with("weight", text_or(item.weight.as_deref(), NOT_AVAILABLE));

    LookupOutcome::Found(ProductRecord {
        name: text_or(item.title.as_deref(), UNKNOWN_PRODUCT),
        brand: text_or(item.brand.as_deref(), UNKNOWN_BRAND),
        category: text_or(item.category.as_deref(), UNKNOWN_CATEGORY),
        image: item.images.into_iter().next().unwrap_or_default(),
        details,
        source: SOURCE_NAME.to_string(),
        barcode: barcode.to_string(),
        product_url: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(items: Vec<dto::Item>) -> dto::LookupResponse {
        dto::LookupResponse {
            code: "OK".to_string(),
            total: items.len() as u32,
            items,
        }
    }

    #[test]
    fn test_first_item_is_used() {
        let items = vec![
            dto::Item {
                title: Some("First".to_string()),
                images: vec!["a.jpg".to_string(), "b.jpg".to_string()],
                lowest_recorded_price: Some(3.79),
                highest_recorded_price: Some(8500.0),
                ..Default::default()
            },
            dto::Item {
                title: Some("Second".to_string()),
                ..Default::default()
            },
        ];

        let record = to_outcome(response(items), "0885909950805")
            .into_record()
            .unwrap();
        assert_eq!(record.name, "First");
        assert_eq!(record.image, "a.jpg");
        assert_eq!(record.details.get("average price"), Some("$3.79 - $8500"));
        assert_eq!(record.details.get("color"), Some(NOT_SPECIFIED));
        assert_eq!(
            record.details.labels(),
            vec!["description", "barcode", "average price", "color", "dimensions", "weight"]
        );
    }

    #[test]
    fn test_missing_price_is_not_available() {
        let record = to_outcome(response(vec![dto::Item::default()]), "1")
            .into_record()
            .unwrap();
        assert_eq!(record.details.get("average price"), Some(NOT_AVAILABLE));
        assert_eq!(record.image, "");
    }

    #[test]
    fn test_empty_items_is_not_found() {
        assert_eq!(to_outcome(response(vec![]), "1"), LookupOutcome::NotFound);
    }

    #[test]
    fn test_error_code_is_not_found() {
        let response = dto::LookupResponse {
            code: "INVALID_UPC".to_string(),
            total: 0,
            items: vec![dto::Item::default()],
        };
        assert_eq!(to_outcome(response, "1"), LookupOutcome::NotFound);
    }
}
