//! Adapter layer: Convert Open Food Facts DTOs to domain models

use super::dto;
use crate::lookup::domain::{Details, LookupOutcome, ProductRecord};
use crate::lookup::fields::{
    NOT_AVAILABLE, NOT_PROVIDED, UNKNOWN_BRAND, UNKNOWN_CATEGORY, UNKNOWN_PRODUCT, text_or,
};

pub const SOURCE_NAME: &str = "Open Food Facts";

/// Convert a product response to a lookup outcome
pub fn to_outcome(response: dto::ProductResponse, barcode: &str) -> LookupOutcome {
    if response.status != 1 {
        return LookupOutcome::NotFound;
    }
    let Some(product) = response.product else {
        return LookupOutcome::NotFound;
    };

    let details = Details::new()
        .with("quantity", text_or(product.quantity.as_deref(), NOT_PROVIDED))
        .with("countries", text_or(product.countries.as_deref(), NOT_PROVIDED))
        .with(
            "ingredients",
            text_or(product.ingredients_text.as_deref(), NOT_AVAILABLE),
        )
        .with("barcode", barcode);

    LookupOutcome::Found(ProductRecord {
        name: text_or(product.product_name.as_deref(), UNKNOWN_PRODUCT),
        brand: text_or(product.brands.as_deref(), UNKNOWN_BRAND),
        category: text_or(product.categories.as_deref(), UNKNOWN_CATEGORY),
        image: product.image_url.unwrap_or_default(),
        details,
        source: SOURCE_NAME.to_string(),
        barcode: barcode.to_string(),
        product_url: None,
    })
}
