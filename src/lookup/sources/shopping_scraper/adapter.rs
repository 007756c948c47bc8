//! Adapter layer: Convert Google Shopping Scraper DTOs to domain models

use super::dto;
use crate::lookup::domain::{Details, LookupOutcome, ProductRecord};
use crate::lookup::fields::{
    NOT_RATED, UNKNOWN_BRAND, UNKNOWN_CATEGORY, UNKNOWN_PRODUCT, non_blank, scalar, text_or,
    truthy,
};

pub const SOURCE_NAME: &str = "Google Shopping Scraper";

/// Regional settings for marketplace searches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Market {
    /// ISO country code, e.g. "br"
    pub country: String,
    /// Language tag, e.g. "pt-br"
    pub language: String,
    /// Symbol prefixed to prices, e.g. "R$"
    pub currency: String,
}

impl Default for Market {
    fn default() -> Self {
        Self {
            country: "br".to_string(),
            language: "pt-br".to_string(),
            currency: "R$".to_string(),
        }
    }
}

/// Convert a products response to a lookup outcome (first listing wins)
pub fn to_outcome(response: dto::ProductsResponse, barcode: &str, market: &Market) -> LookupOutcome {
    let Some(listing) = response.data.into_iter().next() else {
        return LookupOutcome::NotFound;
    };

    let price = scalar(Some(&listing.price))
        .map(|p| format!("{} {}", market.currency, p))
        .unwrap_or_else(|| "Price not available".to_string());
    let rating = scalar(Some(&listing.rating))
        .map(|r| format!("{} stars", r))
        .unwrap_or_else(|| NOT_RATED.to_string());
    let free_shipping = if truthy(&listing.free_shipping) { "Yes" } else { "No" };

    let details = Details::new()
        .with("price", price)
        .with("store", text_or(listing.seller.as_deref(), "Store not specified"))
        .with("rating", rating)
        .with("barcode", barcode)
        .with(
            "availability",
            text_or(listing.availability.as_deref(), "Availability not provided"),
        )
        .with("free shipping", free_shipping);

    LookupOutcome::Found(ProductRecord {
        name: text_or(listing.title.as_deref(), UNKNOWN_PRODUCT),
        brand: text_or(listing.brand.as_deref(), UNKNOWN_BRAND),
        category: text_or(listing.category.as_deref(), UNKNOWN_CATEGORY),
        image: listing.image.unwrap_or_default(),
        details,
        source: SOURCE_NAME.to_string(),
        barcode: barcode.to_string(),
        product_url: non_blank(listing.url.as_deref()).map(str::to_string),
    })
}
