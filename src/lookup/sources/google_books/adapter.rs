//! Adapter layer: Convert Google Books DTOs to domain models

use super::dto;
use crate::lookup::domain::{Details, LookupOutcome, ProductRecord};
use crate::lookup::fields::{
    BOOK_CATEGORY, NOT_PROVIDED, UNKNOWN_AUTHOR, UNKNOWN_BOOK, UNKNOWN_PUBLISHER, join_or,
    non_blank, text_or, truncate,
};

pub const SOURCE_NAME: &str = "Google Books";

/// Convert a volume search to a lookup outcome (first volume wins).
///
/// Descriptions longer than `description_limit` characters are cut.
pub fn to_outcome(
    response: dto::VolumesResponse,
    isbn: &str,
    description_limit: usize,
) -> LookupOutcome {
    if response.total_items == 0 {
        return LookupOutcome::NotFound;
    }
    let Some(volume) = response.items.into_iter().next() else {
        return LookupOutcome::NotFound;
    };
    let book = volume.volume_info;

    let pages = book
        .page_count
        .filter(|&n| n > 0)
        .map(|n| format!("{} pages", n))
        .unwrap_or_else(|| NOT_PROVIDED.to_string());
    let language = non_blank(book.language.as_deref())
        .map(str::to_uppercase)
        .unwrap_or_else(|| NOT_PROVIDED.to_string());
    let description = non_blank(book.description.as_deref())
        .map(|d| truncate(d, description_limit))
        .unwrap_or_else(|| "Description not available".to_string());

    let details = Details::new()
        .with(
            "authors",
            join_or(book.authors.iter().map(String::as_str), UNKNOWN_AUTHOR),
        )
        .with(
            "publication year",
            text_or(book.published_date.as_deref(), NOT_PROVIDED),
        )
        .with("pages", pages)
        .with("language", language)
        .with("ISBN", isbn)
        .with("description", description);

    let image = book
        .image_links
        .and_then(|links| links.thumbnail)
        .unwrap_or_default();

    LookupOutcome::Found(ProductRecord {
        name: text_or(book.title.as_deref(), UNKNOWN_BOOK),
        brand: text_or(book.publisher.as_deref(), UNKNOWN_PUBLISHER),
        category: join_or(book.categories.iter().map(String::as_str), BOOK_CATEGORY),
        image,
        details,
        source: SOURCE_NAME.to_string(),
        barcode: isbn.to_string(),
        product_url: None,
    })
}
