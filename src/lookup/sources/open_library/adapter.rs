//! Adapter layer: Convert Open Library DTOs to domain models

use super::dto;
use crate::lookup::domain::{Details, LookupOutcome, ProductRecord};
use crate::lookup::fields::{
    BOOK_CATEGORY, NOT_AVAILABLE, NOT_PROVIDED, UNKNOWN_AUTHOR, UNKNOWN_BOOK, UNKNOWN_PUBLISHER,
    join_or, non_blank, text_or,
};

pub const SOURCE_NAME: &str = "Open Library";

/// Convert a Books API response to a lookup outcome
pub fn to_outcome(mut response: dto::BooksResponse, isbn: &str) -> LookupOutcome {
    let Some(book) = response.remove(&dto::bibkey(isbn)) else {
        return LookupOutcome::NotFound;
    };

    let pages = book
        .number_of_pages
        .filter(|&n| n > 0)
        .map(|n| format!("{} pages", n))
        .unwrap_or_else(|| NOT_PROVIDED.to_string());

    let details = Details::new()
        .with("authors", join_or(names(&book.authors), UNKNOWN_AUTHOR))
        .with(
            "publication year",
            text_or(book.publish_date.as_deref(), NOT_PROVIDED),
        )
        .with("pages", pages)
        .with("ISBN", isbn)
        .with("identifiers", format_identifiers(&book));

    let image = book
        .cover
        .as_ref()
        .and_then(|c| non_blank(c.medium.as_deref()).or(non_blank(c.large.as_deref())))
        .unwrap_or_default()
        .to_string();

    LookupOutcome::Found(ProductRecord {
        name: text_or(book.title.as_deref(), UNKNOWN_BOOK),
        brand: join_or(names(&book.publishers), UNKNOWN_PUBLISHER),
        category: join_or(names(&book.subjects), BOOK_CATEGORY),
        image,
        details,
        source: SOURCE_NAME.to_string(),
        barcode: isbn.to_string(),
        product_url: None,
    })
}

fn names(entities: &[dto::Named]) -> impl Iterator<Item = &str> {
    entities.iter().map(|e| e.name.as_str())
}

/// `scheme: a, b | scheme2: c`
fn format_identifiers(book: &dto::Book) -> String {
    if book.identifiers.is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    book.identifiers
        .iter()
        .map(|(scheme, values)| {
            let values: Vec<&str> = values
                .as_array()
                .map(|items| items.iter().filter_map(|v| v.as_str()).collect())
                .unwrap_or_default();
            format!("{}: {}", scheme, values.join(", "))
        })
        .collect::<Vec<_>>()
        .join(" | ")
}
