//! Open Library Books API Data Transfer Objects
//!
//! The response is an object keyed by bibkey (`"ISBN:<code>"`); a miss is an
//! empty object.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};

/// Books API response, keyed by bibkey
pub type BooksResponse = HashMap<String, Book>;

/// Book data (`jscmd=data`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Book {
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Vec<Named>,
    #[serde(default)]
    pub publishers: Vec<Named>,
    #[serde(default)]
    pub subjects: Vec<Named>,
    /// Free-form, e.g. "October 1999"
    pub publish_date: Option<String>,
    pub number_of_pages: Option<u32>,
    pub cover: Option<Cover>,
    /// Identifier scheme -> list of values (isbn_10, lccn, openlibrary, ...),
    /// in the order the provider sent them
    #[serde(default)]
    pub identifiers: Map<String, Value>,
}

/// Any `{ "name": ... }` entity (author, publisher, subject)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Named {
    #[serde(default)]
    pub name: String,
    pub url: Option<String>,
}

/// Cover image URLs
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Cover {
    pub small: Option<String>,
    pub medium: Option<String>,
    pub large: Option<String>,
}

/// Bibkey used both in the request and as the response key
pub fn bibkey(isbn: &str) -> String {
    format!("ISBN:{}", isbn)
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================
