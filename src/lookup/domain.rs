//! Internal domain models for product lookups.
//!
//! These types are OUR types - they don't change when a provider changes its
//! response format. Every source response is converted into these via the
//! source's adapter.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Ordered label -> value pairs shown under a product.
///
/// Labels and their order differ from source to source on purpose; there is
/// no fixed schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Details(Vec<(String, String)>);

impl Details {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair, keeping insertion order.
    pub fn push(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.0.push((label.into(), value.into()));
    }

    /// Builder-style [`Details::push`].
    pub fn with(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(label, value);
        self
    }

    /// Value for a label, if present.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }

    pub fn labels(&self) -> Vec<&str> {
        self.0.iter().map(|(l, _)| l.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Details {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, value) in &self.0 {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

/// A product (or book) found by one of the sources.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub name: String,
    pub brand: String,
    pub category: String,
    /// Image URL (empty when the source has none)
    pub image: String,
    pub details: Details,
    /// Human-readable source name
    pub source: String,
    /// The code that was queried
    pub barcode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
}

/// Result of one source lookup, or of a whole search.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(ProductRecord),
    NotFound,
}

impl LookupOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupOutcome::Found(_))
    }

    /// The record, if found.
    pub fn record(&self) -> Option<&ProductRecord> {
        match self {
            LookupOutcome::Found(record) => Some(record),
            LookupOutcome::NotFound => None,
        }
    }

    pub fn into_record(self) -> Option<ProductRecord> {
        match self {
            LookupOutcome::Found(record) => Some(record),
            LookupOutcome::NotFound => None,
        }
    }
}

impl From<Option<ProductRecord>> for LookupOutcome {
    fn from(record: Option<ProductRecord>) -> Self {
        record.map_or(LookupOutcome::NotFound, LookupOutcome::Found)
    }
}

/// Serializes as `{"found": true, ...record}` or `{"found": false}`.
impl Serialize for LookupOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Found<'a> {
            found: bool,
            #[serde(flatten)]
            record: &'a ProductRecord,
        }

        #[derive(Serialize)]
        struct NotFound {
            found: bool,
        }

        match self {
            LookupOutcome::Found(record) => Found {
                found: true,
                record,
            }
            .serialize(serializer),
            LookupOutcome::NotFound => NotFound { found: false }.serialize(serializer),
        }
    }
}

/// Which catalogue family a source belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// General product catalogues, tried for every code
    Product,
    /// Bibliographic catalogues, tried first for ISBNs
    Book,
}

/// Errors that can occur inside a source.
///
/// These never leave the source: its `lookup` logs them and reports NotFound.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}")]
    Http { status: u16 },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}
