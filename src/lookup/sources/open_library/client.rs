//! Open Library HTTP client

use async_trait::async_trait;

use super::{adapter, dto};
use crate::barcode::Barcode;
use crate::lookup::domain::{LookupOutcome, SourceError, SourceKind};
use crate::lookup::http;
use crate::lookup::traits::ProductSource;

/// Open Library Books API client
pub struct OpenLibraryClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl OpenLibraryClient {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self::with_base_url(http_client, "https://openlibrary.org")
    }

    /// Create a client against a proxy or test server
    pub fn with_base_url(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    async fn fetch(&self, isbn: &Barcode) -> Result<dto::BooksResponse, SourceError> {
        let url = format!("{}/api/books", self.base_url);
        let bibkey = dto::bibkey(isbn.as_str());
        let request = self.http_client.get(&url).query(&[
            ("bibkeys", bibkey.as_str()),
            ("format", "json"),
            ("jscmd", "data"),
        ]);
        http::get_json(request).await
    }
}

#[async_trait]
impl ProductSource for OpenLibraryClient {
    fn name(&self) -> &'static str {
        adapter::SOURCE_NAME
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Book
    }

    async fn lookup(&self, code: &Barcode) -> LookupOutcome {
        match self.fetch(code).await {
            Ok(response) => adapter::to_outcome(response, code.as_str()),
            Err(e) => {
                tracing::warn!("{} lookup failed for {}: {}", self.name(), code, e);
                LookupOutcome::NotFound
            }
        }
    }
}
