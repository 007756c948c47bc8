//! Google Books HTTP client

use async_trait::async_trait;

use super::{adapter, dto};
use crate::barcode::Barcode;
use crate::lookup::domain::{LookupOutcome, SourceError, SourceKind};
use crate::lookup::http;
use crate::lookup::traits::ProductSource;

/// Google Books API client
pub struct GoogleBooksClient {
    http_client: reqwest::Client,
    base_url: String,
    description_limit: usize,
}

impl GoogleBooksClient {
    pub fn new(http_client: reqwest::Client, description_limit: usize) -> Self {
        Self::with_base_url(http_client, description_limit, "https://www.googleapis.com")
    }

    /// Create a client against a proxy or test server
    pub fn with_base_url(
        http_client: reqwest::Client,
        description_limit: usize,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
            description_limit,
        }
    }

    async fn fetch(&self, isbn: &Barcode) -> Result<dto::VolumesResponse, SourceError> {
        let url = format!("{}/books/v1/volumes", self.base_url);
        let query = format!("isbn:{}", isbn);
        let request = self.http_client.get(&url).query(&[("q", query.as_str())]);
        http::get_json(request).await
    }
}

#[async_trait]
impl ProductSource for GoogleBooksClient {
    fn name(&self) -> &'static str {
        adapter::SOURCE_NAME
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Book
    }

    async fn lookup(&self, code: &Barcode) -> LookupOutcome {
        match self.fetch(code).await {
            Ok(response) => adapter::to_outcome(response, code.as_str(), self.description_limit),
            Err(e) => {
                tracing::warn!("{} lookup failed for {}: {}", self.name(), code, e);
                LookupOutcome::NotFound
            }
        }
    }
}
