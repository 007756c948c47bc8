//! UPC ItemDB HTTP client

use async_trait::async_trait;

use super::{adapter, dto};
use crate::barcode::Barcode;
use crate::lookup::domain::{LookupOutcome, SourceError, SourceKind};
use crate::lookup::http;
use crate::lookup::traits::ProductSource;

/// Public trial endpoint
pub const DEFAULT_URL: &str = "https://api.upcitemdb.com/prod/trial/lookup";

/// UPC ItemDB API client
pub struct UpcItemDbClient {
    http_client: reqwest::Client,
    /// Full lookup endpoint; the code is passed as `?upc=`
    lookup_url: String,
}

impl UpcItemDbClient {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self::with_lookup_url(http_client, DEFAULT_URL)
    }

    /// Create a client against a proxy or test endpoint
    pub fn with_lookup_url(http_client: reqwest::Client, lookup_url: impl Into<String>) -> Self {
        Self {
            http_client,
            lookup_url: lookup_url.into(),
        }
    }

    async fn fetch(&self, code: &Barcode) -> Result<dto::LookupResponse, SourceError> {
        let request = self
            .http_client
            .get(&self.lookup_url)
            .query(&[("upc", code.as_str())]);
        http::get_json(request).await
    }
}

#[async_trait]
impl ProductSource for UpcItemDbClient {
    fn name(&self) -> &'static str {
        adapter::SOURCE_NAME
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Product
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
