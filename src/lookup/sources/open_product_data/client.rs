//! World Wide Open Product Database HTTP client

use async_trait::async_trait;

use super::{adapter, dto};
use crate::barcode::Barcode;
use crate::lookup::domain::{LookupOutcome, SourceError, SourceKind};
use crate::lookup::http;
use crate::lookup::traits::ProductSource;

/// Open Product Data API client
pub struct OpenProductDataClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl OpenProductDataClient {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self::with_base_url(http_client, "https://world.openproductdata.com")
    }

    /// Create a client against another host (proxy or test server)
    pub fn with_base_url(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    async fn fetch(&self, code: &Barcode) -> Result<dto::ProductResponse, SourceError> {
        let url = format!("{}/api/v0/product/{}.json", self.base_url, code);
        http::get_json(self.http_client.get(&url)).await
    }
}

#[async_trait]
impl ProductSource for OpenProductDataClient {
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
