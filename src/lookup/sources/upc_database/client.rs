//! UPCDatabase.org HTTP client

use async_trait::async_trait;

use super::{adapter, dto};
use crate::barcode::Barcode;
use crate::lookup::domain::{LookupOutcome, SourceError, SourceKind};
use crate::lookup::http;
use crate::lookup::traits::ProductSource;

/// UPCDatabase.org API client
pub struct UpcDatabaseClient {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl UpcDatabaseClient {
    pub fn new(http_client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self::with_base_url(http_client, api_key, "https://api.upcdatabase.org")
    }

    /// Create a client against a proxy or test server
    pub fn with_base_url(
        http_client: reqwest::Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    async fn fetch(&self, code: &Barcode) -> Result<dto::ProductResponse, SourceError> {
        let url = format!("{}/product/{}", self.base_url, code);
        let request = self
            .http_client
            .get(&url)
            .query(&[("apikey", self.api_key.as_str())]);
        http::get_json(request).await
    }
}

#[async_trait]
impl ProductSource for UpcDatabaseClient {
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
