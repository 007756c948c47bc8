//! Google Shopping HTTP client (RapidAPI)

use async_trait::async_trait;

use super::{adapter, dto};
use crate::barcode::Barcode;
use crate::lookup::domain::{LookupOutcome, SourceError, SourceKind};
use crate::lookup::http;
use crate::lookup::traits::ProductSource;

const RAPIDAPI_HOST: &str = "google-data-scraper.p.rapidapi.com";

/// Google Shopping scraper client
pub struct GoogleShoppingClient {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GoogleShoppingClient {
    pub fn new(http_client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self::with_base_url(http_client, api_key, format!("https://{}", RAPIDAPI_HOST))
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

    async fn fetch(&self, code: &Barcode) -> Result<dto::SearchResponse, SourceError> {
        let url = format!(
            "{}/search/shop/{}",
            self.base_url,
            urlencoding::encode(code.as_str())
        );
        let request = self
            .http_client
            .get(&url)
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", RAPIDAPI_HOST);
        http::get_json(request).await
    }
}

#[async_trait]
impl ProductSource for GoogleShoppingClient {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = GoogleShoppingClient::new(reqwest::Client::new(), "key");
        assert_eq!(client.base_url, "https://google-data-scraper.p.rapidapi.com");
        assert_eq!(client.api_key, "key");
    }

    #[tokio::test]
    async fn test_unreachable_host_fails_closed() {
        let client =
            GoogleShoppingClient::with_base_url(reqwest::Client::new(), "key", "http://127.0.0.1:9");
        let code = Barcode::parse("7891000100103").unwrap();
        assert_eq!(client.lookup(&code).await, LookupOutcome::NotFound);
    }
}
