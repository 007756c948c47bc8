//! Google Shopping Scraper HTTP client (RapidAPI)

use async_trait::async_trait;

use super::adapter::{self, Market};
use super::dto;
use crate::barcode::Barcode;
use crate::lookup::domain::{LookupOutcome, SourceError, SourceKind};
use crate::lookup::http;
use crate::lookup::traits::ProductSource;

const RAPIDAPI_HOST: &str = "google-shopping-scraper2.p.rapidapi.com";

/// Google Shopping Scraper client
pub struct ShoppingScraperClient {
    http_client: reqwest::Client,
    api_key: String,
    market: Market,
    base_url: String,
}

impl ShoppingScraperClient {
    pub fn new(http_client: reqwest::Client, api_key: impl Into<String>, market: Market) -> Self {
        Self::with_base_url(
            http_client,
            api_key,
            market,
            format!("https://{}", RAPIDAPI_HOST),
        )
    }

    /// Create a client against a proxy or test server
    pub fn with_base_url(
        http_client: reqwest::Client,
        api_key: impl Into<String>,
        market: Market,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            api_key: api_key.into(),
            market,
            base_url: base_url.into(),
        }
    }

    async fn fetch(&self, code: &Barcode) -> Result<dto::ProductsResponse, SourceError> {
        let url = format!("{}/products", self.base_url);
        let request = self
            .http_client
            .get(&url)
            .query(&[
                ("q", code.as_str()),
                ("country", self.market.country.as_str()),
                ("language", self.market.language.as_str()),
            ])
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", RAPIDAPI_HOST);
        http::get_json(request).await
    }
}

#[async_trait]
impl ProductSource for ShoppingScraperClient {
    fn name(&self) -> &'static str {
        adapter::SOURCE_NAME
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Product
    }

    async fn lookup(&self, code: &Barcode) -> LookupOutcome {
        match self.fetch(code).await {
            Ok(response) => adapter::to_outcome(response, code.as_str(), &self.market),
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
        let client = ShoppingScraperClient::new(reqwest::Client::new(), "key", Market::default());
        assert_eq!(client.base_url, "https://google-shopping-scraper2.p.rapidapi.com");
        assert_eq!(client.market.country, "br");
    }

    #[tokio::test]
    async fn test_unreachable_host_fails_closed() {
        let client = ShoppingScraperClient::with_base_url(
            reqwest::Client::new(),
            "key",
            Market::default(),
            "http://127.0.0.1:9",
        );
        let code = Barcode::parse("7896089012345").unwrap();
        assert_eq!(client.lookup(&code).await, LookupOutcome::NotFound);
    }
}
