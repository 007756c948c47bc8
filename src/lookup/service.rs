//! Lookup service - orchestrates the search cascade across sources
//!
//! This is the high-level API for identifying a product:
//! 1. Normalize the code (UPC-A -> EAN-13, ISBN-10 -> ISBN-13)
//! 2. Build the source sequence: book catalogues first for ISBNs, then the
//!    product catalogues in their fixed order
//! 3. Try each source in turn, strictly one at a time
//! 4. Return the first match, or NotFound once the sequence is exhausted
//!
//! A failing source never interrupts the cascade. Sources report their own
//! errors as NotFound; a panicking source is caught here and skipped.

use std::panic::AssertUnwindSafe;

use futures::FutureExt;

use crate::barcode::Barcode;
use crate::config::Config;
use crate::lookup::{
    domain::{LookupOutcome, SourceError, SourceKind},
    http,
    sources::{
        GoogleBooksClient, GoogleShoppingClient, Market, OpenFoodFactsClient, OpenLibraryClient,
        OpenProductDataClient, ShoppingScraperClient, UpcDatabaseClient, UpcItemDbClient,
    },
    traits::ProductSource,
};

/// Receives the name of each source right before it is consulted.
///
/// Advisory only: it has no influence on the cascade.
pub trait SearchProgress: Send + Sync {
    fn consulting(&self, source: &str);
}

impl<F> SearchProgress for F
where
    F: Fn(&str) + Send + Sync,
{
    fn consulting(&self, source: &str) {
        self(source)
    }
}

/// Progress sink that discards updates.
pub struct NoProgress;

impl SearchProgress for NoProgress {
    fn consulting(&self, _source: &str) {}
}

/// Service for looking up products across external catalogues
pub struct LookupService {
    /// All sources, in priority order within their kind
    sources: Vec<Box<dyn ProductSource>>,
}

impl LookupService {
    /// Create a service over an explicit list of sources.
    ///
    /// Book sources keep their relative order and are moved ahead of product
    /// sources for ISBN codes; product sources keep theirs.
    pub fn new(sources: Vec<Box<dyn ProductSource>>) -> Self {
        Self { sources }
    }

    /// Create the production source set from config.
    ///
    /// Sources that need a key are only included when the key is configured.
    pub fn from_config(config: &Config) -> Result<Self, SourceError> {
        let client = http::build_client()?;
        let settings = &config.sources;
        let credentials = &config.credentials;
        let market = Market {
            country: settings.shopping_country.clone(),
            language: settings.shopping_language.clone(),
            currency: settings.shopping_currency.clone(),
        };

        let mut sources: Vec<Box<dyn ProductSource>> = vec![
            Box::new(OpenLibraryClient::new(client.clone())),
            Box::new(GoogleBooksClient::new(
                client.clone(),
                settings.description_limit,
            )),
            Box::new(OpenFoodFactsClient::new(client.clone())),
            Box::new(UpcItemDbClient::with_lookup_url(
                client.clone(),
                settings.upcitemdb_url.clone(),
            )),
        ];

        if let Some(key) = credentials.rapidapi_key() {
            sources.push(Box::new(GoogleShoppingClient::new(client.clone(), key)));
        }
        sources.push(Box::new(OpenProductDataClient::new(client.clone())));
        if let Some(key) = credentials.upc_database_key() {
            sources.push(Box::new(UpcDatabaseClient::new(client.clone(), key)));
        }
        if let Some(key) = credentials.rapidapi_key() {
            sources.push(Box::new(ShoppingScraperClient::new(client, key, market)));
        }

        let service = Self::new(sources);
        tracing::debug!("Lookup sources: {}", service.source_names().join(", "));
        Ok(service)
    }

    /// Names of all configured sources, books first.
    pub fn source_names(&self) -> Vec<&'static str> {
        self.by_kind(SourceKind::Book)
            .chain(self.by_kind(SourceKind::Product))
            .map(|s| s.name())
            .collect()
    }

    /// The sources tried for `code`, in order.
    pub fn plan(&self, code: &Barcode) -> Vec<&dyn ProductSource> {
        let books = code
            .code_type()
            .is_isbn()
            .then(|| self.by_kind(SourceKind::Book))
            .into_iter()
            .flatten();
        books.chain(self.by_kind(SourceKind::Product)).collect()
    }

    fn by_kind(&self, kind: SourceKind) -> impl Iterator<Item = &dyn ProductSource> {
        self.sources
            .iter()
            .map(|s| s.as_ref())
            .filter(move |s| s.kind() == kind)
    }

    /// Search all applicable sources for `code`.
    pub async fn search(&self, code: &Barcode) -> LookupOutcome {
        self.search_with_progress(code, &NoProgress).await
    }

    /// Search, reporting each source to `progress` before it is consulted.
    ///
    /// Runs until the first match or until every source has been tried.
    pub async fn search_with_progress(
        &self,
        code: &Barcode,
        progress: &dyn SearchProgress,
    ) -> LookupOutcome {
        let code = code.normalize();
        let plan = self.plan(&code);
        tracing::debug!(
            "Searching {} ({}) across {} sources",
            code,
            code.code_type(),
            plan.len()
        );

        for source in plan {
            progress.consulting(source.name());
            tracing::debug!("Consulting {} for {}", source.name(), code);

            match AssertUnwindSafe(source.lookup(&code)).catch_unwind().await {
                Ok(LookupOutcome::Found(record)) => {
                    tracing::info!("Found {} via {}", code, source.name());
                    return LookupOutcome::Found(record);
                }
                Ok(LookupOutcome::NotFound) => {}
                Err(_) => {
                    tracing::error!("{} panicked while looking up {}", source.name(), code);
                }
            }
        }

        tracing::info!("No source knows {}", code);
        LookupOutcome::NotFound
    }
}
