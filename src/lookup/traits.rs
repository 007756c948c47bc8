//! Trait definition for product sources.
//!
//! The trait enables dependency injection and mocking for tests: production
//! code builds the real source clients, while tests substitute mock sources
//! that count their calls.

use async_trait::async_trait;

use super::domain::{LookupOutcome, SourceKind};
use crate::barcode::Barcode;

/// One external product or book catalogue.
///
/// `lookup` fails closed: network, HTTP-status and parse failures are handled
/// inside the implementation and reported as [`LookupOutcome::NotFound`].
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Human-readable name shown while the source is consulted.
    fn name(&self) -> &'static str;

    /// Catalogue family, used to order the cascade.
    fn kind(&self) -> SourceKind;

    /// Look up a normalized code.
    async fn lookup(&self, code: &Barcode) -> LookupOutcome;
}
