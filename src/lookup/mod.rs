//! Product lookup - queries external catalogues for a barcode.
//!
//! # Architecture
//!
//! Same separation as every integration in this crate:
//! - **Domain models** (`domain.rs`) - [`ProductRecord`], [`LookupOutcome`]
//! - **API DTOs** (`sources/*/dto.rs`) - exact provider response shapes
//! - **Adapters** (`sources/*/adapter.rs`) - DTO -> domain conversion
//! - **Clients** (`sources/*/client.rs`) - HTTP, one request per lookup
//! - **Service** (`service.rs`) - the ordered, first-match cascade
//!
//! # Usage
//!
//! ```ignore
//! let service = LookupService::from_config(&config)?;
//! let code = Barcode::parse("9780306406157")?;
//! match service.search(&code).await {
//!     LookupOutcome::Found(record) => println!("{} ({})", record.name, record.source),
//!     LookupOutcome::NotFound => println!("not found"),
//! }
//! ```

pub mod domain;
pub mod fields;
pub mod http;
pub mod links;
pub mod service;
pub mod sources;
pub mod traits;

pub use domain::{Details, LookupOutcome, ProductRecord, SourceError, SourceKind};
pub use links::{SearchLink, fallback_links};
pub use service::{LookupService, NoProgress, SearchProgress};
pub use traits::ProductSource;
