//! Application-wide error types.
//!
//! This module provides a unified error hierarchy for the application.
//! Library modules use specific error types via `thiserror`, while
//! CLI/main uses `anyhow` for convenient error propagation.
//!
//! # Design
//!
//! - [`Error`]: Top-level application error enum
//! - Module-specific errors (e.g., [`InputError`], [`SourceError`]) for detailed handling
//! - All errors implement `std::error::Error` for compatibility
//!
//! Source errors never reach the user during a lookup: the sources log them and
//! report "not found". They surface here only when the lookup service itself
//! cannot be built.
//!
//! # Example
//!
//! ```ignore
//! use barcode_lookup::error::{Error, Result};
//!
//! fn check(raw: &str) -> Result<Barcode> {
//!     let code = Barcode::parse(raw)?; // Input errors auto-convert
//!     Ok(code)
//! }
//! ```

use crate::barcode::{GenerateError, InputError};
use crate::config::ConfigError;
use crate::lookup::SourceError;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
///
/// Aggregates errors from all subsystems for unified handling.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Rejected barcode input
    #[error("Invalid barcode: {0}")]
    Input(#[from] InputError),

    /// Rejected generation parameters
    #[error("Cannot generate codes: {0}")]
    Generate(#[from] GenerateError),

    /// Lookup infrastructure error
    #[error("Lookup error: {0}")]
    Source(#[from] SourceError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().context(ctx))
    }
}
