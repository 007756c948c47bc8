//! Barcode Lookup - identify products from their barcodes.
//!
//! This application validates and classifies retail and book barcodes,
//! converts between UPC-A, EAN-13, ISBN-10 and ISBN-13, and identifies
//! products by consulting a cascade of public catalogues until one of them
//! knows the code.

pub mod barcode;
pub mod cli;
pub mod config;
pub mod error;
pub mod lookup;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging (RUST_LOG overrides the default)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("barcode_lookup=info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli::run_command(&args)
}
