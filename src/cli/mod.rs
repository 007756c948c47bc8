//! Command-line interface for barcode-lookup.
//!
//! This module provides CLI commands for identifying products by barcode,
//! checking and converting codes, and generating EAN-13 candidates.

mod commands;

pub use commands::{Cli, Commands, run_command};
