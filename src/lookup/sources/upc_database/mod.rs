//! UPCDatabase.org integration
//!
//! UPC registry with manufacturer data. Requires an API key.
//!
//! API docs: https://upcdatabase.org/api

pub mod dto;
mod adapter;
mod client;

pub use client::UpcDatabaseClient;
