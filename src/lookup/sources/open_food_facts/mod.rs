//! Open Food Facts integration
//!
//! Crowd-sourced food product database, no API key required.
//!
//! API docs: https://openfoodfacts.github.io/openfoodfacts-server/api/

pub mod dto;
mod adapter;
mod client;

pub use client::OpenFoodFactsClient;
