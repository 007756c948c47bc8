//! Google Shopping integration (google-data-scraper on RapidAPI)
//!
//! Marketplace results scraped from Google Shopping. Requires a RapidAPI key.

pub mod dto;
mod adapter;
mod client;

pub use client::GoogleShoppingClient;
