//! Google Shopping Scraper integration (google-shopping-scraper2 on RapidAPI)
//!
//! Regional marketplace search; the only source that links back to a product
//! page. Requires a RapidAPI key.

pub mod dto;
mod adapter;
mod client;

pub use adapter::Market;
pub use client::ShoppingScraperClient;
