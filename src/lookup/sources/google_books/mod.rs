//! Google Books integration
//!
//! Bibliographic catalogue queried by ISBN. No API key required for
//! volume searches.
//!
//! API docs: https://developers.google.com/books/docs/v1/using

pub mod dto;
mod adapter;
mod client;

pub use client::GoogleBooksClient;
