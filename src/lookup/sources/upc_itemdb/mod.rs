//! UPC ItemDB integration
//!
//! UPC-focused product registry. The free trial endpoint needs no key but is
//! rate limited per IP, so the base URL is configurable and is normally pointed
//! at a server-side proxy.
//!
//! API docs: https://www.upcitemdb.com/api/explorer

pub mod dto;
mod adapter;
mod client;

pub use client::{DEFAULT_URL, UpcItemDbClient};
