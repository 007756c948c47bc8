//! World Wide Open Product Database integration
//!
//! Non-food sibling of Open Food Facts with a slightly different response
//! envelope. No API key required.

pub mod dto;
mod adapter;
mod client;

pub use client::OpenProductDataClient;
