//! Open Library integration
//!
//! Internet Archive's open bibliographic catalogue, queried through the
//! Books API with `jscmd=data`. No API key required.
//!
//! API docs: https://openlibrary.org/dev/docs/api/books

pub mod dto;
mod adapter;
mod client;

pub use client::OpenLibraryClient;
