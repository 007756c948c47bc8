//! Source clients, one sub-module per external catalogue.
//!
//! Each sub-module follows the same layout:
//! - `dto.rs` - exact response shape of the provider
//! - `adapter.rs` - DTO -> [`ProductRecord`](crate::lookup::ProductRecord) mapping
//! - `client.rs` - the HTTP request and the [`ProductSource`](crate::lookup::ProductSource) impl

pub mod google_books;
pub mod google_shopping;
pub mod open_food_facts;
pub mod open_library;
pub mod open_product_data;
pub mod shopping_scraper;
pub mod upc_database;
pub mod upc_itemdb;

pub use google_books::GoogleBooksClient;
pub use google_shopping::GoogleShoppingClient;
pub use open_food_facts::OpenFoodFactsClient;
pub use open_library::OpenLibraryClient;
pub use open_product_data::OpenProductDataClient;
pub use shopping_scraper::{Market, ShoppingScraperClient};
pub use upc_database::UpcDatabaseClient;
pub use upc_itemdb::UpcItemDbClient;
