//! Test utilities and fixtures for barcode-lookup tests.
//!
//! This module provides common fixtures to reduce boilerplate in tests.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{sample_record, sample_code};
//!
//! #[test]
//! fn test_something() {
//!     let record = sample_record("Open Food Facts");
//!     let code = sample_code();
//!     // ... test logic
//! }
//! ```

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use crate::barcode::Barcode;
use crate::lookup::{Details, ProductRecord};

/// A well-known EAN-13 with a valid check digit.
pub const SAMPLE_EAN13: &str = "7891000315507";

/// A valid ISBN-13 (bookland prefix 978).
pub const SAMPLE_ISBN13: &str = "9780306406157";

/// Parsed [`SAMPLE_EAN13`].
pub fn sample_code() -> Barcode {
    Barcode::from_trusted(SAMPLE_EAN13.to_string())
}

/// Creates a product record attributed to `source` with sensible defaults.
///
/// Customize using struct update syntax:
///
/// ```ignore
/// let record = ProductRecord {
///     name: "Custom".to_string(),
///     ..sample_record("UPC ItemDB")
/// };
/// ```
pub fn sample_record(source: &str) -> ProductRecord {
    ProductRecord {
        name: "Chocolate Milk Powder".to_string(),
        brand: "Nestle".to_string(),
        category: "Beverages".to_string(),
        image: "https://images.example.org/7891000315507.jpg".to_string(),
        details: Details::new()
            .with("quantity", "400 g")
            .with("barcode", SAMPLE_EAN13),
        source: source.to_string(),
        barcode: SAMPLE_EAN13.to_string(),
        product_url: None,
    }
}

/// Starts a local HTTP server that answers every request with the same
/// canned response, and returns its base URL (`http://127.0.0.1:<port>`).
///
/// The server runs on the test's runtime and stops with it.
///
/// ```ignore
/// let base = serve_canned(500, "text/plain", "oops").await;
/// let client = OpenFoodFactsClient::with_base_url(reqwest::Client::new(), base);
/// ```
pub async fn serve_canned(status: u16, content_type: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("Test server has no address");
    let response = format!(
        "HTTP/1.1 {} Canned\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        content_type,
        body.len(),
        body
    );

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            // Drain the request head so closing the socket does not reset it
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match socket.read(&mut chunk).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&chunk[..n]),
                }
            }
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{}", addr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::barcode::CodeType;

    #[test]
    fn test_sample_code_is_valid_ean13() {
        let code = sample_code();
        assert_eq!(code.code_type(), CodeType::Ean13);
        assert_eq!(Barcode::parse(SAMPLE_EAN13).unwrap(), code);
    }

    #[test]
    fn test_sample_isbn_classifies_as_book() {
        let code = Barcode::parse(SAMPLE_ISBN13).unwrap();
        assert_eq!(code.code_type(), CodeType::Isbn13);
    }

    #[tokio::test]
    async fn test_canned_server_answers() {
        let base = serve_canned(404, "application/json", "{}").await;
        let response = reqwest::get(format!("{}/anything", base)).await.unwrap();
        assert_eq!(response.status().as_u16(), 404);
        assert_eq!(response.text().await.unwrap(), "{}");
    }

    #[test]
    fn test_sample_record_uses_source() {
        let record = sample_record("Google Books");
        assert_eq!(record.source, "Google Books");
        assert_eq!(record.details.get("barcode"), Some(SAMPLE_EAN13));
    }
}
