//! Shared HTTP plumbing for the source clients.
//!
//! Every source issues exactly one GET per lookup and expects a JSON body.
//! No retries and no client-side timeout: a slow provider stalls the cascade.

use serde::de::DeserializeOwned;

use super::domain::SourceError;

/// User agent sent to every provider
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client shared by all sources.
///
/// The client accepts gzip-compressed responses and identifies the application.
pub fn build_client() -> Result<reqwest::Client, SourceError> {
    reqwest::Client::builder()
        .gzip(true)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| SourceError::Client(e.to_string()))
}

/// Send a prepared request and decode its JSON body.
///
/// Non-2xx statuses become [`SourceError::Http`]; transport failures
/// [`SourceError::Network`]; undecodable bodies [`SourceError::Parse`].
///
/// Error text never includes the request URL: some providers take their key
/// as a query parameter.
pub async fn get_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, SourceError> {
    let response = request
        .send()
        .await
        .map_err(network_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Http {
            status: status.as_u16(),
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(network_error)?;

    serde_json::from_slice(&body).map_err(|e| SourceError::Parse(e.to_string()))
}

fn network_error(e: reqwest::Error) -> SourceError {
    SourceError::Network(e.without_url().to_string())
}
