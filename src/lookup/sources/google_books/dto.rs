//! Google Books API Data Transfer Objects
//!
//! These types match what `/books/v1/volumes?q=isbn:` returns.

use serde::Deserialize;

/// Volume search response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumesResponse {
    #[serde(default)]
    pub total_items: u32,
    #[serde(default)]
    pub items: Vec<Volume>,
}

/// A volume (edition)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    pub id: Option<String>,
    #[serde(default)]
    pub volume_info: VolumeInfo,
}

/// Bibliographic data
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    pub publisher: Option<String>,
    /// YYYY, YYYY-MM or YYYY-MM-DD
    pub published_date: Option<String>,
    pub description: Option<String>,
    pub page_count: Option<u32>,
    #[serde(default)]
    pub categories: Vec<String>,
    /// ISO 639-1 code
    pub language: Option<String>,
    pub image_links: Option<ImageLinks>,
}

/// Cover image links
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageLinks {
    pub small_thumbnail: Option<String>,
    pub thumbnail: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================
