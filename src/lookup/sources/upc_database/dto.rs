//! UPCDatabase.org Data Transfer Objects
//!
//! `/product/{code}` returns a flat object; `valid` tells hit from miss.

use serde::Deserialize;
use serde_json::Value;

/// Product lookup response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductResponse {
    /// `true` on a hit; misses send `false` or the string `"false"`
    #[serde(default)]
    pub valid: Value,
    pub title: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    /// Suggested retail price, string or number depending on the record
    #[serde(default)]
    pub msrp: Value,
}

impl ProductResponse {
    /// Only a boolean `true` counts as a hit
    pub fn is_valid(&self) -> bool {
        self.valid.as_bool() == Some(true)
    }
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================
