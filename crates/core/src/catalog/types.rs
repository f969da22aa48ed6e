//! Types for the product catalog.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use thiserror::Error;

/// A single catalog entry.
///
/// All fields tolerate absence in the source document; codes are expected
/// unique but not enforced (a later duplicate shadows an earlier one in the
/// index).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Canonical item code (e.g. "10026").
    #[serde(default)]
    pub item_code: String,
    /// Display name (e.g. "BLACK CARDAMOM PP").
    #[serde(default)]
    pub item_name: String,
    /// Category, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Which source document the entry came from.
    #[serde(default)]
    pub source_file: String,
}

/// The raw catalog document: a metadata block plus the item list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogData {
    /// Opaque metadata (version, generated_at, ...), passed through
    /// verbatim to [`CatalogStats`].
    #[serde(default)]
    pub metadata: Map<String, Value>,
    #[serde(default)]
    pub items: Vec<CatalogItem>,
}

/// Catalog statistics.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogStats {
    /// Total catalog entries.
    pub total_items: usize,
    /// Distinct categories, in the order they were first encountered.
    pub categories: Vec<String>,
    /// Item count per category; uncategorized items tally under "Unknown".
    pub category_counts: HashMap<String, usize>,
    /// Metadata block from the loaded catalog, verbatim.
    pub metadata: Map<String, Value>,
}

/// Errors for catalog loading.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog file not found at: {0}")]
    NotFound(String),

    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Malformed(String),
}
