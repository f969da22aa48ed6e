//! Catalog document loading.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::types::{CatalogData, CatalogError};

/// Load a catalog document from a JSON file.
///
/// A plain read-and-parse; caching is owned by the caller (in practice
/// [`crate::order::OrderMapper`], which loads at most once per instance).
pub fn load_catalog(path: &Path) -> Result<CatalogData, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::NotFound(path.display().to_string()));
    }

    let raw = fs::read_to_string(path)?;
    let data: CatalogData =
        serde_json::from_str(&raw).map_err(|e| CatalogError::Malformed(e.to_string()))?;

    debug!(
        "Loaded catalog with {} items from {}",
        data.items.len(),
        path.display()
    );

    Ok(data)
}
