//! Order mapping against the catalog.

use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use tracing::{debug, info};

use crate::catalog::{load_catalog, Catalog, CatalogError, CatalogItem, CatalogStats};
use crate::config::Config;

use super::csv::to_csv;
use super::parser::parse_order_text;
use super::types::{MappedItem, MappingIssue, OrderLine};

/// Maps customer order lines to catalog items and renders CSV order sheets.
///
/// The catalog is loaded and indexed on the first call that needs it and
/// cached for the lifetime of the mapper. A failed load caches nothing, so
/// a later call retries. Once loaded, all operations are read-only and the
/// mapper can be shared across threads.
pub struct OrderMapper {
    catalog_path: PathBuf,
    catalog: OnceCell<Catalog>,
}

impl OrderMapper {
    /// Create a mapper reading its catalog from the given path.
    pub fn new(catalog_path: impl Into<PathBuf>) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            catalog: OnceCell::new(),
        }
    }

    /// Create a mapper from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.catalog.path.clone())
    }

    /// Path the catalog is (or will be) loaded from.
    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    /// The loaded catalog, loading and indexing it on first call.
    pub fn catalog(&self) -> Result<&Catalog, CatalogError> {
        self.catalog.get_or_try_init(|| {
            info!("Loading catalog from {}", self.catalog_path.display());
            let data = load_catalog(&self.catalog_path)?;
            Ok(Catalog::new(data))
        })
    }

    /// Find a catalog item by code or name.
    pub fn find_catalog_item(
        &self,
        identifier: &str,
    ) -> Result<Option<&CatalogItem>, CatalogError> {
        Ok(self.catalog()?.find_item(identifier))
    }

    /// Map order lines to catalog items.
    ///
    /// Every input line yields exactly one mapped item or exactly one
    /// issue; a bad line never aborts the batch. Only a catalog load
    /// failure returns `Err`.
    pub fn map_order_items(
        &self,
        order_items: &[OrderLine],
    ) -> Result<(Vec<MappedItem>, Vec<MappingIssue>), CatalogError> {
        let catalog = self.catalog()?;

        let mut mapped_items = Vec::new();
        let mut issues = Vec::new();

        for (idx, line) in order_items.iter().enumerate() {
            let row = idx + 1;
            let identifier = line.identifier.trim();

            if identifier.is_empty() {
                issues.push(MappingIssue::MissingIdentifier { row });
                continue;
            }

            if line.quantity <= 0.0 {
                issues.push(MappingIssue::InvalidQuantity {
                    row,
                    identifier: identifier.to_string(),
                });
                continue;
            }

            match catalog.find_item(identifier) {
                Some(item) => mapped_items.push(MappedItem {
                    item_code: item.item_code.clone(),
                    description: item.item_name.clone(),
                    quantity: line.quantity,
                    category: item.category.clone().unwrap_or_default(),
                    source_file: item.source_file.clone(),
                }),
                None => issues.push(MappingIssue::UnknownItem {
                    row,
                    identifier: identifier.to_string(),
                }),
            }
        }

        debug!(
            "Mapped {} of {} order lines ({} issues)",
            mapped_items.len(),
            order_items.len(),
            issues.len()
        );

        Ok((mapped_items, issues))
    }

    /// Map order lines and render the successes as CSV.
    ///
    /// The CSV text is empty when nothing mapped. Inspect it alongside the
    /// issue list: a batch can partially succeed, returning both.
    pub fn generate_csv_from_order(
        &self,
        order_items: &[OrderLine],
        include_category: bool,
    ) -> Result<(String, Vec<MappingIssue>), CatalogError> {
        let (mapped_items, issues) = self.map_order_items(order_items)?;
        Ok((to_csv(&mapped_items, include_category), issues))
    }

    /// Parse freeform order text and render it as CSV.
    pub fn generate_csv_from_text(
        &self,
        order_text: &str,
        include_category: bool,
    ) -> Result<(String, Vec<MappingIssue>), CatalogError> {
        let order_items = parse_order_text(order_text);
        if order_items.is_empty() {
            return Ok((String::new(), vec![MappingIssue::EmptyOrder]));
        }

        self.generate_csv_from_order(&order_items, include_category)
    }

    /// Statistics over the loaded catalog.
    pub fn catalog_stats(&self) -> Result<CatalogStats, CatalogError> {
        Ok(self.catalog()?.stats())
    }
}
