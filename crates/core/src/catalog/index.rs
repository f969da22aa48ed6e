//! Catalog lookup index and statistics.

use std::collections::HashMap;

use serde_json::{Map, Value};

use super::types::{CatalogData, CatalogItem, CatalogStats};

/// Lookup structures over the item list: by code, by exact name, by
/// lowercased name. Built in one linear pass; duplicate keys are
/// last-write-wins, so a later item silently shadows an earlier one.
#[derive(Debug, Default)]
struct CatalogIndex {
    by_code: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
    by_name_lower: HashMap<String, usize>,
}

impl CatalogIndex {
    fn build(items: &[CatalogItem]) -> Self {
        let mut index = Self::default();

        for (pos, item) in items.iter().enumerate() {
            let code = item.item_code.trim();
            let name = item.item_name.trim();

            if !code.is_empty() {
                index.by_code.insert(code.to_string(), pos);
            }

            if !name.is_empty() {
                index.by_name.insert(name.to_string(), pos);
                index.by_name_lower.insert(name.to_lowercase(), pos);
            }
        }

        index
    }
}

/// A loaded catalog with its lookup index.
pub struct Catalog {
    data: CatalogData,
    index: CatalogIndex,
}

impl Catalog {
    /// Index a loaded catalog document.
    pub fn new(data: CatalogData) -> Self {
        let index = CatalogIndex::build(&data.items);
        Self { data, index }
    }

    /// Find an item by code or name.
    ///
    /// Tries, in strict order: exact code, exact name, lowercased name
    /// against a lowercased copy of the identifier. Codes take priority
    /// over names: codes are assumed unique, names may collide
    /// case-insensitively.
    pub fn find_item(&self, identifier: &str) -> Option<&CatalogItem> {
        let identifier = identifier.trim();

        let pos = self
            .index
            .by_code
            .get(identifier)
            .or_else(|| self.index.by_name.get(identifier))
            .or_else(|| self.index.by_name_lower.get(&identifier.to_lowercase()))?;

        self.data.items.get(*pos)
    }

    /// All catalog items, in document order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.data.items
    }

    /// The catalog's metadata block.
    pub fn metadata(&self) -> &Map<String, Value> {
        &self.data.metadata
    }

    /// Tally items per category in a single pass.
    ///
    /// Items without a category land in the "Unknown" bucket; categories
    /// are reported in encounter order.
    pub fn stats(&self) -> CatalogStats {
        let mut categories = Vec::new();
        let mut category_counts: HashMap<String, usize> = HashMap::new();

        for item in &self.data.items {
            let category = item.category.as_deref().unwrap_or("Unknown");
            match category_counts.get_mut(category) {
                Some(count) => *count += 1,
                None => {
                    categories.push(category.to_string());
                    category_counts.insert(category.to_string(), 1);
                }
            }
        }

        CatalogStats {
            total_items: self.data.items.len(),
            categories,
            category_counts,
            metadata: self.data.metadata.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(code: &str, name: &str, category: Option<&str>) -> CatalogItem {
        CatalogItem {
            item_code: code.to_string(),
            item_name: name.to_string(),
            category: category.map(str::to_string),
            source_file: "test.xlsx".to_string(),
        }
    }

    fn catalog(items: Vec<CatalogItem>) -> Catalog {
        Catalog::new(CatalogData {
            metadata: Map::new(),
            items,
        })
    }

    #[test]
    fn test_find_by_code() {
        let catalog = catalog(vec![item("10026", "BLACK CARDAMOM PP", Some("Spices"))]);
        let found = catalog.find_item("10026").unwrap();
        assert_eq!(found.item_name, "BLACK CARDAMOM PP");
    }

    #[test]
    fn test_find_by_exact_name() {
        let catalog = catalog(vec![item("10026", "BLACK CARDAMOM PP", Some("Spices"))]);
        let found = catalog.find_item("BLACK CARDAMOM PP").unwrap();
        assert_eq!(found.item_code, "10026");
    }

    #[test]
    fn test_find_by_lowercased_name() {
        let catalog = catalog(vec![item("10026", "BLACK CARDAMOM PP", Some("Spices"))]);
        let found = catalog.find_item("black cardamom pp").unwrap();
        assert_eq!(found.item_code, "10026");
    }

    #[test]
    fn test_find_trims_identifier() {
        let catalog = catalog(vec![item("10026", "BLACK CARDAMOM PP", None)]);
        assert!(catalog.find_item("  10026  ").is_some());
        assert!(catalog.find_item("  black cardamom pp\t").is_some());
    }

    #[test]
    fn test_find_not_found() {
        let catalog = catalog(vec![item("10026", "BLACK CARDAMOM PP", None)]);
        assert!(catalog.find_item("NONEXISTENT_ITEM_12345").is_none());
    }

    #[test]
    fn test_code_takes_priority_over_name() {
        // "10035" is item A's code and item B's name; the code must win.
        let catalog = catalog(vec![
            item("10035", "SESAME SEED BLACK PP", None),
            item("20001", "10035", None),
        ]);
        let found = catalog.find_item("10035").unwrap();
        assert_eq!(found.item_name, "SESAME SEED BLACK PP");
    }

    #[test]
    fn test_exact_name_takes_priority_over_lowercased() {
        let catalog = catalog(vec![
            item("1", "cardamom", None),
            item("2", "CARDAMOM", None),
        ]);
        // Exact match on item 1's name, no case folding involved.
        assert_eq!(catalog.find_item("cardamom").unwrap().item_code, "1");
        assert_eq!(catalog.find_item("CARDAMOM").unwrap().item_code, "2");
    }

    #[test]
    fn test_duplicate_codes_last_write_wins() {
        let catalog = catalog(vec![
            item("10026", "OLD ENTRY", None),
            item("10026", "NEW ENTRY", None),
        ]);
        assert_eq!(catalog.find_item("10026").unwrap().item_name, "NEW ENTRY");
    }

    #[test]
    fn test_empty_code_and_name_not_indexed() {
        let catalog = catalog(vec![item("", "  ", None), item("10026", "GHEE", None)]);
        assert!(catalog.find_item("").is_none());
        assert!(catalog.find_item("10026").is_some());
    }

    #[test]
    fn test_item_fields_trimmed_for_index_but_stored_raw() {
        let catalog = catalog(vec![item(" 10026 ", " COW GHEE 12X8OZ ", None)]);
        let found = catalog.find_item("10026").unwrap();
        assert_eq!(found.item_code, " 10026 ");
    }

    #[test]
    fn test_stats_counts_and_unknown_bucket() {
        let catalog = catalog(vec![
            item("1", "A", Some("Spices")),
            item("2", "B", Some("Oils")),
            item("3", "C", Some("Spices")),
            item("4", "D", None),
        ]);

        let stats = catalog.stats();
        assert_eq!(stats.total_items, 4);
        assert_eq!(stats.categories, vec!["Spices", "Oils", "Unknown"]);
        assert_eq!(stats.category_counts["Spices"], 2);
        assert_eq!(stats.category_counts["Oils"], 1);
        assert_eq!(stats.category_counts["Unknown"], 1);
    }

    #[test]
    fn test_stats_metadata_passthrough() {
        let mut metadata = Map::new();
        metadata.insert("version".to_string(), Value::String("2.0".to_string()));

        let catalog = Catalog::new(CatalogData {
            metadata,
            items: vec![],
        });

        let stats = catalog.stats();
        assert_eq!(stats.total_items, 0);
        assert_eq!(stats.metadata["version"], "2.0");
    }
}
