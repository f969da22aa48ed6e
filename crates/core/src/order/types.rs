//! Types for order intake and mapping.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One raw order line: an identifier (code or name) and a quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Item code or name, exactly as the customer typed it.
    pub identifier: String,
    /// Ordered quantity; may be fractional (e.g. 2.5 kg).
    pub quantity: f64,
}

/// A successfully resolved order line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappedItem {
    /// Canonical item code from the catalog.
    pub item_code: String,
    /// Catalog item name.
    pub description: String,
    /// Quantity carried over from the order line, not validated against
    /// stock.
    pub quantity: f64,
    /// Catalog category; empty when the item has none.
    pub category: String,
    /// Provenance of the catalog entry.
    pub source_file: String,
}

/// A per-row mapping problem.
///
/// Rows are 1-based. Issues are collected in encounter order and never
/// abort the batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingIssue {
    #[error("Row {row}: Missing item identifier")]
    MissingIdentifier { row: usize },

    #[error("Row {row}: Invalid quantity for '{identifier}'")]
    InvalidQuantity { row: usize, identifier: String },

    #[error("Row {row}: Item '{identifier}' not found in catalog")]
    UnknownItem { row: usize, identifier: String },

    #[error("No valid order items found in input text")]
    EmptyOrder,
}

impl MappingIssue {
    /// The 1-based input row this issue refers to, if any.
    pub fn row(&self) -> Option<usize> {
        match self {
            Self::MissingIdentifier { row }
            | Self::InvalidQuantity { row, .. }
            | Self::UnknownItem { row, .. } => Some(*row),
            Self::EmptyOrder => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_messages() {
        assert_eq!(
            MappingIssue::MissingIdentifier { row: 3 }.to_string(),
            "Row 3: Missing item identifier"
        );
        assert_eq!(
            MappingIssue::InvalidQuantity {
                row: 1,
                identifier: "10026".to_string()
            }
            .to_string(),
            "Row 1: Invalid quantity for '10026'"
        );
        assert_eq!(
            MappingIssue::UnknownItem {
                row: 2,
                identifier: "INVALID_ITEM".to_string()
            }
            .to_string(),
            "Row 2: Item 'INVALID_ITEM' not found in catalog"
        );
        assert_eq!(
            MappingIssue::EmptyOrder.to_string(),
            "No valid order items found in input text"
        );
    }

    #[test]
    fn test_issue_row() {
        assert_eq!(MappingIssue::MissingIdentifier { row: 7 }.row(), Some(7));
        assert_eq!(MappingIssue::EmptyOrder.row(), None);
    }
}
