//! Freeform order text parsing.
//!
//! One entry per line, `identifier: quantity` or `identifier, quantity`
//! (colon checked before comma). Blank lines and `#` comments are skipped.
//! Lines with no separator or a non-numeric quantity are silently dropped
//! rather than reported; mapping is where per-row errors surface.

use super::types::OrderLine;

/// Parse order lines out of freeform text, preserving input order.
pub fn parse_order_text(text: &str) -> Vec<OrderLine> {
    let mut order_items = Vec::new();

    for line in text.trim().lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts = line.split_once(':').or_else(|| line.split_once(','));
        let Some((identifier, quantity_text)) = parts else {
            continue;
        };

        if let Ok(quantity) = quantity_text.trim().parse::<f64>() {
            order_items.push(OrderLine {
                identifier: identifier.trim().to_string(),
                quantity,
            });
        }
    }

    order_items
}
