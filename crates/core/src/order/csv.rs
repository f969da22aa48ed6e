//! CSV serialization of mapped order lines.

use csv::{ReaderBuilder, Terminator, WriterBuilder};

use super::types::MappedItem;

const BASE_HEADER: [&str; 3] = ["Item Code", "Description", "Quantity"];
const FULL_HEADER: [&str; 4] = ["Item Code", "Description", "Quantity", "Category"];

/// Render mapped items as RFC 4180 CSV text (CRLF rows, minimal quoting).
///
/// Returns an empty string - not a header-only CSV - when there is nothing
/// to write; callers must check before treating the result as valid output.
pub fn to_csv(mapped_items: &[MappedItem], include_category: bool) -> String {
    if mapped_items.is_empty() {
        return String::new();
    }

    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    let header: &[&str] = if include_category {
        &FULL_HEADER
    } else {
        &BASE_HEADER
    };
    writer
        .write_record(header)
        .expect("write to in-memory buffer");

    for item in mapped_items {
        let quantity = item.quantity.to_string();
        let mut record = vec![
            item.item_code.as_str(),
            item.description.as_str(),
            quantity.as_str(),
        ];
        if include_category {
            record.push(item.category.as_str());
        }
        writer
            .write_record(&record)
            .expect("write to in-memory buffer");
    }

    let bytes = writer.into_inner().expect("flush in-memory buffer");
    String::from_utf8(bytes).expect("csv output is UTF-8")
}

/// Result of checking CSV text against the order-sheet layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvValidation {
    pub valid: bool,
    /// Total rows, header included.
    pub row_count: usize,
    /// Rows excluding the header.
    pub data_rows: usize,
    /// Header column count.
    pub columns: usize,
    /// Why validation failed, if it did.
    pub error: Option<String>,
}

impl CsvValidation {
    fn invalid(row_count: usize, error: impl Into<String>) -> Self {
        Self {
            valid: false,
            row_count,
            data_rows: 0,
            columns: 0,
            error: Some(error.into()),
        }
    }
}

/// Check that CSV text looks like a generated order sheet: one of the two
/// expected headers and at least one data row.
pub fn validate_csv(content: &str) -> CsvValidation {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        match record {
            Ok(record) => rows.push(record.iter().map(str::to_string).collect()),
            Err(e) => {
                return CsvValidation::invalid(rows.len(), format!("CSV parsing error: {e}"))
            }
        }
    }

    if rows.is_empty() {
        return CsvValidation::invalid(0, "CSV is empty");
    }

    let header: Vec<&str> = rows[0].iter().map(String::as_str).collect();
    if header != BASE_HEADER && header != FULL_HEADER {
        return CsvValidation::invalid(
            rows.len(),
            format!("Unexpected header: {}", header.join(", ")),
        );
    }

    let data_rows = rows.len() - 1;
    if data_rows == 0 {
        return CsvValidation::invalid(rows.len(), "No data rows found");
    }

    CsvValidation {
        valid: true,
        row_count: rows.len(),
        data_rows,
        columns: header.len(),
        error: None,
    }
}
