//! CSV document decoding
//!
//! Turns CSV text into positional rows keyed by header name. Quoting follows
//! RFC 4180: a quoted field may contain commas, newlines and doubled quotes.
//! Only document-level problems are errors here; field contents are judged
//! later by the normalizer.

use std::collections::HashMap;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{BudgetError, BudgetResult};

/// Columns every import document must carry (case-sensitive)
pub const REQUIRED_COLUMNS: [&str; 5] = ["type", "description", "amount", "category", "date"];

/// One decoded data row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line number in the source document (the header is line 1)
    pub line: u64,
    fields: HashMap<String, String>,
}

impl RawRow {
    /// Build a row directly from field pairs
    pub fn from_pairs<K, V>(line: u64, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            line,
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Get a field value by column name
    ///
    /// Returns `None` when the row is shorter than the header.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }
}

/// A decoded CSV document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedDocument {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl DecodedDocument {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Decode CSV text into header-keyed rows
///
/// Fails with [`BudgetError::MalformedInput`] when the document has no data
/// row after the header, or when a required column is missing. Blank lines
/// are ignored. Extra columns are allowed and carried through.
pub fn decode(text: &str) -> BudgetResult<DecodedDocument> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::None)
        .from_reader(text.as_bytes());

    let mut records: Vec<StringRecord> = Vec::new();
    for result in reader.records() {
        let record = result?;
        if is_blank(&record) {
            continue;
        }
        records.push(record);
    }

    if records.len() < 2 {
        return Err(BudgetError::MalformedInput(
            "CSV file must have a header and at least one data row".into(),
        ));
    }

    let header_record = records.remove(0);
    let headers: Vec<String> = header_record.iter().map(|h| h.trim().to_string()).collect();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(BudgetError::MalformedInput(format!(
                "Missing required column in CSV: {}",
                column
            )));
        }
    }

    let rows = records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| {
            let line = record
                .position()
                .map(|p| p.line())
                .unwrap_or(idx as u64 + 2);
            let fields = headers
                .iter()
                .zip(record.iter())
                .map(|(h, v)| (h.clone(), v.to_string()))
                .collect();
            RawRow { line, fields }
        })
        .collect();

    log::debug!("Decoded CSV with {} column(s)", headers.len());

    Ok(DecodedDocument { headers, rows })
}

/// A record whose only content is whitespace
fn is_blank(record: &StringRecord) -> bool {
    record.len() <= 1 && record.iter().all(|f| f.trim().is_empty())
}
