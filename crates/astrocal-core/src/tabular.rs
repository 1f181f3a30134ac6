//! Tabular-text parser — permissive delimited text into header-keyed records.
//!
//! The published sheets arrive as RFC 4180-ish CSV: comma-separated cells,
//! double-quoted cells that may embed commas, newlines, and doubled-quote
//! escapes. [`parse_rows`] turns the raw text into rows of cells;
//! [`to_records`] zips each data row against the normalized header row into
//! a [`TabularRecord`].
//!
//! Both stages are total over arbitrary text: structurally odd input
//! (unterminated quotes, ragged rows, blank lines) degrades to fewer or
//! shorter rows, never to an error.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::key;

// ---------------------------------------------------------------------------
// Raw rows
// ---------------------------------------------------------------------------

/// Split delimited text into rows of cells.
///
/// Rows end on an unquoted `\n`, `\r\n`, or bare `\r`; a trailing row
/// without a terminator is still emitted. A terminator only emits a row
/// when there is accumulated content, so a trailing newline does not
/// produce a phantom empty row. An unterminated quote consumes the rest of
/// the text as quoted content.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                cell.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => row.push(std::mem::take(&mut cell)),
            '\n' | '\r' if !in_quotes => {
                if !cell.is_empty() || !row.is_empty() {
                    row.push(std::mem::take(&mut cell));
                    rows.push(std::mem::take(&mut row));
                }
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            _ => cell.push(c),
        }
    }
    if !cell.is_empty() || !row.is_empty() {
        row.push(cell);
        rows.push(row);
    }
    rows
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One logical data row, keyed by normalized header text.
///
/// Lookups never fail: an absent or short column reads as `""`, so sheets
/// may rename, reorder, or drop columns without breaking the callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TabularRecord {
    fields: BTreeMap<String, String>,
}

impl TabularRecord {
    /// Build a record directly from key/value pairs. Keys are normalized,
    /// so callers may pass display-form header text.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let fields = pairs
            .into_iter()
            .map(|(k, v)| (key::normalize(k.as_ref()), v.into()))
            .collect();
        Self { fields }
    }

    /// The value under a canonical key, or `""` when the column is absent.
    pub fn field(&self, canonical_key: &str) -> &str {
        self.fields.get(canonical_key).map_or("", String::as_str)
    }

    pub fn get(&self, canonical_key: &str) -> Option<&str> {
        self.fields.get(canonical_key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

/// Zip data rows against the header row (row 0) into records.
///
/// Header cells go through the key normalizer; duplicate headers collide
/// last-wins. Cell values are trimmed. Rows whose cells are all blank
/// after trimming are dropped. Missing trailing cells read as empty.
pub fn to_records(rows: Vec<Vec<String>>) -> Vec<TabularRecord> {
    let mut iter = rows.into_iter();
    let Some(header_cells) = iter.next() else {
        return Vec::new();
    };
    let header: Vec<String> = header_cells.iter().map(|h| key::normalize(h)).collect();

    iter.filter(|cells| cells.iter().any(|c| !c.trim().is_empty()))
        .map(|cells| {
            let fields = header
                .iter()
                .enumerate()
                .map(|(idx, k)| {
                    let value = cells.get(idx).map(|c| c.trim()).unwrap_or_default();
                    (k.clone(), value.to_string())
                })
                .collect();
            TabularRecord { fields }
        })
        .collect()
}

/// Parse delimited text straight into records.
pub fn parse_records(text: &str) -> Vec<TabularRecord> {
    to_records(parse_rows(text))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
