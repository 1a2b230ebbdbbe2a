/*!
# Header & Value Normalization

Canonicalizes raw CSV column names and coerces scalar cell values. Pure
functions over a single header line or record; nothing here touches the
filesystem.
*/

use std::collections::HashMap;
use std::fmt;

use crate::errors::{ImportError, ImportResult};

/// A CSV cell after scalar coercion: an integer where the cell parses as
/// one, otherwise the original string unchanged (values such as `"None"`
/// or `"No"` stay strings).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Int(i64),
    Str(String),
}

impl CellValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CellValue::Int(v) => Some(*v),
            CellValue::Str(_) => None,
        }
    }

    /// Empty cells mark matches without data yet; only the literal empty
    /// string counts.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Str(s) if s.is_empty())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Int(v) => write!(f, "{}", v),
            CellValue::Str(s) => f.write_str(s),
        }
    }
}

/// A data record viewed through its normalized headers.
pub type NormalizedRow = HashMap<String, CellValue>;

/// Lowercases only the first dot-delimited segment of a column header:
/// `Red.autoPoints` becomes `red.autoPoints`, the suffix keeps its case.
pub fn normalize_header(raw: &str) -> String {
    match raw.split_once('.') {
        Some((first, rest)) => format!("{}.{}", first.to_lowercase(), rest),
        None => raw.to_lowercase(),
    }
}

/// Attempts integer coercion of a raw cell; on failure the original string
/// is returned unchanged.
pub fn coerce_value(raw: &str) -> CellValue {
    match raw.trim().parse::<i64>() {
        Ok(v) => CellValue::Int(v),
        Err(_) => CellValue::Str(raw.to_string()),
    }
}

/// Normalizes the file's header line, once per import. Two distinct raw
/// headers normalizing to the same key abort the run, naming both
/// originals.
pub fn normalize_headers<'a, I>(raw_headers: I) -> ImportResult<Vec<String>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut normalized = Vec::new();
    let mut sources: HashMap<String, String> = HashMap::new();
    for raw in raw_headers {
        let key = normalize_header(raw);
        if let Some(first) = sources.get(&key) {
            return Err(ImportError::ConflictingHeaders {
                first: first.clone(),
                second: raw.to_string(),
            });
        }
        sources.insert(key.clone(), raw.to_string());
        normalized.push(key);
    }
    Ok(normalized)
}

/// Builds the normalized key → coerced value view of one data record.
pub fn normalize_record(headers: &[String], record: &csv::StringRecord) -> NormalizedRow {
    headers
        .iter()
        .zip(record.iter())
        .map(|(key, raw)| (key.clone(), coerce_value(raw)))
        .collect()
}
