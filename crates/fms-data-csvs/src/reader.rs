/*!
# CSV Reading & Import Pipeline

One pass over a match-results export: normalize the header line, check the
required headers once, then map and validate every row in file order. The
caller receives the accepted documents (in file order, keyed by `fms_id`)
together with the rows skipped for having no data yet.
*/

use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use csv::Reader;

use crate::{
    errors::{ImportError, ImportResult},
    mapper,
    match_result::MatchResult,
    normalize, schemas, validation,
};

/// A row skipped because one or more required values were empty; these mark
/// matches that have not been played or scored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based row number; the header line is row 1.
    pub row: usize,
    pub missing: Vec<&'static str>,
}

/// Everything one pass over an export produces.
#[derive(Debug, Default)]
pub struct ImportOutcome {
    /// Accepted documents keyed by `fms_id`, in file order.
    pub results: Vec<(String, MatchResult)>,
    pub skipped: Vec<SkippedRow>,
}

/// Reads, normalizes, maps and validates a match-results CSV export.
///
/// The header line is validated before any row is processed: a missing
/// required header or a conflicting header pair is a file-level error. Rows
/// are then handled strictly in file order; a duplicate `fms_id` or any
/// mapping/validation failure aborts the whole read, the latter wrapped
/// with its originating row number.
pub fn read_match_results_csv<P: AsRef<Path>>(path: P) -> ImportResult<ImportOutcome> {
    let file = File::open(path)?;
    let mut rdr = Reader::from_reader(file);

    let headers = normalize::normalize_headers(rdr.headers()?.iter())?;
    check_required_headers(&headers)?;

    // fms_ids seen so far in this run
    let mut seen_ids = HashSet::new();
    let mut outcome = ImportOutcome::default();

    for (i, record) in rdr.records().enumerate() {
        let row_number = i + 2; // 1-based, after the header line
        let record = record?;
        let row = normalize::normalize_record(&headers, &record);

        let missing = mapper::empty_required_fields(&row);
        if !missing.is_empty() {
            outcome.skipped.push(SkippedRow {
                row: row_number,
                missing,
            });
            continue;
        }

        let fms_id = row["fms_id"].to_string();
        if !seen_ids.insert(fms_id.clone()) {
            return Err(ImportError::DuplicateFmsId(fms_id));
        }

        let result = mapper::map_row(&row)
            .and_then(|result| {
                validation::validate_match_result(&result)?;
                Ok(result)
            })
            .map_err(|e| e.in_row(row_number))?;

        outcome.results.push((fms_id, result));
    }

    Ok(outcome)
}

/// Checks the normalized header line against the required-header list.
pub fn check_required_headers(headers: &[String]) -> ImportResult<()> {
    let missing: Vec<String> = schemas::REQUIRED_HEADERS
        .iter()
        .copied()
        .filter(|required| !headers.iter().any(|h| h == required))
        .map(str::to_string)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ImportError::MissingHeaders(missing))
    }
}
