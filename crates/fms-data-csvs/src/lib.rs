/*!
# FMS Match-Result CSV Schemas

This crate is the **data-integrity gateway** between human-curated FMS
match-result CSV exports and the machine-consumed result store: it turns
each spreadsheet row into a validated, schema-shaped match-result document
and rejects malformed or semantically inconsistent rows before they become
persisted artifacts.

## Pipeline

Data flows one way:

raw row → normalized row → match-result document → validated document

- **Normalization** canonicalizes column headers (lowercasing only the
  first dot-delimited segment) and coerces scalar cell values.
- **Mapping** assigns alliance team lists (decoding in-band surrogate `*`
  and disqualification `d` markers), score totals, and schema-typed
  breakdown fields.
- **Validation** re-derives each alliance's ranking points and checks
  endgame totals against the finite set of legal outcomes.

## Schema Versioning

Score-breakdown field names, their declared types, and the legal endgame
totals are fixed per game season (currently 2022). Supporting a new season
means adding a new table in [`schemas`], not changing the algorithm.

## Usage

```rust
use fms_data_csvs::{read_match_results_csv, ImportResult};

fn example() -> ImportResult<()> {
    let outcome = read_match_results_csv("matches.csv")?;
    for (fms_id, result) in &outcome.results {
        println!(
            "{}: red {} - blue {}",
            fms_id, result.alliances.red.score, result.alliances.blue.score
        );
    }
    Ok(())
}
```
*/

pub mod errors;
pub mod mapper;
pub mod match_result;
pub mod normalize;
pub mod reader;
pub mod schemas;
pub mod validation;

// Re-export main types for convenience
pub use errors::{ImportError, ImportResult};
pub use mapper::{map_row, TeamCell};
pub use match_result::{
    AllianceColor, AlliancePair, AllianceResult, Breakdown, BreakdownValue, MatchResult,
};
pub use normalize::{coerce_value, normalize_header, CellValue, NormalizedRow};
pub use reader::{check_required_headers, read_match_results_csv, ImportOutcome, SkippedRow};
pub use schemas::{
    breakdown_field_type, legal_endgame_totals, FieldType, QUALIFICATION_LEVEL, REQUIRED_HEADERS,
    SCHEMA_SEASON,
};
pub use validation::validate_match_result;
