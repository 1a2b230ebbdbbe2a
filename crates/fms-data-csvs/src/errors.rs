use thiserror::Error;

pub type ImportResult<T> = Result<T, ImportError>;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing required headers: {0:?}")]
    MissingHeaders(Vec<String>),

    #[error("conflicting headers: {first:?}, {second:?}")]
    ConflictingHeaders { first: String, second: String },

    #[error("duplicate fms_id: {0:?}")]
    DuplicateFmsId(String),

    #[error("invalid team cell: {0:?}")]
    InvalidTeamCell(String),

    #[error("field {field:?}: expected {expected} value, got {value:?}")]
    FieldType {
        field: String,
        expected: &'static str,
        value: String,
    },

    #[error("{alliance}: expected rp = {expected}, got rp = {actual}")]
    RankingPointMismatch {
        alliance: &'static str,
        expected: i64,
        actual: i64,
    },

    #[error("{alliance}: invalid endgamePoints: {points}")]
    InvalidEndgamePoints {
        alliance: &'static str,
        points: i64,
    },

    #[error("in row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: Box<ImportError>,
    },
}

impl ImportError {
    /// Wraps a mapping or validation error with its originating 1-based row
    /// number (the header line is row 1).
    pub fn in_row(self, row: usize) -> ImportError {
        ImportError::Row {
            row,
            source: Box::new(self),
        }
    }
}
