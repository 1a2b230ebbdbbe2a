use std::path::PathBuf;

use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("import error: {0}")]
    Import(#[from] fms_data_csvs::ImportError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("output directory {} not empty and --skip-existing not set", .0.display())]
    OutputDirNotEmpty(PathBuf),
}
