use std::fs::{self, File};
use std::path::{Path, PathBuf};

use fms_data_csvs::{read_match_results_csv, MatchResult};

use crate::error::{CliError, CliResult};

pub fn execute(
    input_file: PathBuf,
    output_dir: PathBuf,
    skip_existing: bool,
    verbose: bool,
) -> CliResult<()> {
    check_output_dir(&output_dir, skip_existing)?;

    let outcome = read_match_results_csv(&input_file)?;

    if verbose {
        for skipped in &outcome.skipped {
            println!("skipping row {}: missing {:?}", skipped.row, skipped.missing);
        }
        println!(
            "read {} match results from {}",
            outcome.results.len(),
            input_file.display()
        );
    }

    for (fms_id, result) in &outcome.results {
        write_match_artifacts(&output_dir, fms_id, result, verbose)?;
    }

    Ok(())
}

/// The output directory must exist and, unless the caller opted into
/// pre-existing contents, be empty. Checked before any input is read.
fn check_output_dir(output_dir: &Path, skip_existing: bool) -> CliResult<()> {
    let non_empty = fs::read_dir(output_dir)?.next().is_some();
    if non_empty && !skip_existing {
        return Err(CliError::OutputDirNotEmpty(output_dir.to_path_buf()));
    }
    Ok(())
}

/// Writes the `.html` listing placeholder and the pretty-printed `.json`
/// document for one match. Ids with either artifact already on disk are
/// skipped, never overwritten.
fn write_match_artifacts(
    output_dir: &Path,
    fms_id: &str,
    result: &MatchResult,
    verbose: bool,
) -> CliResult<()> {
    let html_path = output_dir.join(format!("{}.html", fms_id));
    if html_path.exists() {
        if verbose {
            println!("skipping match {}: {} exists", fms_id, html_path.display());
        }
        return Ok(());
    }

    let json_path = output_dir.join(format!("{}.json", fms_id));
    if json_path.exists() {
        if verbose {
            println!("skipping match {}: {} exists", fms_id, json_path.display());
        }
        return Ok(());
    }

    // Left empty, only needed for directory listings.
    File::create(&html_path)?;

    fs::write(&json_path, serde_json::to_string_pretty(result)?)?;
    if verbose {
        println!("wrote {}", json_path.display());
    }

    Ok(())
}
