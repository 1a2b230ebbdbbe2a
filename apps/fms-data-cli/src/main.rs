use clap::Parser;
use std::path::PathBuf;

mod commands;
mod error;

use error::CliResult;

#[derive(Parser)]
#[command(name = "import-match-results")]
#[command(about = "Import FMS match-result CSV exports into fms_data match artifacts")]
#[command(version)]
struct Cli {
    /// .csv file to read from
    input_file: PathBuf,

    /// fms_data "matches" subfolder to write json results to
    #[arg(short, long)]
    output_dir: PathBuf,

    /// Tolerate a non-empty output directory; matches already written are skipped
    #[arg(long)]
    skip_existing: bool,

    /// Log progress and skip reasons
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    commands::import_match_results::execute(
        cli.input_file,
        cli.output_dir,
        cli.skip_existing,
        cli.verbose,
    )
}
