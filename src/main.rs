//! CLI entry point for the section-stitching map converter

use clap::Parser;
use std::process::ExitCode;
use tilestitch::io::cli::{Cli, Pipeline};

fn main() -> ExitCode {
    // Render clap's own usage text but keep the single failure exit code
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };

    let mut pipeline = Pipeline::new(cli);
    match pipeline.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
