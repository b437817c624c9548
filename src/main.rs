use clap::Parser;
use pom_version_sync::{args::Args, bootstrap};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    match bootstrap::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
