// src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use log::LevelFilter;
use pom_version_sync_domain::config::{DEFAULT_FIELD, DEFAULT_MANIFEST, DEFAULT_TARGET, DEFAULT_TOOL};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "pom_version_sync",
    version = crate::VERSION,
    about = "Set the pom.xml version to the version field of package.json"
)]
pub struct Args {
    /// Directory holding the manifest; the tool also runs there
    #[arg(short = 'C', long = "dir", value_hint = ValueHint::DirPath)]
    pub dir: Option<PathBuf>,

    /// Manifest to read the version from
    #[arg(long, default_value = DEFAULT_MANIFEST, value_hint = ValueHint::FilePath, help_heading = "Source")]
    pub manifest: PathBuf,

    /// Top-level field holding the version
    #[arg(long, default_value = DEFAULT_FIELD, help_heading = "Source")]
    pub field: String,

    /// Version tool to invoke
    #[arg(long, default_value = DEFAULT_TOOL, value_hint = ValueHint::CommandName, help_heading = "Tool")]
    pub tool: String,

    /// Name of the descriptor being updated, used in the report line
    #[arg(long, default_value = DEFAULT_TARGET, help_heading = "Tool")]
    pub target: String,

    /// Print the commands instead of running them
    #[arg(long, help_heading = "Tool")]
    pub dry_run: bool,

    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Logging")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose", help_heading = "Logging")]
    pub quiet: bool,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
