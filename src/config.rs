// src/config.rs
use anyhow::{Context, Result};
use pom_version_sync_domain::{SyncConfig, SyncConfigBuilder};

use crate::args::Args;

/// Convert parsed arguments into the run configuration.
pub fn sync_config_from_args(args: &Args) -> Result<SyncConfig> {
    SyncConfigBuilder::default()
        .manifest(args.manifest.clone())
        .field(args.field.clone())
        .tool(args.tool.clone())
        .target(args.target.clone())
        .working_dir(args.dir.clone())
        .dry_run(args.dry_run)
        .build()
        .context("failed to build configuration")
}
