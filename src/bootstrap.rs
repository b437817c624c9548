// src/bootstrap.rs
use anyhow::Result;
use pom_version_sync_domain::{SyncConfig, SyncOutcome};
use pom_version_sync_infra::{
    ConsoleNotifier, DryRunCommandRunner, ManifestFileReader, ProcessCommandRunner,
};
use pom_version_sync_ports::process::CommandRunner;
use pom_version_sync_usecase::SyncVersion;

use crate::{args::Args, config::sync_config_from_args, logging};

pub fn run(args: &Args) -> Result<()> {
    logging::init(args.log_level());
    let config = sync_config_from_args(args)?;
    log::debug!("configuration: {config:?}");

    let outcome = run_with_config(&config)?;
    let issued: Vec<String> = outcome.commands.iter().map(|c| c.args().join(" ")).collect();
    log::debug!("synchronized version {} ({})", outcome.version, issued.join("; "));
    Ok(())
}

pub fn run_with_config(config: &SyncConfig) -> Result<SyncOutcome> {
    let manifest = ManifestFileReader;
    let notifier = ConsoleNotifier;
    let process = ProcessCommandRunner;
    let dry_run = DryRunCommandRunner::new(&notifier);
    let runner: &dyn CommandRunner = if config.dry_run { &dry_run } else { &process };

    let usecase = SyncVersion::new(&manifest, runner, &notifier);
    Ok(usecase.run(config)?)
}
