use std::path::Path;

use pom_version_sync_domain::{SyncConfig, SyncOutcome, Version, VersionCommand};
use pom_version_sync_ports::{
    manifest::{FieldValue, ManifestSource},
    notify::SyncNotifier,
    process::{CommandRunner, Invocation},
};
use pom_version_sync_shared_kernel::{FieldProblem, Result, SyncError};

pub struct SyncVersion<'a> {
    manifest: &'a dyn ManifestSource,
    runner: &'a dyn CommandRunner,
    notifier: &'a dyn SyncNotifier,
}

impl<'a> SyncVersion<'a> {
    pub fn new(
        manifest: &'a dyn ManifestSource,
        runner: &'a dyn CommandRunner,
        notifier: &'a dyn SyncNotifier,
    ) -> Self {
        Self { manifest, runner, notifier }
    }

    /// Runs load, report, set and commit in order, stopping at the first error.
    pub fn run(&self, config: &SyncConfig) -> Result<SyncOutcome> {
        let version = self.load_version(config)?;
        self.notifier.report(&config.report_line(version.as_str()));

        let commands = vec![VersionCommand::Set(version.clone()), VersionCommand::Commit];
        for command in &commands {
            self.apply(config, command)?;
        }

        Ok(SyncOutcome { version, commands })
    }

    fn load_version(&self, config: &SyncConfig) -> Result<Version> {
        let path = config.manifest_path();
        log::debug!("reading '{}' from {}", config.field, path.display());
        let value = self.manifest.read_field(&path, &config.field)?;
        field_to_version(value, &path, &config.field)
    }

    fn apply(&self, config: &SyncConfig, command: &VersionCommand) -> Result<()> {
        let invocation = Invocation {
            program: config.tool.clone(),
            args: command.args(),
            working_dir: config.working_dir.clone(),
        };
        log::info!("running {}", invocation.display());
        self.runner.run(&invocation)
    }
}

fn field_to_version(value: FieldValue, path: &Path, field: &str) -> Result<Version> {
    let problem = match value {
        FieldValue::Text(text) => match Version::new(text) {
            Ok(version) => return Ok(version),
            Err(problem) => problem,
        },
        FieldValue::Absent => FieldProblem::Absent,
        FieldValue::Null => FieldProblem::Null,
        FieldValue::Other => FieldProblem::NotAString,
    };
    Err(SyncError::MissingField {
        path: path.to_path_buf(),
        field: field.to_string(),
        reason: problem,
    })
}
