// crates/infra/src/process.rs
use std::process::Command;

use pom_version_sync_ports::{
    notify::SyncNotifier,
    process::{CommandRunner, Invocation},
};
use pom_version_sync_shared_kernel::{Result, SyncError, ToolFailure};

/// Spawns the tool and waits for it. Child stdio is inherited so its output reaches the user as-is.
pub struct ProcessCommandRunner;

impl CommandRunner for ProcessCommandRunner {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        if let Some(dir) = &invocation.working_dir {
            command.current_dir(dir);
        }

        let status = command.status().map_err(|err| SyncError::ExternalTool {
            command: invocation.display(),
            failure: ToolFailure::Spawn(err),
        })?;
        log::info!("{} exited with {status}", invocation.program);

        if !status.success() {
            return Err(SyncError::ExternalTool {
                command: invocation.display(),
                failure: ToolFailure::Status(status.code()),
            });
        }
        Ok(())
    }
}

/// Prints what would be executed instead of executing it.
pub struct DryRunCommandRunner<'a> {
    notifier: &'a dyn SyncNotifier,
}

impl<'a> DryRunCommandRunner<'a> {
    pub fn new(notifier: &'a dyn SyncNotifier) -> Self {
        Self { notifier }
    }
}

impl CommandRunner for DryRunCommandRunner<'_> {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        self.notifier.report(&format!("would run: {}", invocation.display()));
        Ok(())
    }
}
