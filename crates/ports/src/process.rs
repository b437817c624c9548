// crates/ports/src/process.rs
use std::path::PathBuf;

use pom_version_sync_shared_kernel::Result;

/// A fully resolved external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
}

impl Invocation {
    /// Command line for logs and error messages. Not fed to a shell.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Port for running a command to completion.
///
/// Implementations block until the child exits and return
/// `SyncError::ExternalTool` when it cannot be spawned or exits non-zero.
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> Result<()>;
}
