// crates/infra/src/console.rs
use std::io::Write;

use pom_version_sync_ports::notify::SyncNotifier;

/// Writes report lines to stdout.
pub struct ConsoleNotifier;

impl SyncNotifier for ConsoleNotifier {
    fn report(&self, line: &str) {
        let mut out = std::io::stdout().lock();
        if let Err(err) = writeln!(out, "{line}").and_then(|()| out.flush()) {
            log::warn!("could not write to stdout: {err}");
        }
    }
}
