// crates/ports/src/notify.rs

/// Port for the single informational line a run prints.
///
/// Best-effort: implementations swallow write failures.
pub trait SyncNotifier {
    fn report(&self, line: &str);
}
