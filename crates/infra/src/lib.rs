// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod console;
pub mod persistence;
pub mod process;

pub use console::ConsoleNotifier;
pub use persistence::ManifestFileReader;
pub use process::{DryRunCommandRunner, ProcessCommandRunner};
