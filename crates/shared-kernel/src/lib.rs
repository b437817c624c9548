// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{ErrorKind, FieldProblem, Result, SyncError, ToolFailure};

pub mod error;
