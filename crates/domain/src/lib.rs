#![allow(clippy::multiple_crate_versions)]

pub mod command;
pub mod config;
pub mod model;
pub mod value_objects;

pub use command::VersionCommand;
pub use config::{SyncConfig, SyncConfigBuilder};
pub use model::SyncOutcome;
pub use value_objects::Version;
