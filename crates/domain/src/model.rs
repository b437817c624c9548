// crates/domain/src/model.rs
use crate::{command::VersionCommand, value_objects::Version};

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    pub version: Version,
    pub commands: Vec<VersionCommand>,
}
