// crates/domain/src/command.rs
use crate::value_objects::Version;

const SET_GOAL: &str = "versions:set";
const COMMIT_GOAL: &str = "versions:commit";
const NEW_VERSION_PROPERTY: &str = "-DnewVersion=";

/// One invocation of the external version tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionCommand {
    /// Stage the new version in the build descriptor.
    Set(Version),
    /// Make the staged edit permanent.
    Commit,
}

impl VersionCommand {
    /// Argument vector handed to the tool, one element per argument.
    pub fn args(&self) -> Vec<String> {
        match self {
            Self::Set(version) => vec![
                SET_GOAL.to_string(),
                format!("{NEW_VERSION_PROPERTY}{version}"),
            ],
            Self::Commit => vec![COMMIT_GOAL.to_string()],
        }
    }
}
