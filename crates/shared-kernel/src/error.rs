// crates/shared-kernel/src/error.rs
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Failed to read manifest '{path}'")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} manifest '{path}': {details}")]
    ManifestParse {
        path: PathBuf,
        format: String,
        details: String,
    },

    #[error("Manifest '{path}' has no usable '{field}' field ({reason})")]
    MissingField {
        path: PathBuf,
        field: String,
        reason: FieldProblem,
    },

    #[error("External command `{command}` failed")]
    ExternalTool {
        command: String,
        #[source]
        failure: ToolFailure,
    },
}

pub type Result<T> = std::result::Result<T, SyncError>;

/// Broad failure category, stable across variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ManifestRead,
    MissingField,
    ExternalTool,
}

impl SyncError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ManifestRead { .. } | Self::ManifestParse { .. } => ErrorKind::ManifestRead,
            Self::MissingField { .. } => ErrorKind::MissingField,
            Self::ExternalTool { .. } => ErrorKind::ExternalTool,
        }
    }
}

/// Why a version field could not be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldProblem {
    Absent,
    Null,
    Empty,
    NotAString,
}

impl fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Absent => "absent",
            Self::Null => "null",
            Self::Empty => "empty",
            Self::NotAString => "not a string",
        };
        f.write_str(text)
    }
}

/// How an external process invocation went wrong.
#[derive(Debug, Error)]
pub enum ToolFailure {
    #[error("could not be started")]
    Spawn(#[source] std::io::Error),

    #[error("exited with status {}", .0.map_or_else(|| "signal".to_string(), |c| c.to_string()))]
    Status(Option<i32>),
}
