// crates/ports/src/manifest.rs
use std::path::Path;

use pom_version_sync_shared_kernel::Result;

/// Raw shape of a manifest field, before any domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Absent,
    Null,
    Text(String),
    /// Number, boolean, array or object.
    Other,
}

/// Port for reading a single top-level field from a manifest file.
pub trait ManifestSource {
    fn read_field(&self, path: &Path, field: &str) -> Result<FieldValue>;
}
