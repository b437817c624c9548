// crates/domain/src/value_objects.rs
use std::fmt;

use pom_version_sync_shared_kernel::FieldProblem;

/// Version text read from a manifest. Never blank; otherwise kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    pub fn new(raw: impl Into<String>) -> Result<Self, FieldProblem> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(FieldProblem::Empty);
        }
        Ok(Self(raw))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Version {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
