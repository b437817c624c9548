// crates/domain/src/config.rs
use std::path::PathBuf;

use derive_builder::Builder;

pub const DEFAULT_MANIFEST: &str = "package.json";
pub const DEFAULT_FIELD: &str = "version";
pub const DEFAULT_TOOL: &str = "mvn";
pub const DEFAULT_TARGET: &str = "pom.xml";

/// Everything one synchronization run needs to know.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct SyncConfig {
    /// Source manifest, relative to `working_dir` unless absolute.
    #[builder(default = "PathBuf::from(DEFAULT_MANIFEST)")]
    pub manifest: PathBuf,
    #[builder(default = "DEFAULT_FIELD.to_string()")]
    pub field: String,
    #[builder(default = "DEFAULT_TOOL.to_string()")]
    pub tool: String,
    /// Description of the descriptor the tool rewrites, used in the report line.
    #[builder(default = "DEFAULT_TARGET.to_string()")]
    pub target: String,
    #[builder(default)]
    pub working_dir: Option<PathBuf>,
    #[builder(default)]
    pub dry_run: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            field: DEFAULT_FIELD.to_string(),
            tool: DEFAULT_TOOL.to_string(),
            target: DEFAULT_TARGET.to_string(),
            working_dir: None,
            dry_run: false,
        }
    }
}

impl SyncConfig {
    /// Location of the manifest as it will be opened.
    pub fn manifest_path(&self) -> PathBuf {
        match &self.working_dir {
            Some(dir) => dir.join(&self.manifest),
            None => self.manifest.clone(),
        }
    }

    pub fn report_line(&self, version: &str) -> String {
        format!(
            "Updating {} version to latest version in {}: {version}",
            self.target,
            self.manifest.display()
        )
    }
}
