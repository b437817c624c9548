// crates/infra/src/persistence/manifest_reader.rs
use std::path::Path;

use pom_version_sync_ports::manifest::{FieldValue, ManifestSource};
use pom_version_sync_shared_kernel::{Result, SyncError};

/// Reads manifests from disk. JSON by default; `.yaml`/`.yml` with the `yaml` feature.
pub struct ManifestFileReader;

impl ManifestFileReader {
    /// Read the entire file as UTF-8 text.
    fn read_to_string(path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|source| SyncError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl ManifestSource for ManifestFileReader {
    fn read_field(&self, path: &Path, field: &str) -> Result<FieldValue> {
        let text = Self::read_to_string(path)?;
        match ManifestFormat::of(path) {
            ManifestFormat::Json => {
                json_field(&text, field).map_err(|details| parse_error(path, "JSON", details))
            }
            #[cfg(feature = "yaml")]
            ManifestFormat::Yaml => {
                yaml_field(&text, field).map_err(|details| parse_error(path, "YAML", details))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ManifestFormat {
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl ManifestFormat {
    fn of(path: &Path) -> Self {
        #[cfg(feature = "yaml")]
        {
            let is_yaml = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
            if is_yaml {
                return Self::Yaml;
            }
        }
        #[cfg(not(feature = "yaml"))]
        let _ = path;
        Self::Json
    }
}

fn parse_error(path: &Path, format: &str, details: String) -> SyncError {
    SyncError::ManifestParse {
        path: path.to_path_buf(),
        format: format.to_string(),
        details,
    }
}

fn json_field(text: &str, field: &str) -> std::result::Result<FieldValue, String> {
    let doc: serde_json::Value = serde_json::from_str(text).map_err(|e| e.to_string())?;
    let serde_json::Value::Object(map) = doc else {
        return Err("top-level value is not an object".to_string());
    };
    Ok(match map.get(field) {
        None => FieldValue::Absent,
        Some(serde_json::Value::Null) => FieldValue::Null,
        Some(serde_json::Value::String(s)) => FieldValue::Text(s.clone()),
        Some(_) => FieldValue::Other,
    })
}

#[cfg(feature = "yaml")]
fn yaml_field(text: &str, field: &str) -> std::result::Result<FieldValue, String> {
    let doc: serde_yaml::Value = serde_yaml::from_str(text).map_err(|e| e.to_string())?;
    let serde_yaml::Value::Mapping(map) = doc else {
        return Err("top-level value is not a mapping".to_string());
    };
    Ok(match map.get(field) {
        None => FieldValue::Absent,
        Some(serde_yaml::Value::Null) => FieldValue::Null,
        Some(serde_yaml::Value::String(s)) => FieldValue::Text(s.clone()),
        Some(_) => FieldValue::Other,
    })
}
