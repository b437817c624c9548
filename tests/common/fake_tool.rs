use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

/// Shell script standing in for `mvn`.
///
/// Each call appends its arguments to a log, one line per call with every
/// argument in brackets, and touches `.fake-tool-ran` in its working directory.
/// Exits 3 when its first argument equals `$FAKE_TOOL_FAIL_ON`.
#[derive(Debug)]
pub struct FakeTool {
    _dir: TempDir,
    script: PathBuf,
    log: PathBuf,
}

#[allow(dead_code)]
impl FakeTool {
    #[cfg(unix)]
    pub fn new() -> Self {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().expect("create tempdir");
        let script = dir.path().join("fake-mvn");
        let log = dir.path().join("calls.log");
        let body = format!(
            r#"#!/bin/sh
touch .fake-tool-ran
for arg in "$@"; do printf '[%s]' "$arg" >> '{log}'; done
printf '\n' >> '{log}'
if [ -n "$FAKE_TOOL_FAIL_ON" ] && [ "$1" = "$FAKE_TOOL_FAIL_ON" ]; then
  echo "fake tool refusing $1" >&2
  exit 3
fi
exit 0
"#,
            log = log.display()
        );
        fs::write(&script, body).expect("write fake tool");
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).expect("chmod fake tool");
        Self { _dir: dir, script, log }
    }

    pub fn path(&self) -> &Path {
        &self.script
    }

    /// Recorded calls, in order. Empty when the tool never ran.
    pub fn calls(&self) -> Vec<String> {
        match fs::read_to_string(&self.log) {
            Ok(text) => text.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }
}
