//! Provenance records written next to every JSON artifact.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsStr;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Serialize)]
pub struct Callsite {
    pub file: &'static str,
    pub line: u32,
}

/// What produced an artifact, and from which inputs.
#[derive(Debug, Serialize)]
pub struct Record {
    pub code_rev: String,
    pub tool_version: &'static str,
    pub callsite: Callsite,
    pub command: &'static str,
    pub params: Value,
    pub outputs: Vec<String>,
}

impl Record {
    /// Record for `command`, stamped with the caller's source location.
    #[track_caller]
    pub fn new(command: &'static str, params: Value) -> Self {
        let at = Location::caller();
        Self {
            code_rev: code_rev(),
            tool_version: windplan::VERSION,
            callsite: Callsite {
                file: at.file(),
                line: at.line(),
            },
            command,
            params,
            outputs: Vec::new(),
        }
    }

    /// List `artifact` as output and write `<stem>.provenance.json` beside it.
    pub fn write_beside(mut self, artifact: &Path) -> Result<PathBuf> {
        let path = sidecar_path(artifact);
        self.outputs.push(artifact.to_string_lossy().into_owned());
        fs::write(&path, serde_json::to_vec_pretty(&self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .unwrap_or(OsStr::new("artifact"))
        .to_os_string();
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
pub fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()))
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_owned())
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    String::from_utf8(out.stdout).ok().map(|s| s.trim().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_beside_the_artifact() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/output/alerts.json")),
            Path::new("/tmp/output/alerts.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("out/layout")),
            Path::new("out/layout.provenance.json")
        );
    }

    #[test]
    fn written_record_lists_command_params_and_output() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("estimate.json");
        fs::write(&artifact, "[]").unwrap();
        let path = Record::new("estimate", json!({"radius": 50.0}))
            .write_beside(&artifact)
            .unwrap();
        let doc: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(doc["command"], "estimate");
        assert_eq!(doc["params"]["radius"], 50.0);
        assert_eq!(doc["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(doc["tool_version"], windplan::VERSION);
        assert!(doc["callsite"]["file"].as_str().unwrap().ends_with("provenance.rs"));
        assert!(!doc["code_rev"].as_str().unwrap().is_empty());
    }
}
