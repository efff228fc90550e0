use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Provenance record for one run: parameters plus every file it produced.
pub struct Provenance {
    pub params: Value,
    pub outputs: Vec<PathBuf>,
}

impl Provenance {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            outputs: Vec::new(),
        }
    }

    pub fn record_output(&mut self, path: impl Into<PathBuf>) {
        self.outputs.push(path.into());
    }

    /// Write `<dir>/<run_name>.provenance.json` with the code revision,
    /// library version, callsite, params and outputs.
    #[track_caller]
    pub fn write(&self, dir: &Path, run_name: &str) -> Result<PathBuf> {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        let path = provenance_path(dir, run_name);
        let callsite = Location::caller();
        let doc = json!({
            "code_rev": current_git_rev(),
            "samestats_version": samestats::VERSION,
            "callsite": {
                "file": callsite.file(),
                "line": callsite.line()
            },
            "params": self.params,
            "outputs": self
                .outputs
                .iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect::<Vec<_>>()
        });
        fs::write(&path, serde_json::to_vec_pretty(&doc)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

fn provenance_path(dir: &Path, run_name: &str) -> PathBuf {
    dir.join(format!("{run_name}.provenance.json"))
}

/// Commit hash from the build env, the runtime env, or `git`, else "unknown".
pub fn current_git_rev() -> String {
    let from_build = option_env!("GIT_COMMIT").filter(|s| !s.is_empty());
    if let Some(rev) = from_build {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
