//! Provenance sidecars for CLI outputs.

use anyhow::{Context, Result};
use linegate::{GateCfg, LineSegment};
use serde::Serialize;
use serde_json::Value;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Gate the artifact was produced with.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct GateSnapshot {
    pub line: LineSegment,
    pub extra_cross_threshold: f64,
    pub sentinel_distance: f64,
}

impl GateSnapshot {
    pub fn new(line: LineSegment, cfg: &GateCfg) -> Self {
        Self {
            line,
            extra_cross_threshold: cfg.extra_cross_threshold,
            sentinel_distance: cfg.sentinel_distance,
        }
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

/// Document stored next to an artifact as `<stem>.provenance.json`.
#[derive(Serialize)]
pub struct Sidecar {
    code_rev: String,
    version: &'static str,
    callsite: Callsite,
    gate: Option<GateSnapshot>,
    params: Value,
    outputs: Vec<String>,
}

impl Sidecar {
    #[track_caller]
    pub fn new(artifact: &Path, params: Value) -> Self {
        let caller = Location::caller();
        Self {
            code_rev: current_git_rev(),
            version: linegate::VERSION,
            callsite: Callsite {
                file: caller.file(),
                line: caller.line(),
            },
            gate: None,
            params,
            outputs: vec![artifact.to_string_lossy().into_owned()],
        }
    }

    pub fn with_gate(mut self, gate: GateSnapshot) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Serialize next to the first output; returns the sidecar path.
    pub fn write(&self) -> Result<PathBuf> {
        let artifact = self
            .outputs
            .first()
            .map(PathBuf::from)
            .context("sidecar has no output artifact")?;
        let path = sidecar_path(&artifact);
        let body = serde_json::to_vec_pretty(self)?;
        std::fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

/// `out/results.json` -> `out/results.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Commit hash from `GIT_COMMIT` (build time, then runtime) or `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    let from_env = [
        option_env!("GIT_COMMIT").map(str::to_owned),
        std::env::var("GIT_COMMIT").ok(),
    ];
    from_env
        .into_iter()
        .flatten()
        .find(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_owned())
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    Some(rev.trim().to_owned())
}
