//! `<image-stem>.provenance.json` records written next to CLI outputs.

use anyhow::{Context, Result};
use serde::Serialize;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

/// Everything needed to reproduce one image.
#[derive(Serialize)]
struct Sidecar<'a, P, S> {
    code_rev: String,
    version: &'static str,
    callsite: Callsite,
    command: &'a str,
    params: &'a P,
    stats: &'a S,
    outputs: [String; 1],
}

/// Record how `image` was made. The caller's location ends up in the record,
/// so call this from the command that produced the image.
#[track_caller]
pub fn record<P: Serialize, S: Serialize>(
    image: &Path,
    command: &str,
    params: &P,
    stats: &S,
) -> Result<PathBuf> {
    let caller = Location::caller();
    let sidecar = Sidecar {
        code_rev: code_rev(),
        version: maze::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        command,
        params,
        stats,
        outputs: [image.display().to_string()],
    };
    let path = sidecar_path(image);
    let body = serde_json::to_vec_pretty(&sidecar).context("serializing provenance")?;
    std::fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `out/maze.pgm` -> `out/maze.provenance.json`.
fn sidecar_path(image: &Path) -> PathBuf {
    image.with_extension("provenance.json")
}

/// Build-time `GIT_COMMIT`, then runtime `GIT_COMMIT`, then the checkout the
/// binary runs in.
fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .into_iter()
        .chain(std::env::var("GIT_COMMIT").ok())
        .find(|rev| !rev.is_empty())
        .or_else(checkout_rev)
        .unwrap_or_else(|| "unknown".to_owned())
}

fn checkout_rev() -> Option<String> {
    let out = Command::new("git")
        .args(["rev-parse", "--short=12", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    let rev = rev.trim();
    (!rev.is_empty()).then(|| rev.to_owned())
}
