//! External engine: `rg` lists and searches the tree. Every path it reports
//! is re-checked against the shared [`GuardPolicy`], and each admitted file
//! is decoded in-process so UTF-8 failures abort the run as they do for the
//! built-in engine.

use super::policy::GuardPolicy;
use super::{read_text, ScanError, TreeScan};
use crate::domain::models::ScanHit;
use serde::Deserialize;
use std::path::Path;
use std::process::{Command, Output};
use tracing::debug;

pub const RIPGREP: &str = "rg";

#[derive(Deserialize)]
struct RgMessage {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: serde_json::Value,
}

#[derive(Deserialize)]
struct RgText {
    text: Option<String>,
}

#[derive(Deserialize)]
struct RgMatch {
    path: RgText,
    lines: RgText,
    line_number: Option<usize>,
}

fn base_command(root: &Path, policy: &GuardPolicy) -> Command {
    let mut cmd = Command::new(RIPGREP);
    cmd.current_dir(root)
        .args(["--no-config", "--no-ignore", "--hidden", "--sort", "path"]);
    for name in policy.filter.ignored_names() {
        cmd.arg("--glob").arg(format!("!{}", name));
    }
    cmd
}

fn run(mut cmd: Command) -> Result<Output, ScanError> {
    let output = cmd.output().map_err(|source| ScanError::ToolUnavailable {
        tool: RIPGREP,
        source,
    })?;
    // 0 = found something, 1 = found nothing, anything else is an error.
    match output.status.code() {
        Some(0) | Some(1) => Ok(output),
        _ => Err(ScanError::ToolFailed {
            tool: RIPGREP,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }),
    }
}

fn relative(path: &str) -> String {
    path.trim_start_matches("./").replace('\\', "/")
}

/// Parses `rg --files` output into the sorted paths the policy admits.
pub fn parse_file_list(stdout: &str, policy: &GuardPolicy) -> Vec<String> {
    let mut files: Vec<String> = stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(relative)
        .filter(|rel| policy.admits(rel))
        .collect();
    files.sort();
    files
}

/// Parses `rg --json` output. Paths outside the policy are dropped.
pub fn parse_matches(stdout: &str, policy: &GuardPolicy) -> Result<Vec<ScanHit>, ScanError> {
    let mut hits = Vec::new();
    for line in stdout.lines().filter(|l| !l.trim().is_empty()) {
        let msg: RgMessage = serde_json::from_str(line)?;
        if msg.kind != "match" {
            continue;
        }
        let m: RgMatch = serde_json::from_value(msg.data)?;
        let Some(path) = m.path.text else {
            return Err(ScanError::ToolFailed {
                tool: RIPGREP,
                stderr: "match reported for a non-UTF-8 path".to_string(),
            });
        };
        let rel = relative(&path);
        if !policy.admits(&rel) {
            debug!(path = %rel, "dropping match outside guard policy");
            continue;
        }
        let Some(text) = m.lines.text else {
            return Err(ScanError::Decode { path: rel.into() });
        };
        let Some(line) = m.line_number else {
            continue;
        };
        hits.push(ScanHit {
            path: rel,
            line,
            text: text.trim().to_string(),
        });
    }
    hits.sort();
    Ok(hits)
}

/// Lists, decodes, then searches a listable root. Callers check the root
/// first.
pub fn scan_tree(root: &Path, policy: &GuardPolicy) -> Result<TreeScan, ScanError> {
    let mut list = base_command(root, policy);
    list.args(["--files", "."]);
    let listed = run(list)?;
    let files = parse_file_list(&String::from_utf8_lossy(&listed.stdout), policy);
    for rel in &files {
        read_text(&root.join(rel))?;
    }
    debug!(files = files.len(), "all admitted files decode as UTF-8");

    let mut search = base_command(root, policy);
    search
        .args(["--json", "--text", "--regexp"])
        .arg(policy.denylist.source())
        .arg(".");
    let found = run(search)?;
    let hits = parse_matches(&String::from_utf8_lossy(&found.stdout), policy)?;
    Ok(TreeScan {
        hits,
        files_scanned: files.len(),
    })
}
