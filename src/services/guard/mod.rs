//! Drift guard: finds legacy team literals anywhere in a source tree.
//!
//! ## Files
//! - `denylist.rs`: legacy literal rules compiled into one regex.
//! - `policy.rs`: ignore set, text allowlist, exempt set (`GuardPolicy`).
//! - `builtin.rs`: in-process walk + regex engine.
//! - `ripgrep.rs`: same policy, executed by `rg`.
//!
//! Both engines read every admitted file in-process, so decode failures,
//! file counts, sorted hit lists and digests are identical for the same tree.

pub mod builtin;
pub mod denylist;
pub mod policy;
pub mod ripgrep;

pub use policy::GuardPolicy;

use crate::cli::GuardEngine;
use crate::domain::models::{GuardReport, ScanHit};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not valid UTF-8 text", path.display())]
    Decode { path: PathBuf },
    #[error("directory traversal failed: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("invalid denylist pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("denylist has no rules")]
    EmptyDenylist,
    #[error("cannot run {tool}: {source}")]
    ToolUnavailable {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("{tool} failed: {stderr}")]
    ToolFailed { tool: &'static str, stderr: String },
    #[error("unexpected search tool output: {0}")]
    ToolOutput(#[from] serde_json::Error),
}

pub struct TreeScan {
    pub hits: Vec<ScanHit>,
    pub files_scanned: usize,
}

impl TreeScan {
    fn empty() -> Self {
        Self {
            hits: Vec::new(),
            files_scanned: 0,
        }
    }
}

/// A root that is missing, not a directory, or cannot be listed has
/// nothing to scan.
fn root_is_scannable(root: &Path) -> bool {
    if !root.is_dir() {
        debug!(root = %root.display(), "scan root missing; nothing to scan");
        return false;
    }
    if let Err(err) = std::fs::read_dir(root) {
        debug!(root = %root.display(), error = %err, "scan root unreadable; nothing to scan");
        return false;
    }
    true
}

/// Full file content as UTF-8. Both failures are fatal for a scan.
fn read_text(path: &Path) -> Result<String, ScanError> {
    let bytes = std::fs::read(path).map_err(|source| {
        error!(path = %path.display(), error = %source, "cannot read file");
        ScanError::Read {
            path: path.to_path_buf(),
            source,
        }
    })?;
    String::from_utf8(bytes).map_err(|_| {
        error!(path = %path.display(), "file is not valid UTF-8");
        ScanError::Decode {
            path: path.to_path_buf(),
        }
    })
}

/// SHA-256 over the rendered `path:line:text` lines.
pub fn hits_digest(hits: &[ScanHit]) -> String {
    let mut hasher = Sha256::new();
    for hit in hits {
        hasher.update(hit.to_string().as_bytes());
        hasher.update(b"\n");
    }
    hex::encode(hasher.finalize())
}

pub fn run_guard(
    engine: GuardEngine,
    root: &Path,
    policy: &GuardPolicy,
) -> Result<GuardReport, ScanError> {
    let scan = if root_is_scannable(root) {
        match engine {
            GuardEngine::Builtin => builtin::scan_tree(root, policy)?,
            GuardEngine::Ripgrep => ripgrep::scan_tree(root, policy)?,
        }
    } else {
        TreeScan::empty()
    };
    info!(
        engine = engine.as_str(),
        root = %root.display(),
        files = scan.files_scanned,
        hits = scan.hits.len(),
        "drift guard finished"
    );
    Ok(GuardReport {
        engine: engine.as_str().to_string(),
        root: root.display().to_string(),
        files_scanned: scan.files_scanned,
        digest: hits_digest(&scan.hits),
        hits: scan.hits,
    })
}

#[cfg(test)]
mod tests {
    use super::{hits_digest, run_guard, GuardPolicy};
    use crate::cli::GuardEngine;
    use crate::domain::models::ScanHit;
    use tempfile::TempDir;

    #[test]
    fn empty_tree_is_clean() {
        let tmp = TempDir::new().unwrap();
        let report = run_guard(
            GuardEngine::Builtin,
            tmp.path(),
            &GuardPolicy::standard().unwrap(),
        )
        .unwrap();
        assert!(report.is_clean());
        assert_eq!(report.files_scanned, 0);
        assert_eq!(report.digest, hits_digest(&[]));
    }

    #[test]
    fn missing_root_is_clean_for_both_engines() {
        let tmp = TempDir::new().unwrap();
        let absent = tmp.path().join("absent");
        let policy = GuardPolicy::standard().unwrap();
        for engine in [GuardEngine::Builtin, GuardEngine::Ripgrep] {
            let report = run_guard(engine, &absent, &policy).unwrap();
            assert!(report.is_clean());
            assert_eq!(report.files_scanned, 0);
        }
    }

    #[cfg(unix)]
    #[test]
    fn unlistable_root_is_clean_for_both_engines() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let locked = tmp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("a.txt"), b"\xff").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        if fs::read_dir(&locked).is_ok() {
            // Running as root: permissions are not enforced.
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            eprintln!("permissions not enforced; skipping unreadable root check");
            return;
        }

        let policy = GuardPolicy::standard().unwrap();
        let reports: Vec<_> = [GuardEngine::Builtin, GuardEngine::Ripgrep]
            .into_iter()
            .map(|engine| run_guard(engine, &locked, &policy))
            .collect();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        for report in reports {
            let report = report.unwrap();
            assert!(report.is_clean());
            assert_eq!(report.files_scanned, 0);
        }
    }

    #[test]
    fn digest_depends_on_every_field() {
        let a = ScanHit {
            path: "a.rs".to_string(),
            line: 1,
            text: "x".to_string(),
        };
        let mut b = a.clone();
        b.line = 2;
        assert_ne!(hits_digest(&[a.clone()]), hits_digest(&[b]));
        assert_eq!(hits_digest(&[a.clone()]), hits_digest(&[a]));
    }
}
