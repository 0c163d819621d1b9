//! In-process engine: `walkdir` traversal plus the compiled denylist regex.

use super::denylist::DenylistPattern;
use super::policy::GuardPolicy;
use super::{read_text, ScanError, TreeScan};
use crate::domain::models::ScanHit;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Line-oriented match over one file's content.
pub fn scan_text(rel_path: &str, content: &str, denylist: &DenylistPattern) -> Vec<ScanHit> {
    content
        .replace("\r\n", "\n")
        .split('\n')
        .enumerate()
        .filter(|(_, line)| denylist.is_match(line))
        .map(|(idx, line)| ScanHit {
            path: rel_path.to_string(),
            line: idx + 1,
            text: line.trim().to_string(),
        })
        .collect()
}

/// Walks a listable root. Callers check the root first.
pub fn scan_tree(root: &Path, policy: &GuardPolicy) -> Result<TreeScan, ScanError> {
    let mut scan = TreeScan::empty();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0 || !policy.filter.is_ignored_name(&e.file_name().to_string_lossy())
        });

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !policy.filter.is_text_file(path) {
            debug!(path = %path.display(), "skipping non-text file");
            continue;
        }
        let rel = relative_path(root, path);
        if policy.is_exempt(&rel) {
            debug!(path = %rel, "skipping exempt file");
            continue;
        }
        let content = read_text(path)?;
        scan.files_scanned += 1;
        let hits = scan_text(&rel, &content, &policy.denylist);
        scan.hits.extend(hits);
    }

    scan.hits.sort();
    Ok(scan)
}
