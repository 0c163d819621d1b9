use super::denylist::DenylistPattern;
use super::ScanError;
use std::collections::BTreeSet;
use std::path::Path;

/// Entry names skipped wherever they appear; directories are not descended.
pub const IGNORED_NAMES: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    ".idea",
    ".vscode",
    "node_modules",
    "target",
    "dist",
    "build",
    "coverage",
    "__pycache__",
    ".venv",
    "venv",
    ".mypy_cache",
    ".pytest_cache",
    ".ruff_cache",
    ".tox",
    "Cargo.lock",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "poetry.lock",
    "uv.lock",
];

/// Files with one of these extensions, or with none, are read as text.
pub const TEXT_EXTENSIONS: &[&str] = &[
    "rs", "toml", "md", "txt", "json", "jsonl", "yaml", "yml", "py", "js", "mjs", "cjs", "ts",
    "tsx", "jsx", "sh", "bash", "html", "css", "cfg", "ini", "env", "sql", "csv",
];

/// Never scanned: they spell out the denylist on purpose.
pub const EXEMPT_PATHS: &[&str] = &["src/services/guard/denylist.rs", "tests/drift_guard.rs"];

#[derive(Debug, Clone)]
pub struct FileFilterPolicy {
    ignored_names: BTreeSet<String>,
    text_extensions: BTreeSet<String>,
}

impl Default for FileFilterPolicy {
    fn default() -> Self {
        Self {
            ignored_names: IGNORED_NAMES.iter().map(|s| s.to_string()).collect(),
            text_extensions: TEXT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl FileFilterPolicy {
    pub fn is_ignored_name(&self, name: &str) -> bool {
        self.ignored_names.contains(name)
    }

    pub fn ignored_names(&self) -> impl Iterator<Item = &str> {
        self.ignored_names.iter().map(String::as_str)
    }

    pub fn is_text_file(&self, path: &Path) -> bool {
        match path.extension() {
            None => true,
            Some(ext) => self
                .text_extensions
                .contains(&ext.to_string_lossy().to_ascii_lowercase()),
        }
    }
}

fn normalize_rel(path: &str) -> String {
    let p = path.replace('\\', "/");
    p.trim_start_matches("./").to_string()
}

/// Everything both guard engines need to agree on.
#[derive(Debug, Clone)]
pub struct GuardPolicy {
    pub filter: FileFilterPolicy,
    pub denylist: DenylistPattern,
    exempt: BTreeSet<String>,
}

impl GuardPolicy {
    pub fn new(filter: FileFilterPolicy, denylist: DenylistPattern) -> Self {
        Self {
            filter,
            denylist,
            exempt: BTreeSet::new(),
        }
    }

    /// Default filter, legacy denylist, and [`EXEMPT_PATHS`].
    pub fn standard() -> Result<Self, ScanError> {
        let policy = Self::new(FileFilterPolicy::default(), DenylistPattern::legacy()?);
        Ok(policy.with_exempt(EXEMPT_PATHS.iter().copied()))
    }

    pub fn with_ignored<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.filter
            .ignored_names
            .extend(names.into_iter().map(|n| n.as_ref().to_string()));
        self
    }

    pub fn with_exempt<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exempt
            .extend(paths.into_iter().map(|p| normalize_rel(p.as_ref())));
        self
    }

    pub fn is_exempt(&self, rel_path: &str) -> bool {
        self.exempt.contains(&normalize_rel(rel_path))
    }

    /// Whole-path check used for results that did not come from our own
    /// walker: no component may be ignored, the file must be text, and it
    /// must not be exempt.
    pub fn admits(&self, rel_path: &str) -> bool {
        let rel = normalize_rel(rel_path);
        if rel.split('/').any(|c| self.filter.is_ignored_name(c)) {
            return false;
        }
        self.filter.is_text_file(Path::new(&rel)) && !self.is_exempt(&rel)
    }
}
