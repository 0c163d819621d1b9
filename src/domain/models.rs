use serde::Serialize;
use std::fmt;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One line in the scanned tree that matched the denylist.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ScanHit {
    /// Relative to the scan root, `/`-separated.
    pub path: String,
    /// 1-based.
    pub line: usize,
    pub text: String,
}

impl fmt::Display for ScanHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.path, self.line, self.text)
    }
}

#[derive(Debug, Serialize)]
pub struct GuardReport {
    pub engine: String,
    pub root: String,
    /// Admitted files that were read, exempt and skipped files excluded.
    pub files_scanned: usize,
    pub hits: Vec<ScanHit>,
    pub digest: String,
}

impl GuardReport {
    pub fn is_clean(&self) -> bool {
        self.hits.is_empty()
    }
}

#[derive(Serialize)]
pub struct ParticipantReport {
    pub candidate: String,
    pub known: bool,
}

#[derive(Serialize)]
pub struct KeywordReport {
    pub event_anchors: Vec<String>,
    pub team_keywords: Vec<String>,
}
