//! Legacy literals that must not reappear outside the canonical event
//! configuration. This file is on the guard's exempt list.

use super::ScanError;
use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenyRule {
    /// Matches anywhere in a line.
    Literal(String),
    /// Matches only with a word boundary on both sides.
    Word(String),
}

impl DenyRule {
    fn to_pattern(&self) -> String {
        match self {
            DenyRule::Literal(s) => regex::escape(s),
            DenyRule::Word(s) => format!(r"\b{}\b", regex::escape(s)),
        }
    }
}

/// Full names of the previous edition's franchises.
const LEGACY_FULL_NAMES: &[&str] = &["Kansas City Chiefs", "Philadelphia Eagles"];
/// Bare nicknames, matched as whole words only.
const LEGACY_NICKNAMES: &[&str] = &["Chiefs", "Eagles"];
/// The constant that held the hardcoded matchup before the config existed.
const LEGACY_SYMBOLS: &[&str] = &["SB_LIX_TEAMS"];

pub fn legacy_rules() -> Vec<DenyRule> {
    let mut rules: Vec<DenyRule> = LEGACY_FULL_NAMES
        .iter()
        .map(|s| DenyRule::Literal(s.to_string()))
        .collect();
    rules.extend(LEGACY_NICKNAMES.iter().map(|s| DenyRule::Word(s.to_string())));
    rules.extend(LEGACY_SYMBOLS.iter().map(|s| DenyRule::Word(s.to_string())));
    rules
}

/// All rules compiled into one alternation. [`DenylistPattern::source`] is
/// the exact string handed to ripgrep.
#[derive(Debug, Clone)]
pub struct DenylistPattern {
    source: String,
    regex: Regex,
}

impl DenylistPattern {
    pub fn new(rules: Vec<DenyRule>) -> Result<Self, ScanError> {
        if rules.is_empty() {
            return Err(ScanError::EmptyDenylist);
        }
        let source = rules
            .iter()
            .map(|r| format!("(?:{})", r.to_pattern()))
            .collect::<Vec<_>>()
            .join("|");
        let regex = Regex::new(&source)?;
        Ok(Self { source, regex })
    }

    pub fn legacy() -> Result<Self, ScanError> {
        Self::new(legacy_rules())
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}
