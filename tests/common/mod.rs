#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().join("repo");
        fs::create_dir_all(&root).expect("create fixture repo");
        Self { _tmp: tmp, root }
    }

    pub fn write(&self, rel: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture dir");
        }
        fs::write(&path, content).expect("write fixture file");
        path
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("matchcard");
        cmd.env_remove("MATCHCARD_CONFIG")
            .env_remove("MATCHCARD_LOG_JSON")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn guard(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("guard")
            .arg("--root")
            .arg(self.root.to_str().expect("root path utf8"));
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

pub fn sample_event_json() -> Value {
    serde_json::json!({
        "label": "Harbor Cup",
        "edition": "VII",
        "teams": {
            "home": {"name": "River City Otters", "city": "River City", "abbreviation": "RCO", "conference": "AFC"},
            "away": {"name": "Lake Town Herons", "city": "Lake Town", "abbreviation": "LTH", "conference": "NFC"}
        }
    })
}

pub fn write_event(dir: &Path, value: &Value) -> PathBuf {
    let path = dir.join("event.json");
    fs::write(&path, serde_json::to_string_pretty(value).expect("serialize event"))
        .expect("write event config");
    path
}

pub fn ripgrep_available() -> bool {
    std::process::Command::new("rg")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Engine parity tests need `rg` on PATH. Prints a visible skip note when
/// it is missing; set `MATCHCARD_REQUIRE_RG=1` in CI to make that a failure.
pub fn ripgrep_or_skip(test: &str) -> bool {
    if ripgrep_available() {
        return true;
    }
    if std::env::var_os("MATCHCARD_REQUIRE_RG").is_some() {
        panic!("{test}: rg is required but not installed");
    }
    eprintln!("SKIPPED {test}: rg not installed");
    false
}
