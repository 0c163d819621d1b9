use crate::services::formatters::DEFAULT_SEPARATOR;
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "matchcard",
    version,
    about = "Canonical event text and legacy team literal drift guard"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Event configuration JSON file (falls back to MATCHCARD_CONFIG, then the built-in event)"
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the event label, e.g. "<label> <edition>".
    Label,
    /// Print the home-vs-away matchup.
    Matchup {
        #[arg(long, default_value_t = false)]
        abbreviations: bool,
        #[arg(long, default_value = DEFAULT_SEPARATOR, allow_hyphen_values = true)]
        separator: String,
    },
    /// Print the away-vs-home teams line.
    Teams,
    /// Report whether each name matches either participant.
    Participant {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Print classifier keywords derived from the event.
    Keywords,
    /// Print the active event configuration.
    Show,
    /// Validate the event configuration.
    Validate,
    /// Scan a tree for legacy team literals.
    Guard {
        #[arg(long, default_value = ".")]
        root: PathBuf,
        #[arg(long, value_enum, default_value_t = GuardEngine::Builtin)]
        engine: GuardEngine,
        /// Extra entry name to skip.
        #[arg(long = "ignore", value_name = "NAME")]
        ignore: Vec<String>,
        /// Extra relative path to never scan.
        #[arg(long = "exempt", value_name = "PATH")]
        exempt: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GuardEngine {
    Builtin,
    Ripgrep,
}

impl GuardEngine {
    pub fn as_str(self) -> &'static str {
        match self {
            GuardEngine::Builtin => "builtin",
            GuardEngine::Ripgrep => "ripgrep",
        }
    }
}
