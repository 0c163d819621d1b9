use crate::domain::constants::{
    AWAY_ABBREVIATION, AWAY_CITY, AWAY_NAME, CONFIG_PATH_ENV, EVENT_EDITION, EVENT_LABEL,
    HOME_ABBREVIATION, HOME_CITY, HOME_NAME,
};
use crate::domain::event::{ConfigError, Conference, EventConfiguration, Team};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub fn builtin_event() -> Result<EventConfiguration, ConfigError> {
    EventConfiguration::new(
        EVENT_LABEL,
        EVENT_EDITION,
        Team::new(HOME_NAME, HOME_CITY, HOME_ABBREVIATION, Some(Conference::Afc))?,
        Team::new(AWAY_NAME, AWAY_CITY, AWAY_ABBREVIATION, Some(Conference::Nfc))?,
    )
}

pub fn load_event(path: &Path) -> Result<EventConfiguration, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    EventConfiguration::from_json(&raw)
}

/// `--config` wins, then `MATCHCARD_CONFIG`, then the compiled-in event.
pub fn resolve_event(explicit: Option<&Path>) -> Result<EventConfiguration, ConfigError> {
    let from_env = std::env::var_os(CONFIG_PATH_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    match explicit.map(Path::to_path_buf).or(from_env) {
        Some(path) => {
            let cfg = load_event(&path)?;
            info!(path = %path.display(), event = %cfg.label(), "loaded event configuration");
            Ok(cfg)
        }
        None => {
            debug!("using built-in event configuration");
            builtin_event()
        }
    }
}
