//! Compiled-in canonical event. Edit here (or ship a config file) to change
//! which teams every formatter renders.

pub const EVENT_LABEL: &str = "Super Bowl";
pub const EVENT_EDITION: &str = "LX";

pub const HOME_NAME: &str = "New England Patriots";
pub const HOME_CITY: &str = "New England";
pub const HOME_ABBREVIATION: &str = "NE";

pub const AWAY_NAME: &str = "Seattle Seahawks";
pub const AWAY_CITY: &str = "Seattle";
pub const AWAY_ABBREVIATION: &str = "SEA";

pub const CONFIG_PATH_ENV: &str = "MATCHCARD_CONFIG";
pub const LOG_JSON_ENV: &str = "MATCHCARD_LOG_JSON";
