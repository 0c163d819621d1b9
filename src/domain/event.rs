use crate::domain::names::{normalize, same_name};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{field} must not be empty")]
    EmptyField { field: String },
    #[error("home and away teams share the name {0:?}")]
    DuplicateName(String),
    #[error("home and away teams share the abbreviation {0:?}")]
    DuplicateAbbreviation(String),
    #[error("invalid event configuration document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("cannot read event configuration {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Conference {
    Afc,
    Nfc,
}

impl Conference {
    pub fn as_str(self) -> &'static str {
        match self {
            Conference::Afc => "AFC",
            Conference::Nfc => "NFC",
        }
    }
}

/// One participant. Fields are fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TeamDocument", into = "TeamDocument")]
pub struct Team {
    name: String,
    city: String,
    abbreviation: String,
    conference: Option<Conference>,
}

impl Team {
    pub fn new(
        name: &str,
        city: &str,
        abbreviation: &str,
        conference: Option<Conference>,
    ) -> Result<Self, ConfigError> {
        let name = normalize(name);
        if name.is_empty() {
            return Err(ConfigError::EmptyField {
                field: "team name".to_string(),
            });
        }
        let abbreviation = abbreviation.trim().to_string();
        if abbreviation.is_empty() {
            return Err(ConfigError::EmptyField {
                field: format!("abbreviation of team {:?}", name),
            });
        }
        Ok(Self {
            name,
            city: normalize(city),
            abbreviation,
            conference,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    pub fn conference(&self) -> Option<Conference> {
        self.conference
    }

    /// Last word of the full name, e.g. the franchise nickname.
    pub fn nickname(&self) -> &str {
        self.name.rsplit(' ').next().unwrap_or(&self.name)
    }
}

/// The event and its two participants, validated once and then only read.
///
/// Built by `main` and handed to formatters by reference; there is no
/// process-wide instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EventDocument", into = "EventDocument")]
pub struct EventConfiguration {
    label: String,
    edition: String,
    home: Team,
    away: Team,
}

impl EventConfiguration {
    pub fn new(label: &str, edition: &str, home: Team, away: Team) -> Result<Self, ConfigError> {
        let label = normalize(label);
        if label.is_empty() {
            return Err(ConfigError::EmptyField {
                field: "label".to_string(),
            });
        }
        let edition = normalize(edition);
        if edition.is_empty() {
            return Err(ConfigError::EmptyField {
                field: "edition".to_string(),
            });
        }
        if same_name(home.name(), away.name()) {
            return Err(ConfigError::DuplicateName(home.name().to_string()));
        }
        if home.abbreviation().eq_ignore_ascii_case(away.abbreviation()) {
            return Err(ConfigError::DuplicateAbbreviation(
                home.abbreviation().to_string(),
            ));
        }
        Ok(Self {
            label,
            edition,
            home,
            away,
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn edition(&self) -> &str {
        &self.edition
    }

    pub fn home(&self) -> &Team {
        &self.home
    }

    pub fn away(&self) -> &Team {
        &self.away
    }

    /// Home first, then away.
    pub fn participant_names(&self) -> [&str; 2] {
        [self.home.name(), self.away.name()]
    }

    pub fn is_known_participant(&self, candidate: &str) -> bool {
        self.participant_names()
            .iter()
            .any(|name| same_name(name, candidate))
    }
}

// On-disk document shape: {"label", "edition", "teams": {"home", "away"}}.

#[derive(Debug, Serialize, Deserialize)]
struct TeamDocument {
    name: String,
    #[serde(default)]
    city: String,
    abbreviation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    conference: Option<Conference>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TeamsDocument {
    home: Team,
    away: Team,
}

#[derive(Debug, Serialize, Deserialize)]
struct EventDocument {
    label: String,
    #[serde(alias = "roman")]
    edition: String,
    teams: TeamsDocument,
}

impl TryFrom<TeamDocument> for Team {
    type Error = ConfigError;

    fn try_from(doc: TeamDocument) -> Result<Self, Self::Error> {
        Team::new(&doc.name, &doc.city, &doc.abbreviation, doc.conference)
    }
}

impl From<Team> for TeamDocument {
    fn from(team: Team) -> Self {
        Self {
            name: team.name,
            city: team.city,
            abbreviation: team.abbreviation,
            conference: team.conference,
        }
    }
}

impl TryFrom<EventDocument> for EventConfiguration {
    type Error = ConfigError;

    fn try_from(doc: EventDocument) -> Result<Self, Self::Error> {
        EventConfiguration::new(&doc.label, &doc.edition, doc.teams.home, doc.teams.away)
    }
}

impl From<EventConfiguration> for EventDocument {
    fn from(cfg: EventConfiguration) -> Self {
        Self {
            label: cfg.label,
            edition: cfg.edition,
            teams: TeamsDocument {
                home: cfg.home,
                away: cfg.away,
            },
        }
    }
}
