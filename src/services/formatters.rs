//! Text projections of the event configuration.
//!
//! Callers outside this crate obtain event-identifying strings only through
//! these functions.

use crate::domain::event::EventConfiguration;

pub const DEFAULT_SEPARATOR: &str = " vs ";

#[derive(Debug, Clone)]
pub struct MatchupOptions {
    pub use_abbreviations: bool,
    pub separator: String,
}

impl Default for MatchupOptions {
    fn default() -> Self {
        Self {
            use_abbreviations: false,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

pub fn format_event_label(cfg: &EventConfiguration) -> String {
    format!("{} {}", cfg.label(), cfg.edition())
}

/// Home then away, whatever the options.
pub fn format_matchup(cfg: &EventConfiguration, options: &MatchupOptions) -> String {
    let (left, right) = if options.use_abbreviations {
        (cfg.home().abbreviation(), cfg.away().abbreviation())
    } else {
        (cfg.home().name(), cfg.away().name())
    };
    format!("{}{}{}", left, options.separator, right)
}

/// Away then home. Deliberately the reverse of [`format_matchup`].
pub fn format_teams_line(cfg: &EventConfiguration) -> String {
    format!(
        "{}{}{}",
        cfg.away().name(),
        DEFAULT_SEPARATOR,
        cfg.home().name()
    )
}

#[cfg(test)]
mod tests {
    use super::{format_event_label, format_matchup, format_teams_line, MatchupOptions};
    use crate::domain::event::{EventConfiguration, Team};

    fn cfg() -> EventConfiguration {
        EventConfiguration::new(
            "Harbor Cup",
            "VII",
            Team::new("River City Otters", "River City", "RCO", None).unwrap(),
            Team::new("Lake Town Herons", "Lake Town", "LTH", None).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn event_label_is_label_space_edition() {
        assert_eq!(format_event_label(&cfg()), "Harbor Cup VII");
    }

    #[test]
    fn matchup_defaults_to_full_names_home_first() {
        assert_eq!(
            format_matchup(&cfg(), &MatchupOptions::default()),
            "River City Otters vs Lake Town Herons"
        );
    }

    #[test]
    fn matchup_with_abbreviations() {
        let opts = MatchupOptions {
            use_abbreviations: true,
            ..MatchupOptions::default()
        };
        assert_eq!(format_matchup(&cfg(), &opts), "RCO vs LTH");
    }

    #[test]
    fn matchup_with_custom_separator_keeps_order() {
        let opts = MatchupOptions {
            separator: " @ ".to_string(),
            ..MatchupOptions::default()
        };
        assert_eq!(
            format_matchup(&cfg(), &opts),
            "River City Otters @ Lake Town Herons"
        );
        let abbr = MatchupOptions {
            use_abbreviations: true,
            separator: "-".to_string(),
        };
        assert_eq!(format_matchup(&cfg(), &abbr), "RCO-LTH");
    }

    // Regression: the teams line is away-first on purpose.
    #[test]
    fn teams_line_is_away_first() {
        let c = cfg();
        assert_eq!(format_teams_line(&c), "Lake Town Herons vs River City Otters");
        assert_ne!(
            format_teams_line(&c),
            format_matchup(&c, &MatchupOptions::default())
        );
    }

    #[test]
    fn formatters_are_repeatable() {
        let c = cfg();
        let first = (format_event_label(&c), format_teams_line(&c));
        for _ in 0..3 {
            assert_eq!((format_event_label(&c), format_teams_line(&c)), first);
        }
    }
}
