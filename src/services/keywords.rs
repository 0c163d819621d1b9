//! Lowercase classifier keywords derived from the event configuration, so
//! downstream market classification never keeps its own team list.

use crate::domain::event::{EventConfiguration, Team};

fn push_unique(out: &mut Vec<String>, keyword: String) {
    if !keyword.is_empty() && !out.contains(&keyword) {
        out.push(keyword);
    }
}

fn initials(label: &str) -> String {
    label
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .collect()
}

pub fn event_anchors(cfg: &EventConfiguration) -> Vec<String> {
    let label = cfg.label().to_lowercase();
    let edition = cfg.edition().to_lowercase();
    let mut out = Vec::new();
    push_unique(&mut out, label.clone());
    push_unique(&mut out, label.replace(' ', ""));
    push_unique(&mut out, format!("{} {}", initials(&label), edition));
    push_unique(&mut out, format!("{} {}", label, edition));
    out
}

fn team_terms(team: &Team) -> [String; 3] {
    [
        team.city().to_lowercase(),
        team.nickname().to_lowercase(),
        team.abbreviation().to_lowercase(),
    ]
}

pub fn team_keywords(cfg: &EventConfiguration) -> Vec<String> {
    let mut out = Vec::new();
    for team in [cfg.home(), cfg.away()] {
        for term in team_terms(team) {
            push_unique(&mut out, term);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{event_anchors, team_keywords};
    use crate::domain::event::{EventConfiguration, Team};

    #[test]
    fn anchors_follow_label_and_edition() {
        let cfg = EventConfiguration::new(
            "Harbor Cup",
            "VII",
            Team::new("River City Otters", "River City", "RCO", None).unwrap(),
            Team::new("Lake Town Herons", "Lake Town", "LTH", None).unwrap(),
        )
        .unwrap();
        assert_eq!(
            event_anchors(&cfg),
            vec!["harbor cup", "harborcup", "hc vii", "harbor cup vii"]
        );
    }

    #[test]
    fn single_word_label_does_not_duplicate() {
        let cfg = EventConfiguration::new(
            "Derby",
            "2026",
            Team::new("River City Otters", "River City", "RCO", None).unwrap(),
            Team::new("Lake Town Herons", "Lake Town", "LTH", None).unwrap(),
        )
        .unwrap();
        assert_eq!(event_anchors(&cfg), vec!["derby", "d 2026", "derby 2026"]);
    }

    #[test]
    fn team_keywords_are_home_then_away_without_blanks() {
        let cfg = EventConfiguration::new(
            "Harbor Cup",
            "VII",
            Team::new("River City Otters", "River City", "RCO", None).unwrap(),
            Team::new("Herons", "", "LTH", None).unwrap(),
        )
        .unwrap();
        assert_eq!(
            team_keywords(&cfg),
            vec!["river city", "otters", "rco", "herons", "lth"]
        );
    }
}
