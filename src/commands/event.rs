use crate::cli::{Cli, Commands};
use crate::domain::event::{EventConfiguration, Team};
use crate::domain::models::{KeywordReport, ParticipantReport};
use crate::services::formatters::{
    format_event_label, format_matchup, format_teams_line, MatchupOptions,
};
use crate::services::keywords::{event_anchors, team_keywords};
use crate::services::output::{print_one, print_out};

fn describe_team(role: &str, team: &Team) -> String {
    let conference = team
        .conference()
        .map(|c| format!(", {}", c.as_str()))
        .unwrap_or_default();
    format!(
        "{}: {} ({}, {}{})",
        role,
        team.name(),
        team.abbreviation(),
        team.city(),
        conference
    )
}

pub fn handle_event_commands(cli: &Cli, cfg: &EventConfiguration) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Label => {
            print_one(cli.json, format_event_label(cfg), |s| s.clone())?;
        }
        Commands::Matchup {
            abbreviations,
            separator,
        } => {
            let options = MatchupOptions {
                use_abbreviations: *abbreviations,
                separator: separator.clone(),
            };
            print_one(cli.json, format_matchup(cfg, &options), |s| s.clone())?;
        }
        Commands::Teams => {
            print_one(cli.json, format_teams_line(cfg), |s| s.clone())?;
        }
        Commands::Participant { names } => {
            let reports: Vec<ParticipantReport> = names
                .iter()
                .map(|n| ParticipantReport {
                    candidate: n.clone(),
                    known: cfg.is_known_participant(n),
                })
                .collect();
            print_out(cli.json, &reports, |r| {
                let status = if r.known { "known" } else { "unknown" };
                format!("{}\t{}", status, r.candidate)
            })?;
        }
        Commands::Keywords => {
            let report = KeywordReport {
                event_anchors: event_anchors(cfg),
                team_keywords: team_keywords(cfg),
            };
            print_one(cli.json, report, |r| {
                r.event_anchors
                    .iter()
                    .chain(r.team_keywords.iter())
                    .cloned()
                    .collect::<Vec<_>>()
                    .join("\n")
            })?;
        }
        Commands::Show => {
            print_one(cli.json, cfg, |c| {
                [
                    format!("label: {}", c.label()),
                    format!("edition: {}", c.edition()),
                    describe_team("home", c.home()),
                    describe_team("away", c.away()),
                ]
                .join("\n")
            })?;
        }
        Commands::Validate => {
            print_one(cli.json, "valid", |_| "config valid".to_string())?;
        }
        // Dispatched by `main` before any configuration is loaded.
        Commands::Guard { .. } => {}
    }
    Ok(())
}
