use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod domain;
mod logging;
mod services;

use cli::{Cli, Commands};
use services::event_config::resolve_event;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_tracing();

    // The guard inspects the tree as text and never consults the event.
    if let Commands::Guard {
        root,
        engine,
        ignore,
        exempt,
    } = &cli.command
    {
        return commands::handle_guard_command(cli.json, root, *engine, ignore, exempt);
    }

    let cfg = resolve_event(cli.config.as_deref()).context("invalid event configuration")?;
    commands::handle_event_commands(&cli, &cfg)?;
    Ok(ExitCode::SUCCESS)
}
