use crate::cli::GuardEngine;
use crate::services::guard::{run_guard, GuardPolicy};
use crate::services::output::print_with_status;
use anyhow::Context;
use std::path::Path;
use std::process::ExitCode;

pub const CLEAN_BANNER: &str = "✅ No legacy team literals found.";
pub const DRIFT_BANNER: &str = "❌ Legacy team literals found:";

pub fn handle_guard_command(
    json: bool,
    root: &Path,
    engine: GuardEngine,
    ignore: &[String],
    exempt: &[String],
) -> anyhow::Result<ExitCode> {
    let policy = GuardPolicy::standard()?
        .with_ignored(ignore)
        .with_exempt(exempt);
    let report = run_guard(engine, root, &policy)
        .with_context(|| format!("drift guard aborted under {}", root.display()))?;
    let clean = report.is_clean();

    if json {
        print_with_status(true, clean, &report, |_| String::new())?;
    } else if clean {
        println!("{}", CLEAN_BANNER);
    } else {
        eprintln!("{}", DRIFT_BANNER);
        for hit in &report.hits {
            eprintln!("{}", hit);
        }
    }

    Ok(if clean {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
