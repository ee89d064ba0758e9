//! Sync command implementation

use std::path::Path;

use colored::Colorize;

use ezmenu_core::{DirectoryStore, SyncEngine, SyncReport};
use ezmenu_fs::NormalizedPath;

use crate::commands::load_settings;
use crate::error::{CliError, Result};
use crate::source::SnapshotSource;

/// Run one sync pass against the catalog responses in `snapshot`.
pub fn run_sync(config: &Path, snapshot: &Path, json: bool) -> Result<()> {
    let settings = load_settings(config)?;
    if !snapshot.is_dir() {
        return Err(CliError::user(format!(
            "Snapshot directory not found: {}",
            snapshot.display()
        )));
    }

    let output_dir = NormalizedPath::expand_home(&settings.output_dir);
    let mut source = SnapshotSource::new(NormalizedPath::new(snapshot));
    let mut store = DirectoryStore::new(output_dir.clone());

    if !json {
        println!(
            "{} Synchronizing collections into {}",
            "=>".blue().bold(),
            output_dir.as_str().cyan()
        );
    }

    let report = SyncEngine::new(settings).run(&mut source, &mut store)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &SyncReport) {
    if report.used_fallback {
        println!(
            "{} Catalog list unavailable, used the collections on disk",
            "WARN".yellow().bold()
        );
    }
    for id in &report.updated {
        println!("   {} {}", "+".green(), id);
    }
    for id in &report.removed {
        println!("   {} {}", "-".red(), id);
    }
    for failure in &report.failures {
        println!("   {} {}: {}", "!".red(), failure.id.cyan(), failure.message);
    }

    let summary = format!(
        "{} updated, {} unchanged, {} removed, {} failed",
        report.updated.len(),
        report.unchanged.len(),
        report.removed.len(),
        report.failures.len()
    );
    if report.is_clean() {
        println!("{} {}", "OK".green().bold(), summary);
    } else {
        println!("{} {}", "WARN".yellow().bold(), summary);
    }
    if !report.index_written {
        println!("{}", "Collection index unchanged.".dimmed());
    }
}
