//! Inject command implementation
//!
//! Rewrites the proxy's stanza file so every database stanza carries the
//! menu injection.

use std::path::Path;

use colored::Colorize;

use ezmenu_fs::NormalizedPath;
use ezmenu_stanza::rewrite_file;

use crate::commands::load_settings;
use crate::error::Result;

/// Run the inject command.
///
/// Arguments left out fall back to the configured values.
pub fn run_inject(
    config: &Path,
    source: Option<&str>,
    target: Option<&str>,
    url: Option<&str>,
) -> Result<()> {
    let settings = load_settings(config)?;
    let source = NormalizedPath::expand_home(source.unwrap_or(settings.eresources_source.as_str()));
    let target = NormalizedPath::expand_home(target.unwrap_or(settings.eresources_target.as_str()));
    let url = url.unwrap_or(settings.injection_url.as_str());

    println!(
        "{} Injecting {} into {}",
        "=>".blue().bold(),
        url.cyan(),
        source.as_str().cyan()
    );

    let rewrite = rewrite_file(&source, &target, Some(url))?;

    println!(
        "{} Wrote {} stanzas to {}",
        "OK".green().bold(),
        rewrite.stanzas,
        target.as_str().cyan()
    );
    if !rewrite.skipped.is_empty() {
        println!("{} Skipped stanzas:", "WARN".yellow().bold());
        for title in &rewrite.skipped {
            println!("   {} {}", "-".yellow(), title);
        }
    }
    Ok(())
}
