//! Init command implementation

use std::path::Path;

use colored::Colorize;

use ezmenu_core::Settings;
use ezmenu_fs::NormalizedPath;

use crate::error::Result;

/// Write a default configuration file unless one exists.
pub fn run_init(config: &Path) -> Result<()> {
    let path = NormalizedPath::new(config);
    if path.exists() {
        println!(
            "{} Configuration already exists at {}",
            "OK".green().bold(),
            path.as_str().cyan()
        );
        return Ok(());
    }

    Settings::write_default(&path)?;
    println!(
        "{} Created {}; edit it before running other commands.",
        "=>".blue().bold(),
        path.as_str().cyan()
    );
    Ok(())
}
