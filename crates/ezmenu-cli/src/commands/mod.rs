//! Command implementations for ezmenu-cli

pub mod init;
pub mod inject;
pub mod sync;

pub use init::run_init;
pub use inject::run_inject;
pub use sync::run_sync;

use std::path::Path;

use ezmenu_core::Settings;
use ezmenu_fs::NormalizedPath;

use crate::error::Result;

/// Load the settings at `config`.
///
/// A missing file is replaced by a commented default and reported as an
/// error so the operator reviews it before anything runs.
pub fn load_settings(config: &Path) -> Result<Settings> {
    let settings = Settings::load_or_init(&NormalizedPath::new(config))?;
    tracing::debug!(config = %config.display(), "Loaded settings");
    Ok(settings)
}
