//! Error types for ezmenu-core

use std::path::PathBuf;

/// Result type for ezmenu-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ezmenu-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Neither the remote catalog nor a local index is available
    #[error("No collection source: {reason}")]
    NoCollectionSource { reason: String },

    /// Every collection of the pass failed and nothing usable is left
    #[error("No usable collections: all {failed} collection fetches failed")]
    NoUsableCollections { failed: usize },

    /// A callback envelope could not be unwrapped
    #[error("Malformed envelope: {reason}")]
    MalformedEnvelope { reason: String },

    /// Fetching from the catalog failed
    #[error("Transport error for {id}: {message}")]
    Transport { id: String, message: String },

    /// A collection URL could not be parsed
    #[error("Invalid catalog URL {url}: {reason}")]
    InvalidCatalogUrl { url: String, reason: String },

    /// A configuration value is unusable
    #[error("Invalid setting {name}: {reason}")]
    InvalidSetting { name: String, reason: String },

    /// Configuration file was missing; a default one has been written
    #[error("Configuration not found at {path}; a default one was created, please edit it")]
    ConfigNotFound { path: PathBuf },

    /// Filesystem error from ezmenu-fs
    #[error(transparent)]
    Fs(#[from] ezmenu_fs::Error),

    /// JSON serialization/deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn transport(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            id: id.into(),
            message: message.into(),
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedEnvelope {
            reason: reason.into(),
        }
    }
}
