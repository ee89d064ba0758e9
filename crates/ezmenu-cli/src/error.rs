//! Error types for ezmenu-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from ezmenu-core
    #[error(transparent)]
    Core(#[from] ezmenu_core::Error),

    /// Error from ezmenu-stanza
    #[error(transparent)]
    Stanza(#[from] ezmenu_stanza::Error),

    /// Error from ezmenu-fs
    #[error(transparent)]
    Fs(#[from] ezmenu_fs::Error),

    /// JSON output error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
