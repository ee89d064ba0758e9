//! Well-known file names in the menu output directory.

use std::path::Path;

/// Files the menu front end reads from the output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuFile {
    /// The collection index (`setlist.json`)
    Index,
    /// Default configuration file name
    Config,
}

impl MenuFile {
    /// Get the string representation of the file name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Index => "setlist.json",
            Self::Config => "ezmenu.toml",
        }
    }

    /// File name of the payload for collection `id`.
    pub fn payload(id: &str) -> String {
        format!("{id}.json")
    }
}

impl AsRef<Path> for MenuFile {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for MenuFile {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for MenuFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
