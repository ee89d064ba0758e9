//! Configuration files in TOML, JSON or YAML
//!
//! The format is chosen by file extension. TOML and YAML files may carry
//! `#` comments; JSON files cannot.

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, NormalizedPath, Result, io};

/// A supported configuration file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Detect the format of `path` from its extension.
    pub fn detect(path: &NormalizedPath) -> Result<Self> {
        let extension = path.extension().unwrap_or("");
        match extension.to_ascii_lowercase().as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }

    /// Whether `#` line comments are valid in this format.
    pub fn supports_comments(self) -> bool {
        !matches!(self, Self::Json)
    }

    /// Parse `content`; `path` is only used in error messages.
    pub fn parse<T: DeserializeOwned>(self, content: &str, path: &NormalizedPath) -> Result<T> {
        let parsed = match self {
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| Error::ConfigParse {
            path: path.to_native(),
            format: self.name().into(),
            message,
        })
    }

    /// Render `value` in this format; `path` is only used in error messages.
    pub fn render<T: Serialize>(self, value: &T, path: &NormalizedPath) -> Result<String> {
        let rendered = match self {
            Self::Toml => toml::to_string_pretty(value).map_err(|e| e.to_string()),
            Self::Json => serde_json::to_string_pretty(value).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::to_string(value).map_err(|e| e.to_string()),
        };
        rendered.map_err(|message| Error::ConfigSerialize {
            path: path.to_native(),
            format: self.name().into(),
            message,
        })
    }
}

/// Loads and saves configuration values, picking the format per file.
#[derive(Debug, Default)]
pub struct ConfigStore {
    robustness: io::RobustnessConfig,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_robustness(robustness: io::RobustnessConfig) -> Self {
        Self { robustness }
    }

    /// Load a configuration value from `path`.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let format = ConfigFormat::detect(path)?;
        let content = io::read_text(path)?;
        format.parse(&content, path)
    }

    /// Save `value` to `path`, followed by `comment` where the format
    /// allows comments. The write is atomic.
    pub fn save<T: Serialize>(&self, path: &NormalizedPath, value: &T, comment: Option<&str>) -> Result<()> {
        let format = ConfigFormat::detect(path)?;
        let mut content = format.render(value, path)?;
        if let Some(comment) = comment.filter(|_| format.supports_comments()) {
            if !content.ends_with('\n') {
                content.push('\n');
            }
            content.push('\n');
            for line in comment.lines() {
                content.push_str("# ");
                content.push_str(line);
                content.push('\n');
            }
        }
        io::write_atomic(path, content.as_bytes(), self.robustness)?;
        tracing::debug!(path = %path, format = format.name(), "Saved configuration");
        Ok(())
    }
}
