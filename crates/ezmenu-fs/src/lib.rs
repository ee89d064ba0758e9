//! Filesystem abstraction for ezmenu
//!
//! Provides normalized path handling, locked atomic I/O, content checksums
//! and format-agnostic configuration loading.

pub mod checksum;
pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::{ConfigFormat, ConfigStore};
pub use constants::MenuFile;
pub use error::{Error, Result};
pub use io::RobustnessConfig;
pub use path::NormalizedPath;
