//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ezmenu_fs::MenuFile;

/// ezmenu - Keep the proxy's stanza file and menu collections up to date
#[derive(Parser, Debug)]
#[command(name = "ezmenu")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (TOML, JSON or YAML)
    #[arg(
        short,
        long,
        global = true,
        env = "EZMENU_CONFIG",
        default_value = MenuFile::Config.as_str()
    )]
    pub config: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Write a default configuration file
    Init,

    /// Inject the menu script into every stanza of the proxy's stanza file
    ///
    /// Examples:
    ///   ezmenu inject                          # Paths and script from the config
    ///   ezmenu inject --target eResources.txt  # Write somewhere else
    Inject {
        /// Stanza file to read [default: eresources_source]
        #[arg(long)]
        source: Option<String>,

        /// Where to write the rewritten file [default: eresources_target]
        #[arg(long)]
        target: Option<String>,

        /// Script URL to inject [default: injection_url]
        #[arg(long)]
        url: Option<String>,
    },

    /// Synchronize menu collections with the catalog
    Sync {
        /// Directory holding the fetched catalog responses
        #[arg(long)]
        snapshot: PathBuf,

        /// Output the report as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
