//! ezmenu CLI
//!
//! Rewrites the proxy's stanza file with the menu injection and keeps the
//! menu's collection files in step with the catalog.

mod cli;
mod commands;
mod error;
mod source;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so that `--json` output stays clean.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(cli.verbose)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(&cli.config, cmd),
        None => {
            println!("{} Proxy menu maintenance", "ezmenu".green().bold());
            println!();
            println!("Run {} for available commands.", "ezmenu --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(config: &std::path::Path, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Init => commands::run_init(config),
        Commands::Inject {
            source,
            target,
            url,
        } => commands::run_inject(config, source.as_deref(), target.as_deref(), url.as_deref()),
        Commands::Sync { snapshot, json } => commands::run_sync(config, &snapshot, json),
    }
}
