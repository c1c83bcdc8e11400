//! Rainersoft command-line utilities.
//!
//! Usage:
//!   rainersoft slug "Olá Mundo"
//!   rainersoft --locale en-US currency 1234.56
//!   rainersoft --json search posts.json rust --fuzzy
//!
//! Settings come from `--config <file.json>` when given; `--locale`
//! overrides the configured locale.

use anyhow::{Context, Result};
use clap::Parser;
use rainersoft_cli::{run, Command};
use rainersoft_utils::{init_tracing, Locale, UtilsConfig};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "rainersoft", version)]
#[command(about = "Formatting, validation, status and search helpers")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Locale tag (pt-BR, en-US, es-ES)
    #[arg(short, long, global = true)]
    locale: Option<String>,

    /// Path to a JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = match &args.config {
        Some(path) => UtilsConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => UtilsConfig::default(),
    };
    if let Some(tag) = &args.locale {
        config.locale = tag
            .parse::<Locale>()
            .with_context(|| format!("unsupported locale {tag:?}"))?;
    }
    debug!(locale = %config.locale, "configuration resolved");

    let report = run(&args.command, &config)?;
    println!("{}", report.render(args.json)?);
    Ok(())
}
