//! Iconpal CLI - search an icon catalog and jump to icon pages.
//!
//! - `search` ranks icons for a query
//! - `open` prints the route of the best match
//! - `list` prints the catalog
//! - `interactive` runs a palette session over stdin

mod interactive_cmd;
mod search_cmd;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use iconpal_search::{Catalog, SearchConfig};

use crate::interactive_cmd::InteractiveArgs;
use crate::search_cmd::{ListArgs, OpenArgs, SearchArgs};

/// Iconpal - jump to an icon by name, alias or category
#[derive(Parser)]
#[command(name = "iconpal")]
#[command(about = "Fuzzy icon palette for the terminal")]
#[command(version)]
struct Cli {
    /// Icon catalog (JSON array, or object with an "icons" array)
    #[arg(short, long, env = "ICONPAL_CATALOG")]
    catalog: PathBuf,

    /// Search configuration file (TOML)
    #[arg(long, env = "ICONPAL_CONFIG")]
    config: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Enable JSON logging
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank icons for a query
    Search(SearchArgs),

    /// Print the route of the best matching icon
    Open(OpenArgs),

    /// List every icon in the catalog
    List(ListArgs),

    /// Type queries line by line, as in the palette dialog
    Interactive(InteractiveArgs),
}

fn setup_logging(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn load_inputs(cli: &Cli) -> Result<(Catalog, SearchConfig)> {
    let config = match &cli.config {
        Some(path) => SearchConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => SearchConfig::default(),
    };

    let catalog = Catalog::load(&cli.catalog)
        .with_context(|| format!("Failed to load catalog from {}", cli.catalog.display()))?;

    Ok((catalog, config))
}

fn run(cli: Cli) -> Result<ExitCode> {
    let (catalog, config) = load_inputs(&cli)?;

    match cli.command {
        Commands::Search(args) => search_cmd::run_search(&catalog, config, &args),
        Commands::Open(args) => search_cmd::run_open(&catalog, config, &args),
        Commands::List(args) => search_cmd::run_list(&catalog, &args),
        Commands::Interactive(args) => interactive_cmd::run(catalog, config, &args),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(&cli.log_level, cli.json_logs);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
