//! # wac
//!
//! Command-line interface for inspecting WebACL access decisions.
//!
//! Graphs are loaded from YAML/JSON graph documents (see `wac_graph::document`):
//! - `wac check` — decide one access request and print the verdict
//! - `wac explain` — decide and print every evaluation step
//! - `wac trusted-modes` — resolve the modes resource owners trust an origin with
//! - `wac trusted-apps` — list the trusted-app declarations in an owner's profile

mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::CliConfig;

/// wac — explain who may do what to a linked-data resource.
#[derive(Parser)]
#[command(name = "wac", version, about)]
struct Cli {
    /// Config file (missing file means defaults).
    #[arg(long, default_value = "wac.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decide one access request.
    Check(commands::check::RequestArgs),
    /// Decide one access request and show how the decision was reached.
    Explain(commands::check::RequestArgs),
    /// Resolve the modes the owners of a resource trust an origin with.
    TrustedModes(commands::trust::TrustedModesArgs),
    /// List the trusted applications an owner declares.
    TrustedApps(commands::trust::TrustedAppsArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::load_or_default(&cli.config)?;

    // Logs go to stderr so they don't interfere with --json on stdout.
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(_) => EnvFilter::from_default_env(),
        Err(_) => EnvFilter::new(config.log_filter.as_deref().unwrap_or("wac=info,wac_check=warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    match &cli.command {
        Commands::Check(args) => commands::check::execute(args, &config),
        Commands::Explain(args) => commands::check::explain(args, &config),
        Commands::TrustedModes(args) => commands::trust::trusted_modes(args, &config),
        Commands::TrustedApps(args) => commands::trust::trusted_apps(args),
    }
}
