//! The `folio` command.
//!
//! Renders site pages from the active configuration and manages the locally
//! persisted configuration.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Render folio site pages and manage their configuration")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Render pages with the active configuration
    Render(commands::render::RenderArgs),

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommands,
    },

    /// Engagement beacon commands
    Beacon {
        #[command(subcommand)]
        command: commands::beacon::BeaconCommands,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();

    match cli.command {
        Commands::Render(args) => commands::render::execute(args).await,
        Commands::Config { command } => commands::config::execute(command).await,
        Commands::Beacon { command } => commands::beacon::execute(command).await,
    }
}
