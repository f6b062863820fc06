//! Configuration management commands.
//!
//! Show, save, reset, init, schema and validate for the site configuration.

use super::{SourceArgs, StateArgs};
use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use folio_config::loader::{REMOTE_FILE, standard_providers};
use folio_config::validation::AdvisoryWarning;
use folio_config::persist::write_json_file;
use folio_config::{ConfigSource, ResolvedConfig, SiteStore, resolve_configuration};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the active configuration
    Show {
        /// Output as raw JSON (no formatting)
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Persist a configuration file as the local configuration
    Save {
        /// JSON file with a full or partial configuration
        file: PathBuf,

        #[command(flatten)]
        state: StateArgs,
    },

    /// Remove the persisted configuration
    Reset {
        #[command(flatten)]
        state: StateArgs,
    },

    /// Write the default configuration to a file
    Init {
        /// Destination file
        #[arg(long, default_value = REMOTE_FILE)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Output the JSON Schema for site-config.json
    Schema,

    /// Validate a configuration and show warnings
    Validate {
        /// Validate this file instead of the active configuration
        file: Option<PathBuf>,

        #[command(flatten)]
        source: SourceArgs,
    },
}

pub async fn execute(cmd: ConfigCommands) -> Result<()> {
    match cmd {
        ConfigCommands::Show { json, source } => cmd_show(json, source).await,
        ConfigCommands::Save { file, state } => cmd_save(&file, &state),
        ConfigCommands::Reset { state } => cmd_reset(&state),
        ConfigCommands::Init { path, force } => cmd_init(&path, force),
        ConfigCommands::Schema => cmd_schema(),
        ConfigCommands::Validate { file, source } => cmd_validate(file, source).await,
    }
}

async fn resolve(source: &SourceArgs) -> Result<ResolvedConfig> {
    let persisted = Arc::new(source.state.file_store()?);
    let providers = standard_providers(source.remote.clone(), persisted);
    Ok(resolve_configuration(&providers).await)
}

fn read_partial(file: &Path) -> Result<Value> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid JSON in {}", file.display()))?;
    if !value.is_object() {
        anyhow::bail!("Expected a JSON object in {}", file.display());
    }
    Ok(value)
}

fn print_warnings(warnings: &[AdvisoryWarning]) {
    for warning in warnings {
        eprintln!("{} {}", "WARN".yellow(), warning);
    }
}

async fn cmd_show(json_output: bool, source: SourceArgs) -> Result<()> {
    let resolved = resolve(&source).await?;
    eprintln!("{} Config loaded from {}", "INFO".blue(), resolved.source);
    print_warnings(&resolved.warnings);

    if json_output {
        println!("{}", serde_json::to_string(&resolved.config)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&resolved.config)?);
    }
    Ok(())
}

fn cmd_save(file: &Path, state: &StateArgs) -> Result<()> {
    let partial = read_partial(file)?;
    let resolved = ResolvedConfig::from_partial(&partial, ConfigSource::LocalPersisted);
    print_warnings(&resolved.warnings);

    let persisted = state.file_store()?;
    let path = persisted.path().to_path_buf();
    let mut store = SiteStore::new(ResolvedConfig::defaults(), Arc::new(persisted));
    store
        .save(resolved.config)
        .with_context(|| format!("Failed to save config to {}", path.display()))?;

    println!(
        "{} Saved {}",
        "OK".green(),
        path.display().to_string().cyan()
    );
    Ok(())
}

fn cmd_reset(state: &StateArgs) -> Result<()> {
    let persisted = state.file_store()?;
    let path = persisted.path().to_path_buf();
    let mut store = SiteStore::new(ResolvedConfig::defaults(), Arc::new(persisted));
    store
        .reset()
        .with_context(|| format!("Failed to remove {}", path.display()))?;

    println!("{} Reset to the default configuration", "OK".green());
    Ok(())
}

fn cmd_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists: {}\nUse --force to overwrite",
            path.display()
        );
    }

    write_json_file(path, &folio_config::defaults::default_value())?;

    println!(
        "{} Created {}",
        "OK".green(),
        path.display().to_string().cyan()
    );
    Ok(())
}

fn cmd_schema() -> Result<()> {
    println!("{}", folio_config::schema_json_pretty()?);
    Ok(())
}

async fn cmd_validate(file: Option<PathBuf>, source: SourceArgs) -> Result<()> {
    let resolved = match &file {
        Some(file) => ResolvedConfig::from_partial(&read_partial(file)?, ConfigSource::Default),
        None => resolve(&source).await?,
    };
    let origin = match &file {
        Some(file) => file.display().to_string(),
        None => resolved.source.to_string(),
    };

    if resolved.warnings.is_empty() {
        println!("{} Configuration is valid ({origin})", "OK".green());
    } else {
        println!(
            "{} Configuration has {} warning(s) ({origin}):",
            "WARN".yellow(),
            resolved.warnings.len()
        );
        for w in &resolved.warnings {
            println!("  - {w}");
        }
    }
    Ok(())
}
