//! Engagement beacon commands.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use folio_beacon::{Beacon, BeaconConfig};
use folio_beacon::config::DEFAULT_VIEWPORT_WIDTH;

#[derive(Subcommand)]
pub enum BeaconCommands {
    /// Send a single pageview to the collector
    Ping {
        /// Page path to report
        #[arg(long, default_value = "/")]
        page: String,

        /// Collector URL
        #[arg(long, env = "FOLIO_BEACON_ENDPOINT")]
        endpoint: Option<String>,

        /// Site origin reported with the batch
        #[arg(long, default_value = "")]
        origin: String,

        /// Viewport width used to pick the device class
        #[arg(long, default_value_t = DEFAULT_VIEWPORT_WIDTH)]
        width: u32,

        /// Behave as if the visitor set do-not-track
        #[arg(long)]
        do_not_track: bool,
    },
}

pub async fn execute(cmd: BeaconCommands) -> Result<()> {
    match cmd {
        BeaconCommands::Ping {
            page,
            endpoint,
            origin,
            width,
            do_not_track,
        } => cmd_ping(page, endpoint, origin, width, do_not_track).await,
    }
}

async fn cmd_ping(
    page: String,
    endpoint: Option<String>,
    origin: String,
    width: u32,
    do_not_track: bool,
) -> Result<()> {
    let mut config = BeaconConfig::new()
        .with_origin(origin)
        .with_viewport_width(width)
        .with_do_not_track(do_not_track);
    if let Some(endpoint) = endpoint {
        config = config.with_endpoint(endpoint);
    }

    let beacon = Beacon::new(config, page);
    if !beacon.is_enabled() {
        println!("{} Do-not-track is set; nothing sent", "OK".green());
        return Ok(());
    }

    beacon.pageview();
    let sent = beacon
        .try_flush()
        .await
        .with_context(|| format!("Failed to reach {}", beacon.config().endpoint()))?;
    println!(
        "{} Sent {sent} event(s) to {}",
        "OK".green(),
        beacon.config().endpoint().cyan()
    );
    Ok(())
}
