//! Shipdash Server
//!
//! Run with: cargo run
//!
//! # Configuration
//!
//! Settings come from a TOML config file (see `--config`) with environment
//! variable overrides:
//! - `SHIPDASH_SHIPMENTS`: Shipment CSV path
//! - `SHIPDASH_BOUNDARIES`: Boundary GeoJSON path
//! - `SHIPDASH_HOST`: Host to bind to (default: 0.0.0.0)
//! - `SHIPDASH_PORT`: Port to listen on (default: 8086)
//! - `SHIPDASH_LOG_LEVEL` / `SHIPDASH_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Overrides the log filter entirely when set

use anyhow::Context;
use clap::Parser;
use shipdash::api::{serve, AppState};
use shipdash::config::Config;
use shipdash::data::ShipmentStore;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// COD shipping dashboard server
#[derive(Debug, Parser)]
#[command(name = "shipdash", version, about)]
struct Cli {
    /// Path to a TOML config file; default locations are probed when unset
    #[arg(long)]
    config: Option<PathBuf>,

    /// Shipment CSV path (overrides config)
    #[arg(long)]
    shipments: Option<PathBuf>,

    /// Boundary GeoJSON path (overrides config)
    #[arg(long)]
    boundaries: Option<PathBuf>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {:?}", path))?,
        None => Config::load_default(),
    };

    // CLI flags beat both file and environment
    if let Some(path) = cli.shipments {
        config.data.shipments_path = path;
    }
    if let Some(path) = cli.boundaries {
        config.data.boundaries_path = path;
    }
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    init_tracing(&config);

    tracing::info!("Starting Shipdash v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Shipments: {:?}", config.data.shipments_path);
    tracing::info!("Boundaries: {:?}", config.data.boundaries_path);

    // Load both source files; any failure here ends the session since the
    // dashboard has no function without its data
    let store = ShipmentStore::load(&config.data.shipments_path, &config.data.boundaries_path)
        .context("loading the shipping dataset")?;

    tracing::info!(
        records = store.len(),
        modes = store.modes().len(),
        provinces = store.province_counts().len(),
        "Dataset loaded"
    );

    let state = AppState::new(Arc::new(store), config.server.clone());
    serve(state, &config.server).await?;

    tracing::info!("Shipdash stopped");
    Ok(())
}

/// Initialize tracing from the logging config
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new(format!(
                "shipdash={},tower_http=info",
                config.logging.level
            ))
        });

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
