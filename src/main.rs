//! Validator activation service.
//!
//! # Architecture Overview
//!
//! ```text
//!     POST /activate-validator
//!     ───────────────────────▶ ┌──────────┐   ┌──────────┐   ┌──────────┐
//!                              │   http   │──▶│ contract │──▶│  wallet  │
//!                              │ handler  │   │ ABI enc. │   │  signing │
//!     200 {message, receipt}   └──────────┘   └──────────┘   └────┬─────┘
//!     ◀─────────────────────── 400 / 500                          │
//!                                   ▲                             ▼
//!                                   │                      ┌────────────┐
//!                                   └──────── receipt ─────│ node (RPC) │
//!                                                          └────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;

use validator_activator::config::{read_config, validate_config, ActivatorConfig, ConfigError};
use validator_activator::lifecycle::{startup, Shutdown};
use validator_activator::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "validator-activator")]
#[command(about = "HTTP endpoint that activates validators on an Ethereum contract", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override the JSON-RPC endpoint.
    #[arg(long)]
    rpc_url: Option<String>,

    /// Override the contract address.
    #[arg(long)]
    contract: Option<String>,
}

fn load(cli: &Cli) -> Result<ActivatorConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => ActivatorConfig::default(),
    };

    if let Some(bind) = &cli.bind {
        config.listener.bind_address = bind.clone();
    }
    if let Some(rpc_url) = &cli.rpc_url {
        config.node.rpc_url = rpc_url.clone();
    }
    if let Some(contract) = &cli.contract {
        config.contract.address = contract.clone();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load(&cli)?;

    init_logging(&config.observability.log_level);

    tracing::info!("validator-activator v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        rpc_url = %config.node.rpc_url,
        contract = %config.contract.address,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();

    startup::run(config, shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
