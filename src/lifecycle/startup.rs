//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the contract binding and node client from configuration
//! - Start the metrics exporter when enabled
//! - Bind the listener last, so traffic only arrives when ready
//!
//! # Design Decisions
//! - Fail fast: a bad ABI or address is fatal
//! - An unreachable node is not fatal; requests will fail with 500 until it
//!   comes back

use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::blockchain::{BlockchainError, ContractBinding, NodeClient, RpcNodeClient, TxBuilder};
use crate::config::ActivatorConfig;
use crate::http::{AppState, HttpServer};
use crate::lifecycle::Shutdown;
use crate::observability::metrics;

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("blockchain setup failed: {0}")]
    Blockchain(#[from] BlockchainError),

    #[error("invalid address '{address}': {reason}")]
    Address { address: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Build handler state around an already constructed node client.
pub fn build_state(config: &ActivatorConfig, node: Arc<dyn NodeClient>) -> Result<AppState, StartupError> {
    let contract = ContractBinding::from_config(&config.contract)?;

    tracing::info!(
        contract = %contract.address(),
        method = %contract.signature(),
        gas_limit = config.contract.gas_limit,
        "Contract configured"
    );

    let tx_builder = TxBuilder::new(
        node,
        Arc::new(contract),
        config.contract.gas_limit,
        config.node.chain_id,
    );

    Ok(AppState { tx_builder })
}

/// Connect to the configured node and build handler state.
pub async fn initialize(config: &ActivatorConfig) -> Result<AppState, StartupError> {
    let node = RpcNodeClient::new(config.node.clone())?;
    node.verify_chain_id().await;

    build_state(config, Arc::new(node))
}

/// Start every subsystem and serve until `shutdown` fires.
pub async fn run(config: ActivatorConfig, shutdown: Shutdown) -> Result<(), StartupError> {
    if config.observability.metrics_enabled {
        let addr = config
            .observability
            .metrics_address
            .parse()
            .map_err(|e: std::net::AddrParseError| StartupError::Address {
                address: config.observability.metrics_address.clone(),
                reason: e.to_string(),
            })?;
        metrics::init_metrics(addr);
    }

    let state = initialize(&config).await?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = HttpServer::new(config, state);
    server.run(listener, shutdown.subscribe()).await?;

    Ok(())
}
