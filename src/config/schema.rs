//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the activator.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Gas limit attached to every activation transaction unless overridden.
pub const DEFAULT_GAS_LIMIT: u64 = 2_000_000;

/// Root configuration for the validator activator.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ActivatorConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// JSON-RPC node the transactions are submitted to.
    pub node: NodeConfig,

    /// Target contract and transaction shape.
    pub contract: ContractConfig,

    /// Request limits.
    pub limits: LimitsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Blockchain node configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NodeConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Expected chain ID. When set it is used for EIP-155 signing instead of
    /// asking the node on every request.
    pub chain_id: Option<u64>,

    /// Per-call RPC timeout in seconds. Unset means wait indefinitely.
    pub rpc_timeout_secs: Option<u64>,

    /// Confirmations to wait for before the receipt is returned.
    pub confirmations: u64,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            chain_id: None,
            rpc_timeout_secs: None,
            confirmations: 1,
        }
    }
}

/// Validator contract configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContractConfig {
    /// Address of the contract exposing `activateValidator`.
    pub address: String,

    /// JSON ABI file (bare array or compiler artifact with an `abi` field).
    /// Falls back to `activateValidator(uint256)` when unset.
    pub abi_path: Option<PathBuf>,

    /// Gas limit for the activation transaction.
    pub gas_limit: u64,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            address: String::new(),
            abi_path: None,
            gas_limit: DEFAULT_GAS_LIMIT,
        }
    }
}

/// Request limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 64 * 1024,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
