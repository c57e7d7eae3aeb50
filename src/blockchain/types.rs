//! Chain-specific types and error definitions.

use alloy::primitives::{Address, TxHash};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export node and contract configuration from the config module to avoid duplication
pub use crate::config::schema::{ContractConfig, NodeConfig};

/// Receipt returned by the node, relayed to the caller unmodified.
pub type Receipt = serde_json::Value;

/// Validator identifier as supplied by the caller: a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ValidatorId {
    Number(serde_json::Number),
    Text(String),
}

impl ValidatorId {
    /// Convert a JSON value supplied by the caller.
    ///
    /// Only numbers and strings name a validator; anything else cannot be
    /// encoded as a call argument.
    pub fn from_json(value: serde_json::Value) -> BlockchainResult<Self> {
        match value {
            serde_json::Value::Number(n) => Ok(ValidatorId::Number(n)),
            serde_json::Value::String(s) => Ok(ValidatorId::Text(s)),
            other => Err(BlockchainError::Encoding(format!(
                "validator id must be a number or string, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Textual form handed to ABI coercion.
    pub fn as_abi_input(&self) -> String {
        match self {
            ValidatorId::Number(n) => n.to_string(),
            ValidatorId::Text(s) => s.trim().to_string(),
        }
    }
}

impl std::fmt::Display for ValidatorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidatorId::Number(n) => write!(f, "{}", n),
            ValidatorId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// JSON type name, for messages that must not echo the value itself.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Errors that can occur during blockchain operations.
#[derive(Debug, Error)]
pub enum BlockchainError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// Invalid private key format or signing failure.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// ABI could not be loaded or lacks the expected method.
    #[error("ABI error: {0}")]
    Abi(String),

    /// Call arguments could not be encoded against the ABI.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// A string that should hold an address does not.
    #[error("Invalid address '{0}'")]
    InvalidAddress(String),

    /// The declared sender is not the address the key signs for.
    #[error("Sender {declared} does not match signing key address {derived}")]
    SenderMismatch { declared: Address, derived: Address },

    /// The transaction was mined but execution failed (receipt status 0).
    #[error("Transaction {0} reverted")]
    Reverted(TxHash),
}

/// Result type for blockchain operations.
pub type BlockchainResult<T> = Result<T, BlockchainError>;
