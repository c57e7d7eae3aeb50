//! Blockchain RPC client.
//!
//! # Responsibilities
//! - Connect to the JSON-RPC endpoint
//! - Query what signing needs (chain id, nonce, gas price)
//! - Submit raw transactions and wait for a successful receipt
//! - Optional per-call timeout; no retries, no failover

use alloy::primitives::{Address, Bytes};
use alloy::providers::{Provider, ProviderBuilder};
use async_trait::async_trait;
use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::blockchain::types::{BlockchainError, BlockchainResult, NodeConfig, Receipt};

/// Operations the activation flow needs from a node.
///
/// Object safe so the HTTP layer can hold an `Arc<dyn NodeClient>` and tests
/// can substitute their own implementation.
#[async_trait]
pub trait NodeClient: Send + Sync {
    /// Chain ID reported by the node.
    async fn chain_id(&self) -> BlockchainResult<u64>;

    /// Next nonce for `address` (pending transactions included).
    async fn transaction_count(&self, address: Address) -> BlockchainResult<u64>;

    /// Current gas price in wei.
    async fn gas_price(&self) -> BlockchainResult<u128>;

    /// Broadcast an EIP-2718 encoded transaction and wait for its receipt.
    ///
    /// A mined transaction whose execution failed is an error, not a receipt.
    async fn send_raw_transaction(&self, raw: Bytes) -> BlockchainResult<Receipt>;
}

/// Node client backed by an alloy HTTP provider.
#[derive(Clone)]
pub struct RpcNodeClient {
    provider: Arc<dyn Provider + Send + Sync>,
    config: NodeConfig,
}

impl RpcNodeClient {
    /// Create a new client. No request is made until the first call.
    pub fn new(config: NodeConfig) -> BlockchainResult<Self> {
        let url: url::Url = config.rpc_url.parse().map_err(|e| {
            BlockchainError::Rpc(format!("Invalid RPC URL '{}': {}", config.rpc_url, e))
        })?;

        let provider = Arc::new(ProviderBuilder::new().connect_http(url)) as Arc<dyn Provider + Send + Sync>;

        Ok(Self { provider, config })
    }

    /// Compare the node's chain id against the configured one.
    ///
    /// A mismatch or an unreachable node only logs a warning.
    pub async fn verify_chain_id(&self) {
        let Some(expected) = self.config.chain_id else {
            return;
        };

        match self.chain_id().await {
            Ok(actual) if actual == expected => {
                tracing::info!(rpc_url = %self.config.rpc_url, chain_id = actual, "Connected to node");
            }
            Ok(actual) => {
                tracing::warn!(
                    expected = expected,
                    actual = actual,
                    "Node chain ID differs from configuration"
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not verify node chain ID");
            }
        }
    }

    async fn call<T, E, F>(&self, op: &'static str, fut: F) -> BlockchainResult<T>
    where
        F: IntoFuture<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        let result = match self.config.rpc_timeout_secs {
            Some(secs) => timeout(Duration::from_secs(secs), fut)
                .await
                .map_err(|_| BlockchainError::Timeout(secs))?,
            None => fut.into_future().await,
        };

        result.map_err(|e| BlockchainError::Rpc(format!("{} failed: {}", op, e)))
    }
}

#[async_trait]
impl NodeClient for RpcNodeClient {
    async fn chain_id(&self) -> BlockchainResult<u64> {
        self.call("eth_chainId", self.provider.get_chain_id()).await
    }

    async fn transaction_count(&self, address: Address) -> BlockchainResult<u64> {
        self.call(
            "eth_getTransactionCount",
            self.provider.get_transaction_count(address).pending(),
        )
        .await
    }

    async fn gas_price(&self) -> BlockchainResult<u128> {
        self.call("eth_gasPrice", self.provider.get_gas_price()).await
    }

    async fn send_raw_transaction(&self, raw: Bytes) -> BlockchainResult<Receipt> {
        let pending = self
            .call("eth_sendRawTransaction", self.provider.send_raw_transaction(&raw))
            .await?;

        tracing::debug!(tx_hash = %pending.tx_hash(), "Transaction broadcast, awaiting receipt");

        let receipt = self
            .call(
                "receipt",
                pending
                    .with_required_confirmations(self.config.confirmations)
                    .get_receipt(),
            )
            .await?;

        if !receipt.status() {
            tracing::warn!(tx_hash = %receipt.transaction_hash, "Transaction reverted");
            return Err(BlockchainError::Reverted(receipt.transaction_hash));
        }

        serde_json::to_value(&receipt)
            .map_err(|e| BlockchainError::Rpc(format!("Malformed receipt: {}", e)))
    }
}

impl std::fmt::Debug for RpcNodeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcNodeClient")
            .field("rpc_url", &self.config.rpc_url)
            .field("chain_id", &self.config.chain_id)
            .field("timeout_secs", &self.config.rpc_timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> NodeConfig {
        NodeConfig {
            // Nothing listens on port 1
            rpc_url: "http://127.0.0.1:1".to_string(),
            chain_id: Some(31337), // Anvil default
            rpc_timeout_secs: Some(2),
            confirmations: 1,
        }
    }

    #[test]
    fn test_client_creation_is_lazy() {
        assert!(RpcNodeClient::new(test_config()).is_ok());
    }

    #[test]
    fn test_invalid_url() {
        let mut config = test_config();
        config.rpc_url = "not a url".to_string();
        let err = RpcNodeClient::new(config).unwrap_err();
        assert!(err.to_string().contains("Invalid RPC URL"));
    }

    #[tokio::test]
    async fn test_unreachable_node_is_an_error() {
        let client = RpcNodeClient::new(test_config()).unwrap();
        let err = client.gas_price().await.unwrap_err();
        assert!(matches!(err, BlockchainError::Rpc(_) | BlockchainError::Timeout(_)));

        // Only logs
        client.verify_chain_id().await;
    }
}
