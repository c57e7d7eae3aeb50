//! Shared utilities for integration tests.

#![allow(dead_code)]

pub mod rpc;

use alloy::primitives::{Address, Bytes};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

use validator_activator::blockchain::{
    BlockchainError, BlockchainResult, NodeClient, Receipt, RpcNodeClient,
};
use validator_activator::config::ActivatorConfig;
use validator_activator::http::HttpServer;
use validator_activator::lifecycle::{startup::build_state, Shutdown};

// Anvil's first account
pub const TEST_PRIVATE_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const TEST_ACCOUNT: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
pub const CONTRACT_ADDRESS: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

/// Detail the node reports on failure; must never reach the client.
pub const NODE_ERROR_DETAIL: &str = "insufficient funds for gas * price + value";

/// In-memory node that records every call.
#[derive(Default)]
pub struct MockNode {
    calls: AtomicUsize,
    sent: Mutex<Vec<Bytes>>,
    fail_send: bool,
    send_delay: Option<Duration>,
}

impl MockNode {
    pub fn ok() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail_send: true,
            ..Self::default()
        })
    }

    /// Node that holds every submission for `delay`, to overlap requests.
    pub fn slow(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            send_delay: Some(delay),
            ..Self::default()
        })
    }

    /// Total number of RPC calls of any kind.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Raw transactions submitted so far.
    pub fn sent(&self) -> Vec<Bytes> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NodeClient for MockNode {
    async fn chain_id(&self) -> BlockchainResult<u64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(31337)
    }

    async fn transaction_count(&self, _address: Address) -> BlockchainResult<u64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(0)
    }

    async fn gas_price(&self) -> BlockchainResult<u128> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(1_000_000_000)
    }

    async fn send_raw_transaction(&self, raw: Bytes) -> BlockchainResult<Receipt> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.send_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_send {
            return Err(BlockchainError::Rpc(NODE_ERROR_DETAIL.to_string()));
        }
        self.sent.lock().unwrap().push(raw);
        Ok(serde_json::json!({ "transactionHash": "0xabc" }))
    }
}

fn test_config() -> ActivatorConfig {
    let mut config = ActivatorConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.contract.address = CONTRACT_ADDRESS.to_string();
    config
}

/// Real alloy client pointed at `rpc_url`, bounded so a stuck call fails the test.
pub fn rpc_client(rpc_url: &str) -> RpcNodeClient {
    let mut config = test_config().node;
    config.rpc_url = rpc_url.to_string();
    config.rpc_timeout_secs = Some(10);
    RpcNodeClient::new(config).unwrap()
}

/// Start the server on an ephemeral port backed by `node`.
///
/// Returns the base URL and the shutdown handle.
pub async fn start_server(node: Arc<dyn NodeClient>) -> (String, Shutdown) {
    let config = test_config();
    let state = build_state(&config, node).unwrap();
    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config, state);
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (format!("http://{}", addr), shutdown)
}

pub fn activation_body(validator_id: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "validatorId": validator_id,
        "account": TEST_ACCOUNT,
        "privateKey": TEST_PRIVATE_KEY,
    })
}
