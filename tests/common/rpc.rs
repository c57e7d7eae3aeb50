//! Minimal JSON-RPC node for driving the real alloy client.

use axum::{extract::State, routing::post, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use super::{CONTRACT_ADDRESS, TEST_ACCOUNT};

pub const TX_HASH: &str = "0x8d2f1d7a3c4b5e6f708192a3b4c5d6e7f8091a2b3c4d5e6f708192a3b4c5d6e7";

/// Receipt status byte the node reports for every transaction.
#[derive(Clone, Copy)]
pub enum ReceiptStatus {
    Success,
    Reverted,
}

/// Serve JSON-RPC on an ephemeral port and return its URL.
///
/// Answers what the activation flow needs; other methods get `-32601`.
pub async fn start_mock_rpc(status: ReceiptStatus) -> String {
    let app = Router::new().route("/", post(handle)).with_state(status);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    format!("http://{}", addr)
}

async fn handle(State(status): State<ReceiptStatus>, Json(request): Json<Value>) -> Json<Value> {
    let id = request["id"].clone();
    let result = match request["method"].as_str().unwrap_or_default() {
        "eth_chainId" => json!("0x7a69"),
        "eth_blockNumber" => json!("0x1"),
        "eth_getTransactionCount" => json!("0x0"),
        "eth_gasPrice" => json!("0x3b9aca00"),
        "eth_sendRawTransaction" => json!(TX_HASH),
        "eth_getTransactionReceipt" => receipt(status),
        method => {
            return Json(json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": { "code": -32601, "message": format!("method {} not supported", method) },
            }))
        }
    };

    Json(json!({ "jsonrpc": "2.0", "id": id, "result": result }))
}

fn receipt(status: ReceiptStatus) -> Value {
    let status = match status {
        ReceiptStatus::Success => "0x1",
        ReceiptStatus::Reverted => "0x0",
    };

    json!({
        "type": "0x0",
        "status": status,
        "cumulativeGasUsed": "0x5a3c",
        "logs": [],
        "logsBloom": format!("0x{}", "0".repeat(512)),
        "transactionHash": TX_HASH,
        "transactionIndex": "0x0",
        "blockHash": format!("0x{}", "11".repeat(32)),
        "blockNumber": "0x1",
        "gasUsed": "0x5a3c",
        "effectiveGasPrice": "0x3b9aca00",
        "from": TEST_ACCOUNT,
        "to": CONTRACT_ADDRESS,
        "contractAddress": null,
    })
}
