//! `RpcNodeClient` against a JSON-RPC node served in-process.

use alloy::primitives::{Bytes, TxHash};
use validator_activator::blockchain::{BlockchainError, NodeClient};

mod common;

use common::rpc::{start_mock_rpc, ReceiptStatus, TX_HASH};
use common::rpc_client;

#[tokio::test]
async fn test_successful_receipt_is_relayed() {
    let url = start_mock_rpc(ReceiptStatus::Success).await;
    let client = rpc_client(&url);

    let receipt = client
        .send_raw_transaction(Bytes::from_static(&[0x01, 0x02]))
        .await
        .unwrap();

    assert_eq!(receipt["status"], "0x1");
    assert_eq!(receipt["transactionHash"], TX_HASH);
}

#[tokio::test]
async fn test_reverted_receipt_is_an_error() {
    let url = start_mock_rpc(ReceiptStatus::Reverted).await;
    let client = rpc_client(&url);

    let err = client
        .send_raw_transaction(Bytes::from_static(&[0x01, 0x02]))
        .await
        .unwrap_err();

    match err {
        BlockchainError::Reverted(hash) => assert_eq!(hash, TX_HASH.parse::<TxHash>().unwrap()),
        other => panic!("expected a revert, got: {}", other),
    }
}

#[tokio::test]
async fn test_signing_inputs_come_from_the_node() {
    let url = start_mock_rpc(ReceiptStatus::Success).await;
    let client = rpc_client(&url);

    assert_eq!(client.chain_id().await.unwrap(), 31337);
    assert_eq!(client.gas_price().await.unwrap(), 1_000_000_000);
    let account = common::TEST_ACCOUNT.parse().unwrap();
    assert_eq!(client.transaction_count(account).await.unwrap(), 0);
}
