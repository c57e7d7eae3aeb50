//! Transaction building, signing, and submission.
//!
//! # Responsibilities
//! - Assemble the activation envelope (fixed gas limit, encoded call)
//! - Fill nonce, gas price and chain id from the node for the signer
//! - Sign locally and broadcast the raw transaction
//! - No retries: the first failure ends the activation

use alloy::consensus::TxLegacy;
use alloy::primitives::{Address, Bytes, TxHash, TxKind, U256};
use std::sync::Arc;

use crate::blockchain::client::NodeClient;
use crate::blockchain::contract::ContractBinding;
use crate::blockchain::types::{BlockchainError, BlockchainResult, Receipt, ValidatorId};
use crate::blockchain::wallet::{PrivateKey, Wallet};

/// Unsigned activation transaction. Built fresh per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionEnvelope {
    pub from: Address,
    pub to: Address,
    /// Gas limit.
    pub gas: u64,
    pub data: Bytes,
    pub nonce: u64,
    /// Gas price in wei.
    pub gas_price: u128,
    pub chain_id: u64,
}

impl TransactionEnvelope {
    /// EIP-155 legacy form of the envelope. Value is always zero.
    pub fn to_legacy(&self) -> TxLegacy {
        TxLegacy {
            chain_id: Some(self.chain_id),
            nonce: self.nonce,
            gas_price: self.gas_price,
            gas_limit: self.gas,
            to: TxKind::Call(self.to),
            value: U256::ZERO,
            input: self.data.clone(),
        }
    }
}

/// EIP-2718 encoded signed transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransaction {
    pub hash: TxHash,
    pub raw: Bytes,
}

/// Builds, signs and submits activation transactions.
#[derive(Clone)]
pub struct TxBuilder {
    node: Arc<dyn NodeClient>,
    contract: Arc<ContractBinding>,
    gas_limit: u64,
    /// Configured chain id; queried from the node when absent.
    chain_id: Option<u64>,
}

impl TxBuilder {
    /// Create a new transaction builder.
    pub fn new(
        node: Arc<dyn NodeClient>,
        contract: Arc<ContractBinding>,
        gas_limit: u64,
        chain_id: Option<u64>,
    ) -> Self {
        Self {
            node,
            contract,
            gas_limit,
            chain_id,
        }
    }

    /// Build the envelope for `from`, asking the node for the fields a
    /// signature needs.
    ///
    /// # Arguments
    /// * `from` - Sender (the signer's address)
    /// * `data` - Encoded call data
    pub async fn build(&self, from: Address, data: Bytes) -> BlockchainResult<TransactionEnvelope> {
        let chain_id = match self.chain_id {
            Some(id) => id,
            None => self.node.chain_id().await?,
        };
        let nonce = self.node.transaction_count(from).await?;
        let gas_price = self.node.gas_price().await?;

        Ok(TransactionEnvelope {
            from,
            to: self.contract.address(),
            gas: self.gas_limit,
            data,
            nonce,
            gas_price,
            chain_id,
        })
    }

    /// Run one activation: encode, build, sign, submit.
    ///
    /// # Arguments
    /// * `validator_id` - Argument to `activateValidator`
    /// * `account` - Declared sender; must be the key's address
    /// * `private_key` - Signing key, used once and dropped
    pub async fn activate(
        &self,
        validator_id: &ValidatorId,
        account: &str,
        private_key: &PrivateKey,
    ) -> BlockchainResult<Receipt> {
        let data = self.contract.encode_activation(validator_id)?;

        let declared: Address = account
            .trim()
            .parse()
            .map_err(|_| BlockchainError::InvalidAddress(account.to_string()))?;

        let wallet = Wallet::from_private_key(private_key)?;
        if wallet.address() != declared {
            return Err(BlockchainError::SenderMismatch {
                declared,
                derived: wallet.address(),
            });
        }

        let envelope = self.build(declared, data).await?;
        let signed = wallet.sign_envelope(&envelope)?;

        tracing::info!(
            validator_id = %validator_id,
            from = %envelope.from,
            nonce = envelope.nonce,
            tx_hash = %signed.hash,
            "Submitting activation transaction"
        );

        self.node.send_raw_transaction(signed.raw).await
    }

    /// Get the target contract.
    pub fn contract(&self) -> &ContractBinding {
        &self.contract
    }
}
