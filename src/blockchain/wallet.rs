//! Wallet construction and transaction signing.
//!
//! # Security
//! - Private keys arrive per request and live only as long as the request
//! - Keys are never logged: `PrivateKey` redacts itself in `Debug`
//! - Signing is local; no key material leaves the process

use alloy::consensus::{SignableTransaction, TxEnvelope};
use alloy::eips::eip2718::Encodable2718;
use alloy::network::TxSignerSync;
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;

use crate::blockchain::transaction::{SignedTransaction, TransactionEnvelope};
use crate::blockchain::types::{BlockchainError, BlockchainResult};

/// Hex-encoded secp256k1 private key supplied by a caller.
#[derive(Clone)]
pub struct PrivateKey(String);

impl PrivateKey {
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    /// Raw key text. Only the wallet should call this.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

/// Signing wallet built from a caller-supplied key.
#[derive(Debug, Clone)]
pub struct Wallet {
    signer: PrivateKeySigner,
}

impl Wallet {
    /// Create a wallet from a hex-encoded private key string.
    ///
    /// # Arguments
    /// * `private_key` - Hex string (with or without 0x prefix)
    pub fn from_private_key(private_key: &PrivateKey) -> BlockchainResult<Self> {
        let raw = private_key.expose().trim();
        let key_hex = raw.strip_prefix("0x").unwrap_or(raw);

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| BlockchainError::Wallet(format!("Invalid private key format: {}", e)))?;

        Ok(Self { signer })
    }

    /// Get the wallet's address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Sign an envelope as an EIP-155 legacy transaction.
    ///
    /// Pure: the same envelope and key always produce the same bytes
    /// (RFC 6979 nonces).
    pub fn sign_envelope(&self, envelope: &TransactionEnvelope) -> BlockchainResult<SignedTransaction> {
        let mut tx = envelope.to_legacy();
        let signature = self
            .signer
            .sign_transaction_sync(&mut tx)
            .map_err(|e| BlockchainError::Wallet(format!("Transaction signing failed: {}", e)))?;

        let signed = tx.into_signed(signature);
        let hash = *signed.hash();
        let raw = TxEnvelope::from(signed).encoded_2718();

        Ok(SignedTransaction {
            hash,
            raw: raw.into(),
        })
    }
}
