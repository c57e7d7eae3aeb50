//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! ActivationRequest (validator id, account, private key)
//!     → contract.rs (ABI-encode activateValidator)
//!     → wallet.rs (key parsing, offline signing)
//!     → transaction.rs (envelope, nonce/gas fill, submit)
//!     → client.rs (JSON-RPC node, receipt)
//! ```
//!
//! # Security Constraints
//! - Private keys are request-scoped and never logged
//! - Contract address and ABI are fixed at startup
//! - RPC timeouts are opt-in; there are no retries

pub mod client;
pub mod contract;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use client::{NodeClient, RpcNodeClient};
pub use contract::ContractBinding;
pub use transaction::{SignedTransaction, TransactionEnvelope, TxBuilder};
pub use types::{BlockchainError, BlockchainResult, Receipt, ValidatorId};
pub use wallet::{PrivateKey, Wallet};
