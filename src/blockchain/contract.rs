//! Validator contract binding.
//!
//! Holds the contract address and the `activateValidator` ABI entry, loaded
//! once at startup and shared read-only by every request.

use std::path::Path;

use alloy::dyn_abi::{DynSolType, JsonAbiExt, Specifier};
use alloy::json_abi::{Function, JsonAbi};
use alloy::primitives::{Address, Bytes};

use crate::blockchain::types::{BlockchainError, BlockchainResult, ContractConfig, ValidatorId};

/// Name of the contract method every activation calls.
pub const ACTIVATE_METHOD: &str = "activateValidator";

/// Signature used when no ABI file is configured.
pub const DEFAULT_ACTIVATE_SIGNATURE: &str = "activateValidator(uint256)";

/// Contract address plus the resolved `activateValidator` function.
#[derive(Debug, Clone)]
pub struct ContractBinding {
    address: Address,
    function: Function,
    argument: DynSolType,
}

impl ContractBinding {
    /// Build a binding from configuration, reading the ABI file if one is set.
    pub fn from_config(config: &ContractConfig) -> BlockchainResult<Self> {
        let address: Address = config
            .address
            .parse()
            .map_err(|_| BlockchainError::InvalidAddress(config.address.clone()))?;

        let function = match &config.abi_path {
            Some(path) => load_function(path)?,
            None => Function::parse(DEFAULT_ACTIVATE_SIGNATURE)
                .map_err(|e| BlockchainError::Abi(e.to_string()))?,
        };

        Self::new(address, function)
    }

    /// Bind an already parsed function to an address.
    pub fn new(address: Address, function: Function) -> BlockchainResult<Self> {
        if function.name != ACTIVATE_METHOD || function.inputs.len() != 1 {
            return Err(BlockchainError::Abi(format!(
                "expected {}(<one argument>), got {}",
                ACTIVATE_METHOD,
                function.signature()
            )));
        }

        let argument = function.inputs[0]
            .resolve()
            .map_err(|e| BlockchainError::Abi(format!("unsupported argument type: {}", e)))?;

        tracing::debug!(
            contract = %address,
            signature = %function.signature(),
            "Contract binding ready"
        );

        Ok(Self {
            address,
            function,
            argument,
        })
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Canonical signature, e.g. `activateValidator(uint256)`.
    pub fn signature(&self) -> String {
        self.function.signature()
    }

    /// ABI-encode `activateValidator(validator_id)`, selector included.
    pub fn encode_activation(&self, validator_id: &ValidatorId) -> BlockchainResult<Bytes> {
        let value = self
            .argument
            .coerce_str(&validator_id.as_abi_input())
            .map_err(|e| {
                BlockchainError::Encoding(format!(
                    "validator id '{}' is not a valid {}: {}",
                    validator_id, self.argument, e
                ))
            })?;

        let data = self
            .function
            .abi_encode_input(&[value])
            .map_err(|e| BlockchainError::Encoding(e.to_string()))?;

        Ok(data.into())
    }
}

/// Read a JSON ABI (bare array or compiler artifact) and pick the
/// single-argument `activateValidator` overload.
fn load_function(path: &Path) -> BlockchainResult<Function> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| BlockchainError::Abi(format!("cannot read {}: {}", path.display(), e)))?;
    parse_function(&content)
}

fn parse_function(content: &str) -> BlockchainResult<Function> {
    let mut json: serde_json::Value =
        serde_json::from_str(content).map_err(|e| BlockchainError::Abi(e.to_string()))?;

    // Compiler artifacts wrap the ABI in an object.
    if let Some(abi) = json.get_mut("abi") {
        json = abi.take();
    }

    let abi: JsonAbi = serde_json::from_value(json).map_err(|e| BlockchainError::Abi(e.to_string()))?;

    abi.function(ACTIVATE_METHOD)
        .and_then(|overloads| overloads.iter().find(|f| f.inputs.len() == 1))
        .cloned()
        .ok_or_else(|| {
            BlockchainError::Abi(format!("ABI has no single-argument {} method", ACTIVATE_METHOD))
        })
}
