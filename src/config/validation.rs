//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (gas limit > 0, timeouts > 0)
//! - Check addresses and URLs parse before any subsystem starts
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ActivatorConfig → Result<(), Vec<ValidationError>>

use std::fmt;
use std::net::SocketAddr;

use alloy::primitives::Address;

use crate::config::schema::ActivatorConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a loaded configuration.
pub fn validate_config(config: &ActivatorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::new(
            "listener.bind_address",
            format!("'{}' is not a socket address", config.listener.bind_address),
        ));
    }

    if let Err(e) = config.node.rpc_url.parse::<url::Url>() {
        errors.push(ValidationError::new(
            "node.rpc_url",
            format!("'{}' is not a valid URL: {}", config.node.rpc_url, e),
        ));
    }

    if config.node.rpc_timeout_secs == Some(0) {
        errors.push(ValidationError::new("node.rpc_timeout_secs", "must be greater than 0"));
    }

    if config.node.confirmations == 0 {
        errors.push(ValidationError::new("node.confirmations", "must be at least 1"));
    }

    if config.contract.address.is_empty() {
        errors.push(ValidationError::new("contract.address", "is required"));
    } else if config.contract.address.parse::<Address>().is_err() {
        errors.push(ValidationError::new(
            "contract.address",
            format!("'{}' is not a 20-byte hex address", config.contract.address),
        ));
    }

    if config.contract.gas_limit == 0 {
        errors.push(ValidationError::new("contract.gas_limit", "must be greater than 0"));
    }

    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::new("limits.max_body_bytes", "must be greater than 0"));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!("'{}' is not a socket address", config.observability.metrics_address),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> ActivatorConfig {
        let mut config = ActivatorConfig::default();
        config.contract.address = "0x5FbDB2315678afecb367f032d93F642f64180aa3".to_string();
        config
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_missing_contract_address() {
        let config = ActivatorConfig::default();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "contract.address");
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = valid_config();
        config.contract.address = "0xYourContractAddress".to_string();
        config.contract.gas_limit = 0;
        config.node.rpc_url = "not a url".to_string();
        config.listener.bind_address = "localhost".to_string();

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "listener.bind_address",
                "node.rpc_url",
                "contract.address",
                "contract.gas_limit",
            ]
        );
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = valid_config();
        config.node.rpc_timeout_secs = Some(0);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].to_string(), "node.rpc_timeout_secs: must be greater than 0");
    }
}
