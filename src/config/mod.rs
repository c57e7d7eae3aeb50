//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → [command line overrides]
//!     → validation.rs (semantic checks)
//!     → ActivatorConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no hot reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, read_config, ConfigError};
pub use schema::{
    ActivatorConfig, ContractConfig, LimitsConfig, ListenerConfig, NodeConfig, ObservabilityConfig,
};
pub use validation::{validate_config, ValidationError};
