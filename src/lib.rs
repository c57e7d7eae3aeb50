//! Validator activation service library.
//!
//! A single `POST /activate-validator` endpoint that encodes an
//! `activateValidator` contract call, signs it with the caller's key and
//! relays the node's receipt.

pub mod blockchain;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::ActivatorConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
