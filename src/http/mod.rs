//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, tracing, body limit)
//!     → activate.rs (parse, validate, run activation)
//!     → response.rs (200 receipt | 400 | 413 | 500)
//!     → Send to client
//! ```

pub mod activate;
pub mod health;
pub mod response;
pub mod server;

pub use activate::ActivationRequest;
pub use response::{ActivationError, ActivationResponse, ErrorBody};
pub use server::{AppState, HttpServer};
