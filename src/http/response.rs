//! Response bodies and error-to-status mapping.
//!
//! # Design Decisions
//! - Missing input is 400, everything past validation is 500
//! - Bodies over the size limit are 413 and never parsed
//! - Client-facing messages are fixed strings; causes stay in the logs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::blockchain::{BlockchainError, Receipt};

pub const MISSING_FIELDS_MESSAGE: &str = "Validator ID, account, and private key are required";
pub const ACTIVATION_FAILED_MESSAGE: &str = "Failed to activate validator";
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "Request body too large";
pub const ACTIVATED_MESSAGE: &str = "Validator activated";

/// Successful activation body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ActivationResponse {
    pub message: String,
    pub receipt: Receipt,
}

impl ActivationResponse {
    pub fn new(receipt: Receipt) -> Self {
        Self {
            message: ACTIVATED_MESSAGE.to_string(),
            receipt,
        }
    }
}

/// Error body shared by every failure response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors surfaced by the activation endpoint.
#[derive(Debug, Error)]
pub enum ActivationError {
    #[error("missing required field")]
    MissingFields,

    #[error("request body exceeds the size limit")]
    PayloadTooLarge,

    #[error(transparent)]
    Blockchain(#[from] BlockchainError),
}

impl ActivationError {
    pub fn status(&self) -> StatusCode {
        match self {
            ActivationError::MissingFields => StatusCode::BAD_REQUEST,
            ActivationError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ActivationError::Blockchain(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ActivationError {
    fn into_response(self) -> Response {
        let message = match self {
            ActivationError::MissingFields => MISSING_FIELDS_MESSAGE,
            ActivationError::PayloadTooLarge => PAYLOAD_TOO_LARGE_MESSAGE,
            ActivationError::Blockchain(_) => ACTIVATION_FAILED_MESSAGE,
        };

        (
            self.status(),
            Json(ErrorBody {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
