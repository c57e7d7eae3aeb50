//! `POST /activate-validator` handler.
//!
//! One linear flow per request: validate, then hand off to the
//! transaction builder. Validation failures never reach the node.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use std::time::Instant;

use crate::blockchain::types::json_kind;
use crate::blockchain::{BlockchainError, PrivateKey, ValidatorId};
use crate::http::response::{ActivationError, ActivationResponse};
use crate::http::server::AppState;
use crate::observability::metrics;

/// Activation request body.
///
/// Fields stay untyped until presence is checked, so a field that is absent
/// is a 400 while a field of the wrong type fails later as a 500.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationRequest {
    pub validator_id: Option<Value>,
    pub account: Option<Value>,
    pub private_key: Option<Value>,
}

/// JavaScript truthiness: `null`, `false`, `0` and `""` count as absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl ActivationRequest {
    /// Split into the three required fields.
    ///
    /// Missing fields give [`ActivationError::MissingFields`]; present fields
    /// that cannot be used give a [`BlockchainError`].
    pub fn into_parts(self) -> Result<(ValidatorId, String, PrivateKey), ActivationError> {
        let (Some(validator_id), Some(account), Some(private_key)) = (
            self.validator_id.filter(is_truthy),
            self.account.filter(is_truthy),
            self.private_key.filter(is_truthy),
        ) else {
            return Err(ActivationError::MissingFields);
        };

        let validator_id = ValidatorId::from_json(validator_id)?;

        let account = match account {
            Value::String(account) => account,
            other => return Err(BlockchainError::InvalidAddress(other.to_string()).into()),
        };

        let private_key = match private_key {
            Value::String(key) => PrivateKey::new(key),
            other => {
                return Err(BlockchainError::Wallet(format!(
                    "Invalid private key format: expected a hex string, got {}",
                    json_kind(&other)
                ))
                .into())
            }
        };

        Ok((validator_id, account, private_key))
    }
}

impl std::fmt::Debug for ActivationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivationRequest")
            .field("validator_id", &self.validator_id)
            .field("account", &self.account)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

pub async fn activate_validator(
    State(state): State<AppState>,
    payload: Result<Json<ActivationRequest>, JsonRejection>,
) -> Result<Json<ActivationResponse>, ActivationError> {
    let start = Instant::now();

    let result = process(&state, payload).await;

    let status = match &result {
        Ok(_) => 200,
        Err(e) => e.status().as_u16(),
    };
    metrics::record_request(status, start);

    result
}

async fn process(
    state: &AppState,
    payload: Result<Json<ActivationRequest>, JsonRejection>,
) -> Result<Json<ActivationResponse>, ActivationError> {
    // Rejection text can quote the body, so only the status is logged.
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(status = %rejection.status(), "Unreadable activation request body");
        match rejection {
            JsonRejection::BytesRejection(ref r) if r.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                ActivationError::PayloadTooLarge
            }
            _ => ActivationError::MissingFields,
        }
    })?;

    let (validator_id, account, private_key) = request.into_parts().inspect_err(|e| match e {
        ActivationError::MissingFields => {
            tracing::warn!("Activation request missing required fields")
        }
        e => tracing::error!(error = %e, "Error activating validator"),
    })?;

    let receipt = state
        .tx_builder
        .activate(&validator_id, &account, &private_key)
        .await
        .map_err(|e| {
            tracing::error!(validator_id = %validator_id, error = %e, "Error activating validator");
            ActivationError::from(e)
        })?;

    tracing::info!(validator_id = %validator_id, "Validator activated");
    Ok(Json(ActivationResponse::new(receipt)))
}
