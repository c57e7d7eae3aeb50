//! Client for the validator activation endpoint.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request body for `POST /activate-validator`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationRequest {
    pub validator_id: serde_json::Value,
    pub account: String,
    pub private_key: String,
}

#[derive(Debug, Deserialize)]
pub struct ActivationResponse {
    pub message: String,
    pub receipt: serde_json::Value,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status and an error body.
    #[error("service returned {status}: {message}")]
    Service { status: StatusCode, message: String },
}

pub struct ActivatorClient {
    client: Client,
    base_url: String,
}

impl ActivatorClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Activate a validator. Non-2xx answers become `ClientError::Service`.
    pub async fn activate(&self, req: &ActivationRequest) -> Result<ActivationResponse, ClientError> {
        let resp = self
            .client
            .post(format!("{}/activate-validator", self.base_url))
            .json(req)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body: serde_json::Value = resp.json().await.unwrap_or_default();
            let message = body
                .get("error")
                .and_then(|e| e.as_str())
                .unwrap_or("unknown error")
                .to_string();
            return Err(ClientError::Service { status, message });
        }

        Ok(resp.json().await?)
    }
}
