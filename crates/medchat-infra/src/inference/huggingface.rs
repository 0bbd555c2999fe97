//! HuggingFaceBackend -- concrete [`InferenceBackend`] for the hosted
//! Hugging Face inference API.
//!
//! Sends `POST <endpoint>` with `Authorization: Bearer <token>` and a JSON
//! body `{"inputs": <prompt>}`. One request per call, bounded by the client
//! timeout; there is no retry.
//!
//! The token is wrapped in [`secrecy::SecretString`] and is only exposed
//! while building the request header.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use medchat_core::inference::InferenceBackend;
use medchat_types::inference::InferenceError;

use super::types::InferenceRequest;

/// Hosted inference endpoint backend.
///
/// Does not derive `Debug` so the token can never end up in a log line.
pub struct HuggingFaceBackend {
    client: reqwest::Client,
    api_key: SecretString,
    endpoint: String,
    timeout: Duration,
}

impl HuggingFaceBackend {
    /// Create a backend for `endpoint` with a per-request `timeout`.
    pub fn new(
        api_key: SecretString,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key,
            endpoint: endpoint.into(),
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Map a reqwest transport error onto the failure taxonomy.
fn transport_error(err: reqwest::Error) -> InferenceError {
    if err.is_timeout() {
        InferenceError::Timeout(format!("no response within the time limit: {err}"))
    } else {
        InferenceError::Connection(err.to_string())
    }
}

impl InferenceBackend for HuggingFaceBackend {
    fn name(&self) -> &str {
        "huggingface"
    }

    async fn infer(&self, prompt: &str) -> Result<serde_json::Value, InferenceError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(&InferenceRequest { inputs: prompt })
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(transport_error)?;

        debug!(
            status = status.as_u16(),
            body = %String::from_utf8_lossy(&body),
            "raw inference response"
        );

        if !status.is_success() {
            return Err(InferenceError::Http {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).trim().to_string(),
            });
        }

        serde_json::from_slice(&body).map_err(|e| InferenceError::Decode(e.to_string()))
    }
}
