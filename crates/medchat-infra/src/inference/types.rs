//! Hugging Face inference API request types.
//!
//! Responses are not modeled here: their shape varies by model, so they are
//! decoded as `serde_json::Value` and classified by
//! `medchat_core::inference::normalize`.

use serde::Serialize;

/// Request body: `{"inputs": "<prompt>"}`.
#[derive(Debug, Clone, Serialize)]
pub struct InferenceRequest<'a> {
    pub inputs: &'a str,
}
