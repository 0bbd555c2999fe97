//! InferenceBackend trait definition.

use medchat_types::inference::InferenceError;

/// Trait for the remote inference service.
///
/// A backend performs exactly one request per call: it sends the prompt,
/// and returns the decoded JSON body or the transport-level failure. It does
/// not interpret the body; that is [`super::normalize`]'s job.
///
/// Implementations live in medchat-infra (e.g., `HuggingFaceBackend`).
pub trait InferenceBackend: Send + Sync {
    /// Human-readable backend name, used in logs.
    fn name(&self) -> &str;

    /// Send `prompt` to the endpoint and return the parsed response body.
    fn infer(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<serde_json::Value, InferenceError>> + Send;
}
