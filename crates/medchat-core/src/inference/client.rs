//! InferenceClient -- turns a question plus transcript into a display string.
//!
//! `ask` never fails: transport failures, bad statuses, undecodable bodies,
//! and service-reported errors all become a tagged chat message, and the
//! underlying cause is logged for operators.

use tracing::{Instrument, debug, info_span, warn};

use medchat_types::chat::Turn;
use medchat_types::inference::{FailureKind, InferenceResult};

use super::backend::InferenceBackend;
use super::normalize::{FALLBACK_REPLY, normalize};
use super::prompt::PromptBuilder;

/// Longest cause string shown inside a failure message.
const MAX_CAUSE_CHARS: usize = 300;

/// Client for the remote inference service.
pub struct InferenceClient<B> {
    backend: B,
}

impl<B: InferenceBackend> InferenceClient<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Build the prompt, call the backend once, and classify the outcome.
    pub async fn classify(&self, question: &str, history: &[Turn]) -> InferenceResult {
        let prompt = PromptBuilder::build(history, question);

        let span = info_span!(
            "inference.ask",
            backend = self.backend.name(),
            history_turns = history.len(),
            prompt_chars = prompt.chars().count(),
        );

        async {
            match self.backend.infer(&prompt).await {
                Ok(body) => {
                    let normalized = normalize(&body);
                    debug!(?normalized, "normalized inference response");
                    normalized.into()
                }
                Err(err) => err.into(),
            }
        }
        .instrument(span)
        .await
    }

    /// Answer `question` given the prior turns. Always returns a non-empty string.
    pub async fn ask(&self, question: &str, history: &[Turn]) -> String {
        let result = self.classify(question, history).await;
        if let InferenceResult::Failure { kind, detail } = &result {
            warn!(kind = %kind, detail = %detail, "inference request failed");
        }
        render_result(&result)
    }
}

/// Render a classified outcome as the assistant's chat message.
///
/// Each failure kind has its own stable template, prefixed with `[<kind>]`.
pub fn render_result(result: &InferenceResult) -> String {
    match result {
        InferenceResult::Reply(text) if text.trim().is_empty() => FALLBACK_REPLY.to_string(),
        InferenceResult::Reply(text) => text.clone(),
        InferenceResult::Failure { kind, detail } => {
            let cause = short_cause(detail);
            match kind {
                FailureKind::Timeout => format!(
                    "[{kind}] The AI model took too long to respond. Please try again or simplify your question."
                ),
                FailureKind::ConnectionError => format!(
                    "[{kind}] A connection error occurred. The AI service might be unavailable. \
                     Please check your internet connection or try again later. ({cause})"
                ),
                FailureKind::HttpError => format!(
                    "[{kind}] An HTTP error occurred ({cause}). Please try again later."
                ),
                FailureKind::DecodeError => format!(
                    "[{kind}] The AI model returned an unreadable response. Please try again. ({cause})"
                ),
                FailureKind::ServiceError => format!(
                    "[{kind}] An error occurred with the AI model: {cause}. Please try again."
                ),
            }
        }
    }
}

fn short_cause(detail: &str) -> String {
    let detail = detail.trim();
    if detail.is_empty() {
        return "no details".to_string();
    }
    if detail.chars().count() <= MAX_CAUSE_CHARS {
        return detail.to_string();
    }
    let mut cause: String = detail.chars().take(MAX_CAUSE_CHARS).collect();
    cause.push('…');
    cause
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use medchat_types::chat::Speaker;
    use medchat_types::inference::InferenceError;
    use serde_json::{Value, json};

    /// Backend that returns a canned outcome and records every prompt.
    struct FakeBackend {
        outcome: Result<Value, InferenceError>,
        prompts: Mutex<Vec<String>>,
    }

    impl FakeBackend {
        fn new(outcome: Result<Value, InferenceError>) -> Self {
            Self {
                outcome,
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    impl InferenceBackend for FakeBackend {
        fn name(&self) -> &str {
            "fake"
        }

        async fn infer(&self, prompt: &str) -> Result<Value, InferenceError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.outcome.clone()
        }
    }

    fn client(outcome: Result<Value, InferenceError>) -> InferenceClient<FakeBackend> {
        InferenceClient::new(FakeBackend::new(outcome))
    }

    #[tokio::test]
    async fn test_ask_returns_generated_text() {
        let client = client(Ok(json!({"generated_text": "X"})));
        assert_eq!(client.ask("q", &[]).await, "X");
    }

    #[tokio::test]
    async fn test_ask_returns_answer_from_list() {
        let client = client(Ok(json!([{"answer": "Y"}])));
        assert_eq!(client.ask("q", &[]).await, "Y");
    }

    #[tokio::test]
    async fn test_ask_service_error_contains_message() {
        let client = client(Ok(json!({"error": "model loading"})));
        let reply = client.ask("q", &[]).await;
        assert!(reply.contains("model loading"));
        assert!(reply.starts_with("[ServiceError]"));
    }

    #[tokio::test]
    async fn test_ask_timeout_is_tagged() {
        let client = client(Err(InferenceError::Timeout("operation timed out".into())));
        let reply = client.ask("q", &[]).await;
        assert!(reply.starts_with("[Timeout]"));
    }

    #[tokio::test]
    async fn test_ask_empty_result_is_fallback() {
        let client = client(Ok(json!({"score": 0.9})));
        assert_eq!(client.ask("q", &[]).await, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_every_failure_kind_yields_distinct_non_empty_message() {
        let outcomes = vec![
            Err(InferenceError::Timeout("t".into())),
            Err(InferenceError::Connection("refused".into())),
            Err(InferenceError::Http {
                status: 500,
                body: "boom".into(),
            }),
            Err(InferenceError::Decode("expected value".into())),
            Ok(json!({"error": "overloaded"})),
        ];

        let mut prefixes = Vec::new();
        for outcome in outcomes {
            let reply = client(outcome).ask("q", &[]).await;
            assert!(!reply.is_empty());
            let prefix = reply.split(']').next().unwrap().to_string();
            prefixes.push(prefix);
        }
        prefixes.sort();
        prefixes.dedup();
        assert_eq!(prefixes.len(), 5);
    }

    #[tokio::test]
    async fn test_http_error_shows_status_and_body() {
        let client = client(Err(InferenceError::Http {
            status: 503,
            body: "Service Unavailable".into(),
        }));
        let reply = client.ask("q", &[]).await;
        assert!(reply.contains("503"));
        assert!(reply.contains("Service Unavailable"));
    }

    #[tokio::test]
    async fn test_classify_reports_failure_kind() {
        let client = client(Err(InferenceError::Connection("dns".into())));
        let result = client.classify("q", &[]).await;
        assert_eq!(
            result,
            InferenceResult::failure(FailureKind::ConnectionError, "dns")
        );
    }

    #[tokio::test]
    async fn test_ask_sends_prompt_built_from_history() {
        let client = client(Ok(json!({"generated_text": "ok"})));
        let history = vec![
            Turn::new(Speaker::User, "first question"),
            Turn::new(Speaker::Assistant, "first answer"),
        ];
        client.ask("second question", &history).await;

        let prompts = client.backend().prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0], PromptBuilder::build(&history, "second question"));
    }

    #[test]
    fn test_long_cause_is_truncated() {
        let detail = "x".repeat(1000);
        let message = render_result(&InferenceResult::failure(FailureKind::HttpError, detail));
        assert!(message.chars().count() < 400);
        assert!(message.contains('…'));
    }

    #[test]
    fn test_blank_reply_renders_fallback() {
        assert_eq!(
            render_result(&InferenceResult::Reply("  ".into())),
            FALLBACK_REPLY
        );
    }
}
