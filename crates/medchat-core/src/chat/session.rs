//! One browser session's chat context.
//!
//! Owns the session's transcript and drives the submit flow:
//! user turn -> inference -> assistant turn. Callers are expected to hold
//! exclusive access (`&mut self`) for the whole submit so that one session
//! never has two requests in flight.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use medchat_types::chat::{SessionId, Speaker};
use medchat_types::error::ChatError;

use crate::inference::{InferenceBackend, InferenceClient};

use super::transcript::Transcript;

/// Per-session context object passed to every chat operation.
#[derive(Debug)]
pub struct ChatSession {
    id: SessionId,
    transcript: Transcript,
    created_at: DateTime<Utc>,
    last_active_at: DateTime<Utc>,
}

impl ChatSession {
    pub fn new(id: SessionId) -> Self {
        let now = Utc::now();
        Self {
            id,
            transcript: Transcript::new(),
            created_at: now,
            last_active_at: now,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_active_at(&self) -> DateTime<Utc> {
        self.last_active_at
    }

    /// Record activity on this session.
    pub fn touch(&mut self) {
        self.last_active_at = Utc::now();
    }

    /// Whether the session has been idle for longer than `idle_timeout` as of `now`.
    pub fn is_idle(&self, now: DateTime<Utc>, idle_timeout: Duration) -> bool {
        now - self.last_active_at > idle_timeout
    }

    /// Submit a question: append the user turn, ask, append the reply.
    ///
    /// The prompt history is the transcript as it was before this question,
    /// so the question is not repeated inside the history block.
    pub async fn submit<B: InferenceBackend>(
        &mut self,
        question: &str,
        client: &InferenceClient<B>,
    ) -> Result<String, ChatError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(ChatError::EmptyQuestion);
        }

        self.touch();
        let history = self.transcript.all().to_vec();
        self.transcript.append(Speaker::User, question);

        let reply = client.ask(question, &history).await;
        self.transcript.append(Speaker::Assistant, reply.clone());
        self.touch();

        debug!(session_id = %self.id, turns = self.transcript.len(), "turn completed");
        Ok(reply)
    }

    /// Empty the transcript. Irreversible.
    pub fn clear(&mut self) {
        self.transcript.clear();
        self.touch();
        debug!(session_id = %self.id, "transcript cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use medchat_types::inference::InferenceError;
    use serde_json::{Value, json};

    use crate::inference::prompt::PromptBuilder;

    struct EchoBackend {
        prompts: Mutex<Vec<String>>,
    }

    impl InferenceBackend for EchoBackend {
        fn name(&self) -> &str {
            "echo"
        }

        async fn infer(&self, prompt: &str) -> Result<Value, InferenceError> {
            let mut prompts = self.prompts.lock().unwrap();
            prompts.push(prompt.to_string());
            Ok(json!([{"generated_text": format!("reply {}", prompts.len())}]))
        }
    }

    fn client() -> InferenceClient<EchoBackend> {
        InferenceClient::new(EchoBackend {
            prompts: Mutex::new(Vec::new()),
        })
    }

    #[tokio::test]
    async fn test_submit_appends_user_then_assistant() {
        let client = client();
        let mut session = ChatSession::new(SessionId::new());

        let reply = session.submit("What is a fever?", &client).await.unwrap();
        assert_eq!(reply, "reply 1");

        let turns = session.transcript().all();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].speaker(), Speaker::User);
        assert_eq!(turns[0].text(), "What is a fever?");
        assert_eq!(turns[1].speaker(), Speaker::Assistant);
        assert_eq!(turns[1].text(), "reply 1");
    }

    #[tokio::test]
    async fn test_prompt_history_excludes_current_question() {
        let client = client();
        let mut session = ChatSession::new(SessionId::new());

        session.submit("first", &client).await.unwrap();
        let history_before = session.transcript().all().to_vec();
        session.submit("second", &client).await.unwrap();

        let prompts = client.backend().prompts.lock().unwrap();
        assert_eq!(prompts[0], PromptBuilder::build(&[], "first"));
        assert_eq!(prompts[1], PromptBuilder::build(&history_before, "second"));
    }

    #[tokio::test]
    async fn test_blank_question_is_rejected_without_side_effects() {
        let client = client();
        let mut session = ChatSession::new(SessionId::new());

        let err = session.submit("   ", &client).await.unwrap_err();
        assert_eq!(err, ChatError::EmptyQuestion);
        assert!(session.transcript().is_empty());
        assert!(client.backend().prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_assistant_turns_always_follow_a_user_turn() {
        let client = client();
        let mut session = ChatSession::new(SessionId::new());
        for q in ["a", "b", "c"] {
            session.submit(q, &client).await.unwrap();
        }

        for (i, turn) in session.transcript().all().iter().enumerate() {
            if turn.speaker() == Speaker::Assistant {
                assert!(i > 0);
                assert_eq!(session.transcript().all()[i - 1].speaker(), Speaker::User);
            }
        }
    }

    #[tokio::test]
    async fn test_clear_then_submit() {
        let client = client();
        let mut session = ChatSession::new(SessionId::new());
        session.submit("a", &client).await.unwrap();
        session.clear();
        assert!(session.transcript().is_empty());

        session.submit("b", &client).await.unwrap();
        assert_eq!(session.transcript().len(), 2);
    }

    #[test]
    fn test_is_idle() {
        let session = ChatSession::new(SessionId::new());
        let timeout = Duration::seconds(60);
        assert!(!session.is_idle(session.last_active_at(), timeout));
        assert!(session.is_idle(session.last_active_at() + Duration::seconds(61), timeout));
    }
}
