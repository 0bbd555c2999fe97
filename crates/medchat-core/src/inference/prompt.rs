//! Prompt builder for the medical assistant.
//!
//! Layout:
//! ```text
//! {PREAMBLE}
//!
//! Chat History:
//! User: ...
//! Assistant: ...
//!
//! Current User Question: {question}
//!
//! Assistant's Response:
//! ```
//!
//! The `Chat History:` section is left out when there is no history.

use medchat_types::chat::Turn;

/// Fixed instructions describing the assistant's role and safety limits.
pub const PREAMBLE: &str = "You are an AI Medical Assistant. Your goal is to provide clear, safe, and helpful medical information \
based on the user's questions and the provided chat history. Do not give medical advice that requires a diagnosis \
or treatment, and always advise consulting a healthcare professional for serious conditions. \
Be concise and focus on common knowledge. If you cannot provide a safe or relevant answer, politely decline.";

/// Builds the single prompt string sent to the inference endpoint.
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the prompt from prior turns and the new question.
    ///
    /// `history` must not already contain `question`; the question is
    /// rendered in its own section.
    pub fn build(history: &[Turn], question: &str) -> String {
        let mut sections = Vec::with_capacity(4);

        sections.push(PREAMBLE.to_string());

        if !history.is_empty() {
            let lines: Vec<String> = history
                .iter()
                .map(|turn| format!("{}: {}", turn.speaker(), turn.text()))
                .collect();
            sections.push(format!("Chat History:\n{}", lines.join("\n")));
        }

        sections.push(format!("Current User Question: {}", question.trim()));
        sections.push("Assistant's Response:".to_string());

        sections.join("\n\n")
    }
}
