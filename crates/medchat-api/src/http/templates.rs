//! Server-rendered chat page.
//!
//! The template is compiled into the binary and rendered with minijinja.
//! Autoescaping is on for `.html` templates, so transcript text (user input
//! and model output alike) is always HTML-escaped.

use minijinja::{Environment, context};
use serde::Serialize;

use medchat_types::chat::{Speaker, Turn};

const CHAT_TEMPLATE: &str = "chat.html";

/// One rendered transcript entry.
#[derive(Debug, Serialize)]
struct TurnView<'a> {
    role: &'static str,
    avatar: &'static str,
    text: &'a str,
}

impl<'a> From<&'a Turn> for TurnView<'a> {
    fn from(turn: &'a Turn) -> Self {
        let avatar = match turn.speaker() {
            Speaker::User => "🧑",
            Speaker::Assistant => "🩺",
        };
        Self {
            role: turn.speaker().as_tag(),
            avatar,
            text: turn.text(),
        }
    }
}

pub struct ChatPage {
    env: Environment<'static>,
}

impl ChatPage {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(CHAT_TEMPLATE, include_str!("../../templates/chat.html"))?;
        Ok(Self { env })
    }

    /// Render the page for a transcript.
    pub fn render(&self, turns: &[Turn]) -> Result<String, minijinja::Error> {
        let turns: Vec<TurnView<'_>> = turns.iter().map(TurnView::from).collect();
        self.env
            .get_template(CHAT_TEMPLATE)?
            .render(context! { turns => turns })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page_has_controls() {
        let html = ChatPage::new().unwrap().render(&[]).unwrap();
        assert!(html.contains("🩺 AI Medical Assistant"));
        assert!(html.contains("Type your medical question here..."));
        assert!(html.contains("🗑️ Clear Chat"));
    }

    #[test]
    fn test_turns_render_in_order_with_roles() {
        let turns = vec![
            Turn::new(Speaker::User, "What helps a sore throat?"),
            Turn::new(Speaker::Assistant, "Warm fluids and rest."),
        ];
        let html = ChatPage::new().unwrap().render(&turns).unwrap();

        let q = html.find("What helps a sore throat?").unwrap();
        let a = html.find("Warm fluids and rest.").unwrap();
        assert!(q < a);
        assert!(html.contains("turn user"));
        assert!(html.contains("turn assistant"));
    }

    #[test]
    fn test_transcript_text_is_escaped() {
        let turns = vec![Turn::new(Speaker::User, "<script>alert(1)</script>")];
        let html = ChatPage::new().unwrap().render(&turns).unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
