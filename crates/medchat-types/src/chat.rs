//! Conversation types: speakers, turns, and session identifiers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Unique identifier for a browser chat session, wrapping a UUID v7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new SessionId using UUID v7 (time-sortable).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Who produced a turn.
///
/// Serializes as the lowercase role tag used by the page (`"user"`,
/// `"assistant"`); displays as the capitalized label used inside prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

impl Speaker {
    /// Lowercase role tag (`"user"` / `"assistant"`).
    pub fn as_tag(&self) -> &'static str {
        match self {
            Speaker::User => "user",
            Speaker::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::User => write!(f, "User"),
            Speaker::Assistant => write!(f, "Assistant"),
        }
    }
}

impl FromStr for Speaker {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Speaker::User),
            "assistant" => Ok(Speaker::Assistant),
            other => Err(format!("invalid speaker: '{other}'")),
        }
    }
}

/// One entry of a conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    speaker: Speaker,
    text: String,
}

impl Turn {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
        }
    }

    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speaker_serde_is_lowercase() {
        let json = serde_json::to_string(&Speaker::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
        let parsed: Speaker = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(parsed, Speaker::User);
    }

    #[test]
    fn test_speaker_display_is_prompt_label() {
        assert_eq!(Speaker::User.to_string(), "User");
        assert_eq!(Speaker::Assistant.to_string(), "Assistant");
        assert_eq!(Speaker::Assistant.as_tag(), "assistant");
    }

    #[test]
    fn test_speaker_from_str() {
        assert_eq!("USER".parse::<Speaker>().unwrap(), Speaker::User);
        assert!("bot".parse::<Speaker>().is_err());
    }

    #[test]
    fn test_turn_serializes_speaker_and_text() {
        let turn = Turn::new(Speaker::User, "What is a fever?");
        let value = serde_json::to_value(&turn).unwrap();
        assert_eq!(value["speaker"], "user");
        assert_eq!(value["text"], "What is a fever?");
    }

    #[test]
    fn test_session_id_roundtrip_through_string() {
        let id = SessionId::new();
        let parsed: SessionId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
        assert!("not-a-uuid".parse::<SessionId>().is_err());
    }
}
