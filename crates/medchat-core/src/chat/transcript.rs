//! Session transcript store.

use serde::Serialize;

use medchat_types::chat::{Speaker, Turn};

/// Ordered record of a session's turns.
///
/// Insertion order is conversation order. The only way to shrink it is
/// [`Transcript::clear`], which empties it completely.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a turn at the end.
    pub fn append(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.turns.push(Turn::new(speaker, text));
    }

    /// Reset to the empty sequence.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// The full ordered sequence.
    pub fn all(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
