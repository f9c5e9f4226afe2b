use serde::Serialize;

use crate::models::Position;

/// Outcome of checking a single word against a board.
#[derive(Debug, Clone, Serialize)]
pub struct WordReport {
    pub word: String,
    pub found: bool,
    /// The first path discovered, in traversal order. Absent when the word
    /// cannot be traced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Position>>,
}

impl WordReport {
    pub fn new(word: impl Into<String>, path: Option<Vec<Position>>) -> Self {
        Self {
            word: word.into(),
            found: path.is_some(),
            path,
        }
    }
}
