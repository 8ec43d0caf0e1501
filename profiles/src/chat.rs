//! Chat wire types shared by the chat page and the chat endpoint.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::{Deserialize, Serialize};

/// Retrieval mode for a chat turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatMode {
    /// Hybrid vector + full-text retrieval over chunks.
    #[default]
    BasicHybridSearch,
    /// Hybrid retrieval augmented with a generated-Cypher pass over the
    /// entity neighborhood.
    BasicHybridSearchNodeNeighborhood,
}

impl ChatMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BasicHybridSearch => "basic_hybrid_search",
            Self::BasicHybridSearchNodeNeighborhood => "basic_hybrid_search_node_neighborhood",
        }
    }
}

/// One past question/answer exchange, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub question: String,
    pub answer: String,
}

/// Request body for `POST /chat/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub question: String,
    #[serde(default)]
    pub mode: ChatMode,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

/// Response body for `POST /chat/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub answer: String,
}
