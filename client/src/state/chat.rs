//! Chat agent state: transcript, retrieval mode, and in-flight flag.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use profiles::{ChatMode, ChatTurn};

/// Who produced a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
    /// A failed turn; rendered as an error row, excluded from history.
    Failure,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub pending: bool,
    pub mode: ChatMode,
}

impl ChatState {
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage { role: ChatRole::User, text: text.into() });
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage { role: ChatRole::Assistant, text: text.into() });
    }

    pub fn push_failure(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage { role: ChatRole::Failure, text: text.into() });
    }

    /// Completed question/answer pairs, oldest first. A question whose turn
    /// failed (or is still unanswered) contributes nothing.
    #[must_use]
    pub fn history(&self) -> Vec<ChatTurn> {
        let mut turns = Vec::new();
        let mut open_question: Option<&str> = None;
        for message in &self.messages {
            match message.role {
                ChatRole::User => open_question = Some(&message.text),
                ChatRole::Assistant => {
                    if let Some(question) = open_question.take() {
                        turns.push(ChatTurn {
                            question: question.to_owned(),
                            answer: message.text.clone(),
                        });
                    }
                }
                ChatRole::Failure => open_question = None,
            }
        }
        turns
    }
}
