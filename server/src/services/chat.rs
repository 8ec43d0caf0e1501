//! The chat chain: condense → retrieve → answer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Backs `POST /chat/`. A follow-up question is first condensed against the
//! conversation history into a standalone search query; retrieval then
//! gathers unstructured context (and, in neighborhood mode, a structured
//! Text2Cypher pass); the answer prompt produces the final reply.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use profiles::{ChatMode, ChatReply, ChatRequest, ChatTurn};

use crate::llm::{ChatMessage, LlmError, prompts};
use crate::services::retrieval::{self, RetrievalError};
use crate::services::text2cypher;
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("LLM not configured")]
    LlmNotConfigured,
    #[error(transparent)]
    Llm(#[from] LlmError),
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),
}

/// Answer one chat turn.
///
/// # Errors
///
/// Returns a [`ChatError`] when the LLM is unconfigured or retrieval/answer
/// calls fail. A failed structured pass only degrades the context.
pub async fn answer(state: &AppState, request: ChatRequest) -> Result<ChatReply, ChatError> {
    let llm = state.llm.as_ref().ok_or(ChatError::LlmNotConfigured)?;

    let search_query = if request.history.is_empty() {
        request.question.clone()
    } else {
        let prompt =
            prompts::condense_prompt(&format_chat_history(&request.history), &request.question);
        llm.chat(&[ChatMessage::user(prompt)]).await?.trim().to_owned()
    };

    let documents =
        retrieval::hybrid_search(&state.graph, llm, &search_query, retrieval::RETRIEVAL_K).await?;

    let structured = if request.mode == ChatMode::BasicHybridSearchNodeNeighborhood {
        match text2cypher::answer_with_cypher(&state.graph, llm, &search_query).await {
            Ok(answer) => Some(answer),
            Err(e) => {
                tracing::warn!(error = %e, "structured retrieval failed, continuing without it");
                None
            }
        }
    } else {
        None
    };
    let context = combine_context(structured, &documents);

    let mut messages = Vec::with_capacity(request.history.len() * 2 + 2);
    messages.push(ChatMessage::system(prompts::answer_system_prompt(&context)));
    for turn in &request.history {
        messages.push(ChatMessage::user(turn.question.clone()));
        messages.push(ChatMessage::assistant(turn.answer.clone()));
    }
    messages.push(ChatMessage::user(request.question));

    let answer = llm.chat(&messages).await?;
    Ok(ChatReply { answer: answer.trim().to_owned() })
}

/// Render history as the text block the condense prompt expects.
#[must_use]
pub fn format_chat_history(history: &[ChatTurn]) -> String {
    history
        .iter()
        .map(|turn| format!("Human: {}\nAssistant: {}", turn.question, turn.answer))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prepend structured context to the document block when the structured
/// pass produced something other than the unknown answer.
#[must_use]
pub fn combine_context(structured: Option<String>, documents: &str) -> String {
    match structured {
        Some(answer) if answer != prompts::UNKNOWN_ANSWER => {
            format!("Structured data:\n{answer}\nUnstructured data:\n{documents}")
        }
        _ => documents.to_owned(),
    }
}
