//! Chat endpoints.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;

use profiles::{ChatReply, ChatRequest};

use crate::services::chat::{self, ChatError};
use crate::state::AppState;

/// `POST /chat/` — answer one chat turn.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, StatusCode> {
    let reply = chat::answer(&state, request).await.map_err(chat_error_to_status)?;
    Ok(Json(reply))
}

/// `GET /chat/stream_log` — token usage since the previous call.
pub async fn stream_log(State(state): State<AppState>) -> String {
    state.usage.summary()
}

pub(crate) fn chat_error_to_status(err: ChatError) -> StatusCode {
    tracing::error!(error = %err, "chat turn failed");
    match err {
        ChatError::LlmNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        ChatError::Llm(_) | ChatError::Retrieval(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
