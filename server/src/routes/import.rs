//! Import endpoint.

#[cfg(test)]
#[path = "import_test.rs"]
mod import_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;

use crate::services::import::{self, ImportError};
use crate::state::AppState;

/// `GET /import_articles/` — run the one-shot article import.
/// Responds with the number of imported articles.
pub async fn import_articles(State(state): State<AppState>) -> Result<Json<usize>, StatusCode> {
    let count = import::run_import(&state).await.map_err(import_error_to_status)?;
    Ok(Json(count))
}

pub(crate) fn import_error_to_status(err: ImportError) -> StatusCode {
    tracing::error!(error = %err, "article import failed");
    match err {
        ImportError::LlmNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        ImportError::Read { .. }
        | ImportError::Parse(_)
        | ImportError::SalaryRange { .. }
        | ImportError::Llm(_)
        | ImportError::Graph(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
