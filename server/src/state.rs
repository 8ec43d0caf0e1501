//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Handlers are request-scoped; the only cross-request mutable state is the
//! token-usage meter, which is atomic, so no locks are needed. The LLM
//! client is
//! optional so the graph endpoints keep working without an API key.

use std::path::PathBuf;
use std::sync::Arc;

use crate::graph::GraphClient;
use crate::llm::{OpenAiClient, UsageMeter};

/// Shared application state, cloned into each handler.
#[derive(Clone)]
pub struct AppState {
    pub graph: Arc<GraphClient>,
    /// `None` when LLM env vars are not configured.
    pub llm: Option<Arc<OpenAiClient>>,
    pub usage: Arc<UsageMeter>,
    /// Location of the job-profile export consumed by the import endpoint.
    pub articles_path: PathBuf,
}

impl AppState {
    #[must_use]
    pub fn new(
        graph: Arc<GraphClient>,
        llm: Option<Arc<OpenAiClient>>,
        usage: Arc<UsageMeter>,
        articles_path: PathBuf,
    ) -> Self {
        Self { graph, llm, usage, articles_path }
    }
}
