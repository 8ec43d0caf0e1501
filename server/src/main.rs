#![recursion_limit = "256"]

mod graph;
mod llm;
mod routes;
mod services;
mod state;

use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    let _ = dotenvy::dotenv();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8000".into())
        .parse()
        .expect("invalid PORT");
    let articles_path = std::env::var("ARTICLES_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/job_profiles.json"));

    let graph_config = graph::GraphConfig::from_env().expect("graph configuration failed");
    let graph = graph::GraphClient::new(graph_config).expect("graph client init failed");
    graph
        .setup_indices()
        .await
        .expect("graph index setup failed");

    let usage = Arc::new(llm::UsageMeter::new());

    // Non-fatal: import and chat report a configuration error instead.
    let llm = match llm::OpenAiConfig::from_env() {
        Ok(config) => match llm::OpenAiClient::new(config, usage.clone()) {
            Ok(client) => {
                tracing::info!(model = client.chat_model(), "LLM client initialized");
                Some(Arc::new(client))
            }
            Err(e) => {
                tracing::warn!(error = %e, "LLM client build failed — LLM features disabled");
                None
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured — LLM features disabled");
            None
        }
    };

    let state = state::AppState::new(Arc::new(graph), llm, usage, articles_path);

    let app = routes::leptos_app(state).expect("router assembly failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "careergraph listening");
    axum::serve(listener, app).await.expect("server failed");
}
