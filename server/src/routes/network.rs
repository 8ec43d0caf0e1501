//! Network visualization endpoint.

#[cfg(test)]
#[path = "network_test.rs"]
mod network_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{Map, Value, json};

use profiles::NetworkGraph;

use crate::graph::cypher;
use crate::state::AppState;

/// `GET /fetch_network/` — the `JobProfile` neighborhood graph with
/// null-valued properties stripped.
pub async fn fetch_network(
    State(state): State<AppState>,
) -> Result<Json<NetworkGraph>, StatusCode> {
    let rows = state.graph.run(cypher::FETCH_NETWORK, json!({})).await.map_err(|e| {
        tracing::error!(error = %e, "network query failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let graph = network_from_rows(&rows).map_err(|e| {
        tracing::error!(error = %e, "network payload malformed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(graph))
}

/// Deserialize the single `output` column into the wire payload.
/// An empty graph produces no rows, which maps to an empty payload.
fn network_from_rows(rows: &[Map<String, Value>]) -> Result<NetworkGraph, serde_json::Error> {
    let Some(output) = rows.first().and_then(|row| row.get("output")) else {
        return Ok(NetworkGraph::default());
    };
    let mut graph: NetworkGraph = serde_json::from_value(output.clone())?;
    graph.remove_null_properties();
    Ok(graph)
}
