//! Text2Cypher: question → generated Cypher → rows → summarized answer.
//!
//! ERROR HANDLING
//! ==============
//! A generated query is model output, not trusted input. Non-Cypher output
//! and statement failures degrade to the unknown answer so a bad generation
//! never fails the surrounding chat turn.

#[cfg(test)]
#[path = "text2cypher_test.rs"]
mod text2cypher_test;

use serde_json::{Map, Value, json};

use crate::graph::{GraphClient, GraphError, schema};
use crate::llm::{ChatMessage, LlmError, OpenAiClient, prompts};

#[derive(Debug, thiserror::Error)]
pub enum Text2CypherError {
    #[error(transparent)]
    Llm(#[from] LlmError),
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Answer a question by querying the graph with generated Cypher.
///
/// Returns [`prompts::UNKNOWN_ANSWER`] when generation does not produce a
/// readable query or the query fails or matches nothing.
///
/// # Errors
///
/// Returns a [`Text2CypherError`] if schema introspection or an LLM call
/// fails; those are infrastructure failures, not bad generations.
pub async fn answer_with_cypher(
    graph: &GraphClient,
    llm: &OpenAiClient,
    question: &str,
) -> Result<String, Text2CypherError> {
    let schema_text = schema::fetch_schema(graph).await?;
    let prompt = prompts::cypher_generation_prompt(&schema_text, question);
    let generated = llm.chat(&[ChatMessage::user(prompt)]).await?;

    let statement = sanitize_cypher(&generated);
    if !looks_like_cypher(&statement) {
        tracing::warn!(%question, "cypher generation produced no readable query");
        return Ok(prompts::UNKNOWN_ANSWER.to_owned());
    }
    tracing::debug!(%statement, "generated cypher");

    let rows = match graph.run(&statement, json!({})).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::warn!(error = %e, %statement, "generated cypher failed");
            return Ok(prompts::UNKNOWN_ANSWER.to_owned());
        }
    };
    if rows.is_empty() {
        return Ok(prompts::UNKNOWN_ANSWER.to_owned());
    }

    let context = rows_to_context(&rows);
    let answer = llm
        .chat(&[ChatMessage::user(prompts::qa_prompt(&context, question))])
        .await?;
    Ok(answer.trim().to_owned())
}

/// Strip Markdown fences and an optional leading `cypher` language tag.
#[must_use]
pub fn sanitize_cypher(raw: &str) -> String {
    let mut text = raw.trim();
    if let Some(stripped) = text.strip_prefix("```") {
        text = stripped;
        if let Some(rest) = text.strip_prefix("cypher") {
            text = rest;
        }
        if let Some(stripped) = text.trim_end().strip_suffix("```") {
            text = stripped;
        }
    }
    text.trim().to_owned()
}

/// A readable query starts with a Cypher clause, not prose.
#[must_use]
pub fn looks_like_cypher(statement: &str) -> bool {
    const CLAUSES: [&str; 6] = ["MATCH", "OPTIONAL MATCH", "CALL", "WITH", "UNWIND", "RETURN"];
    let upper = statement.to_uppercase();
    CLAUSES.iter().any(|clause| upper.starts_with(clause))
}

/// Serialize query rows into the compact context block the QA prompt reads.
#[must_use]
pub fn rows_to_context(rows: &[Map<String, Value>]) -> String {
    rows.iter()
        .map(|row| serde_json::to_string(row).unwrap_or_default())
        .collect::<Vec<_>>()
        .join("\n")
}
