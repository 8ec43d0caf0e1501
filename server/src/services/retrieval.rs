//! Hybrid retrieval over the chunk indices.
//!
//! Vector and full-text hits are merged by document text, keeping the best
//! score per document. Full-text terms get `~2` fuzziness so entity names
//! from user questions survive misspelling.

#[cfg(test)]
#[path = "retrieval_test.rs"]
mod retrieval_test;

use serde_json::{Map, Value, json};

use crate::graph::{GraphClient, GraphError, cypher};
use crate::llm::{LlmError, OpenAiClient};

/// Documents returned per search.
pub const RETRIEVAL_K: usize = 4;

/// Lucene special characters stripped before building a full-text query.
const LUCENE_SPECIAL_CHARS: &str = r#"+-&|!(){}[]^"~*?:\/"#;

#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error(transparent)]
    Llm(#[from] LlmError),
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// A retrieved document with its search score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDoc {
    pub text: String,
    pub score: f64,
}

/// Run hybrid search for `query` and return the formatted context block.
///
/// # Errors
///
/// Returns a [`RetrievalError`] if embedding the query or either index
/// lookup fails.
pub async fn hybrid_search(
    graph: &GraphClient,
    llm: &OpenAiClient,
    query: &str,
    k: usize,
) -> Result<String, RetrievalError> {
    let embeddings = llm.embed(&[query.to_owned()]).await?;
    let embedding = embeddings.into_iter().next().unwrap_or_default();

    let vector_rows = graph
        .run(
            cypher::VECTOR_SEARCH,
            json!({ "index": cypher::VECTOR_INDEX_NAME, "k": k, "embedding": embedding }),
        )
        .await?;

    let fulltext_query = generate_full_text_query(query);
    let fulltext_rows = if fulltext_query.is_empty() {
        Vec::new()
    } else {
        graph
            .run(
                cypher::FULLTEXT_SEARCH,
                json!({ "index": cypher::FULLTEXT_INDEX_NAME, "query": fulltext_query, "k": k }),
            )
            .await?
    };

    let merged = merge_hybrid(docs_from_rows(&vector_rows), docs_from_rows(&fulltext_rows), k);
    Ok(format_docs(&merged))
}

/// Replace Lucene syntax characters with spaces.
#[must_use]
pub fn remove_lucene_chars(input: &str) -> String {
    input
        .chars()
        .map(|c| if LUCENE_SPECIAL_CHARS.contains(c) { ' ' } else { c })
        .collect()
}

/// Build a fuzzy AND-query: each word gets a `~2` edit-distance suffix.
/// Returns an empty string when the input has no searchable words.
#[must_use]
pub fn generate_full_text_query(input: &str) -> String {
    let cleaned = remove_lucene_chars(input);
    let words: Vec<&str> = cleaned.split_whitespace().collect();
    words
        .iter()
        .map(|word| format!("{word}~2"))
        .collect::<Vec<_>>()
        .join(" AND ")
}

/// Pull `{text, score}` docs out of search rows, skipping rows without text.
#[must_use]
pub fn docs_from_rows(rows: &[Map<String, Value>]) -> Vec<ScoredDoc> {
    rows.iter()
        .filter_map(|row| {
            let text = row.get("text")?.as_str()?.to_owned();
            let score = row.get("score").and_then(Value::as_f64).unwrap_or_default();
            Some(ScoredDoc { text, score })
        })
        .collect()
}

/// Merge two hit lists by document text keeping the best score, sort by
/// score descending, and truncate to `k`.
#[must_use]
pub fn merge_hybrid(vector: Vec<ScoredDoc>, fulltext: Vec<ScoredDoc>, k: usize) -> Vec<ScoredDoc> {
    let mut merged: Vec<ScoredDoc> = Vec::new();
    for doc in vector.into_iter().chain(fulltext) {
        match merged.iter_mut().find(|existing| existing.text == doc.text) {
            Some(existing) => existing.score = existing.score.max(doc.score),
            None => merged.push(doc),
        }
    }
    merged.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    merged.truncate(k);
    merged
}

/// Join document texts into the context block for the answer prompt.
#[must_use]
pub fn format_docs(docs: &[ScoredDoc]) -> String {
    docs.iter().map(|d| d.text.as_str()).collect::<Vec<_>>().join("\n\n")
}
