//! Word-window text chunking for embedding.
//!
//! Profile texts are split into overlapping windows so each embedded chunk
//! keeps enough surrounding context for retrieval. Windows are measured in
//! whitespace-delimited words; chunk ids are `{article_id}-{index}` so
//! re-importing an article overwrites its previous chunks.

#[cfg(test)]
#[path = "chunk_test.rs"]
mod chunk_test;

use serde::{Deserialize, Serialize};

/// Words per chunk window.
pub const CHUNK_SIZE_WORDS: usize = 500;
/// Words shared between consecutive windows.
pub const CHUNK_OVERLAP_WORDS: usize = 50;

/// A chunk of profile text, keyed for graph storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// `{article_id}-{index}`, stable across re-imports.
    pub id: String,
    pub text: String,
}

/// Split `text` into windows of `size` words advancing by `size - overlap`.
///
/// The final window may be shorter. `overlap >= size` would stall the
/// window, so the step is clamped to at least one word.
#[must_use]
pub fn split_into_chunks(text: &str, size: usize, overlap: usize) -> Vec<String> {
    if size == 0 {
        return Vec::new();
    }
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Vec::new();
    }

    let step = size.saturating_sub(overlap).max(1);
    let mut chunks = Vec::new();
    let mut start = 0;
    while start < words.len() {
        let end = (start + size).min(words.len());
        chunks.push(words[start..end].join(" "));
        if end == words.len() {
            break;
        }
        start += step;
    }
    chunks
}

/// Chunk an article text with the pipeline defaults, assigning stable ids.
#[must_use]
pub fn chunk_text(article_id: &str, text: &str) -> Vec<Chunk> {
    split_into_chunks(text, CHUNK_SIZE_WORDS, CHUNK_OVERLAP_WORDS)
        .into_iter()
        .enumerate()
        .map(|(index, text)| Chunk { id: format!("{article_id}-{index}"), text })
        .collect()
}
