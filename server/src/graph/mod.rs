//! Neo4j access layer.
//!
//! The graph is reached over the HTTP transactional endpoint rather than a
//! Bolt driver, so the outbound stack stays on the same `reqwest` client the
//! LLM layer uses and nested Cypher parameters serialize as plain JSON.

pub mod client;
pub mod cypher;
pub mod schema;

pub use client::{GraphClient, GraphConfig, GraphError};
