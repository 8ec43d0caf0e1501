//! Service layer: the import pipeline and the retrieval/chat chains.

pub mod chat;
pub mod import;
pub mod retrieval;
pub mod text2cypher;
