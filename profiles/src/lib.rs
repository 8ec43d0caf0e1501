//! Shared domain model for the CareerGraph pipeline.
//!
//! This crate owns the types used by both `server` and `client`: the
//! job-profile article export consumed by the import pipeline, the network
//! visualization payload, and the chat wire types. It also carries the pure
//! logic that both sides (and their tests) rely on: profile text rendering,
//! word-window chunking, and salary-range parsing. No I/O lives here.

pub mod article;
pub mod chat;
pub mod chunk;
pub mod graph;
pub mod text;

pub use article::{Article, ArticleId, Rating, parse_salary_range};
pub use chat::{ChatMode, ChatReply, ChatRequest, ChatTurn};
pub use chunk::{Chunk, chunk_text, split_into_chunks};
pub use graph::{GraphNode, GraphRelationship, NetworkGraph};
pub use text::render_profile_text;
