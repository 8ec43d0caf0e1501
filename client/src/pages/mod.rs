pub mod chat_agent;
pub mod import_articles;
pub mod introduction;
pub mod network_graph;
