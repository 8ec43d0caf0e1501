//! LLM layer: OpenAI client, prompts, and token-usage accounting.

pub mod config;
pub mod openai;
pub mod prompts;
pub mod types;
pub mod usage;

pub use config::OpenAiConfig;
pub use openai::OpenAiClient;
pub use types::{ChatMessage, LlmError, Role};
pub use usage::UsageMeter;
