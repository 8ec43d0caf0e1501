//! OpenAI configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use super::types::LlmError;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub chat_model: String,
    pub embedding_model: String,
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl OpenAiConfig {
    /// Build typed config from environment variables.
    ///
    /// Required: `OPENAI_API_KEY`. Optional: `OPENAI_CHAT_MODEL`,
    /// `OPENAI_EMBEDDING_MODEL`, `OPENAI_BASE_URL`,
    /// `LLM_REQUEST_TIMEOUT_SECS`, `LLM_CONNECT_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::MissingApiKey`] when the key is absent and
    /// [`LlmError::ConfigParse`] when a timeout is not an integer.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LlmError> {
        let api_key = lookup("OPENAI_API_KEY")
            .ok_or(LlmError::MissingApiKey { var: "OPENAI_API_KEY".to_owned() })?;
        let base_url = lookup("OPENAI_BASE_URL")
            .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        Ok(Self {
            api_key,
            chat_model: lookup("OPENAI_CHAT_MODEL").unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_owned()),
            embedding_model: lookup("OPENAI_EMBEDDING_MODEL")
                .unwrap_or_else(|| DEFAULT_EMBEDDING_MODEL.to_owned()),
            base_url,
            request_timeout_secs: parse_secs(
                lookup("LLM_REQUEST_TIMEOUT_SECS"),
                "LLM_REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?,
            connect_timeout_secs: parse_secs(
                lookup("LLM_CONNECT_TIMEOUT_SECS"),
                "LLM_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
        })
    }
}

fn parse_secs(value: Option<String>, var: &str, default: u64) -> Result<u64, LlmError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|_| LlmError::ConfigParse(format!("{var} must be an integer, got {raw:?}"))),
    }
}
