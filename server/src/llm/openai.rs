//! OpenAI API client for chat completions and embeddings.
//!
//! Every successful response's `usage` block is recorded on the shared
//! [`UsageMeter`], which backs the `/chat/stream_log` summary endpoint.

#[cfg(test)]
#[path = "openai_test.rs"]
mod openai_test;

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use super::config::OpenAiConfig;
use super::types::{ChatMessage, LlmError, Usage};
use super::usage::UsageMeter;

pub struct OpenAiClient {
    http: reqwest::Client,
    config: OpenAiConfig,
    usage: Arc<UsageMeter>,
}

impl OpenAiClient {
    /// # Errors
    ///
    /// Returns [`LlmError::HttpClientBuild`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: OpenAiConfig, usage: Arc<UsageMeter>) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config, usage })
    }

    #[must_use]
    pub fn chat_model(&self) -> &str {
        &self.config.chat_model
    }

    /// Run one chat-completions request and return the assistant text.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] on transport failure, non-success status, or
    /// an unexpected response shape.
    pub async fn chat(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
        let body = ChatRequestBody {
            model: &self.config.chat_model,
            messages,
            temperature: 0.0,
        };
        let text = self.send_json("/chat/completions", &body).await?;
        let (content, usage) = parse_chat_response(&text)?;
        self.usage.record(usage);
        Ok(content)
    }

    /// Embed a batch of texts, one vector per input in input order.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] on transport failure, non-success status, or
    /// when the response vector count does not match the input count.
    pub async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, LlmError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        let body = EmbeddingsRequestBody { model: &self.config.embedding_model, input: texts };
        let text = self.send_json("/embeddings", &body).await?;
        let (vectors, usage) = parse_embeddings_response(&text)?;
        if vectors.len() != texts.len() {
            return Err(LlmError::ApiParse(format!(
                "embedding count mismatch: sent {} inputs, got {} vectors",
                texts.len(),
                vectors.len()
            )));
        }
        self.usage.record(usage);
        Ok(vectors)
    }

    async fn send_json(&self, path: &str, body: &impl Serialize) -> Result<String, LlmError> {
        let url = format!("{}{}", self.config.base_url, path);
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.config.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;
        if !(200..300).contains(&status) {
            return Err(LlmError::ApiResponse { status, body: text });
        }
        Ok(text)
    }
}

#[derive(Serialize)]
struct ChatRequestBody<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
}

#[derive(Serialize)]
struct EmbeddingsRequestBody<'a> {
    model: &'a str,
    input: &'a [String],
}

/// Extract the assistant text and usage from a chat-completions response.
fn parse_chat_response(body: &str) -> Result<(String, Usage), LlmError> {
    let value: Value = serde_json::from_str(body).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    let content = value["choices"]
        .as_array()
        .and_then(|choices| choices.first())
        .and_then(|choice| choice["message"]["content"].as_str())
        .ok_or_else(|| LlmError::ApiParse("no assistant message in response".to_owned()))?
        .to_owned();
    Ok((content, parse_usage(&value)))
}

/// Extract embedding vectors (sorted by index) and usage from an
/// embeddings response.
fn parse_embeddings_response(body: &str) -> Result<(Vec<Vec<f32>>, Usage), LlmError> {
    let value: Value = serde_json::from_str(body).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    let data = value["data"]
        .as_array()
        .ok_or_else(|| LlmError::ApiParse("no data array in embeddings response".to_owned()))?;

    let mut indexed: Vec<(u64, Vec<f32>)> = Vec::with_capacity(data.len());
    for entry in data {
        let index = entry["index"]
            .as_u64()
            .ok_or_else(|| LlmError::ApiParse("embedding entry missing index".to_owned()))?;
        let vector = entry["embedding"]
            .as_array()
            .ok_or_else(|| LlmError::ApiParse("embedding entry missing vector".to_owned()))?
            .iter()
            .map(|v| v.as_f64().unwrap_or_default() as f32)
            .collect();
        indexed.push((index, vector));
    }
    indexed.sort_by_key(|(index, _)| *index);
    Ok((indexed.into_iter().map(|(_, v)| v).collect(), parse_usage(&value)))
}

fn parse_usage(value: &Value) -> Usage {
    Usage {
        prompt_tokens: value["usage"]["prompt_tokens"].as_u64().unwrap_or_default(),
        completion_tokens: value["usage"]["completion_tokens"].as_u64().unwrap_or_default(),
    }
}
