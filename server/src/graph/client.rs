//! Neo4j HTTP transactional-endpoint client.
//!
//! Executes parameterized Cypher via `POST {url}/db/{database}/tx/commit`
//! and maps the response into one map per row keyed by column name. Neo4j
//! reports statement failures inside a 200 response (`errors` array), so
//! both transport and statement errors surface as [`GraphError`].

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::time::Duration;

use serde_json::{Map, Value, json};

use super::cypher;

const DEFAULT_NEO4J_URL: &str = "http://localhost:7474";
const DEFAULT_NEO4J_USERNAME: &str = "neo4j";
const DEFAULT_NEO4J_DATABASE: &str = "neo4j";
const REQUEST_TIMEOUT_SECS: u64 = 300;
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced by graph operations.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A required environment variable is not set.
    #[error("missing graph config: env var {var} not set")]
    MissingConfig { var: String },

    /// The HTTP request to Neo4j failed.
    #[error("graph request failed: {0}")]
    Request(String),

    /// Neo4j returned a non-success HTTP status.
    #[error("graph response error: status {status}")]
    Status { status: u16, body: String },

    /// The response body could not be interpreted.
    #[error("graph response parse failed: {0}")]
    Parse(String),

    /// Neo4j rejected the statement.
    #[error("graph statement failed: {code}: {message}")]
    Statement { code: String, message: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Connection settings for the graph database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphConfig {
    pub url: String,
    pub username: String,
    pub password: String,
    pub database: String,
}

impl GraphConfig {
    /// Build graph config from environment variables.
    ///
    /// Required: `NEO4J_PASSWORD`. Optional: `NEO4J_URL`
    /// (default `http://localhost:7474`), `NEO4J_USERNAME` (default
    /// `neo4j`), `NEO4J_DATABASE` (default `neo4j`).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MissingConfig`] when the password is absent.
    pub fn from_env() -> Result<Self, GraphError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GraphError> {
        let password = lookup("NEO4J_PASSWORD")
            .ok_or(GraphError::MissingConfig { var: "NEO4J_PASSWORD".to_owned() })?;
        Ok(Self {
            url: lookup("NEO4J_URL").unwrap_or_else(|| DEFAULT_NEO4J_URL.to_owned()),
            username: lookup("NEO4J_USERNAME").unwrap_or_else(|| DEFAULT_NEO4J_USERNAME.to_owned()),
            password,
            database: lookup("NEO4J_DATABASE").unwrap_or_else(|| DEFAULT_NEO4J_DATABASE.to_owned()),
        })
    }
}

/// Thin client over the transactional endpoint.
pub struct GraphClient {
    http: reqwest::Client,
    config: GraphConfig,
    commit_url: String,
}

impl GraphClient {
    /// # Errors
    ///
    /// Returns [`GraphError::HttpClientBuild`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: GraphConfig) -> Result<Self, GraphError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| GraphError::HttpClientBuild(e.to_string()))?;
        let commit_url = commit_url(&config.url, &config.database);
        Ok(Self { http, config, commit_url })
    }

    /// Execute one Cypher statement and return its rows as
    /// column-name-keyed maps.
    ///
    /// # Errors
    ///
    /// Returns a [`GraphError`] on transport failure, non-success status,
    /// malformed response, or statement rejection.
    pub async fn run(
        &self,
        statement: &str,
        parameters: Value,
    ) -> Result<Vec<Map<String, Value>>, GraphError> {
        let body = json!({
            "statements": [{ "statement": statement, "parameters": parameters }]
        });
        let response = self
            .http
            .post(&self.commit_url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .json(&body)
            .send()
            .await
            .map_err(|e| GraphError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| GraphError::Request(e.to_string()))?;
        if !(200..300).contains(&status) {
            return Err(GraphError::Status { status, body: text });
        }
        parse_commit_response(&text)
    }

    /// Create the range, full-text, and vector indices if absent.
    ///
    /// # Errors
    ///
    /// Returns a [`GraphError`] if any index statement fails.
    pub async fn setup_indices(&self) -> Result<(), GraphError> {
        for statement in cypher::INDEX_STATEMENTS {
            self.run(statement, json!({})).await?;
        }
        Ok(())
    }
}

fn commit_url(base: &str, database: &str) -> String {
    format!("{}/db/{database}/tx/commit", base.trim_end_matches('/'))
}

/// Interpret a transactional-endpoint response: surface the first reported
/// error, otherwise zip each row with the statement's column names.
fn parse_commit_response(body: &str) -> Result<Vec<Map<String, Value>>, GraphError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| GraphError::Parse(e.to_string()))?;

    if let Some(error) = value["errors"].as_array().and_then(|errors| errors.first()) {
        return Err(GraphError::Statement {
            code: error["code"].as_str().unwrap_or("unknown").to_owned(),
            message: error["message"].as_str().unwrap_or_default().to_owned(),
        });
    }

    let Some(result) = value["results"].as_array().and_then(|results| results.first()) else {
        return Ok(Vec::new());
    };
    let columns: Vec<String> = result["columns"]
        .as_array()
        .map(|cols| {
            cols.iter()
                .map(|c| c.as_str().unwrap_or_default().to_owned())
                .collect()
        })
        .unwrap_or_default();

    let mut rows = Vec::new();
    for entry in result["data"].as_array().unwrap_or(&Vec::new()) {
        let Some(values) = entry["row"].as_array() else {
            return Err(GraphError::Parse("row entry missing 'row' array".to_owned()));
        };
        let mut row = Map::new();
        for (column, value) in columns.iter().zip(values) {
            row.insert(column.clone(), value.clone());
        }
        rows.push(row);
    }
    Ok(rows)
}
