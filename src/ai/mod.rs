use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, error};

mod error;
mod prompt;
mod response;
mod tests;

pub use error::AIError;
pub use response::ChatCompletion;

use crate::catalog;
use crate::config::ModelConfig;
use crate::tool_call::ToolCall;

/// Anything that can turn a question into exactly one tool call.
#[async_trait]
pub trait ToolCallProvider {
    async fn invoke(&self, question: &str) -> Result<ToolCall, AIError>;
}

/// Client for a local OpenAI-compatible chat-completions server.
pub struct LocalModelClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl LocalModelClient {
    pub fn new(config: &ModelConfig) -> Result<Self, AIError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AIError::InvalidConfig(format!("Could not build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            model: config.name.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn headers(&self) -> Result<HeaderMap, AIError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .map_err(|e| AIError::InvalidConfig(format!("Invalid API key: {}", e)))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    fn request_body(&self, question: &str) -> serde_json::Value {
        json!({
            "model": &self.model,
            "messages": prompt::messages(question),
            "temperature": 0.0,
            "tools": catalog::tool_specs(),
            "tool_choice": "required",
        })
    }
}

#[async_trait]
impl ToolCallProvider for LocalModelClient {
    async fn invoke(&self, question: &str) -> Result<ToolCall, AIError> {
        debug!(endpoint = %self.endpoint, model = %self.model, "requesting tool call");

        let response = self
            .client
            .post(&self.endpoint)
            .headers(self.headers()?)
            .json(&self.request_body(question))
            .send()
            .await?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| AIError::NetworkError(format!("Failed to read response body: {}", e)))?;

        if status != StatusCode::OK {
            return Err(AIError::APIError {
                status: status.as_u16(),
                body: response_text,
            });
        }

        debug!(body = %response_text, "raw model response");

        let completion: ChatCompletion = serde_json::from_str(&response_text).map_err(|e| {
            AIError::ParseError(format!("Failed to parse chat completion: {}", e))
        })?;

        completion.into_tool_call().map_err(|e| {
            error!("Single tool call not found in LM response: {}", response_text);
            e
        })
    }
}
