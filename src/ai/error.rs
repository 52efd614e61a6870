use thiserror::Error;

#[derive(Debug, Error)]
pub enum AIError {
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("API error: {status} - {body}")]
    APIError { status: u16, body: String },
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Expected exactly one tool call in model response, got {0}")]
    ToolCallCount(usize),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for AIError {
    fn from(error: serde_json::Error) -> Self {
        AIError::ParseError(format!("JSON serialization error: {}", error))
    }
}

impl From<reqwest::Error> for AIError {
    fn from(error: reqwest::Error) -> Self {
        AIError::NetworkError(error.to_string())
    }
}
