use super::error::AIError;
use crate::tool_call::{parse_arguments, ToolCall};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Message,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tool_calls: Option<Vec<RawToolCall>>,
}

#[derive(Debug, Deserialize)]
pub struct RawToolCall {
    pub function: FunctionCall,
}

#[derive(Debug, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    /// Usually a JSON-encoded string, but some servers send an object.
    #[serde(default)]
    pub arguments: Value,
}

impl ChatCompletion {
    /// The single tool call of the first choice.
    pub fn into_tool_call(self) -> Result<ToolCall, AIError> {
        let choice = self
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AIError::ParseError("Response has no choices".to_string()))?;

        let mut calls = choice.message.tool_calls.unwrap_or_default();
        if calls.len() != 1 {
            return Err(AIError::ToolCallCount(calls.len()));
        }
        let function = calls.remove(0).function;

        Ok(ToolCall::new(function.name, parse_arguments(function.arguments)))
    }
}
