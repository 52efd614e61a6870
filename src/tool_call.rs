use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// A single argument value as produced by the model.
///
/// The model is free to send anything, so values are narrowed to the four
/// shapes the catalog knows about. Anything else is dropped during
/// conversion and behaves like a missing key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArgValue {
    Str(String),
    Bool(bool),
    Int(i64),
    List(Vec<String>),
}

impl ArgValue {
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Str(s)),
            Value::Bool(b) => Some(Self::Bool(b)),
            Value::Number(n) => n.as_i64().map(Self::Int),
            Value::Array(items) => Some(Self::List(
                items.into_iter().filter_map(list_item).collect(),
            )),
            Value::Null | Value::Object(_) => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::List(_) => "array",
        }
    }
}

fn list_item(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{:?}", s),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(n) => write!(f, "{}", n),
            Self::List(items) => write!(f, "{:?}", items),
        }
    }
}

/// Arguments of a tool call, keyed by parameter name.
///
/// Accessors never fail: a wrong-typed value reads the same as an absent one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Arguments(BTreeMap<String, ArgValue>);

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_object(object: Map<String, Value>) -> Self {
        Self(
            object
                .into_iter()
                .filter_map(|(key, value)| ArgValue::from_json(value).map(|v| (key, v)))
                .collect(),
        )
    }

    pub fn with(mut self, key: impl Into<String>, value: ArgValue) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ArgValue> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True only for an explicit boolean `true`.
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.0.get(key), Some(ArgValue::Bool(true)))
    }

    /// Non-empty string value. Integers are accepted and printed in decimal.
    pub fn string(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            ArgValue::Str(s) if !s.is_empty() => Some(s.clone()),
            ArgValue::Int(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// List value; a bare non-empty string counts as a one-element list.
    pub fn list(&self, key: &str) -> Vec<String> {
        match self.0.get(key) {
            Some(ArgValue::List(items)) => items.clone(),
            Some(ArgValue::Str(s)) if !s.is_empty() => vec![s.clone()],
            _ => Vec::new(),
        }
    }

    pub fn int(&self, key: &str) -> Option<i64> {
        match self.0.get(key)? {
            ArgValue::Int(n) => Some(*n),
            ArgValue::Str(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// An operation name plus its arguments, as chosen by the model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolCall {
    pub name: String,
    pub arguments: Arguments,
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("tool call is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("tool call must be a JSON object")]
    NotAnObject,
    #[error("tool call has no \"name\"")]
    MissingName,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, arguments: Arguments) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Parse raw model text such as `{"name": "git_add", "arguments": {...}}`.
    ///
    /// `parameters` is accepted in place of `arguments`, and the arguments may
    /// themselves be a JSON-encoded string. Arguments that are not an object
    /// are treated as empty.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let value: Value = serde_json::from_str(raw.trim())?;
        let Value::Object(mut object) = value else {
            return Err(ParseError::NotAnObject);
        };

        let name = match object.remove("name") {
            Some(Value::String(name)) => name,
            _ => return Err(ParseError::MissingName),
        };

        let raw_args = object
            .remove("arguments")
            .or_else(|| object.remove("parameters"))
            .unwrap_or(Value::Null);

        Ok(Self::new(name, parse_arguments(raw_args)))
    }
}

/// Interpret a model-supplied arguments value.
pub fn parse_arguments(value: Value) -> Arguments {
    let value = match value {
        Value::String(encoded) => serde_json::from_str(&encoded).unwrap_or(Value::Null),
        other => other,
    };
    match value {
        Value::Object(object) => Arguments::from_json_object(object),
        _ => Arguments::new(),
    }
}

impl fmt::Display for ToolCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => write!(f, "{}({:?})", self.name, self.arguments),
        }
    }
}
