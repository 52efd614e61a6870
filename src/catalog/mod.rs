mod check;
mod operations;

pub use check::{check, SchemaWarning};
pub use operations::OPERATIONS;

use serde_json::{json, Map, Value};

/// Bumped whenever an operation or parameter changes shape.
pub const CATALOG_VERSION: &str = "1.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Boolean,
    Integer,
    StringList,
}

impl ParamKind {
    pub fn json_type(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::StringList => "array",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamDefault {
    Bool(bool),
    Int(i64),
    Str(&'static str),
    List(&'static [&'static str]),
}

impl ParamDefault {
    fn to_json(self) -> Value {
        match self {
            Self::Bool(b) => json!(b),
            Self::Int(n) => json!(n),
            Self::Str(s) => json!(s),
            Self::List(items) => json!(items),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Parameter {
    pub name: &'static str,
    pub kind: ParamKind,
    pub description: &'static str,
    pub default: Option<ParamDefault>,
    pub allowed: &'static [&'static str],
    pub required: bool,
    /// minLength, minItems or minimum depending on `kind`.
    pub min: Option<i64>,
}

impl Parameter {
    pub const fn flag(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::Boolean,
            description,
            default: Some(ParamDefault::Bool(false)),
            allowed: &[],
            required: false,
            min: None,
        }
    }

    pub const fn string(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::String,
            description,
            default: None,
            allowed: &[],
            required: false,
            min: None,
        }
    }

    pub const fn files(description: &'static str) -> Self {
        Self {
            name: "files",
            kind: ParamKind::StringList,
            description,
            default: None,
            allowed: &[],
            required: false,
            min: Some(1),
        }
    }

    pub const fn integer(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::Integer,
            description,
            default: None,
            allowed: &[],
            required: false,
            min: None,
        }
    }

    pub const fn default_to(mut self, default: ParamDefault) -> Self {
        self.default = Some(default);
        self
    }

    pub const fn one_of(mut self, allowed: &'static [&'static str]) -> Self {
        self.allowed = allowed;
        self
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn at_least(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    fn json_schema(&self) -> Value {
        let mut schema = Map::new();
        schema.insert("type".into(), json!(self.kind.json_type()));
        schema.insert("description".into(), json!(self.description));
        if self.kind == ParamKind::StringList {
            schema.insert("items".into(), json!({"type": "string"}));
        }
        if let Some(default) = self.default {
            schema.insert("default".into(), default.to_json());
        }
        if !self.allowed.is_empty() {
            schema.insert("enum".into(), json!(self.allowed));
        }
        if let Some(min) = self.min {
            let key = match self.kind {
                ParamKind::String => "minLength",
                ParamKind::StringList => "minItems",
                ParamKind::Integer | ParamKind::Boolean => "minimum",
            };
            schema.insert(key.into(), json!(min));
        }
        Value::Object(schema)
    }
}

#[derive(Debug)]
pub struct Operation {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: &'static [Parameter],
}

impl Operation {
    pub fn parameter(&self, name: &str) -> Option<&'static Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// The operation as an OpenAI-style function tool.
    pub fn tool_spec(&self) -> Value {
        let properties: Map<String, Value> = self
            .parameters
            .iter()
            .map(|p| (p.name.to_string(), p.json_schema()))
            .collect();
        let required: Vec<&str> = self
            .parameters
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();

        json!({
            "type": "function",
            "function": {
                "name": self.name,
                "description": self.description,
                "parameters": {
                    "type": "object",
                    "properties": properties,
                    "required": required,
                    "additionalProperties": false,
                },
            },
        })
    }
}

pub fn list_operations() -> &'static [Operation] {
    OPERATIONS
}

pub fn find(name: &str) -> Option<&'static Operation> {
    OPERATIONS.iter().find(|op| op.name == name)
}

/// The whole catalog in the shape expected by the `tools` request field.
pub fn tool_specs() -> Value {
    Value::Array(OPERATIONS.iter().map(Operation::tool_spec).collect())
}
