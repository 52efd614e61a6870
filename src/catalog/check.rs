use super::{find, ParamKind, Parameter};
use crate::tool_call::{ArgValue, ToolCall};
use std::fmt;

/// Pairs of flags where the renderer keeps the first and drops the second.
const CONFLICTS: &[(&str, &str, &str)] = &[
    ("git_switch", "create", "detach"),
    ("git_merge", "no_ff", "ff_only"),
    ("git_rebase", "continue", "abort"),
];

/// Something about a tool call that does not match the catalog.
///
/// Warnings are advisory. Rendering goes ahead regardless.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaWarning {
    UnknownOperation(String),
    UnknownArgument(String),
    WrongKind {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
    NotAllowed {
        key: String,
        value: String,
        allowed: &'static [&'static str],
    },
    MissingRequired(&'static str),
    BelowMinimum {
        key: String,
        min: i64,
    },
    ConflictingFlags {
        kept: &'static str,
        dropped: &'static str,
    },
}

impl fmt::Display for SchemaWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownOperation(name) => write!(f, "operation `{}` is not in the catalog", name),
            Self::UnknownArgument(key) => write!(f, "argument `{}` is not defined; ignored", key),
            Self::WrongKind { key, expected, found } => {
                write!(f, "argument `{}` should be {} but got {}", key, expected, found)
            }
            Self::NotAllowed { key, value, allowed } => write!(
                f,
                "argument `{}` = {} is not one of [{}]",
                key,
                value,
                allowed.join(", ")
            ),
            Self::MissingRequired(key) => write!(f, "required argument `{}` is missing", key),
            Self::BelowMinimum { key, min } => {
                write!(f, "argument `{}` is below its minimum of {}", key, min)
            }
            Self::ConflictingFlags { kept, dropped } => write!(
                f,
                "`{}` and `{}` are mutually exclusive; `{}` was dropped",
                kept, dropped, dropped
            ),
        }
    }
}

/// Compare a tool call against the catalog.
pub fn check(call: &ToolCall) -> Vec<SchemaWarning> {
    let Some(op) = find(&call.name) else {
        return vec![SchemaWarning::UnknownOperation(call.name.clone())];
    };

    let mut warnings = Vec::new();

    for (key, value) in call.arguments.iter() {
        match op.parameter(key) {
            Some(param) => check_value(param, key, value, &mut warnings),
            None => warnings.push(SchemaWarning::UnknownArgument(key.to_string())),
        }
    }

    for param in op.parameters.iter().filter(|p| p.required) {
        if call.arguments.get(param.name).is_none() {
            warnings.push(SchemaWarning::MissingRequired(param.name));
        }
    }

    for &(name, kept, dropped) in CONFLICTS {
        if op.name == name && call.arguments.flag(kept) && call.arguments.flag(dropped) {
            warnings.push(SchemaWarning::ConflictingFlags { kept, dropped });
        }
    }

    warnings
}

fn check_value(param: &Parameter, key: &str, value: &ArgValue, warnings: &mut Vec<SchemaWarning>) {
    let kind_matches = matches!(
        (param.kind, value),
        (ParamKind::String, ArgValue::Str(_))
            | (ParamKind::Boolean, ArgValue::Bool(_))
            | (ParamKind::Integer, ArgValue::Int(_))
            | (ParamKind::StringList, ArgValue::List(_))
    );
    if !kind_matches {
        warnings.push(SchemaWarning::WrongKind {
            key: key.to_string(),
            expected: param.kind.json_type(),
            found: value.kind_name(),
        });
        return;
    }

    if let ArgValue::Str(s) = value {
        if !param.allowed.is_empty() && !param.allowed.contains(&s.as_str()) {
            warnings.push(SchemaWarning::NotAllowed {
                key: key.to_string(),
                value: value.to_string(),
                allowed: param.allowed,
            });
        }
    }

    if let Some(min) = param.min {
        let below = match value {
            ArgValue::Str(s) => (s.chars().count() as i64) < min,
            ArgValue::List(items) => (items.len() as i64) < min,
            ArgValue::Int(n) => *n < min,
            ArgValue::Bool(_) => false,
        };
        if below {
            warnings.push(SchemaWarning::BelowMinimum {
                key: key.to_string(),
                min,
            });
        }
    }
}
