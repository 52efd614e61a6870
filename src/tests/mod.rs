use crate::catalog::{self, ParamKind};
use crate::render::render;
use crate::tool_call::{parse_arguments, ArgValue, Arguments, ToolCall};
use serde_json::Value;


// Test utilities and helpers
pub(crate) struct TestUtils;

impl TestUtils {
    pub fn call(name: &str, args: Value) -> ToolCall {
        ToolCall::new(name, parse_arguments(args))
    }

    /// Arguments that satisfy the conditionally required parameters of `op`.
    pub fn minimal_arguments(op: &str) -> Arguments {
        let base = Arguments::new();
        match op {
            "git_commit" => base.with("message", ArgValue::Str("wip".into())),
            "git_reset" => base.with("mode", ArgValue::Str("soft".into())),
            _ => base,
        }
    }

    pub fn boolean_parameters() -> Vec<(&'static str, &'static str)> {
        catalog::list_operations()
            .iter()
            .flat_map(|op| {
                op.parameters
                    .iter()
                    .filter(|p| p.kind == ParamKind::Boolean)
                    .map(move |p| (op.name, p.name))
            })
            .collect()
    }

    pub fn render_with(op: &str, args: Arguments) -> String {
        render(&ToolCall::new(op, args))
    }
}
