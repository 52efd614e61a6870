//! Deterministic rendering of tool calls into git command lines.
//!
//! Each catalog operation has a [`CommandBuilder`]. [`render`] looks the
//! builder up by name and joins the tokens it produces. Problems are
//! reported in-band as lines starting with `#`, so the output can always be
//! shown to the user as-is.

mod branching;
mod history;
mod remote;
mod worktree;

use crate::tool_call::{Arguments, ToolCall};
use thiserror::Error;
use tracing::debug;

pub use branching::{Branch, Merge, Rebase, Switch};
pub use history::{Log, Stash};
pub use remote::{Pull, Push};
pub use worktree::{Add, Commit, Reset, Restore, Status};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("{0} is required")]
    Missing(&'static str),
}

/// Ordered token list for one git invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitCommand {
    tokens: Vec<String>,
}

impl GitCommand {
    pub fn new(subcommand: &str) -> Self {
        Self {
            tokens: vec!["git".to_string(), subcommand.to_string()],
        }
    }

    pub fn arg(&mut self, token: impl Into<String>) -> &mut Self {
        self.tokens.push(token.into());
        self
    }

    pub fn args<I, S>(&mut self, tokens: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tokens.extend(tokens.into_iter().map(Into::into));
        self
    }

    pub fn arg_opt(&mut self, token: Option<String>) -> &mut Self {
        if let Some(token) = token {
            self.tokens.push(token);
        }
        self
    }

    pub fn flag_if(&mut self, on: bool, flag: &str) -> &mut Self {
        if on {
            self.tokens.push(flag.to_string());
        }
        self
    }

    /// `-m "<message>"`. The message is not escaped.
    pub fn message(&mut self, message: &str) -> &mut Self {
        self.tokens.push("-m".to_string());
        self.tokens.push(format!("\"{}\"", message));
        self
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn into_line(self) -> String {
        self.tokens.join(" ")
    }
}

/// Builds the command line for one catalog operation.
pub trait CommandBuilder: Sync {
    /// Catalog name this builder answers to, e.g. `git_commit`.
    fn operation(&self) -> &'static str;

    fn build(&self, args: &Arguments) -> Result<GitCommand, RenderError>;
}

static BUILDERS: &[&dyn CommandBuilder] = &[
    &Status, &Add, &Commit, &Push, &Pull, &Branch, &Switch, &Restore, &Merge, &Stash, &Rebase,
    &Reset, &Log,
];

pub fn builders() -> &'static [&'static dyn CommandBuilder] {
    BUILDERS
}

pub fn builder_for(name: &str) -> Option<&'static dyn CommandBuilder> {
    BUILDERS.iter().copied().find(|b| b.operation() == name)
}

/// Render a tool call. Never fails: errors come back as `#` lines.
pub fn render(call: &ToolCall) -> String {
    let Some(builder) = builder_for(&call.name) else {
        debug!(name = %call.name, "no builder for operation");
        return format!("# Unknown git command: {}", call.name);
    };

    match builder.build(&call.arguments) {
        Ok(command) => command.into_line(),
        Err(err) => {
            debug!(name = %call.name, %err, "render rejected tool call");
            format!("# Error: {}", err)
        }
    }
}
