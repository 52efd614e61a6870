use super::{CommandBuilder, GitCommand, RenderError};
use crate::tool_call::Arguments;
use tracing::warn;

pub struct Branch;

impl CommandBuilder for Branch {
    fn operation(&self) -> &'static str {
        "git_branch"
    }

    fn build(&self, args: &Arguments) -> Result<GitCommand, RenderError> {
        let mut cmd = GitCommand::new("branch");
        match args.string("action").as_deref().unwrap_or("list") {
            "list" => {
                cmd.flag_if(args.flag("all"), "--all");
            }
            "delete" => {
                let name = args
                    .string("branch_name")
                    .ok_or(RenderError::Missing("branch name"))?;
                let flag = if args.flag("force") { "-D" } else { "-d" };
                cmd.arg(flag).arg(name);
            }
            _ => {}
        }
        Ok(cmd)
    }
}

pub struct Switch;

impl CommandBuilder for Switch {
    fn operation(&self) -> &'static str {
        "git_switch"
    }

    fn build(&self, args: &Arguments) -> Result<GitCommand, RenderError> {
        let mut cmd = GitCommand::new("switch");
        let create = args.flag("create");
        let detach = args.flag("detach");
        if create {
            if detach {
                warn!("switch asked to both create and detach; ignoring detach");
            }
            cmd.arg("-c");
        } else if detach {
            cmd.arg("--detach");
        }
        cmd.arg_opt(args.string("branch"));
        Ok(cmd)
    }
}

pub struct Merge;

impl CommandBuilder for Merge {
    fn operation(&self) -> &'static str {
        "git_merge"
    }

    fn build(&self, args: &Arguments) -> Result<GitCommand, RenderError> {
        let mut cmd = GitCommand::new("merge");
        cmd.arg_opt(args.string("branch"));
        if args.flag("no_ff") {
            cmd.arg("--no-ff");
        } else if args.flag("ff_only") {
            cmd.arg("--ff-only");
        }
        let strategy = args.string("strategy").filter(|s| s != "recursive");
        cmd.arg_opt(strategy.map(|s| format!("--strategy={}", s)));
        Ok(cmd)
    }
}

pub struct Rebase;

impl CommandBuilder for Rebase {
    fn operation(&self) -> &'static str {
        "git_rebase"
    }

    fn build(&self, args: &Arguments) -> Result<GitCommand, RenderError> {
        let mut cmd = GitCommand::new("rebase");
        if args.flag("continue") {
            cmd.arg("--continue");
        } else if args.flag("abort") {
            cmd.arg("--abort");
        } else {
            cmd.arg_opt(args.string("target"));
        }
        Ok(cmd)
    }
}
