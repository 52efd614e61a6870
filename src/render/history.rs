use super::{CommandBuilder, GitCommand, RenderError};
use crate::tool_call::Arguments;

pub struct Stash;

impl CommandBuilder for Stash {
    fn operation(&self) -> &'static str {
        "git_stash"
    }

    fn build(&self, args: &Arguments) -> Result<GitCommand, RenderError> {
        let action = args.string("action").unwrap_or_else(|| "save".to_string());
        let mut cmd = GitCommand::new("stash");
        cmd.arg(action.as_str());

        match action.as_str() {
            "save" => {
                if let Some(message) = args.string("message") {
                    cmd.message(&message);
                }
                cmd.flag_if(args.flag("include_untracked"), "--include-untracked");
            }
            "pop" | "apply" | "drop" => {
                cmd.arg_opt(args.string("stash_ref"));
            }
            "show" => {
                cmd.flag_if(args.flag("patch"), "--patch")
                    .arg_opt(args.string("stash_ref"));
            }
            // list, clear and anything unrecognised take no further arguments
            _ => {}
        }
        Ok(cmd)
    }
}

pub struct Log;

impl CommandBuilder for Log {
    fn operation(&self) -> &'static str {
        "git_log"
    }

    fn build(&self, args: &Arguments) -> Result<GitCommand, RenderError> {
        let mut cmd = GitCommand::new("log");
        cmd.arg_opt(args.string("ref"));
        if let Some(limit) = args.int("limit").filter(|n| *n >= 1) {
            cmd.arg("-n").arg(limit.to_string());
        }
        cmd.flag_if(args.flag("oneline"), "--oneline")
            .flag_if(args.flag("graph"), "--graph");
        Ok(cmd)
    }
}
