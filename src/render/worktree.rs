use super::{CommandBuilder, GitCommand, RenderError};
use crate::tool_call::Arguments;

pub struct Status;

impl CommandBuilder for Status {
    fn operation(&self) -> &'static str {
        "git_status"
    }

    fn build(&self, args: &Arguments) -> Result<GitCommand, RenderError> {
        let mut cmd = GitCommand::new("status");
        cmd.flag_if(args.flag("verbose"), "--verbose")
            .flag_if(args.flag("ignored"), "--ignored");
        Ok(cmd)
    }
}

pub struct Add;

impl CommandBuilder for Add {
    fn operation(&self) -> &'static str {
        "git_add"
    }

    fn build(&self, args: &Arguments) -> Result<GitCommand, RenderError> {
        let mut cmd = GitCommand::new("add");
        let files = args.list("files");
        if files.is_empty() {
            cmd.arg(".");
        } else {
            cmd.args(files);
        }
        Ok(cmd)
    }
}

pub struct Commit;

impl CommandBuilder for Commit {
    fn operation(&self) -> &'static str {
        "git_commit"
    }

    fn build(&self, args: &Arguments) -> Result<GitCommand, RenderError> {
        let message = args.string("message");
        let amend = args.flag("amend");
        if message.is_none() && !amend {
            return Err(RenderError::Missing("message"));
        }

        let mut cmd = GitCommand::new("commit");
        cmd.flag_if(amend, "--amend");
        if let Some(message) = message {
            cmd.message(&message);
        }
        Ok(cmd)
    }
}

pub struct Restore;

impl CommandBuilder for Restore {
    fn operation(&self) -> &'static str {
        "git_restore"
    }

    fn build(&self, args: &Arguments) -> Result<GitCommand, RenderError> {
        let mut cmd = GitCommand::new("restore");
        cmd.arg_opt(args.string("source").map(|source| format!("--source={}", source)));
        match args.string("restore_target").as_deref() {
            Some("staged") => {
                cmd.arg("--staged");
            }
            Some("both") => {
                cmd.args(["--staged", "--worktree"]);
            }
            _ => {}
        }
        cmd.args(args.list("files"));
        Ok(cmd)
    }
}

pub struct Reset;

impl CommandBuilder for Reset {
    fn operation(&self) -> &'static str {
        "git_reset"
    }

    fn build(&self, args: &Arguments) -> Result<GitCommand, RenderError> {
        let mode = args.string("mode").ok_or(RenderError::Missing("mode"))?;
        let mut cmd = GitCommand::new("reset");
        cmd.arg(format!("--{}", mode)).arg_opt(args.string("target"));
        Ok(cmd)
    }
}
