use super::{CommandBuilder, GitCommand, RenderError};
use crate::tool_call::Arguments;

const DEFAULT_REMOTE: &str = "origin";

/// Remote and branch tokens shared by push and pull.
///
/// The remote only falls back to `origin` when a branch is named; with
/// neither given git picks the upstream itself, so nothing is emitted.
fn remote_and_branch(args: &Arguments, cmd: &mut GitCommand) {
    let branch = args.string("branch");
    let remote = args
        .string("remote")
        .or_else(|| branch.as_ref().map(|_| DEFAULT_REMOTE.to_string()));
    cmd.arg_opt(remote).arg_opt(branch);
}

pub struct Push;

impl CommandBuilder for Push {
    fn operation(&self) -> &'static str {
        "git_push"
    }

    fn build(&self, args: &Arguments) -> Result<GitCommand, RenderError> {
        let mut cmd = GitCommand::new("push");
        remote_and_branch(args, &mut cmd);
        cmd.flag_if(args.flag("force"), "--force")
            .flag_if(args.flag("set_upstream"), "--set-upstream");
        Ok(cmd)
    }
}

pub struct Pull;

impl CommandBuilder for Pull {
    fn operation(&self) -> &'static str {
        "git_pull"
    }

    fn build(&self, args: &Arguments) -> Result<GitCommand, RenderError> {
        let mut cmd = GitCommand::new("pull");
        remote_and_branch(args, &mut cmd);
        cmd.flag_if(args.flag("rebase"), "--rebase");
        Ok(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::render_json;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_git_push() {
        assert_eq!(render_json("git_push", json!({})), "git push");
        assert_eq!(render_json("git_push", json!({"remote": "some_origin"})), "git push some_origin");
        assert_eq!(
            render_json("git_push", json!({"branch": "branch_name"})),
            "git push origin branch_name"
        );
        assert_eq!(render_json("git_push", json!({"force": true})), "git push --force");
        assert_eq!(
            render_json("git_push", json!({"set_upstream": true})),
            "git push --set-upstream"
        );
        assert_eq!(
            render_json(
                "git_push",
                json!({"remote": "origin", "branch": "main", "force": true, "set_upstream": true})
            ),
            "git push origin main --force --set-upstream"
        );
    }

    #[test]
    fn test_git_push_empty_remote_falls_back_when_branch_given() {
        assert_eq!(
            render_json("git_push", json!({"remote": "", "branch": "b"})),
            "git push origin b"
        );
        assert_eq!(render_json("git_push", json!({"remote": ""})), "git push");
    }

    #[test]
    fn test_git_pull() {
        assert_eq!(render_json("git_pull", json!({})), "git pull");
        assert_eq!(render_json("git_pull", json!({"remote": "origin"})), "git pull origin");
        assert_eq!(render_json("git_pull", json!({"branch": "main"})), "git pull origin main");
        assert_eq!(
            render_json("git_pull", json!({"remote": "some_origin", "branch": "some_branch"})),
            "git pull some_origin some_branch"
        );
        assert_eq!(render_json("git_pull", json!({"rebase": true})), "git pull --rebase");
        assert_eq!(render_json("git_pull", json!({"rebase": false})), "git pull");
        assert_eq!(
            render_json(
                "git_pull",
                json!({"remote": "upstream", "branch": "develop", "rebase": true})
            ),
            "git pull upstream develop --rebase"
        );
    }
}
