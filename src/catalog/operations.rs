use super::{Operation, ParamDefault, Parameter};

pub static OPERATIONS: &[Operation] = &[
    Operation {
        name: "git_status",
        description: "Check the current status of the repository (modified files, staged changes, branch info)",
        parameters: &[
            Parameter::flag("verbose", "Show detailed status including diffs"),
            Parameter::flag("ignored", "Show ignored files"),
        ],
    },
    Operation {
        name: "git_add",
        description: "Stage files for commit",
        parameters: &[Parameter::files("List of file paths to stage (use ['.'] for all files)")
            .default_to(ParamDefault::List(&["."]))],
    },
    Operation {
        name: "git_commit",
        description: "Create a commit with staged changes",
        parameters: &[
            Parameter::string(
                "message",
                "Commit message describing the changes (required unless amend=true)",
            )
            .at_least(1),
            Parameter::flag("amend", "Amend the previous commit instead of creating new one"),
        ],
    },
    Operation {
        name: "git_push",
        description: "Push commits to remote repository",
        parameters: &[
            Parameter::string("remote", "Remote name").default_to(ParamDefault::Str("origin")),
            Parameter::string("branch", "Branch name (current branch if not specified)"),
            Parameter::flag("force", "Force push (use with caution)"),
            Parameter::flag("set_upstream", "Set upstream tracking for the branch"),
        ],
    },
    Operation {
        name: "git_pull",
        description: "Pull changes from remote repository",
        parameters: &[
            Parameter::string("remote", "Remote name").default_to(ParamDefault::Str("origin")),
            Parameter::string("branch", "Branch name (current branch if not specified)"),
            Parameter::flag("rebase", "Rebase instead of merge"),
        ],
    },
    Operation {
        name: "git_branch",
        description: "List, or delete branches (use `git_switch` for branch creation)",
        parameters: &[
            Parameter::string("action", "Action to perform")
                .one_of(&["delete", "list"])
                .required(),
            Parameter::string("branch_name", "Name of the branch (required for delete)"),
            Parameter::flag(
                "force",
                "Force delete even if not merged (only for delete action)",
            ),
            Parameter::flag(
                "all",
                "Show all branches including remotes (only for list action)",
            ),
        ],
    },
    Operation {
        name: "git_switch",
        description: "Switch to a different branch",
        parameters: &[
            Parameter::string(
                "branch",
                "Branch name to switch to (not needed if detach is true)",
            ),
            Parameter::flag("create", "Create new branch before switching"),
            Parameter::flag("detach", "Switch to a commit in detached HEAD state"),
        ],
    },
    Operation {
        name: "git_restore",
        description: "Restore files in working tree and/or staging area",
        parameters: &[
            Parameter::files("List of file paths to restore").required(),
            Parameter::string("source", "Restore source (e.g., HEAD, commit hash)")
                .default_to(ParamDefault::Str("HEAD")),
            Parameter::string("restore_target", "Which area to restore")
                .one_of(&["worktree", "staged", "both"])
                .default_to(ParamDefault::Str("worktree")),
        ],
    },
    Operation {
        name: "git_merge",
        description: "Merge branches together",
        parameters: &[
            Parameter::string("branch", "Branch to merge into current branch").required(),
            Parameter::flag(
                "no_ff",
                "Always create a merge commit, even if fast-forward is possible",
            ),
            Parameter::flag(
                "ff_only",
                "Only allow fast-forward merges (fail if not possible)",
            ),
            Parameter::string("strategy", "Merge strategy to use")
                .one_of(&["recursive", "resolve", "ours", "subtree"])
                .default_to(ParamDefault::Str("recursive")),
        ],
    },
    Operation {
        name: "git_stash",
        description: "Temporarily save uncommitted changes",
        parameters: &[
            Parameter::string("action", "Stash operation")
                .one_of(&["save", "pop", "apply", "list", "drop", "clear", "show"])
                .required(),
            Parameter::string("message", "Message for stash save (only for save action)"),
            Parameter::string(
                "stash_ref",
                "Stash reference (e.g., 'stash@{0}', 'stash@{2}') for pop/apply/drop/show actions",
            )
            .default_to(ParamDefault::Str("stash@{0}")),
            Parameter::flag(
                "include_untracked",
                "Include untracked files in stash (only for save action)",
            ),
            Parameter::flag("patch", "Show full patch/diff when using action=show"),
        ],
    },
    Operation {
        name: "git_rebase",
        description: "Reapply commits on top of another base",
        parameters: &[
            Parameter::string(
                "target",
                "Target branch or commit to rebase onto (required unless continue or abort are true)",
            ),
            Parameter::flag("continue", "Continue after resolving conflicts"),
            Parameter::flag("abort", "Abort the rebase operation"),
        ],
    },
    Operation {
        name: "git_reset",
        description: "Reset current HEAD to specified state",
        parameters: &[
            Parameter::string("mode", "Reset mode")
                .one_of(&["soft", "mixed", "hard"])
                .required(),
            Parameter::string("target", "Commit hash or reference (e.g., HEAD~1)")
                .default_to(ParamDefault::Str("HEAD")),
        ],
    },
    Operation {
        name: "git_log",
        description: "View commit history",
        parameters: &[
            Parameter::string(
                "ref",
                "Branch, tag, or commit to show history for (default: current branch)",
            ),
            Parameter::integer("limit", "Number of commits to show")
                .default_to(ParamDefault::Int(10))
                .at_least(1),
            Parameter::flag("oneline", "Condensed one-line format"),
            Parameter::flag("graph", "Show branch graph"),
        ],
    },
];
