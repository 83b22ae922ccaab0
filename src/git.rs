//! Git helpers.
//!
//! A [`Git`] handle runs `git` in one working directory, the current one by
//! default. Names and paths are passed to `git` as separate arguments, never
//! through a shell. A failing invocation is a
//! [`ZScriptError::CommandFailed`](crate::ZScriptError).

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::shell::{check, execute_program, CommandOptions};

/// Runs `git` subcommands in a fixed working directory.
#[derive(Debug, Clone, Default)]
pub struct Git {
    cwd: Option<PathBuf>,
}

impl Git {
    /// Handle for the current directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for the repository at `path`.
    pub fn in_dir(path: impl AsRef<Path>) -> Self {
        Self {
            cwd: Some(path.as_ref().to_path_buf()),
        }
    }

    /// Pull remote changes into the current branch.
    pub fn pull(&self) -> Result<()> {
        self.run(&["pull"])
    }

    /// Push local commits to the remote.
    pub fn push(&self) -> Result<()> {
        self.run(&["push"])
    }

    /// Switch to `branch`.
    pub fn checkout(&self, branch: &str) -> Result<()> {
        self.run(&["checkout", branch])
    }

    /// Create a tag, optionally pushing all tags.
    pub fn create_tag(&self, name: &str, push: bool) -> Result<()> {
        self.run(&["tag", name])?;
        if push {
            self.run(&["push", "--tags"])?;
        }
        Ok(())
    }

    /// Create and switch to a branch, optionally publishing it to `origin`.
    pub fn create_branch(&self, name: &str, push: bool) -> Result<()> {
        self.run(&["checkout", "-b", name])?;
        if push {
            self.run(&["push", "--set-upstream", "origin", name])?;
        }
        Ok(())
    }

    /// Update remote-tracking branches, pruning deleted ones.
    pub fn fetch_remote_branches(&self) -> Result<()> {
        self.run(&["fetch", "--prune"])
    }

    /// Local branches whose upstream no longer exists.
    pub fn expired_branches(&self) -> Result<Vec<String>> {
        Ok(parse_gone_branches(&self.output(&["branch", "-vv"])?))
    }

    /// Remote branches, prefixed with `origin/`.
    pub fn remote_branches(&self) -> Result<Vec<String>> {
        Ok(parse_stdout_list(&self.output(&["branch", "-r"])?))
    }

    /// Local branches already merged into the current one.
    pub fn merged_branches(&self) -> Result<Vec<String>> {
        let output = self.output(&["branch", "--merged"])?;
        Ok(parse_branch_list(&output))
    }

    /// Create a local branch tracking `remote`.
    ///
    /// `remote` must start with `origin/`. Without `local`, the local name is
    /// `remote` minus that prefix.
    pub fn create_tracking_branch_for(&self, remote: &str, local: Option<&str>) -> Result<()> {
        let local = local.unwrap_or_else(|| remote.strip_prefix("origin/").unwrap_or(remote));
        self.run(&["branch", "--track", local, remote])
    }

    /// Delete a local branch; `force` deletes it even when unmerged.
    pub fn delete_local_branch(&self, name: &str, force: bool) -> Result<()> {
        let flag = if force { "-D" } else { "-d" };
        self.run(&["branch", flag, name])
    }

    /// Delete a branch on `origin`.
    pub fn delete_remote_branch(&self, name: &str) -> Result<()> {
        self.run(&["push", "--delete", "origin", name])
    }

    /// Stash operations on this repository.
    pub fn stash(&self) -> Stash<'_> {
        Stash { git: self }
    }

    fn options(&self, captured: bool) -> CommandOptions {
        let base = if captured {
            CommandOptions::captured()
        } else {
            CommandOptions::default()
        };
        CommandOptions {
            cwd: self.cwd.clone(),
            ..base
        }
    }

    fn run(&self, args: &[&str]) -> Result<()> {
        let output = execute_program("git", args, &self.options(false))?;
        check(&describe(args), &output)
    }

    fn output(&self, args: &[&str]) -> Result<String> {
        let output = execute_program("git", args, &self.options(true))?;
        check(&describe(args), &output)?;
        Ok(output.stdout)
    }
}

/// `git stash` subcommands, borrowed from a [`Git`] handle.
#[derive(Debug, Clone, Copy)]
pub struct Stash<'a> {
    git: &'a Git,
}

impl Stash<'_> {
    /// Stash changes to `files`, or every tracked change when empty.
    pub fn push(&self, files: &[&str]) -> Result<()> {
        self.git.run(&push_args(files))
    }

    /// Apply and drop the newest stash entry.
    pub fn pop(&self) -> Result<()> {
        self.git.run(&["stash", "pop"])
    }

    /// Apply the newest stash entry and keep it.
    pub fn apply(&self) -> Result<()> {
        self.git.run(&["stash", "apply"])
    }

    /// All stash entries.
    pub fn list(&self) -> Result<Vec<String>> {
        Ok(parse_stdout_list(&self.git.output(&["stash", "list"])?))
    }

    /// Drop every stash entry.
    pub fn clear(&self) -> Result<()> {
        self.git.run(&["stash", "clear"])
    }
}

fn push_args<'a>(files: &[&'a str]) -> Vec<&'a str> {
    let mut args = vec!["stash", "push"];
    if !files.is_empty() {
        args.push("--");
        args.extend_from_slice(files);
    }
    args
}

fn describe(args: &[&str]) -> String {
    let mut line = String::from("git");
    for arg in args {
        line.push(' ');
        if arg.is_empty() || arg.contains(char::is_whitespace) {
            line.push_str(&format!("{:?}", arg));
        } else {
            line.push_str(arg);
        }
    }
    line
}

/// Split command output into trimmed, non-empty lines.
pub fn parse_stdout_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Branch names from `git branch` output, without the current-branch and
/// worktree markers.
fn parse_branch_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(strip_branch_marker)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Branch names from `git branch -vv` whose upstream is marked gone.
fn parse_gone_branches(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| line.contains(": gone]"))
        .filter_map(|line| strip_branch_marker(line).split_whitespace().next())
        .map(String::from)
        .collect()
}

fn strip_branch_marker(line: &str) -> &str {
    line.trim_start_matches(['*', '+']).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::process::Command;
    use tempfile::TempDir;

    fn git_in(dir: &Path, args: &[&str]) {
        let status = Command::new("git")
            .args(args)
            .current_dir(dir)
            .status()
            .unwrap();
        assert!(status.success(), "git {:?} failed", args);
    }

    fn init_repo(dir: &Path) {
        git_in(dir, &["init", "-q", "-b", "main"]);
        git_in(dir, &["config", "user.email", "zscript@example.com"]);
        git_in(dir, &["config", "user.name", "zscript"]);
        git_in(dir, &["config", "commit.gpgsign", "false"]);
        fs::write(dir.join("notes.txt"), "first\n").unwrap();
        fs::write(dir.join("draft notes.txt"), "first\n").unwrap();
        git_in(dir, &["add", "."]);
        git_in(dir, &["commit", "-q", "-m", "init"]);
    }

    fn repo() -> (TempDir, Git) {
        let temp = TempDir::new().unwrap();
        init_repo(temp.path());
        let git = Git::in_dir(temp.path());
        (temp, git)
    }

    #[test]
    fn parse_stdout_list_trims_and_drops_blank_lines() {
        let output = "  main\n\n  feature/x  \n   \n";
        assert_eq!(parse_stdout_list(output), vec!["main", "feature/x"]);
    }

    #[test]
    fn parse_stdout_list_of_empty_output() {
        assert!(parse_stdout_list("").is_empty());
    }

    #[test]
    fn branch_list_drops_markers() {
        let output = "* main\n  done\n+ linked\n";
        assert_eq!(parse_branch_list(output), vec!["main", "done", "linked"]);
    }

    #[test]
    fn gone_branches_are_picked_from_verbose_listing() {
        let output = "\
* main     1a2b3c4 [origin/main] init
  stale    1a2b3c4 [origin/stale: gone] init
  local    1a2b3c4 init
";
        assert_eq!(parse_gone_branches(output), vec!["stale"]);
    }

    #[test]
    fn stash_push_args_with_and_without_files() {
        assert_eq!(push_args(&[]), vec!["stash", "push"]);
        assert_eq!(
            push_args(&["a.rs", "b c.rs"]),
            vec!["stash", "push", "--", "a.rs", "b c.rs"]
        );
    }

    #[test]
    fn describe_quotes_arguments_with_spaces() {
        assert_eq!(
            describe(&["stash", "push", "--", "draft notes.txt"]),
            "git stash push -- \"draft notes.txt\""
        );
    }

    #[test]
    fn branch_lifecycle_with_shell_metacharacters() {
        let (temp, git) = repo();
        let name = "fix;touch-injected";

        git.create_branch(name, false).unwrap();
        git.checkout("main").unwrap();

        let merged = git.merged_branches().unwrap();
        assert!(merged.contains(&"main".to_string()));
        assert!(merged.contains(&name.to_string()));
        assert!(!temp.path().join("touch-injected").exists());

        git.delete_local_branch(name, false).unwrap();
        assert!(!git.merged_branches().unwrap().contains(&name.to_string()));
    }

    #[test]
    fn create_tag_in_repository() {
        let (temp, git) = repo();
        git.create_tag("v1.0", false).unwrap();

        let tags = Command::new("git")
            .args(["tag", "--list"])
            .current_dir(temp.path())
            .output()
            .unwrap();
        assert_eq!(String::from_utf8_lossy(&tags.stdout).trim(), "v1.0");
    }

    #[test]
    fn checkout_unknown_branch_fails_with_command() {
        let (_temp, git) = repo();
        let err = git.checkout("no-such-branch").unwrap_err();

        match err {
            crate::ZScriptError::CommandFailed { command, .. } => {
                assert_eq!(command, "git checkout no-such-branch");
            }
            other => panic!("Expected CommandFailed, got {:?}", other),
        }
    }

    #[test]
    fn stash_push_list_pop() {
        let (temp, git) = repo();
        let notes = temp.path().join("notes.txt");
        fs::write(&notes, "changed\n").unwrap();

        git.stash().push(&[]).unwrap();
        assert_eq!(git.stash().list().unwrap().len(), 1);
        assert_eq!(fs::read_to_string(&notes).unwrap(), "first\n");

        git.stash().pop().unwrap();
        assert!(git.stash().list().unwrap().is_empty());
        assert_eq!(fs::read_to_string(&notes).unwrap(), "changed\n");
    }

    #[test]
    fn stash_push_only_named_files() {
        let (temp, git) = repo();
        let notes = temp.path().join("notes.txt");
        let draft = temp.path().join("draft notes.txt");
        fs::write(&notes, "changed\n").unwrap();
        fs::write(&draft, "changed\n").unwrap();

        git.stash().push(&["draft notes.txt"]).unwrap();

        assert_eq!(fs::read_to_string(&draft).unwrap(), "first\n");
        assert_eq!(fs::read_to_string(&notes).unwrap(), "changed\n");

        git.stash().apply().unwrap();
        assert_eq!(fs::read_to_string(&draft).unwrap(), "changed\n");
        git.stash().clear().unwrap();
        assert!(git.stash().list().unwrap().is_empty());
    }

    #[test]
    fn tracking_and_expired_branches_against_origin() {
        let upstream = TempDir::new().unwrap();
        init_repo(upstream.path());
        git_in(upstream.path(), &["branch", "stale"]);

        let clone_parent = TempDir::new().unwrap();
        let origin = upstream.path().to_string_lossy().to_string();
        git_in(clone_parent.path(), &["clone", "-q", &origin, "work"]);
        let git = Git::in_dir(clone_parent.path().join("work"));

        let remotes = git.remote_branches().unwrap();
        assert!(remotes.iter().any(|b| b == "origin/stale"));

        git.create_tracking_branch_for("origin/stale", None).unwrap();
        git.create_tracking_branch_for("origin/main", Some("mirror"))
            .unwrap();
        assert!(git.expired_branches().unwrap().is_empty());

        git_in(upstream.path(), &["branch", "-D", "stale"]);
        git.fetch_remote_branches().unwrap();

        assert_eq!(git.expired_branches().unwrap(), vec!["stale"]);
        assert!(git.merged_branches().unwrap().contains(&"mirror".to_string()));
    }
}
