// git-remote-sync: Remote push/pull/fetch orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitQuery (read)         --> GixBackend   (pure Rust gix)
//! RemoteCommands (remote) --> ShellBackend (git CLI, async)
//! ```

use std::path::{Path, PathBuf};

use futures_util::future::BoxFuture;
use tokio::process::Command;
use tracing::{debug, trace};

use crate::error::{GitError, GixError, SyncResult};
use crate::utility::url::redact;

use super::types::{MergeOptions, PushResult, RemoteDescriptor};

// --- Query Trait (Read-only operations) ---

/// Read-only repository queries.
pub trait GitQuery {
    /// Check if path is inside a git work tree.
    fn is_git_repo(path: &Path) -> bool;

    /// Work tree root of the repository containing `path`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if no repository is found or it is bare.
    fn repo_root(path: &Path) -> SyncResult<PathBuf>;

    /// Get current branch name (None if HEAD is detached).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or head resolution fails.
    fn current_branch(path: &Path) -> SyncResult<Option<String>>;
}

// --- Remote Command Trait ---

/// Remote listing and remote-mutating primitives.
///
/// Every call either succeeds with its payload or fails with a reported
/// error; the orchestrator decides what a failure means for the rest of a
/// pipeline. Methods return boxed futures so the trait stays object safe.
pub trait RemoteCommands: Send + Sync {
    /// Remotes in the order git lists them.
    fn list_remotes(&self) -> BoxFuture<'_, SyncResult<Vec<RemoteDescriptor>>>;

    fn create_remote<'a>(&'a self, name: &'a str, url: &'a str) -> BoxFuture<'a, SyncResult<()>>;

    fn delete_remote<'a>(&'a self, name: &'a str) -> BoxFuture<'a, SyncResult<()>>;

    fn set_remote_url<'a>(&'a self, name: &'a str, url: &'a str)
    -> BoxFuture<'a, SyncResult<()>>;

    /// Make `remote/branch` the upstream of the current branch.
    fn set_upstream_branch<'a>(
        &'a self,
        remote: &'a str,
        branch: &'a str,
    ) -> BoxFuture<'a, SyncResult<()>>;

    fn push<'a>(
        &'a self,
        remote: &'a str,
        branch: Option<&'a str>,
        extra_args: &'a [&'a str],
    ) -> BoxFuture<'a, SyncResult<PushResult>>;

    fn push_forced<'a>(
        &'a self,
        remote: &'a str,
        branch: Option<&'a str>,
    ) -> BoxFuture<'a, SyncResult<PushResult>>;

    fn push_to_new_upstream<'a>(
        &'a self,
        remote: &'a str,
        branch: Option<&'a str>,
    ) -> BoxFuture<'a, SyncResult<PushResult>>;

    fn delete_remote_branch<'a>(
        &'a self,
        remote: &'a str,
        branch: &'a str,
    ) -> BoxFuture<'a, SyncResult<PushResult>>;

    fn fetch_remote<'a>(&'a self, remote: &'a str) -> BoxFuture<'a, SyncResult<String>>;

    fn fetch_all_remotes(&self) -> BoxFuture<'_, SyncResult<String>>;

    fn merge_remote<'a>(
        &'a self,
        remote: &'a str,
        branch: Option<&'a str>,
        options: MergeOptions,
    ) -> BoxFuture<'a, SyncResult<String>>;

    fn rebase_remote<'a>(
        &'a self,
        remote: &'a str,
        branch: Option<&'a str>,
    ) -> BoxFuture<'a, SyncResult<String>>;

    fn reset_remote<'a>(
        &'a self,
        remote: &'a str,
        branch: Option<&'a str>,
    ) -> BoxFuture<'a, SyncResult<String>>;
}

// --- GixBackend Implementation (Pure Rust) ---

/// Pure Rust git backend using gix.
pub struct GixBackend;

impl GitQuery for GixBackend {
    fn is_git_repo(path: &Path) -> bool {
        gix::discover(path).is_ok()
    }

    fn repo_root(path: &Path) -> SyncResult<PathBuf> {
        let repo =
            gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;
        repo.workdir()
            .map(Path::to_path_buf)
            .ok_or_else(|| GitError::Gix(GixError::BareRepository).into())
    }

    fn current_branch(path: &Path) -> SyncResult<Option<String>> {
        let repo =
            gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;
        let head = repo
            .head_name()
            .map_err(|e| GitError::Gix(GixError::Head(e)))?;
        Ok(head.map(|name| name.shorten().to_string()))
    }
}

// --- ShellBackend Implementation (Git CLI) ---

/// Shell-based backend running the git CLI inside one repository.
///
/// Used for everything that talks to a remote, so credential helpers, SSH
/// configuration and hooks behave exactly as they do for the user's own git.
#[derive(Debug, Clone)]
pub struct ShellBackend {
    executable: PathBuf,
    repo: PathBuf,
}

impl ShellBackend {
    /// Backend for the repository at `repo`, using `git` from `PATH`.
    ///
    /// # Errors
    ///
    /// Returns `GitError::ExecutableNotFound` if git is not in `PATH`.
    pub fn new(repo: impl Into<PathBuf>) -> SyncResult<Self> {
        let executable = which::which("git").map_err(|_| GitError::ExecutableNotFound {
            name: "git".to_string(),
        })?;
        Ok(Self::with_executable(executable, repo))
    }

    /// Backend using an explicit git executable.
    #[must_use]
    pub fn with_executable(executable: impl Into<PathBuf>, repo: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            repo: repo.into(),
        }
    }

    #[must_use]
    pub fn repo(&self) -> &Path {
        &self.repo
    }

    /// Execute a git command. Sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0`.
    ///
    /// Returns stdout, or stderr when stdout is empty (fetch and most
    /// progress-style commands only write to stderr).
    pub(crate) async fn git_command(&self, args: &[&str]) -> SyncResult<String> {
        let command_line = redact(&format!("git {}", args.join(" "))).into_owned();
        debug!(cwd = %self.repo.display(), cmd = %command_line, "exec");

        let output = Command::new(&self.executable)
            .args(args)
            .current_dir(&self.repo)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| std::io::Error::new(e.kind(), format!("failed to execute git: {e}")))?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            let message = if stderr.is_empty() { &stdout } else { &stderr };
            return Err(GitError::CommandFailed {
                command: command_line,
                message: redact(message).into_owned(),
            }
            .into());
        }

        trace!(cmd = %command_line, stdout = %redact(&stdout), "completed");
        Ok(if stdout.is_empty() { stderr } else { stdout })
    }

    async fn push_porcelain(&self, args: &[&str]) -> SyncResult<PushResult> {
        let mut full = vec!["push", "--porcelain"];
        full.extend_from_slice(args);
        let output = self.git_command(&full).await?;
        Ok(PushResult::from_porcelain(&output))
    }
}

/// `remote/branch`, or just `remote` (its HEAD) when no branch is given.
fn remote_ref(remote: &str, branch: Option<&str>) -> String {
    branch.map_or_else(|| remote.to_string(), |b| format!("{remote}/{b}"))
}

/// Parse `git remote -v`, keeping the listing order and one entry per remote.
///
/// Lines are `<name> TAB <url> SP (fetch|push)`; the URL may contain spaces.
pub(crate) fn parse_remote_listing(output: &str) -> Vec<RemoteDescriptor> {
    let mut remotes: Vec<RemoteDescriptor> = Vec::new();
    for line in output.lines() {
        let Some((name, rest)) = line.split_once('\t') else {
            continue;
        };
        let name = name.trim();
        if name.is_empty()
            || rest.ends_with(" (push)")
            || remotes.iter().any(|r| r.name == name)
        {
            continue;
        }
        let url = rest.strip_suffix(" (fetch)").unwrap_or(rest).trim();
        remotes.push(RemoteDescriptor::new(name, url));
    }
    remotes
}

impl RemoteCommands for ShellBackend {
    fn list_remotes(&self) -> BoxFuture<'_, SyncResult<Vec<RemoteDescriptor>>> {
        Box::pin(async move {
            let output = self.git_command(&["remote", "-v"]).await?;
            Ok(parse_remote_listing(&output))
        })
    }

    fn create_remote<'a>(&'a self, name: &'a str, url: &'a str) -> BoxFuture<'a, SyncResult<()>> {
        Box::pin(async move {
            self.git_command(&["remote", "add", name, url]).await?;
            Ok(())
        })
    }

    fn delete_remote<'a>(&'a self, name: &'a str) -> BoxFuture<'a, SyncResult<()>> {
        Box::pin(async move {
            self.git_command(&["remote", "remove", name]).await?;
            Ok(())
        })
    }

    fn set_remote_url<'a>(
        &'a self,
        name: &'a str,
        url: &'a str,
    ) -> BoxFuture<'a, SyncResult<()>> {
        Box::pin(async move {
            self.git_command(&["remote", "set-url", name, url]).await?;
            Ok(())
        })
    }

    fn set_upstream_branch<'a>(
        &'a self,
        remote: &'a str,
        branch: &'a str,
    ) -> BoxFuture<'a, SyncResult<()>> {
        Box::pin(async move {
            let upstream = format!("{remote}/{branch}");
            self.git_command(&["branch", "--no-color", "-u", &upstream])
                .await?;
            Ok(())
        })
    }

    fn push<'a>(
        &'a self,
        remote: &'a str,
        branch: Option<&'a str>,
        extra_args: &'a [&'a str],
    ) -> BoxFuture<'a, SyncResult<PushResult>> {
        Box::pin(async move {
            let mut args = vec![remote];
            args.extend(branch);
            args.extend_from_slice(extra_args);
            self.push_porcelain(&args).await
        })
    }

    fn push_forced<'a>(
        &'a self,
        remote: &'a str,
        branch: Option<&'a str>,
    ) -> BoxFuture<'a, SyncResult<PushResult>> {
        Box::pin(async move {
            let mut args = vec!["--force", remote];
            args.extend(branch);
            self.push_porcelain(&args).await
        })
    }

    fn push_to_new_upstream<'a>(
        &'a self,
        remote: &'a str,
        branch: Option<&'a str>,
    ) -> BoxFuture<'a, SyncResult<PushResult>> {
        Box::pin(async move {
            self.push_porcelain(&["--set-upstream", remote, branch.unwrap_or("HEAD")])
                .await
        })
    }

    fn delete_remote_branch<'a>(
        &'a self,
        remote: &'a str,
        branch: &'a str,
    ) -> BoxFuture<'a, SyncResult<PushResult>> {
        Box::pin(async move { self.push_porcelain(&[remote, "--delete", branch]).await })
    }

    fn fetch_remote<'a>(&'a self, remote: &'a str) -> BoxFuture<'a, SyncResult<String>> {
        Box::pin(async move { self.git_command(&["fetch", "--progress", remote]).await })
    }

    fn fetch_all_remotes(&self) -> BoxFuture<'_, SyncResult<String>> {
        Box::pin(async move { self.git_command(&["fetch", "--all", "--progress"]).await })
    }

    fn merge_remote<'a>(
        &'a self,
        remote: &'a str,
        branch: Option<&'a str>,
        options: MergeOptions,
    ) -> BoxFuture<'a, SyncResult<String>> {
        Box::pin(async move {
            let target = remote_ref(remote, branch);
            let mut args = vec!["merge"];
            if options.ff_only {
                args.push("--ff-only");
            }
            if options.no_commit {
                args.extend(["--no-commit", "--no-ff"]);
            }
            args.push(target.as_str());
            self.git_command(&args).await
        })
    }

    fn rebase_remote<'a>(
        &'a self,
        remote: &'a str,
        branch: Option<&'a str>,
    ) -> BoxFuture<'a, SyncResult<String>> {
        Box::pin(async move {
            let target = remote_ref(remote, branch);
            self.git_command(&["rebase", &target]).await
        })
    }

    fn reset_remote<'a>(
        &'a self,
        remote: &'a str,
        branch: Option<&'a str>,
    ) -> BoxFuture<'a, SyncResult<String>> {
        Box::pin(async move {
            let target = remote_ref(remote, branch);
            self.git_command(&["reset", "--hard", &target]).await
        })
    }
}

#[cfg(test)]
mod tests;
