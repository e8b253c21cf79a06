// git-remote-sync: Remote push/pull/fetch orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Strategy dispatch.
//!
//! ```text
//! push  push_to_new?  --> push_to_new_upstream
//!       DEFAULT       --> push (+ --tags)
//!       FORCED        --> push_forced (never tags)
//!       DELETE_BRANCH --> delete_remote_branch
//!
//! pull  fetch_remote, then
//!       DEFAULT        --> merge
//!       AVOID_MERGING  --> merge --ff-only
//!       MERGE_NOCOMMIT --> merge --no-commit --no-ff
//!       REBASE         --> rebase
//!       RESET          --> reset --hard
//! ```

use futures_util::future::BoxFuture;
use std::fmt;
use tracing::debug;

use crate::error::{Direction, PipelineError, SyncResult};
use crate::git::backend::RemoteCommands;
use crate::git::types::MergeOptions;
use crate::sync::interact::Interaction;
use crate::sync::model::{OperationConfig, PipelineResult, PullStrategy, PushStrategy};

/// A closed set of primary operations for one direction.
pub trait Strategy: Copy + Default + fmt::Debug + fmt::Display + Send + Sync + 'static {
    const DIRECTION: Direction;

    /// Context for failures of the primary step.
    const PRIMARY_FAILED: &'static str;

    /// Context for failures anywhere else in the operation.
    const OPERATION_FAILED: &'static str;

    /// Let the user complete `config`.
    fn confirm(
        ui: &dyn Interaction,
        config: OperationConfig<Self>,
    ) -> BoxFuture<'_, SyncResult<Option<OperationConfig<Self>>>>;

    /// Run the primary step for `config`.
    fn dispatch<'a>(
        self,
        commands: &'a dyn RemoteCommands,
        config: &'a OperationConfig<Self>,
    ) -> BoxFuture<'a, SyncResult<PipelineResult>>;
}

impl Strategy for PushStrategy {
    const DIRECTION: Direction = Direction::Push;
    const PRIMARY_FAILED: &'static str = "Pushing to remote failed";
    const OPERATION_FAILED: &'static str = "Pushing operation failed";

    fn confirm(
        ui: &dyn Interaction,
        config: OperationConfig<Self>,
    ) -> BoxFuture<'_, SyncResult<Option<OperationConfig<Self>>>> {
        ui.confirm_push(config)
    }

    fn dispatch<'a>(
        self,
        commands: &'a dyn RemoteCommands,
        config: &'a OperationConfig<Self>,
    ) -> BoxFuture<'a, SyncResult<PipelineResult>> {
        Box::pin(async move {
            let remote = config.remote.as_str();
            let branch = config.branch.as_deref();

            let result = if config.push_to_new {
                debug!(remote, ?branch, "push to new upstream");
                commands.push_to_new_upstream(remote, branch).await?
            } else {
                debug!(remote, ?branch, strategy = %self, "push");
                match self {
                    Self::Default => {
                        let extra: &[&str] = if config.push_tags { &["--tags"] } else { &[] };
                        commands.push(remote, branch, extra).await?
                    }
                    Self::Forced => commands.push_forced(remote, branch).await?,
                    Self::DeleteBranch => {
                        let branch = branch.ok_or(PipelineError::MissingBranch {
                            operation: "deleting a remote branch",
                        })?;
                        commands.delete_remote_branch(remote, branch).await?
                    }
                }
            };

            Ok(PipelineResult::Push(result))
        })
    }
}

impl Strategy for PullStrategy {
    const DIRECTION: Direction = Direction::Pull;
    const PRIMARY_FAILED: &'static str = "Pulling from remote failed";
    const OPERATION_FAILED: &'static str = "Pulling operation failed";

    fn confirm(
        ui: &dyn Interaction,
        config: OperationConfig<Self>,
    ) -> BoxFuture<'_, SyncResult<Option<OperationConfig<Self>>>> {
        ui.confirm_pull(config)
    }

    fn dispatch<'a>(
        self,
        commands: &'a dyn RemoteCommands,
        config: &'a OperationConfig<Self>,
    ) -> BoxFuture<'a, SyncResult<PipelineResult>> {
        Box::pin(async move {
            let remote = config.remote.as_str();
            let branch = config.branch.as_deref();

            debug!(remote, strategy = %self, "fetch before integrating");
            commands.fetch_remote(remote).await?;

            debug!(remote, ?branch, strategy = %self, "pull");
            let output = match self {
                Self::Default => {
                    commands
                        .merge_remote(remote, branch, MergeOptions::default())
                        .await?
                }
                Self::AvoidMerging => {
                    commands
                        .merge_remote(remote, branch, MergeOptions::ff_only())
                        .await?
                }
                Self::MergeNoCommit => {
                    commands
                        .merge_remote(remote, branch, MergeOptions::no_commit())
                        .await?
                }
                Self::Rebase => commands.rebase_remote(remote, branch).await?,
                Self::Reset => commands.reset_remote(remote, branch).await?,
            };

            Ok(PipelineResult::Pull(output))
        })
    }
}
