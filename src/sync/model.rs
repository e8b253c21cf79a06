// git-remote-sync: Remote push/pull/fetch orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Operation configuration and results.
//!
//! ```text
//! ConnectionType   Standard | Alternate
//! PushStrategy     DEFAULT | FORCED | DELETE_BRANCH
//! PullStrategy     DEFAULT | AVOID_MERGING | MERGE_NOCOMMIT | REBASE | RESET
//! OperationConfig  what the user confirmed (PushConfig / PullConfig)
//! PipelineResult   outcome of the primary step
//! ```
//!
//! Strategy tokens are case-insensitive and accept `-` for `_`
//! (`merge-nocommit`, `delete_branch`, `FORCED`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, SyncError};
use crate::git::types::PushResult;

/// How the selected remote is reached.
///
/// Only `Standard` remotes are pulled from and remembered as the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    /// Regular git remote.
    #[default]
    Standard,
    /// Push-only target reached by another transport.
    Alternate,
}

/// Normalize a strategy token to its canonical upper snake case form.
fn normalize_token(token: &str) -> String {
    token.trim().to_ascii_uppercase().replace('-', "_")
}

fn unknown_strategy(key: &str, token: &str) -> SyncError {
    ConfigError::InvalidValue {
        section: "sync".to_string(),
        key: key.to_string(),
        message: format!("unknown strategy '{token}'"),
    }
    .into()
}

/// Primary push operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum PushStrategy {
    #[default]
    Default,
    Forced,
    DeleteBranch,
}

impl PushStrategy {
    pub const ALL: [Self; 3] = [Self::Default, Self::Forced, Self::DeleteBranch];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::Forced => "FORCED",
            Self::DeleteBranch => "DELETE_BRANCH",
        }
    }
}

impl fmt::Display for PushStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PushStrategy {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = normalize_token(s);
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == token)
            .ok_or_else(|| unknown_strategy("push_strategy", s))
    }
}

impl TryFrom<String> for PushStrategy {
    type Error = SyncError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Integration step run after the remote has been fetched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum PullStrategy {
    /// Merge.
    #[default]
    Default,
    /// Fast-forward only merge.
    AvoidMerging,
    /// Merge, stopping before the commit.
    #[serde(rename = "MERGE_NOCOMMIT")]
    MergeNoCommit,
    Rebase,
    /// Hard reset to the remote branch.
    Reset,
}

impl PullStrategy {
    pub const ALL: [Self; 5] = [
        Self::Default,
        Self::AvoidMerging,
        Self::MergeNoCommit,
        Self::Rebase,
        Self::Reset,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::AvoidMerging => "AVOID_MERGING",
            Self::MergeNoCommit => "MERGE_NOCOMMIT",
            Self::Rebase => "REBASE",
            Self::Reset => "RESET",
        }
    }
}

impl fmt::Display for PullStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PullStrategy {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = match normalize_token(s).as_str() {
            "MERGE_NO_COMMIT" => "MERGE_NOCOMMIT".to_string(),
            other => other.to_string(),
        };
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == token)
            .ok_or_else(|| unknown_strategy("pull_strategy", s))
    }
}

impl TryFrom<String> for PullStrategy {
    type Error = SyncError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Confirmed configuration for one push or pull.
///
/// `push_tags` and `push_to_new` only apply to pushes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationConfig<S> {
    pub remote: String,
    /// Current URL of `remote`, if known.
    pub remote_url: Option<String>,
    pub branch: Option<String>,
    pub strategy: S,
    pub set_branch_as_tracking: bool,
    /// URL to switch the remote to before the primary step.
    pub new_remote_url: Option<String>,
    /// URL to switch the remote back to afterwards.
    pub restore_url_to: Option<String>,
    pub push_tags: bool,
    pub push_to_new: bool,
}

pub type PushConfig = OperationConfig<PushStrategy>;
pub type PullConfig = OperationConfig<PullStrategy>;

impl<S: Default> OperationConfig<S> {
    /// Configuration seeded with the target remote only.
    #[must_use]
    pub fn new(remote: impl Into<String>) -> Self {
        Self {
            remote: remote.into(),
            remote_url: None,
            branch: None,
            strategy: S::default(),
            set_branch_as_tracking: false,
            new_remote_url: None,
            restore_url_to: None,
            push_tags: false,
            push_to_new: false,
        }
    }
}

/// Outcome of the primary step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineResult {
    Push(PushResult),
    /// Output of the integration command.
    Pull(String),
}

impl PipelineResult {
    /// One-line status for logs.
    #[must_use]
    pub fn status(&self) -> &str {
        match self {
            Self::Push(result) => result.flag_description(),
            Self::Pull(output) => output.lines().last().unwrap_or("Pull finished"),
        }
    }
}
