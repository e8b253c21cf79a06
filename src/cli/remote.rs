// git-remote-sync: Remote push/pull/fetch orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote command arguments.
//!
//! # Subcommands
//!
//! ```text
//! select NAME [--alternate]   → remember NAME as the push/pull target
//! select --clear              → forget the selection for this session
//! create [NAME URL]           → git remote add (asks when omitted)
//! delete NAME [--yes]         → git remote remove (asks unless --yes)
//! push / pull                 → confirmed pipeline, flags fill the dialog
//!                               (--no-tags / --no-track beat config defaults)
//! fetch [--silent]            → git fetch --all
//! ```
//!
//! Credentials given with `--username`/`--password` are placed in the remote
//! URL for the duration of the operation and removed afterwards.

use clap::{Args, ValueEnum};

use crate::sync::model::{ConnectionType, PullStrategy, PushStrategy};

/// Connection type as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ConnectionArg {
    #[default]
    Standard,
    Alternate,
}

impl From<ConnectionArg> for ConnectionType {
    fn from(arg: ConnectionArg) -> Self {
        match arg {
            ConnectionArg::Standard => Self::Standard,
            ConnectionArg::Alternate => Self::Alternate,
        }
    }
}

/// Arguments for the `select` command.
#[derive(Debug, Clone, Args)]
pub struct SelectArgs {
    /// Remote to select.
    #[arg(value_name = "NAME", required_unless_present = "clear")]
    pub name: Option<String>,

    /// How the remote is reached; only standard remotes are remembered.
    #[arg(long, value_enum, default_value_t = ConnectionArg::Standard)]
    pub connection: ConnectionArg,

    /// Clears the selection.
    #[arg(long, conflicts_with = "name")]
    pub clear: bool,
}

/// Arguments for the `create` command.
#[derive(Debug, Clone, Args)]
pub struct CreateArgs {
    /// Name of the new remote.
    #[arg(value_name = "NAME", requires = "url")]
    pub name: Option<String>,

    /// URL of the new remote.
    #[arg(value_name = "URL")]
    pub url: Option<String>,
}

/// Arguments for the `delete` command.
#[derive(Debug, Clone, Args)]
pub struct DeleteArgs {
    /// Remote to delete.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Do not ask for confirmation.
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Credentials injected into an http(s) remote URL.
#[derive(Debug, Clone, Default, Args)]
pub struct CredentialArgs {
    /// Username for the remote.
    #[arg(short = 'u', long, requires = "password")]
    pub username: Option<String>,

    /// Password or token for the remote; ignored with a warning unless
    /// --username is given.
    #[arg(long, env = "GRS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

impl CredentialArgs {
    /// Username and password, if both were given.
    #[must_use]
    pub fn pair(&self) -> Option<(&str, &str)> {
        self.username.as_deref().zip(self.password.as_deref())
    }
}

/// Arguments for the `push` command.
#[derive(Debug, Clone, Default, Args)]
pub struct PushArgs {
    /// Remote to push to (default: selected remote).
    #[arg(short = 'r', long)]
    pub remote: Option<String>,

    /// Branch to push (default: current branch).
    #[arg(short = 'b', long)]
    pub branch: Option<String>,

    /// DEFAULT, FORCED or DELETE_BRANCH (default: `sync.push_strategy`).
    #[arg(short = 's', long, value_name = "STRATEGY")]
    pub strategy: Option<PushStrategy>,

    /// Pushes the branch and sets it as upstream.
    #[arg(long = "new-upstream")]
    pub new_upstream: bool,

    /// Pushes tags as well (DEFAULT strategy only).
    #[arg(long, overrides_with = "no_tags")]
    pub tags: bool,

    /// Does not push tags, even if `sync.push_tags` is set.
    #[arg(long = "no-tags", overrides_with = "tags")]
    pub no_tags: bool,

    /// Sets the remote branch as tracking branch first.
    #[arg(long, overrides_with = "no_track")]
    pub track: bool,

    /// Leaves the tracking branch alone, even if `sync.track_branch` is set.
    #[arg(long = "no-track", overrides_with = "track")]
    pub no_track: bool,

    #[command(flatten)]
    pub credentials: CredentialArgs,
}

/// Arguments for the `pull` command.
#[derive(Debug, Clone, Default, Args)]
pub struct PullArgs {
    /// Remote to pull from (default: selected remote).
    #[arg(short = 'r', long)]
    pub remote: Option<String>,

    /// Branch to integrate (default: current branch).
    #[arg(short = 'b', long)]
    pub branch: Option<String>,

    /// DEFAULT, AVOID_MERGING, MERGE_NOCOMMIT, REBASE or RESET
    /// (default: `sync.pull_strategy`).
    #[arg(short = 's', long, value_name = "STRATEGY")]
    pub strategy: Option<PullStrategy>,

    /// Sets the remote branch as tracking branch first.
    #[arg(long, overrides_with = "no_track")]
    pub track: bool,

    /// Leaves the tracking branch alone, even if `sync.track_branch` is set.
    #[arg(long = "no-track", overrides_with = "track")]
    pub no_track: bool,

    #[command(flatten)]
    pub credentials: CredentialArgs,
}

/// Arguments for the `fetch` command.
#[derive(Debug, Clone, Args)]
pub struct FetchArgs {
    /// No progress display; failures are only logged.
    #[arg(long)]
    pub silent: bool,
}
