// git-remote-sync: Remote push/pull/fetch orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for git-remote-sync using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! grs [global options] <command>
//! remotes
//! select NAME [--alternate] | select --clear
//! create [NAME URL]
//! delete NAME [--yes]
//! push [--remote R] [--branch B] [--strategy S] [--new-upstream] [--tags] [--track]
//! pull [--remote R] [--branch B] [--strategy S] [--track]
//! fetch [--silent]
//! options | configs | version
//! ```

pub mod global;
pub mod remote;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::remote::{CreateArgs, DeleteArgs, FetchArgs, PullArgs, PushArgs, SelectArgs};
use clap::{Parser, Subcommand};

/// Remote push/pull/fetch orchestration for git repositories.
#[derive(Debug, Parser)]
#[command(
    name = "grs",
    author,
    version,
    about = "Remote push/pull/fetch orchestration for git repositories",
    long_about = "git-remote-sync Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Pushes to, pulls from and fetches the remotes of the repository\n\
                  containing the working directory. The selected remote is\n\
                  remembered per repository. See `grs <command> --help` for more\n\
                  information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  grs reads `grs.toml` from the current directory if present, then\n\
                  every file given with --config, then GRS_<SECTION>__<KEY>\n\
                  environment variables. Command-line flags override all of them."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the config files used.
    Configs,

    /// Lists the remotes of the repository and the selected one.
    Remotes,

    /// Selects the remote used by push and pull.
    Select(SelectArgs),

    /// Adds a remote.
    Create(CreateArgs),

    /// Removes a remote.
    Delete(DeleteArgs),

    /// Pushes to a remote.
    Push(PushArgs),

    /// Fetches a remote and integrates it into the current branch.
    Pull(PullArgs),

    /// Fetches all remotes.
    Fetch(FetchArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
