// git-remote-sync: Remote push/pull/fetch orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            SyncError (~24 bytes)
//!                   |
//!     +------+------+-------+--------+
//!     |      |      |       |        |
//!     v      v      v       v        v
//!    Git   Config  Prefs  Pipeline Io/Other
//!    Box    Box    Box      Box    Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Git      Gix, CommandFailed, RemoteNotFound, InvalidRemoteUrl
//!   Config   ParseError, MissingKey, InvalidValue
//!   Prefs    Read, Write, Malformed
//!   Pipeline NoRemoteSelected, MissingBranch, Interrupted
//!
//! All variants boxed => SyncError fits in 24 bytes.
//! ```

use std::fmt;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`SyncError`].
pub type SyncResult<T> = std::result::Result<T, SyncError>;

/// Top-level library error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Preference store error.
    #[error("preferences error: {0}")]
    Prefs(#[from] Box<PrefsError>),

    /// Remote operation pipeline could not run.
    #[error("{0}")]
    Pipeline(#[from] Box<PipelineError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for SyncError {
                fn from(err: $error) -> Self {
                    SyncError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    ConfigError => Config,
    PrefsError => Prefs,
    PipelineError => Pipeline,
    std::io::Error => Io,
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to discover repository from path.
    #[error("failed to discover repository: {0}")]
    Discover(#[from] Box<gix::discover::Error>),

    /// Failed to get HEAD reference.
    #[error("failed to get head reference: {0}")]
    Head(#[from] gix::reference::find::existing::Error),

    /// Repository has no worktree (bare repository).
    #[error("repository has no worktree (bare repository)")]
    BareRepository,
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository not found at the specified path.
    #[error("repository not found: {path}")]
    RepoNotFound { path: String },

    /// The git executable could not be located.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Git command execution failed.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),

    /// Remote not found.
    #[error("remote not found: {remote}")]
    RemoteNotFound { remote: String },

    /// Remote URL cannot be used for the requested operation.
    #[error("invalid remote url '{url}': {message}")]
    InvalidRemoteUrl { url: String, message: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Preference Errors ---

/// Preference store errors.
#[derive(Debug, Error)]
pub enum PrefsError {
    /// Failed to read the preference file.
    #[error("failed to read preferences '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the preference file.
    #[error("failed to write preferences '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Stored value does not have the expected shape.
    #[error("malformed preference '{key}': {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

// --- Pipeline Errors ---

/// Direction of a remote synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Push,
    Pull,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push => write!(f, "push"),
            Self::Pull => write!(f, "pull"),
        }
    }
}

/// Errors raised while assembling or running a remote operation.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// No remote is selected for the requested direction.
    #[error("no remote has been selected for {direction}")]
    NoRemoteSelected { direction: Direction },

    /// Operation needs a branch but none was configured.
    #[error("{operation} requires a branch")]
    MissingBranch { operation: &'static str },

    /// The running remote command was cancelled by an interrupt.
    #[error("{direction} interrupted")]
    Interrupted { direction: Direction },
}

#[cfg(test)]
mod tests;
