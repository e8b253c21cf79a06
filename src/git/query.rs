// git-remote-sync: Remote push/pull/fetch orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git query operations using gix backend.
//!
//! ```text
//! query.rs --> GixBackend --> .git/ (no subprocess)
//! ```

use crate::error::SyncResult;
use std::path::{Path, PathBuf};

use super::backend::{GitQuery, GixBackend};

#[must_use]
pub fn is_git_repo(path: &Path) -> bool {
    GixBackend::is_git_repo(path)
}

/// Work tree root of the repository containing `path`.
///
/// This is the key under which the default remote is remembered.
///
/// # Errors
///
/// Returns a `GitError` if no repository is found or it is bare.
pub fn repo_root(path: &Path) -> SyncResult<PathBuf> {
    GixBackend::repo_root(path)
}

/// Get current branch name (None if HEAD is detached).
///
/// # Errors
///
/// Returns a `GitError` if repository discovery or head resolution fails.
pub fn current_branch(path: &Path) -> SyncResult<Option<String>> {
    GixBackend::current_branch(path)
}
