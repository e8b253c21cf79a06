// git-remote-sync: Remote push/pull/fetch orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git command layer.
//!
//! ```text
//!        Public API
//!     query.rs   types.rs
//!         \         |
//!          v        v
//!      ,------------------,
//!      | backend (traits) |
//!      '--+----------+----'
//!         |          |
//!         v          v
//!    GitQuery    RemoteCommands
//!   (gix, read)  (CLI, remotes)
//!         |          |
//!         v          v
//!    GixBackend  ShellBackend
//!    .is_repo    .list/create/delete
//!    .root       .set_url/.set_upstream
//!    .branch     .push*/.fetch*/.merge
//!                .rebase/.reset
//! ```
//!
//! **`GixBackend`**: pure Rust, no subprocess, read-only.
//! **`ShellBackend`**: git CLI, honours the user's credential helpers and SSH setup.

pub mod backend;
pub mod query;
pub mod types;
