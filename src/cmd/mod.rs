// git-remote-sync: Remote push/pull/fetch orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   config   options, configs
//!   remote   remotes, select, create, delete, push, pull, fetch
//!   interact console dialogs and spinner for the sync controller
//! ```

pub mod config;
pub mod interact;
pub mod remote;
