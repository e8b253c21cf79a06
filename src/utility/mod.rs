// git-remote-sync: Remote push/pull/fetch orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility functions.
//!
//! ```text
//! url  redact credentials, inject credentials
//! ```

pub mod url;
