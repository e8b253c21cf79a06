// git-remote-sync: Remote push/pull/fetch orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! User interaction seam.
//!
//! ```text
//! RemoteSync --> Interaction
//!                  confirm_push / confirm_pull   Ok(None) = dismissed
//!                  ask_remote_details            Ok(None) = dismissed
//!                  confirm_delete
//!                  show_error / show_push_result / show_output
//!                  progress_start / progress_finish
//! ```
//!
//! Messages handed to `show_*` are already redacted.

use futures_util::future::BoxFuture;

use crate::error::SyncResult;
use crate::git::types::PushResult;
use crate::sync::model::{PullConfig, PushConfig};

/// Dialogs, message boxes and progress display.
pub trait Interaction: Send + Sync {
    /// Let the user complete and confirm a push.
    ///
    /// `Ok(None)` means the user dismissed the dialog.
    fn confirm_push(&self, config: PushConfig) -> BoxFuture<'_, SyncResult<Option<PushConfig>>>;

    /// Let the user complete and confirm a pull.
    ///
    /// `Ok(None)` means the user dismissed the dialog.
    fn confirm_pull(&self, config: PullConfig) -> BoxFuture<'_, SyncResult<Option<PullConfig>>>;

    /// Ask for the name and URL of a new remote.
    fn ask_remote_details(&self) -> BoxFuture<'_, SyncResult<Option<(String, String)>>>;

    /// Yes/no question before a remote is deleted.
    fn confirm_delete<'a>(&'a self, name: &'a str) -> BoxFuture<'a, SyncResult<bool>>;

    fn show_error(&self, context: &str, message: &str);

    fn show_push_result(&self, result: &PushResult);

    fn show_output(&self, title: &str, output: &str);

    fn progress_start(&self, _label: &str) {}

    fn progress_finish(&self) {}
}

/// Progress display that is closed when the guard goes out of scope.
pub struct ProgressGuard<'a> {
    ui: &'a dyn Interaction,
}

impl<'a> ProgressGuard<'a> {
    #[must_use]
    pub fn start(ui: &'a dyn Interaction, label: &str) -> Self {
        ui.progress_start(label);
        Self { ui }
    }
}

impl Drop for ProgressGuard<'_> {
    fn drop(&mut self) {
        self.ui.progress_finish();
    }
}
