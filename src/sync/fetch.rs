// git-remote-sync: Remote push/pull/fetch orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fetch of all remotes.
//!
//! ```text
//! FetchStarted
//!   interactive: progress, failure --> show_error
//!   silent:      failure --> warn! only
//! FetchComplete (always, once)
//! ```

use tracing::{debug, info, warn};

use crate::git::backend::RemoteCommands;
use crate::sync::events::{Notification, Notifier};
use crate::sync::interact::{Interaction, ProgressGuard};
use crate::utility::url::redact;

/// Context for a failed interactive fetch.
pub const FETCH_FAILED: &str = "Fetching remotes failed";

/// Fetch every remote. Returns whether the fetch succeeded.
pub async fn fetch_all(
    commands: &dyn RemoteCommands,
    ui: &dyn Interaction,
    notifier: &Notifier,
    silent: bool,
) -> bool {
    notifier.emit(Notification::FetchStarted);
    let _complete = notifier.emit_on_drop(Notification::FetchComplete);

    if silent {
        return match commands.fetch_all_remotes().await {
            Ok(output) => {
                debug!(output = %redact(&output), "background fetch finished");
                true
            }
            Err(err) => {
                warn!(error = %redact(&err.to_string()), "background fetch failed");
                false
            }
        };
    }

    let result = {
        let _progress = ProgressGuard::start(ui, "Fetching all remotes");
        commands.fetch_all_remotes().await
    };
    match result {
        Ok(output) => {
            info!("fetched all remotes");
            debug!(output = %redact(&output));
            true
        }
        Err(err) => {
            ui.show_error(FETCH_FAILED, &redact(&err.to_string()));
            false
        }
    }
}
