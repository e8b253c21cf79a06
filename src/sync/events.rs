// git-remote-sync: Remote push/pull/fetch orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Requests consumed and notifications emitted by the controller.
//!
//! ```text
//!   UI --Request--> RemoteSync::handle --Notification--> flume --> listeners
//! ```
//!
//! Emitting never blocks and never fails: a notification nobody listens
//! to is dropped.

use flume::{Receiver, Sender};
use tracing::trace;

use crate::git::types::RemoteDescriptor;
use crate::sync::model::ConnectionType;

/// Something other parts of the application may want to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    FetchStarted,
    FetchComplete,
    /// Repository state may have changed; reload everything.
    RefreshAll,
    /// Ahead/behind counters may have changed.
    RefreshCounters,
    /// The remote listing was reloaded.
    RemotesRefreshed {
        remotes: Vec<RemoteDescriptor>,
        selected: Option<String>,
    },
}

/// User-initiated action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Repository became available; load the remote listing.
    Enabled,
    RemotePicked {
        name: Option<String>,
        connection: ConnectionType,
    },
    CreateRemote,
    DeleteRemote {
        name: String,
    },
    /// Pull from the selected remote.
    Pull,
    /// Push to the selected remote.
    Push,
    Fetch {
        silent: bool,
    },
}

/// Sending half of the notification channel.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: Sender<Notification>,
}

impl Notifier {
    /// Unbounded notification channel.
    #[must_use]
    pub fn channel() -> (Self, Receiver<Notification>) {
        let (tx, rx) = flume::unbounded();
        (Self { tx }, rx)
    }

    pub fn emit(&self, notification: Notification) {
        trace!(?notification, "notify");
        if self.tx.send(notification).is_err() {
            trace!("notification dropped, no listener");
        }
    }

    /// Guard that emits `notification` when dropped.
    #[must_use]
    pub fn emit_on_drop(&self, notification: Notification) -> NotifyOnDrop {
        NotifyOnDrop {
            notifier: self.clone(),
            notification: Some(notification),
        }
    }
}

/// Emits its notification exactly once, on [`fire`](Self::fire) or drop.
#[derive(Debug)]
pub struct NotifyOnDrop {
    notifier: Notifier,
    notification: Option<Notification>,
}

impl NotifyOnDrop {
    /// Emit now instead of at drop.
    pub fn fire(mut self) {
        if let Some(notification) = self.notification.take() {
            self.notifier.emit(notification);
        }
    }
}

impl Drop for NotifyOnDrop {
    fn drop(&mut self) {
        if let Some(notification) = self.notification.take() {
            self.notifier.emit(notification);
        }
    }
}
