// git-remote-sync: Remote push/pull/fetch orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Request handling for one repository.
//!
//! ```text
//! Request                       RemoteSync                     Notification
//! Enabled          --> refresh_remotes  ------------------> RemotesRefreshed
//! RemotePicked     --> pick_remote      ------------------> RefreshCounters
//! CreateRemote     --> create_remote    --> refresh_remotes
//! DeleteRemote     --> delete_remote    --> refresh_remotes
//! Push / Pull      --> Pipeline::request ------------------> RefreshAll
//! Fetch{silent}    --> fetch::fetch_all ------------------> FetchStarted, FetchComplete
//! ```

use std::sync::Arc;

use flume::Receiver;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::error::SyncError;
use crate::git::backend::RemoteCommands;
use crate::git::types::RemoteDescriptor;
use crate::sync::events::{Notification, Notifier, Request};
use crate::sync::fetch;
use crate::sync::interact::Interaction;
use crate::sync::model::{ConnectionType, PullStrategy, PushStrategy};
use crate::sync::pipeline::{Pipeline, PipelineOutcome};
use crate::sync::session::RemoteSession;
use crate::sync::strategy::Strategy;
use crate::utility::url::redact;

/// Context for a failed remote listing.
pub const LISTING_FAILED: &str = "Getting remotes failed!";

/// Context for a failed remote creation.
pub const CREATE_FAILED: &str = "Remote creation failed";

/// Remote synchronization controller.
pub struct RemoteSync {
    commands: Arc<dyn RemoteCommands>,
    ui: Arc<dyn Interaction>,
    notifier: Notifier,
    session: RemoteSession,
    cancel: CancellationToken,
}

impl RemoteSync {
    #[must_use]
    pub fn new(
        commands: Arc<dyn RemoteCommands>,
        ui: Arc<dyn Interaction>,
        notifier: Notifier,
        session: RemoteSession,
    ) -> Self {
        Self {
            commands,
            ui,
            notifier,
            session,
            cancel: CancellationToken::new(),
        }
    }

    #[must_use]
    pub const fn session(&self) -> &RemoteSession {
        &self.session
    }

    /// Token that interrupts the running push or pull when cancelled.
    #[must_use]
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    fn report(&self, context: &str, err: &SyncError) {
        self.ui.show_error(context, &redact(&err.to_string()));
    }

    /// Reload the remote listing and reselect the default remote.
    ///
    /// Returns `None` if the listing failed; the failure is reported.
    pub async fn refresh_remotes(&mut self) -> Option<Vec<RemoteDescriptor>> {
        let remotes = match self.commands.list_remotes().await {
            Ok(remotes) => remotes,
            Err(err) => {
                self.report(LISTING_FAILED, &err);
                return None;
            }
        };

        let selected = match self.session.apply_listing(&remotes) {
            Ok(selected) => selected,
            Err(err) => {
                warn!(error = %err, "could not remember default remote");
                self.session.selected().map(str::to_string)
            }
        };
        debug!(count = remotes.len(), ?selected, "remotes refreshed");

        self.notifier.emit(Notification::RemotesRefreshed {
            remotes: remotes.clone(),
            selected,
        });
        Some(remotes)
    }

    /// Select `name` (or clear with `None`) without notifying.
    pub fn select_remote(&mut self, name: Option<&str>, connection: ConnectionType) {
        if let Err(err) = self.session.select(name, connection) {
            warn!(error = %err, "could not remember default remote");
        }
    }

    /// Selection made by the user.
    pub fn pick_remote(&mut self, name: Option<&str>, connection: ConnectionType) {
        self.select_remote(name, connection);
        self.notifier.emit(Notification::RefreshCounters);
    }

    /// Ask for a name and URL, add the remote and reload the listing.
    ///
    /// Returns whether a remote was created.
    pub async fn create_remote(&mut self) -> bool {
        let (name, url) = match self.ui.ask_remote_details().await {
            Ok(Some(details)) => details,
            Ok(None) => {
                debug!("remote creation dismissed");
                return false;
            }
            Err(err) => {
                self.report(CREATE_FAILED, &err);
                return false;
            }
        };

        if let Err(err) = self.commands.create_remote(&name, &url).await {
            self.report(CREATE_FAILED, &err);
            return false;
        }
        info!(remote = %name, url = %redact(&url), "remote created");
        self.refresh_remotes().await;
        true
    }

    /// Delete `name` after confirmation and reload the listing.
    ///
    /// Failures are logged, not reported. Returns whether the remote was
    /// deleted.
    pub async fn delete_remote(&mut self, name: &str) -> bool {
        match self.ui.confirm_delete(name).await {
            Ok(true) => {}
            Ok(false) => {
                debug!(remote = name, "remote deletion declined");
                return false;
            }
            Err(err) => {
                error!(remote = name, error = %redact(&err.to_string()), "remote deletion failed");
                return false;
            }
        }

        if let Err(err) = self.commands.delete_remote(name).await {
            error!(remote = name, error = %redact(&err.to_string()), "remote deletion failed");
            return false;
        }
        info!(remote = name, "remote deleted");
        self.refresh_remotes().await;
        true
    }

    /// Push to `remote`, or to the selected remote.
    pub async fn push(&self, remote: Option<&str>) -> PipelineOutcome {
        self.run_pipeline::<PushStrategy>(remote).await
    }

    /// Pull from `remote`, or from the selected remote.
    pub async fn pull(&self, remote: Option<&str>) -> PipelineOutcome {
        self.run_pipeline::<PullStrategy>(remote).await
    }

    async fn run_pipeline<S: Strategy>(&self, remote: Option<&str>) -> PipelineOutcome {
        let remote = remote.or_else(|| self.session.selected());
        let remote_url = match remote {
            Some(name) => self.lookup_url(name).await,
            None => None,
        };

        Pipeline::new(self.commands.as_ref(), self.ui.as_ref(), &self.notifier)
            .with_cancel_token(self.cancel.clone())
            .request::<S>(remote, remote_url)
            .await
    }

    /// Current URL of `name`, best effort.
    async fn lookup_url(&self, name: &str) -> Option<String> {
        match self.commands.list_remotes().await {
            Ok(remotes) => remotes.into_iter().find(|r| r.name == name).map(|r| r.url),
            Err(err) => {
                debug!(remote = name, error = %redact(&err.to_string()), "remote url lookup failed");
                None
            }
        }
    }

    /// Fetch every remote.
    pub async fn fetch_all(&self, silent: bool) -> bool {
        fetch::fetch_all(
            self.commands.as_ref(),
            self.ui.as_ref(),
            &self.notifier,
            silent,
        )
        .await
    }

    /// Handle a single request.
    pub async fn handle(&mut self, request: Request) {
        debug!(?request, "handling request");
        match request {
            Request::Enabled => {
                self.refresh_remotes().await;
            }
            Request::RemotePicked { name, connection } => {
                self.pick_remote(name.as_deref(), connection);
            }
            Request::CreateRemote => {
                self.create_remote().await;
            }
            Request::DeleteRemote { name } => {
                self.delete_remote(&name).await;
            }
            Request::Pull => {
                self.pull(None).await;
            }
            Request::Push => {
                self.push(None).await;
            }
            Request::Fetch { silent } => {
                self.fetch_all(silent).await;
            }
        }
    }

    /// Handle requests until every sender is dropped.
    pub async fn serve(&mut self, requests: Receiver<Request>) {
        while let Ok(request) = requests.recv_async().await {
            self.handle(request).await;
        }
        debug!("request channel closed");
    }
}
