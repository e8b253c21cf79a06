// git-remote-sync: Remote push/pull/fetch orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Push/pull operation pipeline.
//!
//! ```text
//! request(remote)
//!   |-- no remote ----------------------> NoRemote (reported)
//!   |-- confirm dialog dismissed -------> Aborted  (silent)
//!   v
//! run(config)
//!   SetTracking   if set_branch_as_tracking && branch     \  failure skips
//!   SetUrl        if new_remote_url                        >  the rest of
//!   Primary       Strategy::dispatch, result shown        /   this block
//!                 (cancel token fires -> Interrupted)
//!   ----------------------------------------------------------------------
//!   RestoreUrl    if restore_url_to       always
//!   Refresh       emit RefreshAll         always, also if the future is dropped
//! ```
//!
//! Every failure is reported through [`Interaction::show_error`] with its
//! message redacted.

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::error::{PipelineError, SyncError, SyncResult};
use crate::git::backend::RemoteCommands;
use crate::logging::LogContext;
use crate::sync::events::{Notification, Notifier};
use crate::sync::interact::{Interaction, ProgressGuard};
use crate::sync::model::{OperationConfig, PipelineResult};
use crate::sync::strategy::Strategy;
use crate::utility::url::redact;

/// One step of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    SetTracking,
    SetUrl,
    Primary,
    RestoreUrl,
    Refresh,
}

impl Step {
    /// Cleanup steps run even after an earlier failure.
    #[must_use]
    pub const fn is_cleanup(self) -> bool {
        matches!(self, Self::RestoreUrl | Self::Refresh)
    }
}

/// Steps `config` requires, in execution order.
#[must_use]
pub fn plan<S>(config: &OperationConfig<S>) -> Vec<Step> {
    let mut steps = Vec::with_capacity(5);
    if config.set_branch_as_tracking && config.branch.is_some() {
        steps.push(Step::SetTracking);
    }
    if config.new_remote_url.is_some() {
        steps.push(Step::SetUrl);
    }
    steps.push(Step::Primary);
    if config.restore_url_to.is_some() {
        steps.push(Step::RestoreUrl);
    }
    steps.push(Step::Refresh);
    steps
}

/// What happened to one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    /// Steps that were attempted, in order.
    pub executed: Vec<Step>,
    /// Steps that failed.
    pub failed: Vec<Step>,
    /// Result of the primary step, if it succeeded.
    pub result: Option<PipelineResult>,
}

impl PipelineReport {
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Outcome of a pipeline request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// No remote was given or selected.
    NoRemote,
    /// The confirmation dialog was dismissed.
    Aborted,
    /// The confirmation dialog failed.
    ConfirmFailed,
    Finished(PipelineReport),
}

impl PipelineOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        match self {
            Self::Aborted => true,
            Self::Finished(report) => report.failed.is_empty(),
            Self::NoRemote | Self::ConfirmFailed => false,
        }
    }
}

/// Runs push and pull operations against a set of collaborators.
pub struct Pipeline<'a> {
    commands: &'a dyn RemoteCommands,
    ui: &'a dyn Interaction,
    notifier: &'a Notifier,
    cancel: CancellationToken,
}

impl<'a> Pipeline<'a> {
    #[must_use]
    pub fn new(
        commands: &'a dyn RemoteCommands,
        ui: &'a dyn Interaction,
        notifier: &'a Notifier,
    ) -> Self {
        Self {
            commands,
            ui,
            notifier,
            cancel: CancellationToken::new(),
        }
    }

    /// Abandon the primary step once `token` is cancelled.
    ///
    /// The interrupted step counts as failed; cleanup steps still run.
    #[must_use]
    pub fn with_cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Confirm and run an operation against `remote`.
    ///
    /// `remote_url` seeds the confirmation dialog.
    pub async fn request<S: Strategy>(
        &self,
        remote: Option<&str>,
        remote_url: Option<String>,
    ) -> PipelineOutcome {
        let Some(remote) = remote.filter(|r| !r.is_empty()) else {
            let err = PipelineError::NoRemoteSelected {
                direction: S::DIRECTION,
            };
            self.report(S::OPERATION_FAILED, &SyncError::from(err));
            return PipelineOutcome::NoRemote;
        };

        let mut seed = OperationConfig::<S>::new(remote);
        seed.remote_url = remote_url;

        let config = match S::confirm(self.ui, seed).await {
            Ok(Some(config)) => config,
            Ok(None) => {
                debug!(remote, direction = %S::DIRECTION, "dismissed by user");
                return PipelineOutcome::Aborted;
            }
            Err(err) => {
                self.report(S::OPERATION_FAILED, &err);
                return PipelineOutcome::ConfirmFailed;
            }
        };

        PipelineOutcome::Finished(self.run(&config).await)
    }

    /// Run the steps for a confirmed `config`.
    pub async fn run<S: Strategy>(&self, config: &OperationConfig<S>) -> PipelineReport {
        let mut refresh = Some(self.notifier.emit_on_drop(Notification::RefreshAll));

        let mut ctx = LogContext::with_operation(S::DIRECTION.to_string());
        ctx.set_remote(config.remote.as_str());
        let prefix = ctx.prefix();

        let mut report = PipelineReport::default();
        let mut skipping = false;

        for step in plan(config) {
            if skipping && !step.is_cleanup() {
                debug!("{prefix}skipping {step:?}");
                continue;
            }
            report.executed.push(step);

            if step == Step::Refresh {
                if let Some(guard) = refresh.take() {
                    guard.fire();
                }
                continue;
            }

            debug!("{prefix}{step:?}");
            match self.run_step(step, config).await {
                Ok(Some(result)) => {
                    info!("{prefix}{} {}", config.strategy, result.status());
                    report.result = Some(result);
                }
                Ok(None) => {}
                Err(err) => {
                    let context = if step == Step::Primary {
                        S::PRIMARY_FAILED
                    } else {
                        S::OPERATION_FAILED
                    };
                    warn!("{prefix}{step:?} failed: {}", redact(&err.to_string()));
                    self.report(context, &err);
                    report.failed.push(step);
                    skipping = true;
                }
            }
        }

        report
    }

    async fn run_step<S: Strategy>(
        &self,
        step: Step,
        config: &OperationConfig<S>,
    ) -> SyncResult<Option<PipelineResult>> {
        let remote = config.remote.as_str();
        match step {
            Step::SetTracking => {
                if let Some(branch) = config.branch.as_deref() {
                    self.commands.set_upstream_branch(remote, branch).await?;
                }
                Ok(None)
            }
            Step::SetUrl => {
                if let Some(url) = config.new_remote_url.as_deref() {
                    self.commands.set_remote_url(remote, url).await?;
                }
                Ok(None)
            }
            Step::Primary => {
                let result = {
                    let _progress = ProgressGuard::start(
                        self.ui,
                        &format!("{} {remote} ({})", S::DIRECTION, config.strategy),
                    );
                    tokio::select! {
                        biased;
                        () = self.cancel.cancelled() => {
                            return Err(PipelineError::Interrupted {
                                direction: S::DIRECTION,
                            }
                            .into());
                        }
                        result = config.strategy.dispatch(self.commands, config) => result?,
                    }
                };
                self.show_result(&result);
                Ok(Some(result))
            }
            Step::RestoreUrl => {
                if let Some(url) = config.restore_url_to.as_deref() {
                    self.commands.set_remote_url(remote, url).await?;
                }
                Ok(None)
            }
            // Emitted by the runner's drop guard.
            Step::Refresh => Ok(None),
        }
    }

    fn show_result(&self, result: &PipelineResult) {
        match result {
            PipelineResult::Push(push) => self.ui.show_push_result(&push.redacted()),
            PipelineResult::Pull(output) => self.ui.show_output("Pull response", &redact(output)),
        }
    }

    fn report(&self, context: &str, err: &SyncError) {
        self.ui.show_error(context, &redact(&err.to_string()));
    }
}
