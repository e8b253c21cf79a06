// git-remote-sync: Remote push/pull/fetch orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared test doubles for the orchestrator.
//!
//! - `MockCommands` records every remote command and fails or hangs on demand.
//! - `ScriptedUi` answers dialogs from a script and records what it was shown.
//! - `capture_logs` runs a future while capturing tracing output.

use std::collections::HashSet;
use std::future::{Future, ready};
use std::io::Write;
use std::sync::{Arc, Mutex};

use futures_util::future::{BoxFuture, pending};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use crate::error::{GitError, SyncError, SyncResult};
use crate::git::backend::RemoteCommands;
use crate::git::types::{MergeOptions, PushFlag, PushResult, RemoteDescriptor};
use crate::sync::interact::Interaction;
use crate::sync::model::{PullConfig, PushConfig};

// =============================================================================
// MockCommands
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    ListRemotes,
    CreateRemote { name: String, url: String },
    DeleteRemote(String),
    SetRemoteUrl { remote: String, url: String },
    SetUpstream { remote: String, branch: String },
    Push { remote: String, branch: Option<String>, extra: Vec<String> },
    PushForced { remote: String, branch: Option<String> },
    PushToNewUpstream { remote: String, branch: Option<String> },
    DeleteRemoteBranch { remote: String, branch: String },
    FetchRemote(String),
    FetchAll,
    Merge { remote: String, branch: Option<String>, options: MergeOptions },
    Rebase { remote: String, branch: Option<String> },
    Reset { remote: String, branch: Option<String> },
}

impl Call {
    pub(crate) const fn name(&self) -> &'static str {
        match self {
            Self::ListRemotes => "list_remotes",
            Self::CreateRemote { .. } => "create_remote",
            Self::DeleteRemote(_) => "delete_remote",
            Self::SetRemoteUrl { .. } => "set_remote_url",
            Self::SetUpstream { .. } => "set_upstream_branch",
            Self::Push { .. } => "push",
            Self::PushForced { .. } => "push_forced",
            Self::PushToNewUpstream { .. } => "push_to_new_upstream",
            Self::DeleteRemoteBranch { .. } => "delete_remote_branch",
            Self::FetchRemote(_) => "fetch_remote",
            Self::FetchAll => "fetch_all_remotes",
            Self::Merge { .. } => "merge_remote",
            Self::Rebase { .. } => "rebase_remote",
            Self::Reset { .. } => "reset_remote",
        }
    }
}

/// In-memory `RemoteCommands` that records calls.
#[derive(Default)]
pub(crate) struct MockCommands {
    calls: Mutex<Vec<Call>>,
    remotes: Mutex<Vec<RemoteDescriptor>>,
    failing: Mutex<HashSet<&'static str>>,
    hanging: Mutex<HashSet<&'static str>>,
}

impl MockCommands {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_remotes(remotes: &[(&str, &str)]) -> Self {
        let mock = Self::new();
        *mock.remotes.lock().expect("remotes lock") = remotes
            .iter()
            .map(|(name, url)| RemoteDescriptor::new(*name, *url))
            .collect();
        mock
    }

    /// Make every call named `name` fail.
    pub(crate) fn fail_on(self, name: &'static str) -> Self {
        self.failing.lock().expect("failing lock").insert(name);
        self
    }

    /// Make every call named `name` never complete (`push` only).
    pub(crate) fn hang_on(self, name: &'static str) -> Self {
        self.hanging.lock().expect("hanging lock").insert(name);
        self
    }

    fn hangs(&self, name: &str) -> bool {
        self.hanging.lock().expect("hanging lock").contains(name)
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub(crate) fn call_names(&self) -> Vec<&'static str> {
        self.calls().iter().map(Call::name).collect()
    }

    pub(crate) fn remote_url(&self, name: &str) -> Option<String> {
        self.remotes
            .lock()
            .expect("remotes lock")
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.url.clone())
    }

    fn record(&self, call: Call) -> SyncResult<()> {
        let name = call.name();
        self.calls.lock().expect("calls lock").push(call);
        if self.failing.lock().expect("failing lock").contains(name) {
            return Err(GitError::CommandFailed {
                command: format!("git {name}"),
                message: "injected failure".to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn push_result(&self, remote: &str, branch: Option<&str>, flag: PushFlag) -> PushResult {
        let branch = branch.unwrap_or("main");
        PushResult {
            remote_url: self.remote_url(remote),
            flag: Some(flag),
            from: format!("refs/heads/{branch}"),
            to: format!("refs/heads/{branch}"),
            summary: "1111111..2222222".to_string(),
            status: "Done".to_string(),
        }
    }
}

fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

impl RemoteCommands for MockCommands {
    fn list_remotes(&self) -> BoxFuture<'_, SyncResult<Vec<RemoteDescriptor>>> {
        let result = self
            .record(Call::ListRemotes)
            .map(|()| self.remotes.lock().expect("remotes lock").clone());
        Box::pin(ready(result))
    }

    fn create_remote<'a>(&'a self, name: &'a str, url: &'a str) -> BoxFuture<'a, SyncResult<()>> {
        let result = self
            .record(Call::CreateRemote {
                name: name.to_string(),
                url: url.to_string(),
            })
            .map(|()| {
                self.remotes
                    .lock()
                    .expect("remotes lock")
                    .push(RemoteDescriptor::new(name, url));
            });
        Box::pin(ready(result))
    }

    fn delete_remote<'a>(&'a self, name: &'a str) -> BoxFuture<'a, SyncResult<()>> {
        let result = self.record(Call::DeleteRemote(name.to_string())).map(|()| {
            self.remotes
                .lock()
                .expect("remotes lock")
                .retain(|r| r.name != name);
        });
        Box::pin(ready(result))
    }

    fn set_remote_url<'a>(&'a self, name: &'a str, url: &'a str) -> BoxFuture<'a, SyncResult<()>> {
        let result = self
            .record(Call::SetRemoteUrl {
                remote: name.to_string(),
                url: url.to_string(),
            })
            .map(|()| {
                let mut remotes = self.remotes.lock().expect("remotes lock");
                if let Some(remote) = remotes.iter_mut().find(|r| r.name == name) {
                    remote.url = url.to_string();
                }
            });
        Box::pin(ready(result))
    }

    fn set_upstream_branch<'a>(
        &'a self,
        remote: &'a str,
        branch: &'a str,
    ) -> BoxFuture<'a, SyncResult<()>> {
        Box::pin(ready(self.record(Call::SetUpstream {
            remote: remote.to_string(),
            branch: branch.to_string(),
        })))
    }

    fn push<'a>(
        &'a self,
        remote: &'a str,
        branch: Option<&'a str>,
        extra_args: &'a [&'a str],
    ) -> BoxFuture<'a, SyncResult<PushResult>> {
        let result = self
            .record(Call::Push {
                remote: remote.to_string(),
                branch: owned(branch),
                extra: extra_args.iter().map(ToString::to_string).collect(),
            })
            .map(|()| self.push_result(remote, branch, PushFlag::FastForward));
        if self.hangs("push") {
            return Box::pin(pending());
        }
        Box::pin(ready(result))
    }

    fn push_forced<'a>(
        &'a self,
        remote: &'a str,
        branch: Option<&'a str>,
    ) -> BoxFuture<'a, SyncResult<PushResult>> {
        let result = self
            .record(Call::PushForced {
                remote: remote.to_string(),
                branch: owned(branch),
            })
            .map(|()| self.push_result(remote, branch, PushFlag::Forced));
        Box::pin(ready(result))
    }

    fn push_to_new_upstream<'a>(
        &'a self,
        remote: &'a str,
        branch: Option<&'a str>,
    ) -> BoxFuture<'a, SyncResult<PushResult>> {
        let result = self
            .record(Call::PushToNewUpstream {
                remote: remote.to_string(),
                branch: owned(branch),
            })
            .map(|()| self.push_result(remote, branch, PushFlag::NewRef));
        Box::pin(ready(result))
    }

    fn delete_remote_branch<'a>(
        &'a self,
        remote: &'a str,
        branch: &'a str,
    ) -> BoxFuture<'a, SyncResult<PushResult>> {
        let result = self
            .record(Call::DeleteRemoteBranch {
                remote: remote.to_string(),
                branch: branch.to_string(),
            })
            .map(|()| self.push_result(remote, Some(branch), PushFlag::Deleted));
        Box::pin(ready(result))
    }

    fn fetch_remote<'a>(&'a self, remote: &'a str) -> BoxFuture<'a, SyncResult<String>> {
        let result = self
            .record(Call::FetchRemote(remote.to_string()))
            .map(|()| format!("From {remote}"));
        Box::pin(ready(result))
    }

    fn fetch_all_remotes(&self) -> BoxFuture<'_, SyncResult<String>> {
        let result = self
            .record(Call::FetchAll)
            .map(|()| "Fetching all remotes".to_string());
        Box::pin(ready(result))
    }

    fn merge_remote<'a>(
        &'a self,
        remote: &'a str,
        branch: Option<&'a str>,
        options: MergeOptions,
    ) -> BoxFuture<'a, SyncResult<String>> {
        let result = self
            .record(Call::Merge {
                remote: remote.to_string(),
                branch: owned(branch),
                options,
            })
            .map(|()| "Fast-forward".to_string());
        Box::pin(ready(result))
    }

    fn rebase_remote<'a>(
        &'a self,
        remote: &'a str,
        branch: Option<&'a str>,
    ) -> BoxFuture<'a, SyncResult<String>> {
        let result = self
            .record(Call::Rebase {
                remote: remote.to_string(),
                branch: owned(branch),
            })
            .map(|()| "Successfully rebased".to_string());
        Box::pin(ready(result))
    }

    fn reset_remote<'a>(
        &'a self,
        remote: &'a str,
        branch: Option<&'a str>,
    ) -> BoxFuture<'a, SyncResult<String>> {
        let result = self
            .record(Call::Reset {
                remote: remote.to_string(),
                branch: owned(branch),
            })
            .map(|()| "HEAD is now at 2222222".to_string());
        Box::pin(ready(result))
    }
}

// =============================================================================
// ScriptedUi
// =============================================================================

/// Scripted answer to a confirmation dialog.
#[derive(Debug, Clone, Default)]
pub(crate) enum Reply<T> {
    Accept(T),
    #[default]
    Dismiss,
    Fail,
}

impl<T: Clone> Reply<T> {
    fn answer(&self) -> SyncResult<Option<T>> {
        match self {
            Self::Accept(value) => Ok(Some(value.clone())),
            Self::Dismiss => Ok(None),
            Self::Fail => Err(SyncError::Other("dialog failed".into())),
        }
    }
}

/// Something the orchestrator showed or asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum UiEvent {
    PushSeed(PushConfig),
    PullSeed(PullConfig),
    AskRemote,
    AskDelete(String),
    Error { context: String, message: String },
    PushResult(PushResult),
    Output { title: String, output: String },
    ProgressStart(String),
    ProgressFinish,
}

#[derive(Default)]
pub(crate) struct ScriptedUi {
    push: Reply<PushConfig>,
    pull: Reply<PullConfig>,
    remote_details: Reply<(String, String)>,
    delete: bool,
    events: Mutex<Vec<UiEvent>>,
}

impl ScriptedUi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_push(mut self, reply: Reply<PushConfig>) -> Self {
        self.push = reply;
        self
    }

    pub(crate) fn with_pull(mut self, reply: Reply<PullConfig>) -> Self {
        self.pull = reply;
        self
    }

    pub(crate) fn with_remote_details(mut self, reply: Reply<(String, String)>) -> Self {
        self.remote_details = reply;
        self
    }

    pub(crate) const fn with_delete_answer(mut self, answer: bool) -> Self {
        self.delete = answer;
        self
    }

    pub(crate) fn events(&self) -> Vec<UiEvent> {
        self.events.lock().expect("events lock").clone()
    }

    /// `(context, message)` of every reported error.
    pub(crate) fn errors(&self) -> Vec<(String, String)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                UiEvent::Error { context, message } => Some((context, message)),
                _ => None,
            })
            .collect()
    }

    fn log(&self, event: UiEvent) {
        self.events.lock().expect("events lock").push(event);
    }
}

impl Interaction for ScriptedUi {
    fn confirm_push(&self, config: PushConfig) -> BoxFuture<'_, SyncResult<Option<PushConfig>>> {
        self.log(UiEvent::PushSeed(config));
        Box::pin(ready(self.push.answer()))
    }

    fn confirm_pull(&self, config: PullConfig) -> BoxFuture<'_, SyncResult<Option<PullConfig>>> {
        self.log(UiEvent::PullSeed(config));
        Box::pin(ready(self.pull.answer()))
    }

    fn ask_remote_details(&self) -> BoxFuture<'_, SyncResult<Option<(String, String)>>> {
        self.log(UiEvent::AskRemote);
        Box::pin(ready(self.remote_details.answer()))
    }

    fn confirm_delete<'a>(&'a self, name: &'a str) -> BoxFuture<'a, SyncResult<bool>> {
        self.log(UiEvent::AskDelete(name.to_string()));
        Box::pin(ready(Ok(self.delete)))
    }

    fn show_error(&self, context: &str, message: &str) {
        self.log(UiEvent::Error {
            context: context.to_string(),
            message: message.to_string(),
        });
    }

    fn show_push_result(&self, result: &PushResult) {
        self.log(UiEvent::PushResult(result.clone()));
    }

    fn show_output(&self, title: &str, output: &str) {
        self.log(UiEvent::Output {
            title: title.to_string(),
            output: output.to_string(),
        });
    }

    fn progress_start(&self, label: &str) {
        self.log(UiEvent::ProgressStart(label.to_string()));
    }

    fn progress_finish(&self) {
        self.log(UiEvent::ProgressFinish);
    }
}

// =============================================================================
// Log capture
// =============================================================================

#[derive(Clone)]
struct BufferWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer
            .lock()
            .map_err(|_| std::io::Error::other("buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[derive(Clone)]
struct BufferMakeWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl<'a> MakeWriter<'a> for BufferMakeWriter {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        BufferWriter {
            buffer: self.buffer.clone(),
        }
    }
}

/// Runs `f` while capturing tracing output at `WARN` and above.
pub(crate) async fn capture_warnings<F, Fut, T>(f: F) -> (T, String)
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_writer(BufferMakeWriter {
            buffer: buffer.clone(),
        })
        .with_max_level(Level::WARN)
        .with_ansi(false)
        .with_target(false)
        .finish();

    let value = {
        let _guard = tracing::subscriber::set_default(subscriber);
        f().await
    };

    let logs = String::from_utf8_lossy(&buffer.lock().expect("log buffer lock")).to_string();
    (value, logs)
}
