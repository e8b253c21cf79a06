// git-remote-sync: Remote push/pull/fetch orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Console front end for the sync controller.
//!
//! ```text
//! confirm_push / confirm_pull
//!   seed config (remote, url)
//!     + command-line flags        --branch --strategy --[no-]tags --[no-]track
//!     + [sync] config defaults    push_strategy pull_strategy push_tags track_branch
//!     + current branch            when --branch is absent
//!     + credentials               new_remote_url = url with user:pw
//!                                 restore_url_to = original url
//!
//! ask_remote_details    create NAME URL, else prompt on stdin
//! confirm_delete        --yes, else prompt on stdin
//! progress_*            indicatif spinner on stderr
//! ```


use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use futures_util::future::BoxFuture;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use crate::cli::remote::{CredentialArgs, PullArgs, PushArgs};
use crate::config::types::SyncConfig;
use crate::error::{GitError, SyncError, SyncResult};
use crate::git::query;
use crate::git::types::PushResult;
use crate::sync::interact::Interaction;
use crate::sync::model::{OperationConfig, PullConfig, PushConfig};
use crate::utility::url::{inject_credentials, redact};

/// Pre-validated spinner style for remote operations.
fn spinner_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        })
        .clone()
}

/// Complete a push dialog from flags and config defaults.
///
/// # Errors
///
/// Returns an error if credentials are given but the remote URL is unknown
/// or does not accept credentials.
pub fn fill_push(
    mut config: PushConfig,
    args: &PushArgs,
    defaults: &SyncConfig,
    current_branch: Option<String>,
) -> SyncResult<PushConfig> {
    config.branch = args.branch.clone().or(config.branch).or(current_branch);
    config.strategy = args.strategy.unwrap_or(defaults.push_strategy);
    config.push_tags = switch(args.tags, args.no_tags, defaults.push_tags);
    config.set_branch_as_tracking = switch(args.track, args.no_track, defaults.track_branch);
    config.push_to_new = args.new_upstream;
    apply_credentials(&mut config, &args.credentials)?;
    Ok(config)
}

/// Complete a pull dialog from flags and config defaults.
///
/// # Errors
///
/// Returns an error if credentials are given but the remote URL is unknown
/// or does not accept credentials.
pub fn fill_pull(
    mut config: PullConfig,
    args: &PullArgs,
    defaults: &SyncConfig,
    current_branch: Option<String>,
) -> SyncResult<PullConfig> {
    config.branch = args.branch.clone().or(config.branch).or(current_branch);
    config.strategy = args.strategy.unwrap_or(defaults.pull_strategy);
    config.set_branch_as_tracking = switch(args.track, args.no_track, defaults.track_branch);
    apply_credentials(&mut config, &args.credentials)?;
    Ok(config)
}

/// `--flag` / `--no-flag` pair over a config default.
const fn switch(on: bool, off: bool, default: bool) -> bool {
    if on {
        true
    } else if off {
        false
    } else {
        default
    }
}

fn apply_credentials<S>(
    config: &mut OperationConfig<S>,
    credentials: &CredentialArgs,
) -> SyncResult<()> {
    let Some((username, password)) = credentials.pair() else {
        if credentials.password.is_some() {
            warn!(
                remote = %config.remote,
                "password given without --username, remote url left unchanged"
            );
        }
        return Ok(());
    };
    let url = config
        .remote_url
        .clone()
        .ok_or_else(|| GitError::RemoteNotFound {
            remote: config.remote.clone(),
        })?;
    config.new_remote_url = Some(inject_credentials(&url, username, password)?);
    config.restore_url_to = Some(url);
    Ok(())
}

fn prompt(question: &str) -> SyncResult<String> {
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{question}")?;
    stdout.flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

async fn ask(question: String) -> SyncResult<String> {
    tokio::task::spawn_blocking(move || prompt(&question))
        .await
        .map_err(|e| SyncError::Other(format!("prompt task failed: {e}").into_boxed_str()))?
}

/// Console implementation of [`Interaction`].
pub struct CliInteraction {
    repo: PathBuf,
    defaults: SyncConfig,
    push: Option<PushArgs>,
    pull: Option<PullArgs>,
    remote_details: Option<(String, String)>,
    assume_yes: bool,
    show_progress: bool,
    spinner: Mutex<Option<ProgressBar>>,
}

impl CliInteraction {
    #[must_use]
    pub fn new(repo: impl Into<PathBuf>, defaults: SyncConfig) -> Self {
        Self {
            repo: repo.into(),
            defaults,
            push: None,
            pull: None,
            remote_details: None,
            assume_yes: false,
            show_progress: true,
            spinner: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn with_push(mut self, args: PushArgs) -> Self {
        self.push = Some(args);
        self
    }

    #[must_use]
    pub fn with_pull(mut self, args: PullArgs) -> Self {
        self.pull = Some(args);
        self
    }

    /// Answer the create dialog without prompting.
    #[must_use]
    pub fn with_remote_details(mut self, name: String, url: String) -> Self {
        self.remote_details = Some((name, url));
        self
    }

    #[must_use]
    pub const fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    #[must_use]
    pub const fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    fn current_branch(&self) -> Option<String> {
        match query::current_branch(&self.repo) {
            Ok(branch) => branch,
            Err(err) => {
                debug!(error = %err, "current branch unavailable");
                None
            }
        }
    }
}

impl Interaction for CliInteraction {
    fn confirm_push(&self, config: PushConfig) -> BoxFuture<'_, SyncResult<Option<PushConfig>>> {
        Box::pin(async move {
            let Some(args) = &self.push else {
                return Ok(None);
            };
            fill_push(config, args, &self.defaults, self.current_branch()).map(Some)
        })
    }

    fn confirm_pull(&self, config: PullConfig) -> BoxFuture<'_, SyncResult<Option<PullConfig>>> {
        Box::pin(async move {
            let Some(args) = &self.pull else {
                return Ok(None);
            };
            fill_pull(config, args, &self.defaults, self.current_branch()).map(Some)
        })
    }

    fn ask_remote_details(&self) -> BoxFuture<'_, SyncResult<Option<(String, String)>>> {
        Box::pin(async move {
            if let Some(details) = &self.remote_details {
                return Ok(Some(details.clone()));
            }
            let name = ask("Remote name: ".to_string()).await?;
            if name.is_empty() {
                return Ok(None);
            }
            let url = ask("Remote URL: ".to_string()).await?;
            if url.is_empty() {
                return Ok(None);
            }
            Ok(Some((name, url)))
        })
    }

    fn confirm_delete<'a>(&'a self, name: &'a str) -> BoxFuture<'a, SyncResult<bool>> {
        Box::pin(async move {
            if self.assume_yes {
                return Ok(true);
            }
            let answer = ask(format!("Delete remote '{name}'? [y/N] ")).await?;
            Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
        })
    }

    fn show_error(&self, context: &str, message: &str) {
        eprintln!("{context}: {}", redact(message));
    }

    fn show_push_result(&self, result: &PushResult) {
        println!("{result}");
    }

    fn show_output(&self, title: &str, output: &str) {
        let output = output.trim();
        if output.is_empty() {
            println!("{title}: nothing to report");
        } else {
            println!("{title}:\n{output}");
        }
    }

    fn progress_start(&self, label: &str) {
        if !self.show_progress {
            return;
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(spinner_style());
        pb.set_message(label.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        if let Ok(mut spinner) = self.spinner.lock()
            && let Some(previous) = spinner.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn progress_finish(&self) {
        if let Ok(mut spinner) = self.spinner.lock()
            && let Some(pb) = spinner.take()
        {
            pb.finish_and_clear();
        }
    }
}
