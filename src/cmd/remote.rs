// git-remote-sync: Remote push/pull/fetch orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote commands.
//!
//! ```text
//! -C DIR / cwd --> repo_root --> ShellBackend ----.
//! prefs.file   --> JsonFileStore --> RemoteSession +--> RemoteSync
//!                  CliInteraction ----------------'       |
//!                                                         v
//!          refresh_remotes (Enabled) --> command --> Notifications logged
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, bail};
use flume::Receiver;
use tracing::{debug, warn};

use crate::cli::global::GlobalOptions;
use crate::cli::remote::{CreateArgs, DeleteArgs, FetchArgs, PullArgs, PushArgs, SelectArgs};
use crate::cmd::interact::CliInteraction;
use crate::config::Config;
use crate::error::{GitError, Result};
use crate::git::backend::ShellBackend;
use crate::git::query;
use crate::git::types::RemoteDescriptor;
use crate::logging::LogLevel;
use crate::prefs::JsonFileStore;
use crate::sync::model::ConnectionType;
use crate::sync::{Notification, Notifier, PipelineOutcome, RemoteSession, RemoteSync};
use crate::utility::url::redact;

/// Controller for one repository plus its notification stream.
struct Workspace {
    sync: RemoteSync,
    remotes: Vec<RemoteDescriptor>,
    notifications: Receiver<Notification>,
}

impl Workspace {
    /// Open the repository and load the remote listing.
    async fn open(root: &Path, config: &Config, ui: CliInteraction) -> Result<Self> {
        let commands = match &config.git.executable {
            Some(executable) => ShellBackend::with_executable(executable, root),
            None => ShellBackend::new(root)?,
        };
        let prefs = config.prefs.file()?;
        let store = JsonFileStore::open(prefs)
            .with_context(|| format!("opening preference file {}", prefs.display()))?;
        let session = RemoteSession::new(root.display().to_string(), Box::new(store));
        let (notifier, notifications) = Notifier::channel();

        let mut sync = RemoteSync::new(Arc::new(commands), Arc::new(ui), notifier, session);
        let remotes = sync.refresh_remotes().await;
        let workspace = Self {
            sync,
            remotes: remotes.clone().unwrap_or_default(),
            notifications,
        };
        workspace.drain();
        if remotes.is_none() {
            bail!("could not list remotes of {}", root.display());
        }
        Ok(workspace)
    }

    fn drain(&self) {
        for notification in self.notifications.try_iter() {
            debug!(?notification, "notification");
        }
    }
}

/// Cancel the running operation on Ctrl+C so the remote URL is restored.
fn interrupt_on_ctrl_c(sync: &RemoteSync) {
    let cancel_token = sync.cancel_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Received Ctrl+C, interrupting the remote operation...");
            cancel_token.cancel();
        }
    });
}

fn resolve_root(global: &GlobalOptions) -> Result<PathBuf> {
    let start = match &global.repo {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("reading the working directory")?,
    };
    if !query::is_git_repo(&start) {
        return Err(GitError::RepoNotFound {
            path: start.display().to_string(),
        }
        .into());
    }
    Ok(query::repo_root(&start)?)
}

fn interaction(root: &Path, config: &Config) -> CliInteraction {
    CliInteraction::new(root, config.sync.clone())
        .show_progress(config.global.output_log_level != LogLevel::SILENT)
}

fn outcome_result(outcome: &PipelineOutcome, operation: &str) -> Result<()> {
    match outcome {
        PipelineOutcome::Aborted => {
            println!("{operation} cancelled");
            Ok(())
        }
        outcome if outcome.is_success() => Ok(()),
        _ => bail!("{operation} failed"),
    }
}

fn format_remotes(remotes: &[RemoteDescriptor], selected: Option<&str>) -> Vec<String> {
    let width = remotes.iter().map(|r| r.name.len()).max().unwrap_or(0);
    remotes
        .iter()
        .map(|remote| {
            let marker = if selected == Some(remote.name.as_str()) {
                '*'
            } else {
                ' '
            };
            format!(
                "{marker} {:<width$}  {}",
                remote.name,
                redact(&remote.url)
            )
        })
        .collect()
}

/// List remotes, marking the selected one.
///
/// # Errors
///
/// Returns an error if the repository or the remote listing is unavailable.
pub async fn run_remotes_command(global: &GlobalOptions, config: &Config) -> Result<()> {
    let root = resolve_root(global)?;
    let workspace = Workspace::open(&root, config, interaction(&root, config)).await?;

    if workspace.remotes.is_empty() {
        println!("No remotes configured");
    }
    for line in format_remotes(&workspace.remotes, workspace.sync.session().selected()) {
        println!("{line}");
    }
    Ok(())
}

/// Select a remote, or clear the selection.
///
/// # Errors
///
/// Returns an error if the remote does not exist.
pub async fn run_select_command(
    args: &SelectArgs,
    global: &GlobalOptions,
    config: &Config,
) -> Result<()> {
    let root = resolve_root(global)?;
    let mut workspace = Workspace::open(&root, config, interaction(&root, config)).await?;

    let name = if args.clear {
        None
    } else {
        args.name.as_deref()
    };
    if let Some(name) = name {
        if !workspace.remotes.iter().any(|r| r.name == name) {
            return Err(GitError::RemoteNotFound {
                remote: name.to_string(),
            }
            .into());
        }
    }

    let connection = ConnectionType::from(args.connection);
    workspace.sync.pick_remote(name, connection);
    workspace.drain();

    match workspace.sync.session().selected() {
        Some(selected) => println!("Selected {selected} ({connection:?})"),
        None => println!("Selection cleared"),
    }
    Ok(())
}

/// Add a remote.
///
/// # Errors
///
/// Returns an error if the remote could not be created.
pub async fn run_create_command(
    args: &CreateArgs,
    global: &GlobalOptions,
    config: &Config,
) -> Result<()> {
    let root = resolve_root(global)?;
    let mut ui = interaction(&root, config);
    if let (Some(name), Some(url)) = (&args.name, &args.url) {
        ui = ui.with_remote_details(name.clone(), url.clone());
    }
    let mut workspace = Workspace::open(&root, config, ui).await?;

    let created = workspace.sync.create_remote().await;
    workspace.drain();
    if !created {
        bail!("no remote created");
    }
    Ok(())
}

/// Remove a remote.
///
/// # Errors
///
/// Returns an error if the remote was not deleted.
pub async fn run_delete_command(
    args: &DeleteArgs,
    global: &GlobalOptions,
    config: &Config,
) -> Result<()> {
    let root = resolve_root(global)?;
    let ui = interaction(&root, config).assume_yes(args.yes);
    let mut workspace = Workspace::open(&root, config, ui).await?;

    let deleted = workspace.sync.delete_remote(&args.name).await;
    workspace.drain();
    if !deleted {
        bail!("remote '{}' was not deleted", args.name);
    }
    Ok(())
}

/// Push to a remote.
///
/// # Errors
///
/// Returns an error if no remote is selected or the push failed.
pub async fn run_push_command(
    args: &PushArgs,
    global: &GlobalOptions,
    config: &Config,
) -> Result<()> {
    let root = resolve_root(global)?;
    let ui = interaction(&root, config).with_push(args.clone());
    let workspace = Workspace::open(&root, config, ui).await?;
    interrupt_on_ctrl_c(&workspace.sync);

    let outcome = workspace.sync.push(args.remote.as_deref()).await;
    workspace.drain();
    outcome_result(&outcome, "push")
}

/// Pull from a remote.
///
/// # Errors
///
/// Returns an error if no remote is selected or the pull failed.
pub async fn run_pull_command(
    args: &PullArgs,
    global: &GlobalOptions,
    config: &Config,
) -> Result<()> {
    let root = resolve_root(global)?;
    let ui = interaction(&root, config).with_pull(args.clone());
    let workspace = Workspace::open(&root, config, ui).await?;
    interrupt_on_ctrl_c(&workspace.sync);

    let outcome = workspace.sync.pull(args.remote.as_deref()).await;
    workspace.drain();
    outcome_result(&outcome, "pull")
}

/// Fetch all remotes.
///
/// # Errors
///
/// Returns an error if the fetch failed.
pub async fn run_fetch_command(
    args: &FetchArgs,
    global: &GlobalOptions,
    config: &Config,
) -> Result<()> {
    let root = resolve_root(global)?;
    let mut ui = interaction(&root, config);
    if args.silent {
        ui = ui.show_progress(false);
    }
    let workspace = Workspace::open(&root, config, ui).await?;

    let fetched = workspace.sync.fetch_all(args.silent).await;
    workspace.drain();
    if !fetched {
        bail!("fetch failed");
    }
    Ok(())
}
