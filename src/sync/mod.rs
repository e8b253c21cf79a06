// git-remote-sync: Remote push/pull/fetch orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote operation orchestrator.
//!
//! ```text
//!            Request
//!               |
//!               v
//!      ,------------------,      ,----------------,
//!      |    RemoteSync    |----->| RemoteSession  |--> PreferenceStore
//!      |   (controller)   |      | selection,     |    defaultRemotes
//!      '--+-----+------+--'      | actions        |
//!         |     |      |         '----------------'
//!         |     |      v
//!         |     |   fetch_all --------------------.
//!         |     v                                  |
//!         |  Pipeline --> Strategy::dispatch ------+--> RemoteCommands
//!         |     |                                  |
//!         v     v                                  |
//!     Interaction (dialogs, progress)     Notifier --> Notification
//! ```

pub mod controller;
pub mod events;
pub mod fetch;
pub mod interact;
pub mod model;
pub mod pipeline;
pub mod session;
pub mod strategy;

pub use controller::RemoteSync;
pub use events::{Notification, Notifier, Request};
pub use interact::Interaction;
pub use model::{
    ConnectionType, OperationConfig, PipelineResult, PullConfig, PullStrategy, PushConfig,
    PushStrategy,
};
pub use pipeline::{Pipeline, PipelineOutcome, PipelineReport, Step};
pub use session::{Actions, RemoteSession, select_default};

#[cfg(test)]
pub(crate) mod test_utils;
