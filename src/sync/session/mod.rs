// git-remote-sync: Remote push/pull/fetch orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote selection for one repository.
//!
//! ```text
//!   listing --> select_default(all, stored) --> Option<name>
//!                         ^
//!   prefs["defaultRemotes"][root]
//!
//!   select(name, Standard)  --> persist default, PUSH | PULL
//!   select(name, Alternate) --> PUSH only, prefs untouched
//!   select(None, _)         --> no PUSH, no PULL
//! ```
//!
//! A stored default that no longer names a listed remote is never
//! surfaced; the first listed remote is used instead.

use bitflags::bitflags;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::error::{PrefsError, SyncResult};
use crate::git::types::RemoteDescriptor;
use crate::prefs::PreferenceStore;
use crate::sync::model::ConnectionType;

/// Preference key of the repository root to default remote map.
pub const DEFAULT_REMOTES_KEY: &str = "defaultRemotes";

/// Repository root to preferred remote name.
pub type DefaultRemotes = BTreeMap<String, String>;

bitflags! {
    /// Remote actions currently available to the user.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Actions: u8 {
        const PULL = 0x01;
        const PUSH = 0x02;
        const FETCH = 0x04;
    }
}

/// Pick the remote to pre-select.
///
/// Returns `stored` if it names a listed remote, else the first listed
/// remote, else `None`.
#[must_use]
pub fn select_default(all: &[RemoteDescriptor], stored: Option<&str>) -> Option<String> {
    stored
        .and_then(|name| all.iter().find(|remote| remote.name == name))
        .or_else(|| all.first())
        .map(|remote| remote.name.clone())
}

/// Read the default remote map. A malformed entry is treated as empty.
///
/// # Errors
///
/// Propagates store read failures.
pub fn load_default_remotes(store: &dyn PreferenceStore) -> SyncResult<DefaultRemotes> {
    let Some(value) = store.get(DEFAULT_REMOTES_KEY)? else {
        return Ok(DefaultRemotes::new());
    };
    match serde_json::from_value(value) {
        Ok(map) => Ok(map),
        Err(source) => {
            let err = PrefsError::Malformed {
                key: DEFAULT_REMOTES_KEY.to_string(),
                source,
            };
            warn!(error = %err, "ignoring stored default remotes");
            Ok(DefaultRemotes::new())
        }
    }
}

/// Remote selection state bound to a repository root.
pub struct RemoteSession {
    root: String,
    store: Box<dyn PreferenceStore>,
    selected: Option<String>,
    connection: ConnectionType,
    actions: Actions,
}

impl RemoteSession {
    /// Session for the repository at `root` with nothing selected.
    #[must_use]
    pub fn new(root: impl Into<String>, store: Box<dyn PreferenceStore>) -> Self {
        Self {
            root: root.into(),
            store,
            selected: None,
            connection: ConnectionType::Standard,
            actions: Actions::empty(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub const fn connection(&self) -> ConnectionType {
        self.connection
    }

    #[must_use]
    pub const fn actions(&self) -> Actions {
        self.actions
    }

    #[must_use]
    pub const fn is_enabled(&self, action: Actions) -> bool {
        self.actions.contains(action)
    }

    #[must_use]
    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }

    /// Default remote for this root among `remotes`.
    ///
    /// # Errors
    ///
    /// Propagates store read failures.
    pub fn default_remote(&self, remotes: &[RemoteDescriptor]) -> SyncResult<Option<String>> {
        let defaults = load_default_remotes(self.store.as_ref())?;
        Ok(select_default(remotes, defaults.get(&self.root).map(String::as_str)))
    }

    /// Select `name` reached through `connection`, or clear with `None`.
    ///
    /// The in-memory selection is updated even if persisting the default
    /// fails.
    ///
    /// # Errors
    ///
    /// Propagates store failures while remembering a `Standard` default.
    pub fn select(&mut self, name: Option<&str>, connection: ConnectionType) -> SyncResult<()> {
        let Some(name) = name.filter(|n| !n.is_empty()) else {
            self.clear();
            return Ok(());
        };

        self.selected = Some(name.to_string());
        self.connection = connection;
        self.actions.insert(Actions::PUSH);
        self.actions
            .set(Actions::PULL, connection == ConnectionType::Standard);
        debug!(remote = name, ?connection, root = %self.root, "remote selected");

        if connection == ConnectionType::Standard {
            self.remember_default(name)?;
        }
        Ok(())
    }

    /// Drop the selection; pull and push become unavailable.
    pub fn clear(&mut self) {
        self.selected = None;
        self.actions.remove(Actions::PULL | Actions::PUSH);
    }

    /// Update availability and selection from a fresh listing.
    ///
    /// Returns the remote that is now selected.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub fn apply_listing(&mut self, remotes: &[RemoteDescriptor]) -> SyncResult<Option<String>> {
        if remotes.is_empty() {
            self.clear();
            self.actions.remove(Actions::FETCH);
            return Ok(None);
        }

        self.actions.insert(Actions::FETCH);
        let default = self.default_remote(remotes)?;
        self.select(default.as_deref(), ConnectionType::Standard)?;
        Ok(default)
    }

    fn remember_default(&mut self, name: &str) -> SyncResult<()> {
        let mut defaults = load_default_remotes(self.store.as_ref())?;
        if defaults.get(&self.root).is_some_and(|stored| stored == name) {
            return Ok(());
        }
        defaults.insert(self.root.clone(), name.to_string());
        let value = Value::Object(
            defaults
                .into_iter()
                .map(|(root, remote)| (root, Value::String(remote)))
                .collect(),
        );
        self.store.persist(DEFAULT_REMOTES_KEY, value)
    }
}
