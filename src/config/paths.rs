// git-remote-sync: Remote push/pull/fetch orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path resolution for the preference file.
//!
//! ```text
//! prefs.file set          --> as given
//! $XDG_CONFIG_HOME set    --> $XDG_CONFIG_HOME/grs/prefs.json
//! $HOME set               --> $HOME/.config/grs/prefs.json
//! otherwise               --> ConfigError::MissingKey [prefs] file
//! ```

use std::path::{Path, PathBuf};

use super::types::PrefsConfig;
use crate::error::{ConfigError, Result};

const APP_DIR: &str = "grs";
const PREFS_FILE: &str = "prefs.json";

/// Default preference file derived from the environment.
#[must_use]
pub fn default_prefs_file() -> Option<PathBuf> {
    let from_var = |name: &str| {
        std::env::var_os(name)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    };

    from_var("XDG_CONFIG_HOME")
        .or_else(|| from_var("HOME").map(|home| home.join(".config")))
        .map(|dir| dir.join(APP_DIR).join(PREFS_FILE))
}

impl PrefsConfig {
    /// Fill in the default file location if none is configured.
    pub fn resolve(&mut self) {
        if self.file.is_none() {
            self.file = default_prefs_file();
        }
    }

    /// Resolved preference file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if no file is configured and no
    /// config directory can be derived from the environment.
    pub fn file(&self) -> Result<&Path> {
        self.file.as_deref().ok_or_else(|| {
            ConfigError::MissingKey {
                section: "prefs".to_string(),
                key: "file".to_string(),
            }
            .into()
        })
    }
}
