// git-remote-sync: Remote push/pull/fetch orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for git-remote-sync.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. grs.toml (cwd)
//! 3. --config
//! 4. GRS_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GRS_GLOBAL__OUTPUT_LOG_LEVEL=4  → global.output_log_level = 4
//! GRS_SYNC__PULL_STRATEGY=rebase  → sync.pull_strategy = "rebase"
//! GRS_PREFS__FILE=/tmp/p.json     → prefs.file = "/tmp/p.json"
//! ```
//!
//! # Example
//!
//! ```toml
//! [sync]
//! push_strategy = "DEFAULT"
//! pull_strategy = "AVOID_MERGING"
//! push_tags = true
//! ```

pub mod loader;
pub mod paths;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use types::{GitConfig, GlobalConfig, PrefsConfig, SyncConfig};

/// Local configuration file picked up from the working directory.
pub const LOCAL_CONFIG_FILE: &str = "grs.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "GRS";

/// Complete application configuration.
///
/// Unknown top-level keys are ignored so that unrelated `GRS_*` variables
/// (such as the password) do not break loading; unknown keys inside a
/// section are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Git executable.
    pub git: GitConfig,
    /// Preference store.
    pub prefs: PrefsConfig,
    /// Push and pull defaults.
    pub sync: SyncConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use git_remote_sync::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("grs.toml")
    ///     .with_env_prefix("GRS")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Fill in derived defaults.
    pub fn resolve(&mut self) {
        self.prefs.resolve();
    }

    /// Format configuration options for display, one `key = value` per line.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let fmt = |p: Option<&Path>| p.map_or_else(String::new, |p| p.display().to_string());

        let mut options = BTreeMap::new();
        options.insert(
            "global.output_log_level",
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level",
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert("global.log_file", fmt(self.global.log_file.as_deref()));
        options.insert("git.executable", fmt(self.git.executable.as_deref()));
        options.insert("prefs.file", fmt(self.prefs.file.as_deref()));
        options.insert("sync.push_strategy", self.sync.push_strategy.to_string());
        options.insert("sync.pull_strategy", self.sync.pull_strategy.to_string());
        options.insert("sync.push_tags", self.sync.push_tags.to_string());
        options.insert("sync.track_branch", self.sync.track_branch.to_string());

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
