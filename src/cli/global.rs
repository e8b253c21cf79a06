// git-remote-sync: Remote push/pull/fetch orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional config files (can repeat)
//! -C DIR            ← Repository to operate on (default: cwd)
//! --log-level N     ← Console verbosity (0-6)
//! --file-log-level  ← File verbosity (defaults to --log-level)
//! --log-file FILE   ← global.log_file override
//! --prefs FILE      ← prefs.file override
//!
//! Precedence: CLI flags > env > --config > grs.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::loader::ConfigLoader;
use crate::error::Result;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Run as if started in DIR.
    #[arg(short = 'C', value_name = "DIR")]
    pub repo: Option<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Preference file holding the remembered remotes.
    #[arg(long = "prefs", value_name = "FILE")]
    pub prefs: Option<PathBuf>,

    /// Disables loading `grs.toml` from the current directory.
    #[arg(long = "no-local-config")]
    pub no_local_config: bool,
}

impl GlobalOptions {
    /// Converts command-line options to `(key, value)` configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(&'static str, String)> {
        let mut overrides = Vec::new();

        if let Some(level) = self.log_level {
            overrides.push(("global.output_log_level", level.to_string()));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(("global.file_log_level", level.to_string()));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(("global.log_file", path.display().to_string()));
        }

        if let Some(ref path) = self.prefs {
            overrides.push(("prefs.file", path.display().to_string()));
        }

        overrides
    }

    /// Apply the overrides to `loader`.
    ///
    /// # Errors
    ///
    /// Returns an error if an override key is rejected by the loader.
    pub fn apply_overrides(&self, mut loader: ConfigLoader) -> Result<ConfigLoader> {
        for (key, value) in self.to_config_overrides() {
            loader = loader.set(key, value)?;
        }
        Ok(loader)
    }
}
