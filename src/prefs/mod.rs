// git-remote-sync: Remote push/pull/fetch orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Persistent key-value preferences.
//!
//! ```text
//! PreferenceStore (trait)
//!   |-- JsonFileStore   one JSON object on disk, atomic rewrite on persist
//!   '-- MemoryStore     process-local, for tests and dry runs
//! ```
//!
//! Values are plain [`serde_json::Value`]s; typed access lives with the
//! caller (see [`crate::sync::session`]).

use serde_json::{Map, Value};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{PrefsError, SyncResult};

/// Key-value store consumed by the remote session.
pub trait PreferenceStore: Send + Sync {
    /// Stored value for `key`, if any.
    ///
    /// # Errors
    ///
    /// Backend-specific read failures.
    fn get(&self, key: &str) -> SyncResult<Option<Value>>;

    /// Store `value` under `key` and make it durable.
    ///
    /// # Errors
    ///
    /// Backend-specific write failures.
    fn persist(&mut self, key: &str, value: Value) -> SyncResult<()>;
}

/// Preferences kept in a single JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: Map<String, Value>,
}

impl JsonFileStore {
    /// Load the store at `path`. A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns `PrefsError::Read` if the file exists but cannot be read,
    /// `PrefsError::Malformed` if it is not a JSON object.
    pub fn open(path: impl Into<PathBuf>) -> SyncResult<Self> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => Map::new(),
            Ok(text) => serde_json::from_str(&text).map_err(|source| PrefsError::Malformed {
                key: path.display().to_string(),
                source,
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Map::new(),
            Err(source) => {
                return Err(PrefsError::Read {
                    path: path.display().to_string(),
                    source,
                }
                .into());
            }
        };

        debug!(path = %path.display(), keys = values.len(), "preferences loaded");
        Ok(Self { path, values })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_file(&self) -> io::Result<()> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let text = serde_json::to_string_pretty(&self.values).map_err(io::Error::other)?;
        let mut file = tempfile::NamedTempFile::new_in(parent)?;
        file.write_all(text.as_bytes())?;
        file.write_all(b"\n")?;
        file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> SyncResult<Option<Value>> {
        Ok(self.values.get(key).cloned())
    }

    fn persist(&mut self, key: &str, value: Value) -> SyncResult<()> {
        self.values.insert(key.to_string(), value);
        self.write_file().map_err(|source| PrefsError::Write {
            path: self.path.display().to_string(),
            source,
        })?;
        debug!(key, path = %self.path.display(), "preference persisted");
        Ok(())
    }
}

/// Preferences that live only as long as the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: Map<String, Value>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> SyncResult<Option<Value>> {
        Ok(self.values.get(key).cloned())
    }

    fn persist(&mut self, key: &str, value: Value) -> SyncResult<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests;
