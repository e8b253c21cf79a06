// git-remote-sync: Remote push/pull/fetch orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Values exchanged with the command layer.
//!
//! ```text
//! RemoteDescriptor  name, url, deletable (origin is protected)
//! PushResult        parsed `git push --porcelain` output
//! MergeOptions      ff_only / no_commit
//! ```

use serde::Serialize;
use std::fmt;

use crate::utility::url::redact;

/// Remote that can never be deleted from the picker.
pub const PROTECTED_REMOTE: &str = "origin";

/// One configured remote as reported by the remote listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteDescriptor {
    pub name: String,
    pub url: String,
    pub deletable: bool,
}

impl RemoteDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        let name = name.into();
        let deletable = name != PROTECTED_REMOTE;
        Self {
            name,
            url: url.into(),
            deletable,
        }
    }
}

/// Ref status flag from `git push --porcelain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PushFlag {
    /// ` ` successfully pushed fast-forward.
    FastForward,
    /// `+` successful forced update.
    Forced,
    /// `-` successfully deleted ref.
    Deleted,
    /// `*` successfully pushed new ref.
    NewRef,
    /// `!` ref was rejected or failed to push.
    Rejected,
    /// `=` ref was up to date.
    UpToDate,
}

impl PushFlag {
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            ' ' => Some(Self::FastForward),
            '+' => Some(Self::Forced),
            '-' => Some(Self::Deleted),
            '*' => Some(Self::NewRef),
            '!' => Some(Self::Rejected),
            '=' => Some(Self::UpToDate),
            _ => None,
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::FastForward => "Successfully pushed fast-forward",
            Self::Forced => "Successful forced update",
            Self::Deleted => "Successfully deleted ref",
            Self::NewRef => "Successfully pushed new ref",
            Self::Rejected => "Ref was rejected or failed to push",
            Self::UpToDate => "Ref was up to date and did not need pushing",
        }
    }
}

/// Outcome of a push as reported by git.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PushResult {
    /// URL from the `To <url>` line.
    pub remote_url: Option<String>,
    pub flag: Option<PushFlag>,
    /// Local ref.
    pub from: String,
    /// Remote ref.
    pub to: String,
    /// Change summary (`abc..def`, `[new branch]`, ...).
    pub summary: String,
    /// Final status line (`Done`).
    pub status: String,
}

impl PushResult {
    /// Parse the stdout of `git push --porcelain`.
    ///
    /// Only the first ref line is kept; the pipeline pushes one ref at a time.
    #[must_use]
    pub fn from_porcelain(output: &str) -> Self {
        let mut result = Self::default();
        let mut seen_ref = false;
        let mut done = false;

        for line in output.lines() {
            if let Some(url) = line.strip_prefix("To ") {
                result.remote_url = Some(url.trim().to_string());
                continue;
            }
            if let Some((flag, fields)) = parse_ref_line(line) {
                if !seen_ref {
                    seen_ref = true;
                    result.flag = Some(flag);
                    if let Some((from, to)) = fields.0.split_once(':') {
                        result.from = from.to_string();
                        result.to = to.to_string();
                    } else {
                        result.to = fields.0.to_string();
                    }
                    result.summary = fields.1.to_string();
                }
                continue;
            }
            let line = line.trim();
            if line.is_empty() || done {
                continue;
            }
            done = line == "Done";
            result.status = line.to_string();
        }

        result
    }

    /// Human-readable meaning of the ref flag.
    #[must_use]
    pub fn flag_description(&self) -> &'static str {
        self.flag.map_or("Push finished", PushFlag::description)
    }

    /// Copy with credentials masked in the remote URL.
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            remote_url: self.remote_url.as_deref().map(|u| redact(u).into_owned()),
            ..self.clone()
        }
    }
}

impl fmt::Display for PushResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.flag_description())?;
        writeln!(f, "Remote url - {}", self.remote_url.as_deref().unwrap_or(""))?;
        writeln!(f, "Local branch - {}", self.from)?;
        writeln!(f, "Remote branch - {}", self.to)?;
        writeln!(f, "Summary - {}", self.summary)?;
        write!(f, "Status - {}", self.status)
    }
}

/// `<flag> TAB <from>:<to> TAB <summary>`
fn parse_ref_line(line: &str) -> Option<(PushFlag, (&str, &str))> {
    let mut chars = line.chars();
    let flag = PushFlag::from_char(chars.next()?)?;
    let rest = chars.as_str().strip_prefix('\t')?;
    let (refs, summary) = rest.split_once('\t').unwrap_or((rest, ""));
    Some((flag, (refs, summary.trim())))
}

/// Variants of merging a remote branch into the current one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOptions {
    /// Refuse anything but a fast-forward.
    pub ff_only: bool,
    /// Stop before creating the merge commit.
    pub no_commit: bool,
}

impl MergeOptions {
    #[must_use]
    pub const fn ff_only() -> Self {
        Self {
            ff_only: true,
            no_commit: false,
        }
    }

    #[must_use]
    pub const fn no_commit() -> Self {
        Self {
            ff_only: false,
            no_commit: true,
        }
    }
}
