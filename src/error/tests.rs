// git-remote-sync: Remote push/pull/fetch orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, Direction, GitError, PipelineError, SyncError, SyncResult};

#[test]
fn test_config_error_display() {
    let err = ConfigError::MissingKey {
        section: "sync".to_string(),
        key: "push_strategy".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"missing required config key 'push_strategy' in section '[sync]'"
    );
}

#[test]
fn test_no_remote_selected_display() {
    let err: SyncError = PipelineError::NoRemoteSelected {
        direction: Direction::Push,
    }
    .into();
    insta::assert_snapshot!(err.to_string(), @"no remote has been selected for push");
}

#[test]
fn test_git_error_boxes_into_sync_error() {
    let err: SyncError = GitError::RemoteNotFound {
        remote: "upstream".to_string(),
    }
    .into();
    assert!(matches!(err, SyncError::Git(_)));
    insta::assert_snapshot!(err.to_string(), @"git error: remote not found: upstream");
}

#[test]
fn test_sync_error_size() {
    // Box<str> variant (Other) is 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<SyncError>();
    assert!(size <= 24, "SyncError is {size} bytes, expected <= 24");
}

#[test]
fn test_sync_result_size() {
    let size = std::mem::size_of::<SyncResult<()>>();
    assert!(size <= 24, "SyncResult<()> is {size} bytes, expected <= 24");
}
