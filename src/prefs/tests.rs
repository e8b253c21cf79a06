// git-remote-sync: Remote push/pull/fetch orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{JsonFileStore, MemoryStore, PreferenceStore};
use serde_json::json;

#[test]
fn test_missing_file_is_empty() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let store = JsonFileStore::open(temp.path().join("prefs.json")).expect("open");
    assert_eq!(store.get("defaultRemotes").expect("get"), None);
}

#[test]
fn test_persist_survives_reopen() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let path = temp.path().join("nested").join("prefs.json");

    let mut store = JsonFileStore::open(&path).expect("open");
    store
        .persist("defaultRemotes", json!({"/work/repo": "upstream"}))
        .expect("persist");
    assert!(path.exists());

    let reopened = JsonFileStore::open(&path).expect("reopen");
    assert_eq!(
        reopened.get("defaultRemotes").expect("get"),
        Some(json!({"/work/repo": "upstream"}))
    );
}

#[test]
fn test_persist_keeps_other_keys() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let path = temp.path().join("prefs.json");
    std::fs::write(&path, r#"{"theme": "dark"}"#).expect("seed file");

    let mut store = JsonFileStore::open(&path).expect("open");
    store.persist("defaultRemotes", json!({})).expect("persist");

    let text = std::fs::read_to_string(&path).expect("read back");
    assert!(text.contains("\"theme\""));
    assert!(text.contains("\"defaultRemotes\""));
}

#[test]
fn test_malformed_file_is_reported() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let path = temp.path().join("prefs.json");
    std::fs::write(&path, "[1, 2").expect("seed file");

    let err = JsonFileStore::open(&path).expect_err("not a JSON object");
    assert!(err.to_string().starts_with("preferences error: malformed preference"));
}

#[test]
fn test_memory_store_roundtrip() {
    let mut store = MemoryStore::new();
    assert_eq!(store.get("k").expect("get"), None);
    store.persist("k", json!(1)).expect("persist");
    assert_eq!(store.get("k").expect("get"), Some(json!(1)));
}
