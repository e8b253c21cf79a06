// git-remote-sync: Remote push/pull/fetch orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::remote::ConnectionArg;
use crate::cli::{Cli, Command};
use crate::sync::model::{PullStrategy, PushStrategy};
use clap::Parser;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["grs", "version"]).expect("valid args");
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "grs",
        "-l",
        "5",
        "-C",
        "/work/repo",
        "--prefs",
        "/tmp/p.json",
        "fetch",
    ])
    .expect("valid args");
    insta::assert_debug_snapshot!(cli.global.to_config_overrides(), @r#"
    [
        (
            "global.output_log_level",
            "5",
        ),
        (
            "global.file_log_level",
            "5",
        ),
        (
            "prefs.file",
            "/tmp/p.json",
        ),
    ]
    "#);
    assert_eq!(cli.global.repo.as_deref(), Some(std::path::Path::new("/work/repo")));
}

#[test]
fn test_log_level_range() {
    assert!(Cli::try_parse_from(["grs", "-l", "7", "remotes"]).is_err());
}

#[test]
fn test_parse_delete() {
    let cli = Cli::try_parse_from(["grs", "delete", "upstream", "-y"]).expect("valid args");
    let Some(Command::Delete(args)) = cli.command else {
        panic!("expected delete");
    };
    insta::assert_debug_snapshot!(args, @r#"
    DeleteArgs {
        name: "upstream",
        yes: true,
    }
    "#);
}

#[test]
fn test_parse_select() {
    let cli = Cli::try_parse_from(["grs", "select", "mirror", "--connection", "alternate"])
        .expect("valid args");
    let Some(Command::Select(args)) = cli.command else {
        panic!("expected select");
    };
    assert_eq!(args.name.as_deref(), Some("mirror"));
    assert_eq!(args.connection, ConnectionArg::Alternate);

    assert!(Cli::try_parse_from(["grs", "select"]).is_err());
    assert!(Cli::try_parse_from(["grs", "select", "--clear"]).is_ok());
    assert!(Cli::try_parse_from(["grs", "select", "origin", "--clear"]).is_err());
}

#[test]
fn test_parse_push() {
    let cli = Cli::try_parse_from([
        "grs",
        "push",
        "--remote",
        "upstream",
        "--strategy",
        "forced",
        "--tags",
        "-u",
        "alice",
        "--password",
        "s3cret",
    ])
    .expect("valid args");
    let Some(Command::Push(args)) = cli.command else {
        panic!("expected push");
    };
    assert_eq!(args.remote.as_deref(), Some("upstream"));
    assert_eq!(args.strategy, Some(PushStrategy::Forced));
    assert!(args.tags);
    assert_eq!(args.credentials.pair(), Some(("alice", "s3cret")));
}

#[test]
fn test_negated_push_flags() {
    let cli = Cli::try_parse_from(["grs", "push", "--tags", "--no-tags", "--no-track"])
        .expect("valid args");
    let Some(Command::Push(args)) = cli.command else {
        panic!("expected push");
    };
    assert!(!args.tags);
    assert!(args.no_tags);
    assert!(args.no_track);

    let cli = Cli::try_parse_from(["grs", "pull", "--no-track", "--track"]).expect("valid args");
    let Some(Command::Pull(args)) = cli.command else {
        panic!("expected pull");
    };
    assert!(args.track);
    assert!(!args.no_track);
}

#[test]
fn test_parse_pull_strategy() {
    let cli = Cli::try_parse_from(["grs", "pull", "-s", "merge-nocommit"]).expect("valid args");
    let Some(Command::Pull(args)) = cli.command else {
        panic!("expected pull");
    };
    assert_eq!(args.strategy, Some(PullStrategy::MergeNoCommit));
}

#[test]
fn test_unknown_strategy_is_rejected() {
    let err = Cli::try_parse_from(["grs", "pull", "--strategy", "octopus"])
        .expect_err("unknown strategy");
    assert!(err.to_string().contains("unknown strategy 'octopus'"), "{err}");
}

#[test]
fn test_create_needs_both_or_none() {
    assert!(Cli::try_parse_from(["grs", "create"]).is_ok());
    assert!(Cli::try_parse_from(["grs", "create", "backup", "https://x/y.git"]).is_ok());
    assert!(Cli::try_parse_from(["grs", "create", "backup"]).is_err());
}
