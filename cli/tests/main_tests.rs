//! # Banter CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Top-level behavior of the `banter` binary: `--help`, `--version` and
//! argument errors.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    Sandbox::new()
        .banter_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("ask")
                .and(predicate::str::contains("chat"))
                .and(predicate::str::contains("serve")),
        );
}

#[test]
fn test_version_flag() {
    Sandbox::new()
        .banter_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_subcommand_fails() {
    Sandbox::new().banter_cmd().assert().failure();
}

#[test]
fn test_ask_requires_text() {
    Sandbox::new().banter_cmd().arg("ask").assert().failure();
}
