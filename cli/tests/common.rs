//! # Banter CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Every command is
//! run inside a fresh temporary directory with `HOME` and `XDG_CONFIG_HOME`
//! pointing into it, so a developer's own `.banter.toml` or user config can
//! never leak into test results.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// An isolated working directory for one test.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create sandbox dir"),
        }
    }

    /// # Get Banter Command (`banter_cmd`)
    ///
    /// A command for the compiled `banter` binary, running inside the sandbox.
    ///
    /// ## Panics
    /// Panics if the `banter` binary cannot be found via `Command::cargo_bin`.
    pub fn banter_cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("banter").expect("Failed to find banter binary for testing");
        cmd.current_dir(self.dir.path())
            .env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join(".config"))
            .env_remove("BANTER_CONFIG")
            .env_remove("BANTER_SEED")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Writes `contents` to `name` inside the sandbox and returns its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("Failed to write sandbox file");
        path
    }
}
