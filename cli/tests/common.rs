//! # ELIZA CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! This module provides shared utility functions used across the integration
//! test files (`chat.rs`, `ask.rs`, `tables.rs`, `main_tests.rs`).
//!
//! Integration tests are located in the `cli/tests/` directory and each `.rs` file
//! in that directory (that isn't a module like this one) is compiled as a separate
//! test crate that runs the compiled `eliza` binary.
//!

// Allow potentially unused code in this common module, as different test files might use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// # Get ELIZA Command (`eliza_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `eliza` binary.
///
/// ## Panics
/// Panics if the `eliza` binary cannot be found via `Command::cargo_bin`.
pub fn eliza_cmd() -> Command {
    Command::cargo_bin("eliza").expect("Failed to find eliza binary for testing")
}

/// # Get Isolated ELIZA Command (`isolated_cmd`)
///
/// Like `eliza_cmd`, but runs inside `dir` with the home and config
/// directories pointed at it, so no user or project configuration on the
/// machine running the tests is picked up. The built-in tables apply.
pub fn isolated_cmd(dir: &Path) -> Command {
    let mut cmd = eliza_cmd();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("ELIZA_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// # Write Config (`write_config`)
///
/// Writes `content` to `<dir>/<name>` and returns the path.
pub fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write test configuration");
    path
}

/// A small, complete table set for tests that need predictable replies.
pub const SMALL_TABLES: &str = r#"
[[keywords]]
keyword = "i am "
ring = 1

[[keywords]]
keyword = ""
ring = 2

[[replies]]
id = 1
templates = ["Why are you*?", "Since when are you*?", "Are you often*?"]

[[replies]]
id = 2
templates = ["Go on.", "I see."]

[[reflections]]
from = " my "
to = " your "

[[goodbyes]]
trigger = "ciao"
farewell = "Ciao, see you next week."
"#;
