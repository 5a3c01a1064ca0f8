//! Shared test utilities for presetenv CLI integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory running in a temp directory.
//!
//! Invariants / Assumptions:
//! - `PRESETENV_*` variables from the host never leak into a test.
//! - Every command runs with its own working directory, so the Default preset
//!   points into the test's temp directory.

use assert_cmd::Command;
use std::path::Path;

/// Returns a hermetic `presetenv` command running in `cwd`.
pub fn presetenv_cmd(cwd: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("presetenv");
    cmd.current_dir(cwd);

    for (key, _) in std::env::vars() {
        if key.starts_with("PRESETENV_") {
            cmd.env_remove(&key);
        }
    }
    cmd.env_remove("RUST_LOG");

    cmd
}
