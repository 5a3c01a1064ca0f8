//! `run` command: load the file, then run a child process with the result.

use anyhow::{Context, Result};
use presetenv::{LoadError, LoadOptions};
use std::process::Command;

use crate::error::ExitCode;

/// Load into the process environment and run `command` with it.
///
/// Returns the child's exit code. A child killed by a signal maps to
/// `ExitCode::GeneralError`.
pub fn run(options: &LoadOptions, command: &[String], allow_missing: bool) -> Result<i32> {
    match presetenv::config(options) {
        Ok(parsed) => tracing::debug!(keys = parsed.len(), "Loaded dotenv entries"),
        Err(e @ LoadError::NotFound { .. }) if allow_missing => {
            tracing::debug!(error = %e, "Dotenv file missing; running without it");
        }
        Err(e) => return Err(e).context("Failed to load environment"),
    }

    let (program, args) = command
        .split_first()
        .context("No command given to run")?;

    let status = Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("Failed to run {}", program))?;

    Ok(status.code().unwrap_or(ExitCode::GeneralError.as_i32()))
}
