//! `show` command: load the file and print what it set.

use anyhow::{Context, Result};
use presetenv::LoadOptions;

use crate::output::{OutputFormat, format_env};

pub fn run(options: &LoadOptions, format: &str, values: bool) -> Result<()> {
    let format = OutputFormat::from_str(format)?;
    let parsed = presetenv::config(options).context("Failed to load environment")?;

    tracing::info!(keys = parsed.len(), "Loaded dotenv entries");
    print!("{}", format_env(&parsed, format, values)?);
    Ok(())
}
