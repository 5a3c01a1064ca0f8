//! `resolve` command: print the path a load would read.

use anyhow::{Context, Result};
use presetenv::{DotEnv, LoadOptions, ProcessEnv};

pub fn run(options: &LoadOptions) -> Result<()> {
    let presets = presetenv::presets()?;
    let mut loader = DotEnv::new(presets.clone(), ProcessEnv);
    let path = loader
        .resolve_path(options)
        .context("Failed to resolve dotenv path")?;

    println!("{}", path.display());
    Ok(())
}
