//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the appropriate command handler.
//! - Build library load options once for every command.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//!
//! Invariants:
//! - Returns the process exit code on success; errors are mapped in `main`.

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::error::ExitCode;

/// Dispatch CLI commands to their respective handlers.
///
/// Returns the exit code the process should terminate with.
pub(crate) fn run_command(cli: Cli) -> Result<i32> {
    let options = cli.load_options()?;

    match cli.command {
        Commands::Resolve => commands::resolve::run(&options)?,
        Commands::Presets => commands::presets::run()?,
        Commands::Show { format, values } => commands::show::run(&options, &format, values)?,
        Commands::Run {
            allow_missing,
            command,
        } => return commands::run::run(&options, &command, allow_missing),
    }

    Ok(ExitCode::Success.as_i32())
}
