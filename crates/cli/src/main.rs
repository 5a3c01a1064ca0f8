//! presetenv CLI - load `.env` files from presets or explicit paths.
//!
//! Responsibilities:
//! - Parse command-line arguments and `PRESETENV_*` environment variables.
//! - Install stderr logging controlled by `RUST_LOG`.
//! - Dispatch to the subcommand and map failures to structured exit codes.
//!
//! Does NOT handle:
//! - Path resolution or parsing (see the `presetenv` library crate).
//!
//! Invariants:
//! - Logs and errors go to stderr; stdout carries only command output.
//! - `run` forwards the child's exit status unchanged.

mod args;
mod commands;
mod dispatch;
mod error;
mod output;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::ExitCodeExt;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code().as_i32()
        }
    };

    std::process::exit(exit_code);
}

