//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Convert global flags into library `LoadOptions`.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use anyhow::Result;
use clap::{Parser, Subcommand};
use presetenv::{Encoding, LoadOptions};

#[derive(Parser, Debug)]
#[command(name = "presetenv")]
#[command(about = "Load .env files from named presets or explicit paths", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  presetenv show\n  presetenv --path portable show --values\n  presetenv --path 'logs/app_#{yyyy-MM}.env' --parses-date resolve\n  presetenv --path userProfile run -- cargo test\n"
)]
pub struct Cli {
    /// Dotenv file path, or a preset token: portable, userProfile (default: ./.env)
    #[arg(short, long, global = true, env = "PRESETENV_PATH")]
    pub path: Option<String>,

    /// Expand #{...} date literals (e.g. #{yyyy-MM}) in --path
    #[arg(long, global = true, env = "PRESETENV_PARSES_DATE")]
    pub parses_date: bool,

    /// Text encoding of the file: any WHATWG charset label (utf-8, utf-16le, shift_jis, windows-1252, ...)
    #[arg(
        short,
        long,
        global = true,
        env = "PRESETENV_ENCODING",
        default_value = "utf-8"
    )]
    pub encoding: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the path that would be loaded
    Resolve,

    /// Print the three preset paths
    Presets,

    /// Load the file and print the keys it sets
    Show {
        /// Output format (dotenv, json)
        #[arg(short, long, default_value = "dotenv")]
        format: String,

        /// Print values instead of masking them
        #[arg(long)]
        values: bool,
    },

    /// Load the file into the environment and run a command with it
    Run {
        /// Run the command even if the file does not exist
        #[arg(long)]
        allow_missing: bool,

        /// Command and arguments
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
}

impl Cli {
    /// Build library load options from the global flags.
    pub fn load_options(&self) -> Result<LoadOptions> {
        let encoding: Encoding = self.encoding.parse()?;
        let mut options = LoadOptions::new()
            .with_parses_date(self.parses_date)
            .with_encoding(encoding);
        if let Some(path) = &self.path {
            options = options.with_path(path.clone());
        }
        Ok(options)
    }
}
