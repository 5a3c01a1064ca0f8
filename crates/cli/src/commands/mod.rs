//! Command handlers for presetenv.
//!
//! Each submodule implements one subcommand as a synchronous `run` function.

pub mod presets;
pub mod resolve;
pub mod run;
pub mod show;
