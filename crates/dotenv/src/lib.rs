//! Load `.env` files into an environment store.
//!
//! This crate resolves a dotenv file location from a named preset or an
//! explicit (optionally date-templated) path, parses it line by line and
//! merges the result into an environment store without overwriting keys that
//! are already present.
//!
//! Two entry points are provided:
//! - [`DotEnv`], an owned loader over any [`EnvStore`], for embedding and tests.
//! - [`config`], a process-wide loader over the real process environment.

pub mod constants;
pub mod date_literal;
mod global;
mod loader;
pub mod presets;
pub mod store;
pub mod types;

pub use date_literal::{DateExpander, DateLiteral, DateLiteralError};
pub use global::{config, last_path, presets};
pub use loader::{DotEnv, LoadError, parse_content, parse_line, split_lines};
pub use presets::{EnvPresets, PathPreset};
pub use store::{EnvStore, MemoryEnv, ProcessEnv};
pub use types::{Encoding, LoadOptions, LoadResult, ParsedEnv};
