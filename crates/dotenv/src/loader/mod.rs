//! Dotenv loader: path resolution, reading, parsing and merging.
//!
//! Responsibilities:
//! - Resolve a dotenv path from a preset token or an explicit, optionally
//!   date-templated, path.
//! - Read the file in the requested encoding and parse it line by line.
//! - Merge parsed keys into an `EnvStore` without overwriting existing keys.
//!
//! Does NOT handle:
//! - Process-wide loader state (see `global.rs` at crate root).
//! - Variable interpolation, multi-line values, or writing files back.
//!
//! Invariants / Assumptions:
//! - Existing store keys always win, at parse time and at merge time.
//! - Malformed lines are skipped silently; parsing itself never fails.
//! - Only resolution and I/O can fail, and they fail as returned errors.

mod dotenv;
mod error;
mod parse;
mod read;
mod resolve;

#[cfg(test)]
mod tests;

pub use dotenv::DotEnv;
pub use error::LoadError;
pub use parse::{parse_content, parse_line, split_lines};
