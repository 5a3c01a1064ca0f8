//! Type definitions shared by the loader and its callers.
//!
//! Responsibilities:
//! - Define the caller-facing load options (`LoadOptions`).
//! - Define the text encodings a dotenv file can be read with (`Encoding`).
//! - Define the parsed mapping and the load outcome (`ParsedEnv`, `LoadResult`).
//!
//! Does NOT handle:
//! - Path resolution or file I/O (see `loader` module).
//! - Preset discovery (see `presets` module).
//!
//! Invariants:
//! - `LoadResult` is either the parsed mapping or an error, never both.
//! - `LoadOptions::default()` selects the Default preset, no date expansion, UTF-8.

mod encoding;
mod options;

use std::collections::BTreeMap;

use crate::loader::LoadError;

pub use encoding::Encoding;
pub use options::LoadOptions;

/// Keys and values parsed from a dotenv file.
///
/// Ordered only so that display output is stable.
pub type ParsedEnv = BTreeMap<String, String>;

/// Outcome of a single load: the parsed mapping on success, the caught error otherwise.
pub type LoadResult = Result<ParsedEnv, LoadError>;
