//! Path resolution for dotenv files.
//!
//! Responsibilities:
//! - Map a `LoadOptions` path to an absolute preset path or an explicit path.
//! - Expand date literals in explicit paths when requested.
//!
//! Does NOT handle:
//! - Recording the last resolved path (see `DotEnv::resolve_path`).
//! - Any filesystem access.
//!
//! Invariants:
//! - Preset tokens win over date expansion: `"portable"` is never expanded.
//! - Explicit paths are used verbatim (no normalization).
//! - An absent path selects the Default preset, with or without `parses_date`.

use std::path::PathBuf;

use super::error::LoadError;
use crate::date_literal::DateExpander;
use crate::presets::{EnvPresets, PathPreset};
use crate::types::LoadOptions;

/// Resolve the file path a load should read.
///
/// # Errors
///
/// Returns `LoadError::DateLiteral` if `parses_date` is set and the path
/// template is malformed.
pub(crate) fn resolve(
    presets: &EnvPresets,
    expander: &impl DateExpander,
    options: &LoadOptions,
) -> Result<PathBuf, LoadError> {
    let Some(path) = options.path.as_deref() else {
        return Ok(presets.path(PathPreset::Default).to_path_buf());
    };

    if let Some(preset) = PathPreset::from_token(path) {
        return Ok(presets.path(preset).to_path_buf());
    }

    if options.parses_date {
        return Ok(PathBuf::from(expander.expand(path)?));
    }

    Ok(PathBuf::from(path))
}
