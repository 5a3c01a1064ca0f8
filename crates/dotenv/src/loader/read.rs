//! Existence check and encoding-aware read of a dotenv file.

use std::path::Path;

use super::error::LoadError;
use crate::constants::CONFIG_CONTEXT;
use crate::types::Encoding;

/// Read the whole file at `path` as text.
///
/// # Errors
///
/// - `LoadError::NotFound` if nothing exists at `path`.
/// - `LoadError::Read` if the existence check or the read fails.
/// - `LoadError::Decode` if the bytes are invalid for `encoding`.
pub(crate) fn read_text(path: &Path, encoding: Encoding) -> Result<String, LoadError> {
    let exists = path.try_exists().map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if !exists {
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
            context: CONFIG_CONTEXT,
        });
    }

    let bytes = std::fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    encoding.decode(&bytes).ok_or_else(|| LoadError::Decode {
        path: path.to_path_buf(),
        encoding,
    })
}
