//! Error types for dotenv loading.
//!
//! Responsibilities:
//! - Define error variants for every stage that can fail: preset discovery,
//!   path resolution, existence check, read and decode.
//! - Provide conversion from date-literal expansion errors.
//!
//! Does NOT handle:
//! - Parse errors: malformed lines are skipped, never reported.
//!
//! Invariants:
//! - All error variants carry context (path, encoding label, preset name).
//! - Errors NEVER include raw .env line contents or values to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::date_literal::DateLiteralError;
use crate::types::Encoding;

/// Errors that can occur while loading a dotenv file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The resolved path does not exist.
    #[error("{context}: no such file {}", .path.display())]
    NotFound {
        path: PathBuf,
        context: &'static str,
    },

    /// The file exists but could not be read.
    #[error("Failed to read .env file at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file bytes are not valid in the requested encoding.
    #[error("Failed to decode .env file at {} as {encoding}", .path.display())]
    Decode { path: PathBuf, encoding: Encoding },

    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("Invalid date literal in path: {0}")]
    DateLiteral(#[from] DateLiteralError),

    /// A preset directory could not be determined.
    #[error("Unable to determine the {preset} preset location: {reason}")]
    PresetUnavailable {
        preset: &'static str,
        reason: String,
    },
}

impl LoadError {
    /// Whether this is the missing-file error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound { .. })
    }

    /// Whether this error came from reading or decoding an existing file.
    pub fn is_read_failure(&self) -> bool {
        matches!(self, LoadError::Read { .. } | LoadError::Decode { .. })
    }

    /// The I/O error kind for read failures, if any.
    pub fn io_kind(&self) -> Option<ErrorKind> {
        match self {
            LoadError::Read { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}
