//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `LoadError` variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Exit codes of commands spawned by `run` (forwarded unchanged).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use presetenv::LoadError;

/// Structured exit codes for presetenv.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// The resolved dotenv file does not exist.
    NotFound = 4,

    /// Invalid input - unknown encoding label or malformed date literal.
    ///
    /// Scripts should fix the arguments and not retry.
    ValidationError = 5,

    /// The dotenv file exists but could not be read or decoded.
    ReadFailure = 6,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&LoadError> for ExitCode {
    fn from(err: &LoadError) -> Self {
        match err {
            LoadError::NotFound { .. } => ExitCode::NotFound,
            LoadError::UnsupportedEncoding(_) | LoadError::DateLiteral(_) => {
                ExitCode::ValidationError
            }
            LoadError::Read { .. } | LoadError::Decode { .. } => ExitCode::ReadFailure,
            LoadError::PresetUnavailable { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no LoadError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<LoadError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
