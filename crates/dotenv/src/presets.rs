//! Named dotenv file locations.
//!
//! Responsibilities:
//! - Define the three presets (`Default`, `Portable`, `UserProfile`).
//! - Discover their absolute paths once, in an explicit initialization step.
//! - Use the `directories` crate for the platform home directory.
//!
//! Does NOT handle:
//! - Choosing between a preset and an explicit path (see `loader::resolve`).
//! - File I/O.
//!
//! Invariants:
//! - Every preset path is `<directory>/.env`.
//! - Preset tokens are matched case-insensitively against the whole string.

use std::path::{Path, PathBuf};

use crate::constants::{DOTENV_FILENAME, PORTABLE_TOKEN, USER_PROFILE_TOKEN};
use crate::loader::LoadError;

/// A named dotenv file location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPreset {
    /// `.env` in the current working directory.
    Default,
    /// `.env` next to the running binary.
    Portable,
    /// `.env` in the user's home directory.
    UserProfile,
}

impl PathPreset {
    /// Match a path option against the preset tokens.
    ///
    /// `Default` has no token; it is selected by omitting the path.
    pub fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case(PORTABLE_TOKEN) {
            Some(Self::Portable)
        } else if token.eq_ignore_ascii_case(USER_PROFILE_TOKEN) {
            Some(Self::UserProfile)
        } else {
            None
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Portable => PORTABLE_TOKEN,
            Self::UserProfile => USER_PROFILE_TOKEN,
        }
    }
}

/// The three preset paths, computed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvPresets {
    default: PathBuf,
    portable: PathBuf,
    user_profile: PathBuf,
}

impl EnvPresets {
    /// Build presets from explicit directories.
    pub fn new(cwd: &Path, binary_dir: &Path, home_dir: &Path) -> Self {
        Self {
            default: cwd.join(DOTENV_FILENAME),
            portable: binary_dir.join(DOTENV_FILENAME),
            user_profile: home_dir.join(DOTENV_FILENAME),
        }
    }

    /// Discover the preset directories of the running process.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::PresetUnavailable` if the working directory, the
    /// binary's directory, or the home directory cannot be determined.
    pub fn discover() -> Result<Self, LoadError> {
        let cwd = std::env::current_dir().map_err(|e| LoadError::PresetUnavailable {
            preset: PathPreset::Default.name(),
            reason: e.to_string(),
        })?;

        let binary_dir = std::env::current_exe()
            .map_err(|e| e.to_string())
            .and_then(|exe| {
                exe.parent()
                    .map(Path::to_path_buf)
                    .ok_or_else(|| "binary path has no parent directory".to_string())
            })
            .map_err(|reason| LoadError::PresetUnavailable {
                preset: PathPreset::Portable.name(),
                reason,
            })?;

        let base_dirs = directories::BaseDirs::new().ok_or_else(|| LoadError::PresetUnavailable {
            preset: PathPreset::UserProfile.name(),
            reason: "home directory could not be determined".to_string(),
        })?;

        let presets = Self::new(&cwd, &binary_dir, base_dirs.home_dir());
        tracing::debug!(
            default = %presets.default.display(),
            portable = %presets.portable.display(),
            user_profile = %presets.user_profile.display(),
            "Discovered dotenv presets"
        );
        Ok(presets)
    }

    pub fn path(&self, preset: PathPreset) -> &Path {
        match preset {
            PathPreset::Default => &self.default,
            PathPreset::Portable => &self.portable,
            PathPreset::UserProfile => &self.user_profile,
        }
    }

    pub fn default_path(&self) -> &Path {
        &self.default
    }

    pub fn portable_path(&self) -> &Path {
        &self.portable
    }

    pub fn user_profile_path(&self) -> &Path {
        &self.user_profile
    }
}
