//! Process-wide loader over the real process environment.
//!
//! Responsibilities:
//! - Discover the preset paths once, on first use.
//! - Serialize loads into the process environment behind a lock.
//! - Remember the last resolved path for introspection.
//!
//! Does NOT handle:
//! - Loading into isolated stores (construct a `DotEnv` directly).
//!
//! Invariants:
//! - Before any load, the last resolved path is the Default preset.
//! - A poisoned lock is recovered; callers never see a panic from here.

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use crate::loader::{DotEnv, LoadError};
use crate::presets::EnvPresets;
use crate::store::ProcessEnv;
use crate::types::{LoadOptions, LoadResult};

static PRESETS: OnceLock<Result<EnvPresets, (&'static str, String)>> = OnceLock::new();
static LAST_PATH: Mutex<Option<PathBuf>> = Mutex::new(None);

fn last_path_slot() -> MutexGuard<'static, Option<PathBuf>> {
    LAST_PATH.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The preset paths of this process, discovered on first call.
///
/// # Errors
///
/// Returns `LoadError::PresetUnavailable` if discovery failed. The failure is
/// remembered; later calls return the same error.
pub fn presets() -> Result<&'static EnvPresets, LoadError> {
    PRESETS
        .get_or_init(|| {
            EnvPresets::discover().map_err(|e| match e {
                LoadError::PresetUnavailable { preset, reason } => (preset, reason),
                other => ("default", other.to_string()),
            })
        })
        .as_ref()
        .map_err(|(preset, reason)| LoadError::PresetUnavailable {
            preset: *preset,
            reason: reason.clone(),
        })
}

/// Load a dotenv file into the process environment.
///
/// Existing environment variables are never overwritten. See
/// [`DotEnv::config`] for the full contract.
pub fn config(options: &LoadOptions) -> LoadResult {
    let presets = presets()?;
    let mut slot = last_path_slot();

    let mut loader = DotEnv::new(presets.clone(), ProcessEnv);
    let result = loader.config(options);
    if let Some(path) = loader.last_path() {
        *slot = Some(path.to_path_buf());
    }
    result
}

/// The path resolved by the most recent [`config`] call.
///
/// Before the first call this is the Default preset path; `None` only if the
/// presets could not be discovered.
pub fn last_path() -> Option<PathBuf> {
    let slot = last_path_slot();
    match slot.as_ref() {
        Some(path) => Some(path.clone()),
        None => presets().ok().map(|p| p.default_path().to_path_buf()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::global_test_lock;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_presets_are_discovered_once() {
        let first = presets().unwrap();
        let second = presets().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    #[serial]
    fn test_config_loads_into_process_env() {
        let _lock = global_test_lock().lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("global.env");
        fs::write(&path, "_PRESETENV_GLOBAL_A=alpha\n_PRESETENV_GLOBAL_B='  beta '\n").unwrap();

        temp_env::with_vars_unset(["_PRESETENV_GLOBAL_A", "_PRESETENV_GLOBAL_B"], || {
            let parsed = config(&LoadOptions::new().with_path(path.to_string_lossy())).unwrap();

            assert_eq!(parsed.len(), 2);
            assert_eq!(std::env::var("_PRESETENV_GLOBAL_A").unwrap(), "alpha");
            assert_eq!(std::env::var("_PRESETENV_GLOBAL_B").unwrap(), "  beta ");
            assert_eq!(last_path(), Some(path.clone()));
        });
    }

    #[test]
    #[serial]
    fn test_config_does_not_overwrite_process_env() {
        let _lock = global_test_lock().lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("global.env");
        fs::write(&path, "_PRESETENV_GLOBAL_KEEP=from-file\n").unwrap();

        temp_env::with_var("_PRESETENV_GLOBAL_KEEP", Some("from-process"), || {
            let parsed = config(&LoadOptions::new().with_path(path.to_string_lossy())).unwrap();

            assert!(parsed.is_empty());
            assert_eq!(
                std::env::var("_PRESETENV_GLOBAL_KEEP").unwrap(),
                "from-process"
            );
        });
    }

    #[test]
    #[serial]
    fn test_missing_file_still_records_last_path() {
        let _lock = global_test_lock().lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.env");

        let err = config(&LoadOptions::new().with_path(path.to_string_lossy())).unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(last_path(), Some(path));
    }

    #[test]
    #[serial]
    fn test_portable_token_resolves_to_preset() {
        let _lock = global_test_lock().lock().unwrap();

        // Only the resolved path matters here; the file may or may not exist.
        let _ = config(&LoadOptions::new().with_path("PORTABLE"));

        assert_eq!(
            last_path(),
            Some(presets().unwrap().portable_path().to_path_buf())
        );
    }
}
