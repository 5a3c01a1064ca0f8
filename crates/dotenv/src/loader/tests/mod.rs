//! Tests for the dotenv loader.
//!
//! Responsibilities:
//! - Test value parsing end to end through real files.
//! - Test preset and date-literal path resolution.
//! - Test precedence of existing store keys.
//! - Test failure reporting for missing and unreadable files.
//!
//! Does NOT handle:
//! - Single-line parsing rules (tested in parse.rs).
//! - The process-wide loader (tested in global.rs).
//!
//! Invariants:
//! - Tests load into an isolated `MemoryEnv` unless they exercise `ProcessEnv`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::fs;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use tempfile::TempDir;

use crate::date_literal::DateLiteral;
use crate::loader::DotEnv;
use crate::presets::EnvPresets;
use crate::store::MemoryEnv;


/// A temporary layout with separate cwd, binary and home directories.
pub struct Sandbox {
    pub root: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        for dir in ["cwd", "bin", "home"] {
            fs::create_dir(root.path().join(dir)).expect("Failed to create sandbox dir");
        }
        Self { root }
    }

    pub fn presets(&self) -> EnvPresets {
        EnvPresets::new(
            &self.root.path().join("cwd"),
            &self.root.path().join("bin"),
            &self.root.path().join("home"),
        )
    }

    pub fn loader(&self, store: MemoryEnv) -> DotEnv<MemoryEnv, DateLiteral> {
        DotEnv::new(self.presets(), store).with_expander(DateLiteral::fixed(fixed_now()))
    }

    pub fn write(&self, path: &Path, lines: &[&str]) {
        fs::write(path, lines.join("\n")).expect("Failed to write env file");
    }
}

/// The instant every sandbox loader's date expander is pinned to.
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 16)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap()
}

/// Lines reused across suites: Windows-style paths that must survive verbatim.
pub const PATH_LINES: &[&str] = &[
    "DIR_7ZIP=C:\\Program Files\\7-Zip",
    "PATH_IRFANVIEW=C:\\Program Files\\IrfanView\\i_view64.exe",
    "PATH_CONFIG=.\\.config\\office-smb-resources.json",
];

/// Assert that `store` holds the values written by `PATH_LINES`.
pub fn assert_path_lines_loaded(store: &MemoryEnv) {
    use crate::store::EnvStore;

    assert_eq!(store.get("DIR_7ZIP").as_deref(), Some("C:\\Program Files\\7-Zip"));
    assert_eq!(
        store.get("PATH_IRFANVIEW").as_deref(),
        Some("C:\\Program Files\\IrfanView\\i_view64.exe")
    );
    assert_eq!(
        store.get("PATH_CONFIG").as_deref(),
        Some(".\\.config\\office-smb-resources.json")
    );
}
