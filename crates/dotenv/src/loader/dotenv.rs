//! The dotenv loader.
//!
//! Responsibilities:
//! - Own the presets, the destination store, the date expander and the last
//!   resolved path.
//! - Run one load: resolve, check existence, read, parse, merge.
//!
//! Does NOT handle:
//! - Line classification and unquoting (delegated to parse.rs).
//! - Path selection rules (delegated to resolve.rs).
//! - Process-wide state (see the crate-level `config` function).
//!
//! Invariants / Assumptions:
//! - The last resolved path is recorded before any filesystem access.
//! - Keys already present in the store are never overwritten.
//! - Every failure is returned as `Err`; `config` never panics.

use std::path::{Path, PathBuf};

use super::error::LoadError;
use super::parse::parse_content;
use super::read::read_text;
use super::resolve::resolve;
use crate::date_literal::{DateExpander, DateLiteral};
use crate::presets::EnvPresets;
use crate::store::EnvStore;
use crate::types::{LoadOptions, LoadResult, ParsedEnv};

/// Loads dotenv files into an [`EnvStore`].
#[derive(Debug)]
pub struct DotEnv<S, D = DateLiteral> {
    presets: EnvPresets,
    store: S,
    expander: D,
    last_path: Option<PathBuf>,
}

impl<S: EnvStore> DotEnv<S> {
    /// Create a loader over `store` with the local-clock date expander.
    pub fn new(presets: EnvPresets, store: S) -> Self {
        Self {
            presets,
            store,
            expander: DateLiteral::new(),
            last_path: None,
        }
    }

    /// Create a loader with presets discovered from the running process.
    pub fn discover(store: S) -> Result<Self, LoadError> {
        Ok(Self::new(EnvPresets::discover()?, store))
    }
}

impl<S: EnvStore, D: DateExpander> DotEnv<S, D> {
    /// Replace the date expander.
    pub fn with_expander<E: DateExpander>(self, expander: E) -> DotEnv<S, E> {
        DotEnv {
            presets: self.presets,
            store: self.store,
            expander,
            last_path: self.last_path,
        }
    }

    /// Resolve the path `options` selects and record it as the last resolved path.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::DateLiteral` if date expansion fails; the last
    /// resolved path is then left unchanged.
    pub fn resolve_path(&mut self, options: &LoadOptions) -> Result<PathBuf, LoadError> {
        let path = resolve(&self.presets, &self.expander, options)?;
        tracing::debug!(path = %path.display(), "Resolved dotenv path");
        self.last_path = Some(path.clone());
        Ok(path)
    }

    /// Load the dotenv file selected by `options` into the store.
    ///
    /// Returns the parsed keys. Keys already present in the store are neither
    /// parsed nor merged.
    ///
    /// # Errors
    ///
    /// - `LoadError::DateLiteral` if the path template is malformed.
    /// - `LoadError::NotFound` if the resolved path does not exist.
    /// - `LoadError::Read` / `LoadError::Decode` if the file cannot be read as text.
    ///
    /// On error the store is left untouched.
    pub fn config(&mut self, options: &LoadOptions) -> LoadResult {
        let path = self.resolve_path(options)?;
        let content = read_text(&path, options.encoding)?;
        let parsed = parse_content(&content, &self.store);
        let merged = merge(&mut self.store, &parsed);

        tracing::debug!(
            path = %path.display(),
            parsed = parsed.len(),
            merged,
            "Loaded dotenv file"
        );
        Ok(parsed)
    }

    /// The path resolved by the most recent `config` or `resolve_path` call.
    pub fn last_path(&self) -> Option<&Path> {
        self.last_path.as_deref()
    }

    pub fn presets(&self) -> &EnvPresets {
        &self.presets
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

/// Copy `parsed` into `store`, skipping keys it already holds.
///
/// Returns the number of keys written.
fn merge(store: &mut impl EnvStore, parsed: &ParsedEnv) -> usize {
    let mut merged = 0;
    for (key, value) in parsed {
        if store.contains(key) {
            continue;
        }
        store.set(key, value);
        merged += 1;
    }
    merged
}
