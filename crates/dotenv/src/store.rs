//! Destination environment stores.
//!
//! Responsibilities:
//! - Define the `EnvStore` trait the loader reads from and merges into.
//! - Provide `ProcessEnv` (the real process environment) and `MemoryEnv`
//!   (an isolated map for tests and embedding).
//!
//! Invariants:
//! - The loader only ever calls `set` for keys that `contains` reported absent.
//! - `ProcessEnv::set` never panics: keys the OS cannot hold are skipped with a warning.

use std::collections::HashMap;

/// A key/value environment the loader can query and extend.
pub trait EnvStore {
    fn contains(&self, key: &str) -> bool;

    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str);
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    /// Whether the OS environment can hold this pair without `set_var` panicking.
    fn is_settable(key: &str, value: &str) -> bool {
        !key.is_empty() && !key.contains(['=', '\0']) && !value.contains('\0')
    }
}

impl EnvStore for ProcessEnv {
    fn contains(&self, key: &str) -> bool {
        // Keys the OS cannot hold are never present.
        Self::is_settable(key, "") && std::env::var_os(key).is_some()
    }

    fn get(&self, key: &str) -> Option<String> {
        if !Self::is_settable(key, "") {
            return None;
        }
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }

    fn set(&mut self, key: &str, value: &str) {
        if !Self::is_settable(key, value) {
            tracing::warn!(
                key_len = key.len(),
                "Skipping dotenv key the process environment cannot hold"
            );
            return;
        }
        // SAFETY: the loader runs in a single execution context; callers that
        // share the process environment across threads must serialize loads.
        unsafe {
            std::env::set_var(key, value);
        }
    }
}

/// An in-memory environment, isolated from the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: HashMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn vars(&self) -> &HashMap<String, String> {
        &self.vars
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvStore for MemoryEnv {
    fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_string(), value.to_string());
    }
}

impl<S: EnvStore + ?Sized> EnvStore for &mut S {
    fn contains(&self, key: &str) -> bool {
        (**self).contains(key)
    }

    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}
