//! Options accepted by a single load.

use super::Encoding;

/// Options for [`DotEnv::config`](crate::DotEnv::config).
///
/// `path` is either a file path, or one of the preset tokens `"portable"` /
/// `"userProfile"` (matched case-insensitively). When `None`, the Default
/// preset (`<cwd>/.env`) is used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub path: Option<String>,
    /// Expand `#{...}` date-literal tokens in `path` before use.
    pub parses_date: bool,
    pub encoding: Encoding,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file path or preset token.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Enable or disable date-literal expansion of the path.
    pub fn with_parses_date(mut self, parses_date: bool) -> Self {
        self.parses_date = parses_date;
        self
    }

    /// Set the encoding used to read the file.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }
}
