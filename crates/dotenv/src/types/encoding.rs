//! Text encodings for reading dotenv files.
//!
//! Responsibilities:
//! - Map user-facing charset labels (`utf-8`, `shift_jis`, `windows-1252`, ...)
//!   to an `encoding_rs` encoding.
//! - Decode raw file bytes into a `String`, dropping a matching byte-order mark.
//!
//! Invariants:
//! - Labels are matched case-insensitively, ignoring surrounding whitespace.
//! - Labels that only resolve to the WHATWG "replacement" encoding are rejected.
//! - Decoding never replaces invalid sequences; it fails instead.

use std::fmt;
use std::str::FromStr;

use crate::loader::LoadError;

/// Encoding used to turn file bytes into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoding(&'static encoding_rs::Encoding);

impl Default for Encoding {
    fn default() -> Self {
        Self::utf8()
    }
}

impl Encoding {
    pub fn utf8() -> Self {
        Self(encoding_rs::UTF_8)
    }

    pub fn utf16le() -> Self {
        Self(encoding_rs::UTF_16LE)
    }

    pub fn utf16be() -> Self {
        Self(encoding_rs::UTF_16BE)
    }

    /// Resolve a charset label, or `None` if it names no supported encoding.
    pub fn for_label(label: &str) -> Option<Self> {
        let label = label.trim();
        let label = match label.to_ascii_lowercase().as_str() {
            "utf16le" => "utf-16le",
            "utf16be" => "utf-16be",
            "unicodefffe" => "utf-16be",
            _ => label,
        };
        encoding_rs::Encoding::for_label_no_replacement(label.as_bytes()).map(Self)
    }

    /// Canonical name, as accepted by `FromStr`.
    pub fn label(self) -> &'static str {
        self.0.name()
    }

    /// Decode `bytes` as text in this encoding.
    ///
    /// Returns `None` when the bytes are not valid for the encoding.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        let bytes = match encoding_rs::Encoding::for_bom(bytes) {
            Some((bom, len)) if bom == self.0 => &bytes[len..],
            _ => bytes,
        };
        self.0
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|text| text.into_owned())
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Encoding {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::for_label(s).ok_or_else(|| LoadError::UnsupportedEncoding(s.to_string()))
    }
}
