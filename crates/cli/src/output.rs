//! Output formatting for parsed dotenv entries.
//!
//! Responsibilities:
//! - Render parsed entries as dotenv lines or JSON.
//! - Mask values unless the caller asked to reveal them.
//!
//! Invariants:
//! - Revealed dotenv output loads back to the same values.
//! - Masked output never contains any part of a value.

use anyhow::Result;
use presetenv::ParsedEnv;

const MASK: &str = "********";

/// Supported output formats for `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Dotenv,
    Json,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dotenv" | "env" => Ok(OutputFormat::Dotenv),
            "json" => Ok(OutputFormat::Json),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: dotenv, json", s),
        }
    }
}

/// Render `parsed` in `format`, masking values unless `reveal` is set.
pub fn format_env(parsed: &ParsedEnv, format: OutputFormat, reveal: bool) -> Result<String> {
    let shown: ParsedEnv = parsed
        .iter()
        .map(|(k, v)| {
            let value = if reveal { v.clone() } else { MASK.to_string() };
            (k.clone(), value)
        })
        .collect();

    match format {
        OutputFormat::Dotenv => Ok(shown
            .iter()
            .map(|(k, v)| format!("{}={}\n", k, quote_if_needed(v)))
            .collect()),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&shown)?)),
    }
}

/// Double-quote values whose meaning would change if written bare.
fn quote_if_needed(value: &str) -> String {
    let padded = value.trim() != value;
    let multiline = value.contains(['\n', '\r']);
    let wrapped = value.len() >= 2
        && ['\'', '"']
            .iter()
            .any(|&q| value.starts_with(q) && value.ends_with(q));

    if padded || multiline || wrapped {
        format!("\"{}\"", value.replace('\n', "\\n"))
    } else {
        value.to_string()
    }
}
