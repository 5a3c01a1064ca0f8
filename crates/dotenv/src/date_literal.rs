//! Date-literal expansion for dotenv paths.
//!
//! Responsibilities:
//! - Replace every `#{pattern}` token in a template with the current date
//!   formatted by `pattern` (e.g. `#{yyyy-MM}` -> `2026-10`).
//! - Keep the clock injectable so expansion is deterministic under test.
//!
//! Does NOT handle:
//! - Deciding whether a path is expanded (see `loader::resolve`).
//!
//! Invariants:
//! - Text outside tokens is copied verbatim.
//! - Pattern letters: `yyyy`, `yy`, `MM`, `M`, `dd`, `d`, `HH`, `H`, `mm`, `m`,
//!   `ss`, `s`, `SSS`; any other character inside a token is literal.

use chrono::{Datelike, Local, NaiveDateTime, Timelike};
use thiserror::Error;

use crate::constants::{DATE_LITERAL_CLOSE, DATE_LITERAL_OPEN};

/// Errors raised while expanding a date-literal template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateLiteralError {
    #[error("Unterminated date literal starting at byte {offset}")]
    Unterminated { offset: usize },

    #[error("Empty date literal at byte {offset}")]
    EmptyPattern { offset: usize },
}

/// Expands date-literal tokens embedded in a path template.
pub trait DateExpander {
    fn expand(&self, template: &str) -> Result<String, DateLiteralError>;
}

impl<F> DateExpander for F
where
    F: Fn(&str) -> Result<String, DateLiteralError>,
{
    fn expand(&self, template: &str) -> Result<String, DateLiteralError> {
        self(template)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Clock {
    Local,
    Fixed(NaiveDateTime),
}

/// The default expander, formatting against the local wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateLiteral {
    clock: Clock,
}

impl Default for DateLiteral {
    fn default() -> Self {
        Self::new()
    }
}

impl DateLiteral {
    /// Expander using the current local time.
    pub fn new() -> Self {
        Self {
            clock: Clock::Local,
        }
    }

    /// Expander pinned to a fixed instant.
    pub fn fixed(at: NaiveDateTime) -> Self {
        Self {
            clock: Clock::Fixed(at),
        }
    }

    fn now(&self) -> NaiveDateTime {
        match self.clock {
            Clock::Local => Local::now().naive_local(),
            Clock::Fixed(at) => at,
        }
    }
}

impl DateExpander for DateLiteral {
    fn expand(&self, template: &str) -> Result<String, DateLiteralError> {
        let now = self.now();
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        let mut consumed = 0;

        while let Some(start) = rest.find(DATE_LITERAL_OPEN) {
            let offset = consumed + start;
            out.push_str(&rest[..start]);

            let body = &rest[start + DATE_LITERAL_OPEN.len()..];
            let end = body
                .find(DATE_LITERAL_CLOSE)
                .ok_or(DateLiteralError::Unterminated { offset })?;
            let pattern = &body[..end];
            if pattern.is_empty() {
                return Err(DateLiteralError::EmptyPattern { offset });
            }
            out.push_str(&format_pattern(pattern, &now));

            let advance = start + DATE_LITERAL_OPEN.len() + end + DATE_LITERAL_CLOSE.len_utf8();
            consumed += advance;
            rest = &rest[advance..];
        }

        out.push_str(rest);
        Ok(out)
    }
}

/// Format a single token body, e.g. `yyyy-MM-dd`.
fn format_pattern(pattern: &str, at: &NaiveDateTime) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let run = chars[i..].iter().take_while(|&&x| x == c).count();

        match c {
            'y' if run == 2 => out.push_str(&format!("{:02}", at.year().rem_euclid(100))),
            'y' => out.push_str(&format!("{:04}", at.year())),
            'M' => push_field(&mut out, at.month(), run),
            'd' => push_field(&mut out, at.day(), run),
            'H' => push_field(&mut out, at.hour(), run),
            'm' => push_field(&mut out, at.minute(), run),
            's' => push_field(&mut out, at.second(), run),
            'S' => {
                let millis = (at.nanosecond() / 1_000_000).min(999);
                out.push_str(&format!("{:03}", millis));
            }
            _ => {
                out.extend(std::iter::repeat_n(c, run));
            }
        }
        i += run;
    }

    out
}

fn push_field(out: &mut String, value: u32, run: usize) {
    if run == 1 {
        out.push_str(&value.to_string());
    } else {
        out.push_str(&format!("{:02}", value));
    }
}
