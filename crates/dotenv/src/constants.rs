//! Centralized constants for presetenv.
//!
//! File names, preset tokens and labels shared between the loader and the
//! command-line front-end.

// =============================================================================
// File Locations
// =============================================================================

/// File name joined onto every preset directory.
pub const DOTENV_FILENAME: &str = ".env";

/// Path token selecting the directory of the running binary.
pub const PORTABLE_TOKEN: &str = "portable";

/// Path token selecting the user's home directory.
pub const USER_PROFILE_TOKEN: &str = "userProfile";

// =============================================================================
// Parsing
// =============================================================================

/// A line starting with this character (at column 0 only) is a comment.
pub const COMMENT_CHAR: char = '#';

/// Separator between key and value. Only the first occurrence counts.
pub const ASSIGN_CHAR: char = '=';

/// Two-character escape that quoted values turn into a real newline.
pub const ESCAPED_NEWLINE: &str = "\\n";

// =============================================================================
// Date Literals
// =============================================================================

/// Opening delimiter of a date-literal token, e.g. `#{yyyy-MM}`.
pub const DATE_LITERAL_OPEN: &str = "#{";

/// Closing delimiter of a date-literal token.
pub const DATE_LITERAL_CLOSE: char = '}';

// =============================================================================
// Diagnostics
// =============================================================================

/// Calling context reported in not-found errors.
pub const CONFIG_CONTEXT: &str = "presetenv::config";
