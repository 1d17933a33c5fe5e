//! Global Configuration Constants
//!
//! Compile-time settings for treedump: the default exclusion list and the
//! markers written around every dumped file.

/// Application name used in command line help and log records
pub const APP_NAME: &str = "treedump";

/// Root directory used when none is given on the command line
pub const DEFAULT_ROOT: &str = ".";

// === File Exclusion ===
// Files whose lowercased name ends with one of these suffixes are skipped
// silently: no name line, no content.

/// Filename suffixes that are never dumped
///
/// Entries are lowercase and matched case-insensitively against the end of
/// the file name only, never against directory components.
pub const EXCLUDED_SUFFIXES: &[&str] = &[
    ".class", // Compiled JVM bytecode
    ".jar",   // JVM archives
    ".woff2", // Web fonts
];

// === Output Markers ===

/// Prefix of the delimiter line that opens a dumped file
pub const DELIMITER_OPEN: &str = "--- ";

/// Suffix of the delimiter line that opens a dumped file
pub const DELIMITER_CLOSE: &str = " ---";

/// Prefix of the notice printed in place of content for unreadable files
pub const UNREADABLE_PREFIX: &str = "Could not read ";
