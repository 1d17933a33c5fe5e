//! Case-insensitive filename suffix matching.

use std::ffi::OsStr;

use crate::config::EXCLUDED_SUFFIXES;

/// Ordered list of lowercase suffixes a file name must not end with.
///
/// The built-in entries from [`EXCLUDED_SUFFIXES`] always come first; extra
/// suffixes are appended in the order given and lowercased on insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet {
    suffixes: Vec<String>,
}

impl ExclusionSet {
    /// Creates the default set, extended with `extra` suffixes.
    ///
    /// Empty strings would match every name, so they are dropped.
    pub fn new<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut suffixes: Vec<String> = EXCLUDED_SUFFIXES.iter().map(|s| (*s).to_owned()).collect();

        for suffix in extra {
            let suffix = suffix.as_ref().to_lowercase();
            if !suffix.is_empty() && !suffixes.contains(&suffix) {
                suffixes.push(suffix);
            }
        }

        Self { suffixes }
    }

    #[inline]
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// Returns `true` if the lowercased `name` ends with any suffix in the set.
    #[must_use]
    pub fn matches(&self, name: &OsStr) -> bool {
        let name = name.to_string_lossy().to_lowercase();
        self.suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::new(std::iter::empty::<&str>())
    }
}
