//! Common type definitions for treedump.
//!
//! - [`Outcome`]: what happened to a single visited file
//! - [`Summary`]: running totals for a whole dump

use std::fmt::{Display, Formatter, Result};

use bytesize::ByteSize;
use strum::Display as StrumDisplay;

/// Result of visiting one file during the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum Outcome {
    /// The name matched the exclusion set; nothing was written.
    Skipped,

    /// The file was read as UTF-8 and written out in full.
    Dumped {
        /// Size of the content in bytes.
        bytes: u64,
    },

    /// The read or decode failed; an inline notice was written instead.
    Unreadable,
}

/// Totals for a completed dump.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub dumped: usize,
    pub skipped: usize,
    pub unreadable: usize,

    /// Sum of the content sizes of all dumped files.
    pub bytes: u64,
}

impl Summary {
    /// Folds one file's outcome into the totals.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Skipped => self.skipped += 1,
            Outcome::Dumped { bytes } => {
                self.dumped += 1;
                self.bytes += bytes;
            }
            Outcome::Unreadable => self.unreadable += 1,
        }
    }

    /// Number of files visited, skipped ones included.
    #[inline]
    #[must_use]
    pub fn visited(&self) -> usize {
        self.dumped + self.skipped + self.unreadable
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{} file(s) dumped ({}), {} skipped, {} unreadable",
            self.dumped,
            ByteSize::b(self.bytes),
            self.skipped,
            self.unreadable
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_record() {
        let mut summary = Summary::default();
        summary.record(Outcome::Dumped { bytes: 5 });
        summary.record(Outcome::Skipped);
        summary.record(Outcome::Dumped { bytes: 7 });
        summary.record(Outcome::Unreadable);

        assert_eq!(summary, Summary { dumped: 2, skipped: 1, unreadable: 1, bytes: 12 });
        assert_eq!(summary.visited(), 4);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Skipped.to_string(), "skipped");
        assert_eq!(Outcome::Dumped { bytes: 3 }.to_string(), "dumped");
        assert_eq!(Outcome::Unreadable.to_string(), "unreadable");
    }

    #[test]
    fn test_summary_display() {
        let summary = Summary { dumped: 1, skipped: 2, unreadable: 0, bytes: 0 };
        let text = summary.to_string();
        assert!(text.starts_with("1 file(s) dumped ("));
        assert!(text.ends_with("), 2 skipped, 0 unreadable"));
    }
}
