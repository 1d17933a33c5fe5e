//! Tree dumper: writes every non-excluded file under a root to a writer.
//!
//! A file whose name matches the exclusion set writes nothing at all, not
//! even its name. Every other file writes its name, then its content:
//!
//! ```text
//! <name>
//! --- <relative path> ---
//! <content>
//!
//! ```
//!
//! or, when the file cannot be read as UTF-8:
//!
//! ```text
//! <name>
//! Could not read <relative path>: <error>
//! ```

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::{DELIMITER_CLOSE, DELIMITER_OPEN, UNREADABLE_PREFIX};
use crate::exclusion::ExclusionSet;
use crate::file::File;
use crate::types::{Outcome, Summary};

pub struct Dumper<W: Write> {
    out: W,
    exclusions: ExclusionSet,
    summary: Summary,
}

impl<W: Write> Dumper<W> {
    pub fn new(out: W, exclusions: ExclusionSet) -> Self {
        Self { out, exclusions, summary: Summary::default() }
    }

    /// Dumps every file under `root` and flushes the writer.
    ///
    /// Per-file read failures are written inline and never stop the walk.
    /// Traversal failures and write failures are returned as errors.
    pub fn dump_tree(&mut self, root: &Path, sorted: bool) -> Result<Summary> {
        for file in File::discover(root, sorted) {
            let file = file?;
            let outcome = self.visit(&file)?;
            debug!(path = %file.relative().display(), %outcome, "visited");
            self.summary.record(outcome);
        }

        self.out.flush().context("failed to flush output")?;

        Ok(self.summary)
    }

    /// Writes the block for a single file and reports what happened to it.
    pub fn visit(&mut self, file: &File) -> Result<Outcome> {
        if file.is_excluded(&self.exclusions) {
            return Ok(Outcome::Skipped);
        }

        writeln!(self.out, "{}", file.name().to_string_lossy()).context("failed to write output")?;

        let relative = file.relative().display();
        let outcome = match file.read_text() {
            Ok(content) => {
                writeln!(self.out, "{DELIMITER_OPEN}{relative}{DELIMITER_CLOSE}").context("failed to write output")?;
                self.out.write_all(content.as_bytes()).context("failed to write output")?;
                self.out.write_all(b"\n\n").context("failed to write output")?;
                Outcome::Dumped { bytes: content.len() as u64 }
            }
            Err(err) => {
                debug!(path = %file.path().display(), error = %err, "unreadable file");
                writeln!(self.out, "{UNREADABLE_PREFIX}{relative}: {}", err.root_cause()).context("failed to write output")?;
                Outcome::Unreadable
            }
        };

        Ok(outcome)
    }
}
