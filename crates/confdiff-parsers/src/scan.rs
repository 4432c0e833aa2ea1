//! Line scanning over a configure log
//!
//! A configure log is read top-to-bottom exactly once. The scanner holds the
//! stream position across calls so the three sections can be extracted by
//! successive scans without backtracking.

use std::io::BufRead;

use regex::Regex;

use confdiff_core::{Error, Result};

/// Cursor over the lines of a configure log
pub struct LineScanner<R> {
    lines: std::io::Lines<R>,
}

impl<R: BufRead> LineScanner<R> {
    /// Create a scanner positioned at the start of the stream
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }

    /// Advance past the first line matching `stop`.
    ///
    /// Lines are trimmed before matching. Reaching end-of-input without a
    /// match is an error.
    pub fn skip_to(&mut self, stop: &Regex) -> Result<()> {
        for line in self.lines.by_ref() {
            let line = line?;
            if stop.is_match(line.trim()) {
                return Ok(());
            }
        }
        Err(Error::unexpected_eof(stop.as_str()))
    }

    /// Collect trimmed lines matching `matching` until a line matches `stop`.
    ///
    /// The stop line is consumed; non-matching lines in between are skipped.
    /// Reaching end-of-input before the stop marker is an error.
    pub fn take_matching(&mut self, matching: &Regex, stop: &Regex) -> Result<Vec<String>> {
        let mut collected = Vec::new();
        for line in self.lines.by_ref() {
            let line = line?;
            let line = line.trim();
            if stop.is_match(line) {
                return Ok(collected);
            }
            if matching.is_match(line) {
                collected.push(line.to_string());
            }
        }
        Err(Error::unexpected_eof(stop.as_str()))
    }
}
