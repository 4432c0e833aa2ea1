//! Fixed-format textual reports for settings diffs
//!
//! Layout:
//!
//! ```text
//! Changes in autoconf settings
//!     Added:   None
//!     Removed: None
//!     Changed:
//!       CC : gcc
//!        =>  clang
//! ```
//!
//! Section labels are indented four spaces; an empty section prints `None`
//! inline with the label padded to a fixed width. Entries are indented six
//! spaces with keys padded to the longest key in the section; a changed
//! entry continues with `=>` right-aligned to the key column.

use std::io::{self, Write};

use crate::diff::SettingsDiff;

/// Width the section label is padded to when `None` is printed inline
const SECTION_PAD: usize = 8;

/// Value-formatting mode for a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportStyle {
    /// Print every value
    #[default]
    Plain,
    /// Omit values that are exactly `"1"`: boolean-style confdefs are
    /// reported by presence alone
    Confdef,
}

impl ReportStyle {
    /// Whether `value` should be omitted from output in this style
    fn suppresses(&self, value: &str) -> bool {
        matches!(self, ReportStyle::Confdef) && value == "1"
    }
}

/// Formatter for one report section: header plus Added/Removed/Changed
#[derive(Debug)]
pub struct Report<'a> {
    header: &'a str,
    diff: &'a SettingsDiff,
    style: ReportStyle,
}

impl<'a> Report<'a> {
    /// Create a report for `diff` with the given header line
    pub fn new(header: &'a str, diff: &'a SettingsDiff, style: ReportStyle) -> Self {
        Self {
            header,
            diff,
            style,
        }
    }

    /// Render the report as a string
    pub fn render(&self) -> String {
        let mut out = String::new();
        push_line(&mut out, self.header);
        self.render_pairs(&mut out, "Added:", &self.diff.added);
        self.render_pairs(&mut out, "Removed:", &self.diff.removed);
        self.render_changed(&mut out, "Changed:", &self.diff.changed);
        out
    }

    /// Write the rendered report to `w`
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(self.render().as_bytes())
    }

    fn render_pairs(&self, out: &mut String, section: &str, pairs: &[(String, String)]) {
        if !section_label(out, section, pairs.is_empty()) {
            return;
        }

        let width = key_width(pairs.iter().map(|(key, _)| key));
        for (key, value) in pairs {
            if self.style.suppresses(value) {
                push_line(out, &format!("      {key}"));
            } else {
                push_line(out, &format!("      {key:<width$} : {value}"));
            }
        }
    }

    fn render_changed(
        &self,
        out: &mut String,
        section: &str,
        entries: &[(String, String, String)],
    ) {
        if !section_label(out, section, entries.is_empty()) {
            return;
        }

        let width = key_width(entries.iter().map(|(key, _, _)| key));
        for (key, old, new) in entries {
            let mut line = format!("      {key:<width$}");
            if !self.style.suppresses(old) {
                line.push_str(&format!(" : {old}"));
            }
            push_line(out, &line);

            // The arrow line is only worth emitting when the new side has a
            // value to show
            if !self.style.suppresses(new) {
                push_line(out, &format!("       {:>width$}  {new}", "=>"));
            }
        }
    }
}

/// Print the section label, inlining `None` when the section is empty.
/// Returns whether detail lines should follow.
fn section_label(out: &mut String, section: &str, empty: bool) -> bool {
    if empty {
        push_line(out, &format!("    {section:<SECTION_PAD$} None"));
        false
    } else {
        push_line(out, &format!("    {section}"));
        true
    }
}

/// Longest key length within a section
fn key_width<'a>(keys: impl Iterator<Item = &'a String>) -> usize {
    keys.map(String::len).max().unwrap_or(0)
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}
