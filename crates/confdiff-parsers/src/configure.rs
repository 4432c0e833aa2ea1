//! Configure-log extraction
//!
//! Walks a configure log once, collecting the cache-variable, output-variable
//! and confdefs sections into [`ConfigureLog`]. Section markers and line
//! formats are described in the crate-level docs.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use confdiff_core::{Result, ResultExt, SettingCategory, Settings};

use crate::scan::LineScanner;

/// Start of the cache-variables section
static CACHE_SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^## Cache variables\. ##$").expect("static pattern")
});

/// End of the cache section, start of the output-variables section
static OUTPUT_SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^## Output variables\. ##$").expect("static pattern")
});

/// End of the output section, start of the confdefs section
static CONFDEFS_SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^## confdefs\.h\. ##$").expect("static pattern")
});

/// End of the confdefs section
static EXIT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^configure: exit").expect("static pattern")
});

/// A `KEY=value` line: leading character is neither `#` nor whitespace
static KEY_VALUE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^#\s]\S+=").expect("static pattern")
});

/// A `#define NAME [value]` line
static DEFINE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#\s*define\s+\S+").expect("static pattern")
});

/// Captures the define name and the trailing value text
static DEFINE_PARTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#\s*define\s+(\S+)\s*(.*)$").expect("static pattern")
});

/// The three settings mappings extracted from one configure log
#[derive(Debug, Clone, Default)]
pub struct ConfigureLog {
    /// autoconf cached probe results
    pub cache_vars: Settings,
    /// Build-environment output variables
    pub env_vars: Settings,
    /// `#define` directives from confdefs.h
    pub confdefs: Settings,
}

impl ConfigureLog {
    /// The mapping for the given category
    pub fn settings(&self, category: SettingCategory) -> &Settings {
        match category {
            SettingCategory::Cache => &self.cache_vars,
            SettingCategory::Env => &self.env_vars,
            SettingCategory::Confdef => &self.confdefs,
        }
    }
}

/// Parser for autoconf configure logs
#[derive(Debug, Default)]
pub struct ConfigureLogParser;

impl ConfigureLogParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a configure log from a file path.
    ///
    /// The file handle is scoped to this call and released on all exit
    /// paths, including parse failure.
    pub fn parse_file(&self, path: &Path) -> Result<ConfigureLog> {
        let file = File::open(path)?;
        self.parse(BufReader::new(file))
    }

    /// Parse a configure log from a line stream.
    ///
    /// The stream is scanned top-to-bottom exactly once. Failing to reach
    /// any expected section marker is a fatal parse error.
    pub fn parse<R: BufRead>(&self, reader: R) -> Result<ConfigureLog> {
        let mut scanner = LineScanner::new(reader);

        scanner
            .skip_to(&CACHE_SECTION)
            .context("locating cache variables section")?;

        let cache_vars = collect_kv(
            scanner
                .take_matching(&KEY_VALUE_LINE, &OUTPUT_SECTION)
                .context("scanning cache variables")?,
        );
        let env_vars = collect_kv(
            scanner
                .take_matching(&KEY_VALUE_LINE, &CONFDEFS_SECTION)
                .context("scanning output variables")?,
        );
        let confdefs = collect_defines(
            scanner
                .take_matching(&DEFINE_LINE, &EXIT_LINE)
                .context("scanning confdefs")?,
        );

        debug!(
            cache_vars = cache_vars.len(),
            env_vars = env_vars.len(),
            confdefs = confdefs.len(),
            "parsed configure log"
        );

        Ok(ConfigureLog {
            cache_vars,
            env_vars,
            confdefs,
        })
    }
}

/// Split a `KEY=value` line on the first `=`; the value may itself contain
/// `=`. Both sides are trimmed.
fn parse_kv(line: &str) -> Option<(String, String)> {
    line.split_once('=')
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
}

/// Parse a `#define NAME [value]` line into (name, trailing value). A define
/// with no value maps to an empty string.
fn parse_define(line: &str) -> Option<(String, String)> {
    DEFINE_PARTS
        .captures(line)
        .map(|caps| (caps[1].to_string(), caps[2].trim().to_string()))
}

fn collect_kv(lines: Vec<String>) -> Settings {
    lines.iter().filter_map(|line| parse_kv(line)).collect()
}

fn collect_defines(lines: Vec<String>) -> Settings {
    lines.iter().filter_map(|line| parse_define(line)).collect()
}
