//! confdiff - Compare autoconf configure logs
//!
//! Parses two configure logs and reports added, removed, and changed
//! settings in three categories: cache variables, environment variables,
//! and confdefs.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use confdiff_core::SettingCategory;
use confdiff_parsers::{ConfigureLog, ConfigureLogParser};
use confdiff_tools::{Report, ReportStyle, SettingsDiff};

/// Exit code when either log cannot be opened or parsed
const EXIT_PARSE_FAILURE: i32 = 12;

/// Compare two autoconf configure logs
#[derive(Parser)]
#[command(name = "confdiff")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Old configuration log
    old: PathBuf,

    /// New configuration log
    new: PathBuf,
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();

    let old = parse_log(&cli.old, "old");
    let new = parse_log(&cli.new, "new");

    let mut stdout = io::stdout().lock();
    for category in SettingCategory::ALL {
        report_category(&mut stdout, category, &old, &new).context("writing report")?;
    }

    Ok(())
}

/// Parse one log, or print the failure and exit with code 12.
///
/// A log that fails to parse aborts the whole comparison before any report
/// output is produced.
fn parse_log(path: &Path, which: &str) -> ConfigureLog {
    match ConfigureLogParser::new().parse_file(path) {
        Ok(log) => log,
        Err(err) => {
            println!(
                "Error processing {} config '{}': {}",
                which,
                path.display(),
                err
            );
            process::exit(EXIT_PARSE_FAILURE);
        }
    }
}

/// Diff one category of settings and print its report section
fn report_category<W: Write>(
    w: &mut W,
    category: SettingCategory,
    old: &ConfigureLog,
    new: &ConfigureLog,
) -> io::Result<()> {
    debug!(%category, "diffing");

    let diff = SettingsDiff::compare(
        old.settings(category),
        new.settings(category),
        category.ignored_keys(),
    );
    let style = match category {
        SettingCategory::Confdef => ReportStyle::Confdef,
        _ => ReportStyle::Plain,
    };

    Report::new(category.report_header(), &diff, style).write_to(w)
}
