//! confdiff-parsers
//!
//! Extraction of settings from autoconf configure logs.
//!
//! A configure log records its settings in three consecutive sections,
//! each introduced by a marker line:
//!
//! | Section | Marker | Line format |
//! |---------|--------|-------------|
//! | Cache variables | `## Cache variables. ##` | `KEY=value` |
//! | Output variables | `## Output variables. ##` | `KEY=value` |
//! | confdefs | `## confdefs.h. ##` | `#define NAME [value]` |
//!
//! The confdefs section ends at the `configure: exit` line. A log missing
//! any of these markers is treated as truncated and fails to parse.
//!
//! # Example
//!
//! ```rust,ignore
//! use confdiff_parsers::ConfigureLogParser;
//!
//! let parser = ConfigureLogParser::new();
//! let log = parser.parse_file("config.log".as_ref())?;
//!
//! println!("{} cache variables", log.cache_vars.len());
//! ```

pub mod configure;
pub mod scan;

// Re-export main types
pub use configure::{ConfigureLog, ConfigureLogParser};
pub use scan::LineScanner;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
