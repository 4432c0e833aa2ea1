//! confdiff-tools
//!
//! Diff computation and report formatting for configure-log settings.
//! [`SettingsDiff`] computes added/removed/changed entries between two
//! settings mappings; [`Report`] renders a diff in the fixed textual layout.

pub mod diff;
pub mod report;

// Re-export main types
pub use diff::SettingsDiff;
pub use report::{Report, ReportStyle};
