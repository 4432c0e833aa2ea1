//! Common types used across confdiff
//!
//! This module provides the shared definitions for the three categories of
//! settings extracted from a configure log, along with the per-category
//! report headers and ignore lists.

use std::collections::HashMap;
use std::fmt;

/// Mapping from setting name to its textual value
pub type Settings = HashMap<String, String>;

/// The three categories of settings recorded in a configure log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingCategory {
    /// autoconf cached probe results (`ac_cv_*` and friends)
    Cache,
    /// Build-environment output variables
    Env,
    /// C-preprocessor `#define` directives from confdefs.h
    Confdef,
}

impl SettingCategory {
    /// All categories, in report order
    pub const ALL: [SettingCategory; 3] = [
        SettingCategory::Cache,
        SettingCategory::Env,
        SettingCategory::Confdef,
    ];

    /// Header line printed above this category's report section
    pub fn report_header(&self) -> &'static str {
        match self {
            SettingCategory::Cache => "Changes in autoconf settings",
            SettingCategory::Env => "Changes in ENV settings",
            SettingCategory::Confdef => "Changes in confdefs",
        }
    }

    /// Keys excluded from changed-value detection for this category.
    ///
    /// Mostly host-path probe results that differ from machine to machine
    /// without affecting the build.
    pub fn ignored_keys(&self) -> &'static [&'static str] {
        match self {
            SettingCategory::Cache => CACHE_VARS_IGNORE,
            SettingCategory::Env => ENV_VARS_IGNORE,
            SettingCategory::Confdef => CONFDEF_VARS_IGNORE,
        }
    }
}

impl fmt::Display for SettingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SettingCategory::Cache => "cache variables",
            SettingCategory::Env => "environment variables",
            SettingCategory::Confdef => "confdefs",
        };
        write!(f, "{}", name)
    }
}

const CACHE_VARS_IGNORE: &[&str] = &[
    "ac_cv_path_EGREP",
    "ac_cv_path_FGREP",
    "ac_cv_path_GREP",
    "ac_cv_path_PATH_CPP",
    "ac_cv_path_PATH_KRB5_CONFIG",
    "ac_cv_path_SED",
    "ac_cv_path_ac_pt_PKG_CONFIG",
    "ac_cv_path_install",
    "ac_cv_path_lt_DD",
    "lt_cv_path_LD",
    "lt_cv_path_NM",
    "lt_cv_path_mainfest_tool",
];

const ENV_VARS_IGNORE: &[&str] = &[
    "BSD_KERNEL_PATH",
    "COMPILE_ET_PATH",
    "CONFIGTOOL_PATH",
    "DEST",
    "DOCBOOK_STYLESHEETS",
    "HELPER_SPLINT",
    "HELPER_SPLINTCFG",
    "LINUX_KERNEL_BUILD",
    "LINUX_KERNEL_PATH",
    "PATH_CPP",
    "PATH_KRB5_CONFIG",
    "PKG_CONFIG",
    "RXGEN_PATH",
    "TOP_INCDIR",
    "TOP_LIBDIR",
    "TOP_OBJDIR",
    "TOP_SRCDIR",
];

const CONFDEF_VARS_IGNORE: &[&str] = &[];
