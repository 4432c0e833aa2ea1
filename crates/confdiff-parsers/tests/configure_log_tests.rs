//! Integration tests for the configure-log parser
//!
//! These tests cover the section-scanning behavior end to end:
//! - Extraction of the three sections from a realistic log
//! - Key/value splitting and trimming rules
//! - Valueless and multi-word `#define` lines
//! - Failure on each missing section marker
//! - Containment of entries within their section boundaries

use std::io::Cursor;

use confdiff_core::Error;
use confdiff_parsers::{ConfigureLog, ConfigureLogParser};

/// A small but realistic configure log with all four markers
fn sample_log() -> String {
    "\
This file contains any messages produced by compilers while
running configure, to aid debugging if configure makes a mistake.

configure:2345: checking for gcc
configure:2374: result: gcc

## ---------------- ##
## Cache variables. ##
## ---------------- ##

ac_cv_c_compiler_gnu=yes
ac_cv_env_CC_set=set
ac_cv_path_GREP='/usr/bin/grep'
ac_cv_prog_CPP='gcc -E'

## ----------------- ##
## Output variables. ##
## ----------------- ##

CC='gcc'
CFLAGS='-g -O2 -DPIC=1'
LIBS=''

## ----------- ##
## confdefs.h. ##
## ----------- ##

/* confdefs.h */
#define PACKAGE_NAME \"openafs\"
#define PACKAGE_STRING \"OpenAFS 1.9.1\"
#define HAVE_STDIO_H 1
#define HAVE_UNISTD_H
# define STDC_HEADERS 1

configure: exit 0
"
    .to_string()
}

/// Parse log text from an in-memory reader
fn parse_str(text: &str) -> Result<ConfigureLog, Error> {
    ConfigureLogParser::new().parse(Cursor::new(text))
}

mod section_tests {
    use super::*;

    #[test]
    fn test_cache_variables_extracted() {
        let log = parse_str(&sample_log()).unwrap();

        assert_eq!(log.cache_vars.len(), 4);
        assert_eq!(log.cache_vars["ac_cv_c_compiler_gnu"], "yes");
        assert_eq!(log.cache_vars["ac_cv_path_GREP"], "'/usr/bin/grep'");
    }

    #[test]
    fn test_output_variables_extracted() {
        let log = parse_str(&sample_log()).unwrap();

        assert_eq!(log.env_vars.len(), 3);
        assert_eq!(log.env_vars["CC"], "'gcc'");
        assert_eq!(log.env_vars["LIBS"], "''");
    }

    #[test]
    fn test_confdefs_extracted() {
        let log = parse_str(&sample_log()).unwrap();

        assert_eq!(log.confdefs.len(), 5);
        assert_eq!(log.confdefs["PACKAGE_NAME"], "\"openafs\"");
        assert_eq!(log.confdefs["HAVE_STDIO_H"], "1");
    }

    #[test]
    fn test_sections_do_not_leak() {
        let log = parse_str(&sample_log()).unwrap();

        // CC appears only in the output-variables section
        assert!(!log.cache_vars.contains_key("CC"));
        assert!(log.env_vars.contains_key("CC"));
        // Cache entries stay out of the env section
        assert!(!log.env_vars.contains_key("ac_cv_c_compiler_gnu"));
    }

    #[test]
    fn test_preamble_and_borders_skipped() {
        let log = parse_str(&sample_log()).unwrap();

        // `configure:2374: result: gcc` is before the cache marker, and the
        // `## ---- ##` border lines start with `#`
        assert!(!log.cache_vars.keys().any(|k| k.starts_with("configure")));
        assert!(!log.cache_vars.keys().any(|k| k.starts_with("##")));
    }
}

mod value_tests {
    use super::*;

    #[test]
    fn test_value_may_contain_equals() {
        let log = parse_str(&sample_log()).unwrap();
        assert_eq!(log.env_vars["CFLAGS"], "'-g -O2 -DPIC=1'");
    }

    #[test]
    fn test_define_without_value_is_empty() {
        let log = parse_str(&sample_log()).unwrap();
        assert_eq!(log.confdefs["HAVE_UNISTD_H"], "");
    }

    #[test]
    fn test_define_multi_word_value_preserved() {
        let log = parse_str(&sample_log()).unwrap();
        assert_eq!(log.confdefs["PACKAGE_STRING"], "\"OpenAFS 1.9.1\"");
    }

    #[test]
    fn test_define_with_space_after_hash() {
        let log = parse_str(&sample_log()).unwrap();
        assert_eq!(log.confdefs["STDC_HEADERS"], "1");
    }

    #[test]
    fn test_lines_trimmed_before_matching() {
        // Lines are trimmed before pattern matching: indentation does not
        // exclude a KEY=value line, but a leading `#` does.
        let text = "\
## Cache variables. ##
ac_cv_one=1
  ac_cv_two=2
# commented=skipped
## Output variables. ##
## confdefs.h. ##
configure: exit 0
";
        let log = parse_str(text).unwrap();
        assert_eq!(log.cache_vars.len(), 2);
        assert_eq!(log.cache_vars["ac_cv_two"], "2");
        assert!(!log.cache_vars.contains_key("commented"));
    }
}

mod marker_tests {
    use super::*;

    #[test]
    fn test_missing_cache_marker_fails() {
        let err = parse_str("no markers at all\n").unwrap_err();
        assert!(err.is_unexpected_eof());
    }

    #[test]
    fn test_missing_output_marker_fails() {
        let text = "## Cache variables. ##\nac_cv_one=1\n";
        let err = parse_str(text).unwrap_err();
        assert!(err.is_unexpected_eof());
    }

    #[test]
    fn test_missing_confdefs_marker_fails() {
        let text = "\
## Cache variables. ##
## Output variables. ##
CC='gcc'
";
        let err = parse_str(text).unwrap_err();
        assert!(err.is_unexpected_eof());
        assert!(err.to_string().contains("output variables"));
    }

    #[test]
    fn test_missing_exit_marker_fails() {
        let text = "\
## Cache variables. ##
## Output variables. ##
## confdefs.h. ##
#define HAVE_STDIO_H 1
";
        let err = parse_str(text).unwrap_err();
        assert!(err.is_unexpected_eof());
        assert!(err.to_string().contains("confdefs"));
    }

    #[test]
    fn test_empty_sections_parse() {
        let text = "\
## Cache variables. ##
## Output variables. ##
## confdefs.h. ##
configure: exit 1
";
        let log = parse_str(text).unwrap();
        assert!(log.cache_vars.is_empty());
        assert!(log.env_vars.is_empty());
        assert!(log.confdefs.is_empty());
    }
}

mod file_tests {
    use super::*;

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ConfigureLogParser::new()
            .parse_file("/no/such/config.log".as_ref())
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
