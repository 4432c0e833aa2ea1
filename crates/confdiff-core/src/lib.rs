//! confdiff Core Library
//!
//! This crate provides the shared types and error handling used by the
//! confdiff parser and reporting crates.

pub mod error;
pub mod types;

pub use error::{Error, Result, ResultExt};
pub use types::*;
