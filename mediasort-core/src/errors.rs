//! errors.rs - Custom error types for the mediasort-core library.
//!
//! The bracket filter and the path sanitizer never fail; these variants cover
//! configuration loading, template rendering and file placement.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// All error types produced by `mediasort-core`.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MediasortError {
    #[error("Failed to compile bracket pattern '{0}': {1}")]
    PatternCompilation(String, regex::Error),

    #[error("Path template error: {0}")]
    Template(#[from] tinytemplate::error::Error),

    #[error("Invalid naming configuration: {0}")]
    InvalidConfig(String),

    #[error("Destination path {0} is the same as the source path")]
    SameSourceAndDestination(PathBuf),

    #[error("Destination {0} exists and is not a directory")]
    NotADirectory(PathBuf),
}
