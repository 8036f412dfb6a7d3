//! compiler.rs - Turns bracket-filter match patterns into a single regex.
//!
//! Match patterns use a tiny glob language: `*` matches any run of
//! characters, everything else matches itself. Letters, digits and whitespace
//! pass through untouched; every other character is escaped so that regex
//! metacharacters in a pattern (`.`, `+`, `#`, ...) are matched literally.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::errors::MediasortError;

/// The pattern used when a configuration lists no patterns at all.
pub const WILDCARD: &str = "*";

/// Upper bound for the compiled size of a content matcher. Large enough for
/// thousands of patterns; a configuration beyond it leaves its filter inert.
pub const MATCHER_SIZE_LIMIT: usize = 64 << 20;

/// Converts one glob-style match pattern into a regex fragment.
pub fn compile_pattern(pattern: &str) -> String {
    let mut fragment = String::with_capacity(pattern.len() * 2);
    for c in pattern.chars() {
        match c {
            '*' => fragment.push_str(".*"),
            c if c.is_alphabetic() || c.is_numeric() || c.is_whitespace() => fragment.push(c),
            c => {
                let mut buf = [0u8; 4];
                fragment.push_str(&regex::escape(c.encode_utf8(&mut buf)));
            }
        }
    }
    fragment
}

/// Builds the case-insensitive disjunction of all `patterns`.
///
/// An empty slice compiles to the wildcard matcher.
pub fn compile_matcher(patterns: &[String]) -> Result<Regex, MediasortError> {
    compile_matcher_with_limit(patterns, MATCHER_SIZE_LIMIT)
}

/// [`compile_matcher`] with an explicit compiled-size limit in bytes.
pub fn compile_matcher_with_limit(
    patterns: &[String],
    size_limit: usize,
) -> Result<Regex, MediasortError> {
    let fragments: Vec<String> = if patterns.is_empty() {
        vec![compile_pattern(WILDCARD)]
    } else {
        patterns.iter().map(|p| compile_pattern(p)).collect()
    };
    let source = format!("({})", fragments.join("|"));

    debug!("Compiling bracket content matcher '{}'", source);

    RegexBuilder::new(&source)
        .case_insensitive(true)
        .size_limit(size_limit)
        .build()
        .map_err(|e| MediasortError::PatternCompilation(patterns.join(","), e))
}
