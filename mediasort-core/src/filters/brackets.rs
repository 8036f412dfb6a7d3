//! brackets.rs - Conditional removal or replacement of bracketed qualifiers.
//!
//! A [`BracketSpec`] is parsed from a short configuration string such as
//! `"([{limited,digital}])"`. The bracket characters that appear in the
//! configuration select which bracket types are active; the text between them
//! is a comma-separated list of match patterns. When a bracketed span of an
//! active type is found in a value and its interior matches one of the
//! patterns, the whole span is swapped for a replacement string.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use regex::Regex;

use super::compiler::{compile_matcher_with_limit, MATCHER_SIZE_LIMIT, WILDCARD};
use crate::errors::MediasortError;

/// The four canonical bracket pairs, opening to closing.
const BRACKET_PAIRS: [(char, char); 4] = [('(', ')'), ('[', ']'), ('{', '}'), ('<', '>')];

fn closing_for(open: char) -> Option<char> {
    BRACKET_PAIRS
        .iter()
        .find(|(o, _)| *o == open)
        .map(|(_, c)| *c)
}

fn is_closing(c: char) -> bool {
    BRACKET_PAIRS.iter().any(|(_, close)| *close == c)
}

/// An immutable bracket filter: the active bracket pairs plus one compiled
/// content matcher.
///
/// Cloning is cheap; the compiled regex is reference counted internally.
#[derive(Debug, Clone)]
pub struct BracketSpec {
    active: Vec<(char, char)>,
    matcher: Option<Regex>,
}

impl BracketSpec {
    /// Parses `config` and compiles its content matcher.
    ///
    /// This never fails. If the matcher cannot be compiled the returned spec
    /// is inert and the failure is logged.
    pub fn new(config: &str) -> Self {
        Self::new_with_limit(config, MATCHER_SIZE_LIMIT)
    }

    fn new_with_limit(config: &str, size_limit: usize) -> Self {
        match Self::try_new_with_limit(config, size_limit) {
            Ok(spec) => spec,
            Err(e) => {
                warn!("Bracket filter '{}' disabled: {}", config, e);
                Self::inert()
            }
        }
    }

    /// Parses `config`, surfacing a matcher compilation failure.
    pub fn try_new(config: &str) -> Result<Self, MediasortError> {
        Self::try_new_with_limit(config, MATCHER_SIZE_LIMIT)
    }

    fn try_new_with_limit(config: &str, size_limit: usize) -> Result<Self, MediasortError> {
        let (active, patterns) = parse_config(config);
        let matcher = compile_matcher_with_limit(&patterns, size_limit)?;
        debug!(
            "Bracket filter '{}': {} active pair(s), patterns {:?}",
            config,
            active.len(),
            patterns
        );
        Ok(Self {
            active,
            matcher: Some(matcher),
        })
    }

    fn inert() -> Self {
        Self {
            active: Vec::new(),
            matcher: None,
        }
    }

    /// Returns `true` when no bracket type is active; `replace` is then the identity.
    pub fn is_inert(&self) -> bool {
        self.active.is_empty() || self.matcher.is_none()
    }

    /// Returns `true` if `open` is an active opening bracket.
    pub fn is_active(&self, open: char) -> bool {
        self.closing(open).is_some()
    }

    fn closing(&self, open: char) -> Option<char> {
        self.active.iter().find(|(o, _)| *o == open).map(|(_, c)| *c)
    }

    /// Replaces every matching bracketed span of an active type in `text`.
    ///
    /// Spans are found by counting only the opening and closing characters of
    /// their own type, so brackets of other types inside a span are plain
    /// content. A span whose interior matches is replaced by `replacement`;
    /// a span that does not match is copied verbatim. An opening bracket that
    /// never balances ends the scan and the rest of `text` is copied as is.
    pub fn replace(&self, text: &str, replacement: &str) -> String {
        let Some(matcher) = self.matcher.as_ref().filter(|_| !self.active.is_empty()) else {
            return text.to_string();
        };

        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        let mut i = 0;

        while i < chars.len() {
            let Some(close) = self.closing(chars[i]) else {
                out.push(chars[i]);
                i += 1;
                continue;
            };

            let open = chars[i];
            let start = i;
            let mut depth = 1usize;
            i += 1;
            while i < chars.len() && depth > 0 {
                if chars[i] == open {
                    depth += 1;
                } else if chars[i] == close {
                    depth -= 1;
                }
                i += 1;
            }

            if depth > 0 {
                out.extend(&chars[start..]);
                break;
            }

            let interior: String = chars[start + 1..i - 1].iter().collect();
            if matcher.is_match(&interior) {
                out.push_str(replacement);
            } else {
                out.extend(&chars[start..i]);
            }
        }

        out
    }
}

/// Single-pass, flag-driven scan of a configuration string.
///
/// Any opening bracket activates its pair and starts a pattern region; any
/// closing bracket ends the region. Brackets need not balance and regions are
/// concatenated.
fn parse_config(config: &str) -> (Vec<(char, char)>, Vec<String>) {
    let mut active: Vec<(char, char)> = Vec::new();
    let mut source = String::new();
    let mut in_region = false;

    for c in config.chars() {
        if let Some(close) = closing_for(c) {
            if !active.iter().any(|(o, _)| *o == c) {
                active.push((c, close));
            }
            in_region = true;
        } else if is_closing(c) {
            in_region = false;
        } else if in_region {
            source.push(c);
        }
    }

    let mut patterns: Vec<String> = source
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();
    if patterns.is_empty() {
        patterns.push(WILDCARD.to_string());
    }

    (active, patterns)
}
