//! Bracket qualifier filtering for metadata values.
//!
//! `brackets` holds the [`BracketSpec`](brackets::BracketSpec) scanner and
//! `compiler` turns its glob-style match patterns into a regex. Filters are
//! applied to individual tag values while a path template is rendered, before
//! the full path is sanitized.

pub mod brackets;
pub mod compiler;
