//! template_funcs.rs - One-shot bracket filter helpers.
//!
//! These mirror the two callable functions offered to path templates. Each
//! call parses its configuration afresh; callers filtering many values with
//! the same configuration should build a [`BracketSpec`] once instead.

use crate::filters::brackets::BracketSpec;

/// Removes every bracketed span selected by `config` from `text`.
pub fn remove_brackets(config: &str, text: &str) -> String {
    BracketSpec::new(config).replace(text, "")
}

/// Replaces every bracketed span selected by `config` in `text` with `replacement`.
pub fn replace_in_brackets(config: &str, replacement: &str, text: &str) -> String {
    BracketSpec::new(config).replace(text, replacement)
}
