// File: mediasort-core/src/path_sanitizer.rs
//! Turns rendered template output into a safe, relative destination path.
//!
//! Every segment is normalized independently: characters that are illegal or
//! dangerous in file names are replaced, decorative brackets become dashes,
//! shell-awkward characters are spelled out, whitespace is collapsed and the
//! ends are trimmed so that no segment can be hidden, empty or a traversal
//! (`.`/`..`). Both functions are total and `clean_path` is idempotent.
//!
//! Unicode normalization (accent stripping, transliteration) is deliberately
//! not performed.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum length of a cleaned segment, in bytes.
pub const MAX_SEGMENT_BYTES: usize = 255;

/// Marker substituted for each literal bracket character.
const BRACKET_MARKER: &str = " - ";

// Runs of underscores and whitespace collapse to one space. Underscores,
// tabs, CR and LF collapse first, then any remaining whitespace run; doing
// both in one class gives the same result.
static SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[_\s]+").expect("static regex"));

fn is_forbidden(c: char) -> bool {
    matches!(c, '<' | '>' | ':' | '"' | '\'' | '/' | '\\' | '|' | '?' | '*') || (c as u32) < 0x20
}

fn is_bracket(c: char) -> bool {
    matches!(c, '(' | ')' | '[' | ']' | '{' | '}')
}

fn trim_segment(segment: &str) -> &str {
    segment
        .trim_start_matches(['.', ' '])
        .trim_end_matches(['-', '.', ' '])
}

/// Cleans a single path segment.
///
/// The stages run in this order:
///
/// 1. forbidden characters (`< > : " ' / \ | ? *` and ASCII controls) become a space;
/// 2. each of `( ) [ ] { }` becomes `" - "`;
/// 3. backticks are removed;
/// 4. `&` becomes `and`, 5. `#` becomes `No`;
/// 6. runs of underscores and whitespace become a single space;
/// 7. leading dots/spaces and trailing dashes/dots/spaces are trimmed;
/// 8. the result is cut to at most [`MAX_SEGMENT_BYTES`] on a character boundary.
pub fn clean_segment(segment: &str) -> String {
    let mut replaced = String::with_capacity(segment.len());
    for c in segment.chars() {
        match c {
            c if is_forbidden(c) => replaced.push(' '),
            c if is_bracket(c) => replaced.push_str(BRACKET_MARKER),
            '`' => {}
            '&' => replaced.push_str("and"),
            '#' => replaced.push_str("No"),
            c => replaced.push(c),
        }
    }

    let collapsed = SPACE_RUNS.replace_all(&replaced, " ");
    let mut cleaned = trim_segment(&collapsed).to_string();

    if cleaned.len() > MAX_SEGMENT_BYTES {
        let mut end = MAX_SEGMENT_BYTES;
        while !cleaned.is_char_boundary(end) {
            end -= 1;
        }
        cleaned.truncate(end);
        // The cut may expose a trailing space or dot.
        let kept = trim_segment(&cleaned).len();
        cleaned.truncate(kept);
    }

    cleaned
}

/// Cleans every `/`-separated segment of `path` and drops the empty ones.
///
/// The result is always relative: it never starts or ends with `/` and has no
/// empty, `.` or `..` components.
pub fn clean_path(path: &str) -> String {
    path.split('/')
        .map(clean_segment)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}
