//! `mediasort clean-path` and `mediasort brackets`: line-oriented text filters.

use anyhow::Result;
use std::io::{BufRead, Write};

use mediasort_core::{clean_path, BracketSpec};

/// Applies `transform` to each of `args`, or to each line of `input` when
/// `args` is empty, writing one result per line.
fn for_each_value<R, W, F>(args: &[String], input: R, out: &mut W, transform: F) -> Result<()>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> String,
{
    if args.is_empty() {
        for line in input.lines() {
            writeln!(out, "{}", transform(&line?))?;
        }
    } else {
        for arg in args {
            writeln!(out, "{}", transform(arg))?;
        }
    }
    Ok(())
}

pub fn run_clean_path<R: BufRead, W: Write>(paths: &[String], input: R, out: &mut W) -> Result<()> {
    for_each_value(paths, input, out, clean_path)
}

pub fn run_brackets<R: BufRead, W: Write>(
    filter: &str,
    replacement: &str,
    texts: &[String],
    input: R,
    out: &mut W,
) -> Result<()> {
    let spec = BracketSpec::new(filter);
    for_each_value(texts, input, out, |text| spec.replace(text, replacement))
}
