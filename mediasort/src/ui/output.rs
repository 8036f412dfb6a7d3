// mediasort/src/ui/output.rs
//! User-facing progress and warning lines.
//!
//! Progress goes to stdout, warnings and errors to stderr. Colors are only
//! emitted when the target stream is a terminal.

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// How chatty the reporter is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Warnings and errors.
    Normal,
    /// Every file action.
    Verbose,
}

impl Verbosity {
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if verbose > 0 {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    verbosity: Verbosity,
    stdout_color: bool,
    stderr_color: bool,
}

impl Reporter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            stdout_color: io::stdout().is_terminal(),
            stderr_color: io::stderr().is_terminal(),
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Raises the verbosity to at least `min`; a quiet reporter stays quiet.
    pub fn at_least(self, min: Verbosity) -> Self {
        if self.verbosity == Verbosity::Quiet {
            return self;
        }
        Self {
            verbosity: self.verbosity.max(min),
            ..self
        }
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        if self.verbosity >= Verbosity::Verbose {
            let _ = write_info(&mut io::stdout().lock(), msg.as_ref(), self.stdout_color);
        }
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        if self.verbosity >= Verbosity::Normal {
            let _ = write_warn(&mut io::stderr().lock(), msg.as_ref(), self.stderr_color);
        }
    }

    pub fn error(&self, msg: impl AsRef<str>) {
        let _ = write_error(&mut io::stderr().lock(), msg.as_ref(), self.stderr_color);
    }
}

pub fn write_info<W: Write>(out: &mut W, msg: &str, color: bool) -> io::Result<()> {
    if color {
        writeln!(out, "{}", msg.green())
    } else {
        writeln!(out, "{}", msg)
    }
}

pub fn write_warn<W: Write>(out: &mut W, msg: &str, color: bool) -> io::Result<()> {
    if color {
        writeln!(out, "{} {}", "Warning:".yellow().bold(), msg)
    } else {
        writeln!(out, "Warning: {}", msg)
    }
}

pub fn write_error<W: Write>(out: &mut W, msg: &str, color: bool) -> io::Result<()> {
    if color {
        writeln!(out, "{} {}", "Error:".red().bold(), msg)
    } else {
        writeln!(out, "Error: {}", msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_has_no_escapes() {
        let mut buf = Vec::new();
        write_warn(&mut buf, "careful", false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Warning: careful\n");
    }

    #[test]
    fn colored_output_has_escapes() {
        let mut buf = Vec::new();
        write_error(&mut buf, "boom", true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("\u{1b}["));
        assert!(text.contains("boom"));
    }

    #[test]
    fn dry_run_raises_verbosity_but_not_quiet() {
        let normal = Reporter::new(Verbosity::Normal).at_least(Verbosity::Verbose);
        assert_eq!(normal.verbosity(), Verbosity::Verbose);
        let quiet = Reporter::new(Verbosity::Quiet).at_least(Verbosity::Verbose);
        assert_eq!(quiet.verbosity(), Verbosity::Quiet);
    }
}
