// mediasort/src/logger.rs
//! Logger initialisation for the `mediasort` binary.
//!
//! Diagnostics go through the `log` facade to `env_logger` on stderr.
//! User-facing progress lines are printed by [`crate::ui::output::Reporter`].

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initialises `env_logger` once.
///
/// With `Some(level)` the level is forced; with `None` `RUST_LOG` decides,
/// falling back to `warn`. Calling this more than once is harmless.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).format_target(false);
    builder.try_init().ok();
}

/// Maps the `-q` / `-v` flags to a forced level, or `None` to defer to `RUST_LOG`.
pub fn level_from_flags(quiet: bool, verbose: u8) -> Option<LevelFilter> {
    if quiet {
        return Some(LevelFilter::Error);
    }
    match verbose {
        0 => None,
        1 => Some(LevelFilter::Info),
        _ => Some(LevelFilter::Debug),
    }
}
