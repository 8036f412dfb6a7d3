// mediasort/src/lib.rs
//! # mediasort CLI Application
//!
//! Command-line front end for `mediasort-core`: sorts media files into
//! directories rendered from their metadata, and exposes the path sanitizer
//! and bracket filter as standalone text commands.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
