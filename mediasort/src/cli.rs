//! This file defines the command-line interface (CLI) for the mediasort
//! application, including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "mediasort",
    version = env!("CARGO_PKG_VERSION"),
    about = "Copy or move media files into subdirectories, based on their metadata and a path template.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Display every file action (-v), or debug diagnostics as well (-vv).
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true, help = "Display every file action; repeat for debug output.")]
    pub verbose: u8,

    /// Only print errors.
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose", help = "Only print errors.")]
    pub quiet: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `mediasort` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copies or moves the files listed in a metadata manifest into place.
    #[command(about = "Copy or move the files of a metadata manifest to their rendered destinations.")]
    Sort(SortCommand),

    /// Prints the rendered relative path of every manifest entry.
    #[command(about = "Print the rendered relative path of every manifest entry without touching files.")]
    Render(RenderCommand),

    /// Turns arbitrary text into a safe relative path.
    #[command(name = "clean-path", about = "Sanitize each argument (or stdin line) into a safe relative path.")]
    CleanPath {
        /// Paths to clean; stdin lines are used when none are given.
        #[arg(value_name = "PATH")]
        paths: Vec<String>,
    },

    /// Removes or replaces bracketed qualifiers in text.
    #[command(about = "Remove or replace bracketed qualifiers in each argument (or stdin line).")]
    Brackets(BracketsCommand),
}

/// Options shared by commands that read a manifest.
#[derive(Args, Debug)]
pub struct ManifestArgs {
    /// JSON manifest of media files and their metadata, `-` for stdin.
    #[arg(long, short = 'm', value_name = "FILE", help = "JSON manifest of media files and metadata ('-' reads stdin).")]
    pub manifest: PathBuf,

    /// Naming configuration (YAML) with the path template and filters.
    #[arg(long = "config", short = 'c', value_name = "FILE", env = "MEDIASORT_CONFIG", help = "Naming configuration file (YAML).")]
    pub config: Option<PathBuf>,
}

/// Arguments for the `sort` command.
#[derive(Args, Debug)]
pub struct SortCommand {
    #[command(flatten)]
    pub manifest: ManifestArgs,

    /// Destination root directory.
    #[arg(long, short = 'o', value_name = "DIR", help = "Destination root directory.")]
    pub dest: PathBuf,

    /// Do not move or copy files, just print the new file names.
    #[arg(long = "dry-run", short = 'd', conflicts_with = "move_files", help = "Do not move/copy files, just print the new file names.")]
    pub dry_run: bool,

    /// Move files instead of copying.
    #[arg(long = "move", help = "Move files instead of copying.")]
    pub move_files: bool,

    /// Overwrite files that already exist at the destination.
    #[arg(long = "override", help = "Overwrite existing files at the destination.")]
    pub override_existing: bool,
}

/// Arguments for the `render` command.
#[derive(Args, Debug)]
pub struct RenderCommand {
    #[command(flatten)]
    pub manifest: ManifestArgs,

    /// Print a JSON array of `{source, destination}` objects.
    #[arg(long, help = "Print the result as JSON.")]
    pub json: bool,
}

/// Arguments for the `brackets` command.
#[derive(Args, Debug)]
pub struct BracketsCommand {
    /// Bracket filter configuration, e.g. "([limited,digital])".
    #[arg(long = "filter", short = 'f', value_name = "CONFIG", help = "Bracket filter configuration, e.g. \"([limited,digital])\".")]
    pub filter: String,

    /// Replacement for matching spans (removes them when omitted).
    #[arg(long = "replace", short = 'r', value_name = "TEXT", default_value = "", help = "Replacement text for matching spans.")]
    pub replacement: String,

    /// Texts to filter; stdin lines are used when none are given.
    #[arg(value_name = "TEXT")]
    pub texts: Vec<String>,
}
