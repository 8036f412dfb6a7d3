// mediasort/src/main.rs
//! mediasort entry point.
//!
//! Parses the command line, initialises logging and dispatches to a command.

use anyhow::Result;
use clap::Parser;
use std::io;

use mediasort::cli::{Cli, Commands};
use mediasort::commands::{render, sort, text};
use mediasort::logger;
use mediasort::ui::output::{Reporter, Verbosity};

fn run(cli: Cli, reporter: Reporter) -> Result<()> {
    match cli.command {
        Commands::Sort(cmd) => {
            let summary = sort::run_sort(&cmd, reporter)?;
            if summary.skipped > 0 {
                reporter.warn(format!(
                    "{} file(s) placed, {} skipped.",
                    summary.placed, summary.skipped
                ));
            }
        }
        Commands::Render(cmd) => {
            render::run_render(&cmd, &mut io::stdout().lock())?;
        }
        Commands::CleanPath { paths } => {
            text::run_clean_path(&paths, io::stdin().lock(), &mut io::stdout().lock())?;
        }
        Commands::Brackets(cmd) => {
            text::run_brackets(
                &cmd.filter,
                &cmd.replacement,
                &cmd.texts,
                io::stdin().lock(),
                &mut io::stdout().lock(),
            )?;
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logger::init_logger(logger::level_from_flags(cli.quiet, cli.verbose));
    let reporter = Reporter::new(Verbosity::from_flags(cli.quiet, cli.verbose));

    if let Err(err) = run(cli, reporter) {
        reporter.error(format!("{:#}", err));
        std::process::exit(1);
    }
}
