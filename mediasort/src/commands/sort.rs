//! `mediasort sort`: places every manifest entry at its rendered destination.

use anyhow::{Context, Result};
use log::info;

use mediasort_core::{
    validate_destination_dir, AllowOverwrite, DestinationGuard, FileAction, PathTemplate,
    PlacementOutcome, SkipExisting, Sorter,
};

use super::{load_naming_config, read_manifest};
use crate::cli::SortCommand;
use crate::ui::output::{Reporter, Verbosity};

/// Counts reported at the end of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SortSummary {
    pub placed: usize,
    pub skipped: usize,
}

fn file_action(cmd: &SortCommand) -> FileAction {
    if cmd.dry_run {
        FileAction::DryRun
    } else if cmd.move_files {
        FileAction::Move
    } else {
        FileAction::Copy
    }
}

fn destination_guard(cmd: &SortCommand) -> Box<dyn DestinationGuard> {
    if cmd.override_existing {
        Box::new(AllowOverwrite::default())
    } else {
        Box::new(SkipExisting::default())
    }
}

pub fn run_sort(cmd: &SortCommand, reporter: Reporter) -> Result<SortSummary> {
    // A dry run exists to show what would happen.
    let reporter = if cmd.dry_run {
        reporter.at_least(Verbosity::Verbose)
    } else {
        reporter
    };

    let config = load_naming_config(cmd.manifest.config.as_deref())?;
    let template = PathTemplate::new(&config)?;
    validate_destination_dir(&cmd.dest)?;
    let entries = read_manifest(&cmd.manifest.manifest)?;

    let action = file_action(cmd);
    info!(
        "Sorting {} file(s) into {} ({:?}).",
        entries.len(),
        cmd.dest.display(),
        action
    );
    let mut sorter =
        Sorter::new(&cmd.dest, template, action, destination_guard(cmd)).with_manifest(&entries);

    let mut summary = SortSummary::default();
    for entry in &entries {
        let outcome = sorter
            .place(entry)
            .with_context(|| format!("Failed to place {}", entry.path.display()))?;
        match outcome {
            PlacementOutcome::Placed {
                destination,
                sidecars,
                skipped_sidecars,
            } => {
                reporter.info(format!(
                    "Processing file {} -> {}",
                    entry.path.display(),
                    destination.display()
                ));
                for sidecar in sidecars {
                    reporter.info(format!("  with sidecar {}", sidecar.display()));
                }
                for sidecar in skipped_sidecars {
                    reporter.warn(format!(
                        "Not overwriting existing sidecar {}",
                        sidecar.display()
                    ));
                }
                summary.placed += 1;
            }
            PlacementOutcome::Skipped {
                destination,
                reason,
            } => {
                reporter.warn(format!(
                    "Skipping {} ({}): {}",
                    entry.path.display(),
                    destination.display(),
                    reason
                ));
                summary.skipped += 1;
            }
        }
    }

    info!(
        "Sort finished: {} placed, {} skipped.",
        summary.placed, summary.skipped
    );
    Ok(summary)
}
