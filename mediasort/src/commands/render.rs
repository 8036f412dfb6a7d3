//! `mediasort render`: prints rendered destinations without touching files.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

use mediasort_core::{relative_destination, ManifestEntry, PathTemplate};

use super::{load_naming_config, read_manifest};
use crate::cli::RenderCommand;

/// One rendered manifest entry.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RenderedEntry {
    pub source: PathBuf,
    pub destination: String,
}

/// Renders the relative destination (with the source's extension) of each entry.
pub fn render_entries(
    template: &PathTemplate,
    entries: &[ManifestEntry],
) -> Result<Vec<RenderedEntry>> {
    entries
        .iter()
        .map(|entry| {
            let relative = template.render(&entry.metadata.clean_for_paths())?;
            Ok(RenderedEntry {
                source: entry.path.clone(),
                destination: relative_destination(&relative, &entry.path),
            })
        })
        .collect()
}

pub fn run_render<W: Write>(cmd: &RenderCommand, out: &mut W) -> Result<()> {
    let config = load_naming_config(cmd.manifest.config.as_deref())?;
    let template = PathTemplate::new(&config)?;
    let entries = read_manifest(&cmd.manifest.manifest)?;
    let rendered = render_entries(&template, &entries)?;

    if cmd.json {
        serde_json::to_writer_pretty(&mut *out, &rendered)?;
        writeln!(out)?;
    } else {
        for entry in &rendered {
            writeln!(out, "{}", entry.destination)?;
        }
    }
    Ok(())
}
