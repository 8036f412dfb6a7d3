// File: mediasort-core/src/placement.rs
//! Places media files (and their sidecars) at their rendered destinations.
//!
//! A [`Sorter`] renders the destination for each manifest entry, asks its
//! [`DestinationGuard`] whether the destination may be written, then applies
//! a [`FileAction`] to the media file and every sidecar file sharing its stem.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::debug;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::MediasortError;
use crate::metadata::ManifestEntry;
use crate::template::PathTemplate;

/// A media file plus the sidecar files renamed in lockstep with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileGroup {
    pub media_file: PathBuf,
    pub sidecar_files: Vec<PathBuf>,
}

/// What to do with a file once its destination is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Copy,
    Move,
    DryRun,
}

impl FileAction {
    /// Applies the action, creating the destination directory if needed.
    pub fn apply(&self, src: &Path, dest: &Path) -> Result<()> {
        if *self == FileAction::DryRun {
            return Ok(());
        }
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Error creating directory {}", parent.display()))?;
        }
        match self {
            FileAction::Copy => {
                fs::copy(src, dest).with_context(|| {
                    format!("Error copying file {} to {}", src.display(), dest.display())
                })?;
            }
            FileAction::Move => {
                fs::rename(src, dest).with_context(|| {
                    format!("Error moving file {} to {}", src.display(), dest.display())
                })?;
            }
            FileAction::DryRun => {}
        }
        Ok(())
    }
}

/// Collision policy for destinations.
pub trait DestinationGuard {
    /// Returns `true` if `dest` must not be written. A destination that is not
    /// taken is claimed for the rest of the run.
    fn is_taken(&mut self, dest: &Path) -> bool;
}

/// Refuses destinations that already exist on disk or were claimed earlier
/// in the run.
#[derive(Debug, Default)]
pub struct SkipExisting {
    claimed: HashSet<PathBuf>,
}

impl DestinationGuard for SkipExisting {
    fn is_taken(&mut self, dest: &Path) -> bool {
        dest.exists() || !self.claimed.insert(dest.to_path_buf())
    }
}

/// Overwrites existing files, but never lets two sources of the same run
/// write the same destination.
#[derive(Debug, Default)]
pub struct AllowOverwrite {
    claimed: HashSet<PathBuf>,
}

impl DestinationGuard for AllowOverwrite {
    fn is_taken(&mut self, dest: &Path) -> bool {
        !self.claimed.insert(dest.to_path_buf())
    }
}

/// Result of placing one manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementOutcome {
    Placed {
        destination: PathBuf,
        sidecars: Vec<PathBuf>,
        /// Sidecar destinations refused by the guard; those sidecars stay put.
        skipped_sidecars: Vec<PathBuf>,
    },
    Skipped {
        destination: PathBuf,
        reason: String,
    },
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}

/// Resolves `path` for identity comparisons, falling back to the path as given.
fn identity(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Finds the sidecars of `media`: visible files in the same directory whose
/// stem equals the media file's stem. Files in `media_files` are media files
/// in their own right and never count as sidecars.
pub fn group_with_sidecars(media: &Path, media_files: &HashSet<PathBuf>) -> Result<FileGroup> {
    let stem = media.file_stem().map(|s| s.to_os_string());
    let dir = match media.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut sidecar_files = Vec::new();
    let entries = fs::read_dir(&dir)
        .with_context(|| format!("Error reading directory {}", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() || is_hidden(&path) {
            continue;
        }
        if path.file_name() == media.file_name() {
            continue;
        }
        if path.file_stem().map(|s| s.to_os_string()) != stem {
            continue;
        }
        if media_files.contains(&identity(&path)) {
            debug!("{} has its own manifest entry, not a sidecar", path.display());
            continue;
        }
        sidecar_files.push(path);
    }
    sidecar_files.sort();

    debug!(
        "Found {} sidecar(s) for {}",
        sidecar_files.len(),
        media.display()
    );
    Ok(FileGroup {
        media_file: media.to_path_buf(),
        sidecar_files,
    })
}

/// Appends the extension of `source` to a rendered relative path. An empty
/// render stays empty.
pub fn relative_destination(relative: &str, source: &Path) -> String {
    let mut name = relative.to_string();
    if name.is_empty() {
        return name;
    }
    if let Some(ext) = source.extension().and_then(|e| e.to_str()) {
        name.push('.');
        name.push_str(ext);
    }
    name
}

fn with_extension_of(base: &Path, relative: &str, source: &Path) -> PathBuf {
    base.join(relative_destination(relative, source))
}

/// Fails if `dest` exists and is not a directory. A missing directory is
/// fine; it is created on the first placement.
pub fn validate_destination_dir(dest: &Path) -> Result<(), MediasortError> {
    if dest.exists() && !dest.is_dir() {
        return Err(MediasortError::NotADirectory(dest.to_path_buf()));
    }
    Ok(())
}

/// Renders destinations and moves files into place.
pub struct Sorter {
    dest_dir: PathBuf,
    template: PathTemplate,
    action: FileAction,
    guard: Box<dyn DestinationGuard>,
    media_files: HashSet<PathBuf>,
}

impl Sorter {
    pub fn new(
        dest_dir: impl Into<PathBuf>,
        template: PathTemplate,
        action: FileAction,
        guard: Box<dyn DestinationGuard>,
    ) -> Self {
        Self {
            dest_dir: dest_dir.into(),
            template,
            action,
            guard,
            media_files: HashSet::new(),
        }
    }

    /// Registers every manifest entry as a media file, so that entries sharing
    /// a stem (`song.mp3`, `song.flac`) are placed on their own instead of
    /// being carried along as each other's sidecars.
    pub fn with_manifest(mut self, entries: &[ManifestEntry]) -> Self {
        self.media_files = entries.iter().map(|e| identity(&e.path)).collect();
        self
    }

    /// The destination of `entry`'s media file, without touching the filesystem.
    pub fn destination_for(&self, entry: &ManifestEntry) -> Result<PathBuf, MediasortError> {
        let relative = self.template.render(&entry.metadata.clean_for_paths())?;
        Ok(with_extension_of(&self.dest_dir, &relative, &entry.path))
    }

    /// Places one manifest entry and its sidecars.
    pub fn place(&mut self, entry: &ManifestEntry) -> Result<PlacementOutcome> {
        let relative = self.template.render(&entry.metadata.clean_for_paths())?;
        let destination = with_extension_of(&self.dest_dir, &relative, &entry.path);

        if relative.is_empty() {
            debug!("No usable tags for {}, skipping", entry.path.display());
            return Ok(PlacementOutcome::Skipped {
                destination,
                reason: "template rendered an empty path".to_string(),
            });
        }

        if destination == entry.path {
            return Err(MediasortError::SameSourceAndDestination(destination).into());
        }

        if self.guard.is_taken(&destination) {
            debug!(
                "File {} already exists, skipping {}",
                destination.display(),
                entry.path.display()
            );
            return Ok(PlacementOutcome::Skipped {
                destination,
                reason: "destination already exists".to_string(),
            });
        }

        let group = group_with_sidecars(&entry.path, &self.media_files)?;
        debug!(
            "Processing file {} -> {}",
            entry.path.display(),
            destination.display()
        );
        self.action.apply(&group.media_file, &destination)?;

        let mut sidecars = Vec::with_capacity(group.sidecar_files.len());
        let mut skipped_sidecars = Vec::new();
        for sidecar in &group.sidecar_files {
            let sidecar_dest = with_extension_of(&self.dest_dir, &relative, sidecar);
            if self.guard.is_taken(&sidecar_dest) {
                debug!(
                    "Sidecar destination {} already exists, leaving {}",
                    sidecar_dest.display(),
                    sidecar.display()
                );
                skipped_sidecars.push(sidecar_dest);
                continue;
            }
            debug!(
                "Sidecar {} -> {}",
                sidecar.display(),
                sidecar_dest.display()
            );
            self.action.apply(sidecar, &sidecar_dest)?;
            sidecars.push(sidecar_dest);
        }

        Ok(PlacementOutcome::Placed {
            destination,
            sidecars,
            skipped_sidecars,
        })
    }
}
