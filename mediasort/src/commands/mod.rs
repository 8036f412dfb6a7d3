//! Subcommand implementations.
//!
//! Shared helpers for loading the naming configuration and the manifest live
//! here; each command has its own module.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use mediasort_core::{default_config_path, load_manifest, merge_configs, ManifestEntry, NamingConfig};

pub mod render;
pub mod sort;
pub mod text;

/// Resolves the naming configuration.
///
/// An explicit file wins; otherwise the per-user file is used when it exists;
/// otherwise the built-in defaults apply. A loaded file is merged over the
/// defaults.
pub fn load_naming_config(explicit: Option<&Path>) -> Result<NamingConfig> {
    let base = NamingConfig::load_default();
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => default_config_path().filter(|p| p.is_file()),
    };
    let Some(path) = path else {
        debug!("No naming configuration file, using defaults.");
        return Ok(base);
    };
    let user = NamingConfig::load_from_file(&path)
        .with_context(|| format!("Failed to load naming configuration {}", path.display()))?;
    Ok(merge_configs(base, Some(user)))
}

/// Reads the manifest from a file, or from stdin when `path` is `-`.
pub fn read_manifest(path: &Path) -> Result<Vec<ManifestEntry>> {
    let entries = if path == Path::new("-") {
        info!("Reading manifest from stdin.");
        load_manifest(io::stdin().lock())?
    } else {
        info!("Reading manifest from {}.", path.display());
        let file = File::open(path)
            .with_context(|| format!("Failed to open manifest {}", path.display()))?;
        load_manifest(BufReader::new(file))
            .with_context(|| format!("Failed to read manifest {}", path.display()))?
    };
    Ok(entries)
}
