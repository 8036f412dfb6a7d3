//! Configuration management for `mediasort-core`.
//!
//! A [`NamingConfig`] holds the path template and the named bracket filters
//! that templates can apply to individual tag values. Configurations are YAML
//! files; built-in defaults are used when none is given.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::errors::MediasortError;
use crate::filters::brackets::BracketSpec;

/// The template used when no configuration overrides it.
///
/// Renders `Album Artist/Album/07. Title`, omitting the track prefix when the
/// track number is missing or zero.
pub const DEFAULT_TEMPLATE: &str =
    "{album_artist}/{album}/{{ if track }}{track | two_digits}. {{ endif }}{title}";

/// Formatter names reserved by the template engine.
pub const BUILTIN_FORMATTERS: [&str; 2] = ["two_digits", "unescaped"];

/// A named bracket filter usable as a template formatter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Bracket filter configuration, e.g. `"([limited,deluxe])"`.
    pub brackets: String,
    /// Text substituted for each matching bracketed span.
    pub replacement: String,
}

/// Top-level naming configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NamingConfig {
    pub template: String,
    pub filters: BTreeMap<String, FilterConfig>,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            filters: BTreeMap::new(),
        }
    }
}

impl NamingConfig {
    /// Loads and validates a naming configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading naming configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: NamingConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        info!(
            "Loaded template and {} filter(s) from {}.",
            config.filters.len(),
            path.display()
        );
        Ok(config)
    }

    /// The built-in configuration.
    pub fn load_default() -> Self {
        debug!("Using built-in naming configuration.");
        Self::default()
    }

    /// Checks the template and filter names, reporting every problem at once.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.template.trim().is_empty() {
            errors.push("The `template` field is empty.".to_string());
        }

        for (name, filter) in &self.filters {
            if !is_identifier(name) {
                errors.push(format!(
                    "Filter name '{}' is not a valid identifier (letters, digits, underscores).",
                    name
                ));
            }
            if BUILTIN_FORMATTERS.contains(&name.as_str()) {
                errors.push(format!("Filter name '{}' shadows a built-in formatter.", name));
            }
            if BracketSpec::new(&filter.brackets).is_inert() {
                warn!(
                    "Filter '{}' activates no bracket type ('{}'); it will leave values unchanged.",
                    name, filter.brackets
                );
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(MediasortError::InvalidConfig(errors.join("\n")).into())
        }
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Overlays `user` on `base`: user filters replace base filters of the same
/// name, and a non-empty user template replaces the base template.
pub fn merge_configs(base: NamingConfig, user: Option<NamingConfig>) -> NamingConfig {
    let Some(user) = user else {
        return base;
    };
    debug!("Merging {} user filter(s) into configuration.", user.filters.len());

    let mut filters = base.filters;
    filters.extend(user.filters);
    let template = if user.template.trim().is_empty() {
        base.template
    } else {
        user.template
    };

    NamingConfig { template, filters }
}

/// Location of the per-user configuration file, if a config directory exists.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mediasort").join("naming.yaml"))
}
