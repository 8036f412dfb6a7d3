// mediasort-core/src/lib.rs
//! # mediasort Core Library
//!
//! `mediasort-core` turns media metadata into safe destination paths. Tag
//! values are attacker-influenceable text, so the library concentrates on two
//! pure, total transforms:
//!
//! * a **bracket content filter** ([`BracketSpec`]) that removes or replaces
//!   bracketed qualifiers such as `(Limited Edition)` or `[Digital]` when their
//!   content matches a configurable pattern list;
//! * a **path sanitizer** ([`clean_segment`], [`clean_path`]) that reduces any
//!   rendered string to a relative path with no forbidden characters, no
//!   hidden or traversal segments and no segment longer than 255 bytes.
//!
//! Around them sit the naming configuration, `tinytemplate`-based path
//! templates and file placement (copy, move, dry run, sidecar files).
//!
//! ## Modules
//!
//! * `filters`: the bracket filter and its pattern compiler.
//! * `path_sanitizer`: segment and path cleaning.
//! * `template_funcs`: one-shot `remove_brackets` / `replace_in_brackets`.
//! * `config`: YAML naming configuration (template + named filters).
//! * `metadata`: tag model and JSON manifest loading.
//! * `template`: path template rendering.
//! * `placement`: destination guards, file actions and the `Sorter`.
//! * `errors`: the library error type.
//!
//! ## Usage Example
//!
//! ```rust
//! use mediasort_core::{clean_path, BracketSpec};
//!
//! let editions = BracketSpec::new("([limited,digital])");
//! let album = editions.replace("Feelgood (Limited Edition) [Digital]", "");
//! assert_eq!(album, "Feelgood  ");
//!
//! let path = clean_path(&format!("../Band/{}/01. Song #1", album));
//! assert_eq!(path, "Band/Feelgood/01. Song No1");
//! ```
//!
//! ## Error Handling
//!
//! The filter and the sanitizer cannot fail. Configuration, template and
//! filesystem operations return `anyhow::Result` or [`MediasortError`].
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod errors;
pub mod filters;
pub mod metadata;
pub mod path_sanitizer;
pub mod placement;
pub mod template;
pub mod template_funcs;

/// Re-exports the naming configuration types.
pub use config::{default_config_path, merge_configs, FilterConfig, NamingConfig, DEFAULT_TEMPLATE};

/// Re-exports the custom error type for clear error reporting.
pub use errors::MediasortError;

/// Re-exports the bracket filter.
pub use filters::brackets::BracketSpec;

/// Re-exports the metadata model and manifest loader.
pub use metadata::{load_manifest, ManifestEntry, Metadata};

/// Re-exports the path sanitizer.
pub use path_sanitizer::{clean_path, clean_segment, MAX_SEGMENT_BYTES};

/// Re-exports file placement types.
pub use placement::{
    group_with_sidecars, relative_destination, validate_destination_dir, AllowOverwrite,
    DestinationGuard, FileAction, FileGroup, PlacementOutcome, SkipExisting, Sorter,
};

/// Re-exports the path template.
pub use template::PathTemplate;

/// Re-exports the one-shot template helpers.
pub use template_funcs::{remove_brackets, replace_in_brackets};
