//! Media metadata as consumed by path templates.
//!
//! Metadata is read by an external tag reader and handed to mediasort as a
//! JSON manifest. Field names accept both `snake_case` and the `PascalCase`
//! spellings common tag dumpers emit, and numeric fields tolerate the
//! `"3/12"` or `"2009-05-01"` forms found in real tags.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use std::io::Read;
use std::path::PathBuf;

/// Tag values for a single media file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Metadata {
    #[serde(alias = "Title")]
    pub title: String,
    #[serde(alias = "Artist")]
    pub artist: String,
    #[serde(alias = "AlbumArtist")]
    pub album_artist: String,
    #[serde(alias = "Album")]
    pub album: String,
    #[serde(alias = "Genre")]
    pub genre: String,
    #[serde(alias = "Year", deserialize_with = "lenient_number")]
    pub year: Option<u32>,
    #[serde(alias = "Track", alias = "TrackNumber", deserialize_with = "lenient_number")]
    pub track: Option<u32>,
    #[serde(alias = "Disc", alias = "DiscNumber", deserialize_with = "lenient_number")]
    pub disc: Option<u32>,
}

/// One manifest record: a source media file and its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ManifestEntry {
    #[serde(alias = "SourceFile")]
    pub path: PathBuf,
    #[serde(flatten)]
    pub metadata: Metadata,
}

/// The values a path template can reference.
#[derive(Debug, Serialize)]
pub struct TemplateContext<'a> {
    pub title: &'a str,
    pub artist: &'a str,
    /// Falls back to `artist` when the tag is empty.
    pub album_artist: &'a str,
    pub album: &'a str,
    pub genre: &'a str,
    pub year: Option<u32>,
    pub track: Option<u32>,
    pub disc: Option<u32>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(u32),
    Text(String),
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<NumberOrText> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(NumberOrText::Number(n)) => Some(n),
        Some(NumberOrText::Text(text)) => {
            let digits: String = text.trim().chars().take_while(char::is_ascii_digit).collect();
            digits.parse().ok()
        }
        None => None,
    })
}

fn strip_separators(value: &str) -> String {
    value.replace(['/', '\\'], " ")
}

impl Metadata {
    /// Returns a copy with path separators in every text field replaced by a
    /// space, so a tag such as `AC/DC` cannot add a directory level.
    pub fn clean_for_paths(&self) -> Metadata {
        Metadata {
            title: strip_separators(&self.title),
            artist: strip_separators(&self.artist),
            album_artist: strip_separators(&self.album_artist),
            album: strip_separators(&self.album),
            genre: strip_separators(&self.genre),
            ..self.clone()
        }
    }

    pub fn template_context(&self) -> TemplateContext<'_> {
        let album_artist = if self.album_artist.is_empty() {
            &self.artist
        } else {
            &self.album_artist
        };
        TemplateContext {
            title: &self.title,
            artist: &self.artist,
            album_artist,
            album: &self.album,
            genre: &self.genre,
            year: self.year,
            track: self.track,
            disc: self.disc,
        }
    }
}

/// Parses a JSON array of manifest entries.
pub fn load_manifest<R: Read>(reader: R) -> Result<Vec<ManifestEntry>> {
    let entries: Vec<ManifestEntry> =
        serde_json::from_reader(reader).context("Failed to parse metadata manifest")?;
    debug!("Loaded {} manifest entries.", entries.len());
    Ok(entries)
}
