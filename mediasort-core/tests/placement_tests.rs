// mediasort-core/tests/placement_tests.rs
//! Filesystem tests for the `Sorter`.

use anyhow::Result;
use std::fs;
use std::path::Path;
use tempfile::tempdir;
use test_log::test;

use mediasort_core::{
    AllowOverwrite, FileAction, ManifestEntry, Metadata, MediasortError, NamingConfig,
    PathTemplate, PlacementOutcome, SkipExisting, Sorter,
};

fn entry(path: &Path, title: &str, track: Option<u32>) -> ManifestEntry {
    ManifestEntry {
        path: path.to_path_buf(),
        metadata: Metadata {
            title: title.to_string(),
            artist: "The Band".to_string(),
            album: "First (Deluxe)".to_string(),
            track,
            ..Default::default()
        },
    }
}

fn sorter(dest: &Path, action: FileAction) -> Result<Sorter> {
    let template = PathTemplate::new(&NamingConfig::default())?;
    Ok(Sorter::new(dest, template, action, Box::new(SkipExisting::default())))
}

#[test]
fn copies_media_and_sidecars() -> Result<()> {
    let src = tempdir()?;
    let dest = tempdir()?;
    let media = src.path().join("track01.mp3");
    fs::write(&media, b"audio")?;
    fs::write(src.path().join("track01.lrc"), b"lyrics")?;
    fs::write(src.path().join(".track01.swp"), b"hidden")?;
    fs::write(src.path().join("track02.mp3"), b"other")?;

    let mut sorter = sorter(dest.path(), FileAction::Copy)?;
    let outcome = sorter.place(&entry(&media, "Opening", Some(1)))?;

    let expected = dest.path().join("The Band/First - Deluxe/01. Opening.mp3");
    let expected_lrc = dest.path().join("The Band/First - Deluxe/01. Opening.lrc");
    assert_eq!(
        outcome,
        PlacementOutcome::Placed {
            destination: expected.clone(),
            sidecars: vec![expected_lrc.clone()],
            skipped_sidecars: vec![],
        }
    );
    assert_eq!(fs::read(&expected)?, b"audio");
    assert_eq!(fs::read(&expected_lrc)?, b"lyrics");
    assert!(media.exists(), "copy must keep the source");
    Ok(())
}

#[test]
fn move_removes_source() -> Result<()> {
    let src = tempdir()?;
    let dest = tempdir()?;
    let media = src.path().join("a.flac");
    fs::write(&media, b"audio")?;

    let mut sorter = sorter(dest.path(), FileAction::Move)?;
    sorter.place(&entry(&media, "Moved", None))?;

    assert!(!media.exists());
    assert!(dest.path().join("The Band/First - Deluxe/Moved.flac").exists());
    Ok(())
}

#[test]
fn dry_run_touches_nothing() -> Result<()> {
    let src = tempdir()?;
    let dest = tempdir()?;
    let media = src.path().join("a.ogg");
    fs::write(&media, b"audio")?;

    let mut sorter = sorter(dest.path(), FileAction::DryRun)?;
    let outcome = sorter.place(&entry(&media, "Planned", Some(12)))?;

    match outcome {
        PlacementOutcome::Placed { destination, .. } => {
            assert!(destination.ends_with("The Band/First - Deluxe/12. Planned.ogg"));
            assert!(!destination.exists());
        }
        other => panic!("unexpected outcome {:?}", other),
    }
    assert!(media.exists());
    assert_eq!(fs::read_dir(dest.path())?.count(), 0);
    Ok(())
}

#[test]
fn colliding_destinations_are_skipped() -> Result<()> {
    let src = tempdir()?;
    let dest = tempdir()?;
    let first = src.path().join("one.mp3");
    let second = src.path().join("two.mp3");
    fs::write(&first, b"first")?;
    fs::write(&second, b"second")?;

    let mut sorter = sorter(dest.path(), FileAction::Copy)?;
    sorter.place(&entry(&first, "Same", Some(1)))?;
    let outcome = sorter.place(&entry(&second, "Same", Some(1)))?;

    assert!(matches!(outcome, PlacementOutcome::Skipped { .. }));
    let placed = dest.path().join("The Band/First - Deluxe/01. Same.mp3");
    assert_eq!(fs::read(placed)?, b"first");
    Ok(())
}

#[test]
fn existing_files_are_skipped_unless_overwrite_is_allowed() -> Result<()> {
    let src = tempdir()?;
    let dest = tempdir()?;
    let media = src.path().join("x.mp3");
    fs::write(&media, b"new")?;
    let existing = dest.path().join("The Band/First - Deluxe/Song.mp3");
    fs::create_dir_all(existing.parent().unwrap())?;
    fs::write(&existing, b"old")?;

    let mut strict = sorter(dest.path(), FileAction::Copy)?;
    let outcome = strict.place(&entry(&media, "Song", None))?;
    assert!(matches!(outcome, PlacementOutcome::Skipped { .. }));
    assert_eq!(fs::read(&existing)?, b"old");

    let template = PathTemplate::new(&NamingConfig::default())?;
    let mut lenient = Sorter::new(
        dest.path(),
        template,
        FileAction::Copy,
        Box::new(AllowOverwrite::default()),
    );
    lenient.place(&entry(&media, "Song", None))?;
    assert_eq!(fs::read(&existing)?, b"new");
    Ok(())
}

#[test]
fn empty_render_is_skipped() -> Result<()> {
    let src = tempdir()?;
    let dest = tempdir()?;
    let media = src.path().join("untagged.mp3");
    fs::write(&media, b"audio")?;

    let mut sorter = sorter(dest.path(), FileAction::Copy)?;
    let blank = ManifestEntry {
        path: media.clone(),
        metadata: Metadata::default(),
    };
    assert!(matches!(sorter.place(&blank)?, PlacementOutcome::Skipped { .. }));
    Ok(())
}

#[test]
fn same_source_and_destination_is_an_error() -> Result<()> {
    let root = tempdir()?;
    let media = root.path().join("The Band/First - Deluxe/Song.mp3");
    fs::create_dir_all(media.parent().unwrap())?;
    fs::write(&media, b"audio")?;

    let mut sorter = sorter(root.path(), FileAction::Copy)?;
    let err = sorter.place(&entry(&media, "Song", None)).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<MediasortError>(),
        Some(MediasortError::SameSourceAndDestination(_))
    ));
    Ok(())
}

#[test]
fn slashes_in_tags_do_not_create_directories() -> Result<()> {
    let dest = tempdir()?;
    let sorter = sorter(dest.path(), FileAction::DryRun)?;
    let mut e = entry(Path::new("in/a.mp3"), "Either/Or", Some(3));
    e.metadata.artist = "AC/DC".to_string();

    let destination = sorter.destination_for(&e)?;
    let relative = destination.strip_prefix(dest.path())?;
    assert_eq!(relative, Path::new("AC DC/First - Deluxe/03. Either Or.mp3"));
    Ok(())
}

#[test]
fn manifest_entries_sharing_a_stem_are_not_sidecars() -> Result<()> {
    let src = tempdir()?;
    let dest = tempdir()?;
    let mp3 = src.path().join("song.mp3");
    let flac = src.path().join("song.flac");
    fs::write(&mp3, b"mp3 audio")?;
    fs::write(&flac, b"flac audio")?;
    fs::write(src.path().join("song.lrc"), b"lyrics")?;

    let entries = vec![entry(&mp3, "MP3 Title", None), entry(&flac, "FLAC Title", None)];
    let mut sorter = sorter(dest.path(), FileAction::Move)?.with_manifest(&entries);

    let album = dest.path().join("The Band/First - Deluxe");
    let first = sorter.place(&entries[0])?;
    assert_eq!(
        first,
        PlacementOutcome::Placed {
            destination: album.join("MP3 Title.mp3"),
            sidecars: vec![album.join("MP3 Title.lrc")],
            skipped_sidecars: vec![],
        }
    );

    let second = sorter.place(&entries[1])?;
    assert!(matches!(second, PlacementOutcome::Placed { .. }));
    assert_eq!(fs::read(album.join("MP3 Title.mp3"))?, b"mp3 audio");
    assert_eq!(fs::read(album.join("FLAC Title.flac"))?, b"flac audio");
    assert!(!album.join("MP3 Title.flac").exists());
    Ok(())
}

#[test]
fn existing_sidecar_destinations_are_not_overwritten() -> Result<()> {
    let src = tempdir()?;
    let dest = tempdir()?;
    let media = src.path().join("song.mp3");
    fs::write(&media, b"audio")?;
    fs::write(src.path().join("song.lrc"), b"new lyrics")?;
    let album = dest.path().join("The Band/First - Deluxe");
    fs::create_dir_all(&album)?;
    fs::write(album.join("T.lrc"), b"old lyrics")?;

    let mut sorter = sorter(dest.path(), FileAction::Copy)?;
    let outcome = sorter.place(&entry(&media, "T", None))?;

    assert_eq!(
        outcome,
        PlacementOutcome::Placed {
            destination: album.join("T.mp3"),
            sidecars: vec![],
            skipped_sidecars: vec![album.join("T.lrc")],
        }
    );
    assert_eq!(fs::read(album.join("T.lrc"))?, b"old lyrics");
    assert_eq!(fs::read(album.join("T.mp3"))?, b"audio");
    Ok(())
}
