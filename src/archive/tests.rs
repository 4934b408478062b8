use std::io::Cursor;

use super::*;
use crate::schema::{URI_NUML, URI_SBML};

fn entry(name: &str, format: &str) -> ArchiveEntry {
    ArchiveEntry::new(name, format, format!("payload of {name}").into_bytes())
}

#[test]
fn test_archive_roundtrip() {
    let mut archive = PmfArchive::new();
    archive.add_entry(entry("model.sbml", URI_SBML)).unwrap();
    archive.add_entry(entry("data.numl", URI_NUML)).unwrap();

    let mut buffer = Cursor::new(Vec::new());
    archive.write_to(&mut buffer).unwrap();
    buffer.set_position(0);

    let restored = PmfArchive::read_from(buffer).unwrap();
    assert_eq!(restored.entries(), archive.entries());

    let data = restored.entry("data.numl").unwrap();
    assert_eq!(data.format, URI_NUML);
    assert_eq!(data.payload, b"payload of data.numl");
}

#[test]
fn test_duplicate_entry_name_is_rejected() {
    let mut archive = PmfArchive::new();
    archive.add_entry(entry("model.sbml", URI_SBML)).unwrap();

    let err = archive.add_entry(entry("model.sbml", URI_NUML)).unwrap_err();
    assert!(matches!(err, ArchiveError::DuplicateEntryName(name) if name == "model.sbml"));
    assert_eq!(archive.entries().len(), 1);
}

#[test]
fn test_entry_lookup_miss() {
    let archive = PmfArchive::new();
    assert!(matches!(
        archive.entry("nope"),
        Err(ArchiveError::EntryNotFound(_))
    ));
}

#[test]
fn test_entries_with_format_filters() {
    let mut archive = PmfArchive::new();
    archive.add_entry(entry("a.sbml", URI_SBML)).unwrap();
    archive.add_entry(entry("b.numl", URI_NUML)).unwrap();
    archive.add_entry(entry("c.numl", URI_NUML)).unwrap();

    let names: Vec<_> = archive
        .entries_with_format(URI_NUML)
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, vec!["b.numl", "c.numl"]);
}

#[test]
fn test_container_without_manifest() {
    // A zip with members but no manifest.xml
    let mut buffer = Cursor::new(Vec::new());
    {
        let mut zip = zip::ZipWriter::new(&mut buffer);
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("stray.txt", options).unwrap();
        std::io::Write::write_all(&mut zip, b"hello").unwrap();
        zip.finish().unwrap();
    }
    buffer.set_position(0);

    assert!(matches!(
        PmfArchive::read_from(buffer),
        Err(ArchiveError::MissingManifest)
    ));
}

#[test]
fn test_manifest_listing_missing_member() {
    // Build a valid archive, then rebuild the zip without the listed member
    let mut archive = PmfArchive::new();
    archive.add_entry(entry("data.numl", URI_NUML)).unwrap();

    let mut full = Cursor::new(Vec::new());
    archive.write_to(&mut full).unwrap();
    full.set_position(0);

    let mut source = zip::ZipArchive::new(full).unwrap();
    let mut stripped = Cursor::new(Vec::new());
    {
        let mut zip = zip::ZipWriter::new(&mut stripped);
        let options = zip::write::SimpleFileOptions::default();
        let mut manifest = source.by_name(MANIFEST_NAME).unwrap();
        zip.start_file(MANIFEST_NAME, options).unwrap();
        std::io::copy(&mut manifest, &mut zip).unwrap();
        zip.finish().unwrap();
    }
    stripped.set_position(0);

    assert!(matches!(
        PmfArchive::read_from(stripped),
        Err(ArchiveError::EntryNotFound(name)) if name == "data.numl"
    ));
}

#[test]
fn test_save_and_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("example.pmf");

    let mut archive = PmfArchive::new();
    archive.add_entry(entry("model.sbml", URI_SBML)).unwrap();
    archive.save(&path).unwrap();

    let restored = PmfArchive::open(&path).unwrap();
    assert_eq!(restored.entries(), archive.entries());
}
