//! # Archive Assembler
//!
//! The container layer: named, content-type-tagged entries packed into a zip
//! file next to a manifest that records each entry's format URI. The
//! assembler enforces name uniqueness and knows nothing about what the
//! payloads mean; composition semantics live in [`crate::taxonomy`].

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

mod error;
mod manifest;

#[cfg(test)]
mod tests;

pub use error::ArchiveError;
pub use manifest::MANIFEST_NAME;

use manifest::{decode_manifest, encode_manifest};

/// One named, typed payload inside an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Entry name, unique within the archive; link tags resolve against it
    pub name: String,
    /// Content-type URI from the manifest
    pub format: String,
    /// Serialized document bytes
    pub payload: Vec<u8>,
}

impl ArchiveEntry {
    pub fn new(name: impl Into<String>, format: impl Into<String>, payload: Vec<u8>) -> Self {
        ArchiveEntry {
            name: name.into(),
            format: format.into(),
            payload,
        }
    }
}

/// An in-memory archive: an ordered set of uniquely named entries.
#[derive(Debug, Default)]
pub struct PmfArchive {
    entries: Vec<ArchiveEntry>,
}

impl PmfArchive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry; names must be unique within the archive.
    pub fn add_entry(&mut self, entry: ArchiveEntry) -> Result<(), ArchiveError> {
        if self.entries.iter().any(|e| e.name == entry.name) {
            return Err(ArchiveError::DuplicateEntryName(entry.name));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> &[ArchiveEntry] {
        &self.entries
    }

    /// Look up an entry by name.
    pub fn entry(&self, name: &str) -> Result<&ArchiveEntry, ArchiveError> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| ArchiveError::EntryNotFound(name.to_string()))
    }

    /// Entries tagged with the given content-type URI, in insertion order.
    pub fn entries_with_format<'a>(
        &'a self,
        format: &'a str,
    ) -> impl Iterator<Item = &'a ArchiveEntry> {
        self.entries.iter().filter(move |e| e.format == format)
    }

    /// Pack the archive into a zip container.
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<(), ArchiveError> {
        let mut zip = ZipWriter::new(writer);
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        let listing: Vec<(String, String)> = self
            .entries
            .iter()
            .map(|e| (e.name.clone(), e.format.clone()))
            .collect();
        zip.start_file(MANIFEST_NAME, options)?;
        zip.write_all(&encode_manifest(&listing)?)?;

        for entry in &self.entries {
            log::debug!("packing entry {} ({})", entry.name, entry.format);
            zip.start_file(entry.name.as_str(), options)?;
            zip.write_all(&entry.payload)?;
        }

        zip.finish()?;
        Ok(())
    }

    /// Unpack an archive from a zip container.
    ///
    /// Every entry the manifest lists must be present in the container; zip
    /// members the manifest does not list are ignored.
    pub fn read_from<R: Read + Seek>(reader: R) -> Result<Self, ArchiveError> {
        let mut zip = ZipArchive::new(reader)?;

        let manifest_bytes = read_member(&mut zip, MANIFEST_NAME)
            .map_err(|e| match e {
                ArchiveError::EntryNotFound(_) => ArchiveError::MissingManifest,
                other => other,
            })?;
        let listing = decode_manifest(&manifest_bytes)?;

        let mut archive = PmfArchive::new();
        for (name, format) in listing {
            let payload = read_member(&mut zip, &name)?;
            log::debug!("unpacked entry {} ({})", name, format);
            archive.add_entry(ArchiveEntry::new(name, format, payload))?;
        }
        Ok(archive)
    }

    /// Write the archive to a file.
    pub fn save(&self, path: &Path) -> Result<(), ArchiveError> {
        log::info!("writing archive with {} entries to {:?}", self.entries.len(), path);
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))
    }

    /// Read an archive from a file.
    pub fn open(path: &Path) -> Result<Self, ArchiveError> {
        log::info!("reading archive from {:?}", path);
        let file = File::open(path)?;
        Self::read_from(BufReader::new(file))
    }
}

fn read_member<R: Read + Seek>(
    zip: &mut ZipArchive<R>,
    name: &str,
) -> Result<Vec<u8>, ArchiveError> {
    let mut member = match zip.by_name(name) {
        Ok(member) => member,
        Err(zip::result::ZipError::FileNotFound) => {
            return Err(ArchiveError::EntryNotFound(name.to_string()))
        }
        Err(e) => return Err(e.into()),
    };
    let mut payload = Vec::with_capacity(member.size() as usize);
    member.read_to_end(&mut payload)?;
    Ok(payload)
}
