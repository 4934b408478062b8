use crate::xml::XmlError;

/// Errors from assembling, writing or reading an archive container.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    /// An entry with the same name is already present
    #[error("duplicate entry name `{0}`")]
    DuplicateEntryName(String),

    /// The container holds no manifest, so entries cannot be typed
    #[error("archive has no manifest")]
    MissingManifest,

    /// The manifest names an entry the container does not hold, or a lookup
    /// asked for an unknown name
    #[error("no entry named `{0}`")]
    EntryNotFound(String),

    /// The manifest document is present but unusable
    #[error("malformed manifest: {0}")]
    MalformedManifest(String),

    /// Error from the XML layer while coding the manifest
    #[error(transparent)]
    Xml(#[from] XmlError),

    /// I/O error on the underlying file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the zip container
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}
