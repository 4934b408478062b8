use crate::annotation::DecodeError;
use crate::archive::ArchiveError;
use crate::xml::XmlError;

/// Errors from classifying an archive or assembling one from a composition.
#[derive(Debug, thiserror::Error)]
pub enum TaxonomyError {
    /// The document bag matches no composition case
    #[error("ambiguous composition: {0}")]
    AmbiguousCase(String),

    /// A link tag points at an entry the archive does not hold, or at an
    /// entry of the wrong kind
    #[error("link to missing entry `{0}`")]
    DanglingReference(String),

    /// Error from the container layer
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    /// A document payload failed to parse
    #[error(transparent)]
    Xml(#[from] XmlError),

    /// An annotation failed to decode
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
