use serde::{Deserialize, Serialize};

use super::MetadataError;

/// Kind of publication a [`Reference`] cites.
///
/// Wire tokens are fixed lowercase strings; the mapping is a static match
/// table in both directions rather than a runtime name lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceType {
    Paper,
    Sop,
    LabAssay,
    Handbook,
    Labbook,
    Book,
    Website,
    Report,
}

impl ReferenceType {
    /// The serialized token for this type
    pub fn token(&self) -> &'static str {
        match self {
            ReferenceType::Paper => "paper",
            ReferenceType::Sop => "sop",
            ReferenceType::LabAssay => "la",
            ReferenceType::Handbook => "handbook",
            ReferenceType::Labbook => "labbook",
            ReferenceType::Book => "book",
            ReferenceType::Website => "website",
            ReferenceType::Report => "report",
        }
    }

    /// Inverse of [`ReferenceType::token`]; `None` for unrecognized tokens
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "paper" => Some(ReferenceType::Paper),
            "sop" => Some(ReferenceType::Sop),
            "la" => Some(ReferenceType::LabAssay),
            "handbook" => Some(ReferenceType::Handbook),
            "labbook" => Some(ReferenceType::Labbook),
            "book" => Some(ReferenceType::Book),
            "website" => Some(ReferenceType::Website),
            "report" => Some(ReferenceType::Report),
            _ => None,
        }
    }
}

/// Bibliographic citation attached to models and data records.
///
/// Every field is independently optional; a reference with no fields set is
/// valid and serializes to an empty tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    /// Author list as a single string
    pub author: Option<String>,

    /// Publication year
    pub year: Option<i32>,

    /// Publication title
    pub title: Option<String>,

    /// Abstract text
    pub abstract_text: Option<String>,

    /// Journal name
    pub journal: Option<String>,

    /// Volume identifier
    pub volume: Option<String>,

    /// Issue identifier
    pub issue: Option<String>,

    /// Start page
    pub page: Option<i32>,

    /// Approval mode used during curation
    pub approval_mode: Option<i32>,

    /// Website URL
    pub website: Option<String>,

    /// Kind of publication
    pub ref_type: Option<ReferenceType>,

    /// Free-text comment
    pub comment: Option<String>,
}

impl Reference {
    /// Create a reference with no fields set
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, MetadataError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, MetadataError> {
        Ok(serde_json::from_str(json)?)
    }
}
