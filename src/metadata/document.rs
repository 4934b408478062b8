use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::MetadataError;

/// Role a document plays in a model composition.
///
/// Wire tokens are the fixed uppercase names used by existing archives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelType {
    /// Bare time-series data records
    ExperimentalData,
    /// Primary model fitted to a data record
    PrimaryModelWData,
    /// Primary model without data
    PrimaryModelWOData,
    /// Secondary model from the classical two-step fit
    TwoStepSecondaryModel,
    /// Secondary model fitted in one step together with its primary
    OneStepSecondaryModel,
    /// Manually created secondary model
    ManualSecondaryModel,
    /// Tertiary model from the two-step fit
    TwoStepTertiaryModel,
    /// Tertiary model from the one-step fit
    OneStepTertiaryModel,
    /// Manually created tertiary model
    ManualTertiaryModel,
}

impl ModelType {
    /// The serialized token for this role
    pub fn token(&self) -> &'static str {
        match self {
            ModelType::ExperimentalData => "EXPERIMENTAL_DATA",
            ModelType::PrimaryModelWData => "PRIMARY_MODEL_WDATA",
            ModelType::PrimaryModelWOData => "PRIMARY_MODEL_WODATA",
            ModelType::TwoStepSecondaryModel => "TWO_STEP_SECONDARY_MODEL",
            ModelType::OneStepSecondaryModel => "ONE_STEP_SECONDARY_MODEL",
            ModelType::ManualSecondaryModel => "MANUAL_SECONDARY_MODEL",
            ModelType::TwoStepTertiaryModel => "TWO_STEP_TERTIARY_MODEL",
            ModelType::OneStepTertiaryModel => "ONE_STEP_TERTIARY_MODEL",
            ModelType::ManualTertiaryModel => "MANUAL_TERTIARY_MODEL",
        }
    }

    /// Inverse of [`ModelType::token`]; `None` for unrecognized tokens
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "EXPERIMENTAL_DATA" => Some(ModelType::ExperimentalData),
            "PRIMARY_MODEL_WDATA" => Some(ModelType::PrimaryModelWData),
            "PRIMARY_MODEL_WODATA" => Some(ModelType::PrimaryModelWOData),
            "TWO_STEP_SECONDARY_MODEL" => Some(ModelType::TwoStepSecondaryModel),
            "ONE_STEP_SECONDARY_MODEL" => Some(ModelType::OneStepSecondaryModel),
            "MANUAL_SECONDARY_MODEL" => Some(ModelType::ManualSecondaryModel),
            "TWO_STEP_TERTIARY_MODEL" => Some(ModelType::TwoStepTertiaryModel),
            "ONE_STEP_TERTIARY_MODEL" => Some(ModelType::OneStepTertiaryModel),
            "MANUAL_TERTIARY_MODEL" => Some(ModelType::ManualTertiaryModel),
            _ => None,
        }
    }
}

/// Provenance metadata for a whole document: creator, creation/modification
/// dates, role, rights and a reference link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Creator's given name
    pub given_name: Option<String>,

    /// Creator's family name
    pub family_name: Option<String>,

    /// Creator's contact (usually an email address)
    pub contact: Option<String>,

    /// Date the document was created
    pub created: Option<NaiveDate>,

    /// Date the document was last modified
    pub modified: Option<NaiveDate>,

    /// Role of the document in its model composition
    pub model_type: Option<ModelType>,

    /// Rights statement
    pub rights: Option<String>,

    /// Link to an external reference describing the document
    pub reference_link: Option<String>,
}

impl DocumentMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if any creator field is set
    pub fn has_creator(&self) -> bool {
        self.given_name.is_some() || self.family_name.is_some() || self.contact.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
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
