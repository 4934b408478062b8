use serde::{Deserialize, Serialize};

use super::MetadataError;

/// Named bundle of goodness-of-fit statistics for a fitted model.
///
/// A flat record: on the wire all fields are attributes of a single tag, one
/// attribute per set field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Uncertainties {
    /// Numeric identifier of the quality record
    pub id: Option<i32>,

    /// Name of the fitted model
    pub model_name: Option<String>,

    /// Free-text comment
    pub comment: Option<String>,

    /// Coefficient of determination
    pub r2: Option<f64>,

    /// Root mean square error
    pub rms: Option<f64>,

    /// Sum of squared errors
    pub sse: Option<f64>,

    /// Akaike information criterion
    pub aic: Option<f64>,

    /// Bayesian information criterion
    pub bic: Option<f64>,

    /// Degrees of freedom
    pub dof: Option<u32>,
}

impl Uncertainties {
    /// Create an empty statistics bundle
    pub fn new() -> Self {
        Self::default()
    }

    /// True if no statistic is set
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
