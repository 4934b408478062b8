//! # Metadata Records
//!
//! The typed value records carried as annotations in PMF-ML documents:
//! bibliographic references, uncertainty statistics, compartment/species/
//! coefficient extensions and whole-document metadata bundles.
//!
//! ## Design
//!
//! Every optional field is an `Option`; presence is tracked by the type
//! system, not by NaN or empty-string sentinels. Absence on decode leaves a
//! field `None`, so re-encoding an unset field emits nothing. Records are
//! plain values with no I/O; the wire mapping lives in [`crate::annotation`].
//!
//! Records also serialize to JSON for export and inspection outside the XML
//! wire form.

mod document;
mod error;
mod extension;
mod quality;
mod reference;


pub use document::{DocumentMetadata, ModelType};
pub use error::MetadataError;
pub use extension::{
    CoefficientExtension, CompartmentExtension, Correlation, ModelClass, ModelVariable,
    RuleExtension, SpeciesExtension,
};
pub use quality::Uncertainties;
pub use reference::{Reference, ReferenceType};

/// Annotation bundle attached to a primary-model document: the experiment
/// condition id, optional fit quality and literature references.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Model1Annotation {
    /// Condition identifier linking the model to its experiment
    pub cond_id: i32,
    /// Quality measures of the fit
    pub uncertainties: Option<Uncertainties>,
    /// Literature references, in document order
    pub references: Vec<Reference>,
}

impl Model1Annotation {
    pub fn new(cond_id: i32) -> Self {
        Model1Annotation {
            cond_id,
            uncertainties: None,
            references: Vec::new(),
        }
    }
}

/// Annotation bundle attached to a secondary or tertiary model document:
/// the global model id, optional fit quality and literature references.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Model2Annotation {
    /// Identifier of the global (secondary/tertiary) model
    pub global_model_id: i32,
    /// Quality measures of the fit
    pub uncertainties: Option<Uncertainties>,
    /// Literature references, in document order
    pub references: Vec<Reference>,
}

impl Model2Annotation {
    pub fn new(global_model_id: i32) -> Self {
        Model2Annotation {
            global_model_id,
            uncertainties: None,
            references: Vec::new(),
        }
    }
}
