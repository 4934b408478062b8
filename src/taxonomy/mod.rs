//! # Model Taxonomy
//!
//! Classification of an archive's documents into the nine composition cases
//! of predictive microbiology, and assembly of a case back into an archive.
//! Cases range from bare experimental data over primary models (with or
//! without data) to secondary and tertiary models in their two-step,
//! one-step and manual variants.

use std::path::Path;

use crate::archive::PmfArchive;
use crate::schema::FormatFamily;

mod cases;
mod classify;
mod error;

#[cfg(test)]
mod tests;

pub use cases::{
    ExperimentalData, ManualSecondaryModel, ManualTertiaryModel, ModelCase,
    OneStepSecondaryModel, OneStepTertiaryModel, PrimaryModelWData, PrimaryModelWOData,
    TwoStepSecondaryModel, TwoStepTertiaryModel,
};
pub use classify::classify;
pub use error::TaxonomyError;

/// Read an archive file and classify its contents.
pub fn read_model(path: &Path) -> Result<ModelCase, TaxonomyError> {
    let archive = PmfArchive::open(path)?;
    classify(&archive)
}

/// Assemble a composition and write it as an archive file.
///
/// The path extension selects the content-type family: `.pmfx` tags model
/// entries with the PMF-ML URI, everything else with the SBML URI.
pub fn write_model(path: &Path, case: &ModelCase) -> Result<(), TaxonomyError> {
    let family = FormatFamily::from_path(path);
    case.to_archive(family)?.save(path)?;
    Ok(())
}
