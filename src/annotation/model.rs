//! Codecs for the primary- and secondary-model annotations.
//!
//! A primary model is identified by its `pmmlab:condID` tag, a secondary
//! model by `pmmlab:globalModelID`; both carry optional fit quality and
//! literature references alongside.

use crate::metadata::{Model1Annotation, Model2Annotation};
use crate::xml::Element;

use super::quality::{decode_uncertainties, encode_uncertainties};
use super::reference::{decode_reference, encode_reference, REFERENCE_TAG};
use super::{parse_i32, text_element, DecodeError, DC, PMMLAB};

/// Local name of the primary-model id tag (`pmmlab:condID`)
pub(crate) const COND_ID_TAG: &str = "condID";

/// Local name of the secondary-model id tag (`pmmlab:globalModelID`)
pub(crate) const GLOBAL_MODEL_ID_TAG: &str = "globalModelID";

const QUALITY_TAG: &str = "modelquality";

/// Append a primary-model annotation to a `pmf:metadata` container.
pub fn encode_model1_into(annotation: &Model1Annotation, container: &mut Element) {
    container.push(text_element(
        PMMLAB,
        COND_ID_TAG,
        annotation.cond_id.to_string(),
    ));
    if let Some(uncertainties) = &annotation.uncertainties {
        container.push(encode_uncertainties(uncertainties));
    }
    for reference in &annotation.references {
        container.push(encode_reference(reference));
    }
}

/// Decode a primary-model annotation from its `pmf:metadata` container.
///
/// The `pmmlab:condID` tag is mandatory; its absence raises
/// [`DecodeError::MissingRequiredChild`].
pub fn decode_model1(container: &Element) -> Result<Model1Annotation, DecodeError> {
    let cond_id = container
        .child_text(Some(PMMLAB), COND_ID_TAG)
        .ok_or_else(|| DecodeError::MissingRequiredChild(COND_ID_TAG.to_string()))?;

    let mut annotation = Model1Annotation::new(parse_i32(COND_ID_TAG, cond_id)?);

    if let Some(node) = container.child(Some(PMMLAB), QUALITY_TAG) {
        annotation.uncertainties = Some(decode_uncertainties(node)?);
    }
    for node in container.children_named(Some(DC), REFERENCE_TAG) {
        annotation.references.push(decode_reference(node)?);
    }

    Ok(annotation)
}

/// Append a secondary-model annotation to a `pmf:metadata` container.
pub fn encode_model2_into(annotation: &Model2Annotation, container: &mut Element) {
    container.push(text_element(
        PMMLAB,
        GLOBAL_MODEL_ID_TAG,
        annotation.global_model_id.to_string(),
    ));
    if let Some(uncertainties) = &annotation.uncertainties {
        container.push(encode_uncertainties(uncertainties));
    }
    for reference in &annotation.references {
        container.push(encode_reference(reference));
    }
}

/// Decode a secondary-model annotation from its `pmf:metadata` container.
///
/// The `pmmlab:globalModelID` tag is mandatory; its absence raises
/// [`DecodeError::MissingRequiredChild`].
pub fn decode_model2(container: &Element) -> Result<Model2Annotation, DecodeError> {
    let global_model_id = container
        .child_text(Some(PMMLAB), GLOBAL_MODEL_ID_TAG)
        .ok_or_else(|| DecodeError::MissingRequiredChild(GLOBAL_MODEL_ID_TAG.to_string()))?;

    let mut annotation =
        Model2Annotation::new(parse_i32(GLOBAL_MODEL_ID_TAG, global_model_id)?);

    if let Some(node) = container.child(Some(PMMLAB), QUALITY_TAG) {
        annotation.uncertainties = Some(decode_uncertainties(node)?);
    }
    for node in container.children_named(Some(DC), REFERENCE_TAG) {
        annotation.references.push(decode_reference(node)?);
    }

    Ok(annotation)
}
