//! Codec for goodness-of-fit summaries.
//!
//! Fit quality travels as a single empty `pmmlab:modelquality` element whose
//! attributes carry the statistics, one attribute per set field.

use crate::metadata::Uncertainties;
use crate::xml::{Element, Tag};

use super::{format_f64, parse_f64, parse_i32, parse_u32, DecodeError, PMMLAB};

const QUALITY_TAG: &str = "modelquality";

const ID: &str = "id";
const MODEL_NAME: &str = "name";
const COMMENT: &str = "comment";
const R2: &str = "r2";
const RMS: &str = "rms";
const SSE: &str = "sse";
const AIC: &str = "aic";
const BIC: &str = "bic";
const DOF: &str = "dof";

/// Encode fit-quality statistics as a `pmmlab:modelquality` element.
pub fn encode_uncertainties(uncertainties: &Uncertainties) -> Element {
    let mut node = Element::new(Tag::new(PMMLAB, QUALITY_TAG));

    if let Some(id) = uncertainties.id {
        node.set_attr(ID, id.to_string());
    }
    if let Some(model_name) = &uncertainties.model_name {
        node.set_attr(MODEL_NAME, model_name);
    }
    if let Some(comment) = &uncertainties.comment {
        node.set_attr(COMMENT, comment);
    }
    if let Some(r2) = uncertainties.r2 {
        node.set_attr(R2, format_f64(r2));
    }
    if let Some(rms) = uncertainties.rms {
        node.set_attr(RMS, format_f64(rms));
    }
    if let Some(sse) = uncertainties.sse {
        node.set_attr(SSE, format_f64(sse));
    }
    if let Some(aic) = uncertainties.aic {
        node.set_attr(AIC, format_f64(aic));
    }
    if let Some(bic) = uncertainties.bic {
        node.set_attr(BIC, format_f64(bic));
    }
    if let Some(dof) = uncertainties.dof {
        node.set_attr(DOF, dof.to_string());
    }

    node
}

/// Decode a `pmmlab:modelquality` element; unknown attributes are skipped.
pub fn decode_uncertainties(node: &Element) -> Result<Uncertainties, DecodeError> {
    let mut uncertainties = Uncertainties::new();

    if let Some(text) = node.attr(ID) {
        uncertainties.id = Some(parse_i32(ID, text)?);
    }
    uncertainties.model_name = node.attr(MODEL_NAME).map(str::to_string);
    uncertainties.comment = node.attr(COMMENT).map(str::to_string);
    if let Some(text) = node.attr(R2) {
        uncertainties.r2 = Some(parse_f64(R2, text)?);
    }
    if let Some(text) = node.attr(RMS) {
        uncertainties.rms = Some(parse_f64(RMS, text)?);
    }
    if let Some(text) = node.attr(SSE) {
        uncertainties.sse = Some(parse_f64(SSE, text)?);
    }
    if let Some(text) = node.attr(AIC) {
        uncertainties.aic = Some(parse_f64(AIC, text)?);
    }
    if let Some(text) = node.attr(BIC) {
        uncertainties.bic = Some(parse_f64(BIC, text)?);
    }
    if let Some(text) = node.attr(DOF) {
        uncertainties.dof = Some(parse_u32(DOF, text)?);
    }

    Ok(uncertainties)
}
