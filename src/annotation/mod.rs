//! # Annotation Codec
//!
//! Bidirectional mapping between the metadata records in [`crate::metadata`]
//! and namespaced element fragments attached as annotations inside host
//! documents.
//!
//! ## Encoding rules
//!
//! - A child tag or attribute is emitted only for fields that are set; there
//!   are no empty placeholder tags.
//! - Numbers use Rust's shortest round-trip formatting, so
//!   `parse(format(x)) == x` for every finite double.
//! - Emission order is the record's field order and attribute order is
//!   lexicographic, so equal records encode byte-identically.
//!
//! ## Decoding rules
//!
//! - Matching is by `(prefix, local name)`.
//! - Unknown tags and attributes are skipped (forward compatibility).
//! - A present-but-unparsable value raises [`DecodeError::MalformedField`];
//!   a token outside an enum's table raises [`DecodeError::UnknownEnumToken`].
//!
//! The round-trip law `decode(encode(r)) == r` holds for every record type
//! and every combination of set/unset fields.

mod document;
mod error;
mod extension;
mod links;
mod model;
mod quality;
mod reference;

#[cfg(test)]
mod tests;

pub use document::{decode_document_metadata, encode_document_metadata_into};
pub use error::DecodeError;
pub use extension::{
    decode_coefficient, decode_compartment, decode_rule, decode_species, encode_coefficient,
    encode_compartment, encode_rule, encode_species,
};
pub use links::{
    add_data_source, add_primary_model_ref, add_secondary_model_ref, data_sources,
    primary_model_refs, secondary_model_refs,
};
pub use model::{decode_model1, decode_model2, encode_model1_into, encode_model2_into};
pub(crate) use model::{COND_ID_TAG, GLOBAL_MODEL_ID_TAG};
pub use quality::{decode_uncertainties, encode_uncertainties};
pub use reference::{decode_reference, encode_reference, REFERENCE_TAG};

use crate::xml::{Element, Tag};

pub(crate) const PMF: &str = "pmf";
pub(crate) const PMMLAB: &str = "pmmlab";
pub(crate) const DC: &str = "dc";
pub(crate) const DCTERMS: &str = "dcterms";
pub(crate) const RIS: &str = "ref";

/// Local name of the metadata container tag (`pmf:metadata`)
pub const METADATA_TAG: &str = "metadata";

/// Create an empty `pmf:metadata` container
pub fn metadata_container() -> Element {
    Element::new(Tag::new(PMF, METADATA_TAG))
}

/// True if `element` is a `pmf:metadata` container
pub fn is_metadata_container(element: &Element) -> bool {
    element.tag.matches(Some(PMF), METADATA_TAG)
}

pub(crate) fn text_element(prefix: &str, local: &str, text: impl Into<String>) -> Element {
    Element::text(Tag::new(prefix, local), text)
}

/// Shortest decimal representation that parses back to the same double
pub(crate) fn format_f64(value: f64) -> String {
    value.to_string()
}

pub(crate) fn parse_f64(field: &str, text: &str) -> Result<f64, DecodeError> {
    text.trim()
        .parse()
        .map_err(|_| DecodeError::MalformedField(field.to_string()))
}

pub(crate) fn parse_i32(field: &str, text: &str) -> Result<i32, DecodeError> {
    text.trim()
        .parse()
        .map_err(|_| DecodeError::MalformedField(field.to_string()))
}

pub(crate) fn parse_u32(field: &str, text: &str) -> Result<u32, DecodeError> {
    text.trim()
        .parse()
        .map_err(|_| DecodeError::MalformedField(field.to_string()))
}

pub(crate) fn parse_bool(field: &str, text: &str) -> Result<bool, DecodeError> {
    match text.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(DecodeError::MalformedField(field.to_string())),
    }
}
