//! Codecs for the per-element extension records: compartment, species,
//! coefficient and model rule.
//!
//! Each encoder returns a full `pmf:metadata` container ready to be attached
//! to the host element's annotation; each decoder takes that container back.

use crate::metadata::{
    CoefficientExtension, CompartmentExtension, Correlation, ModelClass, ModelVariable,
    RuleExtension, SpeciesExtension,
};
use crate::xml::{Element, Tag};

use super::reference::{decode_reference, encode_reference, REFERENCE_TAG};
use super::{
    format_f64, metadata_container, parse_bool, parse_f64, parse_i32, text_element, DecodeError,
    DC, PMMLAB,
};

const SOURCE_TAG: &str = "source";
const DETAIL_TAG: &str = "detail";
const DESCRIPTION_TAG: &str = "description";
const ENVIRONMENT_TAG: &str = "environment";
const P_TAG: &str = "P";
const ERROR_TAG: &str = "error";
const T_TAG: &str = "t";
const CORRELATION_TAG: &str = "correlation";
const IS_START_TAG: &str = "isStart";
const FORMULA_NAME_TAG: &str = "formulaName";
const SUBJECT_TAG: &str = "subject";
const PMMLAB_ID_TAG: &str = "pmmlabId";

const NAME_ATTR: &str = "name";
const VALUE_ATTR: &str = "value";
const ORIGNAME_ATTR: &str = "origname";

/// Encode a compartment extension as a `pmf:metadata` container.
pub fn encode_compartment(extension: &CompartmentExtension) -> Element {
    let mut container = metadata_container();

    if let Some(pmf_code) = &extension.pmf_code {
        container.push(text_element(DC, SOURCE_TAG, pmf_code));
    }
    if let Some(detail) = &extension.detail {
        container.push(text_element(PMMLAB, DETAIL_TAG, detail));
    }
    for variable in &extension.model_variables {
        let mut node = Element::new(Tag::new(PMMLAB, ENVIRONMENT_TAG));
        node.set_attr(NAME_ATTR, &variable.name);
        if let Some(value) = variable.value {
            node.set_attr(VALUE_ATTR, format_f64(value));
        }
        container.push(node);
    }

    container
}

/// Decode a compartment extension from its `pmf:metadata` container.
pub fn decode_compartment(container: &Element) -> Result<CompartmentExtension, DecodeError> {
    let mut extension = CompartmentExtension::new();

    extension.pmf_code = container.child_text(Some(DC), SOURCE_TAG).map(str::to_string);
    extension.detail = container
        .child_text(Some(PMMLAB), DETAIL_TAG)
        .map(str::to_string);
    for node in container.children_named(Some(PMMLAB), ENVIRONMENT_TAG) {
        let name = node
            .attr(NAME_ATTR)
            .ok_or_else(|| DecodeError::MalformedField(ENVIRONMENT_TAG.to_string()))?;
        let value = match node.attr(VALUE_ATTR) {
            Some(text) => Some(parse_f64(ENVIRONMENT_TAG, text)?),
            None => None,
        };
        extension
            .model_variables
            .push(ModelVariable::new(name, value));
    }

    Ok(extension)
}

/// Encode a species extension as a `pmf:metadata` container.
pub fn encode_species(extension: &SpeciesExtension) -> Element {
    let mut container = metadata_container();

    if let Some(source_code) = &extension.source_code {
        container.push(text_element(DC, SOURCE_TAG, source_code));
    }
    if let Some(detail) = &extension.detail {
        container.push(text_element(PMMLAB, DETAIL_TAG, detail));
    }
    if let Some(description) = &extension.description {
        container.push(text_element(PMMLAB, DESCRIPTION_TAG, description));
    }

    container
}

/// Decode a species extension from its `pmf:metadata` container.
pub fn decode_species(container: &Element) -> Result<SpeciesExtension, DecodeError> {
    Ok(SpeciesExtension {
        source_code: container.child_text(Some(DC), SOURCE_TAG).map(str::to_string),
        detail: container
            .child_text(Some(PMMLAB), DETAIL_TAG)
            .map(str::to_string),
        description: container
            .child_text(Some(PMMLAB), DESCRIPTION_TAG)
            .map(str::to_string),
    })
}

/// Encode a coefficient extension as a `pmf:metadata` container.
///
/// The `isStart` flag is structural: it is emitted only when set, and an
/// absent tag decodes back to `false`.
pub fn encode_coefficient(extension: &CoefficientExtension) -> Element {
    let mut container = metadata_container();

    if let Some(p) = extension.p {
        container.push(text_element(PMMLAB, P_TAG, format_f64(p)));
    }
    if let Some(error) = extension.error {
        container.push(text_element(PMMLAB, ERROR_TAG, format_f64(error)));
    }
    if let Some(t) = extension.t {
        container.push(text_element(PMMLAB, T_TAG, format_f64(t)));
    }
    for correlation in &extension.correlations {
        let mut node = Element::new(Tag::new(PMMLAB, CORRELATION_TAG));
        node.set_attr(ORIGNAME_ATTR, &correlation.name);
        if let Some(value) = correlation.value {
            node.set_attr(VALUE_ATTR, format_f64(value));
        }
        container.push(node);
    }
    if let Some(description) = &extension.description {
        container.push(text_element(PMMLAB, DESCRIPTION_TAG, description));
    }
    if extension.is_start {
        container.push(text_element(PMMLAB, IS_START_TAG, "true"));
    }

    container
}

/// Decode a coefficient extension from its `pmf:metadata` container.
pub fn decode_coefficient(container: &Element) -> Result<CoefficientExtension, DecodeError> {
    let mut extension = CoefficientExtension::new();

    if let Some(text) = container.child_text(Some(PMMLAB), P_TAG) {
        extension.p = Some(parse_f64(P_TAG, text)?);
    }
    if let Some(text) = container.child_text(Some(PMMLAB), ERROR_TAG) {
        extension.error = Some(parse_f64(ERROR_TAG, text)?);
    }
    if let Some(text) = container.child_text(Some(PMMLAB), T_TAG) {
        extension.t = Some(parse_f64(T_TAG, text)?);
    }
    for node in container.children_named(Some(PMMLAB), CORRELATION_TAG) {
        let name = node
            .attr(ORIGNAME_ATTR)
            .ok_or_else(|| DecodeError::MalformedField(CORRELATION_TAG.to_string()))?;
        let value = match node.attr(VALUE_ATTR) {
            Some(text) => Some(parse_f64(CORRELATION_TAG, text)?),
            None => None,
        };
        extension.correlations.push(Correlation::new(name, value));
    }
    extension.description = container
        .child_text(Some(PMMLAB), DESCRIPTION_TAG)
        .map(str::to_string);
    if let Some(text) = container.child_text(Some(PMMLAB), IS_START_TAG) {
        extension.is_start = parse_bool(IS_START_TAG, text)?;
    }

    Ok(extension)
}

/// Encode a model rule extension as a `pmf:metadata` container.
pub fn encode_rule(extension: &RuleExtension) -> Element {
    let mut container = metadata_container();

    container.push(text_element(
        PMMLAB,
        FORMULA_NAME_TAG,
        &extension.formula_name,
    ));
    if let Some(model_class) = extension.model_class {
        container.push(text_element(PMMLAB, SUBJECT_TAG, model_class.token()));
    }
    if let Some(pmmlab_id) = extension.pmmlab_id {
        container.push(text_element(PMMLAB, PMMLAB_ID_TAG, pmmlab_id.to_string()));
    }
    for reference in &extension.references {
        container.push(encode_reference(reference));
    }

    container
}

/// Decode a model rule extension from its `pmf:metadata` container.
///
/// The formula name is the one mandatory child; its absence raises
/// [`DecodeError::MissingRequiredChild`].
pub fn decode_rule(container: &Element) -> Result<RuleExtension, DecodeError> {
    let formula_name = container
        .child_text(Some(PMMLAB), FORMULA_NAME_TAG)
        .ok_or_else(|| DecodeError::MissingRequiredChild(FORMULA_NAME_TAG.to_string()))?;

    let mut extension = RuleExtension::new(formula_name);

    if let Some(token) = container.child_text(Some(PMMLAB), SUBJECT_TAG) {
        extension.model_class = Some(
            ModelClass::from_token(token)
                .ok_or_else(|| DecodeError::UnknownEnumToken(token.to_string()))?,
        );
    }
    if let Some(text) = container.child_text(Some(PMMLAB), PMMLAB_ID_TAG) {
        extension.pmmlab_id = Some(parse_i32(PMMLAB_ID_TAG, text)?);
    }
    for node in container.children_named(Some(DC), REFERENCE_TAG) {
        extension.references.push(decode_reference(node)?);
    }

    Ok(extension)
}
