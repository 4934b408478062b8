//! Codec for bibliographic references.
//!
//! A reference is a `dc:reference` element whose children carry RIS literature
//! field codes in the `ref` namespace, one child per set field.

use crate::metadata::{Reference, ReferenceType};
use crate::xml::{Element, Tag};

use super::{parse_i32, text_element, DecodeError, DC, RIS};

/// Local name of the reference tag (`dc:reference`)
pub const REFERENCE_TAG: &str = "reference";

// RIS field codes
const AUTHOR: &str = "AU";
const YEAR: &str = "PY";
const TITLE: &str = "TI";
const ABSTRACT: &str = "AB";
const JOURNAL: &str = "T2";
const VOLUME: &str = "VL";
const ISSUE: &str = "IS";
const PAGE: &str = "SP";
const APPROVAL: &str = "LB";
const WEBSITE: &str = "UR";
const TYPE: &str = "M3";
const COMMENT: &str = "N1";

/// Encode a reference; unset fields emit nothing, so an empty reference is an
/// empty `dc:reference` tag.
pub fn encode_reference(reference: &Reference) -> Element {
    let mut node = Element::new(Tag::new(DC, REFERENCE_TAG));

    if let Some(author) = &reference.author {
        node.push(text_element(RIS, AUTHOR, author));
    }
    if let Some(year) = reference.year {
        node.push(text_element(RIS, YEAR, year.to_string()));
    }
    if let Some(title) = &reference.title {
        node.push(text_element(RIS, TITLE, title));
    }
    if let Some(abstract_text) = &reference.abstract_text {
        node.push(text_element(RIS, ABSTRACT, abstract_text));
    }
    if let Some(journal) = &reference.journal {
        node.push(text_element(RIS, JOURNAL, journal));
    }
    if let Some(volume) = &reference.volume {
        node.push(text_element(RIS, VOLUME, volume));
    }
    if let Some(issue) = &reference.issue {
        node.push(text_element(RIS, ISSUE, issue));
    }
    if let Some(page) = reference.page {
        node.push(text_element(RIS, PAGE, page.to_string()));
    }
    if let Some(approval) = reference.approval_mode {
        node.push(text_element(RIS, APPROVAL, approval.to_string()));
    }
    if let Some(website) = &reference.website {
        node.push(text_element(RIS, WEBSITE, website));
    }
    if let Some(ref_type) = reference.ref_type {
        node.push(text_element(RIS, TYPE, ref_type.token()));
    }
    if let Some(comment) = &reference.comment {
        node.push(text_element(RIS, COMMENT, comment));
    }

    node
}

fn field_text<'a>(node: &'a Element, local: &str) -> Option<&'a str> {
    // Empty elements parse back with no text node; treat them as empty text
    node.child(Some(RIS), local)
        .map(|c| c.text_content().unwrap_or(""))
}

/// Decode a `dc:reference` element; unknown children are skipped.
pub fn decode_reference(node: &Element) -> Result<Reference, DecodeError> {
    let mut reference = Reference::new();

    reference.author = field_text(node, AUTHOR).map(str::to_string);
    if let Some(text) = field_text(node, YEAR) {
        reference.year = Some(parse_i32(YEAR, text)?);
    }
    reference.title = field_text(node, TITLE).map(str::to_string);
    reference.abstract_text = field_text(node, ABSTRACT).map(str::to_string);
    reference.journal = field_text(node, JOURNAL).map(str::to_string);
    reference.volume = field_text(node, VOLUME).map(str::to_string);
    reference.issue = field_text(node, ISSUE).map(str::to_string);
    if let Some(text) = field_text(node, PAGE) {
        reference.page = Some(parse_i32(PAGE, text)?);
    }
    if let Some(text) = field_text(node, APPROVAL) {
        reference.approval_mode = Some(parse_i32(APPROVAL, text)?);
    }
    reference.website = field_text(node, WEBSITE).map(str::to_string);
    if let Some(token) = field_text(node, TYPE) {
        reference.ref_type = Some(
            ReferenceType::from_token(token)
                .ok_or_else(|| DecodeError::UnknownEnumToken(token.to_string()))?,
        );
    }
    reference.comment = field_text(node, COMMENT).map(str::to_string);

    Ok(reference)
}
