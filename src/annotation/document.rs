//! Codec for document-level provenance metadata.

use chrono::NaiveDate;

use crate::metadata::{DocumentMetadata, ModelType};
use crate::xml::{Element, Tag};

use super::{text_element, DecodeError, DC, DCTERMS};

const CREATOR_TAG: &str = "creator";
const CREATED_TAG: &str = "created";
const MODIFIED_TAG: &str = "modified";
const TYPE_TAG: &str = "type";
const RIGHTS_TAG: &str = "rights";
const SOURCE_TAG: &str = "source";

const GIVEN_NAME_ATTR: &str = "givenName";
const FAMILY_NAME_ATTR: &str = "familyName";
const CONTACT_ATTR: &str = "contact";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Append document metadata children to a `pmf:metadata` container.
///
/// The creator travels as a single `dc:creator` element with one attribute
/// per set name/contact field; dates are ISO `YYYY-MM-DD` text.
pub fn encode_document_metadata_into(metadata: &DocumentMetadata, container: &mut Element) {
    if metadata.has_creator() {
        let mut creator = Element::new(Tag::new(DC, CREATOR_TAG));
        if let Some(given_name) = &metadata.given_name {
            creator.set_attr(GIVEN_NAME_ATTR, given_name);
        }
        if let Some(family_name) = &metadata.family_name {
            creator.set_attr(FAMILY_NAME_ATTR, family_name);
        }
        if let Some(contact) = &metadata.contact {
            creator.set_attr(CONTACT_ATTR, contact);
        }
        container.push(creator);
    }
    if let Some(created) = metadata.created {
        container.push(text_element(
            DCTERMS,
            CREATED_TAG,
            created.format(DATE_FORMAT).to_string(),
        ));
    }
    if let Some(modified) = metadata.modified {
        container.push(text_element(
            DCTERMS,
            MODIFIED_TAG,
            modified.format(DATE_FORMAT).to_string(),
        ));
    }
    if let Some(model_type) = metadata.model_type {
        container.push(text_element(DC, TYPE_TAG, model_type.token()));
    }
    if let Some(rights) = &metadata.rights {
        container.push(text_element(DC, RIGHTS_TAG, rights));
    }
    if let Some(reference_link) = &metadata.reference_link {
        container.push(text_element(DC, SOURCE_TAG, reference_link));
    }
}

fn parse_date(field: &str, text: &str) -> Result<NaiveDate, DecodeError> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|_| DecodeError::MalformedField(field.to_string()))
}

/// Decode document metadata from a `pmf:metadata` container; children that
/// belong to other records are skipped.
pub fn decode_document_metadata(container: &Element) -> Result<DocumentMetadata, DecodeError> {
    let mut metadata = DocumentMetadata::new();

    if let Some(creator) = container.child(Some(DC), CREATOR_TAG) {
        metadata.given_name = creator.attr(GIVEN_NAME_ATTR).map(str::to_string);
        metadata.family_name = creator.attr(FAMILY_NAME_ATTR).map(str::to_string);
        metadata.contact = creator.attr(CONTACT_ATTR).map(str::to_string);
    }
    if let Some(text) = container.child_text(Some(DCTERMS), CREATED_TAG) {
        metadata.created = Some(parse_date(CREATED_TAG, text)?);
    }
    if let Some(text) = container.child_text(Some(DCTERMS), MODIFIED_TAG) {
        metadata.modified = Some(parse_date(MODIFIED_TAG, text)?);
    }
    if let Some(token) = container.child_text(Some(DC), TYPE_TAG) {
        metadata.model_type = Some(
            ModelType::from_token(token)
                .ok_or_else(|| DecodeError::UnknownEnumToken(token.to_string()))?,
        );
    }
    metadata.rights = container
        .child_text(Some(DC), RIGHTS_TAG)
        .map(str::to_string);
    metadata.reference_link = container
        .child_text(Some(DC), SOURCE_TAG)
        .map(str::to_string);

    Ok(metadata)
}
