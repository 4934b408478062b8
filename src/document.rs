//! # Host Documents
//!
//! Wrappers over the two document kinds that live inside an archive: a
//! kinetic-model document (`sbml` root) and a numeric-result document (`numl`
//! root). Each holds its element tree and anchors one `pmf:metadata`
//! container at `root > annotation > pmf:metadata`, where all annotations and
//! cross-document links live.
//!
//! The wrappers are deliberately shallow: they expose typed accessors for the
//! annotation payloads and leave the rest of the host tree untouched, so
//! structure the codec does not understand survives a read/write cycle.

use crate::annotation::{
    self, add_data_source, add_primary_model_ref, add_secondary_model_ref, data_sources,
    decode_document_metadata, decode_model1, decode_model2, encode_document_metadata_into,
    encode_model1_into, encode_model2_into, metadata_container, primary_model_refs,
    secondary_model_refs, DecodeError, METADATA_TAG,
};
use crate::metadata::{DocumentMetadata, Model1Annotation, Model2Annotation, Reference};
use crate::schema::declare_namespaces;
use crate::xml::{Element, Tag, XmlError};

const MODEL_ROOT_TAG: &str = "sbml";
const DATA_ROOT_TAG: &str = "numl";
const ANNOTATION_TAG: &str = "annotation";

fn ensure_child(parent: &mut Element, tag: Tag) -> &mut Element {
    let children = parent.children_mut();
    let index = match children.iter().position(|c| c.tag == tag) {
        Some(index) => index,
        None => {
            children.push(Element::new(tag));
            children.len() - 1
        }
    };
    &mut children[index]
}

fn find_container(root: &Element) -> Option<&Element> {
    root.child(None, ANNOTATION_TAG)?
        .child(Some(annotation::PMF), METADATA_TAG)
}

fn ensure_container(root: &mut Element) -> &mut Element {
    let annotation = ensure_child(root, Tag::unprefixed(ANNOTATION_TAG));
    ensure_child(annotation, metadata_container().tag)
}

fn check_root(root: &Element, expected: &str) -> Result<(), XmlError> {
    if root.tag.matches(None, expected) {
        Ok(())
    } else {
        Err(XmlError::InvalidStructure(format!(
            "expected `{}` document root, found `{}`",
            expected,
            root.tag.qualified()
        )))
    }
}

/// A kinetic-model document.
///
/// Carries at most one model annotation: [`Model1Annotation`] for a primary
/// model or [`Model2Annotation`] for a secondary/tertiary model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDoc {
    root: Element,
}

impl ModelDoc {
    /// Create an empty model document with the namespace table declared on
    /// its root.
    pub fn new() -> Self {
        let mut root = Element::new(Tag::unprefixed(MODEL_ROOT_TAG));
        declare_namespaces(&mut root);
        root.set_attr("level", "3");
        root.set_attr("version", "1");
        ModelDoc { root }
    }

    /// Parse a model document from its serialized bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self, XmlError> {
        let root = Element::from_xml(data)?;
        check_root(&root, MODEL_ROOT_TAG)?;
        Ok(ModelDoc { root })
    }

    /// Serialize the document.
    pub fn to_bytes(&self) -> Result<Vec<u8>, XmlError> {
        self.root.to_xml()
    }

    fn container(&self) -> Option<&Element> {
        find_container(&self.root)
    }

    fn container_mut(&mut self) -> &mut Element {
        ensure_container(&mut self.root)
    }

    /// The primary-model annotation, if this document carries one.
    pub fn model1(&self) -> Result<Option<Model1Annotation>, DecodeError> {
        match self.container() {
            Some(container)
                if container
                    .child(Some(annotation::PMMLAB), annotation::COND_ID_TAG)
                    .is_some() =>
            {
                decode_model1(container).map(Some)
            }
            _ => Ok(None),
        }
    }

    pub fn set_model1(&mut self, model1: &Model1Annotation) {
        encode_model1_into(model1, self.container_mut());
    }

    /// The secondary/tertiary-model annotation, if this document carries one.
    pub fn model2(&self) -> Result<Option<Model2Annotation>, DecodeError> {
        match self.container() {
            Some(container)
                if container
                    .child(Some(annotation::PMMLAB), annotation::GLOBAL_MODEL_ID_TAG)
                    .is_some() =>
            {
                decode_model2(container).map(Some)
            }
            _ => Ok(None),
        }
    }

    pub fn set_model2(&mut self, model2: &Model2Annotation) {
        encode_model2_into(model2, self.container_mut());
    }

    /// Document-level provenance metadata; a document without a metadata
    /// container yields the empty record.
    pub fn document_metadata(&self) -> Result<DocumentMetadata, DecodeError> {
        match self.container() {
            Some(container) => decode_document_metadata(container),
            None => Ok(DocumentMetadata::new()),
        }
    }

    pub fn set_document_metadata(&mut self, metadata: &DocumentMetadata) {
        encode_document_metadata_into(metadata, self.container_mut());
    }

    /// Link this model to the numeric-result entry `entry_name`.
    pub fn add_data_source(&mut self, entry_name: &str) {
        add_data_source(self.container_mut(), entry_name);
    }

    /// Entry names of linked numeric-result documents, in document order.
    pub fn data_sources(&self) -> Vec<String> {
        self.container().map(data_sources).unwrap_or_default()
    }

    /// Link this model to the primary-model entry `entry_name`.
    pub fn add_primary_model_ref(&mut self, entry_name: &str) {
        add_primary_model_ref(self.container_mut(), entry_name);
    }

    /// Entry names of linked primary models, in document order.
    pub fn primary_model_refs(&self) -> Vec<String> {
        self.container().map(primary_model_refs).unwrap_or_default()
    }

    /// Link this tertiary master to the secondary-model entry `entry_name`.
    pub fn add_secondary_model_ref(&mut self, entry_name: &str) {
        add_secondary_model_ref(self.container_mut(), entry_name);
    }

    /// Entry names of linked secondary models, in document order.
    pub fn secondary_model_refs(&self) -> Vec<String> {
        self.container()
            .map(secondary_model_refs)
            .unwrap_or_default()
    }
}

impl Default for ModelDoc {
    fn default() -> Self {
        ModelDoc::new()
    }
}

/// A numeric-result (time series) document.
#[derive(Debug, Clone, PartialEq)]
pub struct DataDoc {
    root: Element,
}

impl DataDoc {
    /// Create an empty result document with the namespace table declared on
    /// its root.
    pub fn new() -> Self {
        let mut root = Element::new(Tag::unprefixed(DATA_ROOT_TAG));
        declare_namespaces(&mut root);
        root.set_attr("version", "2");
        DataDoc { root }
    }

    /// Parse a result document from its serialized bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self, XmlError> {
        let root = Element::from_xml(data)?;
        check_root(&root, DATA_ROOT_TAG)?;
        Ok(DataDoc { root })
    }

    /// Serialize the document.
    pub fn to_bytes(&self) -> Result<Vec<u8>, XmlError> {
        self.root.to_xml()
    }

    fn container(&self) -> Option<&Element> {
        find_container(&self.root)
    }

    fn container_mut(&mut self) -> &mut Element {
        ensure_container(&mut self.root)
    }

    /// Document-level provenance metadata; a document without a metadata
    /// container yields the empty record.
    pub fn document_metadata(&self) -> Result<DocumentMetadata, DecodeError> {
        match self.container() {
            Some(container) => decode_document_metadata(container),
            None => Ok(DocumentMetadata::new()),
        }
    }

    pub fn set_document_metadata(&mut self, metadata: &DocumentMetadata) {
        encode_document_metadata_into(metadata, self.container_mut());
    }

    /// Literature references attached to the result, in document order.
    pub fn references(&self) -> Result<Vec<Reference>, DecodeError> {
        let Some(container) = self.container() else {
            return Ok(Vec::new());
        };
        container
            .children_named(Some(annotation::DC), annotation::REFERENCE_TAG)
            .map(annotation::decode_reference)
            .collect()
    }

    pub fn add_reference(&mut self, reference: &Reference) {
        let node = annotation::encode_reference(reference);
        self.container_mut().push(node);
    }
}

impl Default for DataDoc {
    fn default() -> Self {
        DataDoc::new()
    }
}
