//! Cross-document link tags.
//!
//! Links are how documents inside one archive point at each other: a model
//! names its data with `pmmlab:dataSource`, a tertiary master names its
//! secondaries with `pmmlab:secondaryModel`, and a secondary/tertiary model
//! names its primaries with `pmmlab:primaryModel`. All targets are entry
//! names within the same archive.

use crate::xml::{Element, Tag};

use super::PMMLAB;

pub(crate) const DATA_SOURCE_TAG: &str = "dataSource";
pub(crate) const PRIMARY_MODEL_TAG: &str = "primaryModel";
pub(crate) const SECONDARY_MODEL_TAG: &str = "secondaryModel";

const ID_ATTR: &str = "id";
const HREF_ATTR: &str = "href";

/// Add a `pmmlab:dataSource` link to a `pmf:metadata` container.
///
/// The id attribute is positional (`source1`, `source2`, ...) and carries no
/// meaning beyond uniqueness inside the container.
pub fn add_data_source(container: &mut Element, entry_name: &str) {
    let ordinal = container
        .children_named(Some(PMMLAB), DATA_SOURCE_TAG)
        .count()
        + 1;
    let mut node = Element::new(Tag::new(PMMLAB, DATA_SOURCE_TAG));
    node.set_attr(ID_ATTR, format!("source{ordinal}"));
    node.set_attr(HREF_ATTR, entry_name);
    container.push(node);
}

/// Entry names referenced by `pmmlab:dataSource` links, in document order.
/// Links without an href are skipped.
pub fn data_sources(container: &Element) -> Vec<String> {
    container
        .children_named(Some(PMMLAB), DATA_SOURCE_TAG)
        .filter_map(|node| node.attr(HREF_ATTR))
        .map(str::to_string)
        .collect()
}

/// Add a `pmmlab:primaryModel` link to a `pmf:metadata` container.
pub fn add_primary_model_ref(container: &mut Element, entry_name: &str) {
    container.push(Element::text(
        Tag::new(PMMLAB, PRIMARY_MODEL_TAG),
        entry_name,
    ));
}

/// Entry names referenced by `pmmlab:primaryModel` links, in document order.
pub fn primary_model_refs(container: &Element) -> Vec<String> {
    container
        .children_named(Some(PMMLAB), PRIMARY_MODEL_TAG)
        .filter_map(Element::text_content)
        .map(str::to_string)
        .collect()
}

/// Add a `pmmlab:secondaryModel` link to a `pmf:metadata` container.
pub fn add_secondary_model_ref(container: &mut Element, entry_name: &str) {
    container.push(Element::text(
        Tag::new(PMMLAB, SECONDARY_MODEL_TAG),
        entry_name,
    ));
}

/// Entry names referenced by `pmmlab:secondaryModel` links, in document order.
pub fn secondary_model_refs(container: &Element) -> Vec<String> {
    container
        .children_named(Some(PMMLAB), SECONDARY_MODEL_TAG)
        .filter_map(Element::text_content)
        .map(str::to_string)
        .collect()
}
