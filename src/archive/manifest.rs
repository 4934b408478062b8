//! The manifest document mapping entry names to content-type URIs.
//!
//! Follows the COMBINE manifest layout: a flat list of `content` elements
//! with `location` and `format` attributes. The manifest lists itself so the
//! container stays readable by generic COMBINE tooling.

use crate::schema::PMFML_FORMAT_VERSION;
use crate::xml::{Element, Tag};

use super::ArchiveError;

/// Fixed name of the manifest entry inside the container
pub const MANIFEST_NAME: &str = "manifest.xml";

/// Content-type URI of the manifest document itself
const URI_MANIFEST: &str = "http://identifiers.org/combine.specifications/omex-manifest";

const MANIFEST_ROOT_TAG: &str = "omexManifest";
const CONTENT_TAG: &str = "content";
const LOCATION_ATTR: &str = "location";
const FORMAT_ATTR: &str = "format";
const VERSION_ATTR: &str = "formatVersion";

/// Serialize the manifest for the given `(name, format)` pairs.
pub fn encode_manifest(entries: &[(String, String)]) -> Result<Vec<u8>, ArchiveError> {
    let mut root = Element::new(Tag::unprefixed(MANIFEST_ROOT_TAG));
    root.set_attr("xmlns", URI_MANIFEST);
    root.set_attr(VERSION_ATTR, PMFML_FORMAT_VERSION);

    let mut self_entry = Element::new(Tag::unprefixed(CONTENT_TAG));
    self_entry.set_attr(LOCATION_ATTR, MANIFEST_NAME);
    self_entry.set_attr(FORMAT_ATTR, URI_MANIFEST);
    root.push(self_entry);

    for (name, format) in entries {
        let mut content = Element::new(Tag::unprefixed(CONTENT_TAG));
        content.set_attr(LOCATION_ATTR, name);
        content.set_attr(FORMAT_ATTR, format);
        root.push(content);
    }

    Ok(root.to_xml()?)
}

/// Parse the manifest back into `(name, format)` pairs.
///
/// The manifest's self-entry is dropped; a leading `./` on a location is
/// stripped so manifests written by other tools resolve the same names.
pub fn decode_manifest(data: &[u8]) -> Result<Vec<(String, String)>, ArchiveError> {
    let root = Element::from_xml(data)?;
    if !root.tag.matches(None, MANIFEST_ROOT_TAG) {
        return Err(ArchiveError::MalformedManifest(format!(
            "unexpected root `{}`",
            root.tag.qualified()
        )));
    }

    let mut entries = Vec::new();
    for content in root.children_named(None, CONTENT_TAG) {
        let location = content
            .attr(LOCATION_ATTR)
            .ok_or_else(|| ArchiveError::MalformedManifest("content without location".into()))?;
        let format = content
            .attr(FORMAT_ATTR)
            .ok_or_else(|| ArchiveError::MalformedManifest("content without format".into()))?;

        let name = location.strip_prefix("./").unwrap_or(location);
        if name == MANIFEST_NAME || name == "." {
            continue;
        }
        entries.push((name.to_string(), format.to_string()));
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{URI_NUML, URI_SBML};

    #[test]
    fn test_manifest_roundtrip() {
        let entries = vec![
            ("model.sbml".to_string(), URI_SBML.to_string()),
            ("data.numl".to_string(), URI_NUML.to_string()),
        ];

        let bytes = encode_manifest(&entries).unwrap();
        assert_eq!(decode_manifest(&bytes).unwrap(), entries);
    }

    #[test]
    fn test_manifest_self_entry_is_dropped() {
        let bytes = encode_manifest(&[]).unwrap();
        assert!(decode_manifest(&bytes).unwrap().is_empty());
    }

    #[test]
    fn test_dot_slash_locations_resolve() {
        let xml = format!(
            "<omexManifest xmlns=\"x\"><content location=\"./data.numl\" format=\"{URI_NUML}\"/></omexManifest>"
        );
        let entries = decode_manifest(xml.as_bytes()).unwrap();
        assert_eq!(entries, vec![("data.numl".to_string(), URI_NUML.to_string())]);
    }

    #[test]
    fn test_content_without_format_is_rejected() {
        let xml = b"<omexManifest><content location=\"a\"/></omexManifest>";
        assert!(matches!(
            decode_manifest(xml),
            Err(ArchiveError::MalformedManifest(_))
        ));
    }
}
