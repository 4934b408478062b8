//! # PMF-ML Schema Constants
//!
//! Pinned configuration for the exchange format: content-type URIs identifying
//! archive entries, the namespace table declared on every document root, and
//! the file-extension policy selecting which model content type a write uses.

use std::path::Path;

use crate::xml::Element;

/// Format version written into new archives
pub const PMFML_FORMAT_VERSION: &str = "1.0.0";

/// Content-type URI for numeric-result (NuML) documents
pub const URI_NUML: &str = "https://raw.githubusercontent.com/NuML/NuML/master/NUMLSchema.xsd";

/// Content-type URI for kinetic-model documents in `.pmf` archives (SBML family)
pub const URI_SBML: &str = "http://identifiers.org/combine/specifications/sbml";

/// Content-type URI for kinetic-model documents in `.pmfx` archives
pub const URI_PMF: &str = "http://sourceforge.net/projects/microbialmodelingexchange/files/";

/// File extension for archives using the SBML model content type
pub const PMF_EXTENSION: &str = "pmf";

/// File extension for archives using the PMF-ML model content type
pub const PMFX_EXTENSION: &str = "pmfx";

/// Namespace prefixes and URIs, declared once per document root.
///
/// The codec matches tags by `(prefix, local name)`; these bindings make the
/// emitted documents resolvable by namespace-aware consumers.
pub mod ns {
    /// Metadata container namespace
    pub const PMF: (&str, &str) = (
        "pmf",
        "http://sourceforge.net/projects/microbialmodelingexchange/files/PMF-ML",
    );
    /// Domain-extension namespace (PmmLab annotations)
    pub const PMMLAB: (&str, &str) = (
        "pmmlab",
        "http://sourceforge.net/projects/microbialmodelingexchange/files/PmmLab",
    );
    /// Dublin Core elements (bibliographic)
    pub const DC: (&str, &str) = ("dc", "http://purl.org/dc/elements/1.1/");
    /// Dublin Core terms (creation/modification)
    pub const DCTERMS: (&str, &str) = ("dcterms", "http://purl.org/dc/terms/");
    /// RIS literature field namespace used inside reference tags
    pub const RIS: (&str, &str) = ("ref", "http://purl.org/ris/1.0/");

    /// All bindings, in declaration order
    pub const ALL: [(&str, &str); 5] = [PMF, PMMLAB, DC, DCTERMS, RIS];
}

/// Declare the full namespace table on a document root element
pub fn declare_namespaces(root: &mut Element) {
    for (prefix, uri) in ns::ALL {
        root.set_attr(&format!("xmlns:{}", prefix), uri);
    }
}

/// Which content-type URI family a write call uses for model documents.
///
/// This is a policy switch selected by the output file extension, not a
/// different wire format: numeric-result documents always use [`URI_NUML`]
/// and case membership is independent of the family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatFamily {
    /// `.pmf`: model documents tagged with the SBML content type
    #[default]
    Pmf,
    /// `.pmfx`: model documents tagged with the PMF-ML content type
    Pmfx,
}

impl FormatFamily {
    /// Content-type URI used for kinetic-model documents in this family
    pub fn model_format(&self) -> &'static str {
        match self {
            FormatFamily::Pmf => URI_SBML,
            FormatFamily::Pmfx => URI_PMF,
        }
    }

    /// Content-type URI used for numeric-result documents (family independent)
    pub fn data_format(&self) -> &'static str {
        URI_NUML
    }

    pub fn extension(&self) -> &'static str {
        match self {
            FormatFamily::Pmf => PMF_EXTENSION,
            FormatFamily::Pmfx => PMFX_EXTENSION,
        }
    }

    /// Select the family from an output path extension; defaults to `.pmf`
    /// for unknown extensions.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case(PMFX_EXTENSION) => FormatFamily::Pmfx,
            _ => FormatFamily::Pmf,
        }
    }

    /// True if `uri` identifies a kinetic-model document in either family
    pub fn is_model_format(uri: &str) -> bool {
        uri == URI_SBML || uri == URI_PMF
    }
}
