//! # pmfml
//!
//! Reader and writer for PMF-ML, the exchange format for predictive
//! microbiology models: zip containers holding kinetic-model and
//! numeric-result documents, typed by a manifest and annotated with
//! namespaced metadata.
//!
//! The crate has three layers:
//!
//! - [`annotation`] maps the typed records in [`metadata`] to and from
//!   namespaced element fragments, with [`xml`] as the generic substrate and
//!   [`document`] anchoring the fragments inside host documents.
//! - [`archive`] packs named, content-type-tagged entries into the zip
//!   container next to its manifest.
//! - [`taxonomy`] classifies an archive's documents into one of the nine
//!   composition cases, from bare experimental data to tertiary models, and
//!   assembles a case back into an archive.
//!
//! ## Example
//!
//! ```no_run
//! use pmfml::document::{DataDoc, ModelDoc};
//! use pmfml::metadata::Model1Annotation;
//! use pmfml::taxonomy::{read_model, write_model, ModelCase, PrimaryModelWData};
//!
//! # fn main() -> Result<(), pmfml::taxonomy::TaxonomyError> {
//! let mut model_doc = ModelDoc::new();
//! model_doc.set_model1(&Model1Annotation::new(1));
//!
//! let case = ModelCase::PrimaryModelWData(PrimaryModelWData {
//!     model_doc_name: "model.sbml".to_string(),
//!     model_doc,
//!     data_doc_name: "data.numl".to_string(),
//!     data_doc: DataDoc::new(),
//! });
//! write_model("growth.pmf".as_ref(), &case)?;
//!
//! let restored = read_model("growth.pmf".as_ref())?;
//! println!("read a {}", restored.model_type().token());
//! # Ok(())
//! # }
//! ```

pub mod annotation;
pub mod archive;
pub mod document;
pub mod metadata;
pub mod schema;
pub mod taxonomy;
pub mod xml;

pub use archive::{ArchiveEntry, ArchiveError, PmfArchive};
pub use schema::FormatFamily;
pub use taxonomy::{classify, read_model, write_model, ModelCase, TaxonomyError};
