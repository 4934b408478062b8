//! The nine composition cases and their assembly into archive entries.
//!
//! Each case owns its documents together with their archive entry names;
//! link tags always resolve against those names. Assembly injects any link
//! tag the documents do not already carry, so a composition built in memory
//! classifies back to the same case after a write/read cycle.

use crate::archive::{ArchiveEntry, PmfArchive};
use crate::document::{DataDoc, ModelDoc};
use crate::metadata::ModelType;
use crate::schema::FormatFamily;

use super::TaxonomyError;

/// Bare experimental data: numeric-result documents with no model attached.
#[derive(Debug, Clone)]
pub struct ExperimentalData {
    pub docs: Vec<(String, DataDoc)>,
}

/// A primary model fitted to one numeric-result document.
#[derive(Debug, Clone)]
pub struct PrimaryModelWData {
    pub model_doc_name: String,
    pub model_doc: ModelDoc,
    pub data_doc_name: String,
    pub data_doc: DataDoc,
}

/// A primary model without data.
#[derive(Debug, Clone)]
pub struct PrimaryModelWOData {
    pub model_doc_name: String,
    pub model_doc: ModelDoc,
}

/// A secondary model fitted in two steps: the secondary document plus the
/// fitted primary models it was derived from, each with its data.
#[derive(Debug, Clone)]
pub struct TwoStepSecondaryModel {
    pub sec_doc_name: String,
    pub sec_doc: ModelDoc,
    pub primary_models: Vec<PrimaryModelWData>,
}

/// A secondary model fitted in one step directly against the data.
#[derive(Debug, Clone)]
pub struct OneStepSecondaryModel {
    pub sec_doc_name: String,
    pub sec_doc: ModelDoc,
    pub data_docs: Vec<(String, DataDoc)>,
}

/// A manually created secondary model; no data, no primaries.
#[derive(Debug, Clone)]
pub struct ManualSecondaryModel {
    pub sec_doc_name: String,
    pub sec_doc: ModelDoc,
}

/// A tertiary model from the two-step fit: the master document, its
/// secondary models and the fitted primary models with their data.
#[derive(Debug, Clone)]
pub struct TwoStepTertiaryModel {
    pub tert_doc_name: String,
    pub tert_doc: ModelDoc,
    pub sec_docs: Vec<(String, ModelDoc)>,
    pub primary_models: Vec<PrimaryModelWData>,
}

/// A tertiary model fitted in one step: the master document, its secondary
/// models and the data it was fitted against.
#[derive(Debug, Clone)]
pub struct OneStepTertiaryModel {
    pub tert_doc_name: String,
    pub tert_doc: ModelDoc,
    pub sec_docs: Vec<(String, ModelDoc)>,
    pub data_docs: Vec<(String, DataDoc)>,
}

/// A manually created tertiary model: the master and its secondaries only.
#[derive(Debug, Clone)]
pub struct ManualTertiaryModel {
    pub tert_doc_name: String,
    pub tert_doc: ModelDoc,
    pub sec_docs: Vec<(String, ModelDoc)>,
}

/// A classified model composition.
#[derive(Debug, Clone)]
pub enum ModelCase {
    ExperimentalData(ExperimentalData),
    PrimaryModelWData(PrimaryModelWData),
    PrimaryModelWOData(PrimaryModelWOData),
    TwoStepSecondaryModel(TwoStepSecondaryModel),
    OneStepSecondaryModel(OneStepSecondaryModel),
    ManualSecondaryModel(ManualSecondaryModel),
    TwoStepTertiaryModel(TwoStepTertiaryModel),
    OneStepTertiaryModel(OneStepTertiaryModel),
    ManualTertiaryModel(ManualTertiaryModel),
}

impl ModelCase {
    /// The document role this case corresponds to.
    pub fn model_type(&self) -> ModelType {
        match self {
            ModelCase::ExperimentalData(_) => ModelType::ExperimentalData,
            ModelCase::PrimaryModelWData(_) => ModelType::PrimaryModelWData,
            ModelCase::PrimaryModelWOData(_) => ModelType::PrimaryModelWOData,
            ModelCase::TwoStepSecondaryModel(_) => ModelType::TwoStepSecondaryModel,
            ModelCase::OneStepSecondaryModel(_) => ModelType::OneStepSecondaryModel,
            ModelCase::ManualSecondaryModel(_) => ModelType::ManualSecondaryModel,
            ModelCase::TwoStepTertiaryModel(_) => ModelType::TwoStepTertiaryModel,
            ModelCase::OneStepTertiaryModel(_) => ModelType::OneStepTertiaryModel,
            ModelCase::ManualTertiaryModel(_) => ModelType::ManualTertiaryModel,
        }
    }

    /// Assemble the composition into an archive, tagging model entries with
    /// the family's content type and injecting any missing link tags.
    pub fn to_archive(&self, family: FormatFamily) -> Result<PmfArchive, TaxonomyError> {
        let mut builder = ArchiveBuilder::new(family);
        match self {
            ModelCase::ExperimentalData(case) => {
                for (doc_name, doc) in &case.docs {
                    builder.add_data(doc_name, doc)?;
                }
            }
            ModelCase::PrimaryModelWData(case) => {
                builder.add_primary_with_data(case)?;
            }
            ModelCase::PrimaryModelWOData(case) => {
                builder.add_model(&case.model_doc_name, case.model_doc.clone())?;
            }
            ModelCase::TwoStepSecondaryModel(case) => {
                let mut sec_doc = case.sec_doc.clone();
                for primary in &case.primary_models {
                    link(
                        &mut sec_doc,
                        &primary.model_doc_name,
                        ModelDoc::primary_model_refs,
                        ModelDoc::add_primary_model_ref,
                    );
                    builder.add_primary_with_data(primary)?;
                }
                builder.add_model(&case.sec_doc_name, sec_doc)?;
            }
            ModelCase::OneStepSecondaryModel(case) => {
                let mut sec_doc = case.sec_doc.clone();
                for (data_name, data_doc) in &case.data_docs {
                    link(
                        &mut sec_doc,
                        data_name,
                        ModelDoc::data_sources,
                        ModelDoc::add_data_source,
                    );
                    builder.add_data(data_name, data_doc)?;
                }
                builder.add_model(&case.sec_doc_name, sec_doc)?;
            }
            ModelCase::ManualSecondaryModel(case) => {
                builder.add_model(&case.sec_doc_name, case.sec_doc.clone())?;
            }
            ModelCase::TwoStepTertiaryModel(case) => {
                let mut tert_doc = case.tert_doc.clone();
                for (sec_name, sec_doc) in &case.sec_docs {
                    link(
                        &mut tert_doc,
                        sec_name,
                        ModelDoc::secondary_model_refs,
                        ModelDoc::add_secondary_model_ref,
                    );
                    builder.add_model(sec_name, sec_doc.clone())?;
                }
                for primary in &case.primary_models {
                    link(
                        &mut tert_doc,
                        &primary.model_doc_name,
                        ModelDoc::primary_model_refs,
                        ModelDoc::add_primary_model_ref,
                    );
                    builder.add_primary_with_data(primary)?;
                }
                builder.add_model(&case.tert_doc_name, tert_doc)?;
            }
            ModelCase::OneStepTertiaryModel(case) => {
                let mut tert_doc = case.tert_doc.clone();
                for (sec_name, sec_doc) in &case.sec_docs {
                    link(
                        &mut tert_doc,
                        sec_name,
                        ModelDoc::secondary_model_refs,
                        ModelDoc::add_secondary_model_ref,
                    );
                    builder.add_model(sec_name, sec_doc.clone())?;
                }
                for (data_name, data_doc) in &case.data_docs {
                    link(
                        &mut tert_doc,
                        data_name,
                        ModelDoc::data_sources,
                        ModelDoc::add_data_source,
                    );
                    builder.add_data(data_name, data_doc)?;
                }
                builder.add_model(&case.tert_doc_name, tert_doc)?;
            }
            ModelCase::ManualTertiaryModel(case) => {
                let mut tert_doc = case.tert_doc.clone();
                for (sec_name, sec_doc) in &case.sec_docs {
                    link(
                        &mut tert_doc,
                        sec_name,
                        ModelDoc::secondary_model_refs,
                        ModelDoc::add_secondary_model_ref,
                    );
                    builder.add_model(sec_name, sec_doc.clone())?;
                }
                builder.add_model(&case.tert_doc_name, tert_doc)?;
            }
        }
        Ok(builder.finish())
    }
}

/// Add a link to `doc` unless an equivalent one is already present.
fn link(
    doc: &mut ModelDoc,
    target: &str,
    existing: impl Fn(&ModelDoc) -> Vec<String>,
    add: impl Fn(&mut ModelDoc, &str),
) {
    if !existing(doc).iter().any(|t| t == target) {
        add(doc, target);
    }
}

struct ArchiveBuilder {
    family: FormatFamily,
    archive: PmfArchive,
}

impl ArchiveBuilder {
    fn new(family: FormatFamily) -> Self {
        ArchiveBuilder {
            family,
            archive: PmfArchive::new(),
        }
    }

    fn add_model(&mut self, name: &str, doc: ModelDoc) -> Result<(), TaxonomyError> {
        let payload = doc.to_bytes()?;
        self.archive
            .add_entry(ArchiveEntry::new(name, self.family.model_format(), payload))?;
        Ok(())
    }

    fn add_data(&mut self, name: &str, doc: &DataDoc) -> Result<(), TaxonomyError> {
        let payload = doc.to_bytes()?;
        self.archive
            .add_entry(ArchiveEntry::new(name, self.family.data_format(), payload))?;
        Ok(())
    }

    fn add_primary_with_data(&mut self, case: &PrimaryModelWData) -> Result<(), TaxonomyError> {
        let mut model_doc = case.model_doc.clone();
        link(
            &mut model_doc,
            &case.data_doc_name,
            ModelDoc::data_sources,
            ModelDoc::add_data_source,
        );
        self.add_model(&case.model_doc_name, model_doc)?;
        self.add_data(&case.data_doc_name, &case.data_doc)
    }

    fn finish(self) -> PmfArchive {
        self.archive
    }
}
