//! Classification of an archive's document bag into a composition case.
//!
//! Classification works on links alone: which model documents carry a
//! primary or secondary annotation, and which entries their `dataSource`,
//! `primaryModel` and `secondaryModel` tags point at. Every link must
//! resolve to an entry of the right kind before any case is considered.
//! Result documents no link points at never change the outcome.

use std::collections::BTreeMap;

use crate::archive::PmfArchive;
use crate::document::{DataDoc, ModelDoc};
use crate::schema::{FormatFamily, URI_NUML};

use super::cases::*;
use super::TaxonomyError;

enum ModelKind {
    Primary,
    Secondary,
}

struct ModelInfo {
    name: String,
    doc: ModelDoc,
    kind: ModelKind,
    data_links: Vec<String>,
    primary_refs: Vec<String>,
    secondary_refs: Vec<String>,
}

impl ModelInfo {
    fn is_primary(&self) -> bool {
        matches!(self.kind, ModelKind::Primary)
    }
}

fn ambiguous(reason: impl Into<String>) -> TaxonomyError {
    TaxonomyError::AmbiguousCase(reason.into())
}

/// Classify the archive into one of the nine composition cases.
pub fn classify(archive: &PmfArchive) -> Result<ModelCase, TaxonomyError> {
    let mut data_docs: BTreeMap<String, DataDoc> = BTreeMap::new();
    for entry in archive.entries_with_format(URI_NUML) {
        data_docs.insert(entry.name.clone(), DataDoc::from_bytes(&entry.payload)?);
    }

    let mut models: Vec<ModelInfo> = Vec::new();
    for entry in archive.entries() {
        if !FormatFamily::is_model_format(&entry.format) {
            continue;
        }
        let doc = ModelDoc::from_bytes(&entry.payload)?;
        let kind = if doc.model1()?.is_some() {
            ModelKind::Primary
        } else if doc.model2()?.is_some() {
            ModelKind::Secondary
        } else {
            return Err(ambiguous(format!(
                "model document `{}` carries no model annotation",
                entry.name
            )));
        };
        models.push(ModelInfo {
            name: entry.name.clone(),
            data_links: doc.data_sources(),
            primary_refs: doc.primary_model_refs(),
            secondary_refs: doc.secondary_model_refs(),
            doc,
            kind,
        });
    }

    check_links(&models, &data_docs)?;

    let case = match models.len() {
        0 => classify_data_only(&data_docs)?,
        1 => classify_single_model(&models[0], &data_docs)?,
        _ => classify_multi_model(&models, &data_docs)?,
    };
    log::info!("classified archive as {}", case.model_type().token());
    Ok(case)
}

/// Every link must resolve to an entry of the right kind.
fn check_links(
    models: &[ModelInfo],
    data_docs: &BTreeMap<String, DataDoc>,
) -> Result<(), TaxonomyError> {
    let find = |name: &str| models.iter().find(|m| m.name == name);
    for model in models {
        for target in &model.data_links {
            if !data_docs.contains_key(target) {
                return Err(TaxonomyError::DanglingReference(target.clone()));
            }
        }
        for target in &model.primary_refs {
            if !find(target).is_some_and(ModelInfo::is_primary) {
                return Err(TaxonomyError::DanglingReference(target.clone()));
            }
        }
        for target in &model.secondary_refs {
            if find(target).map_or(true, ModelInfo::is_primary) {
                return Err(TaxonomyError::DanglingReference(target.clone()));
            }
        }
    }
    Ok(())
}

fn classify_data_only(data_docs: &BTreeMap<String, DataDoc>) -> Result<ModelCase, TaxonomyError> {
    if data_docs.is_empty() {
        return Err(ambiguous("archive holds no documents"));
    }
    Ok(ModelCase::ExperimentalData(ExperimentalData {
        docs: data_docs
            .iter()
            .map(|(name, doc)| (name.clone(), doc.clone()))
            .collect(),
    }))
}

fn primary_with_data(
    model: &ModelInfo,
    data_docs: &BTreeMap<String, DataDoc>,
) -> Result<PrimaryModelWData, TaxonomyError> {
    let data_doc_name = match model.data_links.as_slice() {
        [single] => single.clone(),
        [] => {
            return Err(ambiguous(format!(
                "primary model `{}` carries no data link",
                model.name
            )))
        }
        _ => {
            return Err(ambiguous(format!(
                "primary model `{}` links several result documents",
                model.name
            )))
        }
    };
    // check_links guarantees the target exists
    let data_doc = data_docs
        .get(&data_doc_name)
        .cloned()
        .ok_or_else(|| TaxonomyError::DanglingReference(data_doc_name.clone()))?;
    Ok(PrimaryModelWData {
        model_doc_name: model.name.clone(),
        model_doc: model.doc.clone(),
        data_doc_name,
        data_doc,
    })
}

fn classify_single_model(
    model: &ModelInfo,
    data_docs: &BTreeMap<String, DataDoc>,
) -> Result<ModelCase, TaxonomyError> {
    match model.kind {
        ModelKind::Primary => {
            if model.data_links.is_empty() {
                // Result documents nothing links stay out of the composition
                Ok(ModelCase::PrimaryModelWOData(PrimaryModelWOData {
                    model_doc_name: model.name.clone(),
                    model_doc: model.doc.clone(),
                }))
            } else {
                Ok(ModelCase::PrimaryModelWData(primary_with_data(
                    model, data_docs,
                )?))
            }
        }
        ModelKind::Secondary => {
            if model.data_links.is_empty() {
                Ok(ModelCase::ManualSecondaryModel(ManualSecondaryModel {
                    sec_doc_name: model.name.clone(),
                    sec_doc: model.doc.clone(),
                }))
            } else {
                let data = resolve_data(&model.data_links, data_docs)?;
                Ok(ModelCase::OneStepSecondaryModel(OneStepSecondaryModel {
                    sec_doc_name: model.name.clone(),
                    sec_doc: model.doc.clone(),
                    data_docs: data,
                }))
            }
        }
    }
}

fn resolve_data(
    links: &[String],
    data_docs: &BTreeMap<String, DataDoc>,
) -> Result<Vec<(String, DataDoc)>, TaxonomyError> {
    links
        .iter()
        .map(|name| {
            data_docs
                .get(name)
                .cloned()
                .map(|doc| (name.clone(), doc))
                .ok_or_else(|| TaxonomyError::DanglingReference(name.clone()))
        })
        .collect()
}

fn classify_multi_model(
    models: &[ModelInfo],
    data_docs: &BTreeMap<String, DataDoc>,
) -> Result<ModelCase, TaxonomyError> {
    let find = |name: &str| models.iter().find(|m| m.name == name);

    let mut masters = models
        .iter()
        .filter(|m| !m.is_primary() && !m.secondary_refs.is_empty());
    let master = masters.next();
    if masters.next().is_some() {
        return Err(ambiguous("several tertiary master documents"));
    }

    if let Some(master) = master {
        // Tertiary composition: every other model must be reachable from the
        // master's link tags.
        for model in models {
            if model.name != master.name
                && !master.secondary_refs.contains(&model.name)
                && !master.primary_refs.contains(&model.name)
            {
                return Err(ambiguous(format!(
                    "model document `{}` is not part of the tertiary composition",
                    model.name
                )));
            }
        }

        let sec_docs: Vec<(String, ModelDoc)> = master
            .secondary_refs
            .iter()
            .filter_map(|name| find(name))
            .map(|m| (m.name.clone(), m.doc.clone()))
            .collect();

        if !master.primary_refs.is_empty() {
            let primary_models = master
                .primary_refs
                .iter()
                .filter_map(|name| find(name))
                .map(|m| primary_with_data(m, data_docs))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(ModelCase::TwoStepTertiaryModel(TwoStepTertiaryModel {
                tert_doc_name: master.name.clone(),
                tert_doc: master.doc.clone(),
                sec_docs,
                primary_models,
            }))
        } else if !master.data_links.is_empty() {
            Ok(ModelCase::OneStepTertiaryModel(OneStepTertiaryModel {
                tert_doc_name: master.name.clone(),
                tert_doc: master.doc.clone(),
                sec_docs,
                data_docs: resolve_data(&master.data_links, data_docs)?,
            }))
        } else {
            Ok(ModelCase::ManualTertiaryModel(ManualTertiaryModel {
                tert_doc_name: master.name.clone(),
                tert_doc: master.doc.clone(),
                sec_docs,
            }))
        }
    } else {
        // No tertiary master: the only remaining multi-document case is a
        // two-step secondary model over its fitted primaries.
        let mut secondaries = models.iter().filter(|m| !m.is_primary());
        let sec = secondaries
            .next()
            .ok_or_else(|| ambiguous("several primary models without a secondary"))?;
        if secondaries.next().is_some() {
            return Err(ambiguous("several secondary models without a master"));
        }
        if sec.primary_refs.is_empty() {
            return Err(ambiguous(format!(
                "secondary model `{}` does not link its primary models",
                sec.name
            )));
        }
        for model in models {
            if model.is_primary() && !sec.primary_refs.contains(&model.name) {
                return Err(ambiguous(format!(
                    "primary model `{}` is not part of the composition",
                    model.name
                )));
            }
        }

        let primary_models = sec
            .primary_refs
            .iter()
            .filter_map(|name| find(name))
            .map(|m| primary_with_data(m, data_docs))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ModelCase::TwoStepSecondaryModel(TwoStepSecondaryModel {
            sec_doc_name: sec.name.clone(),
            sec_doc: sec.doc.clone(),
            primary_models,
        }))
    }
}
