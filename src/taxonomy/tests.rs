use super::*;
use crate::archive::{ArchiveEntry, PmfArchive};
use crate::document::{DataDoc, ModelDoc};
use crate::metadata::{Model1Annotation, Model2Annotation, ModelType};
use crate::schema::{FormatFamily, URI_NUML, URI_PMF, URI_SBML};

fn primary_doc(cond_id: i32) -> ModelDoc {
    let mut doc = ModelDoc::new();
    doc.set_model1(&Model1Annotation::new(cond_id));
    doc
}

fn secondary_doc(global_model_id: i32) -> ModelDoc {
    let mut doc = ModelDoc::new();
    doc.set_model2(&Model2Annotation::new(global_model_id));
    doc
}

fn primary_with_data(ordinal: i32) -> PrimaryModelWData {
    PrimaryModelWData {
        model_doc_name: format!("primary{ordinal}.sbml"),
        model_doc: primary_doc(ordinal),
        data_doc_name: format!("data{ordinal}.numl"),
        data_doc: DataDoc::new(),
    }
}

fn roundtrip(case: &ModelCase) -> ModelCase {
    let archive = case.to_archive(FormatFamily::Pmf).unwrap();
    classify(&archive).unwrap()
}

#[test]
fn test_experimental_data_roundtrip() {
    let case = ModelCase::ExperimentalData(ExperimentalData {
        docs: vec![
            ("data1.numl".to_string(), DataDoc::new()),
            ("data2.numl".to_string(), DataDoc::new()),
        ],
    });
    let restored = roundtrip(&case);
    assert_eq!(restored.model_type(), ModelType::ExperimentalData);
    let ModelCase::ExperimentalData(restored) = restored else {
        panic!("wrong case");
    };
    let names: Vec<_> = restored.docs.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["data1.numl", "data2.numl"]);
}

#[test]
fn test_primary_with_data_roundtrip() {
    let case = ModelCase::PrimaryModelWData(primary_with_data(1));
    let restored = roundtrip(&case);
    assert_eq!(restored.model_type(), ModelType::PrimaryModelWData);
    let ModelCase::PrimaryModelWData(restored) = restored else {
        panic!("wrong case");
    };
    assert_eq!(restored.model_doc_name, "primary1.sbml");
    assert_eq!(restored.data_doc_name, "data1.numl");
    assert_eq!(restored.model_doc.model1().unwrap(), Some(Model1Annotation::new(1)));
}

#[test]
fn test_primary_without_data_ignores_stray_results() {
    // An unlinked result document does not turn the case into WDATA
    let mut archive = ModelCase::PrimaryModelWOData(PrimaryModelWOData {
        model_doc_name: "primary.sbml".to_string(),
        model_doc: primary_doc(1),
    })
    .to_archive(FormatFamily::Pmf)
    .unwrap();
    archive
        .add_entry(ArchiveEntry::new(
            "stray.numl",
            URI_NUML,
            DataDoc::new().to_bytes().unwrap(),
        ))
        .unwrap();

    let case = classify(&archive).unwrap();
    assert_eq!(case.model_type(), ModelType::PrimaryModelWOData);
}

#[test]
fn test_one_step_secondary_roundtrip() {
    let case = ModelCase::OneStepSecondaryModel(OneStepSecondaryModel {
        sec_doc_name: "secondary.sbml".to_string(),
        sec_doc: secondary_doc(9),
        data_docs: vec![
            ("data1.numl".to_string(), DataDoc::new()),
            ("data2.numl".to_string(), DataDoc::new()),
        ],
    });
    let restored = roundtrip(&case);
    assert_eq!(restored.model_type(), ModelType::OneStepSecondaryModel);
    let ModelCase::OneStepSecondaryModel(restored) = restored else {
        panic!("wrong case");
    };
    assert_eq!(restored.data_docs.len(), 2);
}

#[test]
fn test_manual_secondary_roundtrip() {
    let case = ModelCase::ManualSecondaryModel(ManualSecondaryModel {
        sec_doc_name: "secondary.sbml".to_string(),
        sec_doc: secondary_doc(9),
    });
    assert_eq!(roundtrip(&case).model_type(), ModelType::ManualSecondaryModel);
}

#[test]
fn test_two_step_secondary_roundtrip() {
    let case = ModelCase::TwoStepSecondaryModel(TwoStepSecondaryModel {
        sec_doc_name: "secondary.sbml".to_string(),
        sec_doc: secondary_doc(9),
        primary_models: vec![primary_with_data(1), primary_with_data(2)],
    });
    let restored = roundtrip(&case);
    assert_eq!(restored.model_type(), ModelType::TwoStepSecondaryModel);
    let ModelCase::TwoStepSecondaryModel(restored) = restored else {
        panic!("wrong case");
    };
    assert_eq!(restored.primary_models.len(), 2);
    assert_eq!(restored.primary_models[0].data_doc_name, "data1.numl");
}

#[test]
fn test_tertiary_variants_roundtrip() {
    let sec_docs = vec![
        ("sec1.sbml".to_string(), secondary_doc(1)),
        ("sec2.sbml".to_string(), secondary_doc(2)),
    ];

    let two_step = ModelCase::TwoStepTertiaryModel(TwoStepTertiaryModel {
        tert_doc_name: "tertiary.sbml".to_string(),
        tert_doc: secondary_doc(100),
        sec_docs: sec_docs.clone(),
        primary_models: vec![primary_with_data(1)],
    });
    assert_eq!(roundtrip(&two_step).model_type(), ModelType::TwoStepTertiaryModel);

    let one_step = ModelCase::OneStepTertiaryModel(OneStepTertiaryModel {
        tert_doc_name: "tertiary.sbml".to_string(),
        tert_doc: secondary_doc(100),
        sec_docs: sec_docs.clone(),
        data_docs: vec![("data.numl".to_string(), DataDoc::new())],
    });
    assert_eq!(roundtrip(&one_step).model_type(), ModelType::OneStepTertiaryModel);

    let manual = ModelCase::ManualTertiaryModel(ManualTertiaryModel {
        tert_doc_name: "tertiary.sbml".to_string(),
        tert_doc: secondary_doc(100),
        sec_docs,
    });
    let restored = roundtrip(&manual);
    assert_eq!(restored.model_type(), ModelType::ManualTertiaryModel);
    let ModelCase::ManualTertiaryModel(restored) = restored else {
        panic!("wrong case");
    };
    assert_eq!(restored.sec_docs.len(), 2);
}

#[test]
fn test_pmfx_family_tags_model_entries() {
    let case = ModelCase::PrimaryModelWData(primary_with_data(1));
    let archive = case.to_archive(FormatFamily::Pmfx).unwrap();

    assert_eq!(archive.entry("primary1.sbml").unwrap().format, URI_PMF);
    assert_eq!(archive.entry("data1.numl").unwrap().format, URI_NUML);
    // Case membership is family independent
    assert_eq!(
        classify(&archive).unwrap().model_type(),
        ModelType::PrimaryModelWData
    );
}

#[test]
fn test_dangling_data_link() {
    let mut doc = primary_doc(1);
    doc.add_data_source("missing.numl");

    let mut archive = PmfArchive::new();
    archive
        .add_entry(ArchiveEntry::new(
            "primary.sbml",
            URI_SBML,
            doc.to_bytes().unwrap(),
        ))
        .unwrap();

    assert!(matches!(
        classify(&archive),
        Err(TaxonomyError::DanglingReference(name)) if name == "missing.numl"
    ));
}

#[test]
fn test_secondary_ref_to_primary_is_dangling() {
    // secondaryModel must point at a secondary document
    let mut master = secondary_doc(9);
    master.add_secondary_model_ref("primary.sbml");

    let mut archive = PmfArchive::new();
    for (name, doc) in [("tertiary.sbml", master), ("primary.sbml", primary_doc(1))] {
        archive
            .add_entry(ArchiveEntry::new(name, URI_SBML, doc.to_bytes().unwrap()))
            .unwrap();
    }

    assert!(matches!(
        classify(&archive),
        Err(TaxonomyError::DanglingReference(_))
    ));
}

#[test]
fn test_ambiguous_compositions() {
    // Empty archive
    assert!(matches!(
        classify(&PmfArchive::new()),
        Err(TaxonomyError::AmbiguousCase(_))
    ));

    // Model document without any model annotation
    let mut archive = PmfArchive::new();
    archive
        .add_entry(ArchiveEntry::new(
            "bare.sbml",
            URI_SBML,
            ModelDoc::new().to_bytes().unwrap(),
        ))
        .unwrap();
    assert!(matches!(
        classify(&archive),
        Err(TaxonomyError::AmbiguousCase(_))
    ));
}

#[test]
fn test_two_masters_are_ambiguous() {
    let mut archive = PmfArchive::new();
    let sec = secondary_doc(1);
    archive
        .add_entry(ArchiveEntry::new("sec.sbml", URI_SBML, sec.to_bytes().unwrap()))
        .unwrap();
    for name in ["t1.sbml", "t2.sbml"] {
        let mut master = secondary_doc(2);
        master.add_secondary_model_ref("sec.sbml");
        archive
            .add_entry(ArchiveEntry::new(name, URI_SBML, master.to_bytes().unwrap()))
            .unwrap();
    }

    assert!(matches!(
        classify(&archive),
        Err(TaxonomyError::AmbiguousCase(_))
    ));
}
