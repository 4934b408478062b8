use proptest::prelude::*;

use super::*;
use crate::metadata::{
    CoefficientExtension, CompartmentExtension, Correlation, DocumentMetadata, Model1Annotation,
    Model2Annotation, ModelClass, ModelType, ModelVariable, Reference, ReferenceType,
    RuleExtension, SpeciesExtension, Uncertainties,
};
use crate::xml::Element;

#[test]
fn test_reference_emits_only_set_fields() {
    let mut reference = Reference::new();
    reference.author = Some("Baranyi".to_string());
    reference.year = Some(1994);

    let node = encode_reference(&reference);
    assert_eq!(node.children().len(), 2);
    assert_eq!(node.child_text(Some("ref"), "AU"), Some("Baranyi"));
    assert_eq!(node.child_text(Some("ref"), "PY"), Some("1994"));
}

#[test]
fn test_empty_reference_is_empty_element() {
    let node = encode_reference(&Reference::new());
    assert!(node.children().is_empty());
    assert_eq!(decode_reference(&node).unwrap(), Reference::new());
}

#[test]
fn test_reference_roundtrip_all_fields() {
    let reference = Reference {
        author: Some("Baranyi, J.".to_string()),
        year: Some(1994),
        title: Some("A dynamic approach".to_string()),
        abstract_text: Some("Growth of bacteria...".to_string()),
        journal: Some("Int J Food Microbiol".to_string()),
        volume: Some("23".to_string()),
        issue: Some("3-4".to_string()),
        page: Some(277),
        approval_mode: Some(1),
        website: Some("https://doi.org/10.1016".to_string()),
        ref_type: Some(ReferenceType::Paper),
        comment: Some("classic".to_string()),
    };

    let node = encode_reference(&reference);
    assert_eq!(decode_reference(&node).unwrap(), reference);
}

#[test]
fn test_reference_rejects_unknown_type_token() {
    let mut node = encode_reference(&Reference::new());
    node.push(text_element("ref", "M3", "novel"));

    assert_eq!(
        decode_reference(&node),
        Err(DecodeError::UnknownEnumToken("novel".to_string()))
    );
}

#[test]
fn test_reference_rejects_malformed_year() {
    let mut node = encode_reference(&Reference::new());
    node.push(text_element("ref", "PY", "MCMXCIV"));

    assert_eq!(
        decode_reference(&node),
        Err(DecodeError::MalformedField("PY".to_string()))
    );
}

#[test]
fn test_uncertainties_one_attribute_per_set_field() {
    let mut uncertainties = Uncertainties::new();
    uncertainties.r2 = Some(0.98);
    uncertainties.dof = Some(5);

    let node = encode_uncertainties(&uncertainties);
    assert_eq!(node.attributes.len(), 2);
    assert_eq!(node.attr("r2"), Some("0.98"));
    assert_eq!(node.attr("dof"), Some("5"));
    assert!(node.children().is_empty());
}

#[test]
fn test_uncertainties_roundtrip() {
    let uncertainties = Uncertainties {
        id: Some(7),
        model_name: Some("Baranyi".to_string()),
        comment: Some("good fit".to_string()),
        r2: Some(0.987654321),
        rms: Some(0.12),
        sse: Some(1.5e-3),
        aic: Some(-42.0),
        bic: Some(-40.5),
        dof: Some(16),
    };

    let node = encode_uncertainties(&uncertainties);
    assert_eq!(decode_uncertainties(&node).unwrap(), uncertainties);
}

#[test]
fn test_uncertainties_rejects_malformed_statistic() {
    let mut node = encode_uncertainties(&Uncertainties::new());
    node.set_attr("r2", "very good");

    assert_eq!(
        decode_uncertainties(&node),
        Err(DecodeError::MalformedField("r2".to_string()))
    );
}

#[test]
fn test_compartment_roundtrip() {
    let extension = CompartmentExtension {
        pmf_code: Some("1247".to_string()),
        detail: Some("Culture medium".to_string()),
        model_variables: vec![
            ModelVariable::new("Temperature", Some(10.0)),
            ModelVariable::new("pH", None),
        ],
    };

    let container = encode_compartment(&extension);
    assert!(is_metadata_container(&container));
    assert_eq!(decode_compartment(&container).unwrap(), extension);
}

#[test]
fn test_species_roundtrip() {
    let extension = SpeciesExtension {
        source_code: Some("4017".to_string()),
        detail: Some("Salmonella spp.".to_string()),
        description: Some("bacterial population at time t".to_string()),
    };

    let container = encode_species(&extension);
    assert_eq!(decode_species(&container).unwrap(), extension);
}

#[test]
fn test_coefficient_is_start_is_structural() {
    let mut extension = CoefficientExtension::new();
    extension.p = Some(0.006);
    extension.correlations.push(Correlation::new("mu_max", Some(0.4)));

    // Unset flag emits nothing and decodes back to false
    let container = encode_coefficient(&extension);
    assert!(container.child(Some("pmmlab"), "isStart").is_none());
    assert!(!decode_coefficient(&container).unwrap().is_start);

    extension.is_start = true;
    let container = encode_coefficient(&extension);
    assert_eq!(container.child_text(Some("pmmlab"), "isStart"), Some("true"));
    assert_eq!(decode_coefficient(&container).unwrap(), extension);
}

#[test]
fn test_coefficient_rejects_malformed_boolean() {
    let mut container = metadata_container();
    container.push(text_element("pmmlab", "isStart", "yes"));

    assert_eq!(
        decode_coefficient(&container),
        Err(DecodeError::MalformedField("isStart".to_string()))
    );
}

#[test]
fn test_rule_requires_formula_name() {
    let container = metadata_container();
    assert_eq!(
        decode_rule(&container),
        Err(DecodeError::MissingRequiredChild("formulaName".to_string()))
    );
}

#[test]
fn test_rule_roundtrip() {
    let mut extension = RuleExtension::new("Baranyi model");
    extension.model_class = Some(ModelClass::Growth);
    extension.pmmlab_id = Some(77);
    let mut reference = Reference::new();
    reference.author = Some("Baranyi".to_string());
    extension.references.push(reference);

    let container = encode_rule(&extension);
    assert_eq!(decode_rule(&container).unwrap(), extension);
}

#[test]
fn test_document_metadata_roundtrip() {
    let metadata = DocumentMetadata {
        given_name: Some("Jane".to_string()),
        family_name: Some("Doe".to_string()),
        contact: Some("jane.doe@example.org".to_string()),
        created: chrono::NaiveDate::from_ymd_opt(2015, 3, 9),
        modified: chrono::NaiveDate::from_ymd_opt(2016, 1, 1),
        model_type: Some(ModelType::PrimaryModelWData),
        rights: Some("CC-BY".to_string()),
        reference_link: Some("https://example.org/paper".to_string()),
    };

    let mut container = metadata_container();
    encode_document_metadata_into(&metadata, &mut container);
    assert_eq!(decode_document_metadata(&container).unwrap(), metadata);
}

#[test]
fn test_document_metadata_empty_record_emits_nothing() {
    let mut container = metadata_container();
    encode_document_metadata_into(&DocumentMetadata::new(), &mut container);

    assert!(container.children().is_empty());
    assert_eq!(
        decode_document_metadata(&container).unwrap(),
        DocumentMetadata::new()
    );
}

#[test]
fn test_document_metadata_rejects_malformed_date() {
    let mut container = metadata_container();
    container.push(text_element("dcterms", "created", "09.03.2015"));

    assert_eq!(
        decode_document_metadata(&container),
        Err(DecodeError::MalformedField("created".to_string()))
    );
}

#[test]
fn test_model1_roundtrip() {
    let mut annotation = Model1Annotation::new(42);
    let mut uncertainties = Uncertainties::new();
    uncertainties.r2 = Some(0.99);
    annotation.uncertainties = Some(uncertainties);
    let mut reference = Reference::new();
    reference.title = Some("A dynamic approach".to_string());
    annotation.references.push(reference);

    let mut container = metadata_container();
    encode_model1_into(&annotation, &mut container);
    assert_eq!(decode_model1(&container).unwrap(), annotation);
}

#[test]
fn test_model1_requires_cond_id() {
    let container = metadata_container();
    assert_eq!(
        decode_model1(&container),
        Err(DecodeError::MissingRequiredChild("condID".to_string()))
    );
}

#[test]
fn test_model2_roundtrip() {
    let annotation = Model2Annotation::new(-7);

    let mut container = metadata_container();
    encode_model2_into(&annotation, &mut container);
    assert_eq!(decode_model2(&container).unwrap(), annotation);
}

#[test]
fn test_links_roundtrip_and_order() {
    let mut container = metadata_container();
    add_data_source(&mut container, "data1.numl");
    add_data_source(&mut container, "data2.numl");
    add_primary_model_ref(&mut container, "primary.sbml");
    add_secondary_model_ref(&mut container, "secondary.sbml");

    assert_eq!(data_sources(&container), vec!["data1.numl", "data2.numl"]);
    assert_eq!(primary_model_refs(&container), vec!["primary.sbml"]);
    assert_eq!(secondary_model_refs(&container), vec!["secondary.sbml"]);

    // Positional link ids stay unique within a container
    let ids: Vec<_> = container
        .children_named(Some("pmmlab"), "dataSource")
        .filter_map(|n| n.attr("id"))
        .collect();
    assert_eq!(ids, vec!["source1", "source2"]);
}

#[test]
fn test_unknown_children_are_skipped() {
    let mut container = metadata_container();
    container.push(text_element("pmmlab", "condID", "3"));
    container.push(text_element("pmmlab", "futureTag", "whatever"));
    container.push(Element::text(
        crate::xml::Tag::unprefixed("vendorExtension"),
        "opaque",
    ));

    let annotation = decode_model1(&container).unwrap();
    assert_eq!(annotation.cond_id, 3);
}

#[test]
fn test_deterministic_encoding() {
    let mut uncertainties = Uncertainties::new();
    uncertainties.dof = Some(3);
    uncertainties.r2 = Some(0.5);

    let first = encode_uncertainties(&uncertainties).to_xml().unwrap();
    let second = encode_uncertainties(&uncertainties).to_xml().unwrap();
    assert_eq!(first, second);
}

fn finite_f64() -> impl Strategy<Value = f64> {
    use proptest::num::f64::{NEGATIVE, NORMAL, POSITIVE, SUBNORMAL, ZERO};
    POSITIVE | NEGATIVE | NORMAL | SUBNORMAL | ZERO
}

proptest! {
    #[test]
    fn prop_f64_text_roundtrip(value in finite_f64()) {
        let text = format_f64(value);
        let restored = parse_f64("x", &text).unwrap();
        prop_assert_eq!(restored.to_bits(), value.to_bits());
    }

    #[test]
    fn prop_uncertainties_roundtrip(
        r2 in proptest::option::of(proptest::num::f64::NORMAL),
        sse in proptest::option::of(proptest::num::f64::NORMAL),
        dof in proptest::option::of(0u32..10_000),
    ) {
        let mut uncertainties = Uncertainties::new();
        uncertainties.r2 = r2;
        uncertainties.sse = sse;
        uncertainties.dof = dof;

        let node = encode_uncertainties(&uncertainties);
        prop_assert_eq!(decode_uncertainties(&node).unwrap(), uncertainties);
    }

    #[test]
    fn prop_reference_roundtrip(
        author in proptest::option::of("[A-Za-z ,.]{0,40}"),
        year in proptest::option::of(1800i32..2100),
        title in proptest::option::of("[A-Za-z0-9 ]{0,60}"),
    ) {
        let mut reference = Reference::new();
        reference.author = author;
        reference.year = year;
        reference.title = title;

        let node = encode_reference(&reference);
        prop_assert_eq!(decode_reference(&node).unwrap(), reference);
    }
}
