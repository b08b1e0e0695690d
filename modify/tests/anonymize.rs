//! Anonymization of whole batches of related instances.
use dcmkit_core::{Tag, TransferSyntax, VR};
use dcmkit_dictionary_std::tags;
use dcmkit_modify::{
    basic_profile, DicomModification, DicomVersion, IdentifierGenerator, ModificationRequest,
    ResourceLevel,
};
use dcmkit_object::{DicomMap, FileMetaTableBuilder, InMemDicomObject, InMemElement};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::BTreeMap;

const CT_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.2";
const RT_STRUCTURE_SET_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.3";

/// Hands out predictable identifiers: `ANON1`, `ANON2`... for patients,
/// `9.<level>.<n>` for the other levels.
#[derive(Debug, Default)]
struct CountingGenerator {
    counters: BTreeMap<ResourceLevel, u32>,
}

impl IdentifierGenerator for CountingGenerator {
    fn generate(&mut self, _original: &str, level: ResourceLevel, _source: &DicomMap) -> Option<String> {
        let n = self.counters.entry(level).or_insert(0);
        *n += 1;
        Some(match level {
            ResourceLevel::Patient => format!("ANON{}", n),
            _ => format!("9.{}.{}", level as u8, n),
        })
    }
}

#[derive(Debug)]
struct FailingGenerator;

impl IdentifierGenerator for FailingGenerator {
    fn generate(&mut self, _: &str, _: ResourceLevel, _: &DicomMap) -> Option<String> {
        None
    }
}

fn item(elements: Vec<InMemElement>) -> InMemDicomObject {
    InMemDicomObject::from_element_iter(elements)
}

fn ct_image(sop_instance_uid: &str, referenced_uid: &str) -> InMemDicomObject {
    item(vec![
        InMemElement::new(tags::SOP_CLASS_UID, VR::UI, CT_IMAGE_STORAGE),
        InMemElement::new(tags::SOP_INSTANCE_UID, VR::UI, sop_instance_uid),
        InMemElement::new(tags::INSTITUTION_NAME, VR::LO, "General Hospital"),
        InMemElement::new(
            tags::REFERENCED_IMAGE_SEQUENCE,
            VR::SQ,
            vec![item(vec![
                InMemElement::new(tags::REFERENCED_SOP_CLASS_UID, VR::UI, CT_IMAGE_STORAGE),
                InMemElement::new(tags::REFERENCED_SOP_INSTANCE_UID, VR::UI, referenced_uid),
            ])],
        ),
        InMemElement::new(tags::PATIENT_NAME, VR::PN, "Doe^John"),
        InMemElement::new(tags::PATIENT_ID, VR::LO, "P1"),
        InMemElement::new(tags::PATIENT_BIRTH_DATE, VR::DA, "19800101"),
        InMemElement::new(tags::STUDY_INSTANCE_UID, VR::UI, "1.2.3"),
        InMemElement::new(tags::SERIES_INSTANCE_UID, VR::UI, "1.2.3.4"),
        InMemElement::new(tags::FRAME_OF_REFERENCE_UID, VR::UI, "1.2.3.9"),
        InMemElement::new(Tag(0x0009, 0x0010), VR::LO, "ACME"),
        InMemElement::new(Tag(0x0009, 0x1001), VR::LO, "internal note"),
    ])
}

fn text(obj: &InMemDicomObject, tag: Tag) -> String {
    obj.get(tag)
        .and_then(|e| e.to_str().map(|s| s.into_owned()))
        .unwrap_or_else(|| panic!("missing {}", tag))
}

fn nested_text(obj: &InMemDicomObject, sequences: &[Tag], tag: Tag) -> String {
    let mut current = obj;
    for &seq in sequences {
        current = &obj_items(current, seq)[0];
    }
    text(current, tag)
}

fn obj_items(obj: &InMemDicomObject, tag: Tag) -> &[InMemDicomObject] {
    obj.get(tag)
        .and_then(|e| e.value().items())
        .unwrap_or_else(|| panic!("missing sequence {}", tag))
}

#[test]
fn identifiers_are_consistent_across_instances() {
    let mut modification = DicomModification::new();
    modification
        .setup_anonymization(DicomVersion::V2021b)
        .unwrap();
    modification.set_identifier_generator(Box::new(CountingGenerator::default()));

    let mut first = ct_image("1.2.3.4.1", "1.2.3.4.2");
    let mut second = ct_image("1.2.3.4.2", "1.2.3.4.1");
    modification.apply(&mut first).unwrap();
    modification.apply(&mut second).unwrap();

    for tag in [
        tags::STUDY_INSTANCE_UID,
        tags::SERIES_INSTANCE_UID,
        tags::PATIENT_ID,
        tags::PATIENT_NAME,
        tags::FRAME_OF_REFERENCE_UID,
    ] {
        assert_eq!(text(&first, tag), text(&second, tag), "{}", tag);
    }
    assert_eq!(text(&first, tags::STUDY_INSTANCE_UID), "9.1.1");
    assert_eq!(text(&first, tags::SERIES_INSTANCE_UID), "9.2.1");
    assert_ne!(text(&first, tags::PATIENT_ID), "P1");
    assert_ne!(text(&first, tags::PATIENT_NAME), "Doe^John");
    assert_ne!(text(&first, tags::PATIENT_ID), text(&first, tags::PATIENT_NAME));

    let first_sop = text(&first, tags::SOP_INSTANCE_UID);
    let second_sop = text(&second, tags::SOP_INSTANCE_UID);
    assert_ne!(first_sop, second_sop);

    // each instance still points at the other one
    let reference = [tags::REFERENCED_IMAGE_SEQUENCE];
    assert_eq!(
        nested_text(&first, &reference, tags::REFERENCED_SOP_INSTANCE_UID),
        second_sop
    );
    assert_eq!(
        nested_text(&second, &reference, tags::REFERENCED_SOP_INSTANCE_UID),
        first_sop
    );
    assert_eq!(
        nested_text(&first, &reference, tags::REFERENCED_SOP_CLASS_UID),
        CT_IMAGE_STORAGE
    );

    for obj in [&first, &second] {
        assert!(obj.get(tags::INSTITUTION_NAME).is_none());
        assert!(obj.get(Tag(0x0009, 0x1001)).is_none());
        assert!(obj.get(Tag(0x0009, 0x0010)).is_none());
        assert_eq!(text(obj, tags::PATIENT_IDENTITY_REMOVED), "YES");
        assert_eq!(
            text(obj, tags::DEIDENTIFICATION_METHOD),
            DicomVersion::V2021b.deidentification_method()
        );
    }
}

#[test]
fn rt_struct_references_the_anonymized_study() {
    let mut rt_struct = item(vec![
        InMemElement::new(tags::SOP_CLASS_UID, VR::UI, RT_STRUCTURE_SET_STORAGE),
        InMemElement::new(tags::SOP_INSTANCE_UID, VR::UI, "1.2.3.7.1"),
        InMemElement::new(tags::PATIENT_ID, VR::LO, "P1"),
        InMemElement::new(tags::STUDY_INSTANCE_UID, VR::UI, "1.2.3"),
        InMemElement::new(tags::SERIES_INSTANCE_UID, VR::UI, "1.2.3.7"),
        InMemElement::new(
            tags::REFERENCED_FRAME_OF_REFERENCE_SEQUENCE,
            VR::SQ,
            vec![item(vec![
                InMemElement::new(tags::FRAME_OF_REFERENCE_UID, VR::UI, "1.2.3.9"),
                InMemElement::new(
                    tags::RT_REFERENCED_STUDY_SEQUENCE,
                    VR::SQ,
                    vec![item(vec![
                        InMemElement::new(
                            tags::REFERENCED_SOP_CLASS_UID,
                            VR::UI,
                            "1.2.840.10008.3.1.2.3.1",
                        ),
                        InMemElement::new(tags::REFERENCED_SOP_INSTANCE_UID, VR::UI, "1.2.3"),
                        InMemElement::new(
                            tags::RT_REFERENCED_SERIES_SEQUENCE,
                            VR::SQ,
                            vec![item(vec![InMemElement::new(
                                tags::SERIES_INSTANCE_UID,
                                VR::UI,
                                "1.2.3.4",
                            )])],
                        ),
                    ])],
                ),
            ])],
        ),
    ]);

    let mut modification = DicomModification::new();
    modification
        .setup_anonymization(DicomVersion::V2017c)
        .unwrap();
    modification.apply(&mut rt_struct).unwrap();

    let new_study = text(&rt_struct, tags::STUDY_INSTANCE_UID);
    assert_ne!(new_study, "1.2.3");

    let study_ref = [
        tags::REFERENCED_FRAME_OF_REFERENCE_SEQUENCE,
        tags::RT_REFERENCED_STUDY_SEQUENCE,
    ];
    assert_eq!(
        nested_text(&rt_struct, &study_ref, tags::REFERENCED_SOP_INSTANCE_UID),
        new_study
    );
    assert!(modification
        .uid_map()
        .get(ResourceLevel::Instance, "1.2.3")
        .is_none());

    let series_ref = [
        tags::REFERENCED_FRAME_OF_REFERENCE_SEQUENCE,
        tags::RT_REFERENCED_STUDY_SEQUENCE,
        tags::RT_REFERENCED_SERIES_SEQUENCE,
    ];
    assert_eq!(
        Some(nested_text(&rt_struct, &series_ref, tags::SERIES_INSTANCE_UID).as_str()),
        modification.uid_map().get(ResourceLevel::Series, "1.2.3.4")
    );

    let frame = nested_text(
        &rt_struct,
        &[tags::REFERENCED_FRAME_OF_REFERENCE_SEQUENCE],
        tags::FRAME_OF_REFERENCE_UID,
    );
    assert_ne!(frame, "1.2.3.9");
}

#[test]
fn keep_study_instance_uid() {
    let mut obj = item(vec![
        InMemElement::new(tags::STUDY_INSTANCE_UID, VR::UI, "1.2.3"),
        InMemElement::new(tags::SERIES_INSTANCE_UID, VR::UI, "1.2.4"),
        InMemElement::new(tags::SOP_INSTANCE_UID, VR::UI, "1.2.5"),
        InMemElement::new(tags::PATIENT_NAME, VR::PN, "FOO"),
        InMemElement::new(tags::PATIENT_BIRTH_DATE, VR::DA, "19800101"),
    ]);

    let request = ModificationRequest::from_json(
        r#"{ "Keep": [ "StudyInstanceUID" ], "Force": true, "DicomVersion": "2021b" }"#,
    )
    .unwrap();
    let mut modification = DicomModification::new();
    modification.parse_anonymization_request(&request).unwrap();
    modification.apply(&mut obj).unwrap();

    assert_eq!(text(&obj, tags::STUDY_INSTANCE_UID), "1.2.3");
    assert_ne!(text(&obj, tags::SERIES_INSTANCE_UID), "1.2.4");
    assert_ne!(text(&obj, tags::SOP_INSTANCE_UID), "1.2.5");
    assert_ne!(text(&obj, tags::PATIENT_NAME), "FOO");
    assert!(obj
        .get(tags::PATIENT_BIRTH_DATE)
        .map_or(true, |e| e.value().as_bytes().map_or(true, |b| b.is_empty())));
    assert_eq!(text(&obj, tags::PATIENT_IDENTITY_REMOVED), "YES");

    // keeping the study needs the force option
    let request = ModificationRequest::from_json(r#"{ "Keep": [ "StudyInstanceUID" ] }"#).unwrap();
    assert!(DicomModification::new()
        .parse_anonymization_request(&request)
        .is_err());
}

#[rstest]
#[case(DicomVersion::V2008)]
#[case(DicomVersion::V2017c)]
#[case(DicomVersion::V2021b)]
#[case(DicomVersion::V2023b)]
fn profile_is_loaded_whole(#[case] version: DicomVersion) {
    let mut modification = DicomModification::new();
    modification.setup_anonymization(version).unwrap();
    let profile = basic_profile(version);

    for &tag in profile.removals {
        assert!(modification.is_removed(tag), "{} not removed", tag);
    }
    for &tag in profile.clearings {
        assert!(modification.is_cleared(tag), "{} not cleared", tag);
    }
    for &tag in profile.uids {
        assert!(modification.uids().contains(&tag), "{} not remapped", tag);
        assert!(!modification.is_removed(tag));
        assert!(!modification.is_cleared(tag));
        assert!(!modification.is_replaced(tag));
    }
    assert_eq!(modification.removed_ranges(), profile.ranges);
    assert!(modification.uids().contains(&tags::PATIENT_ID));
    assert!(modification.uids().contains(&tags::PATIENT_NAME));
    assert_eq!(modification.level(), ResourceLevel::Patient);
    assert!(modification.remove_private_tags());
}

#[test]
fn references_are_dropped_without_relationship_update() {
    let mut modification = DicomModification::new();
    modification
        .setup_anonymization(DicomVersion::V2023b)
        .unwrap();
    modification.set_update_referenced_relationships(false);

    let mut obj = ct_image("1.2.3.4.1", "1.2.3.4.2");
    modification.apply(&mut obj).unwrap();

    assert!(obj.get(tags::REFERENCED_IMAGE_SEQUENCE).is_none());
    assert!(obj.get(tags::FRAME_OF_REFERENCE_UID).is_none());
    assert_ne!(text(&obj, tags::PATIENT_ID), "P1");
    assert_ne!(text(&obj, tags::STUDY_INSTANCE_UID), "1.2.3");
}

#[test]
fn kept_and_edited_sequences() {
    let request = ModificationRequest::from_json(
        r#"{
            "Keep": [ "ReferencedImageSequence" ],
            "Replace": { "ReferencedImageSequence[0].ReferencedSOPClassUID": "1.2.840.10008.5.1.4.1.1.4" },
            "KeepPrivateTags": true
        }"#,
    )
    .unwrap();
    let mut modification = DicomModification::new();
    modification.parse_anonymization_request(&request).unwrap();

    let mut obj = ct_image("1.2.3.4.1", "1.2.3.4.2");
    modification.apply(&mut obj).unwrap();

    let reference = [tags::REFERENCED_IMAGE_SEQUENCE];
    assert_eq!(
        nested_text(&obj, &reference, tags::REFERENCED_SOP_INSTANCE_UID),
        "1.2.3.4.2"
    );
    assert_eq!(
        nested_text(&obj, &reference, tags::REFERENCED_SOP_CLASS_UID),
        "1.2.840.10008.5.1.4.1.1.4"
    );
    assert_eq!(text(&obj, Tag(0x0009, 0x1001)), "internal note");
}

#[test]
fn generator_failure_leaves_data_set_untouched() {
    let mut modification = DicomModification::new();
    modification
        .setup_anonymization(DicomVersion::V2021b)
        .unwrap();
    modification.set_identifier_generator(Box::new(FailingGenerator));

    let mut obj = ct_image("1.2.3.4.1", "1.2.3.4.2");
    let err = modification.apply(&mut obj).unwrap_err();
    assert!(matches!(err, dcmkit_modify::Error::GenerateIdentifier { .. }));
    assert_eq!(obj, ct_image("1.2.3.4.1", "1.2.3.4.2"));
}

#[test]
fn file_meta_follows_the_new_instance() {
    let mut file = ct_image("1.2.3.4.1", "1.2.3.4.2")
        .with_meta(
            FileMetaTableBuilder::new()
                .transfer_syntax("1.2.840.10008.1.2.1")
                .media_storage_sop_class_uid(CT_IMAGE_STORAGE)
                .media_storage_sop_instance_uid("1.2.3.4.1"),
        )
        .unwrap();

    let mut modification = DicomModification::new();
    modification
        .setup_anonymization(DicomVersion::V2021b)
        .unwrap();
    modification.apply_file(&mut file).unwrap();

    let new_sop = text(&file, tags::SOP_INSTANCE_UID);
    assert_ne!(new_sop, "1.2.3.4.1");
    assert_eq!(file.meta().media_storage_sop_instance_uid(), new_sop);
    assert_eq!(file.meta().media_storage_sop_class_uid(), CT_IMAGE_STORAGE);
}

#[test]
fn resumed_session_keeps_mappings() {
    let mut modification = DicomModification::new();
    modification
        .setup_anonymization(DicomVersion::V2021b)
        .unwrap();
    let mut first = ct_image("1.2.3.4.1", "1.2.3.4.2");
    modification.apply(&mut first).unwrap();

    let state = modification.to_json().unwrap();
    let mut resumed = DicomModification::from_json(&state).unwrap();
    let mut second = ct_image("1.2.3.4.2", "1.2.3.4.1");
    resumed.apply(&mut second).unwrap();

    assert_eq!(
        text(&first, tags::STUDY_INSTANCE_UID),
        text(&second, tags::STUDY_INSTANCE_UID)
    );
    assert_eq!(
        nested_text(&second, &[tags::REFERENCED_IMAGE_SEQUENCE], tags::REFERENCED_SOP_INSTANCE_UID),
        text(&first, tags::SOP_INSTANCE_UID)
    );
    assert_eq!(text(&first, tags::PATIENT_ID), text(&second, tags::PATIENT_ID));
}

/// Encode an element in implicit VR little endian.
fn implicit(tag: Tag, value: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(8 + value.len());
    bytes.extend_from_slice(&tag.group().to_le_bytes());
    bytes.extend_from_slice(&tag.element().to_le_bytes());
    bytes.extend_from_slice(&(value.len() as u32).to_le_bytes());
    bytes.extend_from_slice(value);
    bytes
}

#[test]
fn nested_identifiers_of_implicit_defined_length_sequences() {
    let mut related = implicit(tags::PATIENT_NAME, b"Doe^John");
    related.extend(implicit(tags::STUDY_INSTANCE_UID, b"1.2.3\0"));
    related.extend(implicit(tags::SERIES_INSTANCE_UID, b"1.2.3.4\0"));
    let item = implicit(Tag(0xFFFE, 0xE000), &related);
    // private sequence, unknown to any dictionary
    let private_item = implicit(Tag(0xFFFE, 0xE000), &implicit(tags::STUDY_INSTANCE_UID, b"1.2.3\0"));

    let mut data = Vec::new();
    data.extend(implicit(tags::SOP_CLASS_UID, b"1.2.840.10008.5.1.4.1.1.2\0"));
    data.extend(implicit(tags::SOP_INSTANCE_UID, b"1.2.3.4.1\0"));
    data.extend(implicit(tags::RELATED_SERIES_SEQUENCE, &item));
    data.extend(implicit(Tag(0x0009, 0x0010), b"ACME"));
    data.extend(implicit(Tag(0x0009, 0x1010), &private_item));
    data.extend(implicit(tags::PATIENT_NAME, b"Doe^John"));
    data.extend(implicit(tags::PATIENT_ID, b"P1"));
    data.extend(implicit(tags::STUDY_INSTANCE_UID, b"1.2.3\0"));
    data.extend(implicit(tags::SERIES_INSTANCE_UID, b"1.2.3.4\0"));

    let mut obj = InMemDicomObject::read_dataset(&data[..], TransferSyntax::LittleEndianImplicit).unwrap();
    assert_eq!(obj.get(tags::RELATED_SERIES_SEQUENCE).unwrap().vr(), VR::SQ);
    assert_eq!(obj.get(Tag(0x0009, 0x1010)).unwrap().vr(), VR::SQ);

    let mut modification = DicomModification::new();
    modification
        .setup_anonymization(DicomVersion::V2021b)
        .unwrap();
    modification.set_identifier_generator(Box::new(CountingGenerator::default()));
    modification.apply(&mut obj).unwrap();

    let related = [tags::RELATED_SERIES_SEQUENCE];
    assert_eq!(text(&obj, tags::STUDY_INSTANCE_UID), "9.1.1");
    assert_eq!(nested_text(&obj, &related, tags::STUDY_INSTANCE_UID), "9.1.1");
    assert_eq!(
        nested_text(&obj, &related, tags::SERIES_INSTANCE_UID),
        text(&obj, tags::SERIES_INSTANCE_UID)
    );
    assert_eq!(
        nested_text(&obj, &related, tags::PATIENT_NAME),
        text(&obj, tags::PATIENT_NAME)
    );
    assert_ne!(text(&obj, tags::PATIENT_NAME), "Doe^John");
    assert!(obj.get(Tag(0x0009, 0x1010)).is_none());
}
