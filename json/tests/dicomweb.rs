//! DICOMweb conversion of data sets read back from their Part-10 encoding.
use dcmkit_core::{Tag, TransferSyntax, VR};
use dcmkit_dictionary_std::{tags, uids};
use dcmkit_json::{to_value, to_value_with, to_xml_string, BinaryMode, DicomJsonOptions};
use dcmkit_object::{from_reader, FileMetaTableBuilder, InMemDicomObject, InMemElement, Value};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

fn read_back(obj: InMemDicomObject, transfer_syntax: &str) -> dcmkit_object::DefaultDicomObject {
    let file = obj
        .with_meta(
            FileMetaTableBuilder::new()
                .transfer_syntax(transfer_syntax)
                .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.7")
                .media_storage_sop_instance_uid("1.2.3.4.5"),
        )
        .unwrap();
    let mut bytes = Vec::new();
    file.write_meta_and_dataset(&mut bytes).unwrap();
    from_reader(bytes.as_slice()).unwrap()
}

fn sample() -> InMemDicomObject {
    InMemDicomObject::from_element_iter(vec![
        InMemElement::new(tags::SOP_INSTANCE_UID, VR::UI, "1.2.3.4.5"),
        InMemElement::new(tags::PATIENT_NAME, VR::PN, "SB1^SB2^SB3^SB4^SB5"),
        InMemElement::new(tags::PATIENT_ID, VR::LO, "1234"),
        InMemElement::new(tags::PIXEL_SPACING, VR::DS, "1.5\\1.3"),
        InMemElement::new(tags::IMAGE_POSITION_PATIENT, VR::DS, "\\\\-12"),
        InMemElement::new(tags::ROWS, VR::US, Value::from_u16(2)),
        InMemElement::new(
            tags::REFERENCED_IMAGE_SEQUENCE,
            VR::SQ,
            vec![InMemDicomObject::from_element_iter(vec![
                InMemElement::new(tags::REFERENCED_SOP_CLASS_UID, VR::UI, "1.2.840.10008.5.1.4.1.1.2"),
                InMemElement::new(tags::REFERENCED_SOP_INSTANCE_UID, VR::UI, "1.2.3.4.6"),
            ])],
        ),
        InMemElement::new(tags::PIXEL_DATA, VR::OW, vec![0u8, 1, 2, 3]),
    ])
}

#[rstest]
#[case(uids::EXPLICIT_VR_LITTLE_ENDIAN)]
#[case(uids::IMPLICIT_VR_LITTLE_ENDIAN)]
fn read_data_set_to_json(#[case] transfer_syntax: &str) {
    let file = read_back(sample(), transfer_syntax);
    let json = to_value(&*file);

    assert_eq!(
        json,
        json!({
            "00080018": { "vr": "UI", "Value": ["1.2.3.4.5"] },
            "00081140": {
                "vr": "SQ",
                "Value": [ {
                    "00081150": { "vr": "UI", "Value": ["1.2.840.10008.5.1.4.1.1.2"] },
                    "00081155": { "vr": "UI", "Value": ["1.2.3.4.6"] },
                } ],
            },
            "00100010": { "vr": "PN", "Value": [ { "Alphabetic": "SB1^SB2^SB3^SB4^SB5" } ] },
            "00100020": { "vr": "LO", "Value": ["1234"] },
            "00200032": { "vr": "DS", "Value": [null, null, -12] },
            "00280010": { "vr": "US", "Value": [2] },
            "00280030": { "vr": "DS", "Value": [1.5, 1.3] },
            "7FE00010": { "vr": "OW", "InlineBinary": "AAECAw==" },
        })
    );
}

#[test]
fn file_meta_group_is_included() {
    let file = read_back(sample(), uids::EXPLICIT_VR_LITTLE_ENDIAN);
    let json = to_value(&file);
    assert_eq!(json["00020002"]["Value"], json!(["1.2.840.10008.5.1.4.1.1.7"]));
    assert_eq!(json["00020010"]["Value"], json!(["1.2.840.10008.1.2.1"]));
    assert!(json.get("00020000").is_none());
}

#[test]
fn pixel_data_by_reference() {
    let file = read_back(sample(), uids::EXPLICIT_VR_LITTLE_ENDIAN);
    let mut seen = Vec::new();
    let options = DicomJsonOptions::new().binary_formatter(
        move |_: &[Tag], _: &[usize], tag: Tag, _: VR| {
            seen.push(tag);
            BinaryMode::BulkDataUri(format!("bulk/{}", seen.len()))
        },
    );
    let json = to_value_with(&*file, options);
    assert_eq!(json["7FE00010"], json!({ "vr": "OW", "BulkDataURI": "bulk/1" }));
}

#[test]
fn read_data_set_to_xml() {
    let file = read_back(sample(), uids::EXPLICIT_VR_LITTLE_ENDIAN);
    let xml = to_xml_string(&*file).unwrap();
    assert!(xml.contains(r#"<DicomAttribute tag="00280030" vr="DS" keyword="PixelSpacing">"#));
    assert!(xml.contains(r#"<Value number="2">1.3</Value>"#));
    assert!(xml.contains("<NameSuffix>SB5</NameSuffix>"));
    assert!(xml.contains(r#"<DicomAttribute tag="00081140" vr="SQ" keyword="ReferencedImageSequence">"#));
}

#[test]
fn implicit_defined_length_sequence_to_json() {
    #[rustfmt::skip]
    let data: &[u8] = &[
        // (0008,1250) RelatedSeriesSequence, defined length 20
        0x08, 0x00, 0x50, 0x12, 0x14, 0x00, 0x00, 0x00,
        0xfe, 0xff, 0x00, 0xe0, 0x0c, 0x00, 0x00, 0x00,
        // (0020,000D) StudyInstanceUID
        0x20, 0x00, 0x0d, 0x00, 0x04, 0x00, 0x00, 0x00, b'1', b'.', b'2', 0x00,
        // (0040,A375) CurrentRequestedProcedureEvidenceSequence, empty item
        0x40, 0x00, 0x75, 0xa3, 0x08, 0x00, 0x00, 0x00,
        0xfe, 0xff, 0x00, 0xe0, 0x00, 0x00, 0x00, 0x00,
    ];
    let obj = InMemDicomObject::read_dataset(data, TransferSyntax::LittleEndianImplicit).unwrap();

    assert_eq!(
        to_value(&obj),
        json!({
            "00081250": {
                "vr": "SQ",
                "Value": [ { "0020000D": { "vr": "UI", "Value": ["1.2"] } } ],
            },
            "0040A375": { "vr": "SQ", "Value": [ {} ] },
        })
    );
}
