use dcmkit_core::{DicomPath, ErrorKind, Tag, TransferSyntax, VR};
use dcmkit_dictionary_std::tags;
use dcmkit_object::{
    from_reader, open_file, DefaultDicomObject, FileMetaTableBuilder, InMemDicomObject,
    InMemElement, OpenFileOptions, ReadPreamble, Value,
};
use dcmkit_parser::DataSetReader;
use std::io::Write;

fn sample_object(ts: TransferSyntax) -> DefaultDicomObject {
    let mut item = InMemDicomObject::new_empty();
    item.put(InMemElement::new(tags::REFERENCED_SOP_CLASS_UID, VR::UI, "1.2.840.10008.5.1.4.1.1.2"));
    item.put(InMemElement::new(tags::REFERENCED_SOP_INSTANCE_UID, VR::UI, "1.2.3.4.5"));

    let mut obj = InMemDicomObject::new_empty();
    obj.put(InMemElement::new(tags::SOP_CLASS_UID, VR::UI, "1.2.840.10008.5.1.4.1.1.7"));
    obj.put(InMemElement::new(tags::SOP_INSTANCE_UID, VR::UI, "1.2.3.4.6"));
    obj.put(InMemElement::new(tags::REFERENCED_IMAGE_SEQUENCE, VR::SQ, vec![item]));
    obj.put(InMemElement::new(tags::PATIENT_NAME, VR::PN, "Doe^John"));
    obj.put(InMemElement::new(tags::PATIENT_ID, VR::LO, "ID0001"));
    obj.put(InMemElement::new(tags::ROWS, VR::US, Value::from_u16(2)));
    obj.put(InMemElement::new(tags::COLUMNS, VR::US, Value::from_u16(2)));
    if ts.is_encapsulated() {
        obj.put(InMemElement::new(
            tags::PIXEL_DATA,
            VR::OB,
            Value::Encapsulated(vec![vec![], vec![0xFF, 0xD8, 0xFF, 0xD9]]),
        ));
    } else {
        obj.put(InMemElement::new(
            tags::PIXEL_DATA,
            VR::OW,
            Value::from_u16s(&[0, 100, 200, 300]),
        ));
    }
    obj.with_meta(FileMetaTableBuilder::new().transfer_syntax(ts.uid()))
        .unwrap()
}

const TRANSFER_SYNTAXES: &[TransferSyntax] = &[
    TransferSyntax::LittleEndianImplicit,
    TransferSyntax::LittleEndianExplicit,
    TransferSyntax::BigEndianExplicit,
    TransferSyntax::JpegProcess1,
    TransferSyntax::RleLossless,
];

#[test]
fn file_round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    for &ts in TRANSFER_SYNTAXES {
        let obj = sample_object(ts);
        let path = dir.path().join(format!("{}.dcm", ts.uid()));
        obj.write_to_file(&path).unwrap();

        let back = open_file(&path).unwrap();
        assert_eq!(back.transfer_syntax(), Some(ts));
        assert_eq!(back.meta(), obj.meta());
        assert_eq!(back.into_inner(), obj.clone().into_inner(), "{}", ts.uid());
    }
}

#[test]
fn meta_group_is_preserved_byte_for_byte() {
    for &ts in TRANSFER_SYNTAXES {
        let obj = sample_object(ts);
        let mut original = Vec::new();
        obj.write_all(&mut original).unwrap();

        let parsed = OpenFileOptions::new()
            .read_preamble(ReadPreamble::Always)
            .from_reader(&original[..])
            .unwrap();
        let mut rewritten = Vec::new();
        parsed.write_all(&mut rewritten).unwrap();

        // preamble + magic + group length element + group
        let meta_end = 128 + 4 + 12 + obj.meta().information_group_length() as usize;
        assert_eq!(&rewritten[..meta_end], &original[..meta_end], "{}", ts.uid());
        assert_eq!(rewritten, original, "{}", ts.uid());
    }
}

#[test]
fn meta_group_with_odd_elements_is_preserved() {
    // extra information element not known to the builder
    let mut meta = FileMetaTableBuilder::new()
        .transfer_syntax(TransferSyntax::LittleEndianExplicit.uid())
        .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.7")
        .media_storage_sop_instance_uid("1.2.3")
        .build()
        .unwrap();
    meta.set(dcmkit_object::meta::MetaElement {
        tag: Tag(0x0002, 0x0102),
        vr: VR::OB,
        value: vec![1, 2, 3, 4],
    });
    let obj = InMemDicomObject::new_empty().with_exact_meta(meta);
    let mut original = Vec::new();
    obj.write_all(&mut original).unwrap();

    let parsed = OpenFileOptions::new()
        .read_preamble(ReadPreamble::Always)
        .from_reader(&original[..])
        .unwrap();
    let mut rewritten = Vec::new();
    parsed.write_all(&mut rewritten).unwrap();
    assert_eq!(rewritten, original);
}

#[test]
fn read_without_preamble() {
    let obj = sample_object(TransferSyntax::LittleEndianExplicit);
    let mut data = Vec::new();
    obj.write_meta_and_dataset(&mut data).unwrap();

    let back = from_reader(&data[..]).unwrap();
    assert_eq!(
        back.element(tags::PATIENT_NAME).unwrap().to_str().as_deref(),
        Some("Doe^John")
    );

    // files without a preamble are detected when opened by path
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&data).unwrap();
    file.flush().unwrap();
    let back = open_file(file.path()).unwrap();
    assert_eq!(back.meta(), obj.meta());
    assert_eq!(back.into_inner(), obj.into_inner());
}

#[test]
fn read_until_pixel_data() {
    let obj = sample_object(TransferSyntax::JpegProcess1);
    let mut file = tempfile::NamedTempFile::new().unwrap();
    obj.write_all(&mut file).unwrap();
    file.flush().unwrap();

    let back = OpenFileOptions::new()
        .read_until(tags::PIXEL_DATA)
        .open_file(file.path())
        .unwrap();
    assert!(back.get(tags::PIXEL_DATA).is_none());
    assert!(back.get(tags::COLUMNS).is_some());

    let path: DicomPath = "ReferencedImageSequence[0].ReferencedSOPInstanceUID"
        .parse()
        .unwrap();
    assert_eq!(
        back.get_path(&path).and_then(|e| e.to_str()).as_deref(),
        Some("1.2.3.4.5")
    );
}

#[test]
fn data_set_depth_is_balanced_after_parsing() {
    for &ts in TRANSFER_SYNTAXES {
        let obj = sample_object(ts);
        let mut data = Vec::new();
        obj.write_dataset(&mut data).unwrap();

        let mut reader = DataSetReader::new(&data[..], ts).unwrap();
        let count = reader.by_ref().map(|token| token.unwrap()).count();
        assert!(count > 0);
        assert_eq!(reader.depth(), 0, "{}", ts.uid());
        assert_eq!(reader.position(), data.len() as u64);
    }
}

#[test]
fn missing_file_is_inaccessible() {
    let dir = tempfile::tempdir().unwrap();
    let err = open_file(dir.path().join("nope.dcm")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InaccessibleFile);
}

#[test]
fn not_a_dicom_file() {
    let data = vec![0u8; 200];
    let err = OpenFileOptions::new()
        .read_preamble(ReadPreamble::Always)
        .from_reader(&data[..])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadFileFormat);
}

#[test]
fn unknown_vr_in_file_is_read_as_un() {
    let empty = InMemDicomObject::new_empty()
        .with_meta(
            FileMetaTableBuilder::new()
                .transfer_syntax(TransferSyntax::LittleEndianExplicit.uid())
                .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.7")
                .media_storage_sop_instance_uid("1.2.3"),
        )
        .unwrap();
    let mut data = Vec::new();
    empty.write_meta_and_dataset(&mut data).unwrap();
    #[rustfmt::skip]
    let elements: &[u8] = &[
        // (0009,1001) with VR "XX", reserved bytes, 32-bit length 4
        0x09, 0x00, 0x01, 0x10, b'X', b'X', 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 1, 2, 3, 4,
        // (0010,0020) PatientID
        0x10, 0x00, 0x20, 0x00, b'L', b'O', 0x02, 0x00, b'I', b'D',
    ];
    data.extend_from_slice(elements);

    let back = from_reader(&data[..]).unwrap();
    let unknown = back.element(Tag(0x0009, 0x1001)).unwrap();
    assert_eq!(unknown.vr(), VR::UN);
    assert_eq!(unknown.as_bytes(), Some(&[1u8, 2, 3, 4][..]));
    assert_eq!(
        back.element(tags::PATIENT_ID).unwrap().to_str().as_deref(),
        Some("ID")
    );
}
