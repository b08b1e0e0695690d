//! Module containing data structures and readers of DICOM file meta information tables.
//!
//! The table keeps every element of the group as it was read,
//! so that writing it back produces the same bytes.
use crate::{IMPLEMENTATION_CLASS_UID, IMPLEMENTATION_VERSION_NAME};
use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use dcmkit_core::{ErrorKind, Tag, VR};
use dcmkit_dictionary_std::tags;
use snafu::{Backtrace, OptionExt, ResultExt, Snafu};
use std::io::{Read, Write};

pub(crate) const DICM_MAGIC_CODE: [u8; 4] = [b'D', b'I', b'C', b'M'];

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// The file meta group parser could not read
    /// the magic code `DICM` from its source.
    #[snafu(display("Could not start reading DICOM data"))]
    ReadMagicCode {
        backtrace: Backtrace,
        source: std::io::Error,
    },

    /// The file meta group parser could not fetch
    /// a data element from its source.
    #[snafu(display("Could not read data element"))]
    ReadElement {
        backtrace: Backtrace,
        source: std::io::Error,
    },

    /// Invalid DICOM data, detected from checking the `DICM` code.
    #[snafu(display("Invalid DICOM data"))]
    NotDicom { backtrace: Backtrace },

    /// The group length element is not the first one,
    /// or it is malformed.
    #[snafu(display("Missing file meta information group length"))]
    MissingGroupLength { backtrace: Backtrace },

    /// A data element with an unexpected tag was retrieved:
    /// the parser was expecting one that is part of the file meta group.
    #[snafu(display("Unexpected data element tagged {}", tag))]
    UnexpectedTag { tag: Tag, backtrace: Backtrace },

    #[snafu(display("Unknown value representation {:?} in {}", vr, tag))]
    UnknownVr {
        tag: Tag,
        vr: [u8; 2],
        backtrace: Backtrace,
    },

    /// An element goes past the end of the group.
    #[snafu(display("Data element {} overflows the file meta group", tag))]
    ElementOverflow { tag: Tag, backtrace: Backtrace },

    /// A required file meta data element is missing.
    #[snafu(display("Missing data element `{}`", alias))]
    MissingElement {
        alias: &'static str,
        backtrace: Backtrace,
    },

    /// The file meta group data set could not be written.
    #[snafu(display("Could not write file meta group data set"))]
    WriteSet {
        backtrace: Backtrace,
        source: std::io::Error,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::WriteSet { .. } => ErrorKind::InaccessibleFile,
            _ => ErrorKind::BadFileFormat,
        }
    }
}

type Result<T, E = Error> = std::result::Result<T, E>;

/// A data element of the file meta group, as encoded.
#[derive(Debug, Clone, PartialEq)]
pub struct MetaElement {
    pub tag: Tag,
    pub vr: VR,
    /// the value bytes, including any padding
    pub value: Vec<u8>,
}

impl MetaElement {
    /// The value as text, without its padding.
    pub fn to_str(&self) -> &str {
        std::str::from_utf8(&self.value)
            .unwrap_or("")
            .trim_end_matches(|c| c == '\0' || c == ' ')
    }

    fn encoded_len(&self) -> u32 {
        let header = if self.vr.is_short_explicit() { 8 } else { 12 };
        header + self.value.len() as u32
    }
}

/// DICOM File Meta Information Table.
///
/// This data type contains every data element of the group `0002`,
/// as specified in [1], in ascending tag order.
/// Accessors are provided for the elements in common use.
///
/// [1]: http://dicom.nema.org/medical/dicom/current/output/chtml/part10/chapter_7.html
#[derive(Debug, Clone, PartialEq)]
pub struct FileMetaTable {
    elements: Vec<MetaElement>,
}

impl FileMetaTable {
    /// Read the table from a source positioned at the magic code `DICM`.
    pub fn from_reader<R: Read>(mut file: R) -> Result<Self> {
        let mut magic = [0; 4];
        file.read_exact(&mut magic).context(ReadMagicCodeSnafu)?;
        if magic != DICM_MAGIC_CODE {
            return NotDicomSnafu.fail();
        }
        FileMetaTable::read_after_magic(file)
    }

    /// Read the table from a source positioned right after the magic code.
    pub(crate) fn read_after_magic<R: Read>(mut file: R) -> Result<Self> {
        // (0002,0000) UL 4 <group length>
        let mut buf = [0; 12];
        file.read_exact(&mut buf).context(ReadElementSnafu)?;
        let tag = Tag(LittleEndian::read_u16(&buf[0..2]), LittleEndian::read_u16(&buf[2..4]));
        if tag != tags::FILE_META_INFORMATION_GROUP_LENGTH
            || &buf[4..6] != b"UL"
            || LittleEndian::read_u16(&buf[6..8]) != 4
        {
            return MissingGroupLengthSnafu.fail();
        }
        let group_length = LittleEndian::read_u32(&buf[8..12]);

        let mut elements = vec![MetaElement {
            tag,
            vr: VR::UL,
            value: buf[8..12].to_vec(),
        }];

        let mut remaining = group_length;
        while remaining > 0 {
            let element = read_element(&mut file, remaining)?;
            remaining -= element.encoded_len();
            elements.push(element);
        }

        let table = FileMetaTable { elements };
        if table.get(tags::TRANSFER_SYNTAX_UID).is_none() {
            return MissingElementSnafu {
                alias: "TransferSyntaxUID",
            }
            .fail();
        }
        Ok(table)
    }

    /// All elements of the group, including the group length.
    pub fn elements(&self) -> &[MetaElement] {
        &self.elements
    }

    pub fn get(&self, tag: Tag) -> Option<&MetaElement> {
        self.elements.iter().find(|e| e.tag == tag)
    }

    fn text_of(&self, tag: Tag) -> &str {
        self.get(tag).map(MetaElement::to_str).unwrap_or("")
    }

    /// The declared group length, in bytes.
    pub fn information_group_length(&self) -> u32 {
        self.get(tags::FILE_META_INFORMATION_GROUP_LENGTH)
            .filter(|e| e.value.len() == 4)
            .map(|e| LittleEndian::read_u32(&e.value))
            .unwrap_or(0)
    }

    /// The transfer syntax UID, without padding.
    pub fn transfer_syntax(&self) -> &str {
        self.text_of(tags::TRANSFER_SYNTAX_UID)
    }

    pub fn media_storage_sop_class_uid(&self) -> &str {
        self.text_of(tags::MEDIA_STORAGE_SOP_CLASS_UID)
    }

    pub fn media_storage_sop_instance_uid(&self) -> &str {
        self.text_of(tags::MEDIA_STORAGE_SOP_INSTANCE_UID)
    }

    pub fn implementation_class_uid(&self) -> &str {
        self.text_of(tags::IMPLEMENTATION_CLASS_UID)
    }

    pub fn implementation_version_name(&self) -> Option<&str> {
        self.get(tags::IMPLEMENTATION_VERSION_NAME)
            .map(MetaElement::to_str)
    }

    pub fn set_transfer_syntax(&mut self, uid: &str) {
        self.set_text(tags::TRANSFER_SYNTAX_UID, VR::UI, uid);
    }

    pub fn set_media_storage_sop_instance_uid(&mut self, uid: &str) {
        self.set_text(tags::MEDIA_STORAGE_SOP_INSTANCE_UID, VR::UI, uid);
    }

    pub fn set_media_storage_sop_class_uid(&mut self, uid: &str) {
        self.set_text(tags::MEDIA_STORAGE_SOP_CLASS_UID, VR::UI, uid);
    }

    /// Set a text element of the group, padding it to an even length,
    /// and update the group length.
    pub fn set_text(&mut self, tag: Tag, vr: VR, text: &str) {
        let mut value = text.as_bytes().to_vec();
        if value.len() % 2 == 1 {
            value.push(if vr == VR::UI { 0 } else { b' ' });
        }
        self.set(MetaElement { tag, vr, value });
    }

    /// Insert or replace an element of the group,
    /// and update the group length.
    pub fn set(&mut self, element: MetaElement) {
        match self.elements.binary_search_by_key(&element.tag, |e| e.tag) {
            Ok(i) => self.elements[i] = element,
            Err(i) => self.elements.insert(i, element),
        }
        self.update_group_length();
    }

    fn update_group_length(&mut self) {
        let len: u32 = self
            .elements
            .iter()
            .filter(|e| e.tag != tags::FILE_META_INFORMATION_GROUP_LENGTH)
            .map(MetaElement::encoded_len)
            .sum();
        let mut value = vec![0; 4];
        LittleEndian::write_u32(&mut value, len);
        let element = MetaElement {
            tag: tags::FILE_META_INFORMATION_GROUP_LENGTH,
            vr: VR::UL,
            value,
        };
        match self.elements.first_mut() {
            Some(first) if first.tag == element.tag => *first = element,
            _ => self.elements.insert(0, element),
        }
    }

    /// Write the magic code and the group,
    /// always in explicit VR little endian.
    pub fn write<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(&DICM_MAGIC_CODE).context(WriteSetSnafu)?;
        for element in &self.elements {
            write_element(&mut writer, element).context(WriteSetSnafu)?;
        }
        Ok(())
    }
}

fn read_element<R: Read>(file: &mut R, remaining: u32) -> Result<MetaElement> {
    let mut header = [0; 8];
    file.read_exact(&mut header).context(ReadElementSnafu)?;
    let tag = Tag(
        LittleEndian::read_u16(&header[0..2]),
        LittleEndian::read_u16(&header[2..4]),
    );
    if tag.group() != 0x0002 {
        return UnexpectedTagSnafu { tag }.fail();
    }
    let vr_bytes = [header[4], header[5]];
    let vr = VR::from_binary(vr_bytes).context(UnknownVrSnafu { tag, vr: vr_bytes })?;

    let (header_len, len): (u32, u32) = if vr.is_short_explicit() {
        (8, u32::from(LittleEndian::read_u16(&header[6..8])))
    } else {
        let mut len = [0; 4];
        file.read_exact(&mut len).context(ReadElementSnafu)?;
        (12, LittleEndian::read_u32(&len))
    };

    if u64::from(header_len) + u64::from(len) > u64::from(remaining) {
        return ElementOverflowSnafu { tag }.fail();
    }

    // grows with the bytes actually read
    let mut value = Vec::new();
    file.take(u64::from(len))
        .read_to_end(&mut value)
        .context(ReadElementSnafu)?;
    if value.len() < len as usize {
        return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof))
            .context(ReadElementSnafu);
    }
    Ok(MetaElement { tag, vr, value })
}

fn write_element<W: Write>(writer: &mut W, element: &MetaElement) -> std::io::Result<()> {
    writer.write_u16::<LittleEndian>(element.tag.group())?;
    writer.write_u16::<LittleEndian>(element.tag.element())?;
    writer.write_all(&element.vr.to_bytes())?;
    if element.vr.is_short_explicit() {
        writer.write_u16::<LittleEndian>(element.value.len() as u16)?;
    } else {
        writer.write_u16::<LittleEndian>(0)?;
        writer.write_u32::<LittleEndian>(element.value.len() as u32)?;
    }
    writer.write_all(&element.value)
}

/// A builder for DICOM meta information tables.
#[derive(Debug, Default, Clone)]
pub struct FileMetaTableBuilder {
    /// File Meta Information Version (0002,0001)
    information_version: Option<[u8; 2]>,
    /// MediaStorageSOPClassUID (0002,0002)
    media_storage_sop_class_uid: Option<String>,
    /// MediaStorageSOPInstanceUID (0002,0003)
    media_storage_sop_instance_uid: Option<String>,
    /// TransferSyntax (0002,0010)
    transfer_syntax: Option<String>,
    /// ImplementationClassUID (0002,0012)
    implementation_class_uid: Option<String>,
    /// ImplementationVersionName (0002,0013)
    implementation_version_name: Option<String>,
    /// SourceApplicationEntityTitle (0002,0016)
    source_application_entity_title: Option<String>,
}

impl FileMetaTableBuilder {
    /// Create a new, empty builder.
    pub fn new() -> FileMetaTableBuilder {
        FileMetaTableBuilder::default()
    }

    /// Define the meta information version.
    pub fn information_version(mut self, value: [u8; 2]) -> FileMetaTableBuilder {
        self.information_version = Some(value);
        self
    }

    /// Define the media storage SOP class UID.
    pub fn media_storage_sop_class_uid<T: Into<String>>(mut self, value: T) -> FileMetaTableBuilder {
        self.media_storage_sop_class_uid = Some(value.into());
        self
    }

    /// Define the media storage SOP instance UID.
    pub fn media_storage_sop_instance_uid<T: Into<String>>(
        mut self,
        value: T,
    ) -> FileMetaTableBuilder {
        self.media_storage_sop_instance_uid = Some(value.into());
        self
    }

    /// Define the media storage SOP class UID, unless already defined.
    pub(crate) fn media_storage_sop_class_uid_or(mut self, value: String) -> FileMetaTableBuilder {
        self.media_storage_sop_class_uid.get_or_insert(value);
        self
    }

    /// Define the media storage SOP instance UID, unless already defined.
    pub(crate) fn media_storage_sop_instance_uid_or(
        mut self,
        value: String,
    ) -> FileMetaTableBuilder {
        self.media_storage_sop_instance_uid.get_or_insert(value);
        self
    }

    /// Define the transfer syntax UID.
    pub fn transfer_syntax<T: Into<String>>(mut self, value: T) -> FileMetaTableBuilder {
        self.transfer_syntax = Some(value.into());
        self
    }

    /// Define the implementation class UID.
    pub fn implementation_class_uid<T: Into<String>>(mut self, value: T) -> FileMetaTableBuilder {
        self.implementation_class_uid = Some(value.into());
        self
    }

    /// Define the implementation version name.
    pub fn implementation_version_name<T: Into<String>>(
        mut self,
        value: T,
    ) -> FileMetaTableBuilder {
        self.implementation_version_name = Some(value.into());
        self
    }

    /// Define the source application entity title.
    pub fn source_application_entity_title<T: Into<String>>(
        mut self,
        value: T,
    ) -> FileMetaTableBuilder {
        self.source_application_entity_title = Some(value.into());
        self
    }

    /// Build the table.
    pub fn build(self) -> Result<FileMetaTable> {
        let media_storage_sop_class_uid =
            self.media_storage_sop_class_uid
                .context(MissingElementSnafu {
                    alias: "MediaStorageSOPClassUID",
                })?;
        let media_storage_sop_instance_uid =
            self.media_storage_sop_instance_uid
                .context(MissingElementSnafu {
                    alias: "MediaStorageSOPInstanceUID",
                })?;
        let transfer_syntax = self.transfer_syntax.context(MissingElementSnafu {
            alias: "TransferSyntax",
        })?;

        let mut table = FileMetaTable {
            elements: Vec::new(),
        };
        table.set(MetaElement {
            tag: tags::FILE_META_INFORMATION_VERSION,
            vr: VR::OB,
            value: self.information_version.unwrap_or([0, 1]).to_vec(),
        });
        table.set_media_storage_sop_class_uid(&media_storage_sop_class_uid);
        table.set_media_storage_sop_instance_uid(&media_storage_sop_instance_uid);
        table.set_transfer_syntax(&transfer_syntax);
        table.set_text(
            tags::IMPLEMENTATION_CLASS_UID,
            VR::UI,
            self.implementation_class_uid
                .as_deref()
                .unwrap_or(IMPLEMENTATION_CLASS_UID),
        );
        table.set_text(
            tags::IMPLEMENTATION_VERSION_NAME,
            VR::SH,
            self.implementation_version_name
                .as_deref()
                .unwrap_or(IMPLEMENTATION_VERSION_NAME),
        );
        if let Some(title) = &self.source_application_entity_title {
            table.set_text(tags::SOURCE_APPLICATION_ENTITY_TITLE, VR::AE, title);
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rustfmt::skip]
    const TEST_META_1: &[u8] = &[
        // magic code
        b'D', b'I', b'C', b'M',
        // File Meta Information Group Length: (0002,0000) ; UL ; 4 ; 144
        0x02, 0x00, 0x00, 0x00, b'U', b'L', 0x04, 0x00, 0x90, 0x00, 0x00, 0x00,
        // -- 16 --
        // File Meta Information Version: (0002,0001) ; OB ; 2 ; [0x00, 0x01]
        0x02, 0x00, 0x01, 0x00, b'O', b'B', 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00, 0x01,
        // -- 30 --
        // Media Storage SOP Class UID (0002,0002) ; UI ; 26 ; "1.2.840.10008.5.1.4.1.1.1\0"
        0x02, 0x00, 0x02, 0x00, b'U', b'I', 0x1a, 0x00,
        b'1', b'.', b'2', b'.', b'8', b'4', b'0', b'.', b'1', b'0', b'0', b'0', b'8',
        b'.', b'5', b'.', b'1', b'.', b'4', b'.', b'1', b'.', b'1', b'.', b'1', 0x00,
        // -- 64 --
        // Media Storage SOP Instance UID (0002,0003) ; UI ; 8 ; "1.2.3.4\0"
        0x02, 0x00, 0x03, 0x00, b'U', b'I', 0x08, 0x00,
        b'1', b'.', b'2', b'.', b'3', b'.', b'4', 0x00,
        // -- 80 --
        // Transfer Syntax UID (0002,0010) ; UI ; 20 ; "1.2.840.10008.1.2.1\0"
        0x02, 0x00, 0x10, 0x00, b'U', b'I', 0x14, 0x00,
        b'1', b'.', b'2', b'.', b'8', b'4', b'0', b'.', b'1', b'0', b'0', b'0', b'8',
        b'.', b'1', b'.', b'2', b'.', b'1', 0x00,
        // -- 108 --
        // Implementation Class UID (0002,0012) ; UI ; 20 ; "1.2.345.6.7890.1.234"
        0x02, 0x00, 0x12, 0x00, b'U', b'I', 0x14, 0x00,
        b'1', b'.', b'2', b'.', b'3', b'4', b'5', b'.', b'6', b'.', b'7', b'8', b'9',
        b'0', b'.', b'1', b'.', b'2', b'3', b'4',
        // -- 136 --
        // Implementation Version Name (0002,0013) ; SH ; 8 ; "DCMKIT1 "
        0x02, 0x00, 0x13, 0x00, b'S', b'H', 0x08, 0x00,
        b'D', b'C', b'M', b'K', b'I', b'T', b'1', b' ',
        // -- 152 --
        // Source Application Entity Title (0002,0016) ; AE ; 0 (no data)
        0x02, 0x00, 0x16, 0x00, b'A', b'E', 0x00, 0x00,
        // -- 160 --
    ];

    #[test]
    fn read_meta_table_from_reader() {
        let mut source = TEST_META_1;
        let table = FileMetaTable::from_reader(&mut source).unwrap();
        assert!(source.is_empty());

        assert_eq!(table.information_group_length(), 144);
        assert_eq!(table.media_storage_sop_class_uid(), "1.2.840.10008.5.1.4.1.1.1");
        assert_eq!(table.media_storage_sop_instance_uid(), "1.2.3.4");
        assert_eq!(table.transfer_syntax(), "1.2.840.10008.1.2.1");
        assert_eq!(table.implementation_class_uid(), "1.2.345.6.7890.1.234");
        assert_eq!(table.implementation_version_name(), Some("DCMKIT1"));
        assert_eq!(table.elements().len(), 8);
    }

    #[test]
    fn write_back_exactly() {
        let table = FileMetaTable::from_reader(TEST_META_1).unwrap();
        let mut out = Vec::new();
        table.write(&mut out).unwrap();
        assert_eq!(out, TEST_META_1);
    }

    #[test]
    fn not_dicom() {
        let err = FileMetaTable::from_reader(&b"DICN\x02\x00\x00\x00UL\x04\x00\x00\x00\x00\x00"[..])
            .unwrap_err();
        assert!(matches!(err, Error::NotDicom { .. }));
        assert_eq!(err.kind(), ErrorKind::BadFileFormat);
    }

    #[test]
    fn truncated_group() {
        let err = FileMetaTable::from_reader(&TEST_META_1[..100]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadFileFormat);
    }

    #[test]
    fn missing_group_length() {
        // starts directly with the meta information version
        let mut data = b"DICM".to_vec();
        data.extend_from_slice(&TEST_META_1[16..30]);
        let err = FileMetaTable::from_reader(&data[..]).unwrap_err();
        assert!(matches!(err, Error::MissingGroupLength { .. }));
    }

    #[test]
    fn create_meta_table_with_builder() {
        let table = FileMetaTableBuilder::new()
            .information_version([0, 1])
            .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.1")
            .media_storage_sop_instance_uid("1.2.3.4")
            .transfer_syntax("1.2.840.10008.1.2.1")
            .implementation_class_uid("1.2.345.6.7890.1.234")
            .implementation_version_name("DCMKIT1")
            .source_application_entity_title("")
            .build()
            .unwrap();

        let mut out = Vec::new();
        table.write(&mut out).unwrap();
        assert_eq!(out, TEST_META_1);
    }

    #[test]
    fn builder_requires_transfer_syntax() {
        let err = FileMetaTableBuilder::new()
            .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.1")
            .media_storage_sop_instance_uid("1.2.3.4")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::MissingElement { alias: "TransferSyntax", .. }));
    }

    #[test]
    fn update_transfer_syntax() {
        let mut table = FileMetaTable::from_reader(TEST_META_1).unwrap();
        table.set_transfer_syntax("1.2.840.10008.1.2");
        assert_eq!(table.transfer_syntax(), "1.2.840.10008.1.2");
        // "1.2.840.10008.1.2" has 17 characters, padded to 18
        assert_eq!(table.information_group_length(), 144 - 2);
    }
}
