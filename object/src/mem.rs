//! This module contains the implementation for an in-memory DICOM object.
//!
//! Use [`InMemDicomObject`] for your DICOM data set construction needs.
//! Values of this type support insertion, removal, and retrieval
//! of elements by DICOM tag,
//! name (keyword) with a data element dictionary,
//! and by attribute path through nested sequences.
//!
//! It may also be a result of reading a DICOM data set from a byte source,
//! in which case string values have their padding removed
//! and numbers are turned into little endian byte order.
//!
//! # Example
//!
//! ```
//! # use dcmkit_core::{DicomPath, Tag, VR};
//! # use dcmkit_object::{InMemDicomObject, InMemElement, ReplaceMode};
//! let mut item = InMemDicomObject::new_empty();
//! item.put(InMemElement::new((0x0008, 0x1155), VR::UI, "1.2.3"));
//!
//! let mut obj = InMemDicomObject::new_empty();
//! obj.put(InMemElement::new((0x0008, 0x1140), VR::SQ, vec![item]));
//!
//! let path: DicomPath = "(0008,1140)[*].(0008,1155)".parse()?;
//! obj.replace_path(&path, "1.2.4", ReplaceMode::ThrowIfAbsent, None)?;
//!
//! let path: DicomPath = "(0008,1140)[0].(0008,1155)".parse()?;
//! assert_eq!(obj.get_path(&path).and_then(|e| e.to_str()).as_deref(), Some("1.2.4"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
use crate::meta::{FileMetaTable, FileMetaTableBuilder};
use crate::summary::{truncate, DicomMap, DicomValue};
use crate::tokens::{fallback_vr, InMemObjectTokens};
use crate::value::{decode_doubles, decode_integers, decode_tags, InMemElement, Value};
use crate::visitor::{self, TagVisitor, TextEncoding, VisitError};
use crate::{
    AccessError, CreateParserSnafu, CreatePrinterSnafu, FileDicomObject,
    MissingElementValueSnafu, NoSuchAttributeNameSnafu, NoSuchDataElementTagSnafu,
    PrematureEndSnafu, PrintDataSetSnafu, ReadError, ReadTokenSnafu, UnexpectedTokenSnafu,
    WriteError,
};
use dcmkit_core::dictionary::DataDictionary;
use dcmkit_core::{DicomPath, Tag, TransferSyntax, VR};
use dcmkit_dictionary_std::{tags, StandardDataDictionary};
use dcmkit_parser::dataset::{DataSetReader, DataSetWriter, DataToken};
use dcmkit_parser::value::normalize;
use snafu::{OptionExt, ResultExt};
use std::collections::{btree_map, BTreeMap, BTreeSet};
use std::io::{Read, Write};
use tracing::debug;

/// What to do when the attribute to replace does not exist.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ReplaceMode {
    /// insert the attribute
    InsertIfAbsent,
    /// fail with [`AccessError::NoSuchDataElementTag`]
    ThrowIfAbsent,
    /// leave the data set untouched
    IgnoreIfAbsent,
}

/// A DICOM object that is fully contained in memory.
///
/// Elements are kept in ascending tag order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemDicomObject {
    /// the element map
    entries: BTreeMap<Tag, InMemElement>,
}

impl InMemDicomObject {
    /// Create a new empty DICOM object.
    pub fn new_empty() -> Self {
        InMemDicomObject::default()
    }

    /// Construct a DICOM object from an iterator of structured elements.
    pub fn from_element_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = InMemElement>,
    {
        InMemDicomObject {
            entries: iter.into_iter().map(|e| (e.tag(), e)).collect(),
        }
    }

    /// Read a data set from a source positioned at its start.
    pub fn read_dataset<S>(from: S, ts: TransferSyntax) -> Result<Self, ReadError>
    where
        S: Read,
    {
        InMemDicomObject::read_dataset_until(from, ts, None)
    }

    /// Read a data set from a source positioned at its start,
    /// stopping before the first top-level element
    /// whose tag is not lower than `read_until`.
    pub fn read_dataset_until<S>(
        from: S,
        ts: TransferSyntax,
        read_until: Option<Tag>,
    ) -> Result<Self, ReadError>
    where
        S: Read,
    {
        let mut dataset = DataSetReader::new(from, ts).context(CreateParserSnafu)?;
        build_object(&mut dataset, false, read_until)
    }

    /// Write the data set in the given transfer syntax.
    pub fn write_dataset<W>(&self, to: W, ts: TransferSyntax) -> Result<(), WriteError>
    where
        W: Write,
    {
        let mut dset_writer = DataSetWriter::new(to, ts).context(CreatePrinterSnafu)?;
        dset_writer
            .write_sequence(self.tokens())
            .context(PrintDataSetSnafu)?;
        Ok(())
    }

    /// Create a new DICOM file object with the file meta group
    /// described by the given builder.
    ///
    /// If the builder lacks the SOP class or instance UID,
    /// they are taken from the data set.
    pub fn with_meta(
        self,
        mut meta: FileMetaTableBuilder,
    ) -> Result<FileDicomObject<Self>, crate::meta::Error> {
        if let Some(uid) = self.get(tags::SOP_CLASS_UID).and_then(|e| e.to_str()) {
            meta = meta.media_storage_sop_class_uid_or(uid.into_owned());
        }
        if let Some(uid) = self.get(tags::SOP_INSTANCE_UID).and_then(|e| e.to_str()) {
            meta = meta.media_storage_sop_instance_uid_or(uid.into_owned());
        }
        Ok(FileDicomObject::new(meta.build()?, self))
    }

    /// Create a new DICOM file object with this exact file meta group.
    pub fn with_exact_meta(self, meta: FileMetaTable) -> FileDicomObject<Self> {
        FileDicomObject::new(meta, self)
    }

    /// The elements of this data set, by tag.
    pub fn entries(&self) -> &BTreeMap<Tag, InMemElement> {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut BTreeMap<Tag, InMemElement> {
        &mut self.entries
    }

    /// Iterate over the elements in ascending tag order.
    pub fn iter(&self) -> btree_map::Values<'_, Tag, InMemElement> {
        self.entries.values()
    }

    /// Obtain the tokens which encode this data set.
    pub fn tokens(&self) -> InMemObjectTokens<'_> {
        InMemObjectTokens::new(self)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Retrieve an element by its tag, if it exists.
    pub fn get(&self, tag: Tag) -> Option<&InMemElement> {
        self.entries.get(&tag)
    }

    pub fn get_mut(&mut self, tag: Tag) -> Option<&mut InMemElement> {
        self.entries.get_mut(&tag)
    }

    /// Retrieve a particular DICOM element by its tag.
    pub fn element(&self, tag: Tag) -> Result<&InMemElement, AccessError> {
        self.entries
            .get(&tag)
            .context(NoSuchDataElementTagSnafu { tag })
    }

    /// Retrieve a particular DICOM element by its keyword,
    /// or by its tag written in hexadecimal.
    pub fn element_by_name(&self, name: &str) -> Result<&InMemElement, AccessError> {
        let tag = StandardDataDictionary
            .parse_tag(name)
            .context(NoSuchAttributeNameSnafu { name })?;
        self.element(tag)
    }

    /// Retrieve an element nested in sequences.
    ///
    /// Every step of the path must designate a specific item:
    /// `None` is returned for paths with universal item indices.
    pub fn get_path(&self, path: &DicomPath) -> Option<&InMemElement> {
        let mut obj = self;
        for step in path.prefix() {
            let items = obj.get(step.tag)?.items()?;
            obj = items.get(step.index?)?;
        }
        obj.get(path.final_tag())
    }

    /// Insert a data element to the object, replacing (and returning) any
    /// previous element of the same attribute.
    pub fn put(&mut self, elt: InMemElement) -> Option<InMemElement> {
        self.entries.insert(elt.tag(), elt)
    }

    /// Remove a DICOM element by its tag,
    /// returning it if it was present.
    pub fn remove(&mut self, tag: Tag) -> Option<InMemElement> {
        self.entries.remove(&tag)
    }

    /// Replace the value of an attribute.
    ///
    /// The value representation of an existing element is kept.
    /// New elements take it from the standard dictionary,
    /// or from the kind of value if the attribute is unknown.
    /// When a private attribute is inserted
    /// and `private_creator` is given,
    /// the private creator element reserving its block
    /// is inserted as well if missing.
    pub fn replace<V>(
        &mut self,
        tag: Tag,
        value: V,
        mode: ReplaceMode,
        private_creator: Option<&str>,
    ) -> Result<(), AccessError>
    where
        V: Into<Value>,
    {
        let value = value.into();
        if let Some(elem) = self.entries.get_mut(&tag) {
            elem.set_value(value);
            return Ok(());
        }
        match mode {
            ReplaceMode::InsertIfAbsent => {}
            ReplaceMode::ThrowIfAbsent => return NoSuchDataElementTagSnafu { tag }.fail(),
            ReplaceMode::IgnoreIfAbsent => return Ok(()),
        }

        if let (Some(creator_tag), Some(creator)) = (tag.private_creator(), private_creator) {
            if !self.entries.contains_key(&creator_tag) {
                debug!("Inserting private creator {} in {}", creator, creator_tag);
                self.put(InMemElement::new(creator_tag, VR::LO, creator));
            }
        }
        let vr = StandardDataDictionary
            .vr_of(tag)
            .unwrap_or_else(|| fallback_vr(&value));
        self.put(InMemElement::new(tag, vr, value));
        Ok(())
    }

    /// Give an attribute an empty value, keeping its value representation.
    ///
    /// Missing attributes are inserted unless `only_if_exists` is set.
    pub fn clear(&mut self, tag: Tag, only_if_exists: bool) {
        if let Some(elem) = self.entries.get_mut(&tag) {
            let empty = empty_value_of(elem.vr());
            elem.set_value(empty);
        } else if !only_if_exists {
            let vr = StandardDataDictionary.vr_of(tag).unwrap_or(VR::UN);
            self.put(InMemElement::new(tag, vr, empty_value_of(vr)));
        }
    }

    /// Remove every attribute designated by the path,
    /// which may be a pattern with universal item indices.
    pub fn remove_path(&mut self, path: &DicomPath) {
        let tag = path.final_tag();
        // the closure never fails
        let _ = visit_path(self, path, 0, &mut |obj| {
            obj.remove(tag);
            Ok(())
        });
    }

    /// Replace the value of every attribute designated by the path,
    /// which may be a pattern with universal item indices.
    ///
    /// Missing sequences or items are not created.
    pub fn replace_path<V>(
        &mut self,
        path: &DicomPath,
        value: V,
        mode: ReplaceMode,
        private_creator: Option<&str>,
    ) -> Result<(), AccessError>
    where
        V: Into<Value>,
    {
        let tag = path.final_tag();
        let value = value.into();
        visit_path(self, path, 0, &mut |obj| {
            obj.replace(tag, value.clone(), mode, private_creator)
        })
    }

    /// Clear every attribute designated by the path.
    pub fn clear_path(&mut self, path: &DicomPath, only_if_exists: bool) {
        let tag = path.final_tag();
        let _ = visit_path(self, path, 0, &mut |obj| {
            obj.clear(tag, only_if_exists);
            Ok(())
        });
    }

    /// Remove all private attributes of this data set,
    /// except those listed in `keep`.
    ///
    /// Private attributes nested in sequences are not affected.
    pub fn remove_private_tags(&mut self, keep: &BTreeSet<Tag>) {
        self.entries
            .retain(|tag, _| !tag.is_private() || keep.contains(tag));
    }

    /// Visit all attributes with the given visitor,
    /// applying the actions it returns.
    pub fn apply_visitor<V>(&mut self, visitor: &mut V) -> Result<(), VisitError>
    where
        V: TagVisitor + ?Sized,
    {
        visitor::apply_visitor(self, visitor)
    }

    /// Build a flat summary of the first-level attributes.
    ///
    /// Text values longer than `max_tag_length` bytes are truncated,
    /// binary values are null, and sequences are left out.
    pub fn extract_summary(&self, max_tag_length: usize) -> DicomMap {
        let encoding = TextEncoding::of(self);
        let mut map = DicomMap::new();
        for elem in self.iter() {
            let bytes = match elem.value() {
                Value::Primitive(bytes) => bytes,
                Value::Sequence(_) => continue,
                Value::Encapsulated(_) => {
                    map.set(elem.tag(), DicomValue::Null);
                    continue;
                }
            };
            let vr = match elem.vr() {
                VR::UN => StandardDataDictionary.vr_of(elem.tag()).unwrap_or(VR::UN),
                vr => vr,
            };
            let text = if vr.is_string() {
                Some(encoding.decode(bytes))
            } else if vr == VR::AT {
                Some(join(decode_tags(bytes).into_iter().map(|t| t.format())))
            } else if let Some(values) = decode_integers(bytes, vr).filter(|_| !vr.is_binary()) {
                Some(join(values))
            } else if let Some(values) = decode_doubles(bytes, vr).filter(|_| !vr.is_binary()) {
                Some(join(values))
            } else {
                None
            };
            let value = match text {
                Some(text) => DicomValue::String(truncate(text, max_tag_length)),
                None => DicomValue::Null,
            };
            map.set(elem.tag(), value);
        }
        map
    }
}

impl<'a> IntoIterator for &'a InMemDicomObject {
    type Item = &'a InMemElement;
    type IntoIter = btree_map::Values<'a, Tag, InMemElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl Extend<InMemElement> for InMemDicomObject {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = InMemElement>,
    {
        self.entries.extend(iter.into_iter().map(|e| (e.tag(), e)))
    }
}

fn join<T: ToString>(values: impl IntoIterator<Item = T>) -> String {
    values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("\\")
}

fn empty_value_of(vr: VR) -> Value {
    match vr {
        VR::SQ => Value::Sequence(Vec::new()),
        _ => Value::empty(),
    }
}

/// Call `f` on every data set designated by the prefix of the path,
/// from step `level` onwards.
/// Missing sequences and items are skipped.
fn visit_path<F>(
    obj: &mut InMemDicomObject,
    path: &DicomPath,
    level: usize,
    f: &mut F,
) -> Result<(), AccessError>
where
    F: FnMut(&mut InMemDicomObject) -> Result<(), AccessError>,
{
    if level == path.prefix_len() {
        return f(obj);
    }
    let items = match obj
        .get_mut(path.prefix_tag(level))
        .and_then(InMemElement::items_mut)
    {
        Some(items) => items,
        None => return Ok(()),
    };
    match path.prefix_index(level) {
        None => {
            for item in items.iter_mut() {
                visit_path(item, path, level + 1, f)?;
            }
        }
        Some(index) => {
            if let Some(item) = items.get_mut(index) {
                visit_path(item, path, level + 1, f)?;
            }
        }
    }
    Ok(())
}

/// Build a data set (or a sequence item, if `in_item`) from tokens.
fn build_object<I>(
    tokens: &mut I,
    in_item: bool,
    read_until: Option<Tag>,
) -> Result<InMemDicomObject, ReadError>
where
    I: Iterator<Item = dcmkit_parser::Result<DataToken>>,
{
    let mut obj = InMemDicomObject::new_empty();
    let stop = |tag: Tag| !in_item && read_until.map_or(false, |until| tag >= until);

    while let Some(token) = tokens.next() {
        let token = token.context(ReadTokenSnafu)?;
        match token {
            DataToken::ElementHeader(header) => {
                if stop(header.tag) {
                    return Ok(obj);
                }
                let value = match tokens.next() {
                    Some(Ok(DataToken::PrimitiveValue(value))) => value,
                    Some(Ok(token)) => {
                        return UnexpectedTokenSnafu {
                            token: Box::new(token),
                        }
                        .fail()
                    }
                    Some(Err(e)) => return Err(e).context(ReadTokenSnafu),
                    None => return MissingElementValueSnafu.fail(),
                };
                let value = normalize(&value, header.vr).to_vec();
                obj.put(InMemElement::new(header.tag, header.vr, value));
            }
            DataToken::SequenceStart { tag, .. } => {
                if stop(tag) {
                    return Ok(obj);
                }
                let items = build_sequence(tokens)?;
                obj.put(InMemElement::new(tag, VR::SQ, items));
            }
            DataToken::PixelSequenceStart => {
                if stop(tags::PIXEL_DATA) {
                    return Ok(obj);
                }
                let fragments = build_encapsulated_data(tokens)?;
                obj.put(InMemElement::new(
                    tags::PIXEL_DATA,
                    VR::OB,
                    Value::Encapsulated(fragments),
                ));
            }
            DataToken::ItemEnd if in_item => return Ok(obj),
            token => {
                return UnexpectedTokenSnafu {
                    token: Box::new(token),
                }
                .fail()
            }
        }
    }

    if in_item {
        PrematureEndSnafu.fail()
    } else {
        Ok(obj)
    }
}

fn build_sequence<I>(tokens: &mut I) -> Result<Vec<InMemDicomObject>, ReadError>
where
    I: Iterator<Item = dcmkit_parser::Result<DataToken>>,
{
    let mut items = Vec::new();
    while let Some(token) = tokens.next() {
        match token.context(ReadTokenSnafu)? {
            DataToken::ItemStart { .. } => items.push(build_object(tokens, true, None)?),
            DataToken::SequenceEnd => return Ok(items),
            token => {
                return UnexpectedTokenSnafu {
                    token: Box::new(token),
                }
                .fail()
            }
        }
    }
    PrematureEndSnafu.fail()
}

fn build_encapsulated_data<I>(tokens: &mut I) -> Result<Vec<Vec<u8>>, ReadError>
where
    I: Iterator<Item = dcmkit_parser::Result<DataToken>>,
{
    let mut fragments = Vec::new();
    let mut current: Option<Vec<u8>> = None;
    while let Some(token) = tokens.next() {
        match token.context(ReadTokenSnafu)? {
            DataToken::ItemStart { .. } if current.is_none() => current = Some(Vec::new()),
            DataToken::ItemValue(data) if current.is_some() => current = Some(data),
            DataToken::ItemEnd => match current.take() {
                Some(fragment) => fragments.push(fragment),
                None => {
                    return UnexpectedTokenSnafu {
                        token: Box::new(DataToken::ItemEnd),
                    }
                    .fail()
                }
            },
            DataToken::SequenceEnd if current.is_none() => return Ok(fragments),
            token => {
                return UnexpectedTokenSnafu {
                    token: Box::new(token),
                }
                .fail()
            }
        }
    }
    PrematureEndSnafu.fail()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmkit_core::ErrorKind;
    use pretty_assertions::assert_eq;

    #[rustfmt::skip]
    static IMPLICIT_DATA: &[u8] = &[
        // (0008,0005) SpecificCharacterSet, len 10, "ISO_IR 100"
        0x08, 0x00, 0x05, 0x00, 0x0a, 0x00, 0x00, 0x00,
        b'I', b'S', b'O', b'_', b'I', b'R', b' ', b'1', b'0', b'0',
        // -- 18 --
        // (0008,1140) ReferencedImageSequence, undefined length
        0x08, 0x00, 0x40, 0x11, 0xff, 0xff, 0xff, 0xff,
        // -- 26 --
        // item, undefined length
        0xfe, 0xff, 0x00, 0xe0, 0xff, 0xff, 0xff, 0xff,
        // -- 34 --
        // (0008,1155) ReferencedSOPInstanceUID, len 6, "1.2.3\0"
        0x08, 0x00, 0x55, 0x11, 0x06, 0x00, 0x00, 0x00,
        b'1', b'.', b'2', b'.', b'3', 0x00,
        // -- 48 --
        // item delimiter
        0xfe, 0xff, 0x0d, 0xe0, 0x00, 0x00, 0x00, 0x00,
        // -- 56 --
        // sequence delimiter
        0xfe, 0xff, 0xdd, 0xe0, 0x00, 0x00, 0x00, 0x00,
        // -- 64 --
        // (0010,0010) PatientName, len 4, "Doe "
        0x10, 0x00, 0x10, 0x00, 0x04, 0x00, 0x00, 0x00,
        b'D', b'o', b'e', b' ',
        // -- 76 --
        // (0028,0010) Rows, len 2, 512
        0x28, 0x00, 0x10, 0x00, 0x02, 0x00, 0x00, 0x00,
        0x00, 0x02,
        // -- 86 --
        // (7FE0,0010) PixelData, len 4
        0xe0, 0x7f, 0x10, 0x00, 0x04, 0x00, 0x00, 0x00,
        0x01, 0x02, 0x03, 0x04,
        // -- 98 --
    ];

    fn sample() -> InMemDicomObject {
        let mut item = InMemDicomObject::new_empty();
        item.put(InMemElement::new(tags::REFERENCED_SOP_INSTANCE_UID, VR::UI, "1.2.3"));
        let mut item2 = InMemDicomObject::new_empty();
        item2.put(InMemElement::new(tags::REFERENCED_SOP_INSTANCE_UID, VR::UI, "1.2.4"));

        let mut obj = InMemDicomObject::new_empty();
        obj.put(InMemElement::new(tags::PATIENT_NAME, VR::PN, "Doe^John"));
        obj.put(InMemElement::new(tags::REFERENCED_IMAGE_SEQUENCE, VR::SQ, vec![item, item2]));
        obj
    }

    #[test]
    fn read_implicit_dataset() {
        let obj = InMemDicomObject::read_dataset(IMPLICIT_DATA, TransferSyntax::LittleEndianImplicit)
            .unwrap();

        assert_eq!(obj.len(), 5);
        let name = obj.element(tags::PATIENT_NAME).unwrap();
        assert_eq!(name.vr(), VR::PN);
        // one padding space removed
        assert_eq!(name.as_bytes(), Some(&b"Doe"[..]));
        assert_eq!(obj.element(tags::ROWS).unwrap().to_int(), Some(512));

        let items = obj.element(tags::REFERENCED_IMAGE_SEQUENCE).unwrap().items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].get(tags::REFERENCED_SOP_INSTANCE_UID).unwrap().as_bytes(),
            Some(&b"1.2.3"[..])
        );
    }

    #[test]
    fn read_dataset_until_pixel_data() {
        let obj = InMemDicomObject::read_dataset_until(
            IMPLICIT_DATA,
            TransferSyntax::LittleEndianImplicit,
            Some(tags::PIXEL_DATA),
        )
        .unwrap();
        assert_eq!(obj.len(), 4);
        assert!(obj.get(tags::PIXEL_DATA).is_none());
    }

    #[test]
    fn truncated_dataset_fails() {
        let err = InMemDicomObject::read_dataset(
            &IMPLICIT_DATA[..40],
            TransferSyntax::LittleEndianImplicit,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadFileFormat);
    }

    #[test]
    fn write_and_read_back() {
        let obj = InMemDicomObject::read_dataset(IMPLICIT_DATA, TransferSyntax::LittleEndianImplicit)
            .unwrap();
        for ts in [
            TransferSyntax::LittleEndianImplicit,
            TransferSyntax::LittleEndianExplicit,
            TransferSyntax::BigEndianExplicit,
        ] {
            let mut out = Vec::new();
            obj.write_dataset(&mut out, ts).unwrap();
            let back = InMemDicomObject::read_dataset(&out[..], ts).unwrap();
            assert_eq!(back, obj, "round trip through {:?}", ts);
        }
    }

    #[test]
    fn element_by_name() {
        let obj = sample();
        assert_eq!(
            obj.element_by_name("PatientName").unwrap().to_str().as_deref(),
            Some("Doe^John")
        );
        let err = obj.element_by_name("PatientID").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InexistentItem);
        let err = obj.element_by_name("NoSuchThing").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn get_path() {
        let obj = sample();
        let path: DicomPath = "(0008,1140)[1].(0008,1155)".parse().unwrap();
        assert_eq!(obj.get_path(&path).and_then(|e| e.to_str()).as_deref(), Some("1.2.4"));

        let path: DicomPath = "(0008,1140)[2].(0008,1155)".parse().unwrap();
        assert!(obj.get_path(&path).is_none());
        let path: DicomPath = "(0008,1140)[*].(0008,1155)".parse().unwrap();
        assert!(obj.get_path(&path).is_none());
    }

    #[test]
    fn replace_modes() {
        let mut obj = sample();
        obj.replace(tags::PATIENT_NAME, "Smith", ReplaceMode::ThrowIfAbsent, None)
            .unwrap();
        assert_eq!(obj.get(tags::PATIENT_NAME).unwrap().vr(), VR::PN);

        let err = obj
            .replace(tags::PATIENT_ID, "ID", ReplaceMode::ThrowIfAbsent, None)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InexistentItem);

        obj.replace(tags::PATIENT_ID, "ID", ReplaceMode::IgnoreIfAbsent, None)
            .unwrap();
        assert!(obj.get(tags::PATIENT_ID).is_none());

        obj.replace(tags::PATIENT_ID, "ID", ReplaceMode::InsertIfAbsent, None)
            .unwrap();
        assert_eq!(obj.get(tags::PATIENT_ID).unwrap().vr(), VR::LO);
    }

    #[test]
    fn replace_private_tag_with_creator() {
        let mut obj = InMemDicomObject::new_empty();
        obj.replace(
            Tag(0x0009, 0x1001),
            "secret",
            ReplaceMode::InsertIfAbsent,
            Some("ACME"),
        )
        .unwrap();
        let creator = obj.get(Tag(0x0009, 0x0010)).unwrap();
        assert_eq!(creator.vr(), VR::LO);
        assert_eq!(creator.to_str().as_deref(), Some("ACME"));
        assert_eq!(obj.get(Tag(0x0009, 0x1001)).unwrap().vr(), VR::UN);
    }

    #[test]
    fn remove_and_replace_paths() {
        let mut obj = sample();
        let path: DicomPath = "(0008,1140)[*].(0008,1155)".parse().unwrap();
        obj.replace_path(&path, "9.9", ReplaceMode::ThrowIfAbsent, None)
            .unwrap();
        for item in obj.get(tags::REFERENCED_IMAGE_SEQUENCE).unwrap().items().unwrap() {
            assert_eq!(
                item.get(tags::REFERENCED_SOP_INSTANCE_UID).unwrap().to_str().as_deref(),
                Some("9.9")
            );
        }

        let path: DicomPath = "(0008,1140)[*].(0010,0020)".parse().unwrap();
        assert!(obj
            .replace_path(&path, "x", ReplaceMode::ThrowIfAbsent, None)
            .is_err());

        let path: DicomPath = "(0008,1140)[0].(0008,1155)".parse().unwrap();
        obj.remove_path(&path);
        let items = obj.get(tags::REFERENCED_IMAGE_SEQUENCE).unwrap().items().unwrap();
        assert!(items[0].is_empty());
        assert_eq!(items[1].len(), 1);

        obj.remove_path(&DicomPath::new(tags::REFERENCED_IMAGE_SEQUENCE));
        assert!(obj.get(tags::REFERENCED_IMAGE_SEQUENCE).is_none());
    }

    #[test]
    fn clear_keeps_vr() {
        let mut obj = sample();
        obj.clear(tags::PATIENT_NAME, true);
        obj.clear(tags::REFERENCED_IMAGE_SEQUENCE, true);
        obj.clear(tags::PATIENT_ID, true);
        assert_eq!(obj.get(tags::PATIENT_NAME).unwrap().as_bytes(), Some(&[][..]));
        assert_eq!(
            obj.get(tags::REFERENCED_IMAGE_SEQUENCE).unwrap().items().map(|i| i.len()),
            Some(0)
        );
        assert!(obj.get(tags::PATIENT_ID).is_none());

        obj.clear(tags::PATIENT_ID, false);
        assert_eq!(obj.get(tags::PATIENT_ID).unwrap().vr(), VR::LO);
    }

    #[test]
    fn remove_private_tags_except_kept() {
        let mut obj = sample();
        obj.put(InMemElement::new((0x0009, 0x0010), VR::LO, "ACME"));
        obj.put(InMemElement::new((0x0009, 0x1001), VR::UN, vec![1, 2]));
        obj.put(InMemElement::new((0x0011, 0x0010), VR::LO, "OTHER"));

        let keep: BTreeSet<Tag> = vec![Tag(0x0009, 0x0010), Tag(0x0009, 0x1001)]
            .into_iter()
            .collect();
        obj.remove_private_tags(&keep);
        assert!(obj.get(Tag(0x0009, 0x1001)).is_some());
        assert!(obj.get(Tag(0x0011, 0x0010)).is_none());
        assert!(obj.get(tags::PATIENT_NAME).is_some());
    }

    #[test]
    fn summary() {
        let mut obj = InMemDicomObject::read_dataset(IMPLICIT_DATA, TransferSyntax::LittleEndianImplicit)
            .unwrap();
        obj.put(InMemElement::new(tags::STUDY_DESCRIPTION, VR::LO, "a".repeat(300)));

        let summary = obj.extract_summary(crate::USEFUL_TAG_LENGTH);
        assert_eq!(summary.get_str(tags::PATIENT_NAME), Some("Doe"));
        assert_eq!(summary.get_str(tags::ROWS), Some("512"));
        assert_eq!(summary.get_str(tags::STUDY_DESCRIPTION).map(str::len), Some(256));
        assert_eq!(summary.get(tags::PIXEL_DATA), Some(&DicomValue::Null));
        assert!(!summary.contains(tags::REFERENCED_IMAGE_SEQUENCE));
    }
}
