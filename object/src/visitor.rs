//! Typed visitation of every attribute of a data set,
//! at any depth of nested sequences.
//!
//! A [`TagVisitor`] receives each element decoded according to its VR,
//! together with the tags and item indices of its enclosing sequences,
//! and answers with an [`Action`] telling what to do with the element.
//! Only text values can be replaced in place.
use crate::mem::InMemDicomObject;
use crate::value::{decode_doubles, decode_integers, decode_tags, InMemElement, Value};
use dcmkit_core::dictionary::DataDictionary;
use dcmkit_core::{ErrorKind, Tag, VR};
use dcmkit_dictionary_std::{tags, StandardDataDictionary};
use snafu::{Backtrace, Snafu};

/// What to do with a visited element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// keep the element untouched
    None,
    /// remove the element from its data set
    Remove,
    /// replace the text of the element (only valid for text values)
    Replace(String),
}

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum VisitError {
    #[snafu(display("Cannot replace {} of {}", what, tag))]
    CannotReplace {
        tag: Tag,
        what: &'static str,
        backtrace: Backtrace,
    },
}

impl VisitError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VisitError::CannotReplace { .. } => ErrorKind::NotImplemented,
        }
    }
}

/// A visitor of the attributes of a data set.
///
/// All methods default to [`Action::None`].
/// `parent_tags` and `parent_indexes` describe the enclosing sequences,
/// outermost first, and are empty at the top level.
#[allow(unused_variables)]
pub trait TagVisitor {
    /// Visit an element which cannot be presented in decoded form,
    /// such as encapsulated pixel data.
    fn visit_not_supported(
        &mut self,
        parent_tags: &[Tag],
        parent_indexes: &[usize],
        tag: Tag,
        vr: VR,
    ) -> Action {
        Action::None
    }

    /// Visit a sequence before its items are visited.
    /// The items are only visited if the sequence is kept.
    fn visit_sequence(
        &mut self,
        parent_tags: &[Tag],
        parent_indexes: &[usize],
        tag: Tag,
        count_items: usize,
    ) -> Action {
        Action::None
    }

    /// Visit binary data (OB, OD, OF, OL, OV, OW, UN).
    fn visit_binary(
        &mut self,
        parent_tags: &[Tag],
        parent_indexes: &[usize],
        tag: Tag,
        vr: VR,
        data: &[u8],
    ) -> Action {
        Action::None
    }

    /// Visit binary integers (US, SS, UL, SL, OL, SV, UV).
    fn visit_integers(
        &mut self,
        parent_tags: &[Tag],
        parent_indexes: &[usize],
        tag: Tag,
        vr: VR,
        values: &[i64],
    ) -> Action {
        Action::None
    }

    /// Visit binary floating point numbers (FL, FD, OF, OD).
    fn visit_doubles(
        &mut self,
        parent_tags: &[Tag],
        parent_indexes: &[usize],
        tag: Tag,
        vr: VR,
        values: &[f64],
    ) -> Action {
        Action::None
    }

    /// Visit attribute tags (AT).
    fn visit_attributes(
        &mut self,
        parent_tags: &[Tag],
        parent_indexes: &[usize],
        tag: Tag,
        values: &[Tag],
    ) -> Action {
        Action::None
    }

    /// Visit a text value, already decoded to UTF-8.
    fn visit_string(
        &mut self,
        parent_tags: &[Tag],
        parent_indexes: &[usize],
        tag: Tag,
        vr: VR,
        value: &str,
    ) -> Action {
        Action::None
    }
}

/// The character repertoire of the text in a data set.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextEncoding {
    /// UTF-8, which includes the default repertoire
    Utf8,
    /// ISO 8859-1 (`ISO_IR 100`)
    Latin1,
}

impl TextEncoding {
    /// Detect the encoding from the specific character set of a data set.
    pub fn of(obj: &InMemDicomObject) -> Self {
        let charset = obj
            .get(tags::SPECIFIC_CHARACTER_SET)
            .and_then(|e| e.to_str().map(|s| s.into_owned()))
            .unwrap_or_default();
        let last = charset.split('\\').last().unwrap_or("").trim();
        match last {
            "ISO_IR 100" | "ISO 2022 IR 100" => TextEncoding::Latin1,
            _ => TextEncoding::Utf8,
        }
    }

    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            TextEncoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            TextEncoding::Latin1 => bytes.iter().map(|&b| char::from(b)).collect(),
        }
    }

    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            TextEncoding::Utf8 => text.as_bytes().to_vec(),
            TextEncoding::Latin1 => text
                .chars()
                .map(|c| if (c as u32) < 0x100 { c as u8 } else { b'?' })
                .collect(),
        }
    }
}

/// Visit every attribute of the data set, depth first,
/// applying the actions returned by the visitor.
///
/// Elements marked for removal are removed
/// once their whole data set was visited.
pub fn apply_visitor<V>(obj: &mut InMemDicomObject, visitor: &mut V) -> Result<(), VisitError>
where
    V: TagVisitor + ?Sized,
{
    let encoding = TextEncoding::of(obj);
    let mut parent_tags = Vec::new();
    let mut parent_indexes = Vec::new();
    visit_dataset(obj, visitor, &mut parent_tags, &mut parent_indexes, encoding)
}

/// Visit every attribute of the data set, depth first,
/// without modifying it.
///
/// The actions returned by the visitor are ignored,
/// except that the items of a sequence are only visited
/// if the visitor returned [`Action::None`] for the sequence.
pub fn walk<V>(obj: &InMemDicomObject, visitor: &mut V)
where
    V: TagVisitor + ?Sized,
{
    let encoding = TextEncoding::of(obj);
    let mut parent_tags = Vec::new();
    let mut parent_indexes = Vec::new();
    walk_dataset(obj, visitor, &mut parent_tags, &mut parent_indexes, encoding);
}

fn walk_dataset<V>(
    obj: &InMemDicomObject,
    visitor: &mut V,
    parent_tags: &mut Vec<Tag>,
    parent_indexes: &mut Vec<usize>,
    encoding: TextEncoding,
) where
    V: TagVisitor + ?Sized,
{
    for elem in obj.iter() {
        let tag = elem.tag();
        let vr = effective_vr(elem);
        match elem.value() {
            Value::Sequence(items) => {
                let action = visitor.visit_sequence(parent_tags, parent_indexes, tag, items.len());
                if action == Action::None {
                    parent_tags.push(tag);
                    parent_indexes.push(0);
                    for (i, item) in items.iter().enumerate() {
                        if let Some(index) = parent_indexes.last_mut() {
                            *index = i;
                        }
                        walk_dataset(item, visitor, parent_tags, parent_indexes, encoding);
                    }
                    parent_tags.pop();
                    parent_indexes.pop();
                }
            }
            Value::Encapsulated(_) => {
                visitor.visit_not_supported(parent_tags, parent_indexes, tag, vr);
            }
            Value::Primitive(bytes) => {
                visit_primitive(tag, vr, bytes, visitor, parent_tags, parent_indexes, encoding);
            }
        }
    }
}

fn visit_dataset<V>(
    obj: &mut InMemDicomObject,
    visitor: &mut V,
    parent_tags: &mut Vec<Tag>,
    parent_indexes: &mut Vec<usize>,
    encoding: TextEncoding,
) -> Result<(), VisitError>
where
    V: TagVisitor + ?Sized,
{
    let mut to_remove = Vec::new();
    for elem in obj.entries_mut().values_mut() {
        if !visit_element(elem, visitor, parent_tags, parent_indexes, encoding)? {
            to_remove.push(elem.tag());
        }
    }
    for tag in to_remove {
        obj.remove(tag);
    }
    Ok(())
}

fn effective_vr(elem: &InMemElement) -> VR {
    match elem.vr() {
        // unknown VRs of known attributes come from implicit VR data sets
        VR::UN => StandardDataDictionary.vr_of(elem.tag()).unwrap_or(VR::UN),
        vr => vr,
    }
}

/// Hand a primitive value to the visitor in its decoded form.
/// Returns the action and what kind of value was visited.
fn visit_primitive<V>(
    tag: Tag,
    vr: VR,
    bytes: &[u8],
    visitor: &mut V,
    parent_tags: &[Tag],
    parent_indexes: &[usize],
    encoding: TextEncoding,
) -> (Action, &'static str)
where
    V: TagVisitor + ?Sized,
{
    match vr {
        VR::SQ => (
            visitor.visit_sequence(parent_tags, parent_indexes, tag, 0),
            "sequences",
        ),
        VR::OB | VR::OD | VR::OF | VR::OL | VR::OV | VR::OW | VR::UN => (
            visitor.visit_binary(parent_tags, parent_indexes, tag, vr, bytes),
            "binary data",
        ),
        VR::AT => (
            visitor.visit_attributes(parent_tags, parent_indexes, tag, &decode_tags(bytes)),
            "attribute tags",
        ),
        vr if vr.is_string() => {
            let text = if tag == tags::SPECIFIC_CHARACTER_SET {
                String::from_utf8_lossy(bytes).into_owned()
            } else {
                encoding.decode(bytes)
            };
            (
                visitor.visit_string(parent_tags, parent_indexes, tag, vr, &text),
                "text",
            )
        }
        vr => {
            if let Some(values) = decode_integers(bytes, vr) {
                (
                    visitor.visit_integers(parent_tags, parent_indexes, tag, vr, &values),
                    "integers",
                )
            } else if let Some(values) = decode_doubles(bytes, vr) {
                (
                    visitor.visit_doubles(parent_tags, parent_indexes, tag, vr, &values),
                    "floating point numbers",
                )
            } else {
                (
                    visitor.visit_not_supported(parent_tags, parent_indexes, tag, vr),
                    "unsupported values",
                )
            }
        }
    }
}

/// Returns whether the element must be kept.
fn visit_element<V>(
    elem: &mut InMemElement,
    visitor: &mut V,
    parent_tags: &mut Vec<Tag>,
    parent_indexes: &mut Vec<usize>,
    encoding: TextEncoding,
) -> Result<bool, VisitError>
where
    V: TagVisitor + ?Sized,
{
    let tag = elem.tag();
    let vr = effective_vr(elem);

    let (action, what) = match elem.value_mut() {
        Value::Sequence(items) => {
            let action = visitor.visit_sequence(parent_tags, parent_indexes, tag, items.len());
            if action == Action::None {
                parent_tags.push(tag);
                parent_indexes.push(0);
                for (i, item) in items.iter_mut().enumerate() {
                    if let Some(index) = parent_indexes.last_mut() {
                        *index = i;
                    }
                    visit_dataset(item, visitor, parent_tags, parent_indexes, encoding)?;
                }
                parent_tags.pop();
                parent_indexes.pop();
            }
            (action, "sequences")
        }
        Value::Encapsulated(_) => (
            visitor.visit_not_supported(parent_tags, parent_indexes, tag, vr),
            "encapsulated pixel data",
        ),
        Value::Primitive(bytes) => {
            match visit_primitive(tag, vr, bytes, visitor, parent_tags, parent_indexes, encoding) {
                (Action::Replace(new_value), "text") => {
                    *bytes = encoding.encode(&new_value);
                    return Ok(true);
                }
                other => other,
            }
        }
    };

    match action {
        Action::None => Ok(true),
        Action::Remove => Ok(false),
        Action::Replace(_) => CannotReplaceSnafu { tag, what }.fail(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    /// Records every visit as a line of text.
    #[derive(Default)]
    struct Recorder {
        lines: Vec<String>,
    }

    fn path(tags: &[Tag], indexes: &[usize]) -> String {
        tags.iter()
            .zip(indexes)
            .map(|(t, i)| format!("{}[{}].", t, i))
            .collect()
    }

    impl TagVisitor for Recorder {
        fn visit_sequence(&mut self, pt: &[Tag], pi: &[usize], tag: Tag, count: usize) -> Action {
            self.lines.push(format!("{}{} SQ {}", path(pt, pi), tag, count));
            Action::None
        }

        fn visit_binary(&mut self, pt: &[Tag], pi: &[usize], tag: Tag, vr: VR, data: &[u8]) -> Action {
            self.lines.push(format!("{}{} {} {}", path(pt, pi), tag, vr, data.len()));
            Action::None
        }

        fn visit_integers(&mut self, pt: &[Tag], pi: &[usize], tag: Tag, vr: VR, values: &[i64]) -> Action {
            self.lines.push(format!("{}{} {} {:?}", path(pt, pi), tag, vr, values));
            Action::None
        }

        fn visit_doubles(&mut self, pt: &[Tag], pi: &[usize], tag: Tag, vr: VR, values: &[f64]) -> Action {
            self.lines.push(format!("{}{} {} {:?}", path(pt, pi), tag, vr, values));
            Action::None
        }

        fn visit_attributes(&mut self, pt: &[Tag], pi: &[usize], tag: Tag, values: &[Tag]) -> Action {
            self.lines.push(format!("{}{} AT {:?}", path(pt, pi), tag, values));
            Action::None
        }

        fn visit_string(&mut self, pt: &[Tag], pi: &[usize], tag: Tag, vr: VR, value: &str) -> Action {
            self.lines.push(format!("{}{} {} {}", path(pt, pi), tag, vr, value));
            Action::None
        }
    }

    fn sample() -> InMemDicomObject {
        let mut item0 = InMemDicomObject::new_empty();
        item0.put(InMemElement::new((0x0008, 0x1155), VR::UI, "1.2.3"));
        let mut item1 = InMemDicomObject::new_empty();
        item1.put(InMemElement::new((0x0008, 0x1155), VR::UI, "1.2.4"));

        let mut obj = InMemDicomObject::new_empty();
        obj.put(InMemElement::new((0x0008, 0x1140), VR::SQ, vec![item0, item1]));
        obj.put(InMemElement::new((0x0010, 0x0010), VR::PN, "Doe^John"));
        obj.put(InMemElement::new((0x0028, 0x0010), VR::US, Value::from_u16(2)));
        obj.put(InMemElement::new((0x0018, 0x1318), VR::FD, Value::from_f64s(&[0.5])));
        obj.put(InMemElement::new((0x0020, 0x9165), VR::AT, Value::from_tags(&[Tag(0x0010, 0x0020)])));
        obj.put(InMemElement::new((0x7FE0, 0x0010), VR::OW, vec![0u8; 4]));
        obj
    }

    #[test]
    fn visit_in_order_with_parents() {
        let mut obj = sample();
        let mut recorder = Recorder::default();
        apply_visitor(&mut obj, &mut recorder).unwrap();
        assert_eq!(
            recorder.lines,
            vec![
                "(0008,1140) SQ 2",
                "(0008,1140)[0].(0008,1155) UI 1.2.3",
                "(0008,1140)[1].(0008,1155) UI 1.2.4",
                "(0010,0010) PN Doe^John",
                "(0018,1318) FD [0.5]",
                "(0020,9165) AT [Tag(0x0010, 0x0020)]",
                "(0028,0010) US [2]",
                "(7FE0,0010) OW 4",
            ]
        );
    }

    struct Anonymizer;

    impl TagVisitor for Anonymizer {
        fn visit_string(&mut self, _: &[Tag], _: &[usize], tag: Tag, _: VR, _: &str) -> Action {
            match tag {
                Tag(0x0008, 0x1155) => Action::Replace("9.9".to_string()),
                Tag(0x0010, 0x0010) => Action::Remove,
                _ => Action::None,
            }
        }

        fn visit_binary(&mut self, _: &[Tag], _: &[usize], _: Tag, _: VR, _: &[u8]) -> Action {
            Action::Remove
        }
    }

    #[test]
    fn replace_and_remove() {
        let mut obj = sample();
        apply_visitor(&mut obj, &mut Anonymizer).unwrap();

        assert!(obj.get(Tag(0x0010, 0x0010)).is_none());
        assert!(obj.get(Tag(0x7FE0, 0x0010)).is_none());
        let items = obj.get(Tag(0x0008, 0x1140)).unwrap().items().unwrap();
        for item in items {
            assert_eq!(
                item.get(Tag(0x0008, 0x1155)).unwrap().to_str().as_deref(),
                Some("9.9")
            );
        }
    }

    struct ReplaceBinary;

    impl TagVisitor for ReplaceBinary {
        fn visit_integers(&mut self, _: &[Tag], _: &[usize], _: Tag, _: VR, _: &[i64]) -> Action {
            Action::Replace("1".to_string())
        }
    }

    #[test]
    fn cannot_replace_numbers() {
        let mut obj = sample();
        let err = apply_visitor(&mut obj, &mut ReplaceBinary).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotImplemented);
    }

    #[test]
    fn latin1_text() {
        let mut obj = InMemDicomObject::new_empty();
        obj.put(InMemElement::new((0x0008, 0x0005), VR::CS, "ISO_IR 100"));
        obj.put(InMemElement::new((0x0010, 0x0010), VR::PN, vec![b'J', 0xE9, b'r']));
        let mut recorder = Recorder::default();
        apply_visitor(&mut obj, &mut recorder).unwrap();
        assert_eq!(recorder.lines[1], "(0010,0010) PN Jér");
    }

    #[test]
    fn walk_leaves_data_set_untouched() {
        let obj = sample();
        let mut recorder = Recorder::default();
        walk(&obj, &mut recorder);
        assert_eq!(recorder.lines.len(), 8);
        assert_eq!(recorder.lines[3], "(0010,0010) PN Doe^John");

        walk(&obj, &mut Anonymizer);
        assert_eq!(obj, sample());
    }

    #[test]
    fn float_arrays_are_binary() {
        let mut obj = InMemDicomObject::new_empty();
        obj.put(InMemElement::new((0x0070, 0x0022), VR::OF, Value::from_f32s(&[1.0, 2.0])));
        let mut recorder = Recorder::default();
        walk(&obj, &mut recorder);
        assert_eq!(recorder.lines, vec!["(0070,0022) OF 8"]);
    }

    #[test]
    fn implicit_vr_elements_use_the_dictionary() {
        let mut obj = InMemDicomObject::new_empty();
        obj.put(InMemElement::new((0x0028, 0x0011), VR::UN, Value::from_u16(64)));
        let mut recorder = Recorder::default();
        apply_visitor(&mut obj, &mut recorder).unwrap();
        assert_eq!(recorder.lines, vec!["(0028,0011) US [64]"]);
    }
}
