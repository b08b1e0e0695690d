//! Conversion of DICOM objects into data set tokens.
use crate::mem::InMemDicomObject;
use crate::value::{InMemElement, Value};
use dcmkit_core::{Length, Tag, VR};
use dcmkit_parser::dataset::{DataElementHeader, DataToken};
use std::collections::btree_map;
use std::collections::VecDeque;

/// A stream of tokens from a DICOM object.
#[derive(Debug)]
pub struct InMemObjectTokens<'a> {
    /// tokens of the element being expanded
    tokens_pending: VecDeque<DataToken>,
    /// the data elements in order
    elem_iter: btree_map::Values<'a, Tag, InMemElement>,
}

impl<'a> InMemObjectTokens<'a> {
    pub fn new(obj: &'a InMemDicomObject) -> Self {
        InMemObjectTokens {
            tokens_pending: VecDeque::new(),
            elem_iter: obj.entries().values(),
        }
    }
}

impl Iterator for InMemObjectTokens<'_> {
    type Item = DataToken;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.tokens_pending.pop_front() {
                return Some(token);
            }
            let elem = self.elem_iter.next()?;
            element_tokens(elem, &mut self.tokens_pending);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // at least 2 tokens per element left
        (self.elem_iter.size_hint().0 * 2, None)
    }
}

fn element_tokens(elem: &InMemElement, out: &mut VecDeque<DataToken>) {
    match elem.value() {
        Value::Primitive(bytes) => {
            out.push_back(DataToken::ElementHeader(DataElementHeader::new(
                elem.tag(),
                elem.vr(),
                Length(bytes.len() as u32),
            )));
            out.push_back(DataToken::PrimitiveValue(bytes.clone()));
        }
        Value::Sequence(items) => {
            out.push_back(DataToken::SequenceStart {
                tag: elem.tag(),
                len: Length::UNDEFINED,
            });
            for item in items {
                out.push_back(DataToken::ItemStart {
                    len: Length::UNDEFINED,
                });
                for child in item.entries().values() {
                    element_tokens(child, out);
                }
                out.push_back(DataToken::ItemEnd);
            }
            out.push_back(DataToken::SequenceEnd);
        }
        Value::Encapsulated(fragments) => {
            out.push_back(DataToken::PixelSequenceStart);
            for fragment in fragments {
                out.push_back(DataToken::ItemStart {
                    len: Length(fragment.len() as u32),
                });
                out.push_back(DataToken::ItemValue(fragment.clone()));
                out.push_back(DataToken::ItemEnd);
            }
            out.push_back(DataToken::SequenceEnd);
        }
    }
}

/// The VR to declare for an element of the given value,
/// when the dictionary does not know better.
pub(crate) fn fallback_vr(value: &Value) -> VR {
    match value {
        Value::Primitive(_) => VR::UN,
        Value::Sequence(_) => VR::SQ,
        Value::Encapsulated(_) => VR::OB,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nested_object_into_tokens() {
        let mut item = InMemDicomObject::new_empty();
        item.put(InMemElement::new((0x0008, 0x1155), VR::UI, "1.2.3"));
        let mut obj = InMemDicomObject::new_empty();
        obj.put(InMemElement::new((0x0010, 0x0010), VR::PN, "Doe^John"));
        obj.put(InMemElement::new((0x0008, 0x1140), VR::SQ, vec![item]));

        let tokens: Vec<String> = obj.tokens().map(|t| t.to_string()).collect();
        assert_eq!(
            tokens,
            vec![
                "SequenceStart((0008,1140) U/L)",
                "ItemStart(U/L)",
                "ElementHeader((0008,1155) UI 5)",
                "PrimitiveValue(5 bytes)",
                "ItemEnd",
                "SequenceEnd",
                "ElementHeader((0010,0010) PN 8)",
                "PrimitiveValue(8 bytes)",
            ]
        );
    }

    #[test]
    fn encapsulated_pixel_data_into_tokens() {
        let mut obj = InMemDicomObject::new_empty();
        obj.put(InMemElement::new(
            (0x7FE0, 0x0010),
            VR::OB,
            Value::Encapsulated(vec![vec![], vec![1, 2, 3, 4]]),
        ));
        let tokens: Vec<DataToken> = obj.tokens().collect();
        assert_eq!(tokens.len(), 8);
        assert_eq!(tokens[0], DataToken::PixelSequenceStart);
        assert_eq!(tokens[5], DataToken::ItemValue(vec![1, 2, 3, 4]));
        assert_eq!(tokens[7], DataToken::SequenceEnd);
    }
}
