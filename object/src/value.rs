//! Data element values and their interpretation.
//!
//! Values are kept as they were read,
//! except that numbers are always in little endian byte order
//! and string values had their padding removed.
use crate::mem::InMemDicomObject;
use byteorder::{ByteOrder, LittleEndian};
use dcmkit_core::{Tag, VR};
use std::borrow::Cow;

/// The value of a data element.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A primitive value, as raw bytes in little endian byte order
    Primitive(Vec<u8>),
    /// A sequence of nested data sets
    Sequence(Vec<InMemDicomObject>),
    /// Encapsulated pixel data:
    /// the basic offset table followed by the compressed fragments
    Encapsulated(Vec<Vec<u8>>),
}

impl Value {
    /// Create an empty primitive value.
    pub fn empty() -> Self {
        Value::Primitive(Vec::new())
    }

    /// Create a primitive value holding a single unsigned 16-bit integer.
    pub fn from_u16(value: u16) -> Self {
        Value::from_u16s(&[value])
    }

    /// Create a primitive value holding unsigned 16-bit integers.
    pub fn from_u16s(values: &[u16]) -> Self {
        let mut bytes = vec![0; values.len() * 2];
        LittleEndian::write_u16_into(values, &mut bytes);
        Value::Primitive(bytes)
    }

    /// Create a primitive value holding signed 16-bit integers.
    pub fn from_i16s(values: &[i16]) -> Self {
        let mut bytes = vec![0; values.len() * 2];
        LittleEndian::write_i16_into(values, &mut bytes);
        Value::Primitive(bytes)
    }

    /// Create a primitive value holding unsigned 32-bit integers.
    pub fn from_u32s(values: &[u32]) -> Self {
        let mut bytes = vec![0; values.len() * 4];
        LittleEndian::write_u32_into(values, &mut bytes);
        Value::Primitive(bytes)
    }

    /// Create a primitive value holding signed 32-bit integers.
    pub fn from_i32s(values: &[i32]) -> Self {
        let mut bytes = vec![0; values.len() * 4];
        LittleEndian::write_i32_into(values, &mut bytes);
        Value::Primitive(bytes)
    }

    /// Create a primitive value holding 32-bit floats.
    pub fn from_f32s(values: &[f32]) -> Self {
        let mut bytes = vec![0; values.len() * 4];
        LittleEndian::write_f32_into(values, &mut bytes);
        Value::Primitive(bytes)
    }

    /// Create a primitive value holding 64-bit floats.
    pub fn from_f64s(values: &[f64]) -> Self {
        let mut bytes = vec![0; values.len() * 8];
        LittleEndian::write_f64_into(values, &mut bytes);
        Value::Primitive(bytes)
    }

    /// Create a primitive value holding attribute tags.
    pub fn from_tags(values: &[Tag]) -> Self {
        let mut bytes = Vec::with_capacity(values.len() * 4);
        for tag in values {
            let mut buf = [0; 4];
            LittleEndian::write_u16(&mut buf[0..2], tag.0);
            LittleEndian::write_u16(&mut buf[2..4], tag.1);
            bytes.extend_from_slice(&buf);
        }
        Value::Primitive(bytes)
    }

    /// The raw bytes of a primitive value.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Primitive(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// The items of a sequence value.
    pub fn items(&self) -> Option<&[InMemDicomObject]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// The items of a sequence value, for modification.
    pub fn items_mut(&mut self) -> Option<&mut Vec<InMemDicomObject>> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// The fragments of encapsulated pixel data,
    /// starting with the basic offset table.
    pub fn fragments(&self) -> Option<&[Vec<u8>]> {
        match self {
            Value::Encapsulated(fragments) => Some(fragments),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Primitive(value.as_bytes().to_vec())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Primitive(value.into_bytes())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Primitive(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Primitive(value.to_vec())
    }
}

impl From<Vec<InMemDicomObject>> for Value {
    fn from(items: Vec<InMemDicomObject>) -> Self {
        Value::Sequence(items)
    }
}

/// A data element held in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct InMemElement {
    tag: Tag,
    vr: VR,
    value: Value,
}

impl InMemElement {
    /// Create a new data element.
    pub fn new<T, V>(tag: T, vr: VR, value: V) -> Self
    where
        T: Into<Tag>,
        V: Into<Value>,
    {
        InMemElement {
            tag: tag.into(),
            vr,
            value: value.into(),
        }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn vr(&self) -> VR {
        self.vr
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    /// Replace the value of this element, keeping its VR.
    pub fn set_value(&mut self, value: Value) {
        self.value = value;
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// The raw bytes of a primitive value.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        self.value.as_bytes()
    }

    /// The items of a sequence element.
    pub fn items(&self) -> Option<&[InMemDicomObject]> {
        self.value.items()
    }

    /// The items of a sequence element, for modification.
    pub fn items_mut(&mut self) -> Option<&mut Vec<InMemDicomObject>> {
        self.value.items_mut()
    }

    /// The value as text.
    ///
    /// Invalid UTF-8 sequences are replaced,
    /// and trailing padding is ignored.
    /// Returns `None` for sequences and encapsulated pixel data.
    pub fn to_str(&self) -> Option<Cow<'_, str>> {
        let bytes = self.as_bytes()?;
        let end = bytes
            .iter()
            .rposition(|&b| b != b' ' && b != 0)
            .map_or(0, |p| p + 1);
        Some(String::from_utf8_lossy(&bytes[..end]))
    }

    /// The first value as an integer,
    /// whether it is encoded in binary or as an integer string.
    pub fn to_int(&self) -> Option<i64> {
        self.to_multi_int().and_then(|values| values.first().copied())
    }

    /// All values as integers,
    /// whether they are encoded in binary or as strings.
    /// Components which are not valid numbers are skipped.
    pub fn to_multi_int(&self) -> Option<Vec<i64>> {
        let bytes = self.as_bytes()?;
        if let Some(values) = decode_integers(bytes, self.vr) {
            return Some(values);
        }
        if self.vr.is_string() {
            let text = String::from_utf8_lossy(bytes);
            return Some(
                text.split('\\')
                    .filter_map(|v| {
                        let v = v.trim();
                        v.parse::<i64>()
                            .ok()
                            .or_else(|| v.parse::<f64>().ok().map(|f| f as i64))
                    })
                    .collect(),
            );
        }
        None
    }

    /// All values as floating point numbers,
    /// whether they are encoded in binary or as decimal strings.
    pub fn to_multi_float64(&self) -> Option<Vec<f64>> {
        let bytes = self.as_bytes()?;
        if let Some(values) = decode_doubles(bytes, self.vr) {
            return Some(values);
        }
        if let Some(values) = decode_integers(bytes, self.vr) {
            return Some(values.into_iter().map(|v| v as f64).collect());
        }
        if self.vr.is_string() {
            let text = String::from_utf8_lossy(bytes);
            return Some(
                text.split('\\')
                    .filter_map(|v| v.trim().parse::<f64>().ok())
                    .collect(),
            );
        }
        None
    }
}

/// Interpret binary integer values of the given VR.
///
/// Returns `None` if the VR does not hold binary integers.
/// Incomplete trailing bytes are ignored.
pub fn decode_integers(bytes: &[u8], vr: VR) -> Option<Vec<i64>> {
    let values = match vr {
        VR::US => bytes
            .chunks_exact(2)
            .map(|c| i64::from(LittleEndian::read_u16(c)))
            .collect(),
        VR::SS => bytes
            .chunks_exact(2)
            .map(|c| i64::from(LittleEndian::read_i16(c)))
            .collect(),
        VR::UL | VR::OL => bytes
            .chunks_exact(4)
            .map(|c| i64::from(LittleEndian::read_u32(c)))
            .collect(),
        VR::SL => bytes
            .chunks_exact(4)
            .map(|c| i64::from(LittleEndian::read_i32(c)))
            .collect(),
        VR::SV => bytes
            .chunks_exact(8)
            .map(LittleEndian::read_i64)
            .collect(),
        VR::UV | VR::OV => bytes
            .chunks_exact(8)
            .map(|c| LittleEndian::read_u64(c) as i64)
            .collect(),
        _ => return None,
    };
    Some(values)
}

/// Interpret binary floating point values of the given VR.
///
/// Returns `None` if the VR does not hold binary floats.
pub fn decode_doubles(bytes: &[u8], vr: VR) -> Option<Vec<f64>> {
    let values = match vr {
        VR::FL | VR::OF => bytes
            .chunks_exact(4)
            .map(|c| f64::from(LittleEndian::read_f32(c)))
            .collect(),
        VR::FD | VR::OD => bytes.chunks_exact(8).map(LittleEndian::read_f64).collect(),
        _ => return None,
    };
    Some(values)
}

/// Interpret attribute tag values.
pub fn decode_tags(bytes: &[u8]) -> Vec<Tag> {
    bytes
        .chunks_exact(4)
        .map(|c| Tag(LittleEndian::read_u16(&c[0..2]), LittleEndian::read_u16(&c[2..4])))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_integers() {
        let elem = InMemElement::new((0x0028, 0x0010), VR::US, Value::from_u16s(&[512, 3]));
        assert_eq!(elem.to_int(), Some(512));
        assert_eq!(elem.to_multi_int(), Some(vec![512, 3]));

        let elem = InMemElement::new((0x0028, 0x0106), VR::SS, Value::from_i16s(&[-2]));
        assert_eq!(elem.to_int(), Some(-2));

        let elem = InMemElement::new((0x0028, 0x0008), VR::IS, "12 ");
        assert_eq!(elem.to_int(), Some(12));
    }

    #[test]
    fn decimal_strings() {
        let elem = InMemElement::new((0x0028, 0x1050), VR::DS, "40\\ 2.5");
        assert_eq!(elem.to_multi_float64(), Some(vec![40., 2.5]));

        let elem = InMemElement::new((0x0018, 0x0050), VR::FD, Value::from_f64s(&[0.5]));
        assert_eq!(elem.to_multi_float64(), Some(vec![0.5]));
    }

    #[test]
    fn text_ignores_padding() {
        let elem = InMemElement::new((0x0010, 0x0010), VR::PN, b"Doe^John \0".to_vec());
        assert_eq!(elem.to_str().as_deref(), Some("Doe^John"));

        let elem = InMemElement::new((0x0008, 0x1140), VR::SQ, Vec::<InMemDicomObject>::new());
        assert_eq!(elem.to_str(), None);
        assert_eq!(elem.items().map(|items| items.len()), Some(0));
    }

    #[test]
    fn attribute_tags() {
        let value = Value::from_tags(&[Tag(0x0010, 0x0020), Tag(0x7FE0, 0x0010)]);
        assert_eq!(
            decode_tags(value.as_bytes().unwrap()),
            vec![Tag(0x0010, 0x0020), Tag(0x7FE0, 0x0010)]
        );
    }
}
