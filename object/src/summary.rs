//! Flat summaries of DICOM data sets.
//!
//! A [`DicomMap`] holds the first-level attributes of a data set
//! as text, which is what indexing and identifier generation need.
use dcmkit_core::Tag;
use std::collections::BTreeMap;

/// The longest value kept in a summary by default.
pub const USEFUL_TAG_LENGTH: usize = 256;

/// A value in a data set summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DicomValue {
    /// No textual representation (binary data, or no value)
    Null,
    /// The textual representation of the value
    String(String),
}

impl DicomValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DicomValue::Null => None,
            DicomValue::String(s) => Some(s),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, DicomValue::Null)
    }
}

/// The first-level attributes of a data set, as text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DicomMap {
    values: BTreeMap<Tag, DicomValue>,
}

impl DicomMap {
    pub fn new() -> Self {
        DicomMap::default()
    }

    pub fn set(&mut self, tag: Tag, value: DicomValue) {
        self.values.insert(tag, value);
    }

    pub fn set_string(&mut self, tag: Tag, value: impl Into<String>) {
        self.values.insert(tag, DicomValue::String(value.into()));
    }

    pub fn get(&self, tag: Tag) -> Option<&DicomValue> {
        self.values.get(&tag)
    }

    /// The text of the given attribute,
    /// or `None` if absent or null.
    pub fn get_str(&self, tag: Tag) -> Option<&str> {
        self.get(tag).and_then(DicomValue::as_str)
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.values.contains_key(&tag)
    }

    pub fn remove(&mut self, tag: Tag) -> Option<DicomValue> {
        self.values.remove(&tag)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tag, &DicomValue)> + '_ {
        self.values.iter().map(|(tag, value)| (*tag, value))
    }
}

/// Cut a string down to at most `max` bytes,
/// without splitting a character.
pub(crate) fn truncate(mut text: String, max: usize) -> String {
    if text.len() > max {
        let mut end = max;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        text.truncate(end);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_on_char_boundary() {
        assert_eq!(truncate("abcdef".to_string(), 4), "abcd");
        assert_eq!(truncate("abc".to_string(), 4), "abc");
        // 'é' takes two bytes
        assert_eq!(truncate("aéb".to_string(), 2), "a");
    }

    #[test]
    fn map_accessors() {
        let mut map = DicomMap::new();
        map.set_string(Tag(0x0010, 0x0020), "ID1");
        map.set(Tag(0x7FE0, 0x0010), DicomValue::Null);
        assert_eq!(map.get_str(Tag(0x0010, 0x0020)), Some("ID1"));
        assert_eq!(map.get_str(Tag(0x7FE0, 0x0010)), None);
        assert!(map.contains(Tag(0x7FE0, 0x0010)));
        assert_eq!(map.len(), 2);
    }
}
