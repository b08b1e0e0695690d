//! Attribute dictionaries: from keywords to tags and back,
//! with the typical value representation of each attribute.
//!
//! The standard dictionary lives in the `dcmkit-dictionary-std` crate.

use crate::header::{Tag, VR};
use std::fmt::Debug;

/// A dictionary of DICOM attributes.
///
/// No method is generic, so that dictionaries can be used as trait objects.
pub trait DataDictionary: Debug {
    /// The type of the dictionary entry.
    type Entry: DictionaryEntry;

    /// Look up an attribute by its keyword, such as `PatientName`.
    /// Keywords are case sensitive.
    fn by_name(&self, name: &str) -> Option<&Self::Entry>;

    /// Look up an attribute by its tag.
    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry>;

    /// The typical VR of the given attribute, if known.
    fn vr_of(&self, tag: Tag) -> Option<VR> {
        self.by_tag(tag).map(|e| e.vr())
    }

    /// The keyword of the given attribute, if known.
    fn alias_of(&self, tag: Tag) -> Option<&str> {
        self.by_tag(tag).map(|e| e.alias())
    }

    /// Resolve a tag written in hexadecimal (`00100010`, `0010,0010`)
    /// or as a keyword.
    fn parse_tag(&self, text: &str) -> Option<Tag> {
        let text = text.trim();
        match text.parse::<Tag>() {
            Ok(tag) => Some(tag),
            Err(_) => self.by_name(text).map(|e| e.tag()),
        }
    }
}

/// An attribute known to a dictionary.
pub trait DictionaryEntry {
    /// The attribute tag.
    fn tag(&self) -> Tag;
    /// The keyword of the attribute, in UpperCamelCase.
    fn alias(&self) -> &str;
    /// The VR the attribute usually has.
    /// Some attributes accept more than one.
    fn vr(&self) -> VR;
}

/// A dictionary entry borrowing its keyword.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DataDictionaryEntryRef<'a> {
    /// The attribute tag
    pub tag: Tag,
    /// The attribute keyword
    pub alias: &'a str,
    /// The typical value representation
    pub vr: VR,
}

impl DictionaryEntry for DataDictionaryEntryRef<'_> {
    fn tag(&self) -> Tag {
        self.tag
    }

    fn alias(&self) -> &str {
        self.alias
    }

    fn vr(&self) -> VR {
        self.vr
    }
}
