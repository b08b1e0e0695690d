//! The standard attribute dictionary.
use crate::tags::ENTRIES;
use dcmkit_core::dictionary::{DataDictionary, DataDictionaryEntryRef};
use dcmkit_core::header::Tag;
use dcmkit_core::VR;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

type Entry = DataDictionaryEntryRef<'static>;

static REGISTRY: Lazy<StandardDataDictionaryRegistry> =
    Lazy::new(StandardDataDictionaryRegistry::build);

/// Group length elements, in any group.
static GROUP_LENGTH: Entry = DataDictionaryEntryRef {
    tag: Tag(0x0000, 0x0000),
    alias: "GenericGroupLength",
    vr: VR::UL,
};

/// Private creator elements, `(gggg,0010)` to `(gggg,00FF)` in odd groups.
static PRIVATE_CREATOR: Entry = DataDictionaryEntryRef {
    tag: Tag(0x0009, 0x0010),
    alias: "PrivateCreator",
    vr: VR::LO,
};

/// The index behind [`StandardDataDictionary`],
/// built on first use.
#[derive(Debug)]
pub struct StandardDataDictionaryRegistry {
    by_alias: HashMap<&'static str, &'static Entry>,
    by_tag: HashMap<Tag, &'static Entry>,
}

impl StandardDataDictionaryRegistry {
    fn build() -> Self {
        let mut by_alias = HashMap::with_capacity(ENTRIES.len() + 1);
        let mut by_tag = HashMap::with_capacity(ENTRIES.len());
        for entry in ENTRIES {
            by_alias.insert(entry.alias, entry);
            by_tag.insert(entry.tag, entry);
        }
        by_alias.insert(GROUP_LENGTH.alias, &GROUP_LENGTH);
        StandardDataDictionaryRegistry { by_alias, by_tag }
    }

    /// The shared registry.
    pub fn get() -> &'static Self {
        &REGISTRY
    }

    /// The number of attributes with a specific tag.
    pub fn len(&self) -> usize {
        self.by_tag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty()
    }
}

/// The standard DICOM attribute dictionary.
///
/// Besides the attributes of the standard,
/// it knows the generic group length and private creator elements.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardDataDictionary;

impl DataDictionary for StandardDataDictionary {
    type Entry = Entry;

    fn by_name(&self, name: &str) -> Option<&Entry> {
        StandardDataDictionaryRegistry::get()
            .by_alias
            .get(name)
            .copied()
    }

    fn by_tag(&self, tag: Tag) -> Option<&Entry> {
        if let Some(&entry) = StandardDataDictionaryRegistry::get().by_tag.get(&tag) {
            return Some(entry);
        }
        if tag.is_private() && (0x0010..=0x00FF).contains(&tag.element()) {
            Some(&PRIVATE_CREATOR)
        } else if tag.is_group_length() {
            Some(&GROUP_LENGTH)
        } else {
            None
        }
    }
}

impl fmt::Display for StandardDataDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Standard DICOM Data Dictionary")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags;

    #[test]
    fn well_known_attributes() {
        let dict = StandardDataDictionary;

        assert_eq!(
            dict.by_name("PatientName"),
            Some(&DataDictionaryEntryRef {
                tag: Tag(0x0010, 0x0010),
                alias: "PatientName",
                vr: VR::PN,
            })
        );
        assert_eq!(dict.by_name("Modality").map(|e| e.tag), Some(Tag(0x0008, 0x0060)));

        let pixel_data = dict.by_tag(Tag(0x7FE0, 0x0010)).unwrap();
        assert_eq!(pixel_data.alias, "PixelData");
        assert_eq!(pixel_data.vr, VR::OW);

        assert_eq!(dict.vr_of(tags::PATIENT_ID), Some(VR::LO));
        assert_eq!(dict.vr_of(tags::REFERENCED_SOP_INSTANCE_UID), Some(VR::UI));
        assert_eq!(dict.alias_of(tags::STUDY_INSTANCE_UID), Some("StudyInstanceUID"));
        assert!(!StandardDataDictionaryRegistry::get().is_empty());
    }

    #[test]
    fn generic_entries() {
        let dict = StandardDataDictionary;
        assert_eq!(dict.vr_of(Tag(0x0009, 0x0010)), Some(VR::LO));
        assert_eq!(dict.vr_of(Tag(0x0028, 0x0000)), Some(VR::UL));
        assert_eq!(dict.vr_of(Tag(0x0009, 0x1001)), None);
        assert_eq!(dict.by_name("GenericGroupLength").map(|e| e.vr), Some(VR::UL));
    }

    #[test]
    fn parse_tag_by_alias_or_number() {
        let dict = StandardDataDictionary;
        assert_eq!(dict.parse_tag("SeriesInstanceUID"), Some(tags::SERIES_INSTANCE_UID));
        assert_eq!(dict.parse_tag("0020,000e"), Some(tags::SERIES_INSTANCE_UID));
        assert_eq!(dict.parse_tag("NotAnAttribute"), None);
    }
}
