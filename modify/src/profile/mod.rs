//! Static rule sets of the basic application level confidentiality profile
//! (PS3.15 Table E.1-1), one per supported edition of the standard.
//!
//! The hierarchy UIDs (Study, Series and SOP Instance UID) are never listed:
//! the modification engine always remaps them on its own.
//! Patient ID and Patient's Name are not listed either,
//! they are added to the UID set when anonymization is set up.
use dcmkit_core::Tag;
use serde::{Deserialize, Serialize};
use snafu::Snafu;
use std::fmt;
use std::str::FromStr;

mod basic_2008;
mod basic_2017c;
mod basic_2021b;
mod basic_2023b;

/// An inclusive two-dimensional range of attribute tags,
/// such as all the overlay data elements `(60xx,3000)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TagRange {
    group_from: u16,
    group_to: u16,
    element_from: u16,
    element_to: u16,
}

impl TagRange {
    /// Create a range covering the groups `group_from..=group_to`
    /// and the elements `element_from..=element_to`.
    pub const fn new(group_from: u16, group_to: u16, element_from: u16, element_to: u16) -> Self {
        TagRange {
            group_from,
            group_to,
            element_from,
            element_to,
        }
    }

    pub fn group_from(&self) -> u16 {
        self.group_from
    }

    pub fn group_to(&self) -> u16 {
        self.group_to
    }

    pub fn element_from(&self) -> u16 {
        self.element_from
    }

    pub fn element_to(&self) -> u16 {
        self.element_to
    }

    /// Whether the tag falls within this range.
    pub fn contains(&self, tag: Tag) -> bool {
        (self.group_from..=self.group_to).contains(&tag.group())
            && (self.element_from..=self.element_to).contains(&tag.element())
    }
}

/// The edition of the standard whose profile should be applied.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DicomVersion {
    #[serde(rename = "2008")]
    V2008,
    #[serde(rename = "2017c")]
    V2017c,
    #[serde(rename = "2021b")]
    V2021b,
    #[serde(rename = "2023b")]
    V2023b,
}

impl Default for DicomVersion {
    fn default() -> Self {
        DicomVersion::V2023b
    }
}

impl DicomVersion {
    /// All supported editions, oldest first.
    pub fn all() -> &'static [DicomVersion] {
        &[
            DicomVersion::V2008,
            DicomVersion::V2017c,
            DicomVersion::V2021b,
            DicomVersion::V2023b,
        ]
    }

    /// The edition name, as in `2021b`.
    pub fn as_str(self) -> &'static str {
        match self {
            DicomVersion::V2008 => "2008",
            DicomVersion::V2017c => "2017c",
            DicomVersion::V2021b => "2021b",
            DicomVersion::V2023b => "2023b",
        }
    }

    /// The text written to Deidentification Method (0012,0063)
    /// by the anonymization with this profile.
    pub fn deidentification_method(self) -> String {
        format!(
            "dcmkit {} - PS 3.15-{} Table E.1-1 Basic Profile",
            env!("CARGO_PKG_VERSION"),
            self.as_str()
        )
    }
}

impl fmt::Display for DicomVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The text does not name a supported edition of the standard.
#[derive(Debug, Snafu)]
#[snafu(display("Unknown DICOM version `{}`", text))]
pub struct ParseDicomVersionError {
    text: String,
}

impl FromStr for DicomVersion {
    type Err = ParseDicomVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2008" => Ok(DicomVersion::V2008),
            "2017c" => Ok(DicomVersion::V2017c),
            "2021b" => Ok(DicomVersion::V2021b),
            "2023b" => Ok(DicomVersion::V2023b),
            text => ParseDicomVersionSnafu { text }.fail(),
        }
    }
}

/// The rule set of one edition of the basic profile.
#[derive(Debug, Copy, Clone)]
pub struct Profile {
    /// attributes to empty
    pub clearings: &'static [Tag],
    /// attributes to remove
    pub removals: &'static [Tag],
    /// attributes holding UIDs to remap
    pub uids: &'static [Tag],
    /// repeating groups to remove
    pub ranges: &'static [TagRange],
}

/// Fetch the basic profile of the given edition.
pub fn basic_profile(version: DicomVersion) -> Profile {
    match version {
        DicomVersion::V2008 => Profile {
            clearings: basic_2008::CLEARINGS,
            removals: basic_2008::REMOVALS,
            uids: basic_2008::UIDS,
            ranges: basic_2008::RANGES,
        },
        DicomVersion::V2017c => Profile {
            clearings: basic_2017c::CLEARINGS,
            removals: basic_2017c::REMOVALS,
            uids: basic_2017c::UIDS,
            ranges: basic_2017c::RANGES,
        },
        DicomVersion::V2021b => Profile {
            clearings: basic_2021b::CLEARINGS,
            removals: basic_2021b::REMOVALS,
            uids: basic_2021b::UIDS,
            ranges: basic_2021b::RANGES,
        },
        DicomVersion::V2023b => Profile {
            clearings: basic_2023b::CLEARINGS,
            removals: basic_2023b::REMOVALS,
            uids: basic_2023b::UIDS,
            ranges: basic_2023b::RANGES,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmkit_dictionary_std::tags;
    use rstest::rstest;
    use std::collections::BTreeSet;

    #[rstest]
    #[case(DicomVersion::V2008)]
    #[case(DicomVersion::V2017c)]
    #[case(DicomVersion::V2021b)]
    #[case(DicomVersion::V2023b)]
    fn uids_appear_in_no_other_set(#[case] version: DicomVersion) {
        let profile = basic_profile(version);
        let uids: BTreeSet<_> = profile.uids.iter().copied().collect();
        let clearings: BTreeSet<_> = profile.clearings.iter().copied().collect();
        let removals: BTreeSet<_> = profile.removals.iter().copied().collect();

        assert_eq!(uids.len(), profile.uids.len(), "duplicate UID rule");
        assert_eq!(clearings.len(), profile.clearings.len(), "duplicate Z rule");
        assert_eq!(removals.len(), profile.removals.len(), "duplicate X rule");
        assert!(uids.is_disjoint(&clearings));
        assert!(uids.is_disjoint(&removals));
        assert!(clearings.is_disjoint(&removals));
    }

    #[rstest]
    #[case(DicomVersion::V2008)]
    #[case(DicomVersion::V2017c)]
    #[case(DicomVersion::V2021b)]
    #[case(DicomVersion::V2023b)]
    fn hierarchy_identifiers_are_not_listed(#[case] version: DicomVersion) {
        let profile = basic_profile(version);
        for tag in [
            tags::PATIENT_ID,
            tags::PATIENT_NAME,
            tags::STUDY_INSTANCE_UID,
            tags::SERIES_INSTANCE_UID,
            tags::SOP_INSTANCE_UID,
            tags::REFERENCED_IMAGE_SEQUENCE,
            tags::SOURCE_IMAGE_SEQUENCE,
        ] {
            assert!(!profile.uids.contains(&tag));
            assert!(!profile.removals.contains(&tag));
            assert!(!profile.clearings.contains(&tag));
        }
    }

    #[test]
    fn known_rows() {
        let p = basic_profile(DicomVersion::V2021b);
        assert!(p.clearings.contains(&tags::PATIENT_BIRTH_DATE));
        assert!(p.removals.contains(&tags::INSTITUTION_NAME));
        assert!(p.uids.contains(&tags::REFERENCED_SOP_INSTANCE_UID));
        assert!(p.uids.contains(&tags::FRAME_OF_REFERENCE_UID));

        let p = basic_profile(DicomVersion::V2008);
        assert!(p.clearings.is_empty());
        assert!(p.removals.contains(&tags::PATIENT_BIRTH_DATE));
        assert_eq!(p.uids.len(), 8);
    }

    #[test]
    fn overlay_and_curve_ranges() {
        let p = basic_profile(DicomVersion::V2017c);
        let hit = |tag| p.ranges.iter().any(|r| r.contains(tag));
        assert!(hit(Tag(0x5002, 0x0010)));
        assert!(hit(Tag(0x6000, 0x3000)));
        assert!(hit(Tag(0x601E, 0x4000)));
        assert!(!hit(Tag(0x6000, 0x0010)));
        assert!(!hit(Tag(0x6100, 0x3000)));
    }

    #[test]
    fn version_names() {
        for &v in DicomVersion::all() {
            assert_eq!(v.as_str().parse::<DicomVersion>().unwrap(), v);
        }
        assert!("2019a".parse::<DicomVersion>().is_err());
        assert!(DicomVersion::V2021b
            .deidentification_method()
            .ends_with("PS 3.15-2021b Table E.1-1 Basic Profile"));
    }
}
