//! Table E.1-1 of PS3.15-2008.
//!
//! The 2008 edition has no `Z` or `U` action codes:
//! every listed attribute is removed,
//! and the UID attributes below are those
//! which were always remapped consistently.

use super::TagRange;
use dcmkit_core::Tag;

pub(crate) static CLEARINGS: &[Tag] = &[];

pub(crate) static REMOVALS: &[Tag] = &[
    Tag(0x0008, 0x0050), // Accession Number
    Tag(0x0008, 0x0080), // Institution Name
    Tag(0x0008, 0x0081), // Institution Address
    Tag(0x0008, 0x0090), // Referring Physician's Name
    Tag(0x0008, 0x0092), // Referring Physician's Address
    Tag(0x0008, 0x0094), // Referring Physician's Telephone Numbers
    Tag(0x0008, 0x1010), // Station Name
    Tag(0x0008, 0x1030), // Study Description
    Tag(0x0008, 0x103E), // Series Description
    Tag(0x0008, 0x1040), // Institutional Department Name
    Tag(0x0008, 0x1048), // Physician(s) of Record
    Tag(0x0008, 0x1050), // Performing Physicians' Name
    Tag(0x0008, 0x1060), // Name of Physician(s) Reading Study
    Tag(0x0008, 0x1070), // Operators' Name
    Tag(0x0008, 0x1080), // Admitting Diagnoses Description
    Tag(0x0008, 0x2111), // Derivation Description
    Tag(0x0010, 0x0030), // Patient's Birth Date
    Tag(0x0010, 0x0032), // Patient's Birth Time
    Tag(0x0010, 0x0040), // Patient's Sex
    Tag(0x0010, 0x1000), // Other Patient Ids
    Tag(0x0010, 0x1001), // Other Patient Names
    Tag(0x0010, 0x1010), // Patient's Age
    Tag(0x0010, 0x1020), // Patient's Size
    Tag(0x0010, 0x1030), // Patient's Weight
    Tag(0x0010, 0x1090), // Medical Record Locator
    Tag(0x0010, 0x2160), // Ethnic Group
    Tag(0x0010, 0x2180), // Occupation
    Tag(0x0010, 0x21B0), // Additional Patient's History
    Tag(0x0010, 0x4000), // Patient Comments
    Tag(0x0018, 0x1000), // Device Serial Number
    Tag(0x0018, 0x1030), // Protocol Name
    Tag(0x0020, 0x0010), // Study ID
    Tag(0x0020, 0x4000), // Image Comments
    Tag(0x0040, 0x0275), // Request Attributes Sequence
    Tag(0x0040, 0xA730), // Content Sequence
    // not in the table, but commonly found to hold identifying data
    Tag(0x0010, 0x1040), // Patient's Address
    Tag(0x0032, 0x1032), // Requesting Physician
    Tag(0x0010, 0x2154), // Patient's Telephone Numbers
    Tag(0x0010, 0x2000), // Medical Alerts
];

pub(crate) static UIDS: &[Tag] = &[
    Tag(0x0008, 0x0014), // Instance Creator UID
    Tag(0x0008, 0x1155), // Referenced SOP Instance UID
    Tag(0x0020, 0x0052), // Frame of Reference UID
    Tag(0x0020, 0x0200), // Synchronization Frame of Reference UID
    Tag(0x0040, 0xA124), // UID
    Tag(0x0088, 0x0140), // Storage Media File-set UID
    Tag(0x3006, 0x0024), // Referenced Frame of Reference UID
    Tag(0x3006, 0x00C2), // Related Frame of Reference UID
];

pub(crate) static RANGES: &[TagRange] = &[];
