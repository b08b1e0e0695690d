//! Table E.1-1 of PS3.15-2017c, basic profile column.

use super::TagRange;
use dcmkit_core::Tag;

/// Attributes replaced with an empty value (`Z`, `D`, `Z/D`).
pub(crate) static CLEARINGS: &[Tag] = &[
    Tag(0x0008, 0x0020), // Study Date
    Tag(0x0008, 0x0023), // Content Date
    Tag(0x0008, 0x0030), // Study Time
    Tag(0x0008, 0x0033), // Content Time
    Tag(0x0008, 0x0050), // Accession Number
    Tag(0x0008, 0x0090), // Referring Physician's Name
    Tag(0x0008, 0x009C), // Consulting Physician's Name
    Tag(0x0010, 0x0030), // Patient's Birth Date
    Tag(0x0010, 0x0040), // Patient's Sex
    Tag(0x0018, 0x0010), // Contrast Bolus Agent
    Tag(0x0020, 0x0010), // Study ID
    Tag(0x0040, 0x1101), // Person Identification Code Sequence
    Tag(0x0040, 0x2016), // Placer Order Number / Imaging Service Request
    Tag(0x0040, 0x2017), // Filler Order Number / Imaging Service Request
    Tag(0x0040, 0xA073), // Verifying Observer Sequence
    Tag(0x0040, 0xA075), // Verifying Observer Name
    Tag(0x0040, 0xA088), // Verifying Observer Identification Code Sequence
    Tag(0x0040, 0xA123), // Person Name
    Tag(0x0070, 0x0001), // Graphic Annotation Sequence
    Tag(0x0070, 0x0084), // Content Creator's Name
];

/// Attributes removed from the data set (`X`, `X/Z`, `X/D`, `X/Z/D`, `X/Z/U*`).
pub(crate) static REMOVALS: &[Tag] = &[
    Tag(0x0000, 0x1000), // Affected SOP Instance UID
    Tag(0x0008, 0x0015), // Instance Coercion DateTime
    Tag(0x0008, 0x0021), // Series Date
    Tag(0x0008, 0x0022), // Acquisition Date
    Tag(0x0008, 0x0024), // Overlay Date
    Tag(0x0008, 0x0025), // Curve Date
    Tag(0x0008, 0x002A), // Acquisition DateTime
    Tag(0x0008, 0x0031), // Series Time
    Tag(0x0008, 0x0032), // Acquisition Time
    Tag(0x0008, 0x0034), // Overlay Time
    Tag(0x0008, 0x0035), // Curve Time
    Tag(0x0008, 0x0080), // Institution Name
    Tag(0x0008, 0x0081), // Institution Address
    Tag(0x0008, 0x0082), // Institution Code Sequence
    Tag(0x0008, 0x0092), // Referring Physician's Address
    Tag(0x0008, 0x0094), // Referring Physician's Telephone Numbers
    Tag(0x0008, 0x0096), // Referring Physician Identification Sequence
    Tag(0x0008, 0x009D), // Consulting Physician Identification Sequence
    Tag(0x0008, 0x0201), // Timezone Offset From UTC
    Tag(0x0008, 0x1010), // Station Name
    Tag(0x0008, 0x1030), // Study Description
    Tag(0x0008, 0x103E), // Series Description
    Tag(0x0008, 0x1040), // Institutional Department Name
    Tag(0x0008, 0x1048), // Physician(s) of Record
    Tag(0x0008, 0x1049), // Physician(s) of Record Identification Sequence
    Tag(0x0008, 0x1050), // Performing Physicians' Name
    Tag(0x0008, 0x1052), // Performing Physician Identification Sequence
    Tag(0x0008, 0x1060), // Name of Physician(s) Reading Study
    Tag(0x0008, 0x1062), // Physician(s) Reading Study Identification Sequence
    Tag(0x0008, 0x1070), // Operators' Name
    Tag(0x0008, 0x1072), // Operators' Identification Sequence
    Tag(0x0008, 0x1080), // Admitting Diagnoses Description
    Tag(0x0008, 0x1084), // Admitting Diagnoses Code Sequence
    Tag(0x0008, 0x1110), // Referenced Study Sequence
    Tag(0x0008, 0x1111), // Referenced Performed Procedure Step Sequence
    Tag(0x0008, 0x1120), // Referenced Patient Sequence
    Tag(0x0008, 0x2111), // Derivation Description
    Tag(0x0008, 0x4000), // Identifying Comments
    Tag(0x0010, 0x0021), // Issuer of Patient ID
    Tag(0x0010, 0x0032), // Patient's Birth Time
    Tag(0x0010, 0x0050), // Patient's Insurance Plan Code Sequence
    Tag(0x0010, 0x0101), // Patient's Primary Language Code Sequence
    Tag(0x0010, 0x0102), // Patient's Primary Language Modifier Code Sequence
    Tag(0x0010, 0x1000), // Other Patient IDs
    Tag(0x0010, 0x1001), // Other Patient Names
    Tag(0x0010, 0x1002), // Other Patient IDs Sequence
    Tag(0x0010, 0x1005), // Patient's Birth Name
    Tag(0x0010, 0x1010), // Patient's Age
    Tag(0x0010, 0x1020), // Patient's Size
    Tag(0x0010, 0x1030), // Patient's Weight
    Tag(0x0010, 0x1040), // Patient Address
    Tag(0x0010, 0x1050), // Insurance Plan Identification
    Tag(0x0010, 0x1060), // Patient's Mother's Birth Name
    Tag(0x0010, 0x1080), // Military Rank
    Tag(0x0010, 0x1081), // Branch of Service
    Tag(0x0010, 0x1090), // Medical Record Locator
    Tag(0x0010, 0x1100), // Referenced Patient Photo Sequence
    Tag(0x0010, 0x2000), // Medical Alerts
    Tag(0x0010, 0x2110), // Allergies
    Tag(0x0010, 0x2150), // Country of Residence
    Tag(0x0010, 0x2152), // Region of Residence
    Tag(0x0010, 0x2154), // Patient's Telephone Numbers
    Tag(0x0010, 0x2155), // Patient's Telecom Information
    Tag(0x0010, 0x2160), // Ethnic Group
    Tag(0x0010, 0x2180), // Occupation
    Tag(0x0010, 0x21A0), // Smoking Status
    Tag(0x0010, 0x21B0), // Additional Patient's History
    Tag(0x0010, 0x21C0), // Pregnancy Status
    Tag(0x0010, 0x21D0), // Last Menstrual Date
    Tag(0x0010, 0x21F0), // Patient's Religious Preference
    Tag(0x0010, 0x2203), // Patient Sex Neutered
    Tag(0x0010, 0x2297), // Responsible Person
    Tag(0x0010, 0x2299), // Responsible Organization
    Tag(0x0010, 0x4000), // Patient Comments
    Tag(0x0018, 0x1000), // Device Serial Number
    Tag(0x0018, 0x1004), // Plate ID
    Tag(0x0018, 0x1005), // Generator ID
    Tag(0x0018, 0x1007), // Cassette ID
    Tag(0x0018, 0x1008), // Gantry ID
    Tag(0x0018, 0x1030), // Protocol Name
    Tag(0x0018, 0x1400), // Acquisition Device Processing Description
    Tag(0x0018, 0x4000), // Acquisition Comments
    Tag(0x0018, 0x700A), // Detector ID
    Tag(0x0018, 0x9424), // Acquisition Protocol Description
    Tag(0x0018, 0x9516), // Start Acquisition DateTime
    Tag(0x0018, 0x9517), // End Acquisition DateTime
    Tag(0x0018, 0xA003), // Contribution Description
    Tag(0x0020, 0x3401), // Modifying Device ID
    Tag(0x0020, 0x3404), // Modifying Device Manufacturer
    Tag(0x0020, 0x3406), // Modified Image Description
    Tag(0x0020, 0x4000), // Image Comments
    Tag(0x0020, 0x9158), // Frame Comments
    Tag(0x0028, 0x4000), // Image Presentation Comments
    Tag(0x0032, 0x0012), // Study ID Issuer
    Tag(0x0032, 0x1020), // Scheduled Study Location
    Tag(0x0032, 0x1021), // Scheduled Study Location AE Title
    Tag(0x0032, 0x1030), // Reason for Study
    Tag(0x0032, 0x1032), // Requesting Physician
    Tag(0x0032, 0x1033), // Requesting Service
    Tag(0x0032, 0x1060), // Requested Procedure Description
    Tag(0x0032, 0x1070), // Requested Contrast Agent
    Tag(0x0032, 0x4000), // Study Comments
    Tag(0x0038, 0x0004), // Referenced Patient Alias Sequence
    Tag(0x0038, 0x0010), // Admission ID
    Tag(0x0038, 0x0011), // Issuer of Admission ID
    Tag(0x0038, 0x001E), // Scheduled Patient Institution Residence
    Tag(0x0038, 0x0020), // Admitting Date
    Tag(0x0038, 0x0021), // Admitting Time
    Tag(0x0038, 0x0040), // Discharge Diagnosis Description
    Tag(0x0038, 0x0050), // Special Needs
    Tag(0x0038, 0x0060), // Service Episode ID
    Tag(0x0038, 0x0061), // Issuer of Service Episode ID
    Tag(0x0038, 0x0062), // Service Episode Description
    Tag(0x0038, 0x0300), // Current Patient Location
    Tag(0x0038, 0x0400), // Patient's Institution Residence
    Tag(0x0038, 0x0500), // Patient State
    Tag(0x0038, 0x4000), // Visit Comments
    Tag(0x0040, 0x0001), // Scheduled Station AE Title
    Tag(0x0040, 0x0002), // Scheduled Procedure Step Start Date
    Tag(0x0040, 0x0003), // Scheduled Procedure Step Start Time
    Tag(0x0040, 0x0004), // Scheduled Procedure Step End Date
    Tag(0x0040, 0x0005), // Scheduled Procedure Step End Time
    Tag(0x0040, 0x0006), // Scheduled Performing Physician Name
    Tag(0x0040, 0x0007), // Scheduled Procedure Step Description
    Tag(0x0040, 0x000B), // Scheduled Performing Physician Identification Sequence
    Tag(0x0040, 0x0010), // Scheduled Station Name
    Tag(0x0040, 0x0011), // Scheduled Procedure Step Location
    Tag(0x0040, 0x0012), // Pre-Medication
    Tag(0x0040, 0x0241), // Performed Station AE Title
    Tag(0x0040, 0x0242), // Performed Station Name
    Tag(0x0040, 0x0243), // Performed Location
    Tag(0x0040, 0x0244), // Performed Procedure Step Start Date
    Tag(0x0040, 0x0245), // Performed Procedure Step Start Time
    Tag(0x0040, 0x0250), // Performed Procedure Step End Date
    Tag(0x0040, 0x0251), // Performed Procedure Step End Time
    Tag(0x0040, 0x0253), // Performed Procedure Step ID
    Tag(0x0040, 0x0254), // Performed Procedure Step Description
    Tag(0x0040, 0x0275), // Request Attributes Sequence
    Tag(0x0040, 0x0280), // Comments on the Performed Procedure Step
    Tag(0x0040, 0x0555), // Acquisition Context Sequence
    Tag(0x0040, 0x1001), // Requested Procedure ID
    Tag(0x0040, 0x1004), // Patient Transport Arrangements
    Tag(0x0040, 0x1005), // Requested Procedure Location
    Tag(0x0040, 0x1010), // Names of Intended Recipient of Results
    Tag(0x0040, 0x1011), // Intended Recipients of Results Identification Sequence
    Tag(0x0040, 0x1102), // Person Address
    Tag(0x0040, 0x1103), // Person's Telephone Numbers
    Tag(0x0040, 0x1104), // Person's Telecom Information
    Tag(0x0040, 0x1400), // Requested Procedure Comments
    Tag(0x0040, 0x2001), // Reason for the Imaging Service Request
    Tag(0x0040, 0x2008), // Order Entered By
    Tag(0x0040, 0x2009), // Order Enterer Location
    Tag(0x0040, 0x2010), // Order Callback Phone Number
    Tag(0x0040, 0x2011), // Order Callback Telecom Information
    Tag(0x0040, 0x2400), // Imaging Service Request Comments
    Tag(0x0040, 0x3001), // Confidentiality Constraint on Patient Data Description
    Tag(0x0040, 0x4005), // Scheduled Procedure Step Start DateTime
    Tag(0x0040, 0x4010), // Scheduled Procedure Step Modification DateTime
    Tag(0x0040, 0x4011), // Expected Completion DateTime
    Tag(0x0040, 0x4025), // Scheduled Station Name Code Sequence
    Tag(0x0040, 0x4027), // Scheduled Station Geographic Location Code Sequence
    Tag(0x0040, 0x4028), // Performed Station Name Code Sequence
    Tag(0x0040, 0x4030), // Performed Station Geographic Location Code Sequence
    Tag(0x0040, 0x4034), // Scheduled Human Performers Sequence
    Tag(0x0040, 0x4035), // Actual Human Performers Sequence
    Tag(0x0040, 0x4036), // Human Performers Organization
    Tag(0x0040, 0x4037), // Human Performers Name
    Tag(0x0040, 0x4050), // Performed Procedure Step Start DateTime
    Tag(0x0040, 0x4051), // Performed Procedure Step End DateTime
    Tag(0x0040, 0x4052), // Procedure Step Cancellation DateTime
    Tag(0x0040, 0xA027), // Verifying Organization
    Tag(0x0040, 0xA078), // Author Observer Sequence
    Tag(0x0040, 0xA07A), // Participant Sequence
    Tag(0x0040, 0xA07C), // Custodial Organization Sequence
    Tag(0x0040, 0xA192), // Observation Date (Trial)
    Tag(0x0040, 0xA193), // Observation Time (Trial)
    Tag(0x0040, 0xA307), // Current Observer (Trial)
    Tag(0x0040, 0xA352), // Verbal Source (Trial)
    Tag(0x0040, 0xA353), // Address (Trial)
    Tag(0x0040, 0xA354), // Telephone Number (Trial)
    Tag(0x0040, 0xA358), // Verbal Source Identifier Code Sequence (Trial)
    Tag(0x0040, 0xA730), // Content Sequence
    Tag(0x0070, 0x0086), // Content Creator's Identification Code Sequence
    Tag(0x0088, 0x0200), // Icon Image Sequence(see Note 12)
    Tag(0x0088, 0x0904), // Topic Title
    Tag(0x0088, 0x0906), // Topic Subject
    Tag(0x0088, 0x0910), // Topic Author
    Tag(0x0088, 0x0912), // Topic Keywords
    Tag(0x0400, 0x0100), // Digital Signature UID
    Tag(0x0400, 0x0402), // Referenced Digital Signature Sequence
    Tag(0x0400, 0x0403), // Referenced SOP Instance MAC Sequence
    Tag(0x0400, 0x0404), // MAC
    Tag(0x0400, 0x0550), // Modified Attributes Sequence
    Tag(0x0400, 0x0561), // Original Attributes Sequence
    Tag(0x2030, 0x0020), // Text String
    Tag(0x3008, 0x0105), // Source Serial Number
    Tag(0x300C, 0x0113), // Reason for Omission Description
    Tag(0x300E, 0x0008), // Reviewer Name
    Tag(0x4000, 0x0010), // Arbitrary
    Tag(0x4000, 0x4000), // Text Comments
    Tag(0x4008, 0x0042), // Results ID Issuer
    Tag(0x4008, 0x0102), // Interpretation Recorder
    Tag(0x4008, 0x010A), // Interpretation Transcriber
    Tag(0x4008, 0x010B), // Interpretation Text
    Tag(0x4008, 0x010C), // Interpretation Author
    Tag(0x4008, 0x0111), // Interpretation Approver Sequence
    Tag(0x4008, 0x0114), // Physician Approving Interpretation
    Tag(0x4008, 0x0115), // Interpretation Diagnosis Description
    Tag(0x4008, 0x0118), // Results Distribution List Sequence
    Tag(0x4008, 0x0119), // Distribution Name
    Tag(0x4008, 0x011A), // Distribution Address
    Tag(0x4008, 0x0202), // Interpretation ID Issuer
    Tag(0x4008, 0x0300), // Impressions
    Tag(0x4008, 0x4000), // Results Comments
    Tag(0xFFFA, 0xFFFA), // Digital Signatures Sequence
    Tag(0xFFFC, 0xFFFC), // Data Set Trailing Padding
];

/// Attributes holding UIDs which are consistently remapped (`U`).
pub(crate) static UIDS: &[Tag] = &[
    Tag(0x0000, 0x1001), // Requested SOP Instance UID
    Tag(0x0002, 0x0003), // Media Storage SOP Instance UID
    Tag(0x0004, 0x1511), // Referenced SOP Instance UID in File
    Tag(0x0008, 0x0014), // Instance Creator UID
    Tag(0x0008, 0x0058), // Failed SOP Instance UID List
    Tag(0x0008, 0x1155), // Referenced SOP Instance UID
    Tag(0x0008, 0x1195), // Transaction UID
    Tag(0x0008, 0x3010), // Irradiation Event UID
    Tag(0x0018, 0x1002), // Device UID
    Tag(0x0018, 0x2042), // Target UID
    Tag(0x0020, 0x0052), // Frame of Reference UID
    Tag(0x0020, 0x0200), // Synchronization Frame of Reference UID
    Tag(0x0020, 0x9161), // Concatenation UID
    Tag(0x0020, 0x9164), // Dimension Organization UID
    Tag(0x0028, 0x1199), // Palette Color Lookup Table UID
    Tag(0x0028, 0x1214), // Large Palette Color Lookup Table UID
    Tag(0x0040, 0x4023), // Referenced General Purpose Scheduled Procedure Step Transaction UID
    Tag(0x0040, 0xA124), // UID
    Tag(0x0040, 0xA171), // Observation UID
    Tag(0x0040, 0xA172), // Referenced Observation UID (Trial)
    Tag(0x0040, 0xA402), // Observation Subject UID (Trial)
    Tag(0x0040, 0xDB0C), // Template Extension Organization UID
    Tag(0x0040, 0xDB0D), // Template Extension Creator UID
    Tag(0x0062, 0x0021), // Tracking UID
    Tag(0x0070, 0x031A), // Fiducial UID
    Tag(0x0070, 0x1101), // Presentation Display Collection UID
    Tag(0x0070, 0x1102), // Presentation Sequence Collection UID
    Tag(0x0088, 0x0140), // Storage Media File-set UID
    Tag(0x3006, 0x0024), // Referenced Frame of Reference UID
    Tag(0x3006, 0x00C2), // Related Frame of Reference UID
    Tag(0x300A, 0x0013), // Dose Reference UID
];

/// Repeating groups removed wholesale.
pub(crate) static RANGES: &[TagRange] = &[
    TagRange::new(0x5000, 0x50FF, 0x0000, 0xFFFF), // Curve Data
    TagRange::new(0x6000, 0x60FF, 0x3000, 0x3000), // Overlay Data
    TagRange::new(0x6000, 0x60FF, 0x4000, 0x4000), // Overlay Comments
];
