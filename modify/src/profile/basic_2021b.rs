//! Table E.1-1 of PS3.15-2021b, basic profile column.

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
    Tag(0x0012, 0x0010), // Clinical Trial Sponsor Name
    Tag(0x0012, 0x0020), // Clinical Trial Protocol ID
    Tag(0x0012, 0x0021), // Clinical Trial Protocol Name
    Tag(0x0012, 0x0030), // Clinical Trial Site ID
    Tag(0x0012, 0x0031), // Clinical Trial Site Name
    Tag(0x0012, 0x0040), // Clinical Trial Subject ID
    Tag(0x0012, 0x0042), // Clinical Trial Subject Reading ID
    Tag(0x0012, 0x0050), // Clinical Trial Time Point ID
    Tag(0x0012, 0x0060), // Clinical Trial Coordinating Center Name
    Tag(0x0012, 0x0081), // Clinical Trial Protocol Ethics Committee Name
    Tag(0x0018, 0x0010), // Contrast/Bolus Agent
    Tag(0x0018, 0x11BB), // Acquisition Field Of View Label
    Tag(0x0018, 0x9367), // X-Ray Source ID
    Tag(0x0018, 0x9369), // Source Start DateTime
    Tag(0x0018, 0x936A), // Source End DateTime
    Tag(0x0018, 0x9371), // X-Ray Detector ID
    Tag(0x0020, 0x0010), // Study ID
    Tag(0x0034, 0x0001), // Flow Identifier Sequence
    Tag(0x0034, 0x0002), // Flow Identifier
    Tag(0x0034, 0x0005), // Source Identifier
    Tag(0x0034, 0x0007), // Frame Origin Timestamp
    Tag(0x003A, 0x0314), // Impedance Measurement DateTime
    Tag(0x0040, 0x0512), // Container Identifier
    Tag(0x0040, 0x0513), // Issuer of the Container Identifier Sequence
    Tag(0x0040, 0x0551), // Specimen Identifier
    Tag(0x0040, 0x0562), // Issuer of the Specimen Identifier Sequence
    Tag(0x0040, 0x0610), // Specimen Preparation Sequence
    Tag(0x0040, 0x1101), // Person Identification Code Sequence
    Tag(0x0040, 0x2016), // Placer Order Number / Imaging Service Request
    Tag(0x0040, 0x2017), // Filler Order Number / Imaging Service Request
    Tag(0x0040, 0xA027), // Verifying Organization
    Tag(0x0040, 0xA073), // Verifying Observer Sequence
    Tag(0x0040, 0xA075), // Verifying Observer Name
    Tag(0x0040, 0xA088), // Verifying Observer Identification Code Sequence
    Tag(0x0040, 0xA123), // Person Name
    Tag(0x0040, 0xA730), // Content Sequence
    Tag(0x0070, 0x0001), // Graphic Annotation Sequence
    Tag(0x0070, 0x0084), // Content Creator's Name
    Tag(0x3006, 0x0002), // Structure Set Label
    Tag(0x3006, 0x0008), // Structure Set Date
    Tag(0x3006, 0x0009), // Structure Set Time
    Tag(0x3006, 0x0026), // ROI Name
    Tag(0x3006, 0x00A6), // ROI Interpreter
    Tag(0x300A, 0x0002), // RT Plan Label
    Tag(0x300A, 0x0608), // Treatment Position Group Label
    Tag(0x300A, 0x0611), // RT Accessory Holder Slot ID
    Tag(0x300A, 0x0615), // RT Accessory Device Slot ID
    Tag(0x300A, 0x0619), // Radiation Dose Identification Label
    Tag(0x300A, 0x0623), // Radiation Dose In-Vivo Measurement Label
    Tag(0x300A, 0x062A), // RT Tolerance Set Label
    Tag(0x300A, 0x067C), // Radiation Generation Mode Label
    Tag(0x300A, 0x067D), // Radiation Generation Mode Description
    Tag(0x300A, 0x0734), // Treatment Tolerance Violation Description
    Tag(0x300A, 0x0736), // Treatment Tolerance Violation DateTime
    Tag(0x300A, 0x073A), // Recorded RT Control Point DateTime
    Tag(0x300A, 0x0741), // Interlock DateTime
    Tag(0x300A, 0x0742), // Interlock Description
    Tag(0x300A, 0x0760), // Override DateTime
    Tag(0x300A, 0x0783), // Interlock Origin Description
    Tag(0x3010, 0x000F), // Conceptual Volume Combination Description
    Tag(0x3010, 0x0017), // Conceptual Volume Description
    Tag(0x3010, 0x001B), // Device Alternate Identifier
    Tag(0x3010, 0x002D), // Device Label
    Tag(0x3010, 0x0033), // User Content Label
    Tag(0x3010, 0x0034), // User Content Long Label
    Tag(0x3010, 0x0035), // Entity Label
    Tag(0x3010, 0x0038), // Entity Long Label
    Tag(0x3010, 0x0043), // Manufacturer's Device Identifier
    Tag(0x3010, 0x0054), // RT Prescription Label
    Tag(0x3010, 0x005A), // RT Physician Intent Narrative
    Tag(0x3010, 0x005C), // Reason for Superseding
    Tag(0x3010, 0x0077), // Treatment Site
    Tag(0x3010, 0x007A), // Treatment Technique Notes
    Tag(0x3010, 0x007B), // Prescription Notes
    Tag(0x3010, 0x007F), // Fractionation Notes
    Tag(0x3010, 0x0081), // Prescription Notes Sequence
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
    Tag(0x0008, 0x1041), // Institutional Department Type Code Sequence
    Tag(0x0008, 0x1048), // Physician(s) of Record
    Tag(0x0008, 0x1049), // Physician(s) of Record Identification Sequence
    Tag(0x0008, 0x1050), // Performing Physician's Name
    Tag(0x0008, 0x1052), // Performing Physician Identification Sequence
    Tag(0x0008, 0x1060), // Name of Physician(s) Reading Study
    Tag(0x0008, 0x1062), // Physician(s) Reading Study Identification Sequence
    Tag(0x0008, 0x1070), // Operators' Name
    Tag(0x0008, 0x1072), // Operator Identification Sequence
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
    Tag(0x0010, 0x1040), // Patient's Address
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
    Tag(0x0010, 0x21B0), // Additional Patient History
    Tag(0x0010, 0x21C0), // Pregnancy Status
    Tag(0x0010, 0x21D0), // Last Menstrual Date
    Tag(0x0010, 0x21F0), // Patient's Religious Preference
    Tag(0x0010, 0x2203), // Patient's Sex Neutered
    Tag(0x0010, 0x2297), // Responsible Person
    Tag(0x0010, 0x2299), // Responsible Organization
    Tag(0x0010, 0x4000), // Patient Comments
    Tag(0x0012, 0x0051), // Clinical Trial Time Point Description
    Tag(0x0012, 0x0071), // Clinical Trial Series ID
    Tag(0x0012, 0x0072), // Clinical Trial Series Description
    Tag(0x0012, 0x0082), // Clinical Trial Protocol Ethics Committee Approval Number
    Tag(0x0016, 0x002B), // Maker Note
    Tag(0x0016, 0x004B), // Device Setting Description
    Tag(0x0016, 0x004D), // Camera Owner Name
    Tag(0x0016, 0x004E), // Lens Specification
    Tag(0x0016, 0x004F), // Lens Make
    Tag(0x0016, 0x0050), // Lens Model
    Tag(0x0016, 0x0051), // Lens Serial Number
    Tag(0x0016, 0x0070), // GPS Version ID
    Tag(0x0016, 0x0071), // GPS Latitude Ref
    Tag(0x0016, 0x0072), // GPS Latitude
    Tag(0x0016, 0x0073), // GPS Longitude Ref
    Tag(0x0016, 0x0074), // GPS Longitude
    Tag(0x0016, 0x0075), // GPS Altitude Ref
    Tag(0x0016, 0x0076), // GPS Altitude
    Tag(0x0016, 0x0077), // GPS Time Stamp
    Tag(0x0016, 0x0078), // GPS Satellites
    Tag(0x0016, 0x0079), // GPS Status
    Tag(0x0016, 0x007A), // GPS Measure Mode
    Tag(0x0016, 0x007B), // GPS DOP
    Tag(0x0016, 0x007C), // GPS Speed Ref
    Tag(0x0016, 0x007D), // GPS Speed
    Tag(0x0016, 0x007E), // GPS Track Ref
    Tag(0x0016, 0x007F), // GPS Track
    Tag(0x0016, 0x0080), // GPS Img Direction Ref
    Tag(0x0016, 0x0081), // GPS Img Direction
    Tag(0x0016, 0x0082), // GPS Map Datum
    Tag(0x0016, 0x0083), // GPS Dest Latitude Ref
    Tag(0x0016, 0x0084), // GPS Dest Latitude
    Tag(0x0016, 0x0085), // GPS Dest Longitude Ref
    Tag(0x0016, 0x0086), // GPS Dest Longitude
    Tag(0x0016, 0x0087), // GPS Dest Bearing Ref
    Tag(0x0016, 0x0088), // GPS Dest Bearing
    Tag(0x0016, 0x0089), // GPS Dest Distance Ref
    Tag(0x0016, 0x008A), // GPS Dest Distance
    Tag(0x0016, 0x008B), // GPS Processing Method
    Tag(0x0016, 0x008C), // GPS Area Information
    Tag(0x0016, 0x008D), // GPS Date Stamp
    Tag(0x0016, 0x008E), // GPS Differential
    Tag(0x0018, 0x1000), // Device Serial Number
    Tag(0x0018, 0x1004), // Plate ID
    Tag(0x0018, 0x1005), // Generator ID
    Tag(0x0018, 0x1007), // Cassette ID
    Tag(0x0018, 0x1008), // Gantry ID
    Tag(0x0018, 0x1009), // Unique Device Identifier
    Tag(0x0018, 0x100A), // UDI Sequence
    Tag(0x0018, 0x1030), // Protocol Name
    Tag(0x0018, 0x1400), // Acquisition Device Processing Description
    Tag(0x0018, 0x4000), // Acquisition Comments
    Tag(0x0018, 0x5011), // Transducer Identification Sequence
    Tag(0x0018, 0x700A), // Detector ID
    Tag(0x0018, 0x9185), // Respiratory Motion Compensation Technique Description
    Tag(0x0018, 0x9373), // X-Ray Detector Label
    Tag(0x0018, 0x937B), // Multi-energy Acquisition Description
    Tag(0x0018, 0x937F), // Decomposition Description
    Tag(0x0018, 0x9424), // Acquisition Protocol Description
    Tag(0x0018, 0x9516), // Start Acquisition DateTime
    Tag(0x0018, 0x9517), // End Acquisition DateTime
    Tag(0x0018, 0x9937), // Requested Series Description
    Tag(0x0018, 0xA003), // Contribution Description
    Tag(0x0020, 0x3401), // Modifying Device ID
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
    Tag(0x0032, 0x1066), // Reason for Visit
    Tag(0x0032, 0x1067), // Reason for Visit Code Sequence
    Tag(0x0032, 0x1070), // Requested Contrast Agent
    Tag(0x0032, 0x4000), // Study Comments
    Tag(0x0038, 0x0004), // Referenced Patient Alias Sequence
    Tag(0x0038, 0x0010), // Admission ID
    Tag(0x0038, 0x0011), // Issuer of Admission ID
    Tag(0x0038, 0x0014), // Issuer of Admission ID Sequence
    Tag(0x0038, 0x001E), // Scheduled Patient Institution Residence
    Tag(0x0038, 0x0020), // Admitting Date
    Tag(0x0038, 0x0021), // Admitting Time
    Tag(0x0038, 0x0040), // Discharge Diagnosis Description
    Tag(0x0038, 0x0050), // Special Needs
    Tag(0x0038, 0x0060), // Service Episode ID
    Tag(0x0038, 0x0061), // Issuer of Service Episode ID
    Tag(0x0038, 0x0062), // Service Episode Description
    Tag(0x0038, 0x0064), // Issuer of Service Episode ID Sequence
    Tag(0x0038, 0x0300), // Current Patient Location
    Tag(0x0038, 0x0400), // Patient's Institution Residence
    Tag(0x0038, 0x0500), // Patient State
    Tag(0x0038, 0x4000), // Visit Comments
    Tag(0x0040, 0x0001), // Scheduled Station AE Title
    Tag(0x0040, 0x0002), // Scheduled Procedure Step Start Date
    Tag(0x0040, 0x0003), // Scheduled Procedure Step Start Time
    Tag(0x0040, 0x0004), // Scheduled Procedure Step End Date
    Tag(0x0040, 0x0005), // Scheduled Procedure Step End Time
    Tag(0x0040, 0x0006), // Scheduled Performing Physician's Name
    Tag(0x0040, 0x0007), // Scheduled Procedure Step Description
    Tag(0x0040, 0x0009), // Scheduled Procedure Step ID
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
    Tag(0x0040, 0x0310), // Comments on Radiation Dose
    Tag(0x0040, 0x050A), // Specimen Accession Number
    Tag(0x0040, 0x051A), // Container Description
    Tag(0x0040, 0x0555), // Acquisition Context Sequence
    Tag(0x0040, 0x0600), // Specimen Short Description
    Tag(0x0040, 0x0602), // Specimen Detailed Description
    Tag(0x0040, 0x06FA), // Slide Identifier
    Tag(0x0040, 0x1001), // Requested Procedure ID
    Tag(0x0040, 0x1002), // Reason for the Requested Procedure
    Tag(0x0040, 0x1004), // Patient Transport Arrangements
    Tag(0x0040, 0x1005), // Requested Procedure Location
    Tag(0x0040, 0x100A), // Reason for Requested Procedure Code Sequence
    Tag(0x0040, 0x1010), // Names of Intended Recipients of Results
    Tag(0x0040, 0x1011), // Intended Recipients of Results Identification Sequence
    Tag(0x0040, 0x1102), // Person's Address
    Tag(0x0040, 0x1103), // Person's Telephone Numbers
    Tag(0x0040, 0x1104), // Person's Telecom Information
    Tag(0x0040, 0x1400), // Requested Procedure Comments
    Tag(0x0040, 0x2001), // Reason for the Imaging Service Request
    Tag(0x0040, 0x2008), // Order Entered By
    Tag(0x0040, 0x2009), // Order Enterer's Location
    Tag(0x0040, 0x2010), // Order Callback Phone Number
    Tag(0x0040, 0x2011), // Order Callback Telecom Information
    Tag(0x0040, 0x2400), // Imaging Service Request Comments
    Tag(0x0040, 0x3001), // Confidentiality Constraint on Patient Data Description
    Tag(0x0040, 0x4005), // Scheduled Procedure Step Start DateTime
    Tag(0x0040, 0x4008), // Scheduled Procedure Step Expiration DateTime
    Tag(0x0040, 0x4010), // Scheduled Procedure Step Modification DateTime
    Tag(0x0040, 0x4011), // Expected Completion DateTime
    Tag(0x0040, 0x4025), // Scheduled Station Name Code Sequence
    Tag(0x0040, 0x4027), // Scheduled Station Geographic Location Code Sequence
    Tag(0x0040, 0x4028), // Performed Station Name Code Sequence
    Tag(0x0040, 0x4030), // Performed Station Geographic Location Code Sequence
    Tag(0x0040, 0x4034), // Scheduled Human Performers Sequence
    Tag(0x0040, 0x4035), // Actual Human Performers Sequence
    Tag(0x0040, 0x4036), // Human Performer's Organization
    Tag(0x0040, 0x4037), // Human Performer's Name
    Tag(0x0040, 0x4050), // Performed Procedure Step Start DateTime
    Tag(0x0040, 0x4051), // Performed Procedure Step End DateTime
    Tag(0x0040, 0x4052), // Procedure Step Cancellation DateTime
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
    Tag(0x0050, 0x001B), // Container Component ID
    Tag(0x0050, 0x0020), // Device Description
    Tag(0x0050, 0x0021), // Long Device Description
    Tag(0x0070, 0x0086), // Content Creator's Identification Code Sequence
    Tag(0x0088, 0x0200), // Icon Image Sequence
    Tag(0x0088, 0x0904), // Topic Title
    Tag(0x0088, 0x0906), // Topic Subject
    Tag(0x0088, 0x0910), // Topic Author
    Tag(0x0088, 0x0912), // Topic Keywords
    Tag(0x0400, 0x0402), // Referenced Digital Signature Sequence
    Tag(0x0400, 0x0403), // Referenced SOP Instance MAC Sequence
    Tag(0x0400, 0x0404), // MAC
    Tag(0x0400, 0x0550), // Modified Attributes Sequence
    Tag(0x0400, 0x0551), // Nonconforming Modified Attributes Sequence
    Tag(0x0400, 0x0552), // Nonconforming Data Element Value
    Tag(0x0400, 0x0561), // Original Attributes Sequence
    Tag(0x0400, 0x0600), // Instance Origin Status
    Tag(0x2030, 0x0020), // Text String
    Tag(0x2200, 0x0002), // Label Text
    Tag(0x2200, 0x0005), // Barcode Value
    Tag(0x3006, 0x0004), // Structure Set Name
    Tag(0x3006, 0x0006), // Structure Set Description
    Tag(0x3006, 0x0028), // ROI Description
    Tag(0x3006, 0x0038), // ROI Generation Description
    Tag(0x3006, 0x0085), // ROI Observation Label
    Tag(0x3006, 0x0088), // ROI Observation Description
    Tag(0x3008, 0x0054), // First Treatment Date
    Tag(0x3008, 0x0056), // Most Recent Treatment Date
    Tag(0x3008, 0x0105), // Source Serial Number
    Tag(0x3008, 0x0250), // Treatment Date
    Tag(0x3008, 0x0251), // Treatment Time
    Tag(0x300A, 0x0003), // RT Plan Name
    Tag(0x300A, 0x0004), // RT Plan Description
    Tag(0x300A, 0x0006), // RT Plan Date
    Tag(0x300A, 0x0007), // RT Plan Time
    Tag(0x300A, 0x000E), // Prescription Description
    Tag(0x300A, 0x0016), // Dose Reference Description
    Tag(0x300A, 0x0072), // Fraction Group Description
    Tag(0x300A, 0x00B2), // Treatment Machine Name
    Tag(0x300A, 0x00C3), // Beam Description
    Tag(0x300A, 0x00DD), // Bolus Description
    Tag(0x300A, 0x0196), // Fixation Device Description
    Tag(0x300A, 0x01A6), // Shielding Device Description
    Tag(0x300A, 0x01B2), // Setup Technique Description
    Tag(0x300A, 0x0216), // Source Manufacturer
    Tag(0x300A, 0x02EB), // Compensator Description
    Tag(0x300A, 0x0676), // Equipment Frame of Reference Description
    Tag(0x300C, 0x0113), // Reason for Omission Description
    Tag(0x300E, 0x0008), // Reviewer Name
    Tag(0x3010, 0x0036), // Entity Name
    Tag(0x3010, 0x0037), // Entity Description
    Tag(0x3010, 0x004C), // Intended Phase Start Date
    Tag(0x3010, 0x004D), // Intended Phase End Date
    Tag(0x3010, 0x0056), // RT Treatment Approach Label
    Tag(0x3010, 0x0061), // Prior Treatment Dose Description
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
    Tag(0x0018, 0x100B), // Manufacturer's Device Class UID
    Tag(0x0018, 0x2042), // Target UID
    Tag(0x0020, 0x0052), // Frame of Reference UID
    Tag(0x0020, 0x0200), // Synchronization Frame of Reference UID
    Tag(0x0020, 0x9161), // Concatenation UID
    Tag(0x0020, 0x9164), // Dimension Organization UID
    Tag(0x0028, 0x1199), // Palette Color Lookup Table UID
    Tag(0x0028, 0x1214), // Large Palette Color Lookup Table UID
    Tag(0x003A, 0x0310), // Multiplex Group UID
    Tag(0x0040, 0x0554), // Specimen UID
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
    Tag(0x0400, 0x0100), // Digital Signature UID
    Tag(0x3006, 0x0024), // Referenced Frame of Reference UID
    Tag(0x3006, 0x00C2), // Related Frame of Reference UID
    Tag(0x300A, 0x0013), // Dose Reference UID
    Tag(0x300A, 0x0083), // Referenced Dose Reference UID
    Tag(0x300A, 0x0609), // Treatment Position Group UID
    Tag(0x300A, 0x0650), // Patient Setup UID
    Tag(0x300A, 0x0700), // Treatment Session UID
    Tag(0x3010, 0x0006), // Conceptual Volume UID
    Tag(0x3010, 0x000B), // Referenced Conceptual Volume UID
    Tag(0x3010, 0x0013), // Constituent Conceptual Volume UID
    Tag(0x3010, 0x0015), // Source Conceptual Volume UID
    Tag(0x3010, 0x0031), // Referenced Fiducials UID
    Tag(0x3010, 0x003B), // RT Treatment Phase UID
    Tag(0x3010, 0x006E), // Dosimetric Objective UID
    Tag(0x3010, 0x006F), // Referenced Dosimetric Objective UID
];

/// Repeating groups removed wholesale.
pub(crate) static RANGES: &[TagRange] = &[
    TagRange::new(0x5000, 0x50FF, 0x0000, 0xFFFF), // Curve Data
    TagRange::new(0x6000, 0x60FF, 0x3000, 0x3000), // Overlay Data
    TagRange::new(0x6000, 0x60FF, 0x4000, 0x4000), // Overlay Comments
];
