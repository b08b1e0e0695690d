//! Modification and de-identification of DICOM data sets.
//!
//! The main type is [`DicomModification`],
//! a rule set which can be built programmatically
//! or parsed from a JSON request ([`ModificationRequest`]),
//! and then applied to any number of data sets.
//! Identifiers are remapped consistently for as long as
//! the same modification is used,
//! so that the references between the instances of a batch survive.
//!
//! Anonymization follows the basic application level confidentiality
//! profile of PS3.15 Table E.1-1,
//! in the editions listed by [`DicomVersion`].
//!
//! # Example
//!
//! ```
//! # use dcmkit_core::VR;
//! # use dcmkit_dictionary_std::tags;
//! # use dcmkit_object::{InMemDicomObject, InMemElement};
//! use dcmkit_modify::{DicomModification, DicomVersion};
//!
//! let mut obj = InMemDicomObject::from_element_iter([
//!     InMemElement::new(tags::PATIENT_NAME, VR::PN, "Doe^John"),
//!     InMemElement::new(tags::PATIENT_BIRTH_DATE, VR::DA, "19800101"),
//!     InMemElement::new(tags::STUDY_INSTANCE_UID, VR::UI, "1.2.3"),
//! ]);
//!
//! let mut modification = DicomModification::new();
//! modification.setup_anonymization(DicomVersion::V2021b)?;
//! modification.apply(&mut obj)?;
//!
//! assert_ne!(obj.get(tags::STUDY_INSTANCE_UID).unwrap().to_str().unwrap(), "1.2.3");
//! assert_eq!(obj.get(tags::PATIENT_IDENTITY_REMOVED).unwrap().to_str().unwrap(), "YES");
//! # Ok::<(), dcmkit_modify::Error>(())
//! ```
use dcmkit_core::{ErrorKind, Tag, VR};
use dcmkit_object::{AccessError, VisitError};
use snafu::{Backtrace, Snafu};

pub mod modification;
pub mod profile;
mod relationships;
pub mod request;
mod state;
pub mod uid_map;
pub mod value;

pub use crate::modification::DicomModification;
pub use crate::profile::{basic_profile, DicomVersion, Profile, TagRange};
pub use crate::request::ModificationRequest;
pub use crate::uid_map::{IdentifierGenerator, ResourceLevel, UidMap, UuidIdentifierGenerator};

/// An error raised while building or applying a modification.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// One of the main identifiers is set for removal.
    #[snafu(display("It is forbidden to remove one of the main DICOM identifiers ({})", tag))]
    RemoveMainIdentifier { tag: Tag, backtrace: Backtrace },
    /// An identifier above or at the level being modified
    /// was replaced by hand.
    #[snafu(display("When modifying a {}, {}", level, reason))]
    ManualIdentifier {
        level: ResourceLevel,
        reason: &'static str,
        backtrace: Backtrace,
    },
    /// A main identifier was listed without the `Force` option.
    #[snafu(display(
        "Marking tag \"{}\" as to be {} requires the \"Force\" option to be set to true",
        name,
        operation
    ))]
    RequiresForce {
        name: String,
        operation: &'static str,
        backtrace: Backtrace,
    },
    /// The text does not designate an attribute.
    #[snafu(display("Invalid attribute path `{}`", text))]
    InvalidPath {
        text: String,
        source: dcmkit_core::Error,
        backtrace: Backtrace,
    },
    /// The JSON request is not well formed.
    #[snafu(display("Invalid modification request"))]
    ParseRequest {
        source: serde_json::Error,
        backtrace: Backtrace,
    },
    /// The serialized modification is not well formed.
    #[snafu(display("Invalid serialized modification: {}", reason))]
    BadState { reason: String, backtrace: Backtrace },
    /// The serialized modification could not be read.
    #[snafu(display("Could not read serialized modification"))]
    ReadState {
        source: serde_json::Error,
        backtrace: Backtrace,
    },
    /// The modification could not be written as JSON.
    #[snafu(display("Could not serialize modification"))]
    WriteState {
        source: serde_json::Error,
        backtrace: Backtrace,
    },
    /// A modification with a custom identifier generator
    /// cannot be serialized.
    #[snafu(display("Cannot serialize a modification with a custom identifier generator"))]
    SerializeGenerator { backtrace: Backtrace },
    /// The JSON value cannot be stored in the attribute.
    #[snafu(display("Bad replacement value for tag {}: {}", tag, reason))]
    BadReplacement {
        tag: Tag,
        reason: String,
        backtrace: Backtrace,
    },
    /// The replacement of an attribute was requested but is not defined.
    #[snafu(display("No replacement for tag {}", tag))]
    NoReplacement { tag: Tag, backtrace: Backtrace },
    /// The identifier generator could not produce an identifier.
    #[snafu(display("Unable to generate an anonymized identifier at the {} level", level))]
    GenerateIdentifier {
        level: ResourceLevel,
        backtrace: Backtrace,
    },
    /// An attribute of the UID set has an unexpected value representation.
    #[snafu(display("Tag {} cannot be remapped as an identifier (VR {})", tag, vr))]
    UidValueRepresentation {
        tag: Tag,
        vr: VR,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not access attribute"))]
    Access {
        #[snafu(backtrace)]
        source: AccessError,
    },
    #[snafu(display("Could not visit data set"))]
    Visit {
        #[snafu(backtrace)]
        source: VisitError,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::RemoveMainIdentifier { .. }
            | Error::ManualIdentifier { .. }
            | Error::RequiresForce { .. }
            | Error::InvalidPath { .. }
            | Error::BadReplacement { .. } => ErrorKind::BadRequest,
            Error::ParseRequest { .. } | Error::BadState { .. } | Error::ReadState { .. } => {
                ErrorKind::BadFileFormat
            }
            Error::NoReplacement { .. } => ErrorKind::InexistentItem,
            Error::SerializeGenerator { .. }
            | Error::WriteState { .. }
            | Error::GenerateIdentifier { .. }
            | Error::UidValueRepresentation { .. } => ErrorKind::InternalError,
            Error::Access { source } => source.kind(),
            Error::Visit { source } => source.kind(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
