//! DICOMweb JSON and XML module
//!
//! This library converts DICOM data sets
//! into the representations of the [DICOM standard part 18 chapter F][1],
//! known as the "native DICOM model":
//! a JSON object with one entry per attribute, indexed by tag,
//! and its XML counterpart.
//!
//! [1]: https://dicom.nema.org/medical/dicom/current/output/chtml/part18/chapter_F.html
//!
//! The easiest path to serialization is in
//! using the functions readily available [`to_string`] and [`to_value`].
//! Alternatively, DICOM data can be enclosed by a [`DicomJson`] value,
//! which implements serialization via [Serde](serde).
//!
//! Text values are split into their multiple values,
//! decimal and integer strings become JSON numbers,
//! and person names are decomposed into their component groups.
//! Binary values are inlined in base64 by default;
//! a [`BinaryFormatter`] can refer to them through bulk data URIs instead.
//!
//! # Example
//!
//! To serialize an object to standard DICOM JSON:
//!
//! ```rust
//! # use dcmkit_core::VR;
//! # use dcmkit_object::{InMemDicomObject, InMemElement};
//! # use dcmkit_dictionary_std::tags;
//! let obj = InMemDicomObject::from_element_iter(vec![
//!     InMemElement::new(tags::SERIES_DATE, VR::DA, "20230610"),
//!     InMemElement::new(tags::INSTANCE_NUMBER, VR::IS, "5 "),
//! ]);
//!
//! let json = dcmkit_json::to_string(&obj)?;
//!
//! assert_eq!(
//!     json,
//!     r#"{"00080021":{"vr":"DA","Value":["20230610"]},"00200013":{"vr":"IS","Value":[5]}}"#
//! );
//!
//! Ok::<(), serde_json::Error>(())
//! ```
//!
//! The same data in XML:
//!
//! ```rust
//! # use dcmkit_core::VR;
//! # use dcmkit_object::{InMemDicomObject, InMemElement};
//! # use dcmkit_dictionary_std::tags;
//! # let obj = InMemDicomObject::from_element_iter(vec![
//! #     InMemElement::new(tags::SERIES_DATE, VR::DA, "20230610"),
//! # ]);
//! let xml = dcmkit_json::to_xml_string(&obj)?;
//! assert!(xml.contains(r#"<DicomAttribute tag="00080021" vr="DA" keyword="SeriesDate">"#));
//! # Ok::<(), dcmkit_json::Error>(())
//! ```

use dcmkit_core::ErrorKind;
use snafu::{Backtrace, Snafu};

mod ser;
pub mod xml;

pub use crate::ser::{
    to_string, to_string_pretty, to_value, to_value_with, to_vec, to_writer, BinaryFormatter,
    BinaryMode, BulkDataUriFormatter, DicomJson, DicomJsonOptions, DicomWebJsonVisitor,
    JsonSource,
};
pub use crate::xml::{json_to_xml, to_xml_string, to_xml_string_with, to_xml_writer};

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// The XML document could not be written.
    #[snafu(display("Could not write XML document"))]
    WriteXml {
        source: quick_xml::Error,
        backtrace: Backtrace,
    },
    #[snafu(display("XML document is not valid UTF-8"))]
    Utf8 {
        source: std::string::FromUtf8Error,
        backtrace: Backtrace,
    },
    /// The JSON tree does not follow the native DICOM model.
    #[snafu(display("Invalid DICOMweb JSON tree: {}", reason))]
    InvalidTree { reason: String, backtrace: Backtrace },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::WriteXml { .. } => ErrorKind::InaccessibleFile,
            Error::Utf8 { .. } | Error::InvalidTree { .. } => ErrorKind::InternalError,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
