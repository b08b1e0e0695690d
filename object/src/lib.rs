#![allow(clippy::derive_partial_eq_without_eq)]
//! Parsed DICOM data sets held in memory.
//!
//! An [`InMemDicomObject`] maps tags to elements,
//! sequence elements holding nested objects of the same type.
//! [`open_file`] and [`OpenFileOptions`] read Part-10 files
//! into a [`FileDicomObject`], which keeps the file meta group
//! beside the data set. The [`summary`] module flattens
//! the first level of a data set into a [`DicomMap`].
//!
//! # Examples
//!
//! Reading a file and looking up a few attributes:
//!
//! ```no_run
//! use dcmkit_dictionary_std::tags;
//! use dcmkit_object::open_file;
//! # fn foo() -> Result<(), Box<dyn std::error::Error>> {
//! let obj = open_file("ct.dcm")?;
//!
//! let patient_name = obj.element(tags::PATIENT_NAME)?.to_str();
//! let modality = obj.element_by_name("Modality")?.to_str();
//! # Ok(())
//! # }
//! ```
//!
//! Stopping before the pixel data:
//!
//! ```no_run
//! use dcmkit_object::OpenFileOptions;
//!
//! let obj = OpenFileOptions::new()
//!     .read_until(dcmkit_dictionary_std::tags::PIXEL_DATA)
//!     .open_file("ct.dcm")?;
//! # Result::<(), dcmkit_object::ReadError>::Ok(())
//! ```
//!
//! Every attribute of a data set, including those nested in sequences,
//! can be inspected and rewritten with a [`TagVisitor`]
//! (see the [`visitor`] module).
//!
//! Objects are written back as Part-10 files.
//! The file meta group is written exactly as it was read,
//! unless it was changed through [`FileDicomObject::meta_mut`].
//!
//! ```no_run
//! # use dcmkit_object::DefaultDicomObject;
//! # fn something(obj: DefaultDicomObject) -> Result<(), Box<dyn std::error::Error>> {
//! obj.write_to_file("ct-copy.dcm")?;
//! # Ok(())
//! # }
//! ```
//!
//! New objects get a file meta group from a [`FileMetaTableBuilder`]:
//!
//! ```
//! # use dcmkit_object::{FileMetaTableBuilder, InMemDicomObject, InMemElement};
//! # use dcmkit_core::VR;
//! # fn build() -> Result<(), Box<dyn std::error::Error>> {
//! use dcmkit_dictionary_std::uids;
//!
//! let mut obj = InMemDicomObject::new_empty();
//! obj.put(InMemElement::new((0x0010, 0x0010), VR::PN, "Doe^John"));
//! let file_obj = obj.with_meta(
//!     FileMetaTableBuilder::new()
//!         .transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN)
//!         .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.1")
//!         .media_storage_sop_instance_uid("1.2.3.4"),
//! )?;
//! let mut out = Vec::new();
//! file_obj.write_all(&mut out)?;
//! assert_eq!(&out[128..132], b"DICM");
//! # Ok(())
//! # }
//! # build().unwrap();
//! ```
pub mod file;
pub mod mem;
pub mod meta;
pub mod summary;
pub mod tokens;
pub mod value;
pub mod visitor;

pub use crate::file::{from_reader, open_file, OpenFileOptions, ReadPreamble};
pub use crate::mem::{InMemDicomObject, ReplaceMode};
pub use crate::meta::{FileMetaTable, FileMetaTableBuilder};
pub use crate::summary::{DicomMap, DicomValue, USEFUL_TAG_LENGTH};
pub use crate::value::{InMemElement, Value};
pub use crate::visitor::{apply_visitor, walk, Action, TagVisitor, VisitError};
pub use dcmkit_core::Tag;
pub use dcmkit_dictionary_std::StandardDataDictionary;

use dcmkit_core::{ErrorKind, TransferSyntax};
use dcmkit_parser::DataToken;
use snafu::{Backtrace, OptionExt, ResultExt, Snafu};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::ops::{Deref, DerefMut};
use std::path::Path;

/// The implementation class UID of the toolkit.
///
/// Generated as per the standard, part 5, section B.2.
pub const IMPLEMENTATION_CLASS_UID: &str = "2.25.203116378940311412263837426089413851927";

/// The implementation version name of the toolkit.
pub const IMPLEMENTATION_VERSION_NAME: &str = "DCMKIT_030";

/// The default implementation of a root DICOM object.
pub type DefaultDicomObject = FileDicomObject<InMemDicomObject>;

/// An error which may occur when loading a DICOM object
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ReadError {
    #[snafu(display("Could not open file '{}'", filename.display()))]
    OpenFile {
        filename: std::path::PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    /// Could not read preamble bytes
    ReadPreambleBytes {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not parse meta group data set"))]
    ParseMetaDataSet {
        #[snafu(backtrace)]
        source: crate::meta::Error,
    },
    #[snafu(display("Could not create data set parser"))]
    CreateParser {
        #[snafu(backtrace)]
        source: dcmkit_parser::Error,
    },
    #[snafu(display("Could not read data set token"))]
    ReadToken {
        #[snafu(backtrace)]
        source: dcmkit_parser::Error,
    },
    #[snafu(display("Missing element value after header token"))]
    MissingElementValue { backtrace: Backtrace },
    #[snafu(display("Unsupported transfer syntax `{}`", uid))]
    ReadUnsupportedTransferSyntax { uid: String, backtrace: Backtrace },
    #[snafu(display("Unexpected token {}", token))]
    UnexpectedToken {
        token: Box<DataToken>,
        backtrace: Backtrace,
    },
    #[snafu(display("Premature data set end"))]
    PrematureEnd { backtrace: Backtrace },
}

impl ReadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReadError::OpenFile { .. } => ErrorKind::InaccessibleFile,
            ReadError::ParseMetaDataSet { source } => source.kind(),
            ReadError::CreateParser { source } | ReadError::ReadToken { source } => source.kind(),
            ReadError::ReadUnsupportedTransferSyntax { .. } => ErrorKind::NotImplemented,
            _ => ErrorKind::BadFileFormat,
        }
    }
}

/// An error which may occur when writing a DICOM object
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum WriteError {
    #[snafu(display("Could not write to file '{}'", filename.display()))]
    WriteFile {
        filename: std::path::PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not write object preamble"))]
    WritePreamble {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not print meta group data set"))]
    PrintMetaDataSet {
        #[snafu(backtrace)]
        source: crate::meta::Error,
    },
    #[snafu(display("Could not create data set printer"))]
    CreatePrinter {
        #[snafu(backtrace)]
        source: dcmkit_parser::Error,
    },
    #[snafu(display("Could not print data set"))]
    PrintDataSet {
        #[snafu(backtrace)]
        source: dcmkit_parser::Error,
    },
    #[snafu(display("Unsupported transfer syntax `{}`", uid))]
    WriteUnsupportedTransferSyntax { uid: String, backtrace: Backtrace },
}

impl WriteError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WriteError::WriteFile { .. } | WriteError::WritePreamble { .. } => {
                ErrorKind::InaccessibleFile
            }
            WriteError::PrintMetaDataSet { source } => source.kind(),
            WriteError::CreatePrinter { source } | WriteError::PrintDataSet { source } => {
                source.kind()
            }
            WriteError::WriteUnsupportedTransferSyntax { .. } => ErrorKind::NotImplemented,
        }
    }
}

/// An error which may occur when looking up a DICOM object's attributes.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum AccessError {
    #[snafu(display("No such data element with tag {}", tag))]
    NoSuchDataElementTag { tag: Tag, backtrace: Backtrace },
    #[snafu(display("Unknown attribute name `{}`", name))]
    NoSuchAttributeName { name: String, backtrace: Backtrace },
}

impl AccessError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccessError::NoSuchAttributeName { .. } => ErrorKind::BadRequest,
            _ => ErrorKind::InexistentItem,
        }
    }
}

pub type Result<T, E = ReadError> = std::result::Result<T, E>;

/// A root data set together with the file meta group it was read with.
#[derive(Debug, Clone, PartialEq)]
pub struct FileDicomObject<O> {
    meta: FileMetaTable,
    obj: O,
}

impl<O> FileDicomObject<O> {
    /// Create a file DICOM object from its parts.
    pub fn new(meta: FileMetaTable, obj: O) -> Self {
        FileDicomObject { meta, obj }
    }

    /// The file meta group.
    pub fn meta(&self) -> &FileMetaTable {
        &self.meta
    }

    /// The file meta group, for changes.
    ///
    /// The transfer syntax of the table decides
    /// how the data set is written.
    pub fn meta_mut(&mut self) -> &mut FileMetaTable {
        &mut self.meta
    }

    /// Drop the file meta group.
    pub fn into_inner(self) -> O {
        self.obj
    }

    /// Split into the meta table and the data set.
    pub fn into_parts(self) -> (FileMetaTable, O) {
        (self.meta, self.obj)
    }
}

impl FileDicomObject<InMemDicomObject> {
    /// The transfer syntax declared in the file meta group.
    pub fn transfer_syntax(&self) -> Option<TransferSyntax> {
        TransferSyntax::from_uid(self.meta.transfer_syntax())
    }

    /// Write a Part-10 file at the given path,
    /// replacing any existing file.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), WriteError> {
        let path = path.as_ref();
        let file = File::create(path).context(WriteFileSnafu { filename: path })?;
        let mut to = BufWriter::new(file);
        self.write_all(&mut to)?;
        to.flush().context(WriteFileSnafu { filename: path })?;
        Ok(())
    }

    /// Write a Part-10 stream: an empty preamble,
    /// the magic code, the meta group and the data set.
    pub fn write_all<W: Write>(&self, mut to: W) -> Result<(), WriteError> {
        to.write_all(&[0_u8; 128][..]).context(WritePreambleSnafu)?;
        self.meta.write(&mut to).context(PrintMetaDataSetSnafu)?;
        self.write_dataset(to)
    }

    /// Write the file meta group set and the data set into the given writer,
    /// without the preamble.
    pub fn write_meta_and_dataset<W: Write>(&self, mut to: W) -> Result<(), WriteError> {
        self.meta.write(&mut to).context(PrintMetaDataSetSnafu)?;
        self.write_dataset(to)
    }

    /// Write the data set alone, in the transfer syntax of the meta group.
    pub fn write_dataset<W: Write>(&self, to: W) -> Result<(), WriteError> {
        let ts = self
            .transfer_syntax()
            .context(WriteUnsupportedTransferSyntaxSnafu {
                uid: self.meta.transfer_syntax(),
            })?;
        self.obj.write_dataset(to, ts)
    }
}

impl<O> Deref for FileDicomObject<O> {
    type Target = O;

    fn deref(&self) -> &Self::Target {
        &self.obj
    }
}

impl<O> DerefMut for FileDicomObject<O> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.obj
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmkit_core::VR;
    use dcmkit_dictionary_std::uids;

    fn sample() -> DefaultDicomObject {
        let mut obj = InMemDicomObject::new_empty();
        obj.put(InMemElement::new((0x0008, 0x0018), VR::UI, "1.2.3.4"));
        obj.put(InMemElement::new((0x0010, 0x0010), VR::PN, "Doe^John"));
        obj.with_meta(
            FileMetaTableBuilder::new()
                .transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN)
                .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.7")
                .media_storage_sop_instance_uid("1.2.3.4"),
        )
        .unwrap()
    }

    #[test]
    fn write_preamble_and_magic() {
        let obj = sample();
        let mut out = Vec::new();
        obj.write_all(&mut out).unwrap();
        assert!(out[..128].iter().all(|&b| b == 0));
        assert_eq!(&out[128..132], b"DICM");
        // group length element right after the magic code
        assert_eq!(&out[132..138], &[0x02, 0x00, 0x00, 0x00, b'U', b'L']);
    }

    #[test]
    fn deref_to_data_set() {
        let mut obj = sample();
        assert_eq!(
            obj.element(Tag(0x0010, 0x0010)).unwrap().to_str().as_deref(),
            Some("Doe^John")
        );
        obj.remove(Tag(0x0010, 0x0010));
        assert!(obj.get(Tag(0x0010, 0x0010)).is_none());
        assert_eq!(obj.transfer_syntax(), Some(TransferSyntax::LittleEndianExplicit));
    }

    #[test]
    fn unknown_transfer_syntax_is_not_written() {
        let mut obj = sample();
        obj.meta_mut().set_transfer_syntax("1.2.3.999");
        let err = obj.write_dataset(Vec::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotImplemented);
    }
}
