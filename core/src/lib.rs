#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core library of dcmkit, containing the concepts
//! and data types shared by every other crate of the toolkit.
//!
//! The current structure of this crate is as follows:
//!
//! - [`header`] comprises the data types of a DICOM element header:
//!   tags, value representations and value lengths.
//! - [`transfer_syntax`] enumerates the transfer syntaxes
//!   known to the toolkit.
//! - [`path`] describes the location of an attribute
//!   at an arbitrary depth of nested sequences.
//! - [`dictionary`] describes common behavior of DICOM data dictionaries.
//! - [`error`] contains the error kinds shared across the toolkit.
//!
//! [`dictionary`]: ./dictionary/index.html
//! [`error`]: ./error/index.html
//! [`header`]: ./header/index.html
//! [`path`]: ./path/index.html
//! [`transfer_syntax`]: ./transfer_syntax/index.html

pub mod dictionary;
pub mod error;
pub mod header;
pub mod path;
pub mod transfer_syntax;

pub use dictionary::{DataDictionary, DictionaryEntry};
pub use error::{Error, ErrorKind, Result};
pub use header::{Length, Tag, VR};
pub use path::{DicomPath, DicomPathStep};
pub use transfer_syntax::TransferSyntax;

// re-export crates that are part of the public API
pub use smallvec;
