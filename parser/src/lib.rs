//! This crate provides interfaces and data structures for reading and writing
//! DICOM data sets in accordance to the DICOM standard,
//! at two layers of abstraction.
//!
//! - [`stream`] holds a cooperative, push-style [`DicomStreamReader`]
//!   which walks a DICOM Part-10 byte stream block by block
//!   and reports its attributes to a [`StreamVisitor`],
//!   without ever holding more than one attribute value in memory.
//!   It is typically used to find the offset of the pixel data
//!   in an otherwise untouched file.
//! - [`dataset`] reads (and writes) a complete data set
//!   as a sequence of [`DataToken`]s,
//!   which other crates turn into an in-memory tree.
//!
//! The reading primitives shared by both layers
//! live in [`block`] and [`value`].
//!
//! [`DataToken`]: dataset::DataToken
pub mod block;
pub mod dataset;
pub mod error;
pub mod pixel_data;
pub mod stream;
pub mod value;

pub use block::BlockReader;
pub use dataset::{DataElementHeader, DataSetReader, DataSetWriter, DataToken};
pub use error::{Error, Result};
pub use pixel_data::{lookup_pixel_data_offset, PixelDataLocation};
pub use stream::{DicomStreamReader, StreamVisitor};
