//! This crate interprets the pixel data of DICOM instances
//! and provides the image processing kernels used to display them.
//!
//! - [`ImageInformation`] describes the geometry and sample layout of an image,
//!   from the attributes of its image pixel module.
//! - [`IntegerPixelAccessor`] reads integer samples out of uncompressed pixel data,
//!   in any frame, channel and planar configuration.
//! - The [`processing`] module holds kernels working on [`Image`] buffers:
//!   windowing, linear rescaling, polygon filling, convolution,
//!   resizing and flipping.
//!
//! Decoding of compressed transfer syntaxes is out of the scope of this crate.
//!
//! # Example
//!
//! ```
//! # use dcmkit_core::VR;
//! # use dcmkit_dictionary_std::tags;
//! # use dcmkit_object::{InMemDicomObject, InMemElement, Value};
//! use dcmkit_pixeldata::{
//!     processing, Image, ImageInformation, IntegerPixelAccessor, PixelFormat, Windowing,
//! };
//!
//! let obj = InMemDicomObject::from_element_iter(vec![
//!     InMemElement::new(tags::ROWS, VR::US, Value::from_u16(1)),
//!     InMemElement::new(tags::COLUMNS, VR::US, Value::from_u16(2)),
//!     InMemElement::new(tags::BITS_ALLOCATED, VR::US, Value::from_u16(16)),
//!     InMemElement::new(tags::PHOTOMETRIC_INTERPRETATION, VR::CS, "MONOCHROME2"),
//! ]);
//! let info = ImageInformation::from_object(&obj)?;
//!
//! let pixel_data = [0x00, 0x00, 0x00, 0x04];
//! let accessor = IntegerPixelAccessor::new(info, &pixel_data)?;
//! assert_eq!(accessor.value(1, 0, 0), 1024);
//!
//! let frame = accessor.decode_frame()?;
//! let mut display = Image::new(PixelFormat::Grayscale8, 2, 1);
//! processing::apply_windowing(&mut display, &frame, &Windowing::new(512., 1024.))?;
//! assert_eq!(display.to_samples::<u8>(), vec![0, 255]);
//! # Ok::<(), dcmkit_pixeldata::Error>(())
//! ```

use dcmkit_core::ErrorKind;
use snafu::{Backtrace, Snafu};

pub mod accessor;
pub mod attribute;
pub mod image;
pub mod information;
pub mod processing;
pub mod transform;

pub use crate::accessor::IntegerPixelAccessor;
pub use crate::image::{Image, PixelFormat, Sample};
pub use crate::information::{guess_pixel_data_vr, ImageInformation, PhotometricInterpretation};
pub use crate::transform::{Rescale, Windowing};

#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// An image attribute is missing or could not be parsed.
    #[snafu(display("Could not read image attribute"))]
    Attribute {
        #[snafu(backtrace)]
        source: attribute::GetAttributeError,
    },
    #[snafu(display("Not implemented: {}", reason))]
    NotImplemented { reason: String, backtrace: Backtrace },
    /// The image layout is valid but cannot be handled.
    #[snafu(display("Incompatible image format: {}", reason))]
    UnsupportedImage { reason: String, backtrace: Backtrace },
    /// The pixel data does not match the image description.
    #[snafu(display("Bad image: {}", reason))]
    BadImage { reason: String, backtrace: Backtrace },
    #[snafu(display("Incompatible image size: {}", reason))]
    IncompatibleSize { reason: String, backtrace: Backtrace },
    #[snafu(display("Parameter out of range: {}", reason))]
    OutOfRange { reason: String, backtrace: Backtrace },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Attribute { .. } | Error::NotImplemented { .. } => ErrorKind::NotImplemented,
            Error::UnsupportedImage { .. } => ErrorKind::IncompatibleImageFormat,
            Error::BadImage { .. } => ErrorKind::BadFileFormat,
            Error::IncompatibleSize { .. } => ErrorKind::IncompatibleImageSize,
            Error::OutOfRange { .. } => ErrorKind::ParameterOutOfRange,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
