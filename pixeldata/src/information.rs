//! Interpretation of the image pixel module attributes.
use dcmkit_core::{TransferSyntax, VR};
use dcmkit_object::{DicomMap, InMemDicomObject, USEFUL_TAG_LENGTH};
use snafu::{ensure, ResultExt};
use tracing::warn;

use crate::attribute::{self, PixelRepresentation};
use crate::image::PixelFormat;
use crate::{AttributeSnafu, BadImageSnafu, NotImplementedSnafu, Result, UnsupportedImageSnafu};

const RT_STRUCT_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.3";

/// An interpreted representation of the DICOM _Photometric Interpretation_ attribute.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum PhotometricInterpretation {
    Monochrome1,
    Monochrome2,
    PaletteColor,
    Rgb,
    Hsv,
    Argb,
    Cmyk,
    YbrFull,
    YbrFull422,
    YbrPartial420,
    YbrPartial422,
    YbrIct,
    YbrRct,
    Unknown,
}

impl PhotometricInterpretation {
    /// Interpret the text of the attribute, case insensitively.
    pub fn from_text(text: &str) -> Self {
        match text.trim().to_ascii_uppercase().as_str() {
            "MONOCHROME1" => PhotometricInterpretation::Monochrome1,
            "MONOCHROME2" => PhotometricInterpretation::Monochrome2,
            "PALETTE COLOR" => PhotometricInterpretation::PaletteColor,
            "RGB" => PhotometricInterpretation::Rgb,
            "HSV" => PhotometricInterpretation::Hsv,
            "ARGB" => PhotometricInterpretation::Argb,
            "CMYK" => PhotometricInterpretation::Cmyk,
            "YBR_FULL" => PhotometricInterpretation::YbrFull,
            "YBR_FULL_422" => PhotometricInterpretation::YbrFull422,
            "YBR_PARTIAL_420" => PhotometricInterpretation::YbrPartial420,
            "YBR_PARTIAL_422" => PhotometricInterpretation::YbrPartial422,
            "YBR_ICT" => PhotometricInterpretation::YbrIct,
            "YBR_RCT" => PhotometricInterpretation::YbrRct,
            _ => PhotometricInterpretation::Unknown,
        }
    }

    /// Whether this is one of the grayscale interpretations.
    pub fn is_monochrome(self) -> bool {
        matches!(
            self,
            PhotometricInterpretation::Monochrome1 | PhotometricInterpretation::Monochrome2
        )
    }
}

/// The geometry and sample layout of the pixel data in a DICOM instance.
///
/// Only uncompressed pixel data is described accurately:
/// the frame size is the number of bytes of one raw frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageInformation {
    width: u32,
    height: u32,
    number_of_frames: u32,
    samples_per_pixel: u32,
    bits_allocated: u32,
    bits_stored: u32,
    high_bit: u32,
    signed: bool,
    planar: bool,
    photometric: PhotometricInterpretation,
    bytes_per_value: u32,
}

impl ImageInformation {
    /// Interpret the image attributes of a data set summary.
    pub fn from_map(map: &DicomMap) -> Result<Self> {
        if attribute::sop_class_uid(map) == Some(RT_STRUCT_STORAGE) {
            warn!("Image information should not be computed for RT-STRUCT instances");
        }

        let photometric = match map.get_str(dcmkit_dictionary_std::tags::PHOTOMETRIC_INTERPRETATION) {
            Some(text) => PhotometricInterpretation::from_text(text.trim_end_matches('\0')),
            None => PhotometricInterpretation::Unknown,
        };

        let width = attribute::cols(map).context(AttributeSnafu)?;
        let height = attribute::rows(map).context(AttributeSnafu)?;
        let bits_allocated = attribute::bits_allocated(map).context(AttributeSnafu)?;
        let samples_per_pixel = attribute::samples_per_pixel(map).context(AttributeSnafu)?;
        let bits_stored = attribute::bits_stored(map)
            .context(AttributeSnafu)?
            .unwrap_or(bits_allocated);

        ensure!(
            bits_stored <= bits_allocated,
            NotImplementedSnafu {
                reason: format!(
                    "bits stored ({}) exceed bits allocated ({})",
                    bits_stored, bits_allocated
                ),
            }
        );

        let high_bit = attribute::high_bit(map)
            .context(AttributeSnafu)?
            .unwrap_or_else(|| bits_stored.saturating_sub(1));
        ensure!(
            high_bit < bits_allocated && high_bit + 1 >= bits_stored,
            BadImageSnafu {
                reason: format!(
                    "high bit {} does not fit {} bits stored in {} bits allocated",
                    high_bit, bits_stored, bits_allocated
                ),
            }
        );
        let signed =
            attribute::pixel_representation(map).context(AttributeSnafu)? == PixelRepresentation::Signed;
        let planar_configuration = if samples_per_pixel > 1 {
            // only meaningful for color images
            attribute::planar_configuration(map).context(AttributeSnafu)?
        } else {
            0
        };
        let number_of_frames = attribute::number_of_frames(map).context(AttributeSnafu)?;

        ensure!(
            matches!(bits_allocated, 1 | 8 | 16 | 24 | 32),
            UnsupportedImageSnafu {
                reason: format!("unsupported bits allocated: {}", bits_allocated),
            }
        );
        ensure!(
            number_of_frames > 0,
            UnsupportedImageSnafu {
                reason: "the image has no frames",
            }
        );
        ensure!(
            planar_configuration <= 1,
            UnsupportedImageSnafu {
                reason: format!("bad planar configuration: {}", planar_configuration),
            }
        );
        ensure!(
            samples_per_pixel > 0,
            UnsupportedImageSnafu {
                reason: "the image has no samples per pixel",
            }
        );

        let bytes_per_value = if bits_stored == 1 {
            ensure!(
                bits_allocated == 1,
                BadImageSnafu {
                    reason: "a single bit is stored in more than one bit",
                }
            );
            ensure!(
                width % 8 == 0,
                BadImageSnafu {
                    reason: format!("1-bit image width {} is not a multiple of 8", width),
                }
            );
            0
        } else {
            bits_allocated / 8
        };

        Ok(ImageInformation {
            width,
            height,
            number_of_frames,
            samples_per_pixel,
            bits_allocated,
            bits_stored,
            high_bit,
            signed,
            planar: planar_configuration == 1,
            photometric,
            bytes_per_value,
        })
    }

    /// Interpret the image attributes of a data set.
    pub fn from_object(obj: &InMemDicomObject) -> Result<Self> {
        Self::from_map(&obj.extract_summary(USEFUL_TAG_LENGTH))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn number_of_frames(&self) -> u32 {
        self.number_of_frames
    }

    /// The number of samples per pixel.
    pub fn channel_count(&self) -> u32 {
        self.samples_per_pixel
    }

    pub fn bits_allocated(&self) -> u32 {
        self.bits_allocated
    }

    pub fn bits_stored(&self) -> u32 {
        self.bits_stored
    }

    pub fn high_bit(&self) -> u32 {
        self.high_bit
    }

    pub fn is_signed(&self) -> bool {
        self.signed
    }

    /// Whether the color planes are stored one after the other.
    pub fn is_planar(&self) -> bool {
        self.planar
    }

    pub fn photometric_interpretation(&self) -> PhotometricInterpretation {
        self.photometric
    }

    /// The number of bytes of a single sample,
    /// or 0 for images packing one bit per pixel.
    pub fn bytes_per_value(&self) -> u32 {
        self.bytes_per_value
    }

    /// The number of bits to shift a raw sample right
    /// so that its stored bits become the least significant ones.
    pub fn shift(&self) -> u32 {
        (self.high_bit + 1).saturating_sub(self.bits_stored)
    }

    /// The number of bytes of one frame of raw pixel data.
    pub fn frame_size(&self) -> Result<usize> {
        let (width, height) = (self.width as usize, self.height as usize);
        if self.bits_allocated == 1 {
            ensure!(
                self.samples_per_pixel == 1,
                UnsupportedImageSnafu {
                    reason: "1-bit images must have a single channel",
                }
            );
            Ok(height * width / 8)
        } else {
            Ok(height * width * self.bytes_per_value as usize * self.samples_per_pixel as usize)
        }
    }

    /// Determine the pixel format that can hold the samples of this image,
    /// if any.
    ///
    /// With `ignore_photometric_interpretation`,
    /// the layout is decided from the sample description alone.
    pub fn extract_pixel_format(&self, ignore_photometric_interpretation: bool) -> Option<PixelFormat> {
        let pi = self.photometric;
        let channels = self.samples_per_pixel;

        if pi == PhotometricInterpretation::PaletteColor && channels == 1 && !self.signed {
            match self.bits_stored {
                8 => return Some(PixelFormat::RGB24),
                16 => return Some(PixelFormat::RGB48),
                _ => {}
            }
        }

        if (pi.is_monochrome() || ignore_photometric_interpretation) && channels == 1 {
            match (self.bits_stored, self.bits_allocated, self.signed) {
                (8, _, false) => return Some(PixelFormat::Grayscale8),
                (_, 16, false) => return Some(PixelFormat::Grayscale16),
                (_, 16, true) => return Some(PixelFormat::SignedGrayscale16),
                (_, 32, false) => return Some(PixelFormat::Grayscale32),
                (1, _, false) => return Some(PixelFormat::Grayscale8),
                _ => {}
            }
        }

        if channels == 3
            && !self.signed
            && (pi == PhotometricInterpretation::Rgb || ignore_photometric_interpretation)
        {
            match self.bits_stored {
                8 => return Some(PixelFormat::RGB24),
                16 => return Some(PixelFormat::RGB48),
                _ => {}
            }
        }

        None
    }
}

/// Guess the value representation of _Pixel Data_
/// when it cannot be read from the stream,
/// as in implicit VR transfer syntaxes.
///
/// Unknown transfer syntaxes and encapsulated pixel data yield `OB`.
/// A missing _Bits Allocated_ is taken as 8.
pub fn guess_pixel_data_vr(ts: Option<TransferSyntax>, bits_allocated: Option<u32>) -> VR {
    let bits_allocated = bits_allocated.unwrap_or(8);
    match ts {
        Some(TransferSyntax::LittleEndianExplicit) | Some(TransferSyntax::BigEndianExplicit) => {
            if bits_allocated > 8 {
                VR::OW
            } else {
                VR::OB
            }
        }
        Some(TransferSyntax::LittleEndianImplicit) => VR::OW,
        _ => VR::OB,
    }
}
