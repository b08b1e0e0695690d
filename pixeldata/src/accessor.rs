//! Random access to the integer samples of uncompressed pixel data.
use snafu::ensure;

use crate::image::{Image, PixelFormat};
use crate::information::ImageInformation;
use crate::{BadImageSnafu, NotImplementedSnafu, OutOfRangeSnafu, Result, UnsupportedImageSnafu};

/// Reads integer sample values out of raw, uncompressed pixel data
/// described by an [`ImageInformation`].
///
/// Samples are assembled from little endian bytes,
/// shifted down to the stored bits and sign extended as needed.
#[derive(Debug, Clone)]
pub struct IntegerPixelAccessor<'a> {
    information: ImageInformation,
    pixel_data: &'a [u8],
    frame: u32,
    frame_offset: usize,
    row_offset: usize,
    mask: u32,
    sign_mask: u32,
}

impl<'a> IntegerPixelAccessor<'a> {
    /// Create an accessor over the given pixel data,
    /// which must hold every frame of the image.
    pub fn new(information: ImageInformation, pixel_data: &'a [u8]) -> Result<Self> {
        ensure!(
            information.bits_allocated() <= 32
                && (1..32).contains(&information.bits_stored()),
            NotImplementedSnafu {
                reason: format!(
                    "cannot access samples of {} bits allocated and {} bits stored",
                    information.bits_allocated(),
                    information.bits_stored()
                ),
            }
        );

        let frame_offset = information.frame_size()?;
        let frames = information.number_of_frames() as usize;
        ensure!(
            frames * frame_offset <= pixel_data.len(),
            BadImageSnafu {
                reason: format!(
                    "{} frames of {} bytes do not fit in {} bytes of pixel data",
                    frames,
                    frame_offset,
                    pixel_data.len()
                ),
            }
        );

        let bits_stored = information.bits_stored();
        let (mask, sign_mask) = if information.is_signed() {
            ((1u32 << (bits_stored - 1)) - 1, 1u32 << (bits_stored - 1))
        } else {
            ((1u32 << bits_stored) - 1, 0)
        };

        let width = information.width() as usize;
        let bytes_per_value = information.bytes_per_value() as usize;
        let row_offset = if information.is_planar() {
            width * bytes_per_value
        } else if information.bits_allocated() == 1 {
            ensure!(
                information.channel_count() == 1,
                UnsupportedImageSnafu {
                    reason: "1-bit images must have a single channel",
                }
            );
            width / 8
        } else {
            width * bytes_per_value * information.channel_count() as usize
        };

        Ok(IntegerPixelAccessor {
            information,
            pixel_data,
            frame: 0,
            frame_offset,
            row_offset,
            mask,
            sign_mask,
        })
    }

    pub fn information(&self) -> &ImageInformation {
        &self.information
    }

    pub fn current_frame(&self) -> u32 {
        self.frame
    }

    /// Select the frame read by subsequent accesses.
    pub fn set_current_frame(&mut self, frame: u32) -> Result<()> {
        ensure!(
            frame < self.information.number_of_frames(),
            OutOfRangeSnafu {
                reason: format!(
                    "frame {} requested from an image of {} frames",
                    frame,
                    self.information.number_of_frames()
                ),
            }
        );
        self.frame = frame;
        Ok(())
    }

    /// Obtain the sample value of channel `channel`
    /// of the pixel at `(x, y)` in the current frame.
    ///
    /// Packed 1-bit images yield either 0 or 255.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates or the channel are out of bounds.
    pub fn value(&self, x: u32, y: u32, channel: u32) -> i32 {
        assert!(x < self.information.width() && y < self.information.height());
        assert!(channel < self.information.channel_count());

        let base = y as usize * self.row_offset + self.frame as usize * self.frame_offset;

        if self.information.bits_allocated() == 1 {
            let byte = self.pixel_data[base + x as usize / 8];
            return if byte & (1 << (x % 8)) != 0 { 255 } else { 0 };
        }

        let bytes_per_value = self.information.bytes_per_value() as usize;
        let channels = self.information.channel_count() as usize;
        let offset = if self.information.is_planar() {
            base + channel as usize * self.frame_offset / channels + x as usize * bytes_per_value
        } else {
            base + channel as usize * bytes_per_value + x as usize * channels * bytes_per_value
        };

        let v = self.pixel_data[offset..offset + bytes_per_value]
            .iter()
            .rev()
            .fold(0u32, |acc, &b| (acc << 8) | u32::from(b));
        let v = v >> self.information.shift();

        if v & self.sign_mask != 0 {
            // two's complement
            (v & self.mask) as i32 - self.mask as i32 - 1
        } else {
            (v & self.mask) as i32
        }
    }

    /// Determine the minimum and maximum sample values of the current frame,
    /// over all channels.
    ///
    /// An empty image yields `(0, 0)`.
    pub fn extreme_values(&self) -> (i32, i32) {
        let info = &self.information;
        if info.width() == 0 || info.height() == 0 {
            return (0, 0);
        }

        let mut min = i32::MAX;
        let mut max = i32::MIN;
        for y in 0..info.height() {
            for x in 0..info.width() {
                for c in 0..info.channel_count() {
                    let v = self.value(x, y, c);
                    min = min.min(v);
                    max = max.max(v);
                }
            }
        }
        (min, max)
    }

    /// Copy the current frame into an image buffer
    /// of the pixel format suited to its samples.
    pub fn decode_frame(&self) -> Result<Image> {
        let info = &self.information;
        let format = info.extract_pixel_format(true);
        let format = match format {
            Some(
                f @ (PixelFormat::Grayscale8
                | PixelFormat::Grayscale16
                | PixelFormat::SignedGrayscale16
                | PixelFormat::Grayscale32),
            ) => f,
            Some(f @ (PixelFormat::RGB24 | PixelFormat::RGB48)) if info.channel_count() == 3 => f,
            _ => {
                return UnsupportedImageSnafu {
                    reason: "no pixel format can hold the samples of this image",
                }
                .fail()
            }
        };

        let mut image = Image::new(format, info.width(), info.height());
        for y in 0..info.height() {
            for x in 0..info.width() {
                for c in 0..info.channel_count() {
                    let v = self.value(x, y, c);
                    match format {
                        PixelFormat::Grayscale8 | PixelFormat::RGB24 => {
                            image.set_sample(x, y, c, v as u8)
                        }
                        PixelFormat::Grayscale16 | PixelFormat::RGB48 => {
                            image.set_sample(x, y, c, v as u16)
                        }
                        PixelFormat::SignedGrayscale16 => image.set_sample(x, y, c, v as i16),
                        PixelFormat::Grayscale32 | PixelFormat::Float32 => {
                            image.set_sample(x, y, c, v as u32)
                        }
                    }
                }
            }
        }
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmkit_core::ErrorKind;
    use dcmkit_dictionary_std::tags;
    use dcmkit_object::DicomMap;

    fn information(entries: &[(dcmkit_core::Tag, &str)]) -> ImageInformation {
        let mut map = DicomMap::new();
        for (tag, value) in entries {
            map.set_string(*tag, *value);
        }
        ImageInformation::from_map(&map).unwrap()
    }

    #[test]
    fn packed_bits_are_read_least_significant_first() {
        let info = information(&[
            (tags::ROWS, "1"),
            (tags::COLUMNS, "8"),
            (tags::BITS_ALLOCATED, "1"),
            (tags::PHOTOMETRIC_INTERPRETATION, "MONOCHROME2"),
        ]);
        let data = [0b1000_0001];
        let accessor = IntegerPixelAccessor::new(info, &data).unwrap();
        assert_eq!(accessor.value(0, 0, 0), 255);
        assert_eq!(accessor.value(1, 0, 0), 0);
        assert_eq!(accessor.value(6, 0, 0), 0);
        assert_eq!(accessor.value(7, 0, 0), 255);
        assert_eq!(accessor.extreme_values(), (0, 255));
    }

    #[test]
    fn signed_samples_are_sign_extended() {
        let info = information(&[
            (tags::ROWS, "1"),
            (tags::COLUMNS, "3"),
            (tags::BITS_ALLOCATED, "16"),
            (tags::BITS_STORED, "12"),
            (tags::HIGH_BIT, "11"),
            (tags::PIXEL_REPRESENTATION, "1"),
        ]);
        // 0xFFF is -1 over 12 bits, 0x800 is the lowest value
        let data = [0xFF, 0x0F, 0x00, 0x08, 0xFF, 0x07];
        let accessor = IntegerPixelAccessor::new(info, &data).unwrap();
        assert_eq!(accessor.value(0, 0, 0), -1);
        assert_eq!(accessor.value(1, 0, 0), -2048);
        assert_eq!(accessor.value(2, 0, 0), 2047);
        assert_eq!(accessor.extreme_values(), (-2048, 2047));
    }

    #[test]
    fn samples_are_shifted_and_masked() {
        let info = information(&[
            (tags::ROWS, "1"),
            (tags::COLUMNS, "1"),
            (tags::BITS_ALLOCATED, "16"),
            (tags::BITS_STORED, "8"),
            (tags::HIGH_BIT, "11"),
        ]);
        let data = [0x5A, 0xF3];
        let accessor = IntegerPixelAccessor::new(info, &data).unwrap();
        assert_eq!(accessor.value(0, 0, 0), 0x35);
    }

    #[test]
    fn frames_are_selected() {
        let info = information(&[
            (tags::ROWS, "1"),
            (tags::COLUMNS, "2"),
            (tags::BITS_ALLOCATED, "8"),
            (tags::NUMBER_OF_FRAMES, "2"),
        ]);
        let data = [1, 2, 3, 4];
        let mut accessor = IntegerPixelAccessor::new(info, &data).unwrap();
        assert_eq!(accessor.value(1, 0, 0), 2);
        accessor.set_current_frame(1).unwrap();
        assert_eq!(accessor.current_frame(), 1);
        assert_eq!(accessor.value(1, 0, 0), 4);
        assert_eq!(accessor.extreme_values(), (3, 4));

        let err = accessor.set_current_frame(2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParameterOutOfRange);
        assert_eq!(accessor.current_frame(), 1);
    }

    #[test]
    fn truncated_pixel_data_is_refused() {
        let info = information(&[
            (tags::ROWS, "2"),
            (tags::COLUMNS, "2"),
            (tags::BITS_ALLOCATED, "16"),
        ]);
        let err = IntegerPixelAccessor::new(info, &[0; 7]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadFileFormat);
    }

    #[test]
    fn wide_samples_are_not_supported() {
        let info = information(&[
            (tags::ROWS, "1"),
            (tags::COLUMNS, "1"),
            (tags::BITS_ALLOCATED, "32"),
        ]);
        let err = IntegerPixelAccessor::new(info, &[0; 4]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotImplemented);
    }

    #[test]
    fn decode_signed_frame() {
        let info = information(&[
            (tags::ROWS, "1"),
            (tags::COLUMNS, "2"),
            (tags::BITS_ALLOCATED, "16"),
            (tags::PIXEL_REPRESENTATION, "1"),
            (tags::PHOTOMETRIC_INTERPRETATION, "MONOCHROME2"),
        ]);
        let data = [0xFB, 0xFF, 0xE8, 0x03];
        let accessor = IntegerPixelAccessor::new(info, &data).unwrap();
        let image = accessor.decode_frame().unwrap();
        assert_eq!(image.format(), PixelFormat::SignedGrayscale16);
        assert_eq!(image.to_samples::<i16>(), vec![-5, 1000]);
    }
}
