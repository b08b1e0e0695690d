//! In-memory image buffers manipulated by the image kernels.
use byteorder::{ByteOrder, LittleEndian};
use num_traits::{Bounded, NumCast, ToPrimitive};
use snafu::ensure;

use crate::{BadImageSnafu, Result};

/// The memory layout of the pixels in an [`Image`].
///
/// Multi-byte samples are always stored in little endian.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum PixelFormat {
    /// 8-bit unsigned gray levels
    Grayscale8,
    /// 16-bit unsigned gray levels
    Grayscale16,
    /// 16-bit signed gray levels
    SignedGrayscale16,
    /// 32-bit unsigned gray levels
    Grayscale32,
    /// 32-bit floating point gray levels
    Float32,
    /// 8-bit red, green and blue samples, interleaved
    RGB24,
    /// 16-bit red, green and blue samples, interleaved
    RGB48,
}

impl PixelFormat {
    /// The number of samples of each pixel.
    pub fn channels(self) -> u32 {
        match self {
            PixelFormat::RGB24 | PixelFormat::RGB48 => 3,
            _ => 1,
        }
    }

    /// The number of bytes taken by one pixel.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Grayscale8 => 1,
            PixelFormat::Grayscale16 | PixelFormat::SignedGrayscale16 => 2,
            PixelFormat::Grayscale32 | PixelFormat::Float32 => 4,
            PixelFormat::RGB24 => 3,
            PixelFormat::RGB48 => 6,
        }
    }
}

/// A pixel sample type which can live in an [`Image`].
pub trait Sample: Copy + PartialOrd + Bounded + NumCast + ToPrimitive + Default {
    /// The size of the sample in bytes
    const SIZE: usize;

    /// Whether the sample is a floating point number
    const FLOAT: bool = false;

    /// Read the sample from the start of `bytes`.
    fn read(bytes: &[u8]) -> Self;

    /// Write the sample to the start of `bytes`.
    fn write(self, bytes: &mut [u8]);
}

impl Sample for u8 {
    const SIZE: usize = 1;

    #[inline]
    fn read(bytes: &[u8]) -> Self {
        bytes[0]
    }

    #[inline]
    fn write(self, bytes: &mut [u8]) {
        bytes[0] = self;
    }
}

macro_rules! impl_sample {
    ($t: ty, $size: expr, $read: ident, $write: ident) => {
        impl Sample for $t {
            const SIZE: usize = $size;

            #[inline]
            fn read(bytes: &[u8]) -> Self {
                LittleEndian::$read(bytes)
            }

            #[inline]
            fn write(self, bytes: &mut [u8]) {
                LittleEndian::$write(bytes, self)
            }
        }
    };
}

impl_sample!(u16, 2, read_u16, write_u16);
impl_sample!(i16, 2, read_i16, write_i16);
impl_sample!(u32, 4, read_u32, write_u32);

impl Sample for f32 {
    const SIZE: usize = 4;
    const FLOAT: bool = true;

    #[inline]
    fn read(bytes: &[u8]) -> Self {
        LittleEndian::read_f32(bytes)
    }

    #[inline]
    fn write(self, bytes: &mut [u8]) {
        LittleEndian::write_f32(bytes, self)
    }
}

/// An uncompressed image with tightly packed rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    format: PixelFormat,
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Image {
    /// Create a new image with all samples set to zero.
    pub fn new(format: PixelFormat, width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * format.bytes_per_pixel();
        Image {
            format,
            width,
            height,
            data: vec![0; len],
        }
    }

    /// Wrap an existing buffer of pixel data.
    ///
    /// Fails if the buffer length does not match the image dimensions.
    pub fn from_raw(format: PixelFormat, width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * format.bytes_per_pixel();
        ensure!(
            data.len() == expected,
            BadImageSnafu {
                reason: format!(
                    "expected {} bytes for a {}x{} image, got {}",
                    expected,
                    width,
                    height,
                    data.len()
                ),
            }
        );
        Ok(Image {
            format,
            width,
            height,
            data,
        })
    }

    /// Create an image from a sequence of samples in row-major order.
    pub fn from_samples<T: Sample>(
        format: PixelFormat,
        width: u32,
        height: u32,
        samples: &[T],
    ) -> Result<Self> {
        let mut data = vec![0; samples.len() * T::SIZE];
        for (chunk, s) in data.chunks_exact_mut(T::SIZE).zip(samples) {
            s.write(chunk);
        }
        Image::from_raw(format, width, height, data)
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The number of bytes in a row of pixels.
    pub fn pitch(&self) -> usize {
        self.width as usize * self.format.bytes_per_pixel()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Whether the image has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Obtain the bytes of the row at `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y` is out of bounds.
    pub fn row(&self, y: u32) -> &[u8] {
        let pitch = self.pitch();
        let start = y as usize * pitch;
        &self.data[start..start + pitch]
    }

    /// Obtain the bytes of the row at `y` for writing.
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let pitch = self.pitch();
        let start = y as usize * pitch;
        &mut self.data[start..start + pitch]
    }

    #[inline]
    fn sample_offset<T: Sample>(&self, x: u32, y: u32, channel: u32) -> usize {
        let channels = self.format.channels() as usize;
        y as usize * self.pitch() + (x as usize * channels + channel as usize) * T::SIZE
    }

    /// Read one sample of the pixel at `(x, y)`.
    ///
    /// The sample type must match the image's pixel format.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn sample<T: Sample>(&self, x: u32, y: u32, channel: u32) -> T {
        let offset = self.sample_offset::<T>(x, y, channel);
        T::read(&self.data[offset..])
    }

    /// Write one sample of the pixel at `(x, y)`.
    #[inline]
    pub fn set_sample<T: Sample>(&mut self, x: u32, y: u32, channel: u32, value: T) {
        let offset = self.sample_offset::<T>(x, y, channel);
        value.write(&mut self.data[offset..]);
    }

    /// Collect all samples of the image in row-major order.
    pub fn to_samples<T: Sample>(&self) -> Vec<T> {
        self.data.chunks_exact(T::SIZE).map(T::read).collect()
    }

    /// Convert the image into a dynamic image of the `image` crate.
    ///
    /// Returns `None` for pixel formats without a counterpart.
    #[cfg(feature = "image")]
    pub fn to_dynamic_image(&self) -> Option<image::DynamicImage> {
        use image::{DynamicImage, ImageBuffer};

        let (w, h) = (self.width, self.height);
        match self.format {
            PixelFormat::Grayscale8 => {
                ImageBuffer::from_raw(w, h, self.data.clone()).map(DynamicImage::ImageLuma8)
            }
            PixelFormat::Grayscale16 => {
                ImageBuffer::from_raw(w, h, self.to_samples::<u16>()).map(DynamicImage::ImageLuma16)
            }
            PixelFormat::RGB24 => {
                ImageBuffer::from_raw(w, h, self.data.clone()).map(DynamicImage::ImageRgb8)
            }
            PixelFormat::RGB48 => {
                ImageBuffer::from_raw(w, h, self.to_samples::<u16>()).map(DynamicImage::ImageRgb16)
            }
            PixelFormat::Float32 => {
                let rgb: Vec<f32> = self
                    .to_samples::<f32>()
                    .into_iter()
                    .flat_map(|v| [v, v, v])
                    .collect();
                ImageBuffer::from_raw(w, h, rgb).map(DynamicImage::ImageRgb32F)
            }
            PixelFormat::SignedGrayscale16 | PixelFormat::Grayscale32 => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_little_endian() {
        let mut image = Image::new(PixelFormat::SignedGrayscale16, 2, 2);
        image.set_sample(1, 0, 0, -2i16);
        image.set_sample(0, 1, 0, 0x0102i16);
        assert_eq!(image.data(), &[0, 0, 0xFE, 0xFF, 0x02, 0x01, 0, 0]);
        assert_eq!(image.sample::<i16>(1, 0, 0), -2);
        assert_eq!(image.to_samples::<i16>(), vec![0, -2, 0x0102, 0]);
    }

    #[test]
    fn rgb_pixels_interleave_channels() {
        let image =
            Image::from_samples(PixelFormat::RGB24, 2, 1, &[1u8, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(image.pitch(), 6);
        assert_eq!(image.sample::<u8>(1, 0, 0), 4);
        assert_eq!(image.sample::<u8>(1, 0, 2), 6);
    }

    #[test]
    fn buffer_length_is_checked() {
        let err = Image::from_raw(PixelFormat::Grayscale16, 2, 2, vec![0; 6]).unwrap_err();
        assert_eq!(err.kind(), dcmkit_core::ErrorKind::BadFileFormat);
    }
}
