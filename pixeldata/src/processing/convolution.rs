//! Separable convolution.
use snafu::ensure;

use crate::image::{Image, PixelFormat};
use crate::{NotImplementedSnafu, OutOfRangeSnafu, Result};

fn check_kernel(kernel: &[f32], anchor: usize) -> Result<f32> {
    ensure!(
        !kernel.is_empty() && anchor < kernel.len(),
        OutOfRangeSnafu {
            reason: format!("anchor {} out of a kernel of size {}", anchor, kernel.len()),
        }
    );
    Ok(kernel.iter().sum())
}

/// Convolve an 8-bit image in place with a separable kernel,
/// first along the rows, then along the columns.
///
/// Pixels outside of the image replicate the nearest border pixel.
/// The result is normalized by the product of the sums of both kernels,
/// then either rounded or truncated and saturated to `0..=255`.
pub fn separable_convolution(
    image: &mut Image,
    horizontal: &[f32],
    horizontal_anchor: usize,
    vertical: &[f32],
    vertical_anchor: usize,
    round: bool,
) -> Result<()> {
    let sum_h = check_kernel(horizontal, horizontal_anchor)?;
    let sum_v = check_kernel(vertical, vertical_anchor)?;

    ensure!(
        sum_h.abs() > f32::EPSILON && sum_v.abs() > f32::EPSILON,
        OutOfRangeSnafu {
            reason: "singular convolution kernel",
        }
    );

    let channels = match image.format() {
        PixelFormat::Grayscale8 => 1,
        PixelFormat::RGB24 => 3,
        format => {
            return NotImplementedSnafu {
                reason: format!("cannot convolve {:?}", format),
            }
            .fail()
        }
    };

    if image.is_empty() {
        return Ok(());
    }

    let normalization = 1. / (sum_h * sum_v);
    let width = image.width() as usize;
    let height = image.height() as usize;
    let row_len = width * channels;

    let clamp = |i: isize, len: usize| i.clamp(0, len as isize - 1) as usize;

    // horizontal pass
    let mut tmp = vec![0f32; row_len * height];
    for y in 0..height {
        let row = image.row(y as u32);
        let out = &mut tmp[y * row_len..(y + 1) * row_len];
        for x in 0..width {
            for c in 0..channels {
                out[x * channels + c] = horizontal
                    .iter()
                    .enumerate()
                    .map(|(k, w)| {
                        let sx = clamp(x as isize + k as isize - horizontal_anchor as isize, width);
                        f32::from(row[sx * channels + c]) * w
                    })
                    .sum();
            }
        }
    }

    // vertical pass
    for y in 0..height {
        let out = image.row_mut(y as u32);
        for (i, p) in out.iter_mut().enumerate() {
            let accumulator: f32 = vertical
                .iter()
                .enumerate()
                .map(|(k, w)| {
                    let sy = clamp(y as isize + k as isize - vertical_anchor as isize, height);
                    tmp[sy * row_len + i] * w
                })
                .sum();
            let accumulator = accumulator * normalization;

            *p = if accumulator <= 0. {
                0
            } else if accumulator >= 255. {
                255
            } else if round {
                accumulator.round() as u8
            } else {
                accumulator as u8
            };
        }
    }

    Ok(())
}

/// Smooth an 8-bit image with a 5x5 gaussian kernel.
pub fn smooth_gaussian_5x5(image: &mut Image, round: bool) -> Result<()> {
    const KERNEL: [f32; 5] = [1., 4., 6., 4., 1.];
    separable_convolution(image, &KERNEL, 2, &KERNEL, 2, round)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmkit_core::ErrorKind;

    #[test]
    fn box_blur_replicates_borders() {
        let mut image =
            Image::from_samples(PixelFormat::Grayscale8, 4, 1, &[0u8, 0, 90, 0]).unwrap();
        separable_convolution(&mut image, &[1., 1., 1.], 1, &[1.], 0, false).unwrap();
        assert_eq!(image.to_samples::<u8>(), vec![0, 30, 30, 30]);
    }

    #[test]
    fn rounding_and_truncation() {
        let source = Image::from_samples(PixelFormat::Grayscale8, 3, 1, &[0u8, 2, 0]).unwrap();

        let mut truncated = source.clone();
        separable_convolution(&mut truncated, &[1., 1., 1.], 1, &[1.], 0, false).unwrap();
        assert_eq!(truncated.to_samples::<u8>(), vec![0, 0, 0]);

        let mut rounded = source;
        separable_convolution(&mut rounded, &[1., 1., 1.], 1, &[1.], 0, true).unwrap();
        assert_eq!(rounded.to_samples::<u8>(), vec![1, 1, 1]);
    }

    #[test]
    fn vertical_pass_on_rgb() {
        let mut image = Image::from_samples(
            PixelFormat::RGB24,
            1,
            3,
            &[
                30u8, 0, 255, //
                0, 0, 255, //
                0, 30, 255,
            ],
        )
        .unwrap();
        separable_convolution(&mut image, &[1.], 0, &[1., 1., 1.], 1, false).unwrap();
        assert_eq!(
            image.to_samples::<u8>(),
            vec![
                20, 0, 255, //
                10, 10, 255, //
                0, 20, 255,
            ]
        );
    }

    #[test]
    fn smoothing_keeps_flat_images() {
        let mut image = Image::from_samples(PixelFormat::Grayscale8, 3, 3, &[77u8; 9]).unwrap();
        smooth_gaussian_5x5(&mut image, true).unwrap();
        assert_eq!(image.to_samples::<u8>(), vec![77; 9]);
    }

    #[test]
    fn invalid_kernels() {
        let mut image = Image::new(PixelFormat::Grayscale8, 2, 2);
        let err = separable_convolution(&mut image, &[], 0, &[1.], 0, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParameterOutOfRange);
        let err = separable_convolution(&mut image, &[1., 1.], 2, &[1.], 0, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParameterOutOfRange);
        let err = separable_convolution(&mut image, &[1., -1.], 0, &[1.], 0, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParameterOutOfRange);

        let mut image = Image::new(PixelFormat::Grayscale16, 2, 2);
        let err = separable_convolution(&mut image, &[1.], 0, &[1.], 0, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotImplemented);
    }
}
