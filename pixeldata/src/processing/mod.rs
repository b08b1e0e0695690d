//! Image processing kernels.
//!
//! All kernels work on [`Image`] buffers
//! and saturate their results to the range of the target pixel format.
use num_traits::NumCast;
use snafu::ensure;

use crate::image::{Image, PixelFormat, Sample};
use crate::transform::Windowing;
use crate::{IncompatibleSizeSnafu, NotImplementedSnafu, Result, UnsupportedImageSnafu};

mod convolution;
mod polygon;

pub use self::convolution::{separable_convolution, smooth_gaussian_5x5};
pub use self::polygon::{fill_polygon, fill_polygon_with, ImagePoint, PolygonFiller};

/// Convert a floating point value into a sample of type `T`,
/// saturating to its range.
///
/// Integer targets are either rounded to the nearest integer or floored.
/// With `invert`, the result is reflected against the maximum of `T`.
fn saturate<T: Sample>(v: f32, round: bool, invert: bool) -> T {
    if T::FLOAT {
        return <T as NumCast>::from(v).unwrap_or_default();
    }

    let max = T::max_value().to_f32().unwrap_or(f32::MAX);
    let min = T::min_value().to_f32().unwrap_or(f32::MIN);
    let p: T = if v >= max {
        T::max_value()
    } else if v <= min {
        T::min_value()
    } else if round {
        <T as NumCast>::from(v.round()).unwrap_or_default()
    } else {
        <T as NumCast>::from(v.floor()).unwrap_or_default()
    };

    if invert {
        let max = T::max_value().to_f64().unwrap_or(0.);
        <T as NumCast>::from(max - p.to_f64().unwrap_or(0.)).unwrap_or_default()
    } else {
        p
    }
}

/// Map every sample `x` of `source` into `a·x + b` in `target`.
fn linear_internal<T: Sample, S: Sample>(
    target: &mut Image,
    source: &Image,
    a: f32,
    b: f32,
    round: bool,
    invert: bool,
) {
    let src = source.data().chunks_exact(S::SIZE);
    for (dst, src) in target.data_mut().chunks_exact_mut(T::SIZE).zip(src) {
        let x = S::read(src).to_f32().unwrap_or(0.);
        saturate::<T>(a * x + b, round, invert).write(dst);
    }
}

fn linear_from_source<T: Sample>(
    target: &mut Image,
    source: &Image,
    a: f32,
    b: f32,
    round: bool,
    invert: bool,
) -> Result<()> {
    match source.format() {
        PixelFormat::Grayscale8 => linear_internal::<T, u8>(target, source, a, b, round, invert),
        PixelFormat::Grayscale16 => linear_internal::<T, u16>(target, source, a, b, round, invert),
        PixelFormat::SignedGrayscale16 => {
            linear_internal::<T, i16>(target, source, a, b, round, invert)
        }
        PixelFormat::Float32 => linear_internal::<T, f32>(target, source, a, b, round, invert),
        format => {
            return NotImplementedSnafu {
                reason: format!("unsupported source pixel format {:?}", format),
            }
            .fail()
        }
    }
    Ok(())
}

fn linear(
    target: &mut Image,
    source: &Image,
    a: f32,
    b: f32,
    round: bool,
    invert: bool,
) -> Result<()> {
    match target.format() {
        PixelFormat::Grayscale8 => linear_from_source::<u8>(target, source, a, b, round, invert),
        PixelFormat::Grayscale16 => linear_from_source::<u16>(target, source, a, b, round, invert),
        PixelFormat::SignedGrayscale16 => {
            linear_from_source::<i16>(target, source, a, b, round, invert)
        }
        PixelFormat::Float32 => linear_from_source::<f32>(target, source, a, b, round, invert),
        format => NotImplementedSnafu {
            reason: format!("unsupported target pixel format {:?}", format),
        }
        .fail(),
    }
}

fn check_same_size(target: &Image, source: &Image) -> Result<()> {
    ensure!(
        target.width() == source.width() && target.height() == source.height(),
        IncompatibleSizeSnafu {
            reason: format!(
                "target is {}x{}, source is {}x{}",
                target.width(),
                target.height(),
                source.width(),
                source.height()
            ),
        }
    );
    Ok(())
}

/// Whether `x·scaling + offset` leaves every sample untouched.
pub fn is_identity_rescaling(offset: f32, scaling: f32) -> bool {
    offset.abs() <= 10. * f32::EPSILON && (scaling - 1.).abs() <= 10. * f32::EPSILON
}

/// Apply a window level to a grayscale image.
///
/// The source samples are rescaled,
/// then the window is stretched over the whole range of the target.
/// Values are floored and saturated,
/// and reflected against the target maximum when `windowing.invert` is set.
///
/// The target must be `Grayscale8` or `Grayscale16`, the same size as the source.
pub fn apply_windowing(target: &mut Image, source: &Image, windowing: &Windowing) -> Result<()> {
    check_same_size(target, source)?;

    let target_max = match target.format() {
        PixelFormat::Grayscale8 => u8::MAX as f32,
        PixelFormat::Grayscale16 => u16::MAX as f32,
        format => {
            return NotImplementedSnafu {
                reason: format!("cannot apply windowing into {:?}", format),
            }
            .fail()
        }
    };

    let (a, b) = windowing.linear_coefficients(target_max);
    linear(target, source, a, b, false, windowing.invert)
}

/// Compute `x·scaling + offset` in place, saturating the result.
pub fn shift_scale2(image: &mut Image, offset: f32, scaling: f32, round: bool) -> Result<()> {
    if is_identity_rescaling(offset, scaling) {
        return Ok(());
    }
    let source = image.clone();
    linear(image, &source, scaling, offset, round, false)
}

/// Compute `x·scaling + offset` from `source` into a target of any grayscale format.
pub fn shift_scale2_into(
    target: &mut Image,
    source: &Image,
    offset: f32,
    scaling: f32,
    round: bool,
) -> Result<()> {
    check_same_size(target, source)?;

    if target.format() == source.format() && is_identity_rescaling(offset, scaling) {
        target.data_mut().copy_from_slice(source.data());
        return Ok(());
    }
    linear(target, source, scaling, offset, round, false)
}

/// Compute `(x + offset)·scaling` in place, saturating the result.
pub fn shift_scale(image: &mut Image, offset: f32, scaling: f32, round: bool) -> Result<()> {
    shift_scale2(image, offset * scaling, scaling, round)
}

/// Compute `(x + offset)·scaling` from `source` into `target`.
pub fn shift_scale_into(
    target: &mut Image,
    source: &Image,
    offset: f32,
    scaling: f32,
    round: bool,
) -> Result<()> {
    shift_scale2_into(target, source, offset * scaling, scaling, round)
}

/// Resize an image with nearest neighbour interpolation.
///
/// Both images must have the same pixel format.
/// A source without pixels fills the target with zeros.
pub fn resize(target: &mut Image, source: &Image) -> Result<()> {
    ensure!(
        target.format() == source.format(),
        UnsupportedImageSnafu {
            reason: format!(
                "cannot resize {:?} into {:?}",
                source.format(),
                target.format()
            ),
        }
    );

    if target.width() == source.width() && target.height() == source.height() {
        target.data_mut().copy_from_slice(source.data());
        return Ok(());
    }
    if target.is_empty() {
        return Ok(());
    }
    if source.is_empty() {
        target.data_mut().iter_mut().for_each(|b| *b = 0);
        return Ok(());
    }

    let bpp = source.format().bytes_per_pixel();
    let scale_x = source.width() as f32 / target.width() as f32;
    let scale_y = source.height() as f32 / target.height() as f32;

    let lookup_x: Vec<usize> = (0..target.width())
        .map(|x| {
            let sx = ((x as f32 + 0.5) * scale_x).floor() as u32;
            sx.min(source.width() - 1) as usize
        })
        .collect();

    for y in 0..target.height() {
        let sy = ((y as f32 + 0.5) * scale_y).floor() as u32;
        let src_row = source.row(sy.min(source.height() - 1));
        let dst_row = target.row_mut(y);

        for (dst, &sx) in dst_row.chunks_exact_mut(bpp).zip(&lookup_x) {
            dst.copy_from_slice(&src_row[sx * bpp..(sx + 1) * bpp]);
        }
    }
    Ok(())
}

/// Mirror an image horizontally.
pub fn flip_x(image: &mut Image) {
    let bpp = image.format().bytes_per_pixel();
    let width = image.width() as usize;
    for y in 0..image.height() {
        let row = image.row_mut(y);
        for x1 in 0..width / 2 {
            let x2 = width - 1 - x1;
            for k in 0..bpp {
                row.swap(x1 * bpp + k, x2 * bpp + k);
            }
        }
    }
}

/// Mirror an image vertically.
pub fn flip_y(image: &mut Image) {
    let pitch = image.pitch();
    let height = image.height() as usize;
    let data = image.data_mut();
    for y1 in 0..height / 2 {
        let y2 = height - 1 - y1;
        let (top, bottom) = data.split_at_mut(y2 * pitch);
        top[y1 * pitch..(y1 + 1) * pitch].swap_with_slice(&mut bottom[..pitch]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmkit_core::ErrorKind;
    use rstest::rstest;

    #[rstest]
    #[case(-5, 0)]
    #[case(0, 0)]
    #[case(2, 51)]
    #[case(5, 128)]
    #[case(10, 255)]
    #[case(1000, 255)]
    fn window_level_to_grayscale8(#[case] input: i16, #[case] expected: u8) {
        let source = Image::from_samples(PixelFormat::SignedGrayscale16, 1, 1, &[input]).unwrap();
        let mut target = Image::new(PixelFormat::Grayscale8, 1, 1);
        apply_windowing(&mut target, &source, &Windowing::new(5., 10.)).unwrap();
        assert_eq!(target.to_samples::<u8>(), vec![expected]);
    }

    #[test]
    fn inverted_window_level() {
        let source = Image::from_samples(
            PixelFormat::SignedGrayscale16,
            6,
            1,
            &[-5i16, 0, 5, 10, 1000, 2],
        )
        .unwrap();
        let mut target = Image::new(PixelFormat::Grayscale8, 6, 1);
        apply_windowing(
            &mut target,
            &source,
            &Windowing::new(5., 10.).rescale(1., 0.).invert(true),
        )
        .unwrap();
        assert_eq!(target.to_samples::<u8>(), vec![255, 255, 127, 0, 0, 204]);
    }

    #[test]
    fn window_level_with_rescale_to_grayscale16() {
        let source = Image::from_samples(PixelFormat::Grayscale16, 3, 1, &[0u16, 1024, 2048]).unwrap();
        let mut target = Image::new(PixelFormat::Grayscale16, 3, 1);
        let windowing = Windowing::new(0., 2048.).rescale(1., -1024.);
        apply_windowing(&mut target, &source, &windowing).unwrap();
        assert_eq!(target.to_samples::<u16>(), vec![0, 32768, 65535]);
    }

    #[test]
    fn windowing_checks_formats_and_sizes() {
        let source = Image::new(PixelFormat::Grayscale8, 2, 2);
        let mut target = Image::new(PixelFormat::Grayscale8, 2, 1);
        let err = apply_windowing(&mut target, &source, &Windowing::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IncompatibleImageSize);

        let mut target = Image::new(PixelFormat::RGB24, 2, 2);
        let err = apply_windowing(&mut target, &source, &Windowing::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotImplemented);
    }

    #[test]
    fn shift_scale_saturates() {
        let mut image =
            Image::from_samples(PixelFormat::Grayscale8, 4, 1, &[0u8, 10, 100, 200]).unwrap();
        shift_scale(&mut image, 5., 2., false).unwrap();
        assert_eq!(image.to_samples::<u8>(), vec![10, 30, 210, 255]);

        let mut image =
            Image::from_samples(PixelFormat::SignedGrayscale16, 3, 1, &[-100i16, 3, 30000]).unwrap();
        shift_scale2(&mut image, -0.5, 1.5, true).unwrap();
        assert_eq!(image.to_samples::<i16>(), vec![-151, 4, 32767]);
    }

    #[test]
    fn shift_scale_rounding() {
        let source = Image::from_samples(PixelFormat::Float32, 3, 1, &[1.4f32, 1.5, -2.7]).unwrap();
        let mut floored = Image::new(PixelFormat::Grayscale8, 3, 1);
        shift_scale2_into(&mut floored, &source, 0., 1., false).unwrap();
        assert_eq!(floored.to_samples::<u8>(), vec![1, 1, 0]);

        let mut rounded = Image::new(PixelFormat::SignedGrayscale16, 3, 1);
        shift_scale2_into(&mut rounded, &source, 0., 1., true).unwrap();
        assert_eq!(rounded.to_samples::<i16>(), vec![1, 2, -3]);
    }

    #[test]
    fn shift_scale_into_float() {
        let source = Image::from_samples(PixelFormat::Grayscale16, 2, 1, &[3u16, 65535]).unwrap();
        let mut target = Image::new(PixelFormat::Float32, 2, 1);
        shift_scale_into(&mut target, &source, 1., 0.5, false).unwrap();
        assert_eq!(target.to_samples::<f32>(), vec![2., 32768.]);
    }

    #[test]
    fn identity_rescaling_copies() {
        assert!(is_identity_rescaling(0., 1.));
        assert!(!is_identity_rescaling(0.001, 1.));

        let source = Image::from_samples(PixelFormat::RGB24, 1, 1, &[1u8, 2, 3]).unwrap();
        let mut target = Image::new(PixelFormat::RGB24, 1, 1);
        shift_scale2_into(&mut target, &source, 0., 1., false).unwrap();
        assert_eq!(target, source);

        let mut image = source.clone();
        shift_scale2(&mut image, 0., 1., false).unwrap();
        let err = shift_scale2(&mut image, 1., 1., false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotImplemented);
    }

    #[test]
    fn resize_nearest() {
        let source = Image::from_samples(PixelFormat::Grayscale8, 2, 2, &[1u8, 2, 3, 4]).unwrap();
        let mut target = Image::new(PixelFormat::Grayscale8, 4, 3);
        resize(&mut target, &source).unwrap();
        assert_eq!(
            target.to_samples::<u8>(),
            vec![
                1, 1, 2, 2, //
                3, 3, 4, 4, //
                3, 3, 4, 4, //
            ]
        );

        let mut halved = Image::new(PixelFormat::Grayscale8, 1, 1);
        resize(&mut halved, &source).unwrap();
        assert_eq!(halved.to_samples::<u8>(), vec![4]);

        let mut other = Image::new(PixelFormat::Grayscale16, 1, 1);
        let err = resize(&mut other, &source).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IncompatibleImageFormat);

        let mut target = Image::from_samples(PixelFormat::Grayscale8, 2, 1, &[9u8, 9]).unwrap();
        resize(&mut target, &Image::new(PixelFormat::Grayscale8, 0, 4)).unwrap();
        assert_eq!(target.to_samples::<u8>(), vec![0, 0]);
    }

    #[test]
    fn flips() {
        let mut image = Image::from_samples(
            PixelFormat::RGB24,
            3,
            2,
            &[
                1u8, 1, 1, 2, 2, 2, 3, 3, 3, //
                4, 4, 4, 5, 5, 5, 6, 6, 6,
            ],
        )
        .unwrap();
        flip_x(&mut image);
        assert_eq!(image.sample::<u8>(0, 0, 0), 3);
        assert_eq!(image.sample::<u8>(1, 0, 0), 2);
        assert_eq!(image.sample::<u8>(2, 1, 2), 4);

        flip_y(&mut image);
        assert_eq!(image.sample::<u8>(0, 0, 0), 6);
        assert_eq!(image.sample::<u8>(0, 1, 0), 3);
    }
}
