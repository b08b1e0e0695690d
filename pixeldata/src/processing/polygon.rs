//! Scanline polygon filling.
//!
//! Edges are kept in a global table keyed by their lower scanline,
//! and moved into an active list as the scanline goes up.
//! X intersections are tracked as exact fractions,
//! so the filled pixels never depend on floating point rounding.
use std::collections::BTreeMap;

use snafu::ensure;

use crate::image::{Image, PixelFormat, Sample};
use crate::{NotImplementedSnafu, Result};

/// A point with integer coordinates, which may lie outside of the image.
#[derive(Debug, Copy, Clone, Default, Eq, Hash, PartialEq)]
pub struct ImagePoint {
    pub x: i32,
    pub y: i32,
}

impl ImagePoint {
    pub fn new(x: i32, y: i32) -> Self {
        ImagePoint { x, y }
    }
}

impl From<(i32, i32)> for ImagePoint {
    fn from((x, y): (i32, i32)) -> Self {
        ImagePoint { x, y }
    }
}

/// Receiver of the horizontal spans covered by a polygon.
pub trait PolygonFiller {
    /// Fill the pixels of row `y` from `x1` to `x2`, both inclusive.
    fn fill(&mut self, y: i32, x1: i32, x2: i32);
}

impl<F> PolygonFiller for F
where
    F: FnMut(i32, i32, i32),
{
    fn fill(&mut self, y: i32, x1: i32, x2: i32) {
        self(y, x1, x2)
    }
}

#[derive(Debug, Copy, Clone)]
struct Edge {
    upper_y: i32,
    x: i32,
    x_offset: i32,
    numerator: i32,
    denominator: i32,
}

impl Edge {
    fn new(lower: ImagePoint, upper: ImagePoint, y_comp: i32) -> Self {
        debug_assert_ne!(lower.y, upper.y);
        Edge {
            // shorten the edge when its upper vertex is not a local extremum
            upper_y: if upper.y < y_comp { upper.y - 1 } else { upper.y },
            x: lower.x,
            x_offset: 0,
            numerator: upper.x - lower.x,
            denominator: upper.y - lower.y,
        }
    }

    fn next_scan_line(&mut self) {
        self.x_offset += self.numerator;
        while self.x_offset >= self.denominator {
            self.x += 1;
            self.x_offset -= self.denominator;
        }
        while self.x_offset < 0 {
            self.x -= 1;
            self.x_offset += self.denominator;
        }
    }

    fn enter_x(&self) -> i32 {
        if self.x_offset == 0 {
            self.x
        } else {
            self.x + 1
        }
    }

    fn exit_x(&self) -> i32 {
        self.x
    }
}

/// The y coordinate of the next vertex not on the same row as `points[k]`.
fn next_y(points: &[ImagePoint], k: usize) -> i32 {
    let mut j = k;
    loop {
        j = (j + 1) % points.len();
        if points[j].y != points[k].y {
            return points[j].y;
        }
    }
}

/// The y coordinate of the previous vertex not on the same row as `points[k]`.
fn previous_y(points: &[ImagePoint], k: usize) -> i32 {
    let mut j = k;
    loop {
        j = if j > 0 { j - 1 } else { points.len() - 1 };
        if points[j].y != points[k].y {
            return points[j].y;
        }
    }
}

/// Compute the horizontal spans covered by a closed polygon,
/// passing each of them to `filler`.
///
/// The boundary of the polygon is included.
/// Polygons with fewer than 2 points cover nothing.
pub fn fill_polygon_with<F>(filler: &mut F, points: &[ImagePoint])
where
    F: PolygonFiller + ?Sized,
{
    if points.len() < 2 {
        return;
    }

    let y0 = points[0].y;
    if points.iter().all(|p| p.y == y0) {
        // only horizontal segments
        let x1 = points.iter().map(|p| p.x).min().unwrap_or(points[0].x);
        let x2 = points.iter().map(|p| p.x).max().unwrap_or(points[0].x);
        filler.fill(y0, x1, x2);
        return;
    }

    let mut edge_table: BTreeMap<i32, Vec<Edge>> = BTreeMap::new();

    let last = points.len() - 1;
    let mut y_prev = previous_y(points, last);
    let mut v1 = points[last];
    for (i, &v2) in points.iter().enumerate() {
        if v1.y != v2.y {
            if v1.y < v2.y {
                // going up
                edge_table
                    .entry(v1.y)
                    .or_default()
                    .push(Edge::new(v1, v2, next_y(points, i)));
            } else {
                // going down
                edge_table
                    .entry(v2.y)
                    .or_default()
                    .push(Edge::new(v2, v1, y_prev));
            }
            // horizontal segments do not count as previous rows
            y_prev = v1.y;
        }
        v1 = v2;
    }

    let keys: Vec<i32> = edge_table.keys().copied().collect();
    let mut active: Vec<Edge> = Vec::new();

    for (i, (&start, edges)) in edge_table.iter().enumerate() {
        active.extend_from_slice(edges);

        let ramp_end = match keys.get(i + 1) {
            Some(&next) => next,
            None => active.iter().map(|e| e.upper_y + 1).max().unwrap_or(start),
        };

        for y in start..ramp_end {
            active.retain(|e| y <= e.upper_y);
            active.sort_by_key(|e| e.x);

            let mut k = 0;
            while k + 1 < active.len() {
                let a = active[k].exit_x();
                let mut b = active[k + 1].enter_x();
                k += 2;
                // merge spans meeting at the same pixel
                while k + 1 < active.len() && active[k].exit_x() == b {
                    b = active[k + 1].enter_x();
                    k += 2;
                }
                filler.fill(y, a, b);
            }

            for edge in &mut active {
                edge.next_scan_line();
            }
        }
    }
}

fn fill_span<T: Sample>(image: &mut Image, y: i32, x1: i32, x2: i32, value: T) {
    let width = image.width() as i32;
    if x1 >= width || x2 < 0 || y < 0 || y >= image.height() as i32 {
        return;
    }
    let a = x1.max(0) as u32;
    let b = x2.min(width - 1) as u32;
    for x in a..=b {
        image.set_sample(x, y as u32, 0, value);
    }
}

fn saturate_value<T: Sample>(value: i64) -> T {
    num_traits::cast::<i64, T>(value).unwrap_or_else(|| {
        if value < 0 {
            T::min_value()
        } else {
            T::max_value()
        }
    })
}

/// Fill a polygon into a grayscale image,
/// clipping the spans which fall outside of it.
///
/// The value is saturated to the range of the pixel format.
pub fn fill_polygon(image: &mut Image, points: &[ImagePoint], value: i64) -> Result<()> {
    ensure!(
        matches!(
            image.format(),
            PixelFormat::Grayscale8 | PixelFormat::Grayscale16 | PixelFormat::SignedGrayscale16
        ),
        NotImplementedSnafu {
            reason: format!("cannot fill polygons in {:?}", image.format()),
        }
    );

    match image.format() {
        PixelFormat::Grayscale8 => {
            let v: u8 = saturate_value(value);
            let mut filler = |y: i32, x1: i32, x2: i32| fill_span(image, y, x1, x2, v);
            fill_polygon_with(&mut filler, points);
        }
        PixelFormat::Grayscale16 => {
            let v: u16 = saturate_value(value);
            let mut filler = |y: i32, x1: i32, x2: i32| fill_span(image, y, x1, x2, v);
            fill_polygon_with(&mut filler, points);
        }
        _ => {
            let v: i16 = saturate_value(value);
            let mut filler = |y: i32, x1: i32, x2: i32| fill_span(image, y, x1, x2, v);
            fill_polygon_with(&mut filler, points);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmkit_core::ErrorKind;

    fn points(coords: &[(i32, i32)]) -> Vec<ImagePoint> {
        coords.iter().copied().map(ImagePoint::from).collect()
    }

    fn spans(coords: &[(i32, i32)]) -> Vec<(i32, i32, i32)> {
        let mut spans = Vec::new();
        let mut filler = |y: i32, x1: i32, x2: i32| spans.push((y, x1, x2));
        fill_polygon_with(&mut filler, &points(coords));
        spans
    }

    #[test]
    fn fill_triangle() {
        let mut image = Image::new(PixelFormat::Grayscale8, 8, 8);
        fill_polygon(&mut image, &points(&[(1, 1), (1, 5), (5, 5)]), 255).unwrap();

        for y in 0..8 {
            for x in 0..8 {
                let inside = (1..=5).contains(&y) && x >= 1 && x <= y;
                let expected = if inside { 255 } else { 0 };
                assert_eq!(image.sample::<u8>(x, y, 0), expected, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn fill_rectangle() {
        assert_eq!(
            spans(&[(1, 1), (4, 1), (4, 3), (1, 3)]),
            vec![(1, 1, 4), (2, 1, 4), (3, 1, 4)]
        );
    }

    #[test]
    fn degenerate_polygons() {
        assert!(spans(&[(3, 2)]).is_empty());
        assert_eq!(spans(&[(3, 2), (7, 2), (1, 2)]), vec![(2, 1, 7)]);
    }

    #[test]
    fn spans_are_clipped() {
        let mut image = Image::new(PixelFormat::SignedGrayscale16, 4, 4);
        fill_polygon(&mut image, &points(&[(-2, -2), (10, -2), (10, 1), (-2, 1)]), -40000).unwrap();
        assert_eq!(
            image.to_samples::<i16>(),
            vec![
                -32768, -32768, -32768, -32768, //
                -32768, -32768, -32768, -32768, //
                0, 0, 0, 0, //
                0, 0, 0, 0,
            ]
        );

        let mut image = Image::new(PixelFormat::Float32, 4, 4);
        let err = fill_polygon(&mut image, &points(&[(0, 0), (1, 1)]), 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotImplemented);
    }
}
