//! Parameters of the pixel sample value transformations.

/// Description of a modality rescale function,
/// defined by a _rescale slope_ and _rescale intercept_.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rescale {
    /// the rescale slope
    pub slope: f32,
    /// the rescale intercept
    pub intercept: f32,
}

impl Rescale {
    /// Create a new rescale function.
    #[inline]
    pub fn new(slope: f32, intercept: f32) -> Self {
        Rescale { slope, intercept }
    }

    /// Apply the rescale function to a value.
    #[inline]
    pub fn apply(&self, value: f32) -> f32 {
        self.slope * value + self.intercept
    }
}

impl Default for Rescale {
    fn default() -> Self {
        Rescale::new(1., 0.)
    }
}

/// The parameters of a windowing operation:
/// a modality rescale followed by a linear window level,
/// optionally inverted.
#[derive(Debug, Copy, Clone, PartialEq)]
#[non_exhaustive]
pub struct Windowing {
    /// The _Window Center_.
    pub center: f32,
    /// The _Window Width_.
    ///
    /// Should be greater than 0
    pub width: f32,
    /// The modality rescale applied to the source samples
    pub rescale: Rescale,
    /// Whether to invert the output (as in MONOCHROME1)
    pub invert: bool,
}

impl Windowing {
    /// Create a window level with the identity rescale.
    pub fn new(center: f32, width: f32) -> Self {
        Windowing {
            center,
            width,
            rescale: Rescale::default(),
            invert: false,
        }
    }

    /// Set the modality rescale.
    pub fn rescale(mut self, slope: f32, intercept: f32) -> Self {
        self.rescale = Rescale::new(slope, intercept);
        self
    }

    /// Set whether the output is inverted.
    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Obtain the linear function `a·x + b`
    /// mapping source samples onto `0..=target_max`.
    pub(crate) fn linear_coefficients(&self, target_max: f32) -> (f32, f32) {
        let window_intercept = self.center - self.width / 2.;
        let window_slope = (target_max + 1.) / self.width;
        let a = self.rescale.slope * window_slope;
        let b = (self.rescale.intercept - window_intercept) * window_slope;
        (a, b)
    }
}

impl Default for Windowing {
    fn default() -> Self {
        Windowing::new(128., 256.)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rescale() {
        let rescale = Rescale::new(2., -1024.);
        assert_eq!(rescale.apply(0.), -1024.);
        assert_eq!(rescale.apply(512.), 0.);
    }

    #[test]
    fn window_coefficients() {
        let (a, b) = Windowing::new(5., 10.).linear_coefficients(255.);
        assert_eq!(a, 25.6);
        assert_eq!(b, 0.);

        let (a, b) = Windowing::new(40., 400.)
            .rescale(1., -1024.)
            .linear_coefficients(255.);
        assert_eq!(a, 0.64);
        assert_eq!(b, (-1024. + 160.) * 0.64);
    }
}
