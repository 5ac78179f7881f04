use super::ticks;

/// Linear mapping from a data-space domain to a pixel-space range.
///
/// Domain and range are kept exactly as given, so inverted ranges (the Y axis
/// maps `[lo, hi]` onto `[plot_height, 0]`) need no special casing. Values
/// outside the domain are not clamped.
///
/// ```
/// use switchplot::scale::Scale;
///
/// let s = Scale::new((10.0, 20.0), (300.0, 0.0));
/// assert_eq!(s.map(10.0), 300.0);
/// assert_eq!(s.map(20.0), 0.0);
/// assert_eq!(s.map(15.0), 150.0);
/// assert_eq!(s.invert(150.0), 15.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl Scale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Data value → pixel.
    ///
    /// Interpolates as `r0 * (1 - t) + r1 * t`, which lands exactly on `r0`
    /// and `r1` at the domain endpoints. A degenerate domain maps everything
    /// to the middle of the range.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) * 0.5;
        }
        let t = (value - d0) / (d1 - d0);
        r0 * (1.0 - t) + r1 * t
    }

    /// Pixel → data value.
    pub fn invert(&self, pixel: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if r1 == r0 {
            return (d0 + d1) * 0.5;
        }
        let t = (pixel - r0) / (r1 - r0);
        d0 * (1.0 - t) + d1 * t
    }

    /// Round tick values covering the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks::ticks(self.domain.0, self.domain.1, count)
    }

    /// Spacing between the values returned by [`ticks`](Self::ticks).
    pub fn tick_step(&self, count: usize) -> f64 {
        ticks::tick_step(self.domain.0, self.domain.1, count)
    }
}
