//! Zero-centered color normalization.

/// Maps raw values onto `[0, 1]` by piecewise-linear interpolation over the
/// control points `(vmin, 0)`, `(midpoint, 0.5)`, `(vmax, 1)`.
///
/// With the midpoint at zero this pins the neutral color of a diverging
/// colormap to the value 0 even when the data range is asymmetric, so sign
/// and magnitude stay readable together. Values outside the domain clamp to
/// the endpoints. Degenerate domains (e.g. `vmin == vmax`) are allowed and
/// resolve through the clamps; inputs are not checked for NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MidpointNormalize {
    pub vmin: f64,
    pub midpoint: f64,
    pub vmax: f64,
}

impl MidpointNormalize {
    pub fn new(vmin: f64, midpoint: f64, vmax: f64) -> Self {
        MidpointNormalize { vmin, midpoint, vmax }
    }

    /// Normalization with its neutral point pinned to zero, the variant the
    /// weight plot uses.
    pub fn zero_centered(vmin: f64, vmax: f64) -> Self {
        Self::new(vmin, 0.0, vmax)
    }

    /// Evaluate the map at `value`.
    pub fn apply(&self, value: f64) -> f64 {
        if value <= self.vmin {
            return 0.0;
        }
        if value >= self.vmax {
            return 1.0;
        }
        if value == self.midpoint {
            return 0.5;
        }
        if value < self.midpoint {
            0.5 * (value - self.vmin) / (self.midpoint - self.vmin)
        } else {
            0.5 + 0.5 * (value - self.midpoint) / (self.vmax - self.midpoint)
        }
    }
}
