//! The common evaluation capability shared by every curve family.

mod any;
mod bspline;

use camber_core::{CamberError, Result, Tolerance};
use camber_math::ControlPoint;

pub use any::AnyCurve;
pub use bspline::{BSplineCurve, NurbsCurve};

/// A parametric curve over a closed parameter interval.
pub trait Curve<P: ControlPoint>: Send + Sync {
    /// Evaluate the curve at parameter `t`.
    ///
    /// Fails with `Domain` when `t` lies outside [`Curve::domain`].
    fn point_at(&self, t: f64) -> Result<P>;

    /// Evaluate the first derivative with respect to `t`.
    fn tangent_at(&self, t: f64) -> Result<P>;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);

    /// Whether the curve ends where it starts.
    fn is_closed(&self, tolerance: Tolerance) -> bool {
        let (t_min, t_max) = self.domain();
        match (self.point_at(t_min), self.point_at(t_max)) {
            (Ok(start), Ok(end)) => tolerance.is_zero(start.distance(end)),
            _ => false,
        }
    }
}

/// Reject parameters outside `[min, max]`, including NaN.
pub(crate) fn check_domain(t: f64, (min, max): (f64, f64)) -> Result<()> {
    if t >= min && t <= max {
        Ok(())
    } else {
        Err(CamberError::Domain(format!(
            "parameter {} outside domain [{}, {}]",
            t, min, max
        )))
    }
}

/// Map a global parameter in `[0, 1]` onto `segments` uniform pieces.
///
/// Returns the segment index and the local parameter in `[0, 1]`. The
/// parameter `1` maps to the end of the last segment.
pub(crate) fn locate_segment(t: f64, segments: usize) -> (usize, f64) {
    let scaled = t * segments as f64;
    let index = (scaled.floor() as usize).min(segments - 1);
    (index, scaled - index as f64)
}
