//! Piecewise cubic assemblers.
//!
//! Each assembler lowers its input to a list of [`CubicSegment`]s over the
//! local parameter `[0, 1]`. As curves they share one global parameter in
//! `[0, 1]`: cubic and Hermite splines split it into equal parts, one per
//! segment, and Catmull-Rom splines in proportion to their knot intervals.
//! Tangents reported by [`Curve::tangent_at`](crate::Curve::tangent_at) are
//! derivatives with respect to that global parameter; tangents supplied by
//! the caller are per segment.

mod catmull_rom;
mod cubic_spline;
mod hermite;

pub use catmull_rom::{CatmullRomSpline, Parametrization};
pub use cubic_spline::{Boundary, CubicSpline};
pub use hermite::{hermite, HermiteSpline};

use camber_core::{CamberError, Result};
use camber_math::ControlPoint;

use crate::cubic::CubicSegment;
use crate::curve::{check_domain, locate_segment};

const UNIT_DOMAIN: (f64, f64) = (0.0, 1.0);

fn check_point_count(kind: &str, got: usize, min: usize) -> Result<()> {
    if got < min {
        return Err(CamberError::DegenerateInput(format!(
            "a {} needs at least {} control points, got {}",
            kind, min, got
        )));
    }
    Ok(())
}

/// The shared evaluation path: a chain of unit-parameter cubics.
///
/// Segment `i` covers `[knots[i], knots[i + 1]]` of the global parameter.
/// Without explicit knots every segment gets an equal share.
#[derive(Debug, Clone, PartialEq)]
struct Segments<P: ControlPoint> {
    segments: Vec<CubicSegment<P>>,
    knots: Option<Vec<f64>>,
}

impl<P: ControlPoint> Segments<P> {
    /// `segments` must not be empty.
    fn new(segments: Vec<CubicSegment<P>>) -> Self {
        debug_assert!(!segments.is_empty());
        Self {
            segments,
            knots: None,
        }
    }

    /// Segments whose shares of `[0, 1]` are proportional to `intervals`,
    /// one positive interval per segment.
    fn with_intervals(segments: Vec<CubicSegment<P>>, intervals: &[f64]) -> Self {
        debug_assert_eq!(segments.len(), intervals.len());
        let total: f64 = intervals.iter().sum();
        let mut knots = Vec::with_capacity(intervals.len() + 1);
        let mut acc = 0.0;
        knots.push(0.0);
        for dt in &intervals[..intervals.len() - 1] {
            acc += dt;
            knots.push(acc / total);
        }
        knots.push(1.0);
        Self {
            segments,
            knots: Some(knots),
        }
    }

    fn as_slice(&self) -> &[CubicSegment<P>] {
        &self.segments
    }

    /// Global parameter at the start of each segment, plus `1.0`.
    fn knots(&self) -> Vec<f64> {
        match &self.knots {
            Some(knots) => knots.clone(),
            None => {
                let n = self.segments.len();
                (0..=n).map(|i| i as f64 / n as f64).collect()
            }
        }
    }

    /// The segment holding `t`, the local parameter, and `du/dt`.
    fn locate(&self, t: f64) -> Result<(&CubicSegment<P>, f64, f64)> {
        check_domain(t, UNIT_DOMAIN)?;
        let n = self.segments.len();
        match &self.knots {
            None => {
                let (index, u) = locate_segment(t, n);
                Ok((&self.segments[index], u, n as f64))
            }
            Some(knots) => {
                let index = knots.partition_point(|&k| k <= t).saturating_sub(1).min(n - 1);
                let width = knots[index + 1] - knots[index];
                let u = (t - knots[index]) / width;
                Ok((&self.segments[index], u, 1.0 / width))
            }
        }
    }

    fn position(&self, t: f64) -> Result<P> {
        let (segment, u, _) = self.locate(t)?;
        Ok(segment.position(u))
    }

    fn velocity(&self, t: f64) -> Result<P> {
        let (segment, u, scale) = self.locate(t)?;
        Ok(segment.velocity(u) * scale)
    }

    fn acceleration(&self, t: f64) -> Result<P> {
        let (segment, u, scale) = self.locate(t)?;
        Ok(segment.acceleration(u) * (scale * scale))
    }
}
