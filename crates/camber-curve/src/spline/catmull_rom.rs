//! Catmull-Rom splines through a sequence of control points.

use camber_core::{Result, Tolerance};
use camber_math::ControlPoint;

use super::{check_point_count, Segments, UNIT_DOMAIN};
use crate::cubic::CubicSegment;
use crate::curve::Curve;

/// How knot intervals grow with the distance between control points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Parametrization {
    /// Equal intervals (alpha = 0).
    #[default]
    Uniform,
    /// Square root of the chord length (alpha = 1/2). Never forms cusps or
    /// self-intersections within a segment.
    Centripetal,
    /// Chord length (alpha = 1).
    Chordal,
}

impl Parametrization {
    pub fn alpha(self) -> f64 {
        match self {
            Parametrization::Uniform => 0.0,
            Parametrization::Centripetal => 0.5,
            Parametrization::Chordal => 1.0,
        }
    }
}

/// A C¹ spline passing through every control point.
///
/// Segment `i` runs from point `i` to point `i + 1` and takes its tangents
/// from the neighbours on either side. The first and last points are
/// duplicated to stand in for the missing outer neighbours.
///
/// Each segment's share of the global parameter is proportional to its knot
/// interval, so the derivative is continuous for every parametrization.
#[derive(Debug, Clone, PartialEq)]
pub struct CatmullRomSpline<P: ControlPoint> {
    control_points: Vec<P>,
    parametrization: Parametrization,
    segments: Segments<P>,
}

impl<P: ControlPoint> CatmullRomSpline<P> {
    pub const MIN_POINTS: usize = 4;

    pub fn new(control_points: Vec<P>, parametrization: Parametrization) -> Result<Self> {
        Self::with_tolerance(control_points, parametrization, Tolerance::default())
    }

    /// Knot intervals no longer than `tolerance.linear` are replaced by a
    /// unit interval.
    ///
    /// # Errors
    /// `DegenerateInput` with fewer than [`Self::MIN_POINTS`] points.
    pub fn with_tolerance(
        control_points: Vec<P>,
        parametrization: Parametrization,
        tolerance: Tolerance,
    ) -> Result<Self> {
        check_point_count("Catmull-Rom spline", control_points.len(), Self::MIN_POINTS)?;
        let alpha = parametrization.alpha();
        let last = control_points.len() - 1;

        let intervals: Vec<f64> = control_points
            .windows(2)
            .map(|w| interval(w[0], w[1], alpha, tolerance))
            .collect();
        let segments = (0..last)
            .map(|i| {
                let p0 = control_points[i.saturating_sub(1)];
                let p1 = control_points[i];
                let p2 = control_points[i + 1];
                let p3 = control_points[(i + 2).min(last)];
                segment([p0, p1, p2, p3], alpha, tolerance)
            })
            .collect();

        Ok(Self {
            control_points,
            parametrization,
            segments: Segments::with_intervals(segments, &intervals),
        })
    }

    pub fn control_points(&self) -> &[P] {
        &self.control_points
    }

    pub fn parametrization(&self) -> Parametrization {
        self.parametrization
    }

    pub fn segment_count(&self) -> usize {
        self.segments.as_slice().len()
    }

    /// The `i`-th piece over its own unit parameter.
    pub fn segment(&self, i: usize) -> Option<&CubicSegment<P>> {
        self.segments.as_slice().get(i)
    }

    /// Global parameter of each control point, from `0.0` to `1.0`.
    pub fn knots(&self) -> Vec<f64> {
        self.segments.knots()
    }
}

impl<P: ControlPoint> Curve<P> for CatmullRomSpline<P> {
    fn point_at(&self, t: f64) -> Result<P> {
        self.segments.position(t)
    }

    fn tangent_at(&self, t: f64) -> Result<P> {
        self.segments.velocity(t)
    }

    fn domain(&self) -> (f64, f64) {
        UNIT_DOMAIN
    }
}

fn interval<P: ControlPoint>(a: P, b: P, alpha: f64, tolerance: Tolerance) -> f64 {
    let dt = a.distance(b).powf(alpha);
    if dt <= tolerance.linear {
        1.0
    } else {
        dt
    }
}

/// The segment from `p1` to `p2` as a Hermite cubic over `[0, 1]`.
///
/// Tangents are the non-uniform Catmull-Rom estimates rescaled from the
/// knot interval `[t1, t2]` to the unit interval.
fn segment<P: ControlPoint>(
    [p0, p1, p2, p3]: [P; 4],
    alpha: f64,
    tolerance: Tolerance,
) -> CubicSegment<P> {
    let dt0 = interval(p0, p1, alpha, tolerance);
    let dt1 = interval(p1, p2, alpha, tolerance);
    let dt2 = interval(p2, p3, alpha, tolerance);

    let m1 = ((p1 - p0) / dt0 - (p2 - p0) / (dt0 + dt1) + (p2 - p1) / dt1) * dt1;
    let m2 = ((p2 - p1) / dt1 - (p3 - p1) / (dt1 + dt2) + (p3 - p2) / dt2) * dt1;

    CubicSegment::from_hermite(p1, m1, p2, m2)
}
