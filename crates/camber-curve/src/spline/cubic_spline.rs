//! Interpolating cubic splines with C² continuity.

use camber_core::Result;
use camber_math::ControlPoint;

use super::{check_point_count, Segments, UNIT_DOMAIN};
use crate::cubic::CubicSegment;
use crate::curve::Curve;

/// End conditions closing the second-derivative system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Boundary<P> {
    /// Zero second derivative at both ends.
    Natural,
    /// Prescribed first derivatives at the ends, per segment parameter.
    Clamped { start: P, end: P },
}

/// A cubic spline through every control point.
///
/// Knots are uniformly spaced, one segment per consecutive pair of points.
/// Second derivatives at the knots come from a tridiagonal solve so that
/// position, velocity, and acceleration are continuous at every interior
/// knot.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline<P: ControlPoint> {
    control_points: Vec<P>,
    boundary: Boundary<P>,
    segments: Segments<P>,
}

impl<P: ControlPoint> CubicSpline<P> {
    pub const MIN_POINTS: usize = 3;

    /// Natural spline through `control_points`.
    pub fn new(control_points: Vec<P>) -> Result<Self> {
        Self::with_boundary(control_points, Boundary::Natural)
    }

    /// # Errors
    /// `DegenerateInput` with fewer than [`Self::MIN_POINTS`] points.
    pub fn with_boundary(control_points: Vec<P>, boundary: Boundary<P>) -> Result<Self> {
        check_point_count("cubic spline", control_points.len(), Self::MIN_POINTS)?;
        let moments = solve_moments(&control_points, boundary);
        let segments = control_points
            .windows(2)
            .zip(moments.windows(2))
            .map(|(p, m)| {
                let delta = p[1] - p[0];
                CubicSegment::from_coefficients([
                    p[0],
                    delta - (m[0] * 2.0 + m[1]) / 6.0,
                    m[0] * 0.5,
                    (m[1] - m[0]) / 6.0,
                ])
            })
            .collect();

        Ok(Self {
            control_points,
            boundary,
            segments: Segments::new(segments),
        })
    }

    pub fn control_points(&self) -> &[P] {
        &self.control_points
    }

    pub fn boundary(&self) -> Boundary<P> {
        self.boundary
    }

    pub fn segment_count(&self) -> usize {
        self.segments.as_slice().len()
    }

    /// The `i`-th cubic piece, running from control point `i` to `i + 1`.
    pub fn segment(&self, i: usize) -> Option<&CubicSegment<P>> {
        self.segments.as_slice().get(i)
    }

    pub fn velocity_at(&self, t: f64) -> Result<P> {
        self.segments.velocity(t)
    }

    pub fn acceleration_at(&self, t: f64) -> Result<P> {
        self.segments.acceleration(t)
    }
}

impl<P: ControlPoint> Curve<P> for CubicSpline<P> {
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

/// Second derivatives `M_0..=M_n` at the knots for unit knot spacing.
///
/// Interior rows are `M_{i-1} + 4 M_i + M_{i+1} = 6 (P_{i-1} - 2 P_i + P_{i+1})`.
fn solve_moments<P: ControlPoint>(points: &[P], boundary: Boundary<P>) -> Vec<P> {
    let n = points.len() - 1;
    let mut sub = vec![1.0; n + 1];
    let mut diag = vec![4.0; n + 1];
    let mut sup = vec![1.0; n + 1];
    let mut rhs: Vec<P> = (0..=n)
        .map(|i| {
            if i == 0 || i == n {
                P::ZERO
            } else {
                (points[i - 1] - points[i] * 2.0 + points[i + 1]) * 6.0
            }
        })
        .collect();

    match boundary {
        Boundary::Natural => {
            diag[0] = 1.0;
            sup[0] = 0.0;
            sub[n] = 0.0;
            diag[n] = 1.0;
        }
        Boundary::Clamped { start, end } => {
            diag[0] = 2.0;
            rhs[0] = ((points[1] - points[0]) - start) * 6.0;
            diag[n] = 2.0;
            rhs[n] = (end - (points[n] - points[n - 1])) * 6.0;
        }
    }
    sub[0] = 0.0;
    sup[n] = 0.0;

    solve_tridiagonal(&sub, &diag, &sup, rhs)
}

/// Thomas algorithm for a diagonally dominant tridiagonal system.
fn solve_tridiagonal<P: ControlPoint>(
    sub: &[f64],
    diag: &[f64],
    sup: &[f64],
    mut rhs: Vec<P>,
) -> Vec<P> {
    let m = rhs.len();
    let mut c = vec![0.0; m];

    c[0] = sup[0] / diag[0];
    rhs[0] = rhs[0] / diag[0];
    for i in 1..m {
        let denom = diag[i] - sub[i] * c[i - 1];
        c[i] = sup[i] / denom;
        rhs[i] = (rhs[i] - rhs[i - 1] * sub[i]) / denom;
    }
    for i in (0..m - 1).rev() {
        rhs[i] = rhs[i] - rhs[i + 1] * c[i];
    }
    rhs
}
