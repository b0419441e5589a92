//! Bezier curves of any degree, evaluated and subdivided with de Casteljau's
//! algorithm.
//!
//! Repeated linear interpolation is O(n^2) in the number of control points
//! but stays numerically stable at high degree, where summing Bernstein
//! weighted points does not.

use camber_core::{CamberError, Result};
use camber_math::{lerp, ControlPoint};

use crate::curve::{check_domain, Curve};

const UNIT_DOMAIN: (f64, f64) = (0.0, 1.0);

fn check_control_points<P>(points: &[P]) -> Result<()> {
    if points.len() < 2 {
        return Err(CamberError::Domain(format!(
            "a Bezier curve needs at least 2 control points, got {}",
            points.len()
        )));
    }
    Ok(())
}

/// Evaluate the Bezier curve with the given control polygon at `t`.
///
/// # Errors
/// `Domain` when fewer than 2 points are given or `t` is outside `[0, 1]`.
pub fn evaluate<P: ControlPoint>(points: &[P], t: f64) -> Result<P> {
    check_control_points(points)?;
    check_domain(t, UNIT_DOMAIN)?;
    Ok(de_casteljau(points, t))
}

/// Split a Bezier curve at `t` into the pieces over `[0, t]` and `[t, 1]`.
///
/// Both pieces have the same degree as the input, and each is
/// reparameterized to `[0, 1]`: `left(s) == curve(s * t)` and
/// `right(s) == curve(t + s * (1 - t))`.
///
/// # Errors
/// `Domain` when fewer than 2 points are given or `t` is outside `[0, 1]`.
/// The split point is never clamped.
pub fn truncate<P: ControlPoint>(points: &[P], t: f64) -> Result<(Vec<P>, Vec<P>)> {
    check_control_points(points)?;
    check_domain(t, UNIT_DOMAIN)?;
    Ok(subdivide(points, t))
}

/// Control polygon of the piece of the curve over `[t0, t1]`.
///
/// # Errors
/// `Domain` unless `0 <= t0 < t1 <= 1`.
pub fn segment<P: ControlPoint>(points: &[P], t0: f64, t1: f64) -> Result<Vec<P>> {
    check_control_points(points)?;
    check_domain(t0, UNIT_DOMAIN)?;
    check_domain(t1, UNIT_DOMAIN)?;
    if t0 >= t1 {
        return Err(CamberError::Domain(format!(
            "empty parameter interval [{}, {}]",
            t0, t1
        )));
    }

    let (head, _) = subdivide(points, t1);
    if t0 == 0.0 {
        return Ok(head);
    }
    let (_, piece) = subdivide(&head, t0 / t1);
    Ok(piece)
}

/// Control points of the derivative curve (the hodograph), one degree lower.
pub fn derivative<P: ControlPoint>(points: &[P]) -> Result<Vec<P>> {
    check_control_points(points)?;
    Ok(hodograph(points))
}

/// Raise the degree by one without changing the curve.
pub fn elevate<P: ControlPoint>(points: &[P]) -> Result<Vec<P>> {
    check_control_points(points)?;
    Ok(elevate_degree(points))
}

fn hodograph<P: ControlPoint>(points: &[P]) -> Vec<P> {
    let degree = (points.len() - 1) as f64;
    points.windows(2).map(|w| (w[1] - w[0]) * degree).collect()
}

fn elevate_degree<P: ControlPoint>(points: &[P]) -> Vec<P> {
    let n = points.len();
    let mut elevated = Vec::with_capacity(n + 1);
    elevated.push(points[0]);
    for i in 1..n {
        let alpha = i as f64 / n as f64;
        elevated.push(points[i - 1] * alpha + points[i] * (1.0 - alpha));
    }
    elevated.push(points[n - 1]);
    elevated
}

fn de_casteljau<P: ControlPoint>(points: &[P], t: f64) -> P {
    let mut row = points.to_vec();
    for level in 1..row.len() {
        for i in 0..row.len() - level {
            row[i] = lerp(row[i], row[i + 1], t);
        }
    }
    row[0]
}

/// Walk the de Casteljau triangle, keeping its two outer edges.
fn subdivide<P: ControlPoint>(points: &[P], t: f64) -> (Vec<P>, Vec<P>) {
    let n = points.len();
    let mut row = points.to_vec();
    let mut left = Vec::with_capacity(n);
    let mut right = Vec::with_capacity(n);
    left.push(row[0]);
    right.push(row[n - 1]);

    for level in 1..n {
        for i in 0..n - level {
            row[i] = lerp(row[i], row[i + 1], t);
        }
        left.push(row[0]);
        right.push(row[n - 1 - level]);
    }

    right.reverse();
    (left, right)
}

/// A Bezier curve owning its control polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierCurve<P: ControlPoint> {
    control_points: Vec<P>,
}

impl<P: ControlPoint> BezierCurve<P> {
    pub fn new(control_points: Vec<P>) -> Result<Self> {
        check_control_points(&control_points)?;
        Ok(Self { control_points })
    }

    pub fn control_points(&self) -> &[P] {
        &self.control_points
    }

    pub fn degree(&self) -> usize {
        self.control_points.len() - 1
    }

    /// Split at `t` into two curves of the same degree. See [`truncate`].
    pub fn split(&self, t: f64) -> Result<(Self, Self)> {
        let (left, right) = truncate(&self.control_points, t)?;
        Ok((
            Self {
                control_points: left,
            },
            Self {
                control_points: right,
            },
        ))
    }

    /// The piece over `[t0, t1]`, reparameterized to `[0, 1]`.
    pub fn segment(&self, t0: f64, t1: f64) -> Result<Self> {
        Ok(Self {
            control_points: segment(&self.control_points, t0, t1)?,
        })
    }

    /// Control points of the hodograph.
    pub fn derivative(&self) -> Vec<P> {
        hodograph(&self.control_points)
    }

    pub fn elevate(&self) -> Self {
        Self {
            control_points: elevate_degree(&self.control_points),
        }
    }
}

impl<P: ControlPoint> Curve<P> for BezierCurve<P> {
    fn point_at(&self, t: f64) -> Result<P> {
        check_domain(t, UNIT_DOMAIN)?;
        Ok(de_casteljau(&self.control_points, t))
    }

    fn tangent_at(&self, t: f64) -> Result<P> {
        check_domain(t, UNIT_DOMAIN)?;
        Ok(de_casteljau(&self.derivative(), t))
    }

    fn domain(&self) -> (f64, f64) {
        UNIT_DOMAIN
    }
}
