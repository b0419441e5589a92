//! Hermite cubics and splines built from them.

use camber_core::Result;
use camber_math::ControlPoint;

use super::{check_point_count, Segments, UNIT_DOMAIN};
use crate::basis::hermite_basis;
use crate::cubic::CubicSegment;
use crate::curve::{check_domain, Curve};

/// Evaluate the cubic that starts at `p0` with tangent `m0` and ends at `p1`
/// with tangent `m1`.
///
/// # Errors
/// `Domain` if `t` is outside `[0, 1]`.
pub fn hermite<P: ControlPoint>(p0: P, m0: P, p1: P, m1: P, t: f64) -> Result<P> {
    check_domain(t, UNIT_DOMAIN)?;
    let [h00, h10, h01, h11] = hermite_basis(t);
    Ok(p0 * h00 + m0 * h10 + p1 * h01 + m1 * h11)
}

/// A C¹ spline through `(point, tangent)` pairs.
///
/// Each pair's tangent is the derivative with respect to the local
/// parameter of the segments meeting there.
#[derive(Debug, Clone, PartialEq)]
pub struct HermiteSpline<P: ControlPoint> {
    nodes: Vec<(P, P)>,
    segments: Segments<P>,
}

impl<P: ControlPoint> HermiteSpline<P> {
    pub const MIN_POINTS: usize = 2;

    /// # Errors
    /// `DegenerateInput` with fewer than [`Self::MIN_POINTS`] pairs.
    pub fn new(nodes: Vec<(P, P)>) -> Result<Self> {
        check_point_count("Hermite spline", nodes.len(), Self::MIN_POINTS)?;
        let segments = nodes
            .windows(2)
            .map(|w| {
                let (p0, m0) = w[0];
                let (p1, m1) = w[1];
                CubicSegment::from_hermite(p0, m0, p1, m1)
            })
            .collect();
        Ok(Self {
            nodes,
            segments: Segments::new(segments),
        })
    }

    pub fn nodes(&self) -> &[(P, P)] {
        &self.nodes
    }

    pub fn segment(&self, i: usize) -> Option<&CubicSegment<P>> {
        self.segments.as_slice().get(i)
    }
}

impl<P: ControlPoint> Curve<P> for HermiteSpline<P> {
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
