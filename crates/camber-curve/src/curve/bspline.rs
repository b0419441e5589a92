//! B-spline and NURBS curve implementations.

use camber_core::{Result, Validate};
use camber_math::ControlPoint;

use super::{check_domain, Curve};
use crate::nurbs::{deboor, validate_knots, validate_weights, KnotVector};

/// A B-spline curve defined by degree, knot vector, and control points.
///
/// Uniform and non-uniform curves are the same type: uniformity is only a
/// property of the knot values.
#[derive(Debug, Clone, PartialEq)]
pub struct BSplineCurve<P: ControlPoint> {
    degree: usize,
    knots: KnotVector,
    control_points: Vec<P>,
}

impl<P: ControlPoint> BSplineCurve<P> {
    /// # Errors
    /// `InvalidKnotVector` unless `knots.len() == control_points.len() + degree + 1`
    /// and the knots are a valid non-decreasing sequence with a non-empty domain.
    pub fn new(degree: usize, knots: Vec<f64>, control_points: Vec<P>) -> Result<Self> {
        let curve = Self {
            degree,
            knots: KnotVector::new(knots)?,
            control_points,
        };
        curve.validate()?;
        Ok(curve)
    }

    /// Uniform B-spline: evenly spaced knots, domain `[degree, n]`.
    pub fn uniform(degree: usize, control_points: Vec<P>) -> Result<Self> {
        let knots = KnotVector::uniform(control_points.len(), degree)?;
        Self::new(degree, knots.into_inner(), control_points)
    }

    /// Open uniform B-spline on `[0, 1]` passing through its end points.
    pub fn clamped(degree: usize, control_points: Vec<P>) -> Result<Self> {
        let knots = KnotVector::clamped_uniform(control_points.len(), degree)?;
        Self::new(degree, knots.into_inner(), control_points)
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn knots(&self) -> &KnotVector {
        &self.knots
    }

    pub fn control_points(&self) -> &[P] {
        &self.control_points
    }
}

impl<P: ControlPoint> Validate for BSplineCurve<P> {
    fn validate(&self) -> Result<()> {
        validate_knots(self.knots.as_slice(), self.control_points.len(), self.degree)
    }
}

impl<P: ControlPoint> Curve<P> for BSplineCurve<P> {
    fn point_at(&self, t: f64) -> Result<P> {
        check_domain(t, self.domain())?;
        Ok(deboor::curve_point(
            self.degree,
            self.knots.as_slice(),
            &self.control_points,
            t,
        ))
    }

    fn tangent_at(&self, t: f64) -> Result<P> {
        check_domain(t, self.domain())?;
        Ok(deboor::curve_tangent(
            self.degree,
            self.knots.as_slice(),
            &self.control_points,
            t,
        ))
    }

    fn domain(&self) -> (f64, f64) {
        let knots = self.knots.as_slice();
        (knots[self.degree], knots[self.control_points.len()])
    }
}

/// A NURBS (Non-Uniform Rational B-Spline) curve.
///
/// Extends `BSplineCurve` with one positive weight per control point.
#[derive(Debug, Clone, PartialEq)]
pub struct NurbsCurve<P: ControlPoint> {
    degree: usize,
    knots: KnotVector,
    control_points: Vec<P>,
    weights: Vec<f64>,
}

impl<P: ControlPoint> NurbsCurve<P> {
    /// # Errors
    /// As [`BSplineCurve::new`], plus `InvalidWeights` unless there is one
    /// finite positive weight per control point.
    pub fn new(
        degree: usize,
        knots: Vec<f64>,
        control_points: Vec<P>,
        weights: Vec<f64>,
    ) -> Result<Self> {
        let curve = Self {
            degree,
            knots: KnotVector::new(knots)?,
            control_points,
            weights,
        };
        curve.validate()?;
        Ok(curve)
    }

    /// The same curve as `bspline`, written with unit weights.
    pub fn from_bspline(bspline: BSplineCurve<P>) -> Self {
        let weights = vec![1.0; bspline.control_points.len()];
        Self {
            degree: bspline.degree,
            knots: bspline.knots,
            control_points: bspline.control_points,
            weights,
        }
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn knots(&self) -> &KnotVector {
        &self.knots
    }

    pub fn control_points(&self) -> &[P] {
        &self.control_points
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

impl<P: ControlPoint> Validate for NurbsCurve<P> {
    fn validate(&self) -> Result<()> {
        validate_knots(self.knots.as_slice(), self.control_points.len(), self.degree)?;
        validate_weights(&self.weights, self.control_points.len())
    }
}

impl<P: ControlPoint> Curve<P> for NurbsCurve<P> {
    fn point_at(&self, t: f64) -> Result<P> {
        check_domain(t, self.domain())?;
        Ok(deboor::nurbs_curve_point(
            self.degree,
            self.knots.as_slice(),
            &self.control_points,
            &self.weights,
            t,
        ))
    }

    fn tangent_at(&self, t: f64) -> Result<P> {
        check_domain(t, self.domain())?;
        Ok(deboor::nurbs_curve_tangent(
            self.degree,
            self.knots.as_slice(),
            &self.control_points,
            &self.weights,
            t,
        ))
    }

    fn domain(&self) -> (f64, f64) {
        let knots = self.knots.as_slice();
        (knots[self.degree], knots[self.control_points.len()])
    }
}
