//! De Boor evaluation of B-spline and NURBS curves.
//!
//! The `curve_*` and `nurbs_curve_*` kernels assume their inputs already
//! passed [`validate_knots`] and [`validate_weights`]; [`evaluate`] and
//! [`tangent`] are the checked entry points.

use camber_core::{CamberError, Result};
use camber_math::ControlPoint;

use super::knot::{basis_function_derivatives, basis_functions, find_span, validate_knots};
use crate::curve::check_domain;

/// Evaluate a B-spline curve, or a NURBS curve when `weights` is given.
///
/// # Errors
/// * `InvalidKnotVector` when `knots` does not fit `control_points` and `degree`
/// * `InvalidWeights` when `weights` has the wrong length or a non-positive entry
/// * `Domain` when `t` lies outside `[knots[degree], knots[control_points.len()]]`
pub fn evaluate<P: ControlPoint>(
    control_points: &[P],
    knots: &[f64],
    degree: usize,
    t: f64,
    weights: Option<&[f64]>,
) -> Result<P> {
    check_inputs(control_points, knots, degree, t, weights)?;
    Ok(match weights {
        Some(weights) => nurbs_curve_point(degree, knots, control_points, weights, t),
        None => curve_point(degree, knots, control_points, t),
    })
}

/// First derivative counterpart of [`evaluate`], with the same checks.
pub fn tangent<P: ControlPoint>(
    control_points: &[P],
    knots: &[f64],
    degree: usize,
    t: f64,
    weights: Option<&[f64]>,
) -> Result<P> {
    check_inputs(control_points, knots, degree, t, weights)?;
    Ok(match weights {
        Some(weights) => nurbs_curve_tangent(degree, knots, control_points, weights, t),
        None => curve_tangent(degree, knots, control_points, t),
    })
}

fn check_inputs<P>(
    control_points: &[P],
    knots: &[f64],
    degree: usize,
    t: f64,
    weights: Option<&[f64]>,
) -> Result<()> {
    validate_knots(knots, control_points.len(), degree)?;
    if let Some(weights) = weights {
        validate_weights(weights, control_points.len())?;
    }
    check_domain(t, (knots[degree], knots[control_points.len()]))
}

/// Check that there is one finite, strictly positive weight per control point.
pub fn validate_weights(weights: &[f64], control_points: usize) -> Result<()> {
    if weights.len() != control_points {
        return Err(CamberError::InvalidWeights(format!(
            "expected {} weights, got {}",
            control_points,
            weights.len()
        )));
    }
    if let Some(w) = weights.iter().find(|w| !(w.is_finite() && **w > 0.0)) {
        return Err(CamberError::InvalidWeights(format!(
            "weights must be finite and positive, got {}",
            w
        )));
    }
    Ok(())
}

/// Evaluate a B-spline curve point at parameter `t`.
pub(crate) fn curve_point<P: ControlPoint>(
    degree: usize,
    knots: &[f64],
    control_points: &[P],
    t: f64,
) -> P {
    let n = control_points.len() - 1;
    let span = find_span(degree, knots, n, t);
    let basis = basis_functions(degree, knots, span, t);

    basis
        .iter()
        .enumerate()
        .fold(P::ZERO, |point, (i, &b)| point + control_points[span - degree + i] * b)
}

/// Evaluate the tangent (first derivative) of a B-spline curve at parameter `t`.
pub(crate) fn curve_tangent<P: ControlPoint>(
    degree: usize,
    knots: &[f64],
    control_points: &[P],
    t: f64,
) -> P {
    let n = control_points.len() - 1;
    let span = find_span(degree, knots, n, t);
    let dn = basis_function_derivatives(degree, knots, span, t);

    dn.iter()
        .enumerate()
        .fold(P::ZERO, |tangent, (i, &d)| tangent + control_points[span - degree + i] * d)
}

/// Evaluate a rational B-spline (NURBS) curve point at parameter `t`.
///
/// Each basis value is scaled by its control point's weight and the sum is
/// divided by the total weight, so unit weights give back [`curve_point`].
pub(crate) fn nurbs_curve_point<P: ControlPoint>(
    degree: usize,
    knots: &[f64],
    control_points: &[P],
    weights: &[f64],
    t: f64,
) -> P {
    let n = control_points.len() - 1;
    let span = find_span(degree, knots, n, t);
    let basis = basis_functions(degree, knots, span, t);

    let mut point = P::ZERO;
    let mut w = 0.0;

    for (i, &b) in basis.iter().enumerate() {
        let idx = span - degree + i;
        let bw = b * weights[idx];
        point = point + control_points[idx] * bw;
        w += bw;
    }

    point / w
}

/// Evaluate the tangent of a NURBS curve at parameter `t`.
pub(crate) fn nurbs_curve_tangent<P: ControlPoint>(
    degree: usize,
    knots: &[f64],
    control_points: &[P],
    weights: &[f64],
    t: f64,
) -> P {
    let n = control_points.len() - 1;
    let span = find_span(degree, knots, n, t);
    let basis = basis_functions(degree, knots, span, t);
    let dbasis = basis_function_derivatives(degree, knots, span, t);

    let mut a = P::ZERO;
    let mut da = P::ZERO;
    let mut w = 0.0;
    let mut dw = 0.0;

    for i in 0..=degree {
        let idx = span - degree + i;
        let bw = basis[i] * weights[idx];
        let dbw = dbasis[i] * weights[idx];
        a = a + control_points[idx] * bw;
        da = da + control_points[idx] * dbw;
        w += bw;
        dw += dbw;
    }

    let c = a / w;
    (da - c * dw) / w
}
