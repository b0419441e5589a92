//! Sampling curves into point sequences.

use camber_core::{Result, Tolerance};
use camber_math::{ControlPoint, Linspace};
use rayon::prelude::*;

use crate::curve::Curve;

/// Evaluate `curve` at `n` evenly spaced parameters spanning its domain.
///
/// Both domain ends are included when `n >= 2`; a single sample lands on
/// the domain end.
pub fn sample<P: ControlPoint, C: Curve<P> + ?Sized>(curve: &C, n: usize) -> Result<Vec<P>> {
    let (t_min, t_max) = curve.domain();
    Linspace::new(t_min, t_max, n)
        .map(|t| curve.point_at(t))
        .collect()
}

/// [`sample`] evaluated on the rayon thread pool. The output order matches
/// the parameter order.
pub fn par_sample<P: ControlPoint, C: Curve<P> + ?Sized>(curve: &C, n: usize) -> Result<Vec<P>> {
    let (t_min, t_max) = curve.domain();
    let params: Vec<f64> = Linspace::new(t_min, t_max, n).collect();
    params.par_iter().map(|&t| curve.point_at(t)).collect()
}

/// Convert a curve to a polyline using adaptive subdivision.
///
/// The algorithm recursively subdivides segments where the midpoint deviation
/// from the chord exceeds `tolerance.linear`.
///
/// # Returns
/// A vector of points approximating the curve, starting and ending on the
/// domain ends.
pub fn curve_to_polyline<P: ControlPoint, C: Curve<P> + ?Sized>(
    curve: &C,
    tolerance: Tolerance,
) -> Result<Vec<P>> {
    let (t_min, t_max) = curve.domain();
    let start = curve.point_at(t_min)?;
    let end = curve.point_at(t_max)?;
    let mut points = vec![start];
    subdivide_curve(curve, (t_min, start), (t_max, end), tolerance.linear, &mut points, 0)?;
    Ok(points)
}

/// Maximum recursion depth for adaptive subdivision.
const MAX_DEPTH: u32 = 12;

fn subdivide_curve<P: ControlPoint, C: Curve<P> + ?Sized>(
    curve: &C,
    (t0, p0): (f64, P),
    (t1, p1): (f64, P),
    tolerance: f64,
    points: &mut Vec<P>,
    depth: u32,
) -> Result<()> {
    if depth >= MAX_DEPTH {
        points.push(p1);
        return Ok(());
    }

    let t_mid = (t0 + t1) * 0.5;
    let p_mid = curve.point_at(t_mid)?;

    // Chord midpoint
    let chord_mid = (p0 + p1) * 0.5;
    let deviation = p_mid.distance(chord_mid);

    // Always split once so symmetric curves are not mistaken for their chord
    if deviation > tolerance || depth == 0 {
        subdivide_curve(curve, (t0, p0), (t_mid, p_mid), tolerance, points, depth + 1)?;
        subdivide_curve(curve, (t_mid, p_mid), (t1, p1), tolerance, points, depth + 1)?;
    } else {
        points.push(p1);
    }
    Ok(())
}
