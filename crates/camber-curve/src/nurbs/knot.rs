//! Knot vector utilities for B-spline/NURBS evaluation.

use camber_core::{CamberError, Result, Tolerance};

/// A non-decreasing sequence of finite knots.
///
/// Whether the vector is uniform, clamped, or neither is a property of its
/// values only; every evaluator treats them the same way.
#[derive(Debug, Clone, PartialEq)]
pub struct KnotVector {
    knots: Vec<f64>,
}

impl KnotVector {
    pub fn new(knots: Vec<f64>) -> Result<Self> {
        check_ordering(&knots)?;
        Ok(Self { knots })
    }

    /// Evenly spaced knots `0, 1, 2, ...` for `control_points` points of the
    /// given degree. The valid domain is `[degree, control_points]`.
    pub fn uniform(control_points: usize, degree: usize) -> Result<Self> {
        check_count(control_points, degree)?;
        let knots = (0..control_points + degree + 1).map(|i| i as f64).collect();
        Ok(Self { knots })
    }

    /// Open uniform knots on `[0, 1]`: the end knots are repeated
    /// `degree + 1` times so the curve starts and ends on its end control
    /// points.
    pub fn clamped_uniform(control_points: usize, degree: usize) -> Result<Self> {
        check_count(control_points, degree)?;
        let spans = control_points - degree;
        let mut knots = Vec::with_capacity(control_points + degree + 1);
        knots.extend(std::iter::repeat(0.0).take(degree + 1));
        knots.extend((1..spans).map(|i| i as f64 / spans as f64));
        knots.extend(std::iter::repeat(1.0).take(degree + 1));
        Ok(Self { knots })
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.knots
    }

    pub fn len(&self) -> usize {
        self.knots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.knots
    }

    /// The valid parameter domain `[knots[degree], knots[len - degree - 1]]`
    /// of a curve of the given degree, or `None` if the vector is too short.
    pub fn domain(&self, degree: usize) -> Option<(f64, f64)> {
        if self.knots.len() < 2 * degree + 2 {
            return None;
        }
        Some((self.knots[degree], self.knots[self.knots.len() - degree - 1]))
    }

    /// How many knots coincide with `u` within `tolerance.parametric`.
    pub fn multiplicity(&self, u: f64, tolerance: Tolerance) -> usize {
        self.knots
            .iter()
            .filter(|&&k| tolerance.parametric_eq(k, u))
            .count()
    }

    /// Whether every knot interval has the same length.
    pub fn is_uniform(&self, tolerance: Tolerance) -> bool {
        let spacings: Vec<f64> = self.knots.windows(2).map(|w| w[1] - w[0]).collect();
        spacings
            .windows(2)
            .all(|s| tolerance.parametric_eq(s[0], s[1]))
    }
}

impl AsRef<[f64]> for KnotVector {
    fn as_ref(&self) -> &[f64] {
        &self.knots
    }
}

fn check_count(control_points: usize, degree: usize) -> Result<()> {
    if control_points < degree + 1 {
        return Err(CamberError::Domain(format!(
            "a degree {} B-spline needs at least {} control points, got {}",
            degree,
            degree + 1,
            control_points
        )));
    }
    Ok(())
}

fn check_ordering(knots: &[f64]) -> Result<()> {
    if let Some(k) = knots.iter().find(|k| !k.is_finite()) {
        return Err(CamberError::InvalidKnotVector(format!("non-finite knot {}", k)));
    }
    if let Some(i) = knots.windows(2).position(|w| w[1] < w[0]) {
        return Err(CamberError::InvalidKnotVector(format!(
            "knots must be non-decreasing, but knot {} ({}) > knot {} ({})",
            i,
            knots[i],
            i + 1,
            knots[i + 1]
        )));
    }
    Ok(())
}

/// Check that `knots` can carry a degree `degree` curve over
/// `control_points` points.
///
/// Requires `len == control_points + degree + 1`, finite non-decreasing
/// knots, no knot repeated more than `degree + 1` times, and a non-empty
/// domain `[knots[degree], knots[control_points]]`.
pub fn validate_knots(knots: &[f64], control_points: usize, degree: usize) -> Result<()> {
    check_count(control_points, degree)?;

    let expected = control_points + degree + 1;
    if knots.len() != expected {
        return Err(CamberError::InvalidKnotVector(format!(
            "expected {} knots for {} control points of degree {}, got {}",
            expected,
            control_points,
            degree,
            knots.len()
        )));
    }

    check_ordering(knots)?;

    let mut run = 1;
    for w in knots.windows(2) {
        run = if w[0] == w[1] { run + 1 } else { 1 };
        if run > degree + 1 {
            return Err(CamberError::InvalidKnotVector(format!(
                "knot {} has multiplicity above degree + 1 = {}",
                w[0],
                degree + 1
            )));
        }
    }

    if knots[degree] >= knots[control_points] {
        return Err(CamberError::InvalidKnotVector(format!(
            "empty parameter domain [{}, {}]",
            knots[degree], knots[control_points]
        )));
    }

    Ok(())
}

/// Find the knot span index for parameter `t` in the knot vector.
///
/// Returns the index `i` such that `knots[i] <= t < knots[i+1]`. At the
/// upper end of the domain the last non-empty span is returned instead, so
/// the curve is defined on the closed interval.
///
/// # Arguments
/// * `degree` - Degree of the B-spline
/// * `knots` - A knot vector accepted by [`validate_knots`]
/// * `n` - Number of control points minus 1
/// * `t` - Parameter value inside the domain
pub fn find_span(degree: usize, knots: &[f64], n: usize, t: f64) -> usize {
    if t >= knots[n + 1] {
        let mut span = n;
        while span > degree && knots[span] >= knots[span + 1] {
            span -= 1;
        }
        return span;
    }
    if t < knots[degree] {
        return degree;
    }

    // Binary search keeping knots[low] <= t < knots[high]
    let mut low = degree;
    let mut high = n + 1;
    while high - low > 1 {
        let mid = (low + high) / 2;
        if t < knots[mid] {
            high = mid;
        } else {
            low = mid;
        }
    }

    low
}

/// Compute the non-vanishing basis functions at parameter `t`.
///
/// Returns the `degree + 1` values `N_{span-degree,degree}(t)` through
/// `N_{span,degree}(t)`, built bottom-up from the degree-0 indicator of the
/// span. Any `0/0` term of the Cox-de Boor recurrence is taken as `0`.
///
/// # Arguments
/// * `degree` - Degree of the B-spline
/// * `knots` - The knot vector
/// * `span` - The knot span index (from `find_span`)
/// * `t` - Parameter value
pub fn basis_functions(degree: usize, knots: &[f64], span: usize, t: f64) -> Vec<f64> {
    let mut n = vec![0.0; degree + 1];
    let mut left = vec![0.0; degree + 1];
    let mut right = vec![0.0; degree + 1];

    n[0] = 1.0;

    for j in 1..=degree {
        left[j] = t - knots[span + 1 - j];
        right[j] = knots[span + j] - t;
        let mut saved = 0.0;

        for r in 0..j {
            let denominator = right[r + 1] + left[j - r];
            let temp = if denominator == 0.0 {
                0.0
            } else {
                n[r] / denominator
            };
            n[r] = saved + right[r + 1] * temp;
            saved = left[j - r] * temp;
        }

        n[j] = saved;
    }

    n
}

/// First derivatives of the `degree + 1` non-vanishing basis functions.
///
/// Uses `N'_{i,p} = p N_{i,p-1} / (u_{i+p} - u_i) - p N_{i+1,p-1} / (u_{i+p+1} - u_{i+1})`
/// on top of the degree `p - 1` basis of the same span, with `0/0 = 0`.
pub fn basis_function_derivatives(degree: usize, knots: &[f64], span: usize, t: f64) -> Vec<f64> {
    if degree == 0 {
        return vec![0.0];
    }

    let p = degree;
    let lower = basis_functions(p - 1, knots, span, t);
    let ratio = |numerator: f64, denominator: f64| {
        if denominator == 0.0 {
            0.0
        } else {
            numerator / denominator
        }
    };

    (0..=p)
        .map(|k| {
            let i = span - p + k;
            let rising = if k >= 1 { lower[k - 1] } else { 0.0 };
            let falling = if k < p { lower[k] } else { 0.0 };
            p as f64
                * (ratio(rising, knots[i + p] - knots[i])
                    - ratio(falling, knots[i + p + 1] - knots[i + 1]))
        })
        .collect()
}
