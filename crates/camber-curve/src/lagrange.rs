//! Lagrange polynomial interpolation in Newton divided-difference form.
//!
//! The interpolating polynomial of `n` samples has degree `n - 1` and passes
//! through every sample exactly. Between samples it may oscillate wildly
//! (Runge's phenomenon), which is why splines exist.

use camber_core::{CamberError, Result, Tolerance};
use camber_math::ControlPoint;

use crate::curve::{check_domain, Curve};

/// Lagrange basis weights `l_j(t)` for the given abscissae.
///
/// `l_j(x_k)` is 1 when `j == k` and 0 otherwise, and the weights sum to 1
/// for every `t`.
///
/// # Errors
/// `DegenerateInput` when `abscissae` is empty or two abscissae coincide
/// within `tolerance.parametric`.
pub fn lagrange_weights(abscissae: &[f64], t: f64, tolerance: Tolerance) -> Result<Vec<f64>> {
    check_abscissae(abscissae, tolerance)?;

    let weights = abscissae
        .iter()
        .enumerate()
        .map(|(j, &xj)| {
            abscissae
                .iter()
                .enumerate()
                .filter(|&(m, _)| m != j)
                .fold(1.0, |acc, (_, &xm)| acc * (t - xm) / (xj - xm))
        })
        .collect();
    Ok(weights)
}

/// Newton divided-difference coefficients `f[x0], f[x0, x1], ...`.
///
/// # Errors
/// `DegenerateInput` when the slices differ in length, are empty, or contain
/// coincident abscissae.
pub fn divided_differences<P: ControlPoint>(
    abscissae: &[f64],
    values: &[P],
    tolerance: Tolerance,
) -> Result<Vec<P>> {
    if abscissae.len() != values.len() {
        return Err(CamberError::DegenerateInput(format!(
            "{} abscissae for {} values",
            abscissae.len(),
            values.len()
        )));
    }
    check_abscissae(abscissae, tolerance)?;

    let n = values.len();
    let mut coefficients = values.to_vec();
    for j in 1..n {
        for i in (j..n).rev() {
            coefficients[i] =
                (coefficients[i] - coefficients[i - 1]) / (abscissae[i] - abscissae[i - j]);
        }
    }
    Ok(coefficients)
}

fn check_abscissae(abscissae: &[f64], tolerance: Tolerance) -> Result<()> {
    if abscissae.is_empty() {
        return Err(CamberError::DegenerateInput(
            "Lagrange interpolation needs at least one abscissa".to_string(),
        ));
    }
    if let Some(x) = abscissae.iter().find(|x| !x.is_finite()) {
        return Err(CamberError::DegenerateInput(format!("non-finite abscissa {}", x)));
    }
    for (i, &a) in abscissae.iter().enumerate() {
        for &b in &abscissae[i + 1..] {
            if tolerance.parametric_eq(a, b) {
                return Err(CamberError::DegenerateInput(format!(
                    "duplicate abscissa {} would divide by zero",
                    a
                )));
            }
        }
    }
    Ok(())
}

/// The unique polynomial of minimal degree through a set of samples.
#[derive(Debug, Clone, PartialEq)]
pub struct LagrangeInterpolant<P: ControlPoint> {
    abscissae: Vec<f64>,
    coefficients: Vec<P>,
    domain: (f64, f64),
}

impl<P: ControlPoint> LagrangeInterpolant<P> {
    pub fn new(abscissae: Vec<f64>, values: &[P]) -> Result<Self> {
        Self::with_tolerance(abscissae, values, Tolerance::default())
    }

    pub fn with_tolerance(abscissae: Vec<f64>, values: &[P], tolerance: Tolerance) -> Result<Self> {
        let coefficients = divided_differences(&abscissae, values, tolerance)?;
        let min = abscissae.iter().copied().fold(f64::INFINITY, f64::min);
        let max = abscissae.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Ok(Self {
            abscissae,
            coefficients,
            domain: (min, max),
        })
    }

    /// Polynomial degree, one less than the number of samples.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn coefficients(&self) -> &[P] {
        &self.coefficients
    }

    /// Evaluate the polynomial anywhere on the real line.
    pub fn evaluate(&self, t: f64) -> P {
        self.evaluate_with_derivative(t).0
    }

    /// Nested multiplication carrying the derivative along.
    fn evaluate_with_derivative(&self, t: f64) -> (P, P) {
        let n = self.coefficients.len();
        let mut value = self.coefficients[n - 1];
        let mut derivative = P::ZERO;
        for i in (0..n - 1).rev() {
            let factor = t - self.abscissae[i];
            derivative = derivative * factor + value;
            value = value * factor + self.coefficients[i];
        }
        (value, derivative)
    }
}

impl<P: ControlPoint> Curve<P> for LagrangeInterpolant<P> {
    fn point_at(&self, t: f64) -> Result<P> {
        check_domain(t, self.domain)?;
        Ok(self.evaluate(t))
    }

    fn tangent_at(&self, t: f64) -> Result<P> {
        check_domain(t, self.domain)?;
        Ok(self.evaluate_with_derivative(t).1)
    }

    fn domain(&self) -> (f64, f64) {
        self.domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use camber_math::{dvec2, linspace};

    #[test]
    fn test_duplicate_abscissae_rejected() {
        let err = lagrange_weights(&[0.0, 1.0, 1.0], 0.5, Tolerance::default()).unwrap_err();
        assert!(matches!(err, CamberError::DegenerateInput(_)));
    }

    #[test]
    fn test_empty_abscissae_rejected() {
        assert!(lagrange_weights(&[], 0.5, Tolerance::default()).is_err());
        assert!(LagrangeInterpolant::<f64>::new(vec![], &[]).is_err());
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        let err = divided_differences(&[0.0, 1.0], &[1.0], Tolerance::default()).unwrap_err();
        assert!(matches!(err, CamberError::DegenerateInput(_)));
    }

    #[test]
    fn test_weights_are_cardinal_at_samples() {
        let xs = [0.0, 0.5, 2.0, 3.0];
        for (k, &x) in xs.iter().enumerate() {
            let w = lagrange_weights(&xs, x, Tolerance::default()).unwrap();
            for (j, &value) in w.iter().enumerate() {
                let expected = if j == k { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(value, expected, epsilon = 1e-14);
            }
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        let xs = [-1.0, 0.3, 1.7, 2.0, 4.5];
        for t in linspace(-2.0, 5.0, 29) {
            let w = lagrange_weights(&xs, t, Tolerance::default()).unwrap();
            assert_abs_diff_eq!(w.iter().sum::<f64>(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_divided_differences_of_quadratic() {
        // f(x) = x^2: f[x0] = 0, f[x0,x1] = 1, f[x0,x1,x2] = 1
        let c = divided_differences(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0], Tolerance::default())
            .unwrap();
        assert_eq!(c, vec![0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_reproduces_cubic_exactly() {
        let f = |x: f64| 2.0 * x * x * x - x + 3.0;
        let xs = vec![-1.0, 0.0, 1.5, 2.0];
        let ys: Vec<f64> = xs.iter().map(|&x| f(x)).collect();
        let interp = LagrangeInterpolant::new(xs, &ys).unwrap();
        assert_eq!(interp.degree(), 3);
        for t in linspace(-3.0, 3.0, 25) {
            assert_abs_diff_eq!(interp.evaluate(t), f(t), epsilon = 1e-10);
        }
    }

    #[test]
    fn test_curve_interpolates_points_and_rejects_extrapolation() {
        let points = [dvec2(0.0, 0.0), dvec2(1.0, 2.0), dvec2(3.0, 1.0)];
        let interp = LagrangeInterpolant::new(vec![0.0, 0.5, 1.0], &points).unwrap();
        for (t, p) in [0.0, 0.5, 1.0].iter().zip(&points) {
            assert!(interp.point_at(*t).unwrap().abs_diff_eq(*p, 1e-12));
        }
        assert!(matches!(interp.point_at(1.5), Err(CamberError::Domain(_))));
    }

    #[test]
    fn test_tangent_of_parabola() {
        let xs = vec![0.0, 1.0, 2.0];
        let interp = LagrangeInterpolant::new(xs, &[0.0, 1.0, 4.0]).unwrap();
        assert_abs_diff_eq!(interp.tangent_at(1.5).unwrap(), 3.0, epsilon = 1e-12);
    }
}
