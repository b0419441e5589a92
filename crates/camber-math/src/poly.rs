/// Evaluate a polynomial from its coefficients.
///
/// A polynomial of degree _n_ has _n_ + 1 coefficients, given in the order
/// `a[n] .. a[0]`. A single coefficient is a constant function and an empty
/// slice is the zero polynomial.
///
/// Uses _Horner's Rule_, O(n) in the number of coefficients.
///
/// # Examples
///
/// ```
/// use camber_math::poly_eval;
///
/// // p(x) = x^2 + 6x + 3
/// let poly = [1., 6., 3.];
/// assert_eq!(poly_eval(&poly, 0.), 3.);
/// assert_eq!(poly_eval(&poly, 1.), 10.);
/// ```
pub fn poly_eval(coefficients: &[f64], x: f64) -> f64 {
    // p(x) = (((a_n*x + a_n-1)*x + ... + a_2)*x + a_1)*x + a_0
    coefficients.iter().fold(0.0, |acc, c| x * acc + c)
}
