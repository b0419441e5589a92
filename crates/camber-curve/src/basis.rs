//! Polynomial blending weights for a parameter `t`.
//!
//! These are plain polynomials: they accept any real `t`. Curve types that
//! use them are the ones that reject parameters outside their domain.

/// Binomial coefficient `n choose k` as a float.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}

/// The `n + 1` Bernstein basis polynomials of degree `n` at `t`.
///
/// Built with the de Casteljau style recurrence
/// `B[i, j] = (1 - t) B[i, j - 1] + t B[i - 1, j - 1]`, which keeps every
/// intermediate value non-negative on `[0, 1]` and the total exactly
/// partitioned.
pub fn bernstein(n: usize, t: f64) -> Vec<f64> {
    let mut b = vec![0.0; n + 1];
    b[0] = 1.0;
    let s = 1.0 - t;
    for j in 1..=n {
        let mut saved = 0.0;
        for weight in b.iter_mut().take(j) {
            let temp = *weight;
            *weight = saved + s * temp;
            saved = t * temp;
        }
        b[j] = saved;
    }
    b
}

/// Cubic Bernstein weights `[(1-t)^3, 3t(1-t)^2, 3t^2(1-t), t^3]`.
pub fn cubic_bernstein(t: f64) -> [f64; 4] {
    let s = 1.0 - t;
    [s * s * s, 3.0 * t * s * s, 3.0 * t * t * s, t * t * t]
}

/// Hermite basis `[h00, h10, h01, h11]` at `t`.
///
/// `h00` and `h01` weight the start and end positions, `h10` and `h11` the
/// start and end tangents.
pub fn hermite_basis(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        2.0 * t3 - 3.0 * t2 + 1.0,
        t3 - 2.0 * t2 + t,
        -2.0 * t3 + 3.0 * t2,
        t3 - t2,
    ]
}

/// First derivative of [`hermite_basis`] with respect to `t`.
pub fn hermite_basis_derivative(t: f64) -> [f64; 4] {
    let t2 = t * t;
    [
        6.0 * t2 - 6.0 * t,
        3.0 * t2 - 4.0 * t + 1.0,
        -6.0 * t2 + 6.0 * t,
        3.0 * t2 - 2.0 * t,
    ]
}

/// Uniform Catmull-Rom weights for `[p0, p1, p2, p3]`, blending the segment
/// from `p1` (at `t = 0`) to `p2` (at `t = 1`).
pub fn catmull_rom_basis(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        0.5 * (-t3 + 2.0 * t2 - t),
        0.5 * (3.0 * t3 - 5.0 * t2 + 2.0),
        0.5 * (-3.0 * t3 + 4.0 * t2 + t),
        0.5 * (t3 - t2),
    ]
}
