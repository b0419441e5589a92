//! Tools for composing easing functions.

/// "Flip" a parameter: `1 - t`.
///
/// Flipping the argument of an easing function mirrors it horizontally;
/// flipping its result mirrors it vertically.
///
/// ```
/// use camber_curve::ease::{flip, smooth_start_2};
///
/// // smooth stop built from smooth start
/// let stop = |t: f64| flip(smooth_start_2(flip(t)));
/// assert_eq!(stop(1.0), 1.0);
/// ```
#[inline(always)]
pub fn flip(t: f64) -> f64 {
    1.0 - t
}

/// Blend two easing functions with a fixed `weight` in `[0, 1]`.
#[inline]
pub fn mix(a: impl Fn(f64) -> f64, b: impl Fn(f64) -> f64, weight: f64, t: f64) -> f64 {
    a(t) * (1.0 - weight) + b(t) * weight
}

/// Blend from `a` to `b` using `t` itself as the weight.
#[inline]
pub fn crossfade(a: impl Fn(f64) -> f64, b: impl Fn(f64) -> f64, t: f64) -> f64 {
    mix(a, b, t, t)
}

/// Multiply an easing function by its parameter.
#[inline]
pub fn scale(f: impl Fn(f64) -> f64, t: f64) -> f64 {
    t * f(t)
}

/// Multiply an easing function by the flipped parameter.
#[inline]
pub fn reverse_scale(f: impl Fn(f64) -> f64, t: f64) -> f64 {
    flip(t) * f(t)
}

/// Parabolic arch: `0` at both ends, `1` at `t = 0.5`.
///
/// Not an easing function by itself (it ends at `0`), but useful as a blend
/// weight.
#[inline]
pub fn arch(t: f64) -> f64 {
    4.0 * t * flip(t)
}
