//! The vector space that control points, tangents, and curve points live in.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use glam::{DVec2, DVec3, DVec4};

/// A point (or vector) that curves can blend.
///
/// Every evaluator in the library only needs affine combinations of control
/// points, so anything closed under addition and scaling by `f64` works:
/// plain scalars for 1D curves, and glam's double-precision vectors for 2D,
/// 3D, and homogeneous 4D curves.
pub trait ControlPoint:
    Copy
    + Debug
    + PartialEq
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    const ZERO: Self;

    /// Euclidean length of the point seen as a vector.
    fn norm(self) -> f64;

    fn distance(self, other: Self) -> f64 {
        (self - other).norm()
    }
}

impl ControlPoint for f64 {
    const ZERO: Self = 0.0;

    fn norm(self) -> f64 {
        self.abs()
    }
}

macro_rules! impl_control_point_for_dvec {
    ($($ty:ty),+) => {
        $(
            impl ControlPoint for $ty {
                const ZERO: Self = <$ty>::ZERO;

                fn norm(self) -> f64 {
                    self.length()
                }
            }
        )+
    };
}

impl_control_point_for_dvec!(DVec2, DVec3, DVec4);

/// Linear interpolation `a * (1 - t) + b * t`.
///
/// Written in this form so that `t = 0` and `t = 1` return `a` and `b` exactly.
#[inline]
pub fn lerp<P: ControlPoint>(a: P, b: P, t: f64) -> P {
    a * (1.0 - t) + b * t
}
