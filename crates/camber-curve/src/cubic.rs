//! Cubic polynomial segments, the common lowered form of Bezier, Hermite,
//! and Catmull-Rom pieces.

use camber_math::ControlPoint;

/// A cubic `c0 + c1 t + c2 t^2 + c3 t^3` over the local parameter `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment<P: ControlPoint> {
    pub coefficients: [P; 4],
}

impl<P: ControlPoint> CubicSegment<P> {
    pub fn from_coefficients(coefficients: [P; 4]) -> Self {
        Self { coefficients }
    }

    /// Cubic Bezier with control points `[p0, p1, p2, p3]`.
    pub fn from_bezier([p0, p1, p2, p3]: [P; 4]) -> Self {
        Self::from_coefficients([
            p0,
            (p1 - p0) * 3.0,
            (p0 - p1 * 2.0 + p2) * 3.0,
            p3 - p0 + (p1 - p2) * 3.0,
        ])
    }

    /// Hermite cubic from positions `p0`, `p1` and tangents `m0`, `m1`.
    pub fn from_hermite(p0: P, m0: P, p1: P, m1: P) -> Self {
        Self::from_coefficients([
            p0,
            m0,
            (p1 - p0) * 3.0 - m0 * 2.0 - m1,
            (p0 - p1) * 2.0 + m0 + m1,
        ])
    }

    /// Uniform Catmull-Rom segment running from `p1` to `p2`.
    pub fn from_catmull_rom([p0, p1, p2, p3]: [P; 4]) -> Self {
        Self::from_coefficients([
            p1,
            (p2 - p0) * 0.5,
            (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * 0.5,
            (p3 - p0 + (p1 - p2) * 3.0) * 0.5,
        ])
    }

    pub fn position(&self, t: f64) -> P {
        let [c0, c1, c2, c3] = self.coefficients;
        ((c3 * t + c2) * t + c1) * t + c0
    }

    pub fn velocity(&self, t: f64) -> P {
        let [_, c1, c2, c3] = self.coefficients;
        (c3 * (3.0 * t) + c2 * 2.0) * t + c1
    }

    pub fn acceleration(&self, t: f64) -> P {
        let [_, _, c2, c3] = self.coefficients;
        c3 * (6.0 * t) + c2 * 2.0
    }
}
