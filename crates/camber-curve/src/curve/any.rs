//! A closed set of curve families behind one evaluation interface.

use camber_core::Result;
use camber_math::ControlPoint;

use super::{BSplineCurve, Curve, NurbsCurve};
use crate::bezier::BezierCurve;
use crate::lagrange::LagrangeInterpolant;
use crate::spline::{CatmullRomSpline, CubicSpline, HermiteSpline};

/// Any curve this crate can build, tagged by family.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyCurve<P: ControlPoint> {
    Bezier(BezierCurve<P>),
    Hermite(HermiteSpline<P>),
    CatmullRom(CatmullRomSpline<P>),
    CubicSpline(CubicSpline<P>),
    BSpline(BSplineCurve<P>),
    Nurbs(NurbsCurve<P>),
    Lagrange(LagrangeInterpolant<P>),
}

impl<P: ControlPoint> AnyCurve<P> {
    /// Short family name, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            AnyCurve::Bezier(_) => "bezier",
            AnyCurve::Hermite(_) => "hermite",
            AnyCurve::CatmullRom(_) => "catmull-rom",
            AnyCurve::CubicSpline(_) => "cubic-spline",
            AnyCurve::BSpline(_) => "b-spline",
            AnyCurve::Nurbs(_) => "nurbs",
            AnyCurve::Lagrange(_) => "lagrange",
        }
    }

    fn as_curve(&self) -> &dyn Curve<P> {
        match self {
            AnyCurve::Bezier(c) => c,
            AnyCurve::Hermite(c) => c,
            AnyCurve::CatmullRom(c) => c,
            AnyCurve::CubicSpline(c) => c,
            AnyCurve::BSpline(c) => c,
            AnyCurve::Nurbs(c) => c,
            AnyCurve::Lagrange(c) => c,
        }
    }
}

impl<P: ControlPoint> Curve<P> for AnyCurve<P> {
    fn point_at(&self, t: f64) -> Result<P> {
        self.as_curve().point_at(t)
    }

    fn tangent_at(&self, t: f64) -> Result<P> {
        self.as_curve().tangent_at(t)
    }

    fn domain(&self) -> (f64, f64) {
        self.as_curve().domain()
    }
}

macro_rules! impl_from_curve {
    ($($variant:ident($ty:ident)),* $(,)?) => {
        $(
            impl<P: ControlPoint> From<$ty<P>> for AnyCurve<P> {
                fn from(curve: $ty<P>) -> Self {
                    AnyCurve::$variant(curve)
                }
            }
        )*
    };
}

impl_from_curve!(
    Bezier(BezierCurve),
    Hermite(HermiteSpline),
    CatmullRom(CatmullRomSpline),
    CubicSpline(CubicSpline),
    BSpline(BSplineCurve),
    Nurbs(NurbsCurve),
    Lagrange(LagrangeInterpolant),
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spline::Parametrization;
    use camber_core::Tolerance;
    use camber_math::{dvec2, DVec2};

    fn polygon() -> Vec<DVec2> {
        vec![
            dvec2(0.0, 0.0),
            dvec2(1.0, 2.0),
            dvec2(3.0, 2.0),
            dvec2(4.0, 0.0),
        ]
    }

    fn every_family() -> Vec<AnyCurve<DVec2>> {
        let pts = polygon();
        vec![
            BezierCurve::new(pts.clone()).unwrap().into(),
            HermiteSpline::new(vec![(pts[0], pts[1]), (pts[3], pts[2])]).unwrap().into(),
            CatmullRomSpline::new(pts.clone(), Parametrization::Centripetal)
                .unwrap()
                .into(),
            CubicSpline::new(pts.clone()).unwrap().into(),
            BSplineCurve::clamped(2, pts.clone()).unwrap().into(),
            NurbsCurve::new(
                2,
                vec![0.0, 0.0, 0.0, 0.5, 1.0, 1.0, 1.0],
                pts.clone(),
                vec![1.0, 2.0, 0.5, 1.0],
            )
            .unwrap()
            .into(),
            LagrangeInterpolant::new(vec![0.0, 1.0, 2.0, 3.0], &pts).unwrap().into(),
        ]
    }

    #[test]
    fn test_dispatch_matches_inner_curve() {
        let pts = polygon();
        let bezier = BezierCurve::new(pts.clone()).unwrap();
        let any = AnyCurve::from(bezier.clone());
        assert_eq!(any.kind(), "bezier");
        assert_eq!(any.domain(), bezier.domain());
        assert_eq!(any.point_at(0.3).unwrap(), bezier.point_at(0.3).unwrap());
        assert_eq!(any.tangent_at(0.3).unwrap(), bezier.tangent_at(0.3).unwrap());
    }

    #[test]
    fn test_every_family_interpolates_its_ends() {
        let pts = polygon();
        for curve in every_family() {
            let (t_min, t_max) = curve.domain();
            let start = curve.point_at(t_min).unwrap();
            let end = curve.point_at(t_max).unwrap();
            assert!(start.abs_diff_eq(pts[0], 1e-9), "{} start {}", curve.kind(), start);
            assert!(end.abs_diff_eq(pts[3], 1e-9), "{} end {}", curve.kind(), end);
            assert!(!curve.is_closed(Tolerance::default()));
        }
    }

    #[test]
    fn test_every_family_rejects_out_of_domain() {
        for curve in every_family() {
            let (t_min, t_max) = curve.domain();
            assert!(curve.point_at(t_min - 0.5).is_err(), "{}", curve.kind());
            assert!(curve.tangent_at(t_max + 0.5).is_err(), "{}", curve.kind());
        }
    }
}
