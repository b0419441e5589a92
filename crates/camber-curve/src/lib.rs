//! Camber curves: easing transforms, polynomial bases, Bezier curves, spline
//! assemblers, and B-spline / NURBS evaluation.
//!
//! Every evaluator is a pure function of its inputs. Curve value types
//! validate their data once at construction and never mutate afterwards, so
//! they can be shared freely between threads.

pub mod basis;
pub mod bezier;
pub mod cubic;
pub mod curve;
pub mod ease;
pub mod lagrange;
pub mod nurbs;
pub mod spline;
pub mod tessellate;

pub use bezier::BezierCurve;
pub use cubic::CubicSegment;
pub use curve::{AnyCurve, BSplineCurve, Curve, NurbsCurve};
pub use ease::Ease;
pub use lagrange::LagrangeInterpolant;
pub use nurbs::KnotVector;
pub use spline::{Boundary, CatmullRomSpline, CubicSpline, HermiteSpline, Parametrization};
