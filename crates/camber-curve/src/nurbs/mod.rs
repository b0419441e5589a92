//! B-spline and NURBS core algorithms: knot vectors, Cox-de Boor basis
//! functions, and curve evaluation.

pub mod deboor;
pub mod knot;

pub use deboor::{evaluate, tangent, validate_weights};
pub use knot::{
    basis_function_derivatives, basis_functions, find_span, validate_knots, KnotVector,
};
