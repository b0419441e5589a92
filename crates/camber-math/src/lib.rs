pub mod point;
pub mod poly;
pub mod range;

pub use glam::{dvec2, dvec3, dvec4, DVec2, DVec3, DVec4};
pub use point::{lerp, ControlPoint};
pub use poly::poly_eval;
pub use range::{linspace, Linspace, Stepper};
