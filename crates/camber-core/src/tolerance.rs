/// Tolerances for floating-point comparisons, passed explicitly to the
/// operations that need them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Tolerance for distances between points (in model units)
    pub linear: f64,
    /// Tolerance for comparing parameter values, knots, and abscissae
    pub parametric: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-9;
    pub const DEFAULT_PARAMETRIC: f64 = 1e-12;

    pub fn new(linear: f64, parametric: f64) -> Self {
        Self { linear, parametric }
    }

    pub fn default_precision() -> Self {
        Self {
            linear: Self::DEFAULT_LINEAR,
            parametric: Self::DEFAULT_PARAMETRIC,
        }
    }

    pub fn loose() -> Self {
        Self {
            linear: 1e-4,
            parametric: 1e-8,
        }
    }

    pub fn tight() -> Self {
        Self {
            linear: 1e-12,
            parametric: 1e-15,
        }
    }

    /// Check if two distances are equal within linear tolerance
    pub fn linear_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.linear
    }

    /// Check if a distance is zero within linear tolerance
    pub fn is_zero(self, v: f64) -> bool {
        v.abs() <= self.linear
    }

    /// Check if two parameter values coincide within parametric tolerance
    pub fn parametric_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.parametric
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
