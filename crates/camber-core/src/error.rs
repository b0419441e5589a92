use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CamberError {
    /// A parameter or control point count lies outside the valid domain of a curve.
    #[error("Domain error: {0}")]
    Domain(String),

    /// A knot vector breaks the cardinality, ordering, or multiplicity rules.
    #[error("Invalid knot vector: {0}")]
    InvalidKnotVector(String),

    /// Input that cannot produce a curve, e.g. duplicate abscissae or too few points.
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error("Invalid weights: {0}")]
    InvalidWeights(String),
}

pub type Result<T> = std::result::Result<T, CamberError>;
