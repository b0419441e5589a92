use crate::error::Result;

/// Validate the structural invariants of a curve or its defining data.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
