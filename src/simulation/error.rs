//! Error taxonomy for the simulation core.
//!
//! Every failure here is local and synchronous: construction-time
//! parameter checks, the zero-separation singularity in the pair pass,
//! and the opt-in state validation. Nothing is retried (the computation
//! is deterministic, the same inputs fail the same way) and nothing is
//! swallowed.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Body constructed with a non-positive or non-finite mass
    InvalidMass { mass: f64 },
    /// `set_constants` called with a non-finite constant or a
    /// non-positive step
    InvalidConstant { name: &'static str, value: f64 },
    /// Two distinct bodies at the exact same position during the pair pass
    Singularity { i: usize, j: usize },
    /// Unit vector requested for the zero vector
    ZeroVector,
    /// NaN or infinity in a body's state, caught by `System::validate`
    NonFiniteState { index: usize },
    /// Scenario configuration that cannot be mapped to a runtime system
    BadConfig { reason: String },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidMass { mass } => {
                write!(f, "body mass must be positive and finite, got {mass}")
            }
            SimError::InvalidConstant { name, value } => {
                write!(f, "invalid value {value} for constant {name}")
            }
            SimError::Singularity { i, j } => {
                write!(f, "bodies {i} and {j} occupy the same position")
            }
            SimError::ZeroVector => write!(f, "cannot normalize the zero vector"),
            SimError::NonFiniteState { index } => {
                write!(f, "body {index} has a non-finite position or velocity")
            }
            SimError::BadConfig { reason } => write!(f, "bad scenario config: {reason}"),
        }
    }
}

impl std::error::Error for SimError {}
