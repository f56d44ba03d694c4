//! Error types for mdsim.
//!
//! Every failure here is a configuration or programming error: nothing is
//! retried and nothing is absorbed silently.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// A construction-time parameter is out of range
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Positions/velocities disagree in length, or a vector is not 2D
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Particle state went non-finite (dt too large for the force stiffness)
    #[error("numerical divergence at step {step}: particle state is no longer finite")]
    NumericalDivergence { step: usize },

    #[error("scenario file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("scenario parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SimError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        SimError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
