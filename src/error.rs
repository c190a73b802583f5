//! Error taxonomy for simulation runs.
//!
//! A collision is not an error: it is a normal [`TrajectoryOutcome`](crate::outcome::TrajectoryOutcome).
//! Every variant here aborts the run that raised it.

/// Reasons a simulation run can fail.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// A configuration value was rejected before any stepping began.
    #[error("invalid configuration: {parameter} = {value} ({reason})")]
    InvalidConfiguration {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Acceleration or propagated state became non-finite.
    #[error("numerical divergence at t = {time} s (non-finite acceleration or state)")]
    NumericalDivergence { time: f64 },

    /// The adaptive ODE solver refused to produce the requested samples.
    #[error("adaptive solver failure: {0}")]
    SolverFailure(String),
}

impl SimError {
    /// Shorthand for building an [`SimError::InvalidConfiguration`].
    pub fn invalid(parameter: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidConfiguration {
            parameter,
            value,
            reason,
        }
    }
}

/// Reject values that are not strictly positive and finite.
pub(crate) fn require_positive(parameter: &'static str, value: f64) -> Result<(), SimError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(SimError::invalid(parameter, value, "must be positive and finite"))
    }
}
