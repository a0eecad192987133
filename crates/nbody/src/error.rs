//! Error types for the nbody crate.
//!
//! Configuration problems are reported before a run starts; singular or
//! non-finite state is reported by the step that produced it.

use std::fmt;

/// Errors that can occur while configuring or running a simulation.
#[derive(Debug)]
pub enum NbodyError {
    /// A static parameter is out of range (mass, dt, G, step count, ...).
    InvalidConfiguration {
        /// Name of the offending parameter, e.g. `dt` or `planets[2].mass`.
        parameter: String,
        reason: String,
    },
    /// Two bodies came close enough that gravity between them diverges.
    DegenerateConfiguration {
        /// Zero-based index of the step that was being computed.
        step: usize,
        first: usize,
        second: usize,
        /// Effective (softened) separation at the time of detection.
        separation: f64,
    },
    /// A body's position or velocity stopped being finite after an update.
    NonFiniteState { step: usize, body: usize },
    /// Failed to read initial conditions.
    Io(std::io::Error),
    /// Initial conditions were not valid JSON for the expected schema.
    Parse(serde_json::Error),
}

impl NbodyError {
    pub(crate) fn invalid(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        NbodyError::InvalidConfiguration {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Qualifies a body-level parameter name with the body's index.
    pub(crate) fn in_body(self, index: usize) -> Self {
        match self {
            NbodyError::InvalidConfiguration { parameter, reason } => {
                NbodyError::InvalidConfiguration {
                    parameter: format!("planets[{index}].{parameter}"),
                    reason,
                }
            }
            other => other,
        }
    }
}

impl fmt::Display for NbodyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NbodyError::InvalidConfiguration { parameter, reason } => {
                write!(f, "Invalid configuration for `{}`: {}", parameter, reason)
            }
            NbodyError::DegenerateConfiguration {
                step,
                first,
                second,
                separation,
            } => write!(
                f,
                "Degenerate configuration at step {}: bodies {} and {} are {:e} apart",
                step, first, second, separation
            ),
            NbodyError::NonFiniteState { step, body } => {
                write!(f, "Body {} has non-finite state after step {}", body, step)
            }
            NbodyError::Io(e) => write!(f, "Failed to read initial conditions: {}", e),
            NbodyError::Parse(e) => write!(f, "Failed to parse initial conditions: {}", e),
        }
    }
}

impl std::error::Error for NbodyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NbodyError::Io(e) => Some(e),
            NbodyError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NbodyError {
    fn from(e: std::io::Error) -> Self {
        NbodyError::Io(e)
    }
}

impl From<serde_json::Error> for NbodyError {
    fn from(e: serde_json::Error) -> Self {
        NbodyError::Parse(e)
    }
}
