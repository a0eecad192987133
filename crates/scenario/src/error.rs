//! Error types for scenario generation.

use std::fmt;

/// Errors that can occur while generating a scenario
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioError {
    /// A generation parameter is out of range.
    InvalidParameters {
        parameter: &'static str,
        reason: String,
    },
    /// Rejection sampling could not place a body far enough from the
    /// bodies already placed.
    GenerationFailed {
        /// Index of the body that could not be placed
        body: usize,
        attempts: usize,
    },
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::InvalidParameters { parameter, reason } => {
                write!(f, "Invalid scenario parameter `{}`: {}", parameter, reason)
            }
            ScenarioError::GenerationFailed { body, attempts } => write!(
                f,
                "Could not place body {} at the minimum separation after {} attempts",
                body, attempts
            ),
        }
    }
}

impl std::error::Error for ScenarioError {}
