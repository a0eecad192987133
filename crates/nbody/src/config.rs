//! Run parameters and initial conditions.
//!
//! Everything here is plain serde data. A scenario file is a JSON document
//! with an optional `simulation` block and a list of `planets`:
//!
//! ```json
//! {
//!   "simulation": {
//!     "g": 1.0,
//!     "dt": 0.001,
//!     "num_steps": 5000,
//!     "softening": 0.0,
//!     "min_separation": 1e-9,
//!     "scheme": "semi_implicit_euler"
//!   },
//!   "planets": [
//!     { "mass": 1.0, "x": -1.0, "y": 0.0, "vx": 0.0, "vy": -0.5 },
//!     { "mass": 1.0, "x":  1.0, "y": 0.0, "vx": 0.0, "vy":  0.5 }
//!   ]
//! }
//! ```
//!
//! Omitted `simulation` fields fall back to SI gravity, `dt = 0.01`,
//! 1000 steps and a minimum separation of [`crate::forces::DEFAULT_MIN_SEPARATION`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::error::NbodyError;
use crate::forces::{DEFAULT_MIN_SEPARATION, G_SI};
use crate::integrator::IntegrationScheme;

/// Initial state of one body, as found in a scenario file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyRecord {
    pub mass: f64,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl BodyRecord {
    pub fn to_body(&self) -> Result<Body, NbodyError> {
        Body::new(
            self.mass,
            Point2::new(self.x, self.y),
            Vector2::new(self.vx, self.vy),
        )
    }
}

impl From<&Body> for BodyRecord {
    fn from(body: &Body) -> Self {
        BodyRecord {
            mass: body.mass(),
            x: body.position().x,
            y: body.position().y,
            vx: body.velocity().x,
            vy: body.velocity().y,
        }
    }
}

/// Parameters fixed for the duration of a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Gravitational constant, in whatever unit system the bodies use
    pub g: f64,
    /// Step duration
    pub dt: f64,
    pub num_steps: usize,
    /// Plummer softening length; 0 disables softening
    pub softening: f64,
    /// Closest allowed approach; a pair whose (softened) separation falls
    /// below it aborts the run
    pub min_separation: f64,
    pub scheme: IntegrationScheme,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            g: G_SI,
            dt: 0.01,
            num_steps: 1000,
            softening: 0.0,
            min_separation: DEFAULT_MIN_SEPARATION,
            scheme: IntegrationScheme::default(),
        }
    }
}

impl SimulationConfig {
    /// Checks every parameter, reporting the first one out of range
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::config::SimulationConfig;
    ///
    /// let config = SimulationConfig { dt: -0.1, ..Default::default() };
    /// assert!(config.validate().is_err());
    /// assert!(SimulationConfig::default().validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), NbodyError> {
        if !(self.g.is_finite() && self.g > 0.0) {
            return Err(NbodyError::invalid(
                "g",
                format!("must be positive and finite, got {}", self.g),
            ));
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(NbodyError::invalid(
                "dt",
                format!("must be positive and finite, got {}", self.dt),
            ));
        }
        if self.num_steps == 0 {
            return Err(NbodyError::invalid("num_steps", "must be at least 1"));
        }
        if !(self.softening.is_finite() && self.softening >= 0.0) {
            return Err(NbodyError::invalid(
                "softening",
                format!("must be non-negative and finite, got {}", self.softening),
            ));
        }
        if !(self.min_separation.is_finite() && self.min_separation > 0.0) {
            return Err(NbodyError::invalid(
                "min_separation",
                format!("must be positive and finite, got {}", self.min_separation),
            ));
        }
        Ok(())
    }
}

/// Contents of a scenario file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitialConditions {
    #[serde(default)]
    pub simulation: SimulationConfig,
    pub planets: Vec<BodyRecord>,
}

impl InitialConditions {
    pub fn from_json_str(json: &str) -> Result<Self, NbodyError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, NbodyError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads a scenario file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NbodyError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}
