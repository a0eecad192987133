//! Scenario sampling
//!
//! Each body gets a uniform mass, a uniform orbital distance on a uniform
//! bearing θ, and a uniform speed. The velocity is laid along
//! `(sin θ, cos θ)`, which crosses the radial direction at a bearing-dependent
//! angle and gives the bodies a mix of radial and tangential motion.

use std::f64::consts::TAU;

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

use nbody::BodyRecord;

use crate::error::ScenarioError;

/// Ranges that a generated scenario is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioParams {
    pub num_planets: usize,
    pub min_mass: f64,
    pub max_mass: f64,
    /// Minimum distance from the origin, and the minimum pairwise separation
    /// when `enforce_min_separation` is set
    pub min_distance: f64,
    pub max_distance: f64,
    pub max_speed: f64,
    /// Re-draw positions until every pair is more than `min_distance` apart
    pub enforce_min_separation: bool,
    /// Position draws allowed per body before giving up
    pub max_attempts: usize,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            num_planets: 5,
            min_mass: 1e10,
            max_mass: 5e10,
            min_distance: 1e9,
            max_distance: 5e9,
            max_speed: 1e3,
            enforce_min_separation: false,
            max_attempts: 1000,
        }
    }
}

impl ScenarioParams {
    pub fn validate(&self) -> Result<(), ScenarioError> {
        let invalid = |parameter, reason: String| ScenarioError::InvalidParameters { parameter, reason };

        if self.num_planets == 0 {
            return Err(invalid("num_planets", "must be at least 1".into()));
        }
        if !(self.min_mass.is_finite() && self.min_mass > 0.0) {
            return Err(invalid(
                "min_mass",
                format!("must be positive and finite, got {}", self.min_mass),
            ));
        }
        if !(self.max_mass.is_finite() && self.max_mass >= self.min_mass) {
            return Err(invalid(
                "max_mass",
                format!("must be finite and at least min_mass, got {}", self.max_mass),
            ));
        }
        if !(self.min_distance.is_finite() && self.min_distance >= 0.0) {
            return Err(invalid(
                "min_distance",
                format!("must be non-negative and finite, got {}", self.min_distance),
            ));
        }
        if !(self.max_distance.is_finite() && self.max_distance >= self.min_distance) {
            return Err(invalid(
                "max_distance",
                format!("must be finite and at least min_distance, got {}", self.max_distance),
            ));
        }
        if !(self.max_speed.is_finite() && self.max_speed >= 0.0) {
            return Err(invalid(
                "max_speed",
                format!("must be non-negative and finite, got {}", self.max_speed),
            ));
        }
        if self.max_attempts == 0 {
            return Err(invalid("max_attempts", "must be at least 1".into()));
        }
        Ok(())
    }
}

/// Draws a scenario from `rng`
///
/// Bodies are returned in generation order.
///
/// # Errors
///
/// `InvalidParameters` before any draw if `params` is out of range;
/// `GenerationFailed` if a body cannot be placed within `max_attempts`
/// position draws.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use scenario::{generate, ScenarioParams};
///
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let bodies = generate(&ScenarioParams::default(), &mut rng).unwrap();
///
/// assert_eq!(bodies.len(), 5);
/// assert!(bodies.iter().all(|b| b.mass >= 1e10 && b.mass <= 5e10));
/// ```
pub fn generate(params: &ScenarioParams, rng: &mut ChaChaRng) -> Result<Vec<BodyRecord>, ScenarioError> {
    params.validate()?;

    let mut bodies: Vec<BodyRecord> = Vec::with_capacity(params.num_planets);

    for index in 0..params.num_planets {
        let mass = rng.random_range(params.min_mass..=params.max_mass);
        let speed = rng.random_range(0.0..=params.max_speed);

        let (x, y, theta) = place_body(params, rng, &bodies, index)?;

        bodies.push(BodyRecord {
            mass,
            x,
            y,
            vx: speed * theta.sin(),
            vy: speed * theta.cos(),
        });
    }

    Ok(bodies)
}

/// Draws a scenario from a fresh generator seeded with `seed`
pub fn generate_seeded(params: &ScenarioParams, seed: u64) -> Result<Vec<BodyRecord>, ScenarioError> {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    generate(params, &mut rng)
}

/// Rejection-samples a position for body `index`
///
/// Returns the coordinates and the bearing they were drawn on.
fn place_body(
    params: &ScenarioParams,
    rng: &mut ChaChaRng,
    placed: &[BodyRecord],
    index: usize,
) -> Result<(f64, f64, f64), ScenarioError> {
    for attempt in 1..=params.max_attempts {
        let distance = rng.random_range(params.min_distance..=params.max_distance);
        let theta = rng.random_range(0.0..TAU);
        let (x, y) = (distance * theta.cos(), distance * theta.sin());

        if !params.enforce_min_separation || clear_of(placed, x, y, params.min_distance) {
            if attempt > 1 {
                debug!("Placed body {} after {} position draws", index, attempt);
            }
            return Ok((x, y, theta));
        }
    }

    debug!(
        "Giving up on body {} after {} position draws",
        index, params.max_attempts
    );
    Err(ScenarioError::GenerationFailed {
        body: index,
        attempts: params.max_attempts,
    })
}

fn clear_of(placed: &[BodyRecord], x: f64, y: f64, min_separation: f64) -> bool {
    placed
        .iter()
        .all(|b| (b.x - x).hypot(b.y - y) > min_separation)
}
