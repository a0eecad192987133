//! Random initial conditions for the nbody integrator
//!
//! Bodies are scattered on random bearings around the origin with random
//! masses and speeds. Draws come from a seeded ChaCha generator so a given
//! seed always produces the same scenario.

pub mod error;
pub mod generation;

pub use error::ScenarioError;
pub use generation::{generate, generate_seeded, ScenarioParams};
