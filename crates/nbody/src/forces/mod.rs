//! Force models for N-body simulations
//!
//! Forces write into each body's acceleration accumulator. The accumulators
//! must be reset with `SystemState::reset_accelerations` before a pass.

use std::fmt;

pub mod gravity;


pub use gravity::PairwiseGravity;

/// Gravitational constant in SI units (m³ kg⁻¹ s⁻²)
pub const G_SI: f64 = 6.674e-11;

/// Gravitational constant in AU³ M☉⁻¹ year⁻²
/// G = 4π² ≈ 39.478417
pub const G_AU_YEAR: f64 = 39.478417;

/// Default closest approach between two bodies before gravity is treated as
/// singular. Small next to any practical orbit in SI or AU units.
pub const DEFAULT_MIN_SEPARATION: f64 = 1e-9;

/// Two bodies whose mutual gravity cannot be evaluated
///
/// Returned when the effective separation is below the minimum separation
/// or the resulting acceleration is not finite. The caller attaches the
/// step index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Singularity {
    pub first: usize,
    pub second: usize,
    pub separation: f64,
}

impl fmt::Display for Singularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bodies {} and {} are {:e} apart",
            self.first, self.second, self.separation
        )
    }
}
