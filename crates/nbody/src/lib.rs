//! Planar N-body gravity.
//!
//! Bodies are advanced under mutual Newtonian attraction with a fixed
//! timestep, and the positions after every step are collected into a
//! [`History`] for plotting or animation elsewhere.
//!
//! ```
//! use nbody::{simulate, BodyRecord, SimulationConfig};
//!
//! let config = SimulationConfig { g: 1.0, dt: 0.001, num_steps: 100, ..Default::default() };
//! let records = [
//!     BodyRecord { mass: 1.0, x: -1.0, y: 0.0, vx: 0.0, vy: -0.5 },
//!     BodyRecord { mass: 1.0, x: 1.0, y: 0.0, vx: 0.0, vy: 0.5 },
//! ];
//!
//! let history = simulate(config, &records).unwrap();
//! assert_eq!(history.len(), 100);
//! assert_eq!(history.last().unwrap().len(), 2);
//! ```

pub mod body;
pub mod config;
pub mod error;
pub mod forces;
pub mod history;
pub mod integrator;
pub mod simulation;
pub mod state;

pub use body::Body;
pub use config::{BodyRecord, InitialConditions, SimulationConfig};
pub use error::NbodyError;
pub use forces::{PairwiseGravity, Singularity, DEFAULT_MIN_SEPARATION, G_AU_YEAR, G_SI};
pub use history::{History, Snapshot};
pub use integrator::{ExplicitVerlet, IntegrationScheme, Integrator, SemiImplicitEuler};
pub use simulation::{simulate, Simulation};
pub use state::SystemState;

#[cfg(test)]
mod config_test;
#[cfg(test)]
mod integrator_test;
