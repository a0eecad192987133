//! Simulation driver.
//!
//! Owns the body store and the history for one run and executes each step
//! in a fixed order:
//! 1. Reset acceleration accumulators
//! 2. Accumulate pairwise gravity
//! 3. Update velocities and positions with the run's integrator, on a copy
//! 4. Verify every body in the copy is still finite, then commit it
//! 5. Record a snapshot

use log::{debug, info, trace, warn};

use crate::body::Body;
use crate::config::{BodyRecord, SimulationConfig};
use crate::error::NbodyError;
use crate::forces::PairwiseGravity;
use crate::history::History;
use crate::integrator::Integrator;
use crate::state::SystemState;

/// A single, validated simulation run
///
/// # Examples
///
/// ```
/// use nbody::config::{BodyRecord, SimulationConfig};
/// use nbody::simulation::Simulation;
///
/// let config = SimulationConfig { g: 1.0, dt: 0.01, num_steps: 10, ..Default::default() };
/// let records = [
///     BodyRecord { mass: 1.0, x: -1.0, y: 0.0, vx: 0.0, vy: -0.5 },
///     BodyRecord { mass: 1.0, x: 1.0, y: 0.0, vx: 0.0, vy: 0.5 },
/// ];
///
/// let mut sim = Simulation::from_records(config, &records).unwrap();
/// sim.run().unwrap();
///
/// assert!(sim.is_complete());
/// assert_eq!(sim.history().len(), 10);
/// ```
pub struct Simulation {
    config: SimulationConfig,
    state: SystemState,
    gravity: PairwiseGravity,
    integrator: &'static dyn Integrator,
    history: History,
    steps_taken: usize,
}

impl Simulation {
    /// Validates `config` and the bodies and prepares an empty history
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` for a bad parameter. No step runs on error.
    pub fn new(config: SimulationConfig, bodies: Vec<Body>) -> Result<Self, NbodyError> {
        config.validate()?;
        Ok(Self::with_state(config, SystemState::new(bodies)))
    }

    /// Like [`Simulation::new`], building bodies from initial-condition records
    pub fn from_records(config: SimulationConfig, records: &[BodyRecord]) -> Result<Self, NbodyError> {
        config.validate()?;
        let state = SystemState::from_records(records)?;
        Ok(Self::with_state(config, state))
    }

    fn with_state(config: SimulationConfig, state: SystemState) -> Self {
        let integrator = config.scheme.integrator();
        debug!(
            "Simulation configured: {} bodies, {} steps of dt = {}, {} integrator, softening = {}, min separation = {}",
            state.body_count(),
            config.num_steps,
            config.dt,
            integrator.name(),
            config.softening,
            config.min_separation
        );

        Self {
            gravity: PairwiseGravity::with_softening(config.g, config.softening)
                .with_min_separation(config.min_separation),
            integrator,
            history: History::with_capacity(config.num_steps),
            steps_taken: 0,
            config,
            state,
        }
    }

    /// Executes one step and records its snapshot
    ///
    /// Stepping past `num_steps` is allowed; `run` simply stops there.
    ///
    /// # Errors
    ///
    /// `DegenerateConfiguration` if two bodies come closer than
    /// `min_separation`, `NonFiniteState` if an update overflowed. Neither
    /// records a snapshot, and positions and velocities stay at the last
    /// completed step, so retrying reports the same error.
    pub fn step(&mut self) -> Result<(), NbodyError> {
        let step = self.steps_taken;

        self.state.reset_accelerations();
        self.gravity
            .accumulate(&mut self.state)
            .map_err(|s| NbodyError::DegenerateConfiguration {
                step,
                first: s.first,
                second: s.second,
                separation: s.separation,
            })?;

        let mut next = self.state.clone();
        self.integrator.step(&mut next, self.config.dt);

        if let Some(body) = next.first_non_finite() {
            return Err(NbodyError::NonFiniteState { step, body });
        }
        self.state = next;

        self.history.record(&self.state);
        self.steps_taken += 1;
        trace!("Step {} complete at t = {}", step, self.state.time());

        Ok(())
    }

    /// Runs the remaining steps up to `num_steps`
    ///
    /// # Errors
    ///
    /// The first error from [`Simulation::step`]; the run is abandoned there.
    pub fn run(&mut self) -> Result<&History, NbodyError> {
        while !self.is_complete() {
            if let Err(e) = self.step() {
                warn!("Simulation aborted: {}", e);
                return Err(e);
            }
        }

        info!(
            "Simulation finished: {} steps, t = {}",
            self.steps_taken,
            self.state.time()
        );
        Ok(&self.history)
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn state(&self) -> &SystemState {
        &self.state
    }

    pub fn gravity(&self) -> &PairwiseGravity {
        &self.gravity
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    pub fn is_complete(&self) -> bool {
        self.steps_taken >= self.config.num_steps
    }

    /// Kinetic plus potential energy of the current state
    pub fn total_energy(&self) -> f64 {
        self.state.kinetic_energy() + self.gravity.potential_energy(&self.state)
    }

    pub fn into_history(self) -> History {
        self.history
    }
}

/// Runs a complete simulation from initial-condition records
///
/// # Examples
///
/// ```
/// use nbody::config::{BodyRecord, SimulationConfig};
/// use nbody::simulation::simulate;
///
/// let config = SimulationConfig { g: 1.0, dt: 0.1, num_steps: 3, ..Default::default() };
/// let records = [BodyRecord { mass: 1.0, x: 0.0, y: 0.0, vx: 1.0, vy: 0.0 }];
///
/// let history = simulate(config, &records).unwrap();
/// assert_eq!(history.len(), 3);
/// ```
pub fn simulate(config: SimulationConfig, records: &[BodyRecord]) -> Result<History, NbodyError> {
    let mut simulation = Simulation::from_records(config, records)?;
    simulation.run()?;
    Ok(simulation.into_history())
}
