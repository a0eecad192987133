//! Time integration for N-body systems
//!
//! An integrator performs the update phase of a step: it reads each body's
//! accumulated acceleration and advances velocity and position by `dt`.
//! Forces are computed beforehand by the simulation driver, so a scheme
//! never evaluates gravity itself.
//!
//! One scheme is chosen per run through [`IntegrationScheme`] and applied
//! uniformly to every body on every step.

use serde::{Deserialize, Serialize};

use crate::state::SystemState;

/// A position/velocity update rule
pub trait Integrator: Send + Sync {
    /// Advance every body by one timestep using its current acceleration
    ///
    /// # Arguments
    ///
    /// * `state` - System with accelerations already accumulated (modified in place)
    /// * `dt` - Timestep
    fn step(&self, state: &mut SystemState, dt: f64);

    /// Short identifier used in log output
    fn name(&self) -> &'static str;
}

/// Semi-implicit (symplectic) Euler
///
/// Velocity is kicked first and the new velocity drives the drift:
///
/// 1. v(t + dt) = v(t) + a(t) * dt
/// 2. x(t + dt) = x(t) + v(t + dt) * dt
///
/// First order, but symplectic, so energy errors stay bounded over long
/// runs instead of drifting.
///
/// # Examples
///
/// ```
/// use nbody::body::Body;
/// use nbody::integrator::{Integrator, SemiImplicitEuler};
/// use nbody::state::SystemState;
/// use nalgebra::{Point2, Vector2};
///
/// let mut system = SystemState::new(vec![
///     Body::new(1.0, Point2::origin(), Vector2::new(1.0, 0.0)).unwrap(),
/// ]);
///
/// SemiImplicitEuler.step(&mut system, 0.5);
/// assert_eq!(system.bodies()[0].position(), Point2::new(0.5, 0.0));
/// assert_eq!(system.time(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SemiImplicitEuler;

impl Integrator for SemiImplicitEuler {
    fn step(&self, state: &mut SystemState, dt: f64) {
        state.bodies_mut().iter_mut().for_each(|body| {
            body.velocity += body.acceleration * dt;
            body.position += body.velocity * dt;
        });

        state.advance_time(dt);
    }

    fn name(&self) -> &'static str {
        "semi-implicit euler"
    }
}

/// Explicit second-order Taylor update
///
/// Position uses the old velocity plus the acceleration term, then the
/// velocity is advanced:
///
/// 1. x(t + dt) = x(t) + v(t) * dt + a(t) * dt² / 2
/// 2. v(t + dt) = v(t) + a(t) * dt
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitVerlet;

impl Integrator for ExplicitVerlet {
    fn step(&self, state: &mut SystemState, dt: f64) {
        let half_dt2 = 0.5 * dt * dt;

        state.bodies_mut().iter_mut().for_each(|body| {
            body.position += body.velocity * dt + body.acceleration * half_dt2;
            body.velocity += body.acceleration * dt;
        });

        state.advance_time(dt);
    }

    fn name(&self) -> &'static str {
        "explicit verlet"
    }
}

/// Which update rule a run uses
///
/// Serialized in snake_case, e.g. `"semi_implicit_euler"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationScheme {
    #[default]
    SemiImplicitEuler,
    ExplicitVerlet,
}

impl IntegrationScheme {
    pub fn integrator(self) -> &'static dyn Integrator {
        match self {
            IntegrationScheme::SemiImplicitEuler => &SemiImplicitEuler,
            IntegrationScheme::ExplicitVerlet => &ExplicitVerlet,
        }
    }
}
