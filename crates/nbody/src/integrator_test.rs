use approx::assert_relative_eq;
use nalgebra::{Point2, Vector2};

use crate::body::Body;
use crate::forces::PairwiseGravity;
use crate::integrator::{ExplicitVerlet, IntegrationScheme, Integrator, SemiImplicitEuler};
use crate::state::SystemState;

/// One unit mass at the origin moving along +x with a constant pull along +y
fn make_test_system() -> SystemState {
    let mut system = SystemState::new(vec![
        Body::new(1.0, Point2::new(0.0, 0.0), Vector2::new(1.0, 0.0)).unwrap(),
    ]);
    system.bodies_mut()[0].acceleration = Vector2::new(0.0, 2.0);
    system
}

/// Equal-mass circular binary with G = 1, separation 2
///
/// Each body orbits the origin at r = 1 with a = G m / (2r)² = 0.25, so the
/// circular speed is sqrt(a r) = 0.5.
fn make_binary() -> SystemState {
    SystemState::new(vec![
        Body::new(1.0, Point2::new(-1.0, 0.0), Vector2::new(0.0, -0.5)).unwrap(),
        Body::new(1.0, Point2::new(1.0, 0.0), Vector2::new(0.0, 0.5)).unwrap(),
    ])
}

fn integrate(state: &mut SystemState, integrator: &dyn Integrator, dt: f64, n_steps: usize) {
    let gravity = PairwiseGravity::new(1.0);
    for _ in 0..n_steps {
        state.reset_accelerations();
        gravity.accumulate(state).unwrap();
        integrator.step(state, dt);
    }
}

#[test]
fn test_semi_implicit_euler_kicks_before_drift() {
    let mut system = make_test_system();

    SemiImplicitEuler.step(&mut system, 0.5);

    let body = &system.bodies()[0];
    // v = (1, 0) + (0, 2) * 0.5 = (1, 1)
    assert_eq!(body.velocity(), Vector2::new(1.0, 1.0));
    // x uses the updated velocity: (0, 0) + (1, 1) * 0.5
    assert_eq!(body.position(), Point2::new(0.5, 0.5));
}

#[test]
fn test_explicit_verlet_uses_old_velocity() {
    let mut system = make_test_system();

    ExplicitVerlet.step(&mut system, 0.5);

    let body = &system.bodies()[0];
    // x = (0, 0) + (1, 0) * 0.5 + 0.5 * (0, 2) * 0.25 = (0.5, 0.25)
    assert_eq!(body.position(), Point2::new(0.5, 0.25));
    assert_eq!(body.velocity(), Vector2::new(1.0, 1.0));
}

#[test]
fn test_step_advances_time() {
    let mut system = make_test_system();

    SemiImplicitEuler.step(&mut system, 0.01);
    ExplicitVerlet.step(&mut system, 0.01);

    assert_relative_eq!(system.time(), 0.02);
}

#[test]
fn test_step_does_not_touch_acceleration() {
    let mut system = make_test_system();

    SemiImplicitEuler.step(&mut system, 0.1);

    assert_eq!(system.bodies()[0].acceleration(), Vector2::new(0.0, 2.0));
}

#[test]
fn test_semi_implicit_euler_circular_binary() {
    let mut system = make_binary();

    // One full orbit: period = 2π r / v = 4π
    let period = 4.0 * std::f64::consts::PI;
    let n_steps = 4000;
    integrate(&mut system, &SemiImplicitEuler, period / n_steps as f64, n_steps);

    let separation = system.bodies()[0].distance_to(&system.bodies()[1]);
    let error = (separation - 2.0).abs() / 2.0;
    assert!(error < 0.01, "Separation error: {:.2e}", error);
}

#[test]
fn test_semi_implicit_euler_bounded_energy() {
    let mut system = make_binary();
    let gravity = PairwiseGravity::new(1.0);
    let initial_energy = system.kinetic_energy() + gravity.potential_energy(&system);

    integrate(&mut system, &SemiImplicitEuler, 0.001, 5000);

    let final_energy = system.kinetic_energy() + gravity.potential_energy(&system);
    let energy_error = (final_energy - initial_energy).abs() / initial_energy.abs();
    assert!(energy_error < 1e-2, "Energy error: {:.2e}", energy_error);
}

#[test]
fn test_both_schemes_conserve_momentum() {
    for scheme in [IntegrationScheme::SemiImplicitEuler, IntegrationScheme::ExplicitVerlet] {
        let mut system = SystemState::new(vec![
            Body::new(1.0, Point2::new(0.0, 0.0), Vector2::new(0.1, 0.0)).unwrap(),
            Body::new(3.0, Point2::new(1.0, 1.0), Vector2::new(0.0, -0.2)).unwrap(),
            Body::new(0.5, Point2::new(-2.0, 0.5), Vector2::new(0.3, 0.3)).unwrap(),
        ]);
        let initial = system.total_momentum();

        integrate(&mut system, scheme.integrator(), 0.001, 500);

        let drift = (system.total_momentum() - initial).magnitude();
        assert!(drift < 1e-12, "{:?} momentum drift: {:.2e}", scheme, drift);
    }
}

#[test]
fn test_schemes_produce_different_trajectories() {
    let mut euler = make_binary();
    let mut verlet = make_binary();

    integrate(&mut euler, &SemiImplicitEuler, 0.01, 10);
    integrate(&mut verlet, &ExplicitVerlet, 0.01, 10);

    assert_ne!(euler.positions(), verlet.positions());
}

#[test]
fn test_scheme_selects_integrator() {
    assert_eq!(
        IntegrationScheme::SemiImplicitEuler.integrator().name(),
        SemiImplicitEuler.name()
    );
    assert_eq!(
        IntegrationScheme::ExplicitVerlet.integrator().name(),
        ExplicitVerlet.name()
    );
    assert_eq!(IntegrationScheme::default(), IntegrationScheme::SemiImplicitEuler);
}
