//! Single planet on a circular orbit around a Sun-mass star
//!
//! Runs ten orbits with each integration scheme and prints the energy and
//! angular momentum drift once per orbit.
//!
//! Run with: cargo run --package nbody --example simple_orbit

use std::f64::consts::TAU;

use nbody::{BodyRecord, IntegrationScheme, NbodyError, Simulation, SimulationConfig, G_AU_YEAR};

const STEPS_PER_ORBIT: usize = 1000;
const ORBITS: usize = 10;

fn main() -> Result<(), NbodyError> {
    println!("N-body Integrator Test: Single Planet Orbit\n");
    println!("{}", "=".repeat(60));

    // 1 AU, 1 M☉; the period is one year
    let r = 1.0;
    let v_circular = (G_AU_YEAR / r).sqrt();
    let earth_mass = 3.0e-6;
    let period = TAU * (r * r * r / G_AU_YEAR).sqrt();

    let bodies = [
        BodyRecord { mass: 1.0, x: 0.0, y: 0.0, vx: 0.0, vy: -v_circular * earth_mass },
        BodyRecord { mass: earth_mass, x: r, y: 0.0, vx: 0.0, vy: v_circular },
    ];

    println!("Initial conditions:");
    println!("  Planet mass: {:.2e} M☉", earth_mass);
    println!("  Orbital radius: {:.3} AU", r);
    println!("  Circular velocity: {:.3} AU/year", v_circular);
    println!("  Timestep: {:.6} years ({} steps/orbit)", period / STEPS_PER_ORBIT as f64, STEPS_PER_ORBIT);

    for scheme in [IntegrationScheme::SemiImplicitEuler, IntegrationScheme::ExplicitVerlet] {
        let config = SimulationConfig {
            g: G_AU_YEAR,
            dt: period / STEPS_PER_ORBIT as f64,
            num_steps: STEPS_PER_ORBIT * ORBITS,
            scheme,
            ..Default::default()
        };
        let mut sim = Simulation::from_records(config, &bodies)?;

        let initial_energy = sim.total_energy();
        let initial_l = sim.state().total_angular_momentum();

        println!("\n{}", "=".repeat(60));
        println!("Scheme: {:?}", scheme);
        println!("  Initial energy: {:.6e} M☉ AU² year⁻²", initial_energy);

        for orbit in 1..=ORBITS {
            for _ in 0..STEPS_PER_ORBIT {
                sim.step()?;
            }

            let bodies = sim.state().bodies();
            let r_current = bodies[1].distance_to(&bodies[0]);
            let energy_error = ((sim.total_energy() - initial_energy) / initial_energy).abs();
            let l_error = ((sim.state().total_angular_momentum() - initial_l) / initial_l).abs();

            println!(
                "Orbit {}: r={:.6} AU, ΔE={:.2e}, ΔL={:.2e}, Δr={:.2e}",
                orbit,
                r_current,
                energy_error,
                l_error,
                ((r_current - r) / r).abs()
            );
        }

        println!("  Recorded {} snapshots", sim.history().len());
    }

    Ok(())
}
