//! Generate a seeded random system and integrate it
//!
//! Prints the generated bodies, then writes the position history as JSON to
//! the path given on the command line (or to stdout).
//!
//! Run with: cargo run --package scenario --example random_system -- [seed] [output.json]

use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter};

use nbody::{simulate, SimulationConfig};
use scenario::{generate_seeded, ScenarioParams};

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(seed) => seed.parse()?,
        None => 42,
    };

    let params = ScenarioParams {
        enforce_min_separation: true,
        ..Default::default()
    };
    let bodies = generate_seeded(&params, seed)?;

    eprintln!("Seed {}: {} bodies", seed, bodies.len());
    for (i, body) in bodies.iter().enumerate() {
        eprintln!(
            "  {}: m={:.3e} kg, r=({:.3e}, {:.3e}) m, v=({:.1}, {:.1}) m/s",
            i, body.mass, body.x, body.y, body.vx, body.vy
        );
    }

    let history = simulate(SimulationConfig::default(), &bodies)?;

    match args.next() {
        Some(path) => {
            history.write_json(BufWriter::new(File::create(&path)?))?;
            eprintln!("Wrote {} snapshots to {}", history.len(), path);
        }
        None => history.write_json(io::stdout().lock())?,
    }

    Ok(())
}
