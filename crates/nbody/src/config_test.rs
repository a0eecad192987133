use crate::config::{BodyRecord, InitialConditions, SimulationConfig};
use crate::error::NbodyError;
use crate::forces::{DEFAULT_MIN_SEPARATION, G_SI};
use crate::integrator::IntegrationScheme;

fn invalid_parameter(config: SimulationConfig) -> String {
    match config.validate() {
        Err(NbodyError::InvalidConfiguration { parameter, .. }) => parameter,
        other => panic!("expected InvalidConfiguration, got {:?}", other),
    }
}

#[test]
fn test_default_config() {
    let config = SimulationConfig::default();

    assert_eq!(config.g, G_SI);
    assert_eq!(config.dt, 0.01);
    assert_eq!(config.num_steps, 1000);
    assert_eq!(config.softening, 0.0);
    assert_eq!(config.min_separation, DEFAULT_MIN_SEPARATION);
    assert_eq!(config.scheme, IntegrationScheme::SemiImplicitEuler);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_bad_parameters() {
    let base = SimulationConfig::default();

    assert_eq!(invalid_parameter(SimulationConfig { dt: 0.0, ..base }), "dt");
    assert_eq!(invalid_parameter(SimulationConfig { dt: -1.0, ..base }), "dt");
    assert_eq!(invalid_parameter(SimulationConfig { dt: f64::NAN, ..base }), "dt");
    assert_eq!(invalid_parameter(SimulationConfig { g: 0.0, ..base }), "g");
    assert_eq!(invalid_parameter(SimulationConfig { g: f64::INFINITY, ..base }), "g");
    assert_eq!(invalid_parameter(SimulationConfig { num_steps: 0, ..base }), "num_steps");
    assert_eq!(invalid_parameter(SimulationConfig { softening: -0.1, ..base }), "softening");
    assert_eq!(invalid_parameter(SimulationConfig { min_separation: 0.0, ..base }), "min_separation");
    assert_eq!(
        invalid_parameter(SimulationConfig { min_separation: f64::NAN, ..base }),
        "min_separation"
    );
}

#[test]
fn test_parse_full_document() {
    let json = r#"{
        "simulation": {
            "g": 1.0,
            "dt": 0.001,
            "num_steps": 50,
            "softening": 0.05,
            "min_separation": 1e-6,
            "scheme": "explicit_verlet"
        },
        "planets": [
            { "mass": 1.0, "x": -1.0, "y": 0.0, "vx": 0.0, "vy": -0.5 },
            { "mass": 2.0, "x": 1.0, "y": 0.5, "vx": 0.1, "vy": 0.5 }
        ]
    }"#;

    let conditions = InitialConditions::from_json_str(json).unwrap();

    assert_eq!(
        conditions.simulation,
        SimulationConfig {
            g: 1.0,
            dt: 0.001,
            num_steps: 50,
            softening: 0.05,
            min_separation: 1e-6,
            scheme: IntegrationScheme::ExplicitVerlet,
        }
    );
    assert_eq!(conditions.planets.len(), 2);
    assert_eq!(
        conditions.planets[1],
        BodyRecord {
            mass: 2.0,
            x: 1.0,
            y: 0.5,
            vx: 0.1,
            vy: 0.5
        }
    );
}

#[test]
fn test_parse_planets_only_uses_defaults() {
    let json = r#"{ "planets": [ { "mass": 5.0e10, "x": 1.0e9, "y": 0.0, "vx": 0.0, "vy": 1.0e3 } ] }"#;

    let conditions = InitialConditions::from_json_str(json).unwrap();

    assert_eq!(conditions.simulation, SimulationConfig::default());
    assert_eq!(conditions.planets[0].mass, 5.0e10);
}

#[test]
fn test_parse_partial_simulation_block() {
    let json = r#"{ "simulation": { "num_steps": 7 }, "planets": [] }"#;

    let conditions = InitialConditions::from_json_str(json).unwrap();

    assert_eq!(conditions.simulation.num_steps, 7);
    assert_eq!(conditions.simulation.dt, 0.01);
}

#[test]
fn test_parse_rejects_unknown_scheme() {
    let json = r#"{ "simulation": { "scheme": "rk4" }, "planets": [] }"#;

    assert!(matches!(
        InitialConditions::from_json_str(json),
        Err(NbodyError::Parse(_))
    ));
}

#[test]
fn test_parse_rejects_missing_field() {
    let json = r#"{ "planets": [ { "mass": 1.0, "x": 0.0, "y": 0.0, "vx": 0.0 } ] }"#;

    assert!(matches!(
        InitialConditions::from_json_str(json),
        Err(NbodyError::Parse(_))
    ));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let result = InitialConditions::load("/nonexistent/initial_conditions.json");

    assert!(matches!(result, Err(NbodyError::Io(_))));
}

#[test]
fn test_record_round_trips_through_body() {
    let record = BodyRecord {
        mass: 3.0,
        x: 1.5,
        y: -2.0,
        vx: 0.25,
        vy: 4.0,
    };

    let body = record.to_body().unwrap();

    assert_eq!(BodyRecord::from(&body), record);
}
