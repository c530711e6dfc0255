use tz_project::schema::*;
use tz_project::{load_json, load_yaml, save_json, save_yaml, validate_scenario};

fn zone_scenario() -> Scenario {
    Scenario {
        version: 1,
        name: "Home Heating".to_string(),
        plant: PlantDef {
            a: 1.0,
            b: 0.5,
            c: 0.2,
        },
        thermostat: ThermostatDef {
            setpoint: 22.0,
            deadband: 0.5,
            initial_on: false,
        },
        initial: InitialStateDef {
            value: 20.0,
            rate: 0.0,
        },
        grid: GridDef {
            t_end_s: 100.0,
            samples: 1000,
        },
        sim: SimDef::default(),
    }
}

#[test]
fn roundtrip_yaml_scenario() {
    let scenario = zone_scenario();
    validate_scenario(&scenario).unwrap();

    let temp_dir = std::env::temp_dir();
    let path = temp_dir.join("tz_project_roundtrip.yaml");

    save_yaml(&path, &scenario).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(scenario, loaded);
}

#[test]
fn roundtrip_json_scenario() {
    let scenario = zone_scenario();

    let temp_dir = std::env::temp_dir();
    let path = temp_dir.join("tz_project_roundtrip.json");

    save_json(&path, &scenario).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(scenario, loaded);
}

#[test]
fn minimal_yaml_applies_defaults() {
    let yaml = r#"
version: 1
name: minimal
plant: { a: 1.0, b: 0.5, c: 0.2 }
thermostat: { setpoint: 22.0 }
initial: { value: 20.0 }
grid: { t_end_s: 100.0, samples: 1000 }
"#;
    let scenario: Scenario = serde_yaml::from_str(yaml).unwrap();
    validate_scenario(&scenario).unwrap();

    assert_eq!(scenario.thermostat.deadband, 0.5);
    assert!(!scenario.thermostat.initial_on);
    assert_eq!(scenario.initial.rate, 0.0);
    assert_eq!(scenario.sim, SimDef::default());
    assert_eq!(scenario.sim.integrator, IntegratorDef::Rk4);
}

#[test]
fn save_refuses_invalid_scenario() {
    let mut scenario = zone_scenario();
    scenario.plant.a = 0.0;

    let temp_dir = std::env::temp_dir();
    let path = temp_dir.join("tz_project_invalid.yaml");
    assert!(save_yaml(&path, &scenario).is_err());
}
