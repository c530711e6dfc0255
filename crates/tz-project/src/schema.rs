//! Scenario schema definitions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    pub plant: PlantDef,
    pub thermostat: ThermostatDef,
    pub initial: InitialStateDef,
    pub grid: GridDef,
    #[serde(default)]
    pub sim: SimDef,
}

/// Coefficients of a·y'' + b·y' + c·y = f(t).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PlantDef {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ThermostatDef {
    pub setpoint: f64,
    #[serde(default = "default_deadband")]
    pub deadband: f64,
    /// Heating mode at t=0. Never inferred from the initial measurement.
    #[serde(default)]
    pub initial_on: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct InitialStateDef {
    pub value: f64,
    #[serde(default)]
    pub rate: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GridDef {
    pub t_end_s: f64,
    pub samples: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SimDef {
    #[serde(default)]
    pub integrator: IntegratorDef,
    #[serde(default = "default_substep_divisor")]
    pub substep_divisor: f64,
    #[serde(default = "default_max_substeps")]
    pub max_substeps: usize,
}

impl Default for SimDef {
    fn default() -> Self {
        Self {
            integrator: IntegratorDef::default(),
            substep_divisor: default_substep_divisor(),
            max_substeps: default_max_substeps(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum IntegratorDef {
    #[default]
    Rk4,
    ForwardEuler,
}

fn default_deadband() -> f64 {
    0.5
}

fn default_substep_divisor() -> f64 {
    200.0
}

fn default_max_substeps() -> usize {
    50_000_000
}
