//! Scenario validation logic.
//!
//! Re-checks the invariants the simulation constructors enforce so a bad
//! file fails fast with a named field, before any model object is built.

use crate::schema::Scenario;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version > crate::LATEST_VERSION || scenario.version == 0 {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    require_finite("plant.a", scenario.plant.a)?;
    require_finite("plant.b", scenario.plant.b)?;
    require_finite("plant.c", scenario.plant.c)?;
    if scenario.plant.a == 0.0 {
        return Err(ValidationError::InvalidValue {
            field: "plant.a",
            value: scenario.plant.a,
            reason: "leading coefficient must be nonzero",
        });
    }

    require_finite("thermostat.setpoint", scenario.thermostat.setpoint)?;
    require_finite("thermostat.deadband", scenario.thermostat.deadband)?;
    if scenario.thermostat.deadband < 0.0 {
        return Err(ValidationError::InvalidValue {
            field: "thermostat.deadband",
            value: scenario.thermostat.deadband,
            reason: "deadband must be non-negative",
        });
    }

    require_finite("initial.value", scenario.initial.value)?;
    require_finite("initial.rate", scenario.initial.rate)?;

    require_finite("grid.t_end_s", scenario.grid.t_end_s)?;
    if scenario.grid.t_end_s <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: "grid.t_end_s",
            value: scenario.grid.t_end_s,
            reason: "duration must be positive",
        });
    }
    if scenario.grid.samples < 2 {
        return Err(ValidationError::InvalidValue {
            field: "grid.samples",
            value: scenario.grid.samples as f64,
            reason: "at least 2 samples required",
        });
    }

    require_finite("sim.substep_divisor", scenario.sim.substep_divisor)?;
    if scenario.sim.substep_divisor < 1.0 {
        return Err(ValidationError::InvalidValue {
            field: "sim.substep_divisor",
            value: scenario.sim.substep_divisor,
            reason: "must be at least 1",
        });
    }
    if scenario.sim.max_substeps == 0 {
        return Err(ValidationError::InvalidValue {
            field: "sim.max_substeps",
            value: 0.0,
            reason: "must be positive",
        });
    }

    Ok(())
}

fn require_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field,
            value,
            reason: "must be finite",
        })
    }
}
