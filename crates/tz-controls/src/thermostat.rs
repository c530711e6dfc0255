//! Two-sided hysteresis thermostat (bang-bang with deadband).

use crate::error::{ControlError, ControlResult};
use serde::{Deserialize, Serialize};

/// Default deadband half-width.
pub const DEFAULT_DEADBAND: f64 = 0.5;

/// Hysteresis thermostat configuration.
///
/// Switches heating on below `setpoint - deadband` and off above
/// `setpoint + deadband`. Inside the deadband the prior mode is held,
/// which prevents rapid cycling near the setpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thermostat {
    /// Target value.
    pub setpoint: f64,
    /// Deadband half-width (non-negative).
    pub deadband: f64,
}

impl Thermostat {
    /// Create a new thermostat.
    ///
    /// # Arguments
    ///
    /// * `setpoint` - Target value
    /// * `deadband` - Deadband half-width (must be finite and non-negative)
    pub fn new(setpoint: f64, deadband: f64) -> ControlResult<Self> {
        if !setpoint.is_finite() {
            return Err(ControlError::InvalidArg {
                what: "setpoint must be finite",
            });
        }
        if !deadband.is_finite() || deadband < 0.0 {
            return Err(ControlError::InvalidArg {
                what: "deadband must be finite and non-negative",
            });
        }
        Ok(Self { setpoint, deadband })
    }

    /// Create a thermostat with the default deadband of 0.5.
    pub fn with_default_deadband(setpoint: f64) -> ControlResult<Self> {
        Self::new(setpoint, DEFAULT_DEADBAND)
    }

    /// Advance the thermostat one decision and return the actuation signal.
    ///
    /// Transition rule, evaluated in this fixed order:
    /// - `measured < setpoint - deadband` switches on
    /// - `measured > setpoint + deadband` switches off
    /// - otherwise the prior mode is held
    ///
    /// Both thresholds are exclusive: a measurement exactly at
    /// `setpoint ± deadband` holds the prior mode. Switch times are only
    /// reproducible if this stays strict.
    ///
    /// The returned signal is 1.0 when heating, 0.0 otherwise, and reflects
    /// the post-update state.
    pub fn update(&self, state: &ThermostatState, measured: f64) -> (ThermostatState, f64) {
        let on = if measured < self.setpoint - self.deadband {
            true
        } else if measured > self.setpoint + self.deadband {
            false
        } else {
            state.on
        };

        let new_state = ThermostatState { on };
        let output = if on { 1.0 } else { 0.0 };
        (new_state, output)
    }
}

/// Retained on/off state of a thermostat.
///
/// Advanced only by [`Thermostat::update`]; owners decide when a fresh
/// state begins (one per simulation run).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThermostatState {
    /// True while heating is commanded.
    pub on: bool,
}

impl ThermostatState {
    /// Create a state with the given initial mode.
    pub fn new(on: bool) -> Self {
        Self { on }
    }
}

impl Default for ThermostatState {
    fn default() -> Self {
        Self { on: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SETPOINT: f64 = 22.0;
    const DEADBAND: f64 = 0.5;

    fn thermostat() -> Thermostat {
        Thermostat::new(SETPOINT, DEADBAND).unwrap()
    }

    #[test]
    fn switches_on_below_lower_threshold() {
        let (state, output) = thermostat().update(&ThermostatState::default(), 21.4);
        assert!(state.on);
        assert_eq!(output, 1.0);
    }

    #[test]
    fn switches_off_above_upper_threshold() {
        let (state, output) = thermostat().update(&ThermostatState::new(true), 22.6);
        assert!(!state.on);
        assert_eq!(output, 0.0);
    }

    #[test]
    fn lower_boundary_is_exclusive() {
        // Exactly setpoint - deadband: no transition, mode held.
        let (state, output) = thermostat().update(&ThermostatState::default(), SETPOINT - DEADBAND);
        assert!(!state.on);
        assert_eq!(output, 0.0);
    }

    #[test]
    fn upper_boundary_is_exclusive() {
        let (state, output) = thermostat().update(&ThermostatState::new(true), SETPOINT + DEADBAND);
        assert!(state.on);
        assert_eq!(output, 1.0);
    }

    #[test]
    fn output_reflects_post_update_state() {
        // Starting off but measuring cold: the same call that switches on
        // already reports 1.0.
        let (state, output) = thermostat().update(&ThermostatState::default(), 20.0);
        assert!(state.on);
        assert_eq!(output, 1.0);
    }

    #[test]
    fn default_deadband_is_half_degree() {
        let t = Thermostat::with_default_deadband(22.0).unwrap();
        assert_eq!(t.deadband, 0.5);
    }

    #[test]
    fn invalid_params_rejected() {
        assert!(Thermostat::new(22.0, -0.1).is_err());
        assert!(Thermostat::new(f64::NAN, 0.5).is_err());
        assert!(Thermostat::new(22.0, f64::INFINITY).is_err());
    }

    #[test]
    fn zero_deadband_allowed() {
        let t = Thermostat::new(22.0, 0.0).unwrap();
        // Exactly at setpoint: both thresholds exclusive, mode held.
        let (state, _) = t.update(&ThermostatState::new(true), 22.0);
        assert!(state.on);
    }

    proptest! {
        #[test]
        fn deadband_holds_prior_mode(
            prior in any::<bool>(),
            // Strictly inside (setpoint - deadband, setpoint + deadband).
            frac in -0.999f64..0.999
        ) {
            let measured = SETPOINT + frac * DEADBAND;
            let (state, output) = thermostat().update(&ThermostatState::new(prior), measured);
            prop_assert_eq!(state.on, prior);
            prop_assert_eq!(output, if prior { 1.0 } else { 0.0 });
        }
    }
}
