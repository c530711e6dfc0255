//! Coupled zone dynamics: thermostat decision feeding the plant.

use tz_controls::{Thermostat, ThermostatState};

use crate::error::SimResult;
use crate::model::DynamicsModel;
use crate::plant::ZonePlant;
use crate::state::ZoneState;

/// The coupled system: a [`ZonePlant`] forced by a [`Thermostat`].
///
/// Owns the thermostat's retained state and threads it through consecutive
/// derivative evaluations. The plant and thermostat never see each other's
/// internals; only this model reads and writes the switch state.
#[derive(Debug, Clone)]
pub struct ZoneModel {
    plant: ZonePlant,
    thermostat: Thermostat,
    switch: ThermostatState,
    initial_on: bool,
}

impl ZoneModel {
    /// Build the coupled model with the given initial heating mode.
    pub fn new(plant: ZonePlant, thermostat: Thermostat, initial_on: bool) -> Self {
        Self {
            plant,
            thermostat,
            switch: ThermostatState::new(initial_on),
            initial_on,
        }
    }

    /// Current heating mode, for inspection between evaluations.
    pub fn heating_on(&self) -> bool {
        self.switch.on
    }
}

impl DynamicsModel for ZoneModel {
    fn rhs(&mut self, _t: f64, x: &ZoneState) -> SimResult<ZoneState> {
        // The measured value is the first state component. The thermostat
        // commits its mode on every evaluation, including the intermediate
        // stage evaluations of RK4, so the derivative is history-dependent.
        let (switch, input) = self.thermostat.update(&self.switch, x.value);
        self.switch = switch;

        Ok(ZoneState {
            value: x.rate,
            rate: self.plant.accel(x, input),
        })
    }

    fn reset(&mut self) {
        self.switch = ThermostatState::new(self.initial_on);
    }
}
