//! Control primitives for thermozone.
//!
//! Signals are scalar `f64` values. Controllers carry their retained state
//! in explicit state structs, advanced by pure `update` calls that return
//! the new state alongside the output; nothing here holds hidden mutable
//! state.

pub mod error;
pub mod thermostat;

pub use error::{ControlError, ControlResult};
pub use thermostat::{DEFAULT_DEADBAND, Thermostat, ThermostatState};
