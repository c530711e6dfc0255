//! Second-order linear zone plant.

use crate::error::{SimError, SimResult};
use crate::state::ZoneState;

/// Constant-coefficient plant a·y'' + b·y' + c·y = f(t).
///
/// Stateless: the forcing input is supplied per call by the coupled model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZonePlant {
    a: f64,
    b: f64,
    c: f64,
}

impl ZonePlant {
    /// Create a plant from its three coefficients.
    ///
    /// The leading coefficient is validated here, once, so integration
    /// never hits a division fault mid-run.
    pub fn new(a: f64, b: f64, c: f64) -> SimResult<Self> {
        if !a.is_finite() || !b.is_finite() || !c.is_finite() {
            return Err(SimError::InvalidArg {
                what: "plant coefficients must be finite",
            });
        }
        if a == 0.0 {
            return Err(SimError::InvalidArg {
                what: "leading coefficient a must be nonzero",
            });
        }
        Ok(Self { a, b, c })
    }

    /// Second derivative y'' = (f - b·y' - c·y) / a.
    ///
    /// Pure and total over finite state and input.
    pub fn accel(&self, state: &ZoneState, input: f64) -> f64 {
        (input - self.b * state.rate - self.c * state.value) / self.a
    }
}
