//! DynamicsModel trait for the coupled system.

use crate::error::SimResult;
use crate::state::ZoneState;

/// Trait for the dynamic system the integrators drive.
///
/// The state is the concrete [`ZoneState`] pair: this crate targets exactly
/// one plant order and one controller family, not a general ODE framework.
///
/// `rhs` takes `&mut self` because the derivative of a hysteresis-controlled
/// plant depends on controller history: each evaluation may commit a mode
/// transition. Calling `rhs` twice at the same `(t, x)` is therefore not
/// guaranteed to return the same derivative.
pub trait DynamicsModel {
    /// Compute the state derivative dx/dt = f(t, x).
    fn rhs(&mut self, t: f64, x: &ZoneState) -> SimResult<ZoneState>;

    /// Restore any retained controller state to its configured initial
    /// mode. The runner calls this once per run, before integrating, so
    /// independent runs never share history.
    fn reset(&mut self);
}
