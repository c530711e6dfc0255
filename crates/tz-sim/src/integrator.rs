//! Fixed-step time integrators.

use crate::error::SimResult;
use crate::model::DynamicsModel;
use crate::state::ZoneState;

/// Trait for time integrators.
pub trait Integrator {
    /// Advance state by one time step using the dynamics model.
    fn step<M: DynamicsModel>(
        &self,
        model: &mut M,
        t: f64,
        x: &ZoneState,
        dt: f64,
    ) -> SimResult<ZoneState>;
}

/// Classical RK4 (Runge-Kutta 4th order) integrator.
///
/// Evaluates the derivative four times per step. With a hysteresis-coupled
/// model each stage evaluation can advance the controller mode; the step
/// size bound in [`crate::sim`] keeps those intra-step commits from moving
/// switch times beyond the configured resolution.
#[derive(Clone, Debug)]
pub struct RK4;

impl Integrator for RK4 {
    fn step<M: DynamicsModel>(
        &self,
        model: &mut M,
        t: f64,
        x: &ZoneState,
        dt: f64,
    ) -> SimResult<ZoneState> {
        let k1 = model.rhs(t, x)?;
        let k2 = model.rhs(t + 0.5 * dt, &x.add(&k1.scale(0.5 * dt)))?;
        let k3 = model.rhs(t + 0.5 * dt, &x.add(&k2.scale(0.5 * dt)))?;
        let k4 = model.rhs(t + dt, &x.add(&k3.scale(dt)))?;

        // x_new = x + (dt/6) * (k1 + 2*k2 + 2*k3 + k4)
        let k_sum = k1.add(&k2.scale(2.0)).add(&k3.scale(2.0)).add(&k4);
        Ok(x.add(&k_sum.scale(dt / 6.0)))
    }
}

/// Forward Euler (explicit, 1st order). One rhs call per step.
#[derive(Clone, Debug)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn step<M: DynamicsModel>(
        &self,
        model: &mut M,
        t: f64,
        x: &ZoneState,
        dt: f64,
    ) -> SimResult<ZoneState> {
        let xdot = model.rhs(t, x)?;
        Ok(x.add(&xdot.scale(dt)))
    }
}
