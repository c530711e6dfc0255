//! Simulation runner and trajectory recording.

use tracing::debug;

use crate::error::{SimError, SimResult};
use crate::grid;
use crate::integrator::{ForwardEuler, Integrator, RK4};
use crate::model::DynamicsModel;
use crate::state::ZoneState;

/// Integrator selection for simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntegratorType {
    /// 4th-order Runge-Kutta (default, 4 rhs calls per step).
    #[default]
    RK4,
    /// Forward Euler (1st-order, 1 rhs call per step).
    ForwardEuler,
}

/// Options for simulation runs.
#[derive(Clone, Debug)]
pub struct SimOptions {
    /// Internal steps are no larger than the smallest grid interval
    /// divided by this. The forcing term switches discontinuously with the
    /// state, so this bound is what keeps switch times resolved; 200 keeps
    /// chattering near the deadband from being under-resolved.
    pub substep_divisor: f64,
    /// Upper bound on total internal steps across the whole run.
    pub max_substeps: usize,
    /// Integrator type (default: RK4).
    pub integrator: IntegratorType,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            substep_divisor: 200.0,
            max_substeps: 50_000_000,
            integrator: IntegratorType::default(),
        }
    }
}

/// Recorded trajectory: one state per requested grid point.
///
/// Immutable once produced; a run either yields a complete trajectory or
/// fails with a [`SimError`], never a partial record.
#[derive(Clone, Debug)]
pub struct Trajectory {
    /// Time points, echoing the caller's grid.
    pub t: Vec<f64>,
    /// State at each time point.
    pub x: Vec<ZoneState>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Final recorded state.
    pub fn last(&self) -> Option<&ZoneState> {
        self.x.last()
    }
}

/// Integrate the model over a caller-supplied time grid.
///
/// The grid must be strictly increasing with at least 2 points. Each grid
/// interval is subdivided so no internal step exceeds the configured bound;
/// the first output equals `initial` exactly and every grid point gets
/// exactly one recorded state.
///
/// Controller state is reset before integration, so repeated calls with
/// the same inputs produce bit-identical trajectories.
pub fn run_grid<M: DynamicsModel>(
    model: &mut M,
    initial: ZoneState,
    time_grid: &[f64],
    opts: &SimOptions,
) -> SimResult<Trajectory> {
    if !opts.substep_divisor.is_finite() || opts.substep_divisor < 1.0 {
        return Err(SimError::InvalidArg {
            what: "substep_divisor must be at least 1",
        });
    }
    if opts.max_substeps == 0 {
        return Err(SimError::InvalidArg {
            what: "max_substeps must be positive",
        });
    }

    let min_interval = grid::validate(time_grid)?;
    if !initial.is_finite() {
        return Err(SimError::InvalidInput {
            what: "initial state must be finite",
        });
    }

    let dt_max = min_interval / opts.substep_divisor;

    // The subdivision is fixed by the grid, so the resource bound can be
    // checked before any work happens.
    let mut total_substeps = 0usize;
    for w in time_grid.windows(2) {
        total_substeps += substeps_for(w[1] - w[0], dt_max);
    }
    if total_substeps > opts.max_substeps {
        return Err(SimError::InvalidInput {
            what: "grid requires more internal steps than max_substeps allows",
        });
    }
    debug!(
        points = time_grid.len(),
        total_substeps, dt_max, "starting grid run"
    );

    model.reset();
    let mut x = initial;

    let mut t_record = Vec::with_capacity(time_grid.len());
    let mut x_record = Vec::with_capacity(time_grid.len());
    t_record.push(time_grid[0]);
    x_record.push(x);

    for w in time_grid.windows(2) {
        let (t0, t1) = (w[0], w[1]);
        let n = substeps_for(t1 - t0, dt_max);
        let h = (t1 - t0) / n as f64;

        for k in 0..n {
            let t = t0 + k as f64 * h;
            x = match opts.integrator {
                IntegratorType::RK4 => RK4.step(model, t, &x, h)?,
                IntegratorType::ForwardEuler => ForwardEuler.step(model, t, &x, h)?,
            };
            check_finite(&x, t + h)?;
        }

        t_record.push(t1);
        x_record.push(x);
    }

    Ok(Trajectory {
        t: t_record,
        x: x_record,
    })
}

/// Number of equal substeps covering `interval` without exceeding `dt_max`.
fn substeps_for(interval: f64, dt_max: f64) -> usize {
    ((interval / dt_max).ceil() as usize).max(1)
}

fn check_finite(x: &ZoneState, t: f64) -> SimResult<()> {
    if x.value.is_finite() && x.rate.is_finite() {
        return Ok(());
    }
    if x.value.is_finite() {
        Err(SimError::Diverged {
            what: "rate",
            t,
            value: x.rate,
        })
    } else {
        Err(SimError::Diverged {
            what: "value",
            t,
            value: x.value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DynamicsModel;

    struct Still;

    impl DynamicsModel for Still {
        fn rhs(&mut self, _t: f64, _x: &ZoneState) -> SimResult<ZoneState> {
            Ok(ZoneState::new(0.0, 0.0))
        }

        fn reset(&mut self) {}
    }

    #[test]
    fn sim_options_defaults() {
        let opts = SimOptions::default();
        assert_eq!(opts.substep_divisor, 200.0);
        assert_eq!(opts.integrator, IntegratorType::RK4);
        assert!(opts.max_substeps > 0);
    }

    #[test]
    fn non_increasing_grid_rejected() {
        let err = run_grid(
            &mut Still,
            ZoneState::new(0.0, 0.0),
            &[0.0, 0.0],
            &SimOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SimError::InvalidInput { .. }));
    }

    #[test]
    fn short_grid_rejected() {
        let err = run_grid(
            &mut Still,
            ZoneState::new(0.0, 0.0),
            &[0.0],
            &SimOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SimError::InvalidInput { .. }));
    }

    #[test]
    fn non_finite_initial_state_rejected() {
        let err = run_grid(
            &mut Still,
            ZoneState::new(f64::NAN, 0.0),
            &[0.0, 1.0],
            &SimOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SimError::InvalidInput { .. }));
    }

    #[test]
    fn substep_limit_enforced_before_integration() {
        let opts = SimOptions {
            max_substeps: 10,
            ..SimOptions::default()
        };
        let err = run_grid(&mut Still, ZoneState::new(0.0, 0.0), &[0.0, 1.0], &opts).unwrap_err();
        assert!(matches!(err, SimError::InvalidInput { .. }));
    }

    #[test]
    fn invalid_options_rejected() {
        let opts = SimOptions {
            substep_divisor: 0.5,
            ..SimOptions::default()
        };
        let err = run_grid(&mut Still, ZoneState::new(0.0, 0.0), &[0.0, 1.0], &opts).unwrap_err();
        assert!(matches!(err, SimError::InvalidArg { .. }));
    }

    #[test]
    fn first_output_is_initial_state_exactly() {
        let initial = ZoneState::new(20.0, 0.25);
        let traj = run_grid(&mut Still, initial, &[0.0, 1.0, 2.0], &SimOptions::default()).unwrap();
        assert_eq!(traj.len(), 3);
        assert_eq!(traj.x[0], initial);
        assert_eq!(traj.t, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn divergence_aborts_with_time() {
        struct BlowUp;

        impl DynamicsModel for BlowUp {
            fn rhs(&mut self, _t: f64, _x: &ZoneState) -> SimResult<ZoneState> {
                Ok(ZoneState::new(f64::INFINITY, 0.0))
            }

            fn reset(&mut self) {}
        }

        let err = run_grid(
            &mut BlowUp,
            ZoneState::new(0.0, 0.0),
            &[0.0, 1.0],
            &SimOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SimError::Diverged { .. }));
    }

    #[test]
    fn substeps_cover_interval() {
        assert_eq!(substeps_for(1.0, 0.005), 200);
        assert_eq!(substeps_for(1.0, 0.3), 4);
        assert_eq!(substeps_for(1e-9, 0.005), 1);
    }
}
