//! Transient simulation of a thermal zone under hysteresis control.
//!
//! Provides:
//! - Second-order linear zone plant (a·y'' + b·y' + c·y = f)
//! - Coupled dynamics threading thermostat state through the derivative
//! - Fixed-step RK4 and forward Euler integrators
//! - Grid-driven runner with an explicit switch-resolution step bound

pub mod coupled;
pub mod error;
pub mod grid;
pub mod integrator;
pub mod model;
pub mod plant;
pub mod sim;
pub mod state;

// Re-exports for public API
pub use coupled::ZoneModel;
pub use error::{SimError, SimResult};
pub use integrator::{ForwardEuler, Integrator, RK4};
pub use model::DynamicsModel;
pub use plant::ZonePlant;
pub use sim::{IntegratorType, SimOptions, Trajectory, run_grid};
pub use state::ZoneState;
