//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered when configuring or running a simulation.
///
/// Three terminal kinds: bad fixed parameters (caught at construction),
/// bad per-run inputs (caught before any integration work), and numerical
/// divergence (caught per step, aborting the run). None are retried.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Invalid input: {what}")]
    InvalidInput { what: &'static str },

    #[error("Diverged at t={t}: {what} = {value}")]
    Diverged {
        what: &'static str,
        t: f64,
        value: f64,
    },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<tz_controls::ControlError> for SimError {
    fn from(e: tz_controls::ControlError) -> Self {
        match e {
            tz_controls::ControlError::InvalidArg { what } => SimError::InvalidArg { what },
        }
    }
}

impl From<tz_core::TzError> for SimError {
    fn from(e: tz_core::TzError) -> Self {
        match e {
            tz_core::TzError::NonFinite { what, .. } => SimError::InvalidInput { what },
        }
    }
}
