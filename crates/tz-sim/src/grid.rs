//! Time-grid construction and validation.
//!
//! Grid generation is a boundary collaborator: callers may supply any
//! strictly increasing grid, and [`uniform`] is the common case.

use tz_core::{ensure_all_finite, is_strictly_increasing};

use crate::error::{SimError, SimResult};

/// Uniformly spaced samples over `[0, t_end]`, endpoint inclusive.
pub fn uniform(t_end: f64, samples: usize) -> SimResult<Vec<f64>> {
    if !t_end.is_finite() || t_end <= 0.0 {
        return Err(SimError::InvalidInput {
            what: "t_end must be finite and positive",
        });
    }
    if samples < 2 {
        return Err(SimError::InvalidInput {
            what: "grid must have at least 2 points",
        });
    }

    let n = samples - 1;
    let mut grid = Vec::with_capacity(samples);
    for i in 0..=n {
        grid.push(t_end * i as f64 / n as f64);
    }
    Ok(grid)
}

/// Validate a caller-supplied grid and return its smallest interval.
pub(crate) fn validate(grid: &[f64]) -> SimResult<f64> {
    if grid.len() < 2 {
        return Err(SimError::InvalidInput {
            what: "grid must have at least 2 points",
        });
    }
    ensure_all_finite(grid, "grid times must be finite")?;
    if !is_strictly_increasing(grid) {
        return Err(SimError::InvalidInput {
            what: "grid must be strictly increasing",
        });
    }

    let min_interval = grid
        .windows(2)
        .map(|w| w[1] - w[0])
        .fold(f64::INFINITY, f64::min);
    Ok(min_interval)
}
