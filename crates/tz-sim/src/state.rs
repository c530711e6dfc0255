//! Zone state vector.

use tz_core::Real;

/// Phase-space point of the zone: value and its first derivative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneState {
    /// Zone value y (temperature).
    pub value: Real,
    /// First derivative y'.
    pub rate: Real,
}

impl ZoneState {
    pub fn new(value: Real, rate: Real) -> Self {
        Self { value, rate }
    }

    /// Element-wise sum, as the integrators combine stage values.
    pub fn add(&self, other: &Self) -> Self {
        Self {
            value: self.value + other.value,
            rate: self.rate + other.rate,
        }
    }

    /// Scale both components by a scalar.
    pub fn scale(&self, factor: Real) -> Self {
        Self {
            value: self.value * factor,
            rate: self.rate * factor,
        }
    }

    /// True when both components are finite.
    pub fn is_finite(&self) -> bool {
        self.value.is_finite() && self.rate.is_finite()
    }
}
