use crate::TzError;

/// Floating point type used throughout system
pub type Real = f64;

/// Absolute plus relative comparison tolerances.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Tolerances {
    /// Absolute-only tolerance, for comparisons at a known scale
    /// (settling bands, grid spacing).
    pub fn absolute(abs: Real) -> Self {
        Self { abs, rel: 0.0 }
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// True when `a` and `b` agree within `tol`: the absolute bound applies
/// near zero, the relative bound scales with the larger magnitude.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, TzError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TzError::NonFinite { what, value: v })
    }
}

/// Check every element of a slice, reporting the first offender.
pub fn ensure_all_finite(vs: &[Real], what: &'static str) -> Result<(), TzError> {
    for &v in vs {
        ensure_finite(v, what)?;
    }
    Ok(())
}

/// True if the slice is strictly increasing. Empty and single-element
/// slices are trivially strictly increasing.
pub fn is_strictly_increasing(vs: &[Real]) -> bool {
    vs.windows(2).all(|w| w[0] < w[1])
}
