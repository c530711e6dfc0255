//! tz-core: stable foundation for thermozone.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{TzError, TzResult};
pub use numeric::*;
