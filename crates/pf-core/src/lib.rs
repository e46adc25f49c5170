//! pf-core: stable foundation for psychroflow.
//!
//! Contains:
//! - units (IP-unit f64 aliases, conversions, shared physical constants)
//! - numeric (measurement screening + conserved-quantity comparison)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
