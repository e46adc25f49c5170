//! Float helpers shared by the engine crates.

use crate::CoreError;

/// Screen a measurement for NaN/infinity before it reaches the solvers.
///
/// The iterative inversions tolerate out-of-range values (they just walk to
/// a non-physical iterate and stop at the budget), but a NaN input poisons
/// every downstream quantity, so the public entry points screen once here.
pub fn require_finite(value: f64, what: &'static str) -> Result<f64, CoreError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CoreError::NonFinite { what, value })
    }
}

/// Agreement check for conserved quantities.
///
/// Mass-weighted mixing and the algebraic enthalpy inverse reproduce their
/// inputs only to floating precision. The relative band covers
/// enthalpy-sized values; the absolute floor covers humidity ratios, which
/// sit near zero where a relative test alone is meaningless.
pub fn within_tolerance(a: f64, b: f64, rel: f64, abs_floor: f64) -> bool {
    let diff = (a - b).abs();
    diff <= abs_floor || diff <= rel * a.abs().max(b.abs())
}
