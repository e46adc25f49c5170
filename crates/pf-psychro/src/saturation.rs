//! Saturation-pressure models.
//!
//! The rest of the engine consumes saturation pressure through the
//! [`SaturationModel`] trait, so the correlation can be stubbed in tests or
//! swapped for a higher-fidelity model without touching the solvers.

use pf_core::units::{DegF, Psia, rankine};

/// Trait for water saturation-pressure correlations.
///
/// Implementations must be thread-safe (Send + Sync) to support parallel
/// evaluation, and must be pure: identical inputs yield identical outputs.
pub trait SaturationModel: Send + Sync {
    /// Get the model name (for debugging/logging).
    fn name(&self) -> &str;

    /// Saturation pressure of water vapor [psia] at the given temperature [°F].
    fn saturation_pressure_psia(&self, temp_f: DegF) -> Psia;
}

/// ASHRAE Hyland–Wexler saturation-pressure correlation (IP units).
///
/// Valid from -148 °F to 392 °F, with separate coefficient sets over ice
/// (below 32 °F) and over liquid water. This is the default backend; hosts
/// with their own correlation implement [`SaturationModel`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct AshraeSaturation;

// Hyland & Wexler (1983) coefficients, temperature in °R, pressure in psia.
const ICE_C1: f64 = -1.021_416_5e4;
const ICE_C2: f64 = -4.893_242_8;
const ICE_C3: f64 = -5.376_579_4e-3;
const ICE_C4: f64 = 1.920_237_7e-7;
const ICE_C5: f64 = 3.557_583_2e-10;
const ICE_C6: f64 = -9.034_468_8e-14;
const ICE_C7: f64 = 4.163_501_9;

const WATER_C8: f64 = -1.044_039_7e4;
const WATER_C9: f64 = -1.129_465_0e1;
const WATER_C10: f64 = -2.702_235_5e-2;
const WATER_C11: f64 = 1.289_036_0e-5;
const WATER_C12: f64 = -2.478_068_1e-9;
const WATER_C13: f64 = 6.545_967_3;

impl SaturationModel for AshraeSaturation {
    fn name(&self) -> &str {
        "ashrae-hyland-wexler"
    }

    fn saturation_pressure_psia(&self, temp_f: DegF) -> Psia {
        let t = rankine(temp_f);
        let ln_pws = if temp_f < 32.0 {
            ICE_C1 / t
                + ICE_C2
                + ICE_C3 * t
                + ICE_C4 * t * t
                + ICE_C5 * t * t * t
                + ICE_C6 * t * t * t * t
                + ICE_C7 * t.ln()
        } else {
            WATER_C8 / t
                + WATER_C9
                + WATER_C10 * t
                + WATER_C11 * t * t
                + WATER_C12 * t * t * t
                + WATER_C13 * t.ln()
        };
        ln_pws.exp()
    }
}
