//! pf-psychro: psychrometric state-point engine for psychroflow.
//!
//! Provides:
//! - The [`SaturationModel`] trait and the default ASHRAE Hyland–Wexler
//!   correlation backend
//! - Standard-atmosphere barometric pressure
//! - Closed-form moist-air relations (humidity ratio, enthalpy, specific
//!   volume, the wet-bulb relation)
//! - The state-point solver: any of four measured property pairs to a full
//!   [`StatePoint`], with bounded Newton (dew point) and damped fixed-point
//!   (wet bulb) inversions
//! - Adiabatic mixing of two airstreams and process-load calculation
//! - Standard-air shortcut formulas
//!
//! # Architecture
//!
//! Every function is a pure transform of its arguments plus an injected
//! [`SaturationModel`]; nothing here holds state, performs I/O, or caches.
//! Callers own memoization if they need it; results are deterministic for
//! identical inputs and an identical model.
//!
//! # Numeric edge cases
//!
//! The engine reproduces a permissive reference calculator: out-of-range
//! temperatures, vapor pressure at or above barometric pressure, and
//! iterative-solver non-convergence are not rejected. The solvers return
//! their best estimate when the iteration budget runs out, and report what
//! happened through [`IterationTrace`]. Callers that need strictness should
//! check the trace (or the state's plausibility) themselves.
//!
//! # Example
//!
//! ```
//! use pf_psychro::{AshraeSaturation, InputMode, solve_state};
//!
//! let model = AshraeSaturation;
//! // 75 °F dry bulb / 62 °F wet bulb at sea level.
//! let state = solve_state(&model, InputMode::DbWb, 75.0, 62.0, 14.696).unwrap();
//! assert!(state.relative_humidity > 45.0 && state.relative_humidity < 52.0);
//! ```

pub mod atmosphere;
pub mod error;
pub mod mixing;
pub mod process;
pub mod relations;
pub mod saturation;
pub mod shortcuts;
pub mod solve;
pub mod state;

// Re-exports for ergonomics
pub use atmosphere::{AtmosphericConditions, atmospheric_conditions, pressure_at_altitude_psia};
pub use error::{PsychroError, PsychroResult};
pub use mixing::{AirStream, MixingResult, mix_streams};
pub use process::{ProcessLoads, process_loads};
pub use saturation::{AshraeSaturation, SaturationModel};
pub use shortcuts::{quick_latent_heat_btuh, quick_sensible_heat_btuh, quick_total_heat_btuh};
pub use solve::{
    DewPointConfig, IterationTrace, SolveTrace, WetBulbConfig, dew_point_from_vapor_pressure,
    solve_state, solve_state_traced, wet_bulb_from_humidity_ratio,
};
pub use state::{InputMode, StatePoint};
