//! State-point solver: mode dispatch plus the two bounded iterative solvers.
//!
//! Both solvers keep the reference calculator's policy on non-convergence:
//! after the iteration budget is spent, the last iterate is returned
//! silently. The [`IterationTrace`] carried alongside each result exposes
//! the iteration count, final residual, and a converged flag so callers can
//! apply stricter validation without changing default behavior.

use crate::error::PsychroResult;
use crate::relations::{
    enthalpy, humidity_ratio_from_vapor_pressure, humidity_ratio_from_wet_bulb,
    relative_humidity_from_pressures, saturation_humidity_ratio, specific_volume,
    vapor_pressure_from_humidity_ratio,
};
use crate::saturation::SaturationModel;
use crate::state::{InputMode, StatePoint};
use pf_core::numeric::require_finite;
use pf_core::units::{DegF, LbPerLb, Psia, grains_from_lb, lb_from_grains};

/// Newton–Raphson dew-point solve configuration.
#[derive(Debug, Clone, Copy)]
pub struct DewPointConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Absolute tolerance on the pressure residual [psia]
    pub tolerance_psia: f64,
    /// Initial temperature guess [°F]
    pub seed_f: DegF,
    /// Forward-difference step for the derivative estimate [°F]
    pub derivative_step_f: f64,
}

impl Default for DewPointConfig {
    fn default() -> Self {
        Self {
            max_iterations: 20,
            tolerance_psia: 1e-4,
            seed_f: 60.0,
            derivative_step_f: 0.1,
        }
    }
}

/// Damped fixed-point wet-bulb solve configuration.
#[derive(Debug, Clone, Copy)]
pub struct WetBulbConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Absolute tolerance on the humidity-ratio residual [lb/lb]
    pub tolerance: f64,
    /// Fixed proportional gain [°F per unit humidity-ratio error]
    pub gain_f_per_unit: f64,
    /// Lower clamp on the trial wet bulb [°F]
    pub floor_f: DegF,
}

impl Default for WetBulbConfig {
    fn default() -> Self {
        Self {
            max_iterations: 30,
            tolerance: 1e-6,
            gain_f_per_unit: 100.0,
            floor_f: -40.0,
        }
    }
}

/// Outcome of one iterative solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationTrace {
    /// Solution value (°F for both solvers)
    pub value: f64,
    /// Iterations actually performed
    pub iterations: usize,
    /// Final residual (psia for dew point, lb/lb for wet bulb)
    pub residual: f64,
    /// Whether the residual met tolerance within the budget
    pub converged: bool,
}

/// Diagnostics from the iterative parts of a state solve.
///
/// A mode that receives a property directly (e.g. the wet bulb in
/// [`InputMode::DbWb`]) has no trace for it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SolveTrace {
    pub dew_point: Option<IterationTrace>,
    pub wet_bulb: Option<IterationTrace>,
}

/// Dew point [°F] from vapor partial pressure, by Newton–Raphson on
/// `pws(T) - pw` with a forward-difference derivative.
pub fn dew_point_from_vapor_pressure(
    model: &dyn SaturationModel,
    pw: Psia,
    config: &DewPointConfig,
) -> IterationTrace {
    let mut t = config.seed_f;
    let mut residual = f64::INFINITY;
    let mut iterations = 0;
    let mut converged = false;

    for i in 0..config.max_iterations {
        iterations = i + 1;
        let pws_t = model.saturation_pressure_psia(t);
        residual = pws_t - pw;
        if residual.abs() < config.tolerance_psia {
            converged = true;
            break;
        }
        let step = config.derivative_step_f;
        let derivative = (model.saturation_pressure_psia(t + step) - pws_t) / step;
        t -= residual / derivative;
    }

    if !converged {
        tracing::debug!(
            iterations,
            residual,
            "dew-point iteration exhausted, returning last iterate"
        );
    }
    IterationTrace {
        value: t,
        iterations,
        residual,
        converged,
    }
}

/// Wet bulb [°F] from dry bulb and humidity ratio, by damped fixed-point
/// iteration on the wet-bulb relation.
///
/// The update is a fixed proportional gain, not a derivative-based step;
/// its contraction rate at typical comfort conditions is slow enough that
/// the default budget can stop short of tolerance. The trace reports it.
pub fn wet_bulb_from_humidity_ratio(
    model: &dyn SaturationModel,
    tdb: DegF,
    w: LbPerLb,
    pressure_psia: Psia,
    config: &WetBulbConfig,
) -> IterationTrace {
    let mut twb = tdb - 10.0;
    let mut residual = f64::INFINITY;
    let mut iterations = 0;
    let mut converged = false;

    for i in 0..config.max_iterations {
        iterations = i + 1;
        let ws_wb = saturation_humidity_ratio(model, twb, pressure_psia);
        let w_calc = humidity_ratio_from_wet_bulb(tdb, twb, ws_wb);
        residual = w - w_calc;
        if residual.abs() < config.tolerance {
            converged = true;
            break;
        }
        twb = (twb + residual * config.gain_f_per_unit)
            .max(config.floor_f)
            .min(tdb);
    }

    if !converged {
        tracing::debug!(
            iterations,
            residual,
            "wet-bulb iteration exhausted, returning last iterate"
        );
    }
    IterationTrace {
        value: twb,
        iterations,
        residual,
        converged,
    }
}

/// Resolve a complete air state from a measured property pair.
pub fn solve_state(
    model: &dyn SaturationModel,
    mode: InputMode,
    dry_bulb_f: DegF,
    second: f64,
    pressure_psia: Psia,
) -> PsychroResult<StatePoint> {
    solve_state_traced(model, mode, dry_bulb_f, second, pressure_psia).map(|(state, _)| state)
}

/// [`solve_state`] plus the iteration diagnostics of the solve.
pub fn solve_state_traced(
    model: &dyn SaturationModel,
    mode: InputMode,
    dry_bulb_f: DegF,
    second: f64,
    pressure_psia: Psia,
) -> PsychroResult<(StatePoint, SolveTrace)> {
    require_finite(dry_bulb_f, "dry bulb")?;
    require_finite(second, mode.second_label())?;
    require_finite(pressure_psia, "barometric pressure")?;

    let p = pressure_psia;
    let pws_db = model.saturation_pressure_psia(dry_bulb_f);
    let mut trace = SolveTrace::default();

    let state = match mode {
        InputMode::DbWb => {
            let twb = second;
            let ws_wb = saturation_humidity_ratio(model, twb, p);
            let w = humidity_ratio_from_wet_bulb(dry_bulb_f, twb, ws_wb).max(0.0);
            let pw = vapor_pressure_from_humidity_ratio(w, p);
            let dew = dew_point_from_vapor_pressure(model, pw, &DewPointConfig::default());
            trace.dew_point = Some(dew);
            StatePoint::assemble(
                dry_bulb_f,
                twb,
                dew.value,
                relative_humidity_from_pressures(pw, pws_db),
                grains_from_lb(w),
                enthalpy(dry_bulb_f, w),
                specific_volume(dry_bulb_f, w, p),
                pw,
                pws_db,
            )
        }
        InputMode::DbRh => {
            let pw = second / 100.0 * pws_db;
            let w = humidity_ratio_from_vapor_pressure(pw, p);
            let dew = dew_point_from_vapor_pressure(model, pw, &DewPointConfig::default());
            let wet =
                wet_bulb_from_humidity_ratio(model, dry_bulb_f, w, p, &WetBulbConfig::default());
            trace.dew_point = Some(dew);
            trace.wet_bulb = Some(wet);
            StatePoint::assemble(
                dry_bulb_f,
                wet.value,
                dew.value,
                relative_humidity_from_pressures(pw, pws_db),
                grains_from_lb(w),
                enthalpy(dry_bulb_f, w),
                specific_volume(dry_bulb_f, w, p),
                pw,
                pws_db,
            )
        }
        InputMode::DbDp => {
            // By definition, vapor pressure is the saturation pressure at the dew point.
            let pw = model.saturation_pressure_psia(second);
            let w = humidity_ratio_from_vapor_pressure(pw, p);
            let wet =
                wet_bulb_from_humidity_ratio(model, dry_bulb_f, w, p, &WetBulbConfig::default());
            trace.wet_bulb = Some(wet);
            StatePoint::assemble(
                dry_bulb_f,
                wet.value,
                second,
                relative_humidity_from_pressures(pw, pws_db),
                grains_from_lb(w),
                enthalpy(dry_bulb_f, w),
                specific_volume(dry_bulb_f, w, p),
                pw,
                pws_db,
            )
        }
        InputMode::DbW => {
            let w = lb_from_grains(second);
            let pw = vapor_pressure_from_humidity_ratio(w, p);
            let dew = dew_point_from_vapor_pressure(model, pw, &DewPointConfig::default());
            let wet =
                wet_bulb_from_humidity_ratio(model, dry_bulb_f, w, p, &WetBulbConfig::default());
            trace.dew_point = Some(dew);
            trace.wet_bulb = Some(wet);
            StatePoint::assemble(
                dry_bulb_f,
                wet.value,
                dew.value,
                relative_humidity_from_pressures(pw, pws_db),
                second,
                enthalpy(dry_bulb_f, w),
                specific_volume(dry_bulb_f, w, p),
                pw,
                pws_db,
            )
        }
    };

    Ok((state, trace))
}
