//! Curve sampling across the chart window.
//!
//! Each generator walks a temperature range, resolves the state at every
//! step, and projects into chart space. They hold no state and are
//! referentially transparent: identical arguments yield identical point
//! sequences, so callers may parallelize or cache freely.

use crate::config::ChartConfig;
use crate::coords::{ChartPoint, normalized, state_to_chart_coords};
use pf_core::units::{Psia, grains_from_lb};
use pf_psychro::relations::saturation_humidity_ratio;
use pf_psychro::{InputMode, SaturationModel, solve_state};

/// How far a constant-wet-bulb line extends past its saturation point [°F].
const WB_LINE_SPAN_F: f64 = 60.0;

/// Saturation curve (100 % RH boundary) across the configured temperature
/// range, `samples + 1` equally spaced steps.
///
/// Points whose humidity ratio leaves the configured window are dropped;
/// x is strictly increasing across the result.
pub fn saturation_curve<M: SaturationModel>(
    model: &M,
    config: &ChartConfig,
    pressure_psia: Psia,
    samples: usize,
) -> Vec<ChartPoint> {
    let step = (config.temp_max_f - config.temp_min_f) / samples as f64;
    let mut points = Vec::with_capacity(samples + 1);

    for i in 0..=samples {
        let temp_f = config.temp_min_f + i as f64 * step;
        let ws = saturation_humidity_ratio(model, temp_f, pressure_psia);
        let y = normalized(
            grains_from_lb(ws),
            config.w_min_grains,
            config.w_max_grains,
        );
        if (0.0..=1.0).contains(&y) {
            points.push(ChartPoint {
                x: normalized(temp_f, config.temp_min_f, config.temp_max_f),
                y,
            });
        }
    }
    points
}

/// Constant relative-humidity curve across the configured temperature range.
///
/// Resolves the full `DbRh` state at each step; samples that project outside
/// the window on either axis are dropped.
pub fn constant_rh_curve<M: SaturationModel>(
    model: &M,
    rh_percent: f64,
    config: &ChartConfig,
    pressure_psia: Psia,
    samples: usize,
) -> Vec<ChartPoint> {
    let step = (config.temp_max_f - config.temp_min_f) / samples as f64;
    let mut points = Vec::with_capacity(samples + 1);

    for i in 0..=samples {
        let temp_f = config.temp_min_f + i as f64 * step;
        let Ok(state) = solve_state(model, InputMode::DbRh, temp_f, rh_percent, pressure_psia)
        else {
            continue;
        };
        let x = normalized(state.dry_bulb_f, config.temp_min_f, config.temp_max_f);
        let y = normalized(
            state.humidity_ratio_grains,
            config.w_min_grains,
            config.w_max_grains,
        );
        if (0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y) {
            points.push(ChartPoint { x, y });
        }
    }
    points
}

/// Constant wet-bulb line from its saturation point down the chart.
///
/// Starts at `tdb = wet_bulb_f` and runs to
/// `min(temp_max, wet_bulb_f + 60)`, resolving the full `DbWb` state at
/// each step. Points are kept (they clamp at projection).
pub fn constant_wb_line<M: SaturationModel>(
    model: &M,
    wet_bulb_f: f64,
    config: &ChartConfig,
    pressure_psia: Psia,
    samples: usize,
) -> Vec<ChartPoint> {
    let end_f = (wet_bulb_f + WB_LINE_SPAN_F).min(config.temp_max_f);
    let step = (end_f - wet_bulb_f) / samples as f64;
    let mut points = Vec::with_capacity(samples + 1);

    for i in 0..=samples {
        let temp_f = wet_bulb_f + i as f64 * step;
        let Ok(state) = solve_state(model, InputMode::DbWb, temp_f, wet_bulb_f, pressure_psia)
        else {
            continue;
        };
        points.push(state_to_chart_coords(&state, config));
    }
    points
}
