//! Projection between air states and normalized chart space.
//!
//! Chart space is the unit square: x spans the configured temperature range,
//! y the configured humidity-ratio range. Both axes clamp, so any state maps
//! into the box even when it lies outside the configured window.

use crate::config::ChartConfig;
use pf_core::units::{DegF, GrainsPerLb};
use pf_psychro::StatePoint;
use serde::{Deserialize, Serialize};

/// A point in normalized [0,1]² chart space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

/// Solver inputs recovered from a chart position.
///
/// Feed these to the state solver in `DbW` mode to resolve the full state
/// under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartInputs {
    pub dry_bulb_f: DegF,
    pub humidity_ratio_grains: GrainsPerLb,
}

/// Normalized position of a value within [min, max], unclamped.
pub(crate) fn normalized(value: f64, min: f64, max: f64) -> f64 {
    (value - min) / (max - min)
}

/// Project a state into chart space. Both axes clamp to [0,1].
pub fn state_to_chart_coords(state: &StatePoint, config: &ChartConfig) -> ChartPoint {
    ChartPoint {
        x: normalized(state.dry_bulb_f, config.temp_min_f, config.temp_max_f).clamp(0.0, 1.0),
        y: normalized(
            state.humidity_ratio_grains,
            config.w_min_grains,
            config.w_max_grains,
        )
        .clamp(0.0, 1.0),
    }
}

/// Invert a chart position back to solver inputs.
///
/// Coordinates are clamped into [0,1] first, so drag positions slightly
/// outside the canvas resolve to the chart edge.
pub fn chart_coords_to_inputs(x: f64, y: f64, config: &ChartConfig) -> ChartInputs {
    let x = x.clamp(0.0, 1.0);
    let y = y.clamp(0.0, 1.0);
    ChartInputs {
        dry_bulb_f: config.temp_min_f + x * (config.temp_max_f - config.temp_min_f),
        humidity_ratio_grains: config.w_min_grains + y * (config.w_max_grains - config.w_min_grains),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn projection_round_trips_inside_the_window(x in 0.0_f64..=1.0, y in 0.0_f64..=1.0) {
            let config = ChartConfig::default();
            let inputs = chart_coords_to_inputs(x, y, &config);
            let back_x = normalized(inputs.dry_bulb_f, config.temp_min_f, config.temp_max_f);
            let back_y = normalized(inputs.humidity_ratio_grains, config.w_min_grains, config.w_max_grains);
            prop_assert!((back_x - x).abs() < 1e-12);
            prop_assert!((back_y - y).abs() < 1e-12);
        }
    }
}
