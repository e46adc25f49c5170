//! Chart bounds and grid configuration.

use serde::{Deserialize, Serialize};

/// Bounds and grid intervals for a psychrometric chart.
///
/// Owned by the host application; the generators only read it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub temp_min_f: f64,
    pub temp_max_f: f64,
    pub temp_interval_f: f64,
    pub w_min_grains: f64,
    pub w_max_grains: f64,
    pub w_interval_grains: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        // The usual full-comfort chart window.
        Self {
            temp_min_f: 30.0,
            temp_max_f: 110.0,
            temp_interval_f: 5.0,
            w_min_grains: 0.0,
            w_max_grains: 210.0,
            w_interval_grains: 10.0,
        }
    }
}

impl ChartConfig {
    /// Temperature gridline positions [°F], inclusive of both bounds.
    pub fn temperature_gridlines(&self) -> Vec<f64> {
        Self::gridlines(self.temp_min_f, self.temp_max_f, self.temp_interval_f)
    }

    /// Humidity-ratio gridline positions [grains/lb], inclusive of both bounds.
    pub fn humidity_gridlines(&self) -> Vec<f64> {
        Self::gridlines(self.w_min_grains, self.w_max_grains, self.w_interval_grains)
    }

    fn gridlines(min: f64, max: f64, interval: f64) -> Vec<f64> {
        if interval <= 0.0 || max <= min {
            return vec![min];
        }
        let mut lines = Vec::new();
        let mut v = min;
        while v < max {
            lines.push(v);
            v += interval;
        }
        lines.push(max);
        lines
    }
}
