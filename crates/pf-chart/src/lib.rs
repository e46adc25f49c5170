//! pf-chart: psychrometric chart geometry for psychroflow.
//!
//! Pure sampling utilities over the pf-psychro state solver:
//! - projection of air states into normalized [0,1]² chart space and back
//! - saturation, constant-RH, and constant-wet-bulb curve generation
//! - gridline positions from the configured chart intervals
//!
//! Nothing here renders; the host draws the returned point sequences.

pub mod config;
pub mod coords;
pub mod curves;

// Re-exports for ergonomics
pub use config::ChartConfig;
pub use coords::{ChartInputs, ChartPoint, chart_coords_to_inputs, state_to_chart_coords};
pub use curves::{constant_rh_curve, constant_wb_line, saturation_curve};
