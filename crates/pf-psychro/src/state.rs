//! State-point input modes and the resolved air-state record.

use pf_core::units::{BtuPerLb, DegF, Ft3PerLb, GrainsPerLb, LbPerLb, Psia, lb_from_grains};
use serde::{Deserialize, Serialize};

/// The measured property pair supplied to the solver.
///
/// Dry bulb is always the first input; the variant names the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputMode {
    /// Dry bulb [°F] + wet bulb [°F].
    DbWb,
    /// Dry bulb [°F] + relative humidity [%].
    DbRh,
    /// Dry bulb [°F] + dew point [°F].
    DbDp,
    /// Dry bulb [°F] + humidity ratio [grains/lb].
    DbW,
}

impl InputMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::DbWb => "DB-WB",
            Self::DbRh => "DB-RH",
            Self::DbDp => "DB-DP",
            Self::DbW => "DB-W",
        }
    }

    pub fn second_label(self) -> &'static str {
        match self {
            Self::DbWb => "Wet bulb [°F]",
            Self::DbRh => "Relative humidity [%]",
            Self::DbDp => "Dew point [°F]",
            Self::DbW => "Humidity ratio [gr/lb]",
        }
    }
}

/// Fully resolved thermodynamic state of a moist-air sample.
///
/// A value record: every solve produces a fresh one, nothing is mutated in
/// place. Humidity ratio is carried in both grains and pounds per pound of
/// dry air, with `humidity_ratio_lb == humidity_ratio_grains / 7000` exact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatePoint {
    pub dry_bulb_f: DegF,
    pub wet_bulb_f: DegF,
    pub dew_point_f: DegF,
    /// Relative humidity [%], clamped to [0, 100].
    pub relative_humidity: f64,
    pub humidity_ratio_grains: GrainsPerLb,
    pub humidity_ratio_lb: LbPerLb,
    pub enthalpy_btu_per_lb: BtuPerLb,
    pub specific_volume_ft3_per_lb: Ft3PerLb,
    pub vapor_pressure_psia: Psia,
    pub saturation_pressure_psia: Psia,
}

impl StatePoint {
    /// Assemble a state, deriving the dual-unit humidity ratio from grains so
    /// the grains/pounds pair stays exactly consistent.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn assemble(
        dry_bulb_f: DegF,
        wet_bulb_f: DegF,
        dew_point_f: DegF,
        relative_humidity: f64,
        humidity_ratio_grains: GrainsPerLb,
        enthalpy_btu_per_lb: BtuPerLb,
        specific_volume_ft3_per_lb: Ft3PerLb,
        vapor_pressure_psia: Psia,
        saturation_pressure_psia: Psia,
    ) -> Self {
        Self {
            dry_bulb_f,
            wet_bulb_f,
            dew_point_f,
            relative_humidity: relative_humidity.clamp(0.0, 100.0),
            humidity_ratio_grains,
            humidity_ratio_lb: lb_from_grains(humidity_ratio_grains),
            enthalpy_btu_per_lb,
            specific_volume_ft3_per_lb,
            vapor_pressure_psia,
            saturation_pressure_psia,
        }
    }
}
