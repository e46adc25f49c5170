//! Standard-atmosphere barometric pressure.

use pf_core::units::constants::{R_AIR_FT_LBF_PER_LB_R, STD_ATM_PSIA};
use pf_core::units::{InHg, Psia, in_hg_from_psia};
use serde::{Deserialize, Serialize};

/// Reference temperature for the standard air density, 70 °F in °R.
const DENSITY_REF_TEMP_R: f64 = 530.0;

/// Atmospheric conditions at a site altitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmosphericConditions {
    pub altitude_ft: f64,
    pub pressure_psia: Psia,
    pub pressure_in_hg: InHg,
    /// Dry-air density at the site pressure and a fixed 70 °F reference
    /// temperature [lb/ft³]. Not corrected for the site's actual temperature.
    pub std_air_density_lb_ft3: f64,
}

/// Barometric pressure [psia] at an altitude [ft].
///
/// ASHRAE standard-atmosphere correlation, valid through the troposphere.
pub fn pressure_at_altitude_psia(altitude_ft: f64) -> Psia {
    STD_ATM_PSIA * (1.0 - 6.8754e-6 * altitude_ft).powf(5.2559)
}

/// Atmospheric conditions at an altitude.
///
/// Density uses the ideal-gas relation ρ = P·144 / (R·T) at a fixed 530 °R
/// (70 °F), independent of the altitude's actual temperature profile.
pub fn atmospheric_conditions(altitude_ft: f64) -> AtmosphericConditions {
    let pressure_psia = pressure_at_altitude_psia(altitude_ft);
    AtmosphericConditions {
        altitude_ft,
        pressure_psia,
        pressure_in_hg: in_hg_from_psia(pressure_psia),
        std_air_density_lb_ft3: pressure_psia * 144.0
            / (R_AIR_FT_LBF_PER_LB_R * DENSITY_REF_TEMP_R),
    }
}
