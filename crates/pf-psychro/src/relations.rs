//! Closed-form moist-air relations (ASHRAE Handbook, Fundamentals volume).
//!
//! Every function here is exact and non-iterative; the iterative inversions
//! live in [`crate::solve`]. Pressures are psia, temperatures °F, humidity
//! ratios lb water per lb dry air unless a name says otherwise.

use crate::saturation::SaturationModel;
use pf_core::units::constants::{
    CP_AIR_BTU_PER_LB_F, CP_VAPOR_BTU_PER_LB_F, HG_0F_BTU_PER_LB, MW_RATIO,
};
use pf_core::units::{BtuPerLb, DegF, Ft3PerLb, LbPerLb, Psia, rankine};

/// Humidity ratio from water vapor partial pressure: W = 0.621945·pw/(p - pw).
pub fn humidity_ratio_from_vapor_pressure(pw: Psia, p: Psia) -> LbPerLb {
    MW_RATIO * pw / (p - pw)
}

/// Vapor partial pressure from humidity ratio: pw = W·p/(0.621945 + W).
///
/// Exact algebraic inverse of [`humidity_ratio_from_vapor_pressure`]; the
/// round trip is lossless to floating precision.
pub fn vapor_pressure_from_humidity_ratio(w: LbPerLb, p: Psia) -> Psia {
    w * p / (MW_RATIO + w)
}

/// Relative humidity [%] from the vapor/saturation pressure pair.
pub fn relative_humidity_from_pressures(pw: Psia, pws: Psia) -> f64 {
    100.0 * pw / pws
}

/// Specific enthalpy of moist air [Btu/lb dry air].
pub fn enthalpy(tdb: DegF, w: LbPerLb) -> BtuPerLb {
    CP_AIR_BTU_PER_LB_F * tdb + w * (HG_0F_BTU_PER_LB + CP_VAPOR_BTU_PER_LB_F * tdb)
}

/// Dry bulb recovered from enthalpy and humidity ratio.
///
/// Algebraic inverse of [`enthalpy`]; used by the mixing engine to place the
/// conserved (h, W) pair back onto the temperature axis.
pub fn dry_bulb_from_enthalpy(h: BtuPerLb, w: LbPerLb) -> DegF {
    (h - HG_0F_BTU_PER_LB * w) / (CP_AIR_BTU_PER_LB_F + CP_VAPOR_BTU_PER_LB_F * w)
}

/// Specific volume of moist air [ft³/lb dry air].
pub fn specific_volume(tdb: DegF, w: LbPerLb, p: Psia) -> Ft3PerLb {
    0.370486 * rankine(tdb) * (1.0 + 1.6078 * w) / p
}

/// Humidity ratio from the psychrometric wet-bulb relation.
///
/// `ws_wb` is the saturation humidity ratio evaluated at the wet bulb. The
/// result can go negative for dry air with a low wet-bulb reading; callers
/// clamp as required.
pub fn humidity_ratio_from_wet_bulb(tdb: DegF, twb: DegF, ws_wb: LbPerLb) -> LbPerLb {
    ((2830.0 - 0.24 * twb) * ws_wb - 0.556 * (tdb - twb)) / (2830.0 + 0.444 * tdb - twb)
}

/// Saturation humidity ratio at a temperature: W at 100 % RH.
pub fn saturation_humidity_ratio(model: &dyn SaturationModel, temp_f: DegF, p: Psia) -> LbPerLb {
    humidity_ratio_from_vapor_pressure(model.saturation_pressure_psia(temp_f), p)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn vapor_pressure_round_trip(w in 0.0_f64..0.20, p in 10.0_f64..16.0) {
            let pw = vapor_pressure_from_humidity_ratio(w, p);
            let back = humidity_ratio_from_vapor_pressure(pw, p);
            let err = (back - w).abs();
            prop_assert!(err <= 1e-9 * w.max(1e-12), "w = {w}, back = {back}");
        }

        #[test]
        fn enthalpy_round_trip(tdb in -40.0_f64..150.0, w in 0.0_f64..0.05) {
            let h = enthalpy(tdb, w);
            let back = dry_bulb_from_enthalpy(h, w);
            prop_assert!((back - tdb).abs() < 1e-8);
        }
    }
}
