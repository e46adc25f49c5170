//! Adiabatic mixing of two airstreams.

use crate::error::{PsychroError, PsychroResult};
use crate::relations::dry_bulb_from_enthalpy;
use crate::saturation::SaturationModel;
use crate::solve::solve_state;
use crate::state::{InputMode, StatePoint};
use pf_core::numeric::require_finite;
use pf_core::units::{Cfm, Psia, grains_from_lb};
use serde::{Deserialize, Serialize};

/// One airstream entering the mixing box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirStream {
    pub state: StatePoint,
    pub cfm: Cfm,
}

/// Result of mixing two airstreams.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MixingResult {
    /// Mixed condition, recomputed through the state solver (never
    /// interpolated from the inlet states).
    pub mixed: StatePoint,
    pub total_cfm: Cfm,
    /// Mass-flow fraction of stream A; sums with `mass_fraction_b` to 1.
    pub mass_fraction_a: f64,
    /// Mass-flow fraction of stream B.
    pub mass_fraction_b: f64,
}

/// Mix two airstreams adiabatically.
///
/// Humidity ratio and enthalpy are conserved quantities and mix as exact
/// mass-weighted averages. The mixed dry bulb falls out of the enthalpy
/// relation algebraically, and the rest of the mixed state is resolved from
/// scratch in [`InputMode::DbW`]; wet bulb, RH, and dew point are nonlinear
/// in (Tdb, W) and would drift if averaged directly.
pub fn mix_streams(
    model: &dyn SaturationModel,
    stream_a: &AirStream,
    stream_b: &AirStream,
    pressure_psia: Psia,
) -> PsychroResult<MixingResult> {
    require_finite(stream_a.cfm, "stream A CFM")?;
    require_finite(stream_b.cfm, "stream B CFM")?;

    let total_cfm = stream_a.cfm + stream_b.cfm;
    if total_cfm == 0.0 {
        return Err(PsychroError::ZeroFlow);
    }

    // Volumetric to mass flow [lb/min] via each stream's specific volume.
    let mass_a = stream_a.cfm / stream_a.state.specific_volume_ft3_per_lb;
    let mass_b = stream_b.cfm / stream_b.state.specific_volume_ft3_per_lb;
    let mass_total = mass_a + mass_b;

    let mass_fraction_a = mass_a / mass_total;
    let mass_fraction_b = 1.0 - mass_fraction_a;

    let w_mixed = mass_fraction_a * stream_a.state.humidity_ratio_lb
        + mass_fraction_b * stream_b.state.humidity_ratio_lb;
    let h_mixed = mass_fraction_a * stream_a.state.enthalpy_btu_per_lb
        + mass_fraction_b * stream_b.state.enthalpy_btu_per_lb;

    let tdb_mixed = dry_bulb_from_enthalpy(h_mixed, w_mixed);
    let mixed = solve_state(
        model,
        InputMode::DbW,
        tdb_mixed,
        grains_from_lb(w_mixed),
        pressure_psia,
    )?;

    Ok(MixingResult {
        mixed,
        total_cfm,
        mass_fraction_a,
        mass_fraction_b,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::saturation::AshraeSaturation;
    use pf_core::numeric::within_tolerance;

    const P: f64 = 14.696;

    fn stream(tdb: f64, twb: f64, cfm: f64) -> AirStream {
        let model = AshraeSaturation;
        AirStream {
            state: solve_state(&model, InputMode::DbWb, tdb, twb, P).unwrap(),
            cfm,
        }
    }

    #[test]
    fn mixes_return_and_outdoor_air() {
        let model = AshraeSaturation;
        let ra = stream(75.0, 62.0, 1000.0);
        let oa = stream(95.0, 78.0, 500.0);

        let result = mix_streams(&model, &ra, &oa, P).unwrap();
        assert_eq!(result.total_cfm, 1500.0);
        assert!((result.mass_fraction_a - 0.67759).abs() < 1e-4);
        assert!((result.mixed.dry_bulb_f - 81.513).abs() < 0.005);
        assert!((result.mixed.humidity_ratio_grains - 83.879).abs() < 0.05);
        assert!((result.mixed.enthalpy_btu_per_lb - 32.710).abs() < 0.005);
        assert!((result.mixed.relative_humidity - 52.12).abs() < 0.05);
    }

    #[test]
    fn mass_fractions_sum_to_one_exactly() {
        let model = AshraeSaturation;
        let a = stream(75.0, 62.0, 731.0);
        let b = stream(95.0, 78.0, 269.0);
        let result = mix_streams(&model, &a, &b, P).unwrap();
        assert_eq!(result.mass_fraction_a + result.mass_fraction_b, 1.0);
    }

    #[test]
    fn conserved_quantities_are_mass_weighted() {
        let model = AshraeSaturation;
        let a = stream(75.0, 62.0, 1000.0);
        let b = stream(95.0, 78.0, 500.0);
        let result = mix_streams(&model, &a, &b, P).unwrap();

        let expected_w = result.mass_fraction_a * a.state.humidity_ratio_lb
            + result.mass_fraction_b * b.state.humidity_ratio_lb;
        let expected_h = result.mass_fraction_a * a.state.enthalpy_btu_per_lb
            + result.mass_fraction_b * b.state.enthalpy_btu_per_lb;

        assert!(within_tolerance(
            result.mixed.humidity_ratio_lb,
            expected_w,
            1e-12,
            1e-15
        ));
        assert!(within_tolerance(
            result.mixed.enthalpy_btu_per_lb,
            expected_h,
            1e-12,
            1e-15
        ));
    }

    #[test]
    fn order_independent_after_swapping_fractions() {
        let model = AshraeSaturation;
        let a = stream(75.0, 62.0, 1000.0);
        let b = stream(95.0, 78.0, 500.0);

        let ab = mix_streams(&model, &a, &b, P).unwrap();
        let ba = mix_streams(&model, &b, &a, P).unwrap();

        assert!((ab.mass_fraction_a - ba.mass_fraction_b).abs() < 1e-12);
        assert!((ab.mixed.dry_bulb_f - ba.mixed.dry_bulb_f).abs() < 1e-9);
        assert!((ab.mixed.humidity_ratio_grains - ba.mixed.humidity_ratio_grains).abs() < 1e-9);
    }

    #[test]
    fn zero_total_flow_is_rejected() {
        let model = AshraeSaturation;
        let a = stream(75.0, 62.0, 0.0);
        let b = stream(95.0, 78.0, 0.0);
        let err = mix_streams(&model, &a, &b, P).unwrap_err();
        assert_eq!(err, PsychroError::ZeroFlow);
    }

    #[test]
    fn single_live_stream_passes_through() {
        let model = AshraeSaturation;
        let a = stream(75.0, 62.0, 1200.0);
        let b = stream(95.0, 78.0, 0.0);
        let result = mix_streams(&model, &a, &b, P).unwrap();
        assert_eq!(result.mass_fraction_a, 1.0);
        assert_eq!(result.mass_fraction_b, 0.0);
        assert!((result.mixed.dry_bulb_f - 75.0).abs() < 1e-9);
        assert!((result.mixed.humidity_ratio_grains - a.state.humidity_ratio_grains).abs() < 1e-9);
    }
}
