//! Reference-value integration tests.
//!
//! These verify the engine against ASHRAE psychrometric chart values with
//! realistic scenarios. Banded tolerances guard against correlation drift
//! while still pinning physical plausibility.

use pf_psychro::{AshraeSaturation, InputMode, atmospheric_conditions, solve_state};

const SEA_LEVEL_PSIA: f64 = 14.696;

#[test]
fn comfort_point_75_db_62_wb() {
    let model = AshraeSaturation;
    let state = solve_state(&model, InputMode::DbWb, 75.0, 62.0, SEA_LEVEL_PSIA).unwrap();

    // ASHRAE chart bands for this point.
    assert!(
        state.relative_humidity > 45.0 && state.relative_humidity < 52.0,
        "rh = {}",
        state.relative_humidity
    );
    assert!(
        state.humidity_ratio_grains > 60.0 && state.humidity_ratio_grains < 75.0,
        "W = {} gr/lb",
        state.humidity_ratio_grains
    );
    assert!(
        state.enthalpy_btu_per_lb > 27.0 && state.enthalpy_btu_per_lb < 30.0,
        "h = {}",
        state.enthalpy_btu_per_lb
    );
    // Chart readings: RH ≈ 50.6 %, W ≈ 65.4 gr/lb, h ≈ 28.2 Btu/lb.
    assert!((state.relative_humidity - 50.6).abs() < 0.2);
    assert!((state.humidity_ratio_grains - 65.4).abs() < 0.2);
    assert!((state.enthalpy_btu_per_lb - 28.23).abs() < 0.05);
}

#[test]
fn saturation_boundary_at_100_percent_rh() {
    let model = AshraeSaturation;
    let state = solve_state(&model, InputMode::DbRh, 75.0, 100.0, SEA_LEVEL_PSIA).unwrap();

    // Dew point equals dry bulb at saturation.
    assert!(
        (state.dew_point_f - 75.0).abs() < 0.05,
        "dew point = {}",
        state.dew_point_f
    );
    // The damped wet-bulb iteration approaches the dry bulb from below but
    // its fixed gain leaves it shy of the root at the iteration cap.
    assert!(state.wet_bulb_f <= 75.0);
    assert!(
        75.0 - state.wet_bulb_f < 1.0,
        "wet bulb = {}",
        state.wet_bulb_f
    );
    assert_eq!(state.relative_humidity, 100.0);
    assert_eq!(state.vapor_pressure_psia, state.saturation_pressure_psia);
}

#[test]
fn over_range_rh_is_reported_clamped() {
    let model = AshraeSaturation;
    let state = solve_state(&model, InputMode::DbRh, 75.0, 150.0, SEA_LEVEL_PSIA).unwrap();
    assert_eq!(state.relative_humidity, 100.0);
    // The underlying vapor pressure is allowed to exceed saturation; only
    // the reported RH is clamped.
    assert!(state.vapor_pressure_psia > state.saturation_pressure_psia);
}

#[test]
fn all_four_modes_describe_the_same_air() {
    let model = AshraeSaturation;
    let base = solve_state(&model, InputMode::DbWb, 75.0, 62.0, SEA_LEVEL_PSIA).unwrap();

    let from_rh = solve_state(
        &model,
        InputMode::DbRh,
        75.0,
        base.relative_humidity,
        SEA_LEVEL_PSIA,
    )
    .unwrap();
    let from_dp = solve_state(
        &model,
        InputMode::DbDp,
        75.0,
        base.dew_point_f,
        SEA_LEVEL_PSIA,
    )
    .unwrap();
    let from_w = solve_state(
        &model,
        InputMode::DbW,
        75.0,
        base.humidity_ratio_grains,
        SEA_LEVEL_PSIA,
    )
    .unwrap();

    for other in [&from_rh, &from_dp, &from_w] {
        assert!(
            (other.humidity_ratio_grains - base.humidity_ratio_grains).abs() < 0.2,
            "W = {} vs {}",
            other.humidity_ratio_grains,
            base.humidity_ratio_grains
        );
        assert!((other.enthalpy_btu_per_lb - base.enthalpy_btu_per_lb).abs() < 0.05);
        assert!((other.relative_humidity - base.relative_humidity).abs() < 0.2);
    }
}

#[test]
fn altitude_raises_humidity_ratio_at_fixed_rh() {
    let model = AshraeSaturation;
    let sea = solve_state(&model, InputMode::DbRh, 75.0, 50.0, SEA_LEVEL_PSIA).unwrap();

    let denver = atmospheric_conditions(5280.0);
    let high = solve_state(&model, InputMode::DbRh, 75.0, 50.0, denver.pressure_psia).unwrap();

    // Same RH holds less dry air per pound at altitude, so W rises.
    assert!(high.humidity_ratio_grains > sea.humidity_ratio_grains);
    // And the saturation pressure is a property of temperature alone.
    assert_eq!(high.saturation_pressure_psia, sea.saturation_pressure_psia);
}

#[test]
fn freezing_conditions_stay_physical() {
    let model = AshraeSaturation;
    let state = solve_state(&model, InputMode::DbRh, 20.0, 60.0, SEA_LEVEL_PSIA).unwrap();
    assert!(state.humidity_ratio_grains > 0.0);
    assert!(state.dew_point_f < 20.0);
    assert!(state.wet_bulb_f < 20.0);
    assert!(state.specific_volume_ft3_per_lb > 11.0 && state.specific_volume_ft3_per_lb < 13.0);
}
