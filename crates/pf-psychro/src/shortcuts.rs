//! Standard-air shortcut formulas.
//!
//! Constant-coefficient estimates valid for sea-level "standard air"
//! (0.075 lb/ft³, cp 0.24). Field rules of thumb; the full
//! [`crate::process`] path is the accurate route.

use pf_core::units::Cfm;

/// Sensible heat [Btuh] from airflow and temperature difference [°F].
pub fn quick_sensible_heat_btuh(cfm: Cfm, delta_t_f: f64) -> f64 {
    1.08 * cfm * delta_t_f
}

/// Total heat [Btuh] from airflow and enthalpy difference [Btu/lb].
pub fn quick_total_heat_btuh(cfm: Cfm, delta_h_btu_per_lb: f64) -> f64 {
    4.5 * cfm * delta_h_btu_per_lb
}

/// Latent heat [Btuh] from airflow and humidity-ratio difference [grains/lb].
pub fn quick_latent_heat_btuh(cfm: Cfm, delta_w_grains: f64) -> f64 {
    0.68 * cfm * delta_w_grains
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn textbook_values() {
        assert_eq!(quick_sensible_heat_btuh(1000.0, 10.0), 10_800.0);
        assert_eq!(quick_total_heat_btuh(1000.0, 5.0), 22_500.0);
        assert_eq!(quick_latent_heat_btuh(1000.0, 20.0), 13_600.0);
    }

    #[test]
    fn linear_in_both_arguments() {
        assert_eq!(
            quick_sensible_heat_btuh(2000.0, 10.0),
            2.0 * quick_sensible_heat_btuh(1000.0, 10.0)
        );
        assert_eq!(
            quick_latent_heat_btuh(500.0, -20.0),
            -quick_latent_heat_btuh(500.0, 20.0)
        );
    }
}
