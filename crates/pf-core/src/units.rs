// pf-core/src/units.rs
//
// The engine works entirely in IP units (ASHRAE conventions), none of which
// map onto a standard SI quantity set. Quantities are plain f64 with the unit
// spelled out in the alias name and kept in the field/parameter names of
// downstream crates.

/// Temperature [°F].
pub type DegF = f64;

/// Absolute temperature [°R].
pub type DegR = f64;

/// Pressure [psia].
pub type Psia = f64;

/// Pressure [inches of mercury].
pub type InHg = f64;

/// Humidity ratio [lb water / lb dry air].
pub type LbPerLb = f64;

/// Humidity ratio [grains water / lb dry air].
pub type GrainsPerLb = f64;

/// Specific enthalpy [Btu / lb dry air].
pub type BtuPerLb = f64;

/// Specific volume [ft³ / lb dry air].
pub type Ft3PerLb = f64;

/// Volumetric airflow [ft³ / min].
pub type Cfm = f64;

#[inline]
pub fn rankine(t_f: DegF) -> DegR {
    t_f + constants::RANKINE_OFFSET_F
}

#[inline]
pub fn grains_from_lb(w: LbPerLb) -> GrainsPerLb {
    w * constants::GRAINS_PER_LB
}

#[inline]
pub fn lb_from_grains(grains: GrainsPerLb) -> LbPerLb {
    grains / constants::GRAINS_PER_LB
}

/// Convert psia to inHg by the fixed standard-atmosphere ratio 29.921/14.696.
#[inline]
pub fn in_hg_from_psia(p: Psia) -> InHg {
    p * constants::STD_ATM_IN_HG / constants::STD_ATM_PSIA
}

/// Shared physical constants (ASHRAE Handbook, Fundamentals volume, IP units).
pub mod constants {
    /// Grains of water per pound (exact definition).
    pub const GRAINS_PER_LB: f64 = 7000.0;

    /// Ratio of molecular weights, water vapor to dry air.
    pub const MW_RATIO: f64 = 0.621945;

    /// Specific heat of dry air [Btu/(lb·°F)].
    pub const CP_AIR_BTU_PER_LB_F: f64 = 0.240;

    /// Specific heat of water vapor [Btu/(lb·°F)].
    pub const CP_VAPOR_BTU_PER_LB_F: f64 = 0.444;

    /// Enthalpy of water vapor at 0 °F [Btu/lb].
    pub const HG_0F_BTU_PER_LB: f64 = 1061.0;

    /// Gas constant for dry air [ft·lbf/(lb·°R)].
    pub const R_AIR_FT_LBF_PER_LB_R: f64 = 53.352;

    /// °F to °R offset.
    pub const RANKINE_OFFSET_F: f64 = 459.67;

    /// Standard sea-level atmosphere [psia].
    pub const STD_ATM_PSIA: f64 = 14.696;

    /// Standard sea-level atmosphere [inHg].
    pub const STD_ATM_IN_HG: f64 = 29.921;
}
