//! Properties of pure water and vapor along the saturation line.
//!
//! These correlations depend on temperature only. When evaluated through
//! [`Seawater`](super::Seawater) any salinity is ignored and never checked.

use crate::support::series::Series;

use super::{
    Correlation, DEFAULT_SALINITY, Domain, PropertyResult, Reference, ValidRange, brine::strict,
};

/// Saturated water vapor dynamic viscosity, kg/(m·s).
///
/// Valid for 10–180 °C.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SatVaporViscosity;

impl Correlation for SatVaporViscosity {
    const NAME: &'static str = "saturated vapor viscosity";
    const UNIT: &'static str = "kg/(m·s)";
    const DOMAIN: Domain = Domain::new(Some(ValidRange::new(10.0, 180.0)), None);
    const REFERENCE: Reference = Reference::el_dessouky_ettouney(554);
    const USES_SALINITY: bool = false;

    #[allow(clippy::unreadable_literal)]
    fn at(temperature: f64, _salinity: f64) -> f64 {
        let t = temperature;
        let denominator = -227.0446083 - 0.896081232 * t - 0.002291383 * t * t;
        (-3.609417664 + 275.928958 / denominator).exp() * 1e-3
    }
}

/// Saturated water vapor specific volume, m³/kg.
///
/// The source documents no temperature range, so none is checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpecificVolume;

impl Correlation for SpecificVolume {
    const NAME: &'static str = "specific volume";
    const UNIT: &'static str = "m³/kg";
    const DOMAIN: Domain = Domain::new(None, None);
    const REFERENCE: Reference = Reference::el_dessouky_ettouney(548);
    const USES_SALINITY: bool = false;

    #[allow(clippy::unreadable_literal)]
    fn at(temperature: f64, _salinity: f64) -> f64 {
        let tk = temperature + 273.15;

        // The published form uses 273.14 in the leading factor.
        let leading = 0.003172222 * (647.286 / (273.14 + temperature) - 1.0);
        let exponent = 83.63213098 - 0.668265339 * tk + 0.002495964 * tk.powi(2)
            - 5.04185e-6 * tk.powi(3)
            + 5.34205e-9 * tk.powi(4)
            - 2.3279e-12 * tk.powi(5);

        leading * exponent.exp()
    }
}

/// Saturated liquid water enthalpy, kJ/kg.
///
/// Valid for 5–200 °C.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SatLiquidEnthalpy;

impl Correlation for SatLiquidEnthalpy {
    const NAME: &'static str = "saturated liquid enthalpy";
    const UNIT: &'static str = "kJ/kg";
    const DOMAIN: Domain = Domain::new(Some(ValidRange::new(5.0, 200.0)), None);
    const REFERENCE: Reference = Reference::el_dessouky_ettouney(538);
    const USES_SALINITY: bool = false;

    #[allow(clippy::unreadable_literal)]
    fn at(temperature: f64, _salinity: f64) -> f64 {
        let t = temperature;
        -0.033635409 + 4.207557011 * t - 6.200339e-4 * t * t + 4.459374e-6 * t.powi(3)
    }
}

/// Saturated water vapor enthalpy, kJ/kg.
///
/// Valid for 0.01–200 °C. Defaults to the triple point, 0.01 °C.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SatVaporEnthalpy;

impl Correlation for SatVaporEnthalpy {
    const NAME: &'static str = "saturated vapor enthalpy";
    const UNIT: &'static str = "kJ/kg";
    const DOMAIN: Domain = Domain::new(Some(ValidRange::new(0.01, 200.0)), None);
    const REFERENCE: Reference = Reference::el_dessouky_ettouney(536);
    const USES_SALINITY: bool = false;
    const DEFAULT_TEMPERATURE: f64 = 0.01;

    #[allow(clippy::unreadable_literal)]
    fn at(temperature: f64, _salinity: f64) -> f64 {
        let t = temperature;
        (2501689.845 + 1806.916015 * t + 0.5087717 * t * t - 0.011221 * t.powi(3)) / 1000.0
    }
}

/// Latent heat of evaporation of water, kJ/kg.
///
/// Valid for 5–200 °C.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LatentHeat;

impl Correlation for LatentHeat {
    const NAME: &'static str = "latent heat";
    const UNIT: &'static str = "kJ/kg";
    const DOMAIN: Domain = Domain::new(Some(ValidRange::new(5.0, 200.0)), None);
    const REFERENCE: Reference = Reference::el_dessouky_ettouney(538);
    const USES_SALINITY: bool = false;

    #[allow(clippy::unreadable_literal)]
    fn at(temperature: f64, _salinity: f64) -> f64 {
        let t = temperature;
        2501.897149 - 2.407064037 * t + 1.192217e-3 * t * t - 1.5863e-5 * t.powi(3)
    }
}

/// Saturated vapor dynamic viscosity, kg/(m·s), at temperature (°C).
///
/// # Errors
///
/// Fails if a temperature is outside 10–180 °C.
pub fn sat_vapor_viscosity(temperature: impl Into<Series>) -> PropertyResult<Vec<f64>> {
    strict::<SatVaporViscosity>(temperature, DEFAULT_SALINITY)
}

/// Saturated vapor specific volume, m³/kg, at temperature (°C).
///
/// # Errors
///
/// Never fails in practice; the signature matches the other correlations.
pub fn specific_volume(temperature: impl Into<Series>) -> PropertyResult<Vec<f64>> {
    strict::<SpecificVolume>(temperature, DEFAULT_SALINITY)
}

/// Saturated liquid enthalpy, kJ/kg, at temperature (°C).
///
/// # Errors
///
/// Fails if a temperature is outside 5–200 °C.
pub fn sat_liquid_enthalpy(temperature: impl Into<Series>) -> PropertyResult<Vec<f64>> {
    strict::<SatLiquidEnthalpy>(temperature, DEFAULT_SALINITY)
}

/// Saturated vapor enthalpy, kJ/kg, at temperature (°C).
///
/// # Errors
///
/// Fails if a temperature is outside 0.01–200 °C.
pub fn sat_vapor_enthalpy(temperature: impl Into<Series>) -> PropertyResult<Vec<f64>> {
    strict::<SatVaporEnthalpy>(temperature, DEFAULT_SALINITY)
}

/// Latent heat of evaporation, kJ/kg, at temperature (°C).
///
/// # Errors
///
/// Fails if a temperature is outside 5–200 °C.
pub fn latent_heat(temperature: impl Into<Series>) -> PropertyResult<Vec<f64>> {
    strict::<LatentHeat>(temperature, DEFAULT_SALINITY)
}
