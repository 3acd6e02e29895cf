//! Vapor-liquid equilibrium of seawater.

use crate::support::series::Series;

use super::{Correlation, Domain, PropertyResult, Reference, ValidRange, brine::strict};

/// Water vapor pressure over seawater, kPa.
///
/// Valid for 0–200 °C and 1–16 wt% (10–160 g/kg). The pure-water saturation
/// pressure is lowered by a Raoult-type activity factor in salinity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VaporPressure;

impl Correlation for VaporPressure {
    const NAME: &'static str = "vapor pressure";
    const UNIT: &'static str = "kPa";
    const DOMAIN: Domain = Domain::new(
        Some(ValidRange::new(0.0, 200.0)),
        Some(ValidRange::new(1.0, 16.0)),
    );
    const REFERENCE: Reference = Reference::WINTER_2011;

    #[allow(clippy::unreadable_literal)]
    fn at(temperature: f64, salinity: f64) -> f64 {
        let tk = temperature + 273.15;
        let theta = 1.0 - tk / 647.25;

        let sum = -7.8889166 * theta + 2.5514255 * theta.powf(1.5) - 6.716169 * theta.powi(2)
            + 33.239495 * theta.powf(2.5)
            - 105.38479 * theta.powi(3)
            + 174.35319 * theta.powf(3.5)
            - 148.39348 * theta.powi(4)
            + 48.631602 * theta.powf(4.5);

        let pure = 100.0 * 220.93 * ((647.25 / tk) * sum).exp();

        let s = 10.0 * salinity;
        pure * (1.0 / (1.0 + 0.57357 * (s / (1000.0 - s))))
    }
}

/// Boiling point elevation of seawater, °C.
///
/// Valid for 10–180 °C and 0–16 wt%.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoilingPointElevation;

impl Correlation for BoilingPointElevation {
    const NAME: &'static str = "boiling point elevation";
    const UNIT: &'static str = "°C";
    const DOMAIN: Domain = Domain::new(
        Some(ValidRange::new(10.0, 180.0)),
        Some(ValidRange::new(0.0, 16.0)),
    );
    const REFERENCE: Reference = Reference::el_dessouky_ettouney(566);

    fn at(temperature: f64, salinity: f64) -> f64 {
        let t = temperature;
        let s = salinity;

        let a = 8.325e-2 + 1.883e-4 * t + 4.02e-6 * t * t;
        let b = -7.625e-4 + 9.02e-5 * t - 5.2e-7 * t * t;
        let c = 1.522e-4 - 3e-6 * t - 3e-8 * t * t;

        a * s + b * s * s + c * s.powi(3)
    }
}

/// Vapor pressure over seawater, kPa, at temperature (°C) and salinity (wt%).
///
/// # Errors
///
/// Fails on out-of-range input or unbroadcastable series.
pub fn vapor_pressure(
    temperature: impl Into<Series>,
    salinity: impl Into<Series>,
) -> PropertyResult<Vec<f64>> {
    strict::<VaporPressure>(temperature, salinity)
}

/// Boiling point elevation, °C, at temperature (°C) and salinity (wt%).
///
/// # Errors
///
/// Fails on out-of-range input or unbroadcastable series.
pub fn boiling_point_elevation(
    temperature: impl Into<Series>,
    salinity: impl Into<Series>,
) -> PropertyResult<Vec<f64>> {
    strict::<BoilingPointElevation>(temperature, salinity)
}
