//! Liquid-phase seawater properties that depend on temperature and salinity.

use crate::support::series::Series;

use super::{Conditions, Correlation, Domain, PropertyResult, Reference, Seawater, ValidRange};

/// Seawater density, kg/m³.
///
/// Valid for 10–180 °C and 0–16 wt%.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Density;

impl Correlation for Density {
    const NAME: &'static str = "density";
    const UNIT: &'static str = "kg/m³";
    const DOMAIN: Domain = Domain::new(
        Some(ValidRange::new(10.0, 180.0)),
        Some(ValidRange::new(0.0, 16.0)),
    );
    const REFERENCE: Reference = Reference::el_dessouky_ettouney(526);

    #[allow(clippy::unreadable_literal)]
    fn at(temperature: f64, salinity: f64) -> f64 {
        // Chebyshev expansion in reduced salinity (0–150 g/kg) and temperature.
        let s = (2.0 * salinity * 10.0 - 150.0) / 150.0;
        let t = (2.0 * temperature - 200.0) / 160.0;
        let s2 = 2.0 * s * s - 1.0;

        let a1 = 4.032219 * 0.5 + 0.115313 * s + 3.26e-4 * s2;
        let a2 = -0.108199 * 0.5 + 1.571e-3 * s - 4.23e-4 * s2;
        let a3 = -0.012247 * 0.5 + 1.74e-3 * s - 9e-6 * s2;
        let a4 = 6.92e-4 * 0.5 - 8.7e-5 * s - 5.3e-5 * s2;

        1e3 * (a1 * 0.5
            + a2 * t
            + a3 * (2.0 * t * t - 1.0)
            + a4 * (4.0 * t.powi(3) - 3.0 * t))
    }
}

/// Seawater specific heat at constant pressure, J/(kg·°C).
///
/// Valid for 20–180 °C and 2–16 wt%.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpecificHeat;

impl Correlation for SpecificHeat {
    const NAME: &'static str = "specific heat";
    const UNIT: &'static str = "J/(kg·°C)";
    const DOMAIN: Domain = Domain::new(
        Some(ValidRange::new(20.0, 180.0)),
        Some(ValidRange::new(2.0, 16.0)),
    );
    const REFERENCE: Reference = Reference::el_dessouky_ettouney(528);

    #[allow(clippy::unreadable_literal)]
    fn at(temperature: f64, salinity: f64) -> f64 {
        // Coefficients are fitted against salinity in ppm.
        let x = salinity * 10_000.0;
        let t = temperature;

        let a = 4206.8 - 6.6197e-3 * x + 1.2288e-8 * x * x;
        let b = -1.1262 + 5.4178e-5 * x - 2.2719e-10 * x * x;
        let c = 1.2026e-2 - 5.3566e-7 * x + 1.8906e-12 * x * x;
        let d = 6.8777e-7 + 1.517e-9 * x - 4.4268e-15 * x * x;

        a + b * t + c * t * t + d * t.powi(3)
    }
}

/// Seawater dynamic viscosity, kg/(m·s).
///
/// Valid for 10–180 °C and 0–13 wt% (0–130 g/kg).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DynamicViscosity;

impl Correlation for DynamicViscosity {
    const NAME: &'static str = "dynamic viscosity";
    const UNIT: &'static str = "kg/(m·s)";
    const DOMAIN: Domain = Domain::new(
        Some(ValidRange::new(10.0, 180.0)),
        Some(ValidRange::new(0.0, 13.0)),
    );
    const REFERENCE: Reference = Reference::el_dessouky_ettouney(530);

    #[allow(clippy::unreadable_literal)]
    fn at(temperature: f64, salinity: f64) -> f64 {
        let s = salinity * 10.0;
        let t = temperature;

        let pure = (-3.79418 + 604.129 / (139.18 + t)).exp();
        let a = 1.474e-3 + 1.5e-5 * t - 3.927e-8 * t * t;
        let b = 1.0734e-5 - 8.5e-8 * t + 2.23e-10 * t * t;

        pure * (1.0 + a * s + b * s * s) * 1e-3
    }
}

/// Seawater thermal conductivity, W/(m·°C).
///
/// Valid for 20–180 °C and 0–16 wt% (0–160 g/kg).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThermalConductivity;

impl Correlation for ThermalConductivity {
    const NAME: &'static str = "thermal conductivity";
    const UNIT: &'static str = "W/(m·°C)";
    const DOMAIN: Domain = Domain::new(
        Some(ValidRange::new(20.0, 180.0)),
        Some(ValidRange::new(0.0, 16.0)),
    );
    const REFERENCE: Reference = Reference::el_dessouky_ettouney(532);

    fn at(temperature: f64, salinity: f64) -> f64 {
        let s = salinity * 10.0;
        let tk = temperature + 273.15;

        let exponent = (240.0 + 2e-4 * s).log10()
            + 0.434
                * (2.3 - (343.5 + 0.037 * s) / tk)
                * (1.0 - tk / (647.3 + 0.03 * s)).powf(1.0 / 3.0);

        10f64.powf(exponent) / 1000.0
    }
}

/// Seawater surface tension against air, mN/m.
///
/// Valid for 0–90 °C and 0–12.1 wt% (0–121 g/kg).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurfaceTension;

impl Correlation for SurfaceTension {
    const NAME: &'static str = "surface tension";
    const UNIT: &'static str = "mN/m";
    const DOMAIN: Domain = Domain::new(
        Some(ValidRange::new(0.0, 90.0)),
        Some(ValidRange::new(0.0, 12.1)),
    );
    const REFERENCE: Reference = Reference::NAYAR_2014;

    fn at(temperature: f64, salinity: f64) -> f64 {
        let s = salinity * 10.0;
        let tau = 1.0 - (temperature + 273.15) / 647.096;

        // IAPWS pure-water surface tension, scaled by a salinity factor.
        let pure = 235.8 * tau.powf(1.256) * (1.0 - 0.625 * tau);
        pure * (1.0 + 3.766e-4 * s + 2.347e-6 * s * temperature)
    }
}

/// Seawater density, kg/m³, at temperature (°C) and salinity (wt%).
///
/// # Errors
///
/// Fails on out-of-range input or unbroadcastable series.
pub fn density(
    temperature: impl Into<Series>,
    salinity: impl Into<Series>,
) -> PropertyResult<Vec<f64>> {
    strict::<Density>(temperature, salinity)
}

/// Seawater specific heat, J/(kg·°C), at temperature (°C) and salinity (wt%).
///
/// # Errors
///
/// Fails on out-of-range input or unbroadcastable series.
pub fn specific_heat(
    temperature: impl Into<Series>,
    salinity: impl Into<Series>,
) -> PropertyResult<Vec<f64>> {
    strict::<SpecificHeat>(temperature, salinity)
}

/// Seawater dynamic viscosity, kg/(m·s), at temperature (°C) and salinity (wt%).
///
/// # Errors
///
/// Fails on out-of-range input or unbroadcastable series.
pub fn dynamic_viscosity(
    temperature: impl Into<Series>,
    salinity: impl Into<Series>,
) -> PropertyResult<Vec<f64>> {
    strict::<DynamicViscosity>(temperature, salinity)
}

/// Seawater thermal conductivity, W/(m·°C), at temperature (°C) and salinity (wt%).
///
/// # Errors
///
/// Fails on out-of-range input or unbroadcastable series.
pub fn thermal_conductivity(
    temperature: impl Into<Series>,
    salinity: impl Into<Series>,
) -> PropertyResult<Vec<f64>> {
    strict::<ThermalConductivity>(temperature, salinity)
}

/// Seawater surface tension, mN/m, at temperature (°C) and salinity (wt%).
///
/// # Errors
///
/// Fails on out-of-range input or unbroadcastable series.
pub fn surface_tension(
    temperature: impl Into<Series>,
    salinity: impl Into<Series>,
) -> PropertyResult<Vec<f64>> {
    strict::<SurfaceTension>(temperature, salinity)
}

pub(super) fn strict<C: Correlation>(
    temperature: impl Into<Series>,
    salinity: impl Into<Series>,
) -> PropertyResult<Vec<f64>> {
    Seawater::default().evaluate::<C>(&Conditions::new(temperature).with_salinity(salinity))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::seawater::PropertyError;

    #[test]
    fn density_reference_values() -> PropertyResult<()> {
        assert_relative_eq!(density(25.0, 0.0)?[0], 997.0, max_relative = 1e-4);
        assert_relative_eq!(density(60.0, 3.5)?[0], 1008.551, max_relative = 1e-6);
        Ok(())
    }

    #[test]
    fn density_increases_with_salinity() -> PropertyResult<()> {
        let rho = density(40.0, vec![0.0, 4.0, 8.0, 12.0])?;
        assert!(rho.windows(2).all(|pair| pair[1] > pair[0]));
        Ok(())
    }

    #[test]
    fn specific_heat_reference_values() -> PropertyResult<()> {
        assert_relative_eq!(specific_heat(25.0, 3.5)?[0], 4000.458, max_relative = 1e-6);
        assert_relative_eq!(SpecificHeat::at(25.0, 0.0), 4186.172, max_relative = 1e-6);
        Ok(())
    }

    #[test]
    fn specific_heat_rejects_fresh_water() {
        assert!(matches!(
            specific_heat(25.0, 0.0),
            Err(PropertyError::SalinityOutOfRange { .. })
        ));
    }

    #[test]
    fn viscosity_reference_values() -> PropertyResult<()> {
        assert_relative_eq!(
            dynamic_viscosity(25.0, 0.0)?[0],
            8.918_073e-4,
            max_relative = 1e-6
        );
        assert_relative_eq!(
            dynamic_viscosity(60.0, 3.5)?[0],
            5.073_403e-4,
            max_relative = 1e-6
        );
        Ok(())
    }

    #[test]
    fn conductivity_reference_values() -> PropertyResult<()> {
        assert_relative_eq!(thermal_conductivity(25.0, 0.0)?[0], 0.607, max_relative = 1e-2);
        assert_relative_eq!(
            thermal_conductivity(25.0, 0.0)?[0],
            0.610_584,
            max_relative = 1e-6
        );
        assert_relative_eq!(
            thermal_conductivity(60.0, 3.5)?[0],
            0.648_530,
            max_relative = 1e-6
        );
        Ok(())
    }

    #[test]
    fn surface_tension_reference_values() -> PropertyResult<()> {
        assert_relative_eq!(surface_tension(25.0, 0.0)?[0], 71.972, max_relative = 1e-5);
        assert_relative_eq!(surface_tension(25.0, 3.5)?[0], 73.069, max_relative = 1e-5);
        Ok(())
    }

    #[test]
    fn vector_matches_scalar_evaluation() -> PropertyResult<()> {
        let temperatures = [20.0, 55.0, 90.0, 140.0];

        let vector = dynamic_viscosity(temperatures, 5.0)?;
        assert_eq!(vector.len(), temperatures.len());

        for (t, value) in temperatures.iter().zip(&vector) {
            assert_eq!(dynamic_viscosity(*t, 5.0)?, vec![*value]);
        }
        Ok(())
    }

    #[test]
    fn equal_length_vectors_pair_up() -> PropertyResult<()> {
        let rho = density([30.0, 60.0], [1.0, 7.0])?;
        assert_eq!(rho, vec![Density::at(30.0, 1.0), Density::at(60.0, 7.0)]);
        Ok(())
    }

    #[test]
    fn domains_are_exposed() {
        assert_eq!(
            DynamicViscosity::DOMAIN.salinity,
            Some(ValidRange::new(0.0, 13.0))
        );
        assert_eq!(SurfaceTension::REFERENCE.page, None);
        assert_eq!(Density::UNIT, "kg/m³");
    }
}
