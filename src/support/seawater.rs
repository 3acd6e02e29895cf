//! Empirical property correlations for seawater and pure water.
//!
//! Each correlation maps temperature (°C), and where relevant salinity, to
//! one physical property through a fixed closed-form fit. Each is valid only
//! over the range it was fitted on; that range is exposed as
//! [`Correlation::DOMAIN`] and checked according to a [`RangePolicy`].
//!
//! # Entry points
//!
//! | Function                    | Unit       | Salinity | Valid T (°C) | Valid S (wt%) |
//! |-----------------------------|------------|----------|--------------|---------------|
//! | [`density`]                 | kg/m³      | wt%      | 10–180       | 0–16          |
//! | [`specific_heat`]           | J/(kg·°C)  | wt%      | 20–180       | 2–16          |
//! | [`dynamic_viscosity`]       | kg/(m·s)   | wt%      | 10–180       | 0–13          |
//! | [`thermal_conductivity`]    | W/(m·°C)   | wt%      | 20–180       | 0–16          |
//! | [`surface_tension`]         | mN/m       | wt%      | 0–90         | 0–12.1        |
//! | [`vapor_pressure`]          | kPa        | wt%      | 0–200        | 1–16          |
//! | [`boiling_point_elevation`] | °C         | wt%      | 10–180       | 0–16          |
//! | [`sat_vapor_viscosity`]     | kg/(m·s)   | n/a      | 10–180       | n/a           |
//! | [`specific_volume`]         | m³/kg      | n/a      | unchecked    | n/a           |
//! | [`sat_liquid_enthalpy`]     | kJ/kg      | n/a      | 5–200        | n/a           |
//! | [`sat_vapor_enthalpy`]      | kJ/kg      | n/a      | 0.01–200     | n/a           |
//! | [`latent_heat`]             | kJ/kg      | n/a      | 5–200        | n/a           |
//!
//! Several fits were calibrated in g/kg and multiply the weight-percent
//! input by ten internally. That scaling is part of each formula and is not
//! normalized across functions.
//!
//! # Inputs and outputs
//!
//! Temperature and salinity are [`Series`]: a scalar or a vector. They are
//! broadcast against each other (see [`crate::support::series`]) and the
//! result is always a `Vec<f64>` of the broadcast length.
//!
//! The free functions reject out-of-range input. Use [`Seawater`] with a
//! different [`RangePolicy`] to warn or to extrapolate instead:
//!
//! ```
//! use seawater_models::support::seawater::{
//!     self, Conditions, RangePolicy, Seawater, SpecificHeat,
//! };
//!
//! // Fresh water lies below the fitted salinity range of the cp correlation.
//! assert!(seawater::specific_heat(25.0, 0.0).is_err());
//!
//! let lenient = Seawater::new(RangePolicy::Ignore);
//! let cp = lenient
//!     .evaluate::<SpecificHeat>(&Conditions::new(25.0).with_salinity(0.0))
//!     .unwrap();
//! assert!((cp[0] - 4186.2).abs() < 0.1);
//! ```

mod brine;
mod correlation;
mod domain;
mod equilibrium;
mod error;
mod evaluator;
mod saturation;

pub use brine::{
    Density, DynamicViscosity, SpecificHeat, SurfaceTension, ThermalConductivity, density,
    dynamic_viscosity, specific_heat, surface_tension, thermal_conductivity,
};
pub use correlation::{Correlation, Reference};
pub use domain::{Domain, RangePolicy, ValidRange};
pub use equilibrium::{
    BoilingPointElevation, VaporPressure, boiling_point_elevation, vapor_pressure,
};
pub use error::{PropertyError, PropertyResult};
pub use evaluator::Seawater;
pub use saturation::{
    LatentHeat, SatLiquidEnthalpy, SatVaporEnthalpy, SatVaporViscosity, SpecificVolume,
    latent_heat, sat_liquid_enthalpy, sat_vapor_enthalpy, sat_vapor_viscosity, specific_volume,
};

use crate::support::series::Series;

/// Temperature used when none is given, °C.
pub const DEFAULT_TEMPERATURE: f64 = 25.0;

/// Salinity used when none is given (fresh water), wt%.
pub const DEFAULT_SALINITY: f64 = 0.0;

/// The temperature and salinity at which correlations are evaluated.
///
/// Defaults to fresh water at 25 °C.
#[derive(Debug, Clone, PartialEq)]
pub struct Conditions {
    /// Temperature, °C.
    pub temperature: Series,

    /// Salinity, wt%.
    pub salinity: Series,
}

impl Conditions {
    /// Fresh water at the given temperature.
    #[must_use]
    pub fn new(temperature: impl Into<Series>) -> Self {
        Self {
            temperature: temperature.into(),
            salinity: Series::Scalar(DEFAULT_SALINITY),
        }
    }

    /// Replaces the salinity.
    #[must_use]
    pub fn with_salinity(mut self, salinity: impl Into<Series>) -> Self {
        self.salinity = salinity.into();
        self
    }

    /// Fresh water at the default temperature of correlation `C`.
    #[must_use]
    pub fn defaults_for<C: Correlation>() -> Self {
        Self::new(C::DEFAULT_TEMPERATURE)
    }
}

impl Default for Conditions {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPERATURE)
    }
}
