use crate::support::{
    constraint::{NonNegative, StrictlyPositive},
    seawater::{
        Conditions, Density, DynamicViscosity, Seawater, SpecificHeat, ThermalConductivity,
    },
    series::Series,
};

use super::{FlowRegime, GeometryError, TransportError, TransportResult};

/// Channel diameter and length entering the turbulent Nusselt correlation.
///
/// Only the ratio `D/L` matters, so any consistent length unit works.
/// Defaults to `D = 1`, `L = 10`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelAspect {
    diameter: f64,
    length: f64,
}

impl ChannelAspect {
    /// Creates a channel aspect.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::ChannelAspect`] if either dimension is not
    /// strictly positive.
    pub fn new(diameter: f64, length: f64) -> TransportResult<Self> {
        let diameter = StrictlyPositive::new(diameter).map_err(TransportError::ChannelAspect)?;
        let length = StrictlyPositive::new(length).map_err(TransportError::ChannelAspect)?;

        Ok(Self {
            diameter: diameter.into_inner(),
            length: length.into_inner(),
        })
    }

    #[must_use]
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// The ratio `D/L`.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.diameter / self.length
    }
}

impl Default for ChannelAspect {
    fn default() -> Self {
        Self {
            diameter: 1.0,
            length: 10.0,
        }
    }
}

/// Every transport quantity for one batch of points.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowProfile {
    /// Reynolds number at each point.
    pub reynolds: Vec<f64>,

    /// Regime chosen for the whole batch.
    pub regime: FlowRegime,

    /// Prandtl number at each point.
    pub prandtl: Vec<f64>,

    /// Nusselt number at each point.
    pub nusselt: Vec<f64>,

    /// Convective heat transfer coefficient at each point, W/(m²·°C).
    pub heat_transfer_coefficient: Vec<f64>,
}

/// Computes transport quantities from seawater properties.
///
/// The wrapped [`Seawater`] evaluator decides how out-of-range property
/// inputs are handled. `Transport::default()` rejects them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transport {
    seawater: Seawater,
}

impl Transport {
    #[must_use]
    pub fn new(seawater: Seawater) -> Self {
        Self { seawater }
    }

    #[must_use]
    pub fn seawater(&self) -> Seawater {
        self.seawater
    }

    /// Reynolds number `Re = ρ·d_h·V/μ` at each point.
    ///
    /// `velocity` is in m/s and `hydraulic_diameter` in m.
    ///
    /// # Errors
    ///
    /// Fails if the velocity is negative, the hydraulic diameter is not
    /// strictly positive, or a property cannot be evaluated.
    pub fn reynolds_number(
        &self,
        conditions: &Conditions,
        velocity: f64,
        hydraulic_diameter: f64,
    ) -> TransportResult<Vec<f64>> {
        let (velocity, d_h) = validate_flow(velocity, hydraulic_diameter)?;

        let rho = self.seawater.evaluate::<Density>(conditions)?;
        let mu = self.seawater.evaluate::<DynamicViscosity>(conditions)?;

        Ok(reynolds(&rho, &mu, velocity, d_h))
    }

    /// Prandtl number `Pr = cp·μ/k` at each point.
    ///
    /// # Errors
    ///
    /// Fails if a property cannot be evaluated.
    pub fn prandtl_number(&self, conditions: &Conditions) -> TransportResult<Vec<f64>> {
        let cp = self.seawater.evaluate::<SpecificHeat>(conditions)?;
        let mu = self.seawater.evaluate::<DynamicViscosity>(conditions)?;
        let k = self.seawater.evaluate::<ThermalConductivity>(conditions)?;

        Ok(prandtl(&cp, &mu, &k))
    }

    /// Computes Re, the batch regime, Pr, Nu and the heat transfer coefficient.
    ///
    /// Each seawater property is evaluated once.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`Transport::reynolds_number`] and
    /// [`Transport::prandtl_number`].
    pub fn flow_profile(
        &self,
        conditions: &Conditions,
        velocity: f64,
        hydraulic_diameter: f64,
        aspect: ChannelAspect,
    ) -> TransportResult<FlowProfile> {
        let (velocity, d_h) = validate_flow(velocity, hydraulic_diameter)?;

        let rho = self.seawater.evaluate::<Density>(conditions)?;
        let mu = self.seawater.evaluate::<DynamicViscosity>(conditions)?;
        let cp = self.seawater.evaluate::<SpecificHeat>(conditions)?;
        let k = self.seawater.evaluate::<ThermalConductivity>(conditions)?;

        let reynolds = reynolds(&rho, &mu, velocity, d_h);
        let regime = FlowRegime::classify(&reynolds);
        let prandtl = prandtl(&cp, &mu, &k);

        let nusselt: Vec<f64> = reynolds
            .iter()
            .zip(&prandtl)
            .map(|(re, pr)| regime.nusselt_number(*re, *pr, aspect))
            .collect();

        let heat_transfer_coefficient = nusselt
            .iter()
            .zip(&k)
            .map(|(nu, k)| nu * k / d_h)
            .collect();

        Ok(FlowProfile {
            reynolds,
            regime,
            prandtl,
            nusselt,
            heat_transfer_coefficient,
        })
    }

    /// Nusselt number at each point, with one regime for the whole batch.
    ///
    /// # Errors
    ///
    /// See [`Transport::flow_profile`].
    pub fn nusselt_number(
        &self,
        conditions: &Conditions,
        velocity: f64,
        hydraulic_diameter: f64,
        aspect: ChannelAspect,
    ) -> TransportResult<Vec<f64>> {
        self.flow_profile(conditions, velocity, hydraulic_diameter, aspect)
            .map(|profile| profile.nusselt)
    }

    /// Convective heat transfer coefficient `h = Nu·k/d_h`, W/(m²·°C).
    ///
    /// The Nusselt number uses the default [`ChannelAspect`].
    ///
    /// # Errors
    ///
    /// See [`Transport::flow_profile`].
    pub fn heat_transfer_coefficient(
        &self,
        conditions: &Conditions,
        velocity: f64,
        hydraulic_diameter: f64,
    ) -> TransportResult<Vec<f64>> {
        self.flow_profile(
            conditions,
            velocity,
            hydraulic_diameter,
            ChannelAspect::default(),
        )
        .map(|profile| profile.heat_transfer_coefficient)
    }
}

/// Checks velocity and hydraulic diameter, returning them unwrapped.
fn validate_flow(velocity: f64, hydraulic_diameter: f64) -> TransportResult<(f64, f64)> {
    let velocity = NonNegative::new(velocity)
        .map_err(TransportError::Velocity)?
        .into_inner();
    let d_h = StrictlyPositive::new(hydraulic_diameter)
        .map_err(GeometryError::HydraulicDiameter)?
        .into_inner();
    Ok((velocity, d_h))
}

fn reynolds(rho: &[f64], mu: &[f64], velocity: f64, d_h: f64) -> Vec<f64> {
    rho.iter()
        .zip(mu)
        .map(|(rho, mu)| rho * d_h * velocity / mu)
        .collect()
}

fn prandtl(cp: &[f64], mu: &[f64], k: &[f64]) -> Vec<f64> {
    cp.iter()
        .zip(mu)
        .zip(k)
        .map(|((cp, mu), k)| cp * mu / k)
        .collect()
}

/// Reynolds number of seawater flowing at `velocity` (m/s) through a channel
/// of `hydraulic_diameter` (m), at temperature (°C) and salinity (wt%).
///
/// # Errors
///
/// See [`Transport::reynolds_number`].
pub fn reynolds_number(
    temperature: impl Into<Series>,
    salinity: impl Into<Series>,
    velocity: f64,
    hydraulic_diameter: f64,
) -> TransportResult<Vec<f64>> {
    let conditions = Conditions::new(temperature).with_salinity(salinity);
    Transport::default().reynolds_number(&conditions, velocity, hydraulic_diameter)
}

/// Prandtl number of seawater at temperature (°C) and salinity (wt%).
///
/// # Errors
///
/// See [`Transport::prandtl_number`].
pub fn prandtl_number(
    temperature: impl Into<Series>,
    salinity: impl Into<Series>,
) -> TransportResult<Vec<f64>> {
    let conditions = Conditions::new(temperature).with_salinity(salinity);
    Transport::default().prandtl_number(&conditions)
}

/// Nusselt number of seawater in a channel.
///
/// Pass `ChannelAspect::default()` for the usual `D = 1`, `L = 10`.
///
/// # Errors
///
/// See [`Transport::flow_profile`].
pub fn nusselt_number(
    temperature: impl Into<Series>,
    salinity: impl Into<Series>,
    velocity: f64,
    hydraulic_diameter: f64,
    aspect: ChannelAspect,
) -> TransportResult<Vec<f64>> {
    let conditions = Conditions::new(temperature).with_salinity(salinity);
    Transport::default().nusselt_number(&conditions, velocity, hydraulic_diameter, aspect)
}

/// Convective heat transfer coefficient, W/(m²·°C), of seawater in a channel.
///
/// # Errors
///
/// See [`Transport::flow_profile`].
pub fn heat_transfer_coefficient(
    temperature: impl Into<Series>,
    salinity: impl Into<Series>,
    velocity: f64,
    hydraulic_diameter: f64,
) -> TransportResult<Vec<f64>> {
    let conditions = Conditions::new(temperature).with_salinity(salinity);
    Transport::default().heat_transfer_coefficient(&conditions, velocity, hydraulic_diameter)
}
