//! Heat transfer in a spacer-filled membrane channel.
//!
//! [`SpacerChannel`] evaluates the feed side of a membrane distillation
//! module. The spacer geometry fixes the hydraulic diameter. The transport
//! relations then give Re, Pr, Nu and the convective coefficient for each
//! feed temperature, and the spacer correction factor is reported alongside.

mod results;

pub use results::ChannelResults;

use twine_core::Model;
use uom::si::{f64::Velocity, length::meter, velocity::meter_per_second};

use crate::support::{
    seawater::Conditions,
    transport::{ChannelAspect, SpacerGeometry, Transport, TransportError},
};

/// Input to a [`SpacerChannel`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelInput {
    /// Feed temperature (°C) and salinity (wt%).
    pub conditions: Conditions,

    /// Mean feed velocity through the channel.
    pub velocity: Velocity,
}

/// A flat channel filled with a net-type feed spacer.
///
/// # Example
///
/// ```
/// use seawater_models::{
///     models::membrane::channel::{ChannelInput, SpacerChannel},
///     support::{seawater::Conditions, transport::{FlowRegime, SpacerGeometry}},
/// };
/// use twine_core::Model;
/// use uom::si::{
///     angle::degree,
///     f64::{Angle, Length, Ratio, Velocity},
///     length::millimeter,
///     ratio::ratio,
///     velocity::meter_per_second,
/// };
///
/// let spacer = SpacerGeometry::new(
///     Ratio::new::<ratio>(0.8),
///     Length::new::<millimeter>(1.0),
///     Length::new::<millimeter>(0.5),
///     Angle::new::<degree>(90.0),
/// )
/// .unwrap();
///
/// let channel = SpacerChannel::new(spacer);
/// let results = channel
///     .call(&ChannelInput {
///         conditions: Conditions::new([30.0, 40.0, 50.0]).with_salinity(3.5),
///         velocity: Velocity::new::<meter_per_second>(0.1),
///     })
///     .unwrap();
///
/// assert_eq!(results.len(), 3);
/// assert_eq!(results.regime, FlowRegime::Laminar);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacerChannel {
    transport: Transport,
    spacer: SpacerGeometry,
    aspect: ChannelAspect,
}

impl SpacerChannel {
    /// Creates a channel with default transport settings and aspect.
    #[must_use]
    pub fn new(spacer: SpacerGeometry) -> Self {
        Self {
            transport: Transport::default(),
            spacer,
            aspect: ChannelAspect::default(),
        }
    }

    /// Replaces the transport evaluator, e.g. to change the range policy.
    #[must_use]
    pub fn with_transport(mut self, transport: Transport) -> Self {
        self.transport = transport;
        self
    }

    /// Replaces the aspect used by the turbulent Nusselt correlation.
    #[must_use]
    pub fn with_aspect(mut self, aspect: ChannelAspect) -> Self {
        self.aspect = aspect;
        self
    }

    #[must_use]
    pub fn spacer(&self) -> &SpacerGeometry {
        &self.spacer
    }

    #[must_use]
    pub fn aspect(&self) -> ChannelAspect {
        self.aspect
    }
}

impl Model for SpacerChannel {
    type Input = ChannelInput;
    type Output = ChannelResults;
    type Error = TransportError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let hydraulic_diameter = self.spacer.hydraulic_diameter();

        let profile = self.transport.flow_profile(
            &input.conditions,
            input.velocity.get::<meter_per_second>(),
            hydraulic_diameter.get::<meter>(),
            self.aspect,
        )?;

        Ok(ChannelResults {
            hydraulic_diameter,
            spacer_correction_factor: self.spacer.correction_factor(),
            reynolds: profile.reynolds,
            regime: profile.regime,
            prandtl: profile.prandtl,
            nusselt: profile.nusselt,
            heat_transfer_coefficient: profile.heat_transfer_coefficient,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        angle::degree,
        f64::{Angle, Length, Ratio},
        length::millimeter,
        ratio::ratio,
    };

    use crate::support::{
        constraint::ConstraintError,
        seawater::{PropertyError, RangePolicy, Seawater, thermal_conductivity},
        series::Series,
        transport::{self, FlowRegime},
    };

    fn spacer() -> SpacerGeometry {
        SpacerGeometry::new(
            Ratio::new::<ratio>(0.8),
            Length::new::<millimeter>(1.0),
            Length::new::<millimeter>(0.5),
            Angle::new::<degree>(90.0),
        )
        .expect("valid spacer")
    }

    fn feed(velocity: f64) -> ChannelInput {
        ChannelInput {
            conditions: Conditions::new([30.0, 40.0, 50.0]).with_salinity(3.5),
            velocity: Velocity::new::<meter_per_second>(velocity),
        }
    }

    #[test]
    fn matches_transport_relations() -> Result<(), TransportError> {
        let results = SpacerChannel::new(spacer()).call(&feed(0.1))?;
        let d_h = results.hydraulic_diameter.get::<meter>();

        assert_relative_eq!(
            d_h,
            transport::channel_hydraulic_diameter(0.8, 0.001, 0.0005)?,
            max_relative = 1e-12
        );
        assert_eq!(
            results.reynolds,
            transport::reynolds_number([30.0, 40.0, 50.0], 3.5, 0.1, d_h)?
        );
        assert_eq!(
            results.heat_transfer_coefficient,
            transport::heat_transfer_coefficient([30.0, 40.0, 50.0], 3.5, 0.1, d_h)?
        );
        assert_eq!(results.regime, FlowRegime::Laminar);
        Ok(())
    }

    #[test]
    fn reports_correction_factor_without_applying_it() -> Result<(), TransportError> {
        let results = SpacerChannel::new(spacer()).call(&feed(0.1))?;
        assert_relative_eq!(
            results.spacer_correction_factor,
            1.606_128_595_378_710_3,
            max_relative = 1e-12
        );

        let k = thermal_conductivity([30.0, 40.0, 50.0], 3.5)?;
        let d_h = results.hydraulic_diameter.get::<meter>();
        for ((h, nu), k) in results.heat_transfer_coefficient.iter().zip(&results.nusselt).zip(&k) {
            assert_relative_eq!(*h, nu * k / d_h);
        }
        Ok(())
    }

    #[test]
    fn faster_feed_is_turbulent_and_uses_aspect() -> Result<(), TransportError> {
        let aspect = ChannelAspect::new(1.0, 40.0)?;
        let default = SpacerChannel::new(spacer()).call(&feed(3.0))?;
        let longer = SpacerChannel::new(spacer()).with_aspect(aspect).call(&feed(3.0))?;

        assert_eq!(default.regime, FlowRegime::Turbulent);
        assert_eq!(longer.regime, FlowRegime::Turbulent);
        assert!(longer.nusselt[0] < default.nusselt[0]);
        assert!(
            default
                .heat_transfer_coefficient
                .iter()
                .zip(&longer.heat_transfer_coefficient)
                .all(|(short, long)| short > long)
        );
        Ok(())
    }

    #[test]
    fn sweep_produces_one_result_per_temperature() -> Result<(), Box<dyn std::error::Error>> {
        let temperatures = Series::sweep(20.0, 80.0, 5.0)?;
        let input = ChannelInput {
            conditions: Conditions::new(temperatures).with_salinity(3.5),
            velocity: Velocity::new::<meter_per_second>(0.2),
        };

        let results = SpacerChannel::new(spacer()).call(&input)?;
        assert_eq!(results.len(), 13);
        assert!(!results.is_empty());
        assert!(results.reynolds.windows(2).all(|pair| pair[0] < pair[1]));
        Ok(())
    }

    #[test]
    fn invalid_input_propagates() {
        let channel = SpacerChannel::new(spacer());

        assert_eq!(
            channel.call(&feed(-0.5)),
            Err(TransportError::Velocity(ConstraintError::Negative))
        );

        let hot = ChannelInput {
            conditions: Conditions::new(190.0).with_salinity(3.5),
            velocity: Velocity::new::<meter_per_second>(0.1),
        };
        assert!(matches!(
            channel.call(&hot),
            Err(TransportError::Property(
                PropertyError::TemperatureOutOfRange { .. }
            ))
        ));

        let lenient = channel.with_transport(Transport::new(Seawater::new(RangePolicy::Warn)));
        assert!(lenient.call(&hot).is_ok());
    }
}
