use tracing::debug;

use super::ChannelAspect;

/// Mean Reynolds number below which a batch is treated as laminar.
pub const LAMINAR_REYNOLDS_LIMIT: f64 = 2000.0;

/// Flow regime of a channel, decided once for a whole batch of points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    Laminar,
    Turbulent,
}

impl FlowRegime {
    /// Classifies a batch by the arithmetic mean of its Reynolds numbers.
    ///
    /// Returns [`FlowRegime::Laminar`] if the mean is below
    /// [`LAMINAR_REYNOLDS_LIMIT`], otherwise [`FlowRegime::Turbulent`].
    /// An empty batch has no mean and classifies as turbulent.
    ///
    /// ```
    /// use seawater_models::support::transport::FlowRegime;
    ///
    /// assert_eq!(FlowRegime::classify(&[1000.0; 4]), FlowRegime::Laminar);
    /// assert_eq!(FlowRegime::classify(&[5000.0; 4]), FlowRegime::Turbulent);
    ///
    /// // One decision for the batch, even when points straddle the limit.
    /// assert_eq!(FlowRegime::classify(&[1500.0, 2200.0]), FlowRegime::Laminar);
    /// ```
    #[must_use]
    pub fn classify(reynolds: &[f64]) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let mean = reynolds.iter().sum::<f64>() / reynolds.len() as f64;

        let regime = if mean < LAMINAR_REYNOLDS_LIMIT {
            Self::Laminar
        } else {
            Self::Turbulent
        };

        debug!(mean, ?regime, "classified flow regime");
        regime
    }

    /// Nusselt number at one point using this regime's correlation.
    ///
    /// - Laminar: `Nu = 0.13·Re^0.64·Pr^0.38`
    /// - Turbulent: `Nu = 0.036·Re^0.8·Pr^0.33·(D/L)^0.055`
    #[must_use]
    pub fn nusselt_number(self, reynolds: f64, prandtl: f64, aspect: ChannelAspect) -> f64 {
        match self {
            Self::Laminar => 0.13 * reynolds.powf(0.64) * prandtl.powf(0.38),
            Self::Turbulent => {
                0.036 * reynolds.powf(0.8) * prandtl.powf(0.33) * aspect.ratio().powf(0.055)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn limit_is_turbulent() {
        assert_eq!(
            FlowRegime::classify(&[LAMINAR_REYNOLDS_LIMIT]),
            FlowRegime::Turbulent
        );
        assert_eq!(FlowRegime::classify(&[1999.999]), FlowRegime::Laminar);
    }

    #[test]
    fn mean_decides_not_majority() {
        // Two laminar points and one far into turbulence.
        assert_eq!(
            FlowRegime::classify(&[500.0, 500.0, 8000.0]),
            FlowRegime::Turbulent
        );
    }

    #[test]
    fn empty_batch_is_turbulent() {
        assert_eq!(FlowRegime::classify(&[]), FlowRegime::Turbulent);
    }

    #[test]
    fn laminar_correlation() {
        let nu = FlowRegime::Laminar.nusselt_number(100.0, 5.0, ChannelAspect::default());
        assert_relative_eq!(nu, 0.13 * 100f64.powf(0.64) * 5f64.powf(0.38));
    }

    #[test]
    fn turbulent_correlation_uses_aspect() -> Result<(), crate::support::transport::TransportError> {
        let aspect = ChannelAspect::new(0.5, 20.0)?;
        let nu = FlowRegime::Turbulent.nusselt_number(4000.0, 5.0, aspect);
        assert_relative_eq!(
            nu,
            0.036 * 4000f64.powf(0.8) * 5f64.powf(0.33) * 0.025f64.powf(0.055)
        );
        Ok(())
    }
}
