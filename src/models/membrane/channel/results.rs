use uom::si::f64::Length;

use crate::support::transport::FlowRegime;

/// Results from evaluating a spacer-filled channel.
///
/// Per-point quantities have one entry per broadcast point of the input
/// conditions.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelResults {
    /// Hydraulic diameter derived from the spacer geometry.
    pub hydraulic_diameter: Length,

    /// Spacer correction factor.
    ///
    /// Reported alongside the heat transfer coefficient but not applied to it.
    pub spacer_correction_factor: f64,

    /// Reynolds number at each point.
    pub reynolds: Vec<f64>,

    /// Regime shared by every point.
    pub regime: FlowRegime,

    /// Prandtl number at each point.
    pub prandtl: Vec<f64>,

    /// Nusselt number at each point.
    pub nusselt: Vec<f64>,

    /// Convective heat transfer coefficient at each point, W/(m²·°C).
    pub heat_transfer_coefficient: Vec<f64>,
}

impl ChannelResults {
    /// Number of evaluated points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reynolds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reynolds.is_empty()
    }
}
