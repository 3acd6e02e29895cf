use thiserror::Error;
use uom::si::{
    angle::{degree, radian},
    f64::{Angle, Length, Ratio},
    length::meter,
    ratio::ratio,
};

use crate::support::constraint::{
    Constrained, ConstraintError, FullTurn, StrictlyPositive, UnitIntervalLowerOpen,
};

/// Errors describing a spacer or channel dimension that is not physical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Porosity must satisfy `0 < ε ≤ 1`.
    #[error("invalid spacer porosity")]
    Porosity(#[source] ConstraintError),

    /// Spacer thickness must be strictly positive.
    #[error("invalid spacer thickness")]
    Thickness(#[source] ConstraintError),

    /// Filament diameter must be strictly positive.
    #[error("invalid filament diameter")]
    FilamentDiameter(#[source] ConstraintError),

    /// Filament angle must be within `[0°, 360°]`.
    #[error("invalid filament angle")]
    FilamentAngle(#[source] ConstraintError),

    /// Hydraulic diameter must be strictly positive.
    #[error("invalid hydraulic diameter")]
    HydraulicDiameter(#[source] ConstraintError),
}

/// A net-type feed spacer filling a flat membrane channel.
///
/// All dimensions are validated on construction. The geometry never changes
/// afterwards, so derived quantities can be recomputed freely.
///
/// # Example
///
/// ```
/// use seawater_models::support::transport::SpacerGeometry;
/// use uom::si::{
///     angle::degree,
///     f64::{Angle, Length, Ratio},
///     length::millimeter,
///     ratio::ratio,
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
/// let d_h = spacer.hydraulic_diameter().get::<millimeter>();
/// assert!((d_h - 0.888_889).abs() < 1e-6);
/// assert!(spacer.correction_factor() > 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacerGeometry {
    porosity: Constrained<Ratio, UnitIntervalLowerOpen>,
    thickness: Constrained<Length, StrictlyPositive>,
    filament_diameter: Constrained<Length, StrictlyPositive>,
    filament_angle: Constrained<Angle, FullTurn>,
}

impl SpacerGeometry {
    /// Creates a validated spacer geometry.
    ///
    /// # Errors
    ///
    /// Returns the [`GeometryError`] variant naming the first invalid
    /// dimension.
    pub fn new(
        porosity: Ratio,
        thickness: Length,
        filament_diameter: Length,
        filament_angle: Angle,
    ) -> Result<Self, GeometryError> {
        Ok(Self {
            porosity: UnitIntervalLowerOpen::new(porosity).map_err(GeometryError::Porosity)?,
            thickness: StrictlyPositive::new(thickness).map_err(GeometryError::Thickness)?,
            filament_diameter: StrictlyPositive::new(filament_diameter)
                .map_err(GeometryError::FilamentDiameter)?,
            filament_angle: FullTurn::new(filament_angle).map_err(GeometryError::FilamentAngle)?,
        })
    }

    #[must_use]
    pub fn porosity(&self) -> Ratio {
        *self.porosity.as_ref()
    }

    #[must_use]
    pub fn thickness(&self) -> Length {
        *self.thickness.as_ref()
    }

    #[must_use]
    pub fn filament_diameter(&self) -> Length {
        *self.filament_diameter.as_ref()
    }

    #[must_use]
    pub fn filament_angle(&self) -> Angle {
        *self.filament_angle.as_ref()
    }

    /// Hydraulic diameter of the spacer-filled channel.
    ///
    /// `d_h = 4·ε·h·df / (2·df + 4·(1 − ε)·h)`
    #[must_use]
    pub fn hydraulic_diameter(&self) -> Length {
        let e = self.porosity().get::<ratio>();
        let h = self.thickness().get::<meter>();
        let df = self.filament_diameter().get::<meter>();

        Length::new::<meter>(4.0 * e * h * df / (2.0 * df + 4.0 * (1.0 - e) * h))
    }

    /// Dimensionless factor by which the spacer enhances heat transfer over
    /// an empty channel.
    ///
    /// `SCF = 1.904·(df/h)^−0.039·ε^0.75·sin(θ/2)^0.086`
    #[must_use]
    pub fn correction_factor(&self) -> f64 {
        let e = self.porosity().get::<ratio>();
        let h = self.thickness().get::<meter>();
        let df = self.filament_diameter().get::<meter>();
        let half_angle = self.filament_angle().get::<radian>() / 2.0;

        1.904 * (df / h).powf(-0.039) * e.powf(0.75) * half_angle.sin().powf(0.086)
    }
}

/// Spacer correction factor from porosity (0–1), thickness and filament
/// diameter (same length unit), and filament angle in degrees.
///
/// # Errors
///
/// Returns a [`GeometryError`] if any dimension is invalid.
pub fn spacer_correction_factor(
    porosity: f64,
    thickness: f64,
    filament_diameter: f64,
    angle: f64,
) -> Result<f64, GeometryError> {
    let spacer = SpacerGeometry::new(
        Ratio::new::<ratio>(porosity),
        Length::new::<meter>(thickness),
        Length::new::<meter>(filament_diameter),
        Angle::new::<degree>(angle),
    )?;
    Ok(spacer.correction_factor())
}

/// Hydraulic diameter of a spacer-filled channel from porosity (0–1),
/// thickness and filament diameter. The result has the unit of the inputs.
///
/// # Errors
///
/// Returns a [`GeometryError`] if any dimension is invalid.
pub fn channel_hydraulic_diameter(
    porosity: f64,
    thickness: f64,
    filament_diameter: f64,
) -> Result<f64, GeometryError> {
    let e = UnitIntervalLowerOpen::new(porosity)
        .map_err(GeometryError::Porosity)?
        .into_inner();
    let h = StrictlyPositive::new(thickness)
        .map_err(GeometryError::Thickness)?
        .into_inner();
    let df = StrictlyPositive::new(filament_diameter)
        .map_err(GeometryError::FilamentDiameter)?
        .into_inner();

    Ok(4.0 * e * h * df / (2.0 * df + 4.0 * (1.0 - e) * h))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::millimeter;

    fn spacer(porosity: f64) -> Result<SpacerGeometry, GeometryError> {
        SpacerGeometry::new(
            Ratio::new::<ratio>(porosity),
            Length::new::<millimeter>(1.0),
            Length::new::<millimeter>(0.5),
            Angle::new::<degree>(90.0),
        )
    }

    #[test]
    fn hydraulic_diameter_is_exact() -> Result<(), GeometryError> {
        let d_h = channel_hydraulic_diameter(0.8, 0.001, 0.0005)?;
        assert_eq!(
            d_h,
            4.0 * 0.8 * 0.001 * 0.0005 / (2.0 * 0.0005 + 4.0 * (1.0 - 0.8) * 0.001)
        );
        assert_relative_eq!(d_h, 8.0 / 9.0 * 1e-3, max_relative = 1e-12);
        Ok(())
    }

    #[test]
    fn geometry_and_free_function_agree() -> Result<(), GeometryError> {
        let from_geometry = spacer(0.8)?.hydraulic_diameter().get::<meter>();
        assert_relative_eq!(
            from_geometry,
            channel_hydraulic_diameter(0.8, 0.001, 0.0005)?,
            max_relative = 1e-12
        );
        Ok(())
    }

    #[test]
    fn open_channel_limit() -> Result<(), GeometryError> {
        // With no solid fraction, d_h = 2h regardless of filament size.
        assert_relative_eq!(
            channel_hydraulic_diameter(1.0, 0.002, 0.0003)?,
            0.004,
            max_relative = 1e-12
        );
        Ok(())
    }

    #[test]
    fn correction_factor_reference_value() -> Result<(), GeometryError> {
        let scf = spacer_correction_factor(0.8, 0.001, 0.0005, 90.0)?;
        assert_relative_eq!(scf, 1.606_128_595_378_710_3, max_relative = 1e-12);
        assert_relative_eq!(spacer(0.8)?.correction_factor(), scf, max_relative = 1e-12);
        Ok(())
    }

    #[test]
    fn correction_factor_grows_with_porosity() -> Result<(), GeometryError> {
        let factors = [0.5, 0.6, 0.7, 0.8, 0.9, 1.0]
            .into_iter()
            .map(|e| spacer(e).map(|s| s.correction_factor()))
            .collect::<Result<Vec<_>, _>>()?;

        assert!(factors.windows(2).all(|pair| pair[0] <= pair[1]));
        Ok(())
    }

    #[test]
    fn invalid_dimensions_are_rejected() {
        assert_eq!(
            channel_hydraulic_diameter(0.0, 0.001, 0.0005),
            Err(GeometryError::Porosity(ConstraintError::BelowMinimum))
        );
        assert_eq!(
            channel_hydraulic_diameter(1.2, 0.001, 0.0005),
            Err(GeometryError::Porosity(ConstraintError::AboveMaximum))
        );
        assert_eq!(
            channel_hydraulic_diameter(0.8, -0.001, 0.0005),
            Err(GeometryError::Thickness(ConstraintError::Negative))
        );
        assert_eq!(
            spacer_correction_factor(0.8, 0.001, 0.0, 90.0),
            Err(GeometryError::FilamentDiameter(ConstraintError::Zero))
        );
        assert_eq!(
            spacer_correction_factor(0.8, 0.001, 0.0005, 400.0),
            Err(GeometryError::FilamentAngle(ConstraintError::AboveMaximum))
        );
        assert_eq!(
            spacer_correction_factor(f64::NAN, 0.001, 0.0005, 90.0),
            Err(GeometryError::Porosity(ConstraintError::NotANumber))
        );
    }
}
