use uom::si::{angle::degree, f64::Angle};

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that an angle lies within one full turn: `0 ≤ θ ≤ 360°`.
///
/// The spacer filament angle enters the correction factor as `sin(θ/2)`,
/// which is only non-negative on this interval.
///
/// # Examples
///
/// ```
/// use seawater_models::support::constraint::FullTurn;
/// use uom::si::{angle::degree, f64::Angle};
///
/// assert!(FullTurn::new(Angle::new::<degree>(90.0)).is_ok());
/// assert!(FullTurn::new(Angle::new::<degree>(0.0)).is_ok());
/// assert!(FullTurn::new(Angle::new::<degree>(-10.0)).is_err());
/// assert!(FullTurn::new(Angle::new::<degree>(400.0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FullTurn;

impl FullTurn {
    /// Constructs a [`Constrained<Angle, FullTurn>`] if `0 ≤ θ ≤ 360°`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if the angle is negative.
    /// - [`ConstraintError::AboveMaximum`] if the angle exceeds 360°.
    /// - [`ConstraintError::NotANumber`] if the angle is NaN.
    pub fn new(angle: Angle) -> Result<Constrained<Angle, FullTurn>, ConstraintError> {
        Constrained::<Angle, FullTurn>::new(angle)
    }
}

impl Constraint<Angle> for FullTurn {
    fn check(value: &Angle) -> Result<(), ConstraintError> {
        let degrees = value.get::<degree>();
        if degrees.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if degrees < 0.0 {
            Err(ConstraintError::BelowMinimum)
        } else if degrees > 360.0 {
            Err(ConstraintError::AboveMaximum)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::angle::radian;

    #[test]
    fn bounds_are_inclusive() {
        assert!(FullTurn::new(Angle::new::<degree>(0.0)).is_ok());
        assert!(FullTurn::new(Angle::new::<degree>(360.0)).is_ok());
    }

    #[test]
    fn radians_are_converted() {
        assert!(FullTurn::new(Angle::new::<radian>(std::f64::consts::PI)).is_ok());
        assert_eq!(
            FullTurn::new(Angle::new::<radian>(7.0)),
            Err(ConstraintError::AboveMaximum)
        );
    }

    #[test]
    fn nan_is_not_a_number() {
        assert_eq!(
            FullTurn::new(Angle::new::<degree>(f64::NAN)),
            Err(ConstraintError::NotANumber)
        );
    }
}
