//! Scalar-or-vector inputs and the broadcasting rules between them.
//!
//! Every correlation accepts temperature and salinity either as a single
//! value or as a sequence. [`Series`] makes that choice explicit, and
//! [`broadcast`] pairs two series point by point:
//!
//! | left        | right       | result length |
//! |-------------|-------------|---------------|
//! | scalar      | scalar      | 1             |
//! | scalar      | vector(n)   | n             |
//! | vector(n)   | scalar      | n             |
//! | vector(n)   | vector(n)   | n             |
//! | vector(n)   | vector(m)   | [`ShapeError`]|
//!
//! A one-element vector is a vector, not a scalar; it only pairs with a
//! scalar or another one-element vector.

use thiserror::Error;

use crate::support::constraint::{ConstraintError, ConstraintResult, StrictlyPositive};

/// A scalar value or a sequence of values.
#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    Scalar(f64),
    Vector(Vec<f64>),
}

/// Two series that cannot be broadcast against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot broadcast a series of length {left} against one of length {right}")]
pub struct ShapeError {
    pub left: usize,
    pub right: usize,
}

/// Largest number of points [`Series::sweep`] will generate.
pub const MAX_SWEEP_POINTS: usize = 1_000_000;

impl Series {
    /// Returns an inclusive, evenly spaced sweep from `start` to `end`.
    ///
    /// The last point is `end` when `end - start` is a whole number of steps,
    /// otherwise the last point before `end`. A sweep with `end < start` is empty.
    ///
    /// ```
    /// use seawater_models::support::series::Series;
    ///
    /// let feed = Series::sweep(5.0, 95.0, 5.0).unwrap();
    /// assert_eq!(feed.len(), 19);
    /// assert_eq!(feed.value_at(18), 95.0);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is not strictly positive, if any bound is
    /// not finite, or [`ConstraintError::AboveMaximum`] if the sweep would
    /// have more than [`MAX_SWEEP_POINTS`] points.
    pub fn sweep(start: f64, end: f64, step: f64) -> ConstraintResult<Self> {
        let step = StrictlyPositive::new(step)?.into_inner();
        if !(start.is_finite() && end.is_finite() && step.is_finite()) {
            return Err(ConstraintError::NotANumber);
        }

        let span = (end - start) / step;
        if span < 0.0 {
            return Ok(Self::Vector(Vec::new()));
        }
        // Tolerate rounding in `(end - start) / step` so the endpoint survives.
        let span = (span + 1e-9).floor();

        #[allow(clippy::cast_precision_loss)]
        let max_intervals = MAX_SWEEP_POINTS as f64;
        if !span.is_finite() || span >= max_intervals {
            return Err(ConstraintError::AboveMaximum);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let intervals = span as usize;

        #[allow(clippy::cast_precision_loss)]
        let points = (0..=intervals).map(|i| start + step * i as f64).collect();

        Ok(Self::Vector(points))
    }

    /// Number of points this series contributes on its own.
    ///
    /// A scalar counts as one point.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Vector(values) => values.len(),
        }
    }

    /// Returns `true` for an empty vector.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value at point `index`, repeating a scalar at every index.
    ///
    /// # Panics
    ///
    /// Panics if this is a vector and `index` is out of bounds.
    #[must_use]
    pub fn value_at(&self, index: usize) -> f64 {
        match self {
            Self::Scalar(value) => *value,
            Self::Vector(values) => values[index],
        }
    }
}

impl Default for Series {
    fn default() -> Self {
        Self::Scalar(0.0)
    }
}

impl From<f64> for Series {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<f64>> for Series {
    fn from(values: Vec<f64>) -> Self {
        Self::Vector(values)
    }
}

impl From<&[f64]> for Series {
    fn from(values: &[f64]) -> Self {
        Self::Vector(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Series {
    fn from(values: [f64; N]) -> Self {
        Self::Vector(values.to_vec())
    }
}

impl From<&Series> for Series {
    fn from(series: &Series) -> Self {
        series.clone()
    }
}

/// Returns the length two series broadcast to.
///
/// # Errors
///
/// Returns a [`ShapeError`] if both are vectors of different lengths.
pub fn broadcast_len(left: &Series, right: &Series) -> Result<usize, ShapeError> {
    match (left, right) {
        (Series::Scalar(_), Series::Scalar(_)) => Ok(1),
        (Series::Scalar(_), Series::Vector(v)) | (Series::Vector(v), Series::Scalar(_)) => {
            Ok(v.len())
        }
        (Series::Vector(l), Series::Vector(r)) if l.len() == r.len() => Ok(l.len()),
        (Series::Vector(l), Series::Vector(r)) => Err(ShapeError {
            left: l.len(),
            right: r.len(),
        }),
    }
}

/// Pairs two series point by point.
///
/// # Errors
///
/// Returns a [`ShapeError`] if the series cannot be broadcast together.
pub fn broadcast(left: &Series, right: &Series) -> Result<Vec<(f64, f64)>, ShapeError> {
    let len = broadcast_len(left, right)?;
    Ok((0..len)
        .map(|i| (left.value_at(i), right.value_at(i)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn scalar_with_scalar() -> Result<(), ShapeError> {
        let pairs = broadcast(&Series::from(25.0), &Series::from(3.5))?;
        assert_eq!(pairs, vec![(25.0, 3.5)]);
        Ok(())
    }

    #[test]
    fn scalar_repeats_across_vector() -> Result<(), ShapeError> {
        let temperatures = Series::from([20.0, 40.0, 60.0]);
        let salinity = Series::from(3.5);

        let pairs = broadcast(&temperatures, &salinity)?;
        assert_eq!(pairs, vec![(20.0, 3.5), (40.0, 3.5), (60.0, 3.5)]);

        let pairs = broadcast(&salinity, &temperatures)?;
        assert_eq!(pairs, vec![(3.5, 20.0), (3.5, 40.0), (3.5, 60.0)]);
        Ok(())
    }

    #[test]
    fn equal_vectors_pair_elementwise() -> Result<(), ShapeError> {
        let pairs = broadcast(&vec![20.0, 30.0].into(), &vec![1.0, 2.0].into())?;
        assert_eq!(pairs, vec![(20.0, 1.0), (30.0, 2.0)]);
        Ok(())
    }

    #[test]
    fn mismatched_vectors_fail() {
        let err = broadcast(&[20.0, 30.0, 40.0].into(), &[1.0, 2.0].into()).unwrap_err();
        assert_eq!(err, ShapeError { left: 3, right: 2 });
        assert!(err.to_string().contains("length 3"));
    }

    #[test]
    fn one_element_vector_is_not_a_scalar() {
        assert!(broadcast_len(&[1.0].into(), &[1.0, 2.0].into()).is_err());
        assert_eq!(broadcast_len(&[1.0].into(), &Series::from(2.0)), Ok(1));
    }

    #[test]
    fn empty_vector_broadcasts_to_nothing() {
        assert_eq!(broadcast_len(&Vec::<f64>::new().into(), &Series::from(3.5)), Ok(0));
        assert!(Series::Vector(Vec::new()).is_empty());
    }

    #[test]
    fn sweep_includes_endpoint() {
        let sweep = Series::sweep(20.0, 80.0, 20.0).unwrap();
        assert_eq!(sweep, Series::Vector(vec![20.0, 40.0, 60.0, 80.0]));

        let sweep = Series::sweep(0.0, 1.0, 0.1).unwrap();
        assert_eq!(sweep.len(), 11);
        assert_relative_eq!(sweep.value_at(10), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn sweep_stops_before_partial_step() {
        let sweep = Series::sweep(10.0, 25.0, 10.0).unwrap();
        assert_eq!(sweep, Series::Vector(vec![10.0, 20.0]));
    }

    #[test]
    fn sweep_requires_positive_step() {
        assert!(Series::sweep(10.0, 20.0, 0.0).is_err());
        assert!(Series::sweep(10.0, 20.0, -1.0).is_err());
        assert!(Series::sweep(20.0, 10.0, 1.0).unwrap().is_empty());
        assert!(Series::sweep(0.0, f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn oversized_sweep_is_rejected() {
        assert_eq!(
            Series::sweep(0.0, 1e300, 1e-300),
            Err(ConstraintError::AboveMaximum)
        );
        assert_eq!(
            Series::sweep(-1e308, 1e308, 1.0),
            Err(ConstraintError::AboveMaximum)
        );
        assert_eq!(
            Series::sweep(0.0, 1e7, 1.0),
            Err(ConstraintError::AboveMaximum)
        );

        let largest = Series::sweep(0.0, 999_999.0, 1.0).unwrap();
        assert_eq!(largest.len(), MAX_SWEEP_POINTS);
    }
}
