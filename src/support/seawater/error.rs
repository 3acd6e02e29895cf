use thiserror::Error;

use crate::support::series::ShapeError;

use super::ValidRange;

/// Errors that may occur when evaluating a property correlation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropertyError {
    /// A temperature lies outside the fitted range of the correlation.
    #[error("{property}: temperature {value} °C is outside the valid range {range} °C")]
    TemperatureOutOfRange {
        property: &'static str,
        value: f64,
        range: ValidRange,
    },

    /// A salinity lies outside the fitted range of the correlation.
    #[error("{property}: salinity {value} wt% is outside the valid range {range} wt%")]
    SalinityOutOfRange {
        property: &'static str,
        value: f64,
        range: ValidRange,
    },

    /// Temperature and salinity cannot be broadcast together.
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// A result type alias for property evaluation.
pub type PropertyResult<T> = Result<T, PropertyError>;
