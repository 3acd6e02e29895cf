use thiserror::Error;

use crate::support::{constraint::ConstraintError, seawater::PropertyError};

use super::GeometryError;

/// Errors that can occur while computing transport quantities.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    /// A fluid property could not be evaluated.
    #[error("property evaluation failed")]
    Property(#[from] PropertyError),

    /// A channel or spacer dimension is not physical.
    #[error("invalid channel geometry")]
    Geometry(#[from] GeometryError),

    /// The flow velocity is negative or not a number.
    #[error("invalid flow velocity")]
    Velocity(#[source] ConstraintError),

    /// The channel diameter or length used by the turbulent Nusselt
    /// correlation is not strictly positive.
    #[error("invalid channel aspect")]
    ChannelAspect(#[source] ConstraintError),
}

/// A result type alias for transport calculations.
pub type TransportResult<T> = Result<T, TransportError>;
