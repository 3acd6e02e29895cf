//! Dimensionless transport numbers and spacer-filled channel geometry.
//!
//! This layer consumes [`seawater`](crate::support::seawater) properties and
//! never feeds back into them:
//!
//! ```text
//! ρ, μ ──► Re ──► regime ──┐
//! cp, μ, k ──► Pr ─────────┴─► Nu ──► h = Nu·k/d_h
//! ```
//!
//! The flow regime is decided once per batch from the *mean* Reynolds
//! number, and every point of the batch uses the same Nusselt correlation.
//! A temperature sweep through one channel therefore never switches branch
//! halfway.
//!
//! Spacer geometry ([`SpacerGeometry`], [`channel_hydraulic_diameter`],
//! [`spacer_correction_factor`]) is independent of the fluid state.
//!
//! # Example
//!
//! ```
//! use seawater_models::support::transport::{self, FlowRegime};
//!
//! let d_h = transport::channel_hydraulic_diameter(0.8, 0.001, 0.0005).unwrap();
//! let re = transport::reynolds_number([30.0, 40.0, 50.0], 3.5, 0.1, d_h).unwrap();
//! assert_eq!(FlowRegime::classify(&re), FlowRegime::Laminar);
//!
//! let h = transport::heat_transfer_coefficient([30.0, 40.0, 50.0], 3.5, 0.1, d_h).unwrap();
//! assert!(h.iter().all(|h| *h > 0.0));
//! ```

mod dimensionless;
mod error;
mod regime;
mod spacer;

pub use dimensionless::{
    ChannelAspect, FlowProfile, Transport, heat_transfer_coefficient, nusselt_number,
    prandtl_number, reynolds_number,
};
pub use error::{TransportError, TransportResult};
pub use regime::{FlowRegime, LAMINAR_REYNOLDS_LIMIT};
pub use spacer::{
    GeometryError, SpacerGeometry, channel_hydraulic_diameter, spacer_correction_factor,
};
