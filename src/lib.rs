//! # Seawater Models
//!
//! Seawater property correlations and membrane channel transport models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: The property library and transport relations the models are
//!   built from.
//!
//! ## Layers
//!
//! Data flows in one direction:
//!
//! 1. [`support::seawater`] evaluates empirical property correlations of
//!    temperature and salinity (density, viscosity, conductivity, ...).
//! 2. [`support::transport`] turns those properties into Reynolds, Prandtl and
//!    Nusselt numbers and a convective heat transfer coefficient, and provides
//!    the spacer geometry relations.
//! 3. [`models::membrane`] wraps the pipeline for a spacer-filled channel as a
//!    single [`twine_core::Model`] call.
//!
//! Every function is pure. Inputs are scalars or vectors ([`support::series::Series`])
//! and outputs are always vectors with the broadcast length.
//!
//! ## Example
//!
//! ```
//! use seawater_models::support::{seawater, series::Series};
//!
//! let temperatures = Series::sweep(20.0, 80.0, 20.0).unwrap();
//! let rho = seawater::density(temperatures, 3.5).unwrap();
//! assert_eq!(rho.len(), 4);
//! ```

pub mod models;
pub mod support;
