//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules. Currently only
//! `membrane` exists, covering channels used in membrane distillation and
//! related desalination processes.
//!
//! # Model structure
//!
//! The [`twine_core::Model`] implementation is a thin adapter that delegates
//! to the relations in [`crate::support`].

pub mod membrane;
