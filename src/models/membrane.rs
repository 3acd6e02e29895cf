//! Membrane process models.
//!
//! This module contains models for membrane distillation channels.

pub mod channel;
