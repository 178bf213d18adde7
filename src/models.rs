//! Public Twine models.
//!
//! # Organization
//!
//! Models are grouped by domain (currently only `hydraulic`).
//!
//! # Model structure
//!
//! Each model keeps its computation in an internal `core` submodule.
//! The [`twine_core::Model`] implementation is a thin adapter that forwards to
//! the core entry point, and the core's input/output types are re-exported
//! from the model module.

pub mod hydraulic;
