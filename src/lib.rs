//! # GVF Models
//!
//! Steady gradually varied flow (GVF) models for open channels, built for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Given a channel cross-section, bed slope, discharge and the depth at a
//! control section, the models compute the water-surface profile along the
//! channel with a fixed-step fourth-order Runge-Kutta scheme.
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations and their inputs/outputs.
//! - [`support`]: Numeric utilities shared by the models (constraints, bisection).
//!
//! ## Units
//!
//! Public inputs and outputs are [`uom`] quantities, so callers pick their own
//! display units. Internally every calculation runs in SI base units.

pub mod models;
pub mod support;
