//! Open-channel hydraulics models.

pub mod gvf;
