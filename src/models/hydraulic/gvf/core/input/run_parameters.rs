use uom::si::{
    f64::{Length, Ratio, VolumeRate},
    length::meter,
    ratio::ratio,
    volume_rate::cubic_meter_per_second,
};

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::{ChannelSection, Direction, FlowEquation};

/// Inputs for a GVF run without lateral flow.
///
/// Range checks happen when each field is built, so a `RunParameters` value
/// is always physically admissible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunParameters {
    /// Channel cross-section.
    pub section: ChannelSection,

    /// Friction law and its coefficient.
    pub equation: FlowEquation,

    /// Steady discharge.
    pub discharge: Constrained<VolumeRate, StrictlyPositive>,

    /// Longitudinal bed slope.
    pub bed_slope: Constrained<Ratio, StrictlyPositive>,

    /// Depth at the control section, where the march starts.
    pub control_depth: Constrained<Length, StrictlyPositive>,

    /// Direction of the march away from the control section.
    pub direction: Direction,

    /// Distance between successive stations.
    pub step_length: Constrained<Length, StrictlyPositive>,

    /// Number of integration steps.
    ///
    /// The profile holds one more station than this, the first being the
    /// control section itself.
    pub steps: Constrained<usize, StrictlyPositive>,
}

impl RunParameters {
    pub(in crate::models::hydraulic::gvf::core) fn discharge_si(&self) -> f64 {
        self.discharge.as_ref().get::<cubic_meter_per_second>()
    }

    pub(in crate::models::hydraulic::gvf::core) fn bed_slope_si(&self) -> f64 {
        self.bed_slope.as_ref().get::<ratio>()
    }

    pub(in crate::models::hydraulic::gvf::core) fn control_depth_si(&self) -> f64 {
        self.control_depth.as_ref().get::<meter>()
    }

    pub(in crate::models::hydraulic::gvf::core) fn step_length_si(&self) -> f64 {
        self.step_length.as_ref().get::<meter>()
    }

    pub(in crate::models::hydraulic::gvf::core) fn steps(&self) -> usize {
        *self.steps.as_ref()
    }
}
