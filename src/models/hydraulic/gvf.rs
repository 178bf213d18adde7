//! Steady gradually varied flow (GVF) profiles.
//!
//! [`NoLateralFlow`] is the [`twine_core::Model`] for channels without
//! lateral inflow or outflow. The computation lives in the internal `core`
//! module; this module re-exports its inputs, outputs and errors.
//!
//! # Example
//!
//! ```
//! use gvf_models::models::hydraulic::gvf::{
//!     ChannelSection, Direction, FlowEquation, NoLateralFlow, RunParameters,
//! };
//! use gvf_models::support::constraint::StrictlyPositive;
//! use twine_core::Model;
//! use uom::si::{
//!     f64::{Length, Ratio, VolumeRate},
//!     length::{meter, millimeter},
//!     ratio::ratio,
//!     volume_rate::cubic_meter_per_second,
//! };
//!
//! let params = RunParameters {
//!     section: ChannelSection::rectangular(Length::new::<meter>(2.0))?,
//!     equation: FlowEquation::manning(0.013)?,
//!     discharge: StrictlyPositive::new(VolumeRate::new::<cubic_meter_per_second>(1.0))?,
//!     bed_slope: StrictlyPositive::new(Ratio::new::<ratio>(0.001))?,
//!     control_depth: StrictlyPositive::new(Length::new::<meter>(1.0))?,
//!     direction: Direction::Upstream,
//!     step_length: StrictlyPositive::new(Length::new::<meter>(20.0))?,
//!     steps: StrictlyPositive::new(4)?,
//! };
//!
//! let results = NoLateralFlow::default().call(&params)?;
//!
//! assert_eq!(results.profile.len(), 5);
//! assert!(results.critical_depth < results.normal_depth);
//! let last = results.profile.last().unwrap();
//! assert!(last.distance.get::<meter>() < 0.0);
//! assert!(last.depth.get::<millimeter>() < 1000.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod core;

pub use self::core::{
    ChannelSection, ChannelShape, DepthProfile, Direction, EquationKind, FlowEquation,
    FlowGeometry, GvfError, GvfResults, ProfileStatus, RunParameters, SolverConfig, Station,
    Unknown, run_no_lateral_flow,
};

use twine_core::Model;

/// GVF model for a channel without lateral inflow or outflow.
///
/// Computes the critical depth, the normal depth, and the depth profile
/// marching from the control section. Solver iteration caps come from the
/// wrapped [`SolverConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLateralFlow {
    /// Solver configuration shared by every bisection in the run.
    pub config: SolverConfig,
}

impl NoLateralFlow {
    /// Creates the model with an explicit solver configuration.
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }
}

impl Model for NoLateralFlow {
    type Input = RunParameters;
    type Output = GvfResults;
    type Error = GvfError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        run_no_lateral_flow(input, &self.config)
    }
}
