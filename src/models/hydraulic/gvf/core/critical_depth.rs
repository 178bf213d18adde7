use std::f64::consts::PI;

use uom::si::{
    f64::{Length, VolumeRate},
    length::meter,
    volume_rate::cubic_meter_per_second,
};

use crate::support::bisection::{Bisection, Tolerance};

use super::{
    ChannelSection, GRAVITY, GvfError, SolverConfig, Unknown, geometry::Geometry,
    input::SectionKind,
};

/// Upper bound of the trapezoidal critical-depth search, m.
const TRAPEZOIDAL_MAX_DEPTH: f64 = 20.0;

/// Depth at which the Froude number `Q²T/(gA³)` equals one.
pub(super) fn critical_depth(
    section: &ChannelSection,
    q: f64,
    config: &SolverConfig,
) -> Result<f64, GvfError> {
    let target = q * q / GRAVITY;

    match section.kind() {
        SectionKind::Rectangular { width } => Ok((target / (width * width)).cbrt()),
        SectionKind::Trapezoidal { .. } => {
            let solution = Bisection::new(
                [0.0, TRAPEZOIDAL_MAX_DEPTH],
                Tolerance::MidpointShift(0.001),
                config.max_iters,
            )
            .solve(|y| {
                let g = section.geometry(y, config)?;
                Ok::<_, GvfError>(g.area.powi(3) / g.top_width - target)
            })?;
            Unknown::CriticalDepth.converged(&solution)
        }
        SectionKind::Circular { diameter } => {
            let solution =
                Bisection::new([0.0, PI], Tolerance::MidpointShift(0.001), config.max_iters)
                    .solve_infallible(|theta| {
                        let g = Geometry::circular_at_angle(diameter, theta);
                        g.area.powi(3) / g.top_width - target
                    });
            let theta = Unknown::CriticalDepth.converged(&solution)?;
            Ok(0.5 * diameter * (1.0 - theta.cos()))
        }
    }
}

impl ChannelSection {
    /// Critical depth for `discharge`.
    ///
    /// Exact for rectangular sections; trapezoidal and circular sections are
    /// solved by bisection to within about a millimetre (or a milliradian of
    /// half-angle).
    ///
    /// # Errors
    ///
    /// Returns [`GvfError::NonConvergence`] if the search exhausts
    /// `config.max_iters`.
    pub fn critical_depth(
        &self,
        discharge: VolumeRate,
        config: &SolverConfig,
    ) -> Result<Length, GvfError> {
        critical_depth(self, discharge.get::<cubic_meter_per_second>(), config)
            .map(Length::new::<meter>)
    }
}
