use std::f64::consts::PI;

use uom::si::{
    f64::{Length, Ratio, VolumeRate},
    length::meter,
    ratio::ratio,
    volume_rate::cubic_meter_per_second,
};

use crate::support::bisection::{Bisection, Tolerance};

use super::{
    ChannelSection, FlowEquation, GvfError, SolverConfig, Unknown, friction::friction_slope,
    geometry::Geometry, input::SectionKind,
};

/// Open-channel depth search bracket, m.
const DEPTH_BRACKET: [f64; 2] = [0.001, 40.0];

/// Circular half-angle search bracket, rad.
const ANGLE_BRACKET: [f64; 2] = [0.001, PI];

/// Depth at which the friction slope equals the bed slope.
///
/// The search compares `√Sf` at the trial depth against `√F0`. Since `√Sf`
/// falls as depth grows, a trial value above the target raises the lower
/// bound.
pub(super) fn normal_depth(
    section: &ChannelSection,
    equation: &FlowEquation,
    q: f64,
    bed_slope: f64,
    config: &SolverConfig,
) -> Result<f64, GvfError> {
    let target = bed_slope.sqrt();
    let residual = |geometry: &Geometry| -> Result<f64, GvfError> {
        let measure = friction_slope(equation, geometry, q, config)?.sqrt();
        Ok(target - measure)
    };

    if let SectionKind::Circular { diameter } = section.kind() {
        let solution = Bisection::new(
            ANGLE_BRACKET,
            Tolerance::RelativeResidual {
                reference: target,
                tol: 0.001,
            },
            config.max_iters,
        )
        .solve(|theta| residual(&Geometry::circular_at_angle(diameter, theta)))?;

        let theta = Unknown::NormalDepth.converged(&solution)?;
        return Ok(0.5 * diameter * (1.0 - theta.cos()));
    }

    let solution = Bisection::new(
        DEPTH_BRACKET,
        Tolerance::MidpointShift(0.002),
        config.max_iters,
    )
    .solve(|y| residual(&section.geometry(y, config)?))?;

    Unknown::NormalDepth.converged(&solution)
}

impl ChannelSection {
    /// Uniform-flow depth for `discharge` on a bed of slope `bed_slope`.
    ///
    /// # Errors
    ///
    /// Returns [`GvfError::NonConvergence`] if no depth within the search
    /// bracket balances friction against the bed slope, for example when a
    /// pipe cannot carry `discharge` in open-channel flow.
    pub fn normal_depth(
        &self,
        equation: &FlowEquation,
        discharge: VolumeRate,
        bed_slope: Ratio,
        config: &SolverConfig,
    ) -> Result<Length, GvfError> {
        normal_depth(
            self,
            equation,
            discharge.get::<cubic_meter_per_second>(),
            bed_slope.get::<ratio>(),
            config,
        )
        .map(Length::new::<meter>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{angle::degree, f64::Angle, length::millimeter};

    /// Solves for normal depth on the bed slope that makes `depth` uniform.
    fn round_trip(
        section: &ChannelSection,
        equation: &FlowEquation,
        q: f64,
        depth: f64,
    ) -> f64 {
        let config = SolverConfig::default();
        let geometry = section.geometry(depth, &config).unwrap();
        let bed_slope = friction_slope(equation, &geometry, q, &config).unwrap();
        normal_depth(section, equation, q, bed_slope, &config).unwrap()
    }

    #[test]
    fn rectangular_manning() {
        let section = ChannelSection::rectangular(Length::new::<meter>(2.0)).unwrap();
        let equation = FlowEquation::manning(0.013).unwrap();
        assert_relative_eq!(round_trip(&section, &equation, 1.0, 0.8), 0.8, epsilon = 0.005);
    }

    #[test]
    fn trapezoidal_manning() {
        let section =
            ChannelSection::trapezoidal(Length::new::<meter>(1.5), Angle::new::<degree>(60.0))
                .unwrap();
        let equation = FlowEquation::manning(0.02).unwrap();
        assert_relative_eq!(round_trip(&section, &equation, 2.0, 0.6), 0.6, epsilon = 0.005);
    }

    #[test]
    fn circular_manning() {
        let section = ChannelSection::circular(Length::new::<meter>(0.6)).unwrap();
        let equation = FlowEquation::manning(0.013).unwrap();
        assert_relative_eq!(
            round_trip(&section, &equation, 0.08, 0.25),
            0.25,
            epsilon = 0.005
        );
    }

    #[test]
    fn rectangular_darcy_weisbach() {
        let section = ChannelSection::rectangular(Length::new::<meter>(2.0)).unwrap();
        let equation = FlowEquation::darcy_weisbach(Length::new::<millimeter>(1.0)).unwrap();
        assert_relative_eq!(round_trip(&section, &equation, 1.5, 0.7), 0.7, epsilon = 0.01);
    }

    #[test]
    fn normal_depth_falls_on_steeper_beds() {
        let config = SolverConfig::default();
        let section = ChannelSection::rectangular(Length::new::<meter>(2.0)).unwrap();
        let equation = FlowEquation::manning(0.013).unwrap();
        let q = VolumeRate::new::<cubic_meter_per_second>(1.0);

        let mild = section
            .normal_depth(&equation, q, Ratio::new::<ratio>(0.001), &config)
            .unwrap();
        let steep = section
            .normal_depth(&equation, q, Ratio::new::<ratio>(0.01), &config)
            .unwrap();

        assert!(steep < mild);
        assert_relative_eq!(mild.get::<meter>(), 0.45, epsilon = 0.01);
    }

    #[test]
    fn overloaded_pipe_does_not_converge() {
        let section = ChannelSection::circular(Length::new::<meter>(0.6)).unwrap();
        let equation = FlowEquation::manning(0.013).unwrap();

        let err = normal_depth(&section, &equation, 0.3, 0.001, &SolverConfig::default())
            .unwrap_err();

        assert!(matches!(
            err,
            GvfError::NonConvergence {
                unknown: Unknown::NormalDepth,
                iters: 200,
                ..
            }
        ));
    }
}
