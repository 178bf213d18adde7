use std::f64::consts::PI;

use uom::si::{
    angle::radian,
    area::square_meter,
    f64::{Angle, Area, Length},
    length::meter,
};

use crate::support::bisection::{Bisection, Tolerance};

use super::{ChannelSection, GvfError, SolverConfig, Unknown, input::SectionKind};

/// Hydraulic properties of the flow area at one depth, in SI base units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Geometry {
    pub(super) area: f64,
    pub(super) hydraulic_radius: f64,
    pub(super) top_width: f64,
    /// Half-angle subtended by the free surface, circular sections only.
    pub(super) half_angle: Option<f64>,
}

impl Geometry {
    /// Circular segment geometry for a known half-angle `theta`.
    pub(super) fn circular_at_angle(diameter: f64, theta: f64) -> Self {
        let perimeter = diameter * theta;
        let area = 0.25 * diameter * diameter * (theta - 0.5 * (2.0 * theta).sin());
        Self {
            area,
            hydraulic_radius: area / perimeter,
            top_width: diameter * theta.sin(),
            half_angle: Some(theta),
        }
    }

    fn rectangular(width: f64, depth: f64) -> Self {
        let area = width * depth;
        Self {
            area,
            hydraulic_radius: area / (width + 2.0 * depth),
            top_width: width,
            half_angle: None,
        }
    }

    fn trapezoidal(bottom_width: f64, side_angle: f64, depth: f64) -> Self {
        let area = depth * (bottom_width + depth / side_angle.tan());
        Self {
            area,
            hydraulic_radius: area / (bottom_width + 2.0 * depth / side_angle.sin()),
            top_width: bottom_width + 2.0 * depth / side_angle.tan(),
            half_angle: None,
        }
    }
}

impl ChannelSection {
    /// Evaluates the section geometry at `depth` metres.
    ///
    /// Circular sections first invert `y = D/2 (1 - cos θ)` for the
    /// half-angle by bisection.
    pub(super) fn geometry(&self, depth: f64, config: &SolverConfig) -> Result<Geometry, GvfError> {
        match self.kind() {
            SectionKind::Rectangular { width } => Ok(Geometry::rectangular(width, depth)),
            SectionKind::Trapezoidal {
                bottom_width,
                side_angle,
            } => Ok(Geometry::trapezoidal(bottom_width, side_angle, depth)),
            SectionKind::Circular { diameter } => {
                let solution =
                    Bisection::new([0.0, PI], Tolerance::MidpointShift(0.001), config.max_iters)
                        .solve_infallible(|theta| 1.0 - 2.0 * depth / diameter - theta.cos());
                let theta = Unknown::HalfAngle.converged(&solution)?;
                Ok(Geometry::circular_at_angle(diameter, theta))
            }
        }
    }

    /// Evaluates the flow area, hydraulic radius and top width at `depth`.
    ///
    /// `depth` must lie strictly between zero and the section's physical
    /// maximum (the diameter, for a circular section); outside that range the
    /// results are meaningless.
    ///
    /// # Errors
    ///
    /// Returns [`GvfError::NonConvergence`] if the circular half-angle search
    /// exhausts `config.max_iters`.
    pub fn flow_geometry(
        &self,
        depth: Length,
        config: &SolverConfig,
    ) -> Result<FlowGeometry, GvfError> {
        self.geometry(depth.get::<meter>(), config)
            .map(FlowGeometry::from)
    }
}

/// Flow area, hydraulic radius and top width at one depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowGeometry {
    /// Wetted cross-sectional area.
    pub area: Area,

    /// Area divided by wetted perimeter.
    pub hydraulic_radius: Length,

    /// Free-surface width.
    pub top_width: Length,

    /// Half-angle subtended by the free surface at the pipe centre.
    ///
    /// Only present for circular sections.
    pub half_angle: Option<Angle>,
}

impl From<Geometry> for FlowGeometry {
    fn from(geometry: Geometry) -> Self {
        Self {
            area: Area::new::<square_meter>(geometry.area),
            hydraulic_radius: Length::new::<meter>(geometry.hydraulic_radius),
            top_width: Length::new::<meter>(geometry.top_width),
            half_angle: geometry.half_angle.map(Angle::new::<radian>),
        }
    }
}

impl From<&FlowGeometry> for Geometry {
    fn from(geometry: &FlowGeometry) -> Self {
        Self {
            area: geometry.area.get::<square_meter>(),
            hydraulic_radius: geometry.hydraulic_radius.get::<meter>(),
            top_width: geometry.top_width.get::<meter>(),
            half_angle: geometry.half_angle.map(|angle| angle.get::<radian>()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{angle::degree, length::millimeter};

    #[test]
    fn rectangular() {
        let section = ChannelSection::rectangular(Length::new::<meter>(2.0)).unwrap();
        let g = section.geometry(0.5, &SolverConfig::default()).unwrap();

        assert_relative_eq!(g.area, 1.0);
        assert_relative_eq!(g.hydraulic_radius, 1.0 / 3.0);
        assert_relative_eq!(g.top_width, 2.0);
        assert_eq!(g.half_angle, None);
    }

    #[test]
    fn trapezoidal_at_45_degrees() {
        let section =
            ChannelSection::trapezoidal(Length::new::<meter>(1.0), Angle::new::<degree>(45.0))
                .unwrap();
        let g = section.geometry(1.0, &SolverConfig::default()).unwrap();

        // Unit side slopes: A = y(B + y), T = B + 2y, P = B + 2√2·y.
        assert_relative_eq!(g.area, 2.0, epsilon = 1e-12);
        assert_relative_eq!(g.top_width, 3.0, epsilon = 1e-12);
        assert_relative_eq!(
            g.hydraulic_radius,
            2.0 / (1.0 + 2.0 * 2.0_f64.sqrt()),
            epsilon = 1e-12
        );
    }

    #[test]
    fn circular_half_full() {
        let diameter = 0.6;
        let section = ChannelSection::circular(Length::new::<meter>(diameter)).unwrap();
        let g = section.geometry(0.3, &SolverConfig::default()).unwrap();

        let theta = g.half_angle.expect("circular sections report a half-angle");
        assert_relative_eq!(theta, PI / 2.0, epsilon = 2e-3);
        assert_relative_eq!(g.top_width, diameter, epsilon = 1e-5);
        assert_relative_eq!(g.area, PI * 0.3 * 0.3 / 2.0, epsilon = 1e-3);
        assert_relative_eq!(g.hydraulic_radius, diameter / 4.0, epsilon = 1e-3);
    }

    #[test]
    fn circular_angle_matches_depth() {
        let diameter = 0.6;
        let section = ChannelSection::circular(Length::new::<meter>(diameter)).unwrap();
        let depth = 0.12;
        let g = section.geometry(depth, &SolverConfig::default()).unwrap();

        let theta = g.half_angle.unwrap();
        assert_relative_eq!(
            0.5 * diameter * (1.0 - theta.cos()),
            depth,
            epsilon = 1e-3
        );
    }

    #[test]
    fn public_geometry_carries_units() {
        let section = ChannelSection::circular(Length::new::<millimeter>(600.0)).unwrap();
        let g = section
            .flow_geometry(Length::new::<millimeter>(300.0), &SolverConfig::default())
            .unwrap();

        assert_relative_eq!(g.top_width.get::<millimeter>(), 600.0, epsilon = 1e-2);
        let theta = g.half_angle.unwrap().get::<degree>();
        assert_relative_eq!(theta, 90.0, epsilon = 0.1);
    }

    #[test]
    fn tight_iteration_cap_reports_half_angle() {
        let section = ChannelSection::circular(Length::new::<meter>(0.6)).unwrap();
        let err = section
            .geometry(0.1, &SolverConfig { max_iters: 2 })
            .unwrap_err();

        assert!(matches!(
            err,
            GvfError::NonConvergence {
                unknown: Unknown::HalfAngle,
                iters: 2,
                ..
            }
        ));
    }
}
