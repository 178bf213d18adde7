//! Numerical core for steady gradually varied flow.
//!
//! The run computes critical and normal depth once for reporting, then
//! marches the depth profile away from the control section with a
//! fixed-step RK4 scheme. Every RK4 stage evaluates the section geometry and
//! the friction slope at the trial depth.
//!
//! All internal arithmetic is in SI base units (m, m², m³/s, radians).

mod config;
mod critical_depth;
mod error;
mod friction;
mod geometry;
mod input;
mod normal_depth;
mod profile;
mod results;

#[cfg(test)]
mod test_support;

pub use config::SolverConfig;
pub use error::{GvfError, Unknown};
pub use geometry::FlowGeometry;
pub use input::{ChannelSection, ChannelShape, Direction, EquationKind, FlowEquation, RunParameters};
pub use profile::{DepthProfile, ProfileStatus, Station};
pub use results::GvfResults;

use uom::si::{f64::Length, length::meter};

use critical_depth::critical_depth;
use friction::friction_slope;
use geometry::Geometry;
use normal_depth::normal_depth;
use profile::DepthMarch;

/// Gravitational acceleration, m/s².
///
/// The trailing digits match the reference tables this model is checked
/// against and must not be rounded.
const GRAVITY: f64 = 9.810_000_1;

/// Kinematic viscosity of water, m²/s.
const KINEMATIC_VISCOSITY: f64 = 1.307e-6;

/// Computes a GVF profile for a channel without lateral inflow or outflow.
///
/// Returns the critical depth, the normal depth, and the depth profile
/// starting at the control section. A profile that crosses critical depth
/// turns non-finite; it is still returned in full, with
/// [`ProfileStatus::Singular`] marking the first bad station.
///
/// # Errors
///
/// Returns [`GvfError::NonConvergence`] if any bisection hits the iteration
/// cap in `config`, for example when the discharge exceeds the section's
/// uniform-flow capacity so that no normal depth exists.
pub fn run_no_lateral_flow(
    params: &RunParameters,
    config: &SolverConfig,
) -> Result<GvfResults, GvfError> {
    let section = &params.section;
    let equation = &params.equation;
    let q = params.discharge_si();
    let bed_slope = params.bed_slope_si();

    let yc = critical_depth(section, q, config)?;
    log::debug!("critical depth {:.1} mm", yc * 1000.0);

    let yn = normal_depth(section, equation, q, bed_slope, config)?;
    log::debug!("normal depth {:.1} mm", yn * 1000.0);

    let step = params.direction.signed(params.step_length_si());
    let slope = |y: f64| -> Result<f64, GvfError> {
        let geometry = section.geometry(y, config)?;
        let sf = friction_slope(equation, &geometry, q, config)?;
        Ok(water_surface_slope(bed_slope, sf, q, &geometry))
    };

    let stations = DepthMarch::new(params.control_depth_si(), step, params.steps(), slope)
        .map(|station| {
            station.map(|(distance, depth)| Station {
                distance: Length::new::<meter>(distance),
                depth: Length::new::<meter>(depth),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let profile = DepthProfile::new(stations);
    if let ProfileStatus::Singular { step } = profile.status() {
        log::warn!(
            "depth profile became non-finite at step {step}; the march crossed critical depth"
        );
    }

    Ok(GvfResults {
        critical_depth: Length::new::<meter>(yc),
        normal_depth: Length::new::<meter>(yn),
        profile,
    })
}

/// Water-surface slope `dY/dX` for steady flow without lateral inflow.
///
/// The denominator `1 - Fr²` vanishes at critical depth; no guard is applied.
fn water_surface_slope(bed_slope: f64, friction_slope: f64, q: f64, geometry: &Geometry) -> f64 {
    let froude_squared = q * q * geometry.top_width / (GRAVITY * geometry.area.powi(3));
    (bed_slope - friction_slope) / (1.0 - froude_squared)
}
