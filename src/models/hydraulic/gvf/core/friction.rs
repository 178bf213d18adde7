use uom::si::{
    f64::{Ratio, VolumeRate},
    ratio::ratio,
    volume_rate::cubic_meter_per_second,
};

use crate::support::bisection::{Bisection, Tolerance};

use super::{
    FlowEquation, FlowGeometry, GRAVITY, GvfError, KINEMATIC_VISCOSITY, SolverConfig, Unknown,
    geometry::Geometry,
};

/// Friction slope `Sf` for discharge `q` through `geometry`.
pub(super) fn friction_slope(
    equation: &FlowEquation,
    geometry: &Geometry,
    q: f64,
    config: &SolverConfig,
) -> Result<f64, GvfError> {
    let area = geometry.area;
    let radius = geometry.hydraulic_radius;

    match equation {
        FlowEquation::Manning { .. } => {
            let n = equation.coefficient();
            Ok((n * q / area).powi(2) * radius.powf(-4.0 / 3.0))
        }
        FlowEquation::DarcyWeisbach { .. } => {
            let velocity = q / area;
            let f = friction_factor(radius, equation.coefficient(), velocity, config)?;
            Ok(f * q * q / (8.0 * GRAVITY * area * area * radius))
        }
    }
}

/// Darcy friction factor from the Colebrook-White relation.
///
/// Solves `1/√f = -0.88 ln(ks/(14.8 R) + 2.51 ν/(4 R V √f))` for
/// `f ∈ (0, 0.5)`, stopping once the midpoint moves less than 0.5%.
pub(super) fn friction_factor(
    hydraulic_radius: f64,
    roughness: f64,
    velocity: f64,
    config: &SolverConfig,
) -> Result<f64, GvfError> {
    let solution = Bisection::new(
        [0.0, 0.5],
        Tolerance::RelativeMidpointShift(0.005),
        config.max_iters,
    )
    .solve_infallible(|f| {
        // Only W < 0 lowers the upper bound; zero and NaN raise the lower one.
        let w = colebrook_residual(hydraulic_radius, roughness, velocity, f);
        if w < 0.0 || w > 0.0 { -w } else { -1.0 }
    });

    Unknown::FrictionFactor.converged(&solution)
}

/// `1/√f + 0.88 ln(X)`, which falls as `f` grows and is zero at the root.
fn colebrook_residual(hydraulic_radius: f64, roughness: f64, velocity: f64, f: f64) -> f64 {
    let sqrt_f = f.sqrt();
    let x = roughness / (14.8 * hydraulic_radius)
        + 2.51 * KINEMATIC_VISCOSITY / (4.0 * hydraulic_radius * velocity * sqrt_f);
    1.0 / sqrt_f + 0.88 * x.ln()
}

impl FlowEquation {
    /// Friction slope for `discharge` flowing through `geometry`.
    ///
    /// # Errors
    ///
    /// Returns [`GvfError::NonConvergence`] if the Darcy-Weisbach friction
    /// factor search exhausts `config.max_iters`.
    pub fn friction_slope(
        &self,
        geometry: &FlowGeometry,
        discharge: VolumeRate,
        config: &SolverConfig,
    ) -> Result<Ratio, GvfError> {
        let sf = friction_slope(
            self,
            &Geometry::from(geometry),
            discharge.get::<cubic_meter_per_second>(),
            config,
        )?;
        Ok(Ratio::new::<ratio>(sf))
    }
}
