use std::fmt;

use thiserror::Error;
use uom::si::f64::Length;

use crate::support::{
    bisection::{Solution, Status},
    constraint::ConstraintError,
};

/// Errors that can occur during a GVF run.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum GvfError {
    /// A flow-equation selector outside `{1, 2}`.
    #[error("invalid flow equation selector: {0}")]
    InvalidEquationKind(u8),

    /// A channel-shape selector outside `{1, 2, 3}`.
    #[error("invalid channel shape selector: {0}")]
    InvalidShapeKind(u8),

    /// A bisection reached the iteration limit without meeting its tolerance.
    #[error("{unknown} search did not converge after {iters} iterations: residual={residual:?}")]
    NonConvergence {
        /// Quantity being solved for.
        unknown: Unknown,

        /// Iteration count performed by the solver.
        iters: usize,

        /// Residual at the last evaluated midpoint.
        residual: f64,
    },

    /// A depth profile contains a non-finite station.
    ///
    /// Produced by [`DepthProfile::check_finite`](super::DepthProfile::check_finite);
    /// a run itself reports the condition through its profile status.
    #[error("depth profile is non-finite from step {step} (distance={distance:?})")]
    NumericSingularity {
        /// Index of the first non-finite station.
        step: usize,

        /// Distance of that station from the control section.
        distance: Length,
    },

    /// An input value was outside its physical range.
    #[error("invalid input")]
    Constraint(#[from] ConstraintError),
}

/// The quantity a bisection solves for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unknown {
    /// Half-angle subtended by the free surface in a circular section.
    HalfAngle,
    /// Critical depth.
    CriticalDepth,
    /// Normal (uniform-flow) depth.
    NormalDepth,
    /// Darcy-Weisbach friction factor.
    FrictionFactor,
}

impl fmt::Display for Unknown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Unknown::HalfAngle => "half-angle",
            Unknown::CriticalDepth => "critical depth",
            Unknown::NormalDepth => "normal depth",
            Unknown::FrictionFactor => "friction factor",
        };
        f.write_str(name)
    }
}

impl Unknown {
    /// Returns the solved value, or a [`GvfError::NonConvergence`] for this
    /// unknown if the bisection ran out of iterations.
    pub(super) fn converged(self, solution: &Solution) -> Result<f64, GvfError> {
        match solution.status {
            Status::Converged => Ok(solution.x),
            Status::MaxIters => Err(GvfError::NonConvergence {
                unknown: self,
                iters: solution.iters,
                residual: solution.residual,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_iters_becomes_non_convergence() {
        let solution = Solution {
            x: 0.4,
            residual: -2.5,
            iters: 200,
            status: Status::MaxIters,
        };

        let err = Unknown::NormalDepth.converged(&solution).unwrap_err();
        assert_eq!(
            err,
            GvfError::NonConvergence {
                unknown: Unknown::NormalDepth,
                iters: 200,
                residual: -2.5,
            }
        );
        assert!(err.to_string().starts_with("normal depth search"));
    }

    #[test]
    fn converged_passes_value_through() {
        let solution = Solution {
            x: 0.4,
            residual: 1e-9,
            iters: 12,
            status: Status::Converged,
        };
        assert_eq!(Unknown::HalfAngle.converged(&solution), Ok(0.4));
    }
}
