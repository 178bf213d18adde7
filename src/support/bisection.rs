//! Bracketed bisection with a selectable stopping rule.
//!
//! Every iteration evaluates the residual at the bracket midpoint and keeps
//! the half that still contains the root:
//!
//! - a negative residual means the root lies above the midpoint, so the lower
//!   bound moves up;
//! - any other residual (zero, positive, or `NaN`) moves the upper bound down.
//!
//! Callers therefore arrange their residual to increase across the bracket.
//! The bracket endpoints themselves are never evaluated, which matters for
//! residuals that divide by zero at an endpoint.
//!
//! # Example
//!
//! ```
//! use gvf_models::support::bisection::{Bisection, Status, Tolerance};
//!
//! let solution = Bisection::new([0.0, 2.0], Tolerance::MidpointShift(1e-9), 100)
//!     .solve_infallible(|x| x * x - 2.0);
//!
//! assert_eq!(solution.status, Status::Converged);
//! assert!((solution.x - 2.0_f64.sqrt()).abs() < 1e-8);
//! ```

/// Stopping rule for a [`Bisection`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tolerance {
    /// Stop once the next midpoint moves less than this amount from the
    /// current one. The solution is the current (last evaluated) midpoint.
    MidpointShift(f64),

    /// Stop once the next midpoint moves less than this fraction of the
    /// current one. The solution is the next midpoint.
    RelativeMidpointShift(f64),

    /// Stop once `|residual| / reference` falls below `tol`.
    /// The solution is the midpoint that produced that residual.
    RelativeResidual {
        /// Scale the residual is measured against.
        reference: f64,
        /// Relative tolerance.
        tol: f64,
    },
}

/// Outcome of a bisection run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The stopping rule was met.
    Converged,
    /// The iteration cap was reached first.
    MaxIters,
}

/// Result of a bisection run.
///
/// On [`Status::MaxIters`] the fields describe the last midpoint evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Solution value selected by the stopping rule.
    pub x: f64,
    /// Residual at the last evaluated midpoint.
    pub residual: f64,
    /// Iterations performed.
    pub iters: usize,
    /// Why the run stopped.
    pub status: Status,
}

/// A bracketed bisection search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bisection {
    bracket: [f64; 2],
    tolerance: Tolerance,
    max_iters: usize,
}

impl Bisection {
    /// Creates a search over `bracket`, given as `[lower, upper]`.
    #[must_use]
    pub fn new(bracket: [f64; 2], tolerance: Tolerance, max_iters: usize) -> Self {
        Self {
            bracket,
            tolerance,
            max_iters,
        }
    }

    /// Runs the search with a fallible residual.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `residual`.
    /// Hitting the iteration cap is not an error; check [`Solution::status`].
    pub fn solve<E>(
        &self,
        mut residual: impl FnMut(f64) -> Result<f64, E>,
    ) -> Result<Solution, E> {
        let [mut lower, mut upper] = self.bracket;
        let mut mid = 0.5 * (lower + upper);
        let mut r = f64::NAN;

        for iter in 1..=self.max_iters {
            mid = 0.5 * (lower + upper);
            r = residual(mid)?;

            if r < 0.0 {
                lower = mid;
            } else {
                upper = mid;
            }
            let next = 0.5 * (lower + upper);

            let converged = match self.tolerance {
                Tolerance::MidpointShift(tol) => ((next - mid).abs() < tol).then_some(mid),
                Tolerance::RelativeMidpointShift(tol) => {
                    (((next - mid) / mid).abs() < tol).then_some(next)
                }
                Tolerance::RelativeResidual { reference, tol } => {
                    ((r / reference).abs() < tol).then_some(mid)
                }
            };

            if let Some(x) = converged {
                return Ok(Solution {
                    x,
                    residual: r,
                    iters: iter,
                    status: Status::Converged,
                });
            }
        }

        log::warn!(
            "bisection stopped after {} iterations, bracket [{lower}, {upper}], residual {r}",
            self.max_iters
        );

        Ok(Solution {
            x: mid,
            residual: r,
            iters: self.max_iters,
            status: Status::MaxIters,
        })
    }

    /// Runs the search with a residual that cannot fail.
    #[must_use]
    pub fn solve_infallible(&self, mut residual: impl FnMut(f64) -> f64) -> Solution {
        match self.solve(|x| Ok::<_, std::convert::Infallible>(residual(x))) {
            Ok(solution) => solution,
            Err(never) => match never {},
        }
    }
}
