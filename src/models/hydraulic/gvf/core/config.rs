/// Solver configuration shared by every bisection in a GVF run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Maximum iteration count for each bisection solve.
    ///
    /// Half-angle, friction-factor, critical-depth and normal-depth searches
    /// all report [`GvfError::NonConvergence`](super::GvfError::NonConvergence)
    /// once this many midpoints have been evaluated.
    pub max_iters: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { max_iters: 200 }
    }
}
