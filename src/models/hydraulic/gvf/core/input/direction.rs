/// Direction in which the profile is marched from the control section.
///
/// Subcritical profiles are controlled downstream and marched upstream;
/// supercritical profiles are controlled upstream and marched downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward decreasing distance. Stations carry negative distances.
    Upstream,
    /// Toward increasing distance.
    Downstream,
}

impl Direction {
    /// Applies this direction's sign to a step magnitude.
    pub(in super::super) fn signed(self, step: f64) -> f64 {
        match self {
            Direction::Upstream => -step,
            Direction::Downstream => step,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_negates_step() {
        assert_eq!(Direction::Upstream.signed(10.0), -10.0);
        assert_eq!(Direction::Downstream.signed(10.0), 10.0);
    }
}
