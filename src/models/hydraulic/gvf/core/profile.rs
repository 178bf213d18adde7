use std::slice;

use uom::si::{f64::Length, length::meter};

use super::GvfError;

/// One point of a depth profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Station {
    /// Signed distance from the control section.
    ///
    /// Negative when the profile was marched upstream.
    pub distance: Length,

    /// Flow depth at this station.
    pub depth: Length,
}

/// Whether every station of a profile is finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileStatus {
    /// All depths are finite.
    Complete,

    /// The depth at `step` and possibly later stations is infinite or `NaN`,
    /// typically because the march reached critical depth.
    Singular {
        /// Index of the first non-finite station.
        step: usize,
    },
}

/// Depths at successive stations, starting at the control section.
///
/// A run with `N` steps yields `N + 1` stations. The first is always
/// `(0, Y0)`.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthProfile {
    stations: Vec<Station>,
    status: ProfileStatus,
}

impl DepthProfile {
    pub(super) fn new(stations: Vec<Station>) -> Self {
        let status = stations
            .iter()
            .position(|station| !station.depth.get::<meter>().is_finite())
            .map_or(ProfileStatus::Complete, |step| ProfileStatus::Singular {
                step,
            });
        Self { stations, status }
    }

    /// All stations, control section first.
    #[must_use]
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Number of stations, one more than the step count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns `true` if the profile holds no stations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Iterates over the stations in marching order.
    pub fn iter(&self) -> slice::Iter<'_, Station> {
        self.stations.iter()
    }

    /// The control-section station.
    #[must_use]
    pub fn first(&self) -> Option<&Station> {
        self.stations.first()
    }

    /// The station farthest from the control section.
    #[must_use]
    pub fn last(&self) -> Option<&Station> {
        self.stations.last()
    }

    /// Whether every depth is finite.
    #[must_use]
    pub fn status(&self) -> ProfileStatus {
        self.status
    }

    /// Returns the profile if every depth is finite.
    ///
    /// # Errors
    ///
    /// Returns [`GvfError::NumericSingularity`] naming the first non-finite
    /// station.
    pub fn check_finite(&self) -> Result<&Self, GvfError> {
        match self.status {
            ProfileStatus::Complete => Ok(self),
            ProfileStatus::Singular { step } => Err(GvfError::NumericSingularity {
                step,
                distance: self.stations[step].distance,
            }),
        }
    }
}

impl<'a> IntoIterator for &'a DepthProfile {
    type Item = &'a Station;
    type IntoIter = slice::Iter<'a, Station>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Fixed-step RK4 march of `dY/dX = slope(Y)`.
///
/// Yields `(distance, depth)` pairs in metres: first the starting point at
/// zero distance, then one pair per step. A negative `step` marches toward
/// decreasing distance. Non-finite depths are passed through unchanged.
pub(super) struct DepthMarch<F> {
    slope: F,
    step: f64,
    distance: f64,
    depth: f64,
    phase: Phase,
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Initializing { steps: usize },
    Stepping { remaining: usize },
    Done,
}

impl<F> DepthMarch<F> {
    pub(super) fn new(depth: f64, step: f64, steps: usize, slope: F) -> Self {
        Self {
            slope,
            step,
            distance: 0.0,
            depth,
            phase: Phase::Initializing { steps },
        }
    }
}

impl<F, E> Iterator for DepthMarch<F>
where
    F: FnMut(f64) -> Result<f64, E>,
{
    type Item = Result<(f64, f64), E>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.phase {
            Phase::Initializing { steps } => {
                self.phase = if steps == 0 {
                    Phase::Done
                } else {
                    Phase::Stepping { remaining: steps }
                };
                Some(Ok((self.distance, self.depth)))
            }
            Phase::Stepping { remaining } => {
                let depth = match rk4_step(&mut self.slope, self.depth, self.step) {
                    Ok(depth) => depth,
                    Err(err) => {
                        self.phase = Phase::Done;
                        return Some(Err(err));
                    }
                };
                self.depth = depth;
                self.distance += self.step;
                self.phase = match remaining {
                    1 => Phase::Done,
                    n => Phase::Stepping { remaining: n - 1 },
                };
                log::trace!("x={:.3} m, y={:.6} m", self.distance, depth);
                Some(Ok((self.distance, depth)))
            }
            Phase::Done => None,
        }
    }
}

/// Advances `y` by one classical RK4 step of length `dx`.
fn rk4_step<E>(
    slope: &mut impl FnMut(f64) -> Result<f64, E>,
    y: f64,
    dx: f64,
) -> Result<f64, E> {
    let a1 = slope(y)?;
    let a2 = slope(y + 0.5 * a1 * dx)?;
    let a3 = slope(y + 0.5 * a2 * dx)?;
    let a4 = slope(y + a3 * dx)?;
    Ok(y + dx / 6.0 * (a1 + 2.0 * a2 + 2.0 * a3 + a4))
}
