use std::{f64::consts::FRAC_PI_2, fmt};

use uom::si::{
    angle::radian,
    f64::{Angle, Length},
    length::meter,
};

use crate::models::hydraulic::gvf::core::GvfError;
use crate::support::constraint::{ConstraintError, ConstraintResult, StrictlyPositive};

/// Cross-section shape of a prismatic channel.
///
/// Parsed from the menu codes `1` (circular), `2` (rectangular) and
/// `3` (trapezoidal).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelShape {
    /// Circular conduit flowing partly full.
    Circular,
    /// Rectangular channel.
    Rectangular,
    /// Trapezoidal channel with symmetric side slopes.
    Trapezoidal,
}

impl TryFrom<u8> for ChannelShape {
    type Error = GvfError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(ChannelShape::Circular),
            2 => Ok(ChannelShape::Rectangular),
            3 => Ok(ChannelShape::Trapezoidal),
            other => Err(GvfError::InvalidShapeKind(other)),
        }
    }
}

impl fmt::Display for ChannelShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChannelShape::Circular => "circular",
            ChannelShape::Rectangular => "rectangular",
            ChannelShape::Trapezoidal => "trapezoidal",
        })
    }
}

/// Dimensions of a prismatic channel cross-section.
///
/// Each shape carries only the dimensions it needs. Values are validated
/// once, when the section is built, and stored in SI base units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelSection {
    kind: SectionKind,
}

/// Validated section dimensions in metres and radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(in crate::models::hydraulic::gvf::core) enum SectionKind {
    Circular { diameter: f64 },
    Rectangular { width: f64 },
    Trapezoidal { bottom_width: f64, side_angle: f64 },
}

impl ChannelSection {
    /// A circular conduit flowing partly full.
    ///
    /// # Errors
    ///
    /// Returns an error if `diameter` is not strictly positive.
    pub fn circular(diameter: Length) -> ConstraintResult<Self> {
        let diameter = StrictlyPositive::new(diameter)?.into_inner();
        Ok(Self {
            kind: SectionKind::Circular {
                diameter: diameter.get::<meter>(),
            },
        })
    }

    /// A rectangular channel.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not strictly positive.
    pub fn rectangular(width: Length) -> ConstraintResult<Self> {
        let width = StrictlyPositive::new(width)?.into_inner();
        Ok(Self {
            kind: SectionKind::Rectangular {
                width: width.get::<meter>(),
            },
        })
    }

    /// A trapezoidal channel with symmetric side slopes.
    ///
    /// `side_angle` is measured from the horizontal and must lie strictly
    /// between 0° and 90°.
    ///
    /// # Errors
    ///
    /// Returns an error if `bottom_width` is not strictly positive or the
    /// side angle is out of range.
    pub fn trapezoidal(bottom_width: Length, side_angle: Angle) -> ConstraintResult<Self> {
        let bottom_width = StrictlyPositive::new(bottom_width)?.into_inner();

        let side_angle = side_angle.get::<radian>();
        if side_angle.is_nan() {
            return Err(ConstraintError::NotANumber);
        }
        if side_angle <= 0.0 {
            return Err(ConstraintError::BelowMinimum);
        }
        if side_angle >= FRAC_PI_2 {
            return Err(ConstraintError::AboveMaximum);
        }

        Ok(Self {
            kind: SectionKind::Trapezoidal {
                bottom_width: bottom_width.get::<meter>(),
                side_angle,
            },
        })
    }

    /// Returns the shape tag of this section.
    #[must_use]
    pub fn shape(&self) -> ChannelShape {
        match self.kind {
            SectionKind::Circular { .. } => ChannelShape::Circular,
            SectionKind::Rectangular { .. } => ChannelShape::Rectangular,
            SectionKind::Trapezoidal { .. } => ChannelShape::Trapezoidal,
        }
    }

    pub(in crate::models::hydraulic::gvf::core) fn kind(&self) -> SectionKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{angle::degree, length::millimeter};

    #[test]
    fn shape_codes() {
        assert_eq!(ChannelShape::try_from(1), Ok(ChannelShape::Circular));
        assert_eq!(ChannelShape::try_from(2), Ok(ChannelShape::Rectangular));
        assert_eq!(ChannelShape::try_from(3), Ok(ChannelShape::Trapezoidal));
        assert_eq!(ChannelShape::try_from(0), Err(GvfError::InvalidShapeKind(0)));
        assert_eq!(ChannelShape::try_from(4), Err(GvfError::InvalidShapeKind(4)));
    }

    #[test]
    fn stores_si_dimensions() {
        let pipe = ChannelSection::circular(Length::new::<millimeter>(600.0)).unwrap();
        assert_eq!(pipe.shape(), ChannelShape::Circular);
        match pipe.kind() {
            SectionKind::Circular { diameter } => assert!((diameter - 0.6).abs() < 1e-12),
            other => panic!("unexpected section {other:?}"),
        }
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert_eq!(
            ChannelSection::rectangular(Length::new::<meter>(0.0)),
            Err(ConstraintError::Zero)
        );
        assert_eq!(
            ChannelSection::circular(Length::new::<meter>(-0.6)),
            Err(ConstraintError::Negative)
        );
    }

    #[test]
    fn side_angle_range() {
        let width = Length::new::<meter>(1.5);
        assert!(ChannelSection::trapezoidal(width, Angle::new::<degree>(60.0)).is_ok());
        assert_eq!(
            ChannelSection::trapezoidal(width, Angle::new::<degree>(0.0)),
            Err(ConstraintError::BelowMinimum)
        );
        assert_eq!(
            ChannelSection::trapezoidal(width, Angle::new::<radian>(FRAC_PI_2)),
            Err(ConstraintError::AboveMaximum)
        );
        assert_eq!(
            ChannelSection::trapezoidal(width, Angle::new::<radian>(f64::NAN)),
            Err(ConstraintError::NotANumber)
        );
    }
}
