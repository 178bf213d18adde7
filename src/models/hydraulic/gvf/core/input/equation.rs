use std::fmt;

use uom::si::{f64::Length, length::meter};

use crate::models::hydraulic::gvf::core::GvfError;
use crate::support::constraint::{Constrained, ConstraintResult, NonNegative, StrictlyPositive};

/// Friction law used to relate discharge, depth and friction slope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlowEquation {
    /// Manning's equation with roughness coefficient `n` (SI usage).
    Manning {
        /// Roughness coefficient.
        n: Constrained<f64, StrictlyPositive>,
    },

    /// Darcy-Weisbach with a Colebrook-White friction factor.
    DarcyWeisbach {
        /// Equivalent sand-grain roughness of the channel wall.
        roughness: Constrained<Length, NonNegative>,
    },
}

impl FlowEquation {
    /// Manning's equation with roughness coefficient `n`.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is not strictly positive.
    pub fn manning(n: f64) -> ConstraintResult<Self> {
        Ok(FlowEquation::Manning {
            n: StrictlyPositive::new(n)?,
        })
    }

    /// Darcy-Weisbach with wall roughness `roughness`.
    ///
    /// A roughness of zero describes a hydraulically smooth wall.
    ///
    /// # Errors
    ///
    /// Returns an error if `roughness` is negative.
    pub fn darcy_weisbach(roughness: Length) -> ConstraintResult<Self> {
        Ok(FlowEquation::DarcyWeisbach {
            roughness: NonNegative::new(roughness)?,
        })
    }

    /// Returns the tag of this friction law.
    #[must_use]
    pub fn kind(&self) -> EquationKind {
        match self {
            FlowEquation::Manning { .. } => EquationKind::Manning,
            FlowEquation::DarcyWeisbach { .. } => EquationKind::DarcyWeisbach,
        }
    }

    /// Manning `n`, or wall roughness in metres.
    pub(in crate::models::hydraulic::gvf::core) fn coefficient(&self) -> f64 {
        match self {
            FlowEquation::Manning { n } => *n.as_ref(),
            FlowEquation::DarcyWeisbach { roughness } => roughness.as_ref().get::<meter>(),
        }
    }
}

/// Tag for a [`FlowEquation`], parsed from the menu codes `1` (Manning) and
/// `2` (Darcy-Weisbach).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquationKind {
    /// Manning's equation.
    Manning,
    /// Darcy-Weisbach with a Colebrook-White friction factor.
    DarcyWeisbach,
}

impl TryFrom<u8> for EquationKind {
    type Error = GvfError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(EquationKind::Manning),
            2 => Ok(EquationKind::DarcyWeisbach),
            other => Err(GvfError::InvalidEquationKind(other)),
        }
    }
}

impl fmt::Display for EquationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EquationKind::Manning => "Manning",
            EquationKind::DarcyWeisbach => "Darcy-Weisbach",
        })
    }
}
