//! Error types for lattice construction.

use std::fmt;

/// Errors arising from lattice or scale-factor construction.
#[derive(Debug, Clone, PartialEq)]
pub enum LatticeError {
    /// The unit radius is zero, negative, or not finite.
    InvalidRadius {
        /// The rejected radius.
        value: f64,
    },
    /// The view scale factor is zero, negative, or not finite.
    InvalidScaleFactor {
        /// The rejected factor.
        value: f64,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRadius { value } => {
                write!(f, "lattice radius must be finite and > 0, got {value}")
            }
            Self::InvalidScaleFactor { value } => {
                write!(f, "scale factor must be finite and > 0, got {value}")
            }
        }
    }
}

impl std::error::Error for LatticeError {}

/// Reject radii that are not finite and strictly positive.
pub(crate) fn check_radius(radius: f64) -> Result<f64, LatticeError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(radius)
    } else {
        Err(LatticeError::InvalidRadius { value: radius })
    }
}
