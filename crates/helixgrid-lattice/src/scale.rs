//! View scale factor between model and scene coordinates.

use crate::error::LatticeError;
use helixgrid_core::Position;

/// Multiplier from model units to scene units.
///
/// Always finite and strictly positive; construction rejects anything
/// else, so conversions never divide by zero.
///
/// # Examples
///
/// ```
/// use helixgrid_core::Position;
/// use helixgrid_lattice::ScaleFactor;
///
/// let sf = ScaleFactor::new(2.0).unwrap();
/// let scene = sf.to_scene(Position::new(1.0, -3.0));
/// assert_eq!(scene, Position::new(2.0, -6.0));
/// assert_eq!(sf.to_model(scene), Position::new(1.0, -3.0));
///
/// assert!(ScaleFactor::new(0.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    /// Identity scaling.
    pub const UNIT: Self = Self(1.0);

    /// Validate and wrap a scale factor.
    pub fn new(value: f64) -> Result<Self, LatticeError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(LatticeError::InvalidScaleFactor { value })
        }
    }

    /// The raw multiplier.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Convert a scene position to model units.
    pub fn to_model(self, scene: Position) -> Position {
        Position::new(scene.x / self.0, scene.y / self.0)
    }

    /// Convert a model position to scene units.
    pub fn to_scene(self, model: Position) -> Position {
        model.scaled(self.0)
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::UNIT
    }
}

impl TryFrom<f64> for ScaleFactor {
    type Error = LatticeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
