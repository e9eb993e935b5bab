//! Snapping policy for position-to-coordinate conversion.

/// How a continuous position is resolved to a lattice site.
///
/// # Examples
///
/// ```
/// use helixgrid_core::{LatticeCoord, Position};
/// use helixgrid_lattice::{Lattice, ScaleFactor, Snap, Square};
///
/// let square = Square::new(1.0).unwrap();
/// // Corner of the cell around (0, 0): nearest site is (0, 0), but the
/// // point lies outside that site's radius.
/// let corner = Position::new(0.9, 0.9);
/// assert_eq!(
///     square.position_to_coordinate(corner, ScaleFactor::UNIT, Snap::Nearest),
///     Some(LatticeCoord::new(0, 0)),
/// );
/// assert_eq!(
///     square.position_to_coordinate(corner, ScaleFactor::UNIT, Snap::Strict),
///     None,
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Snap {
    /// Always return the nearest site (best-effort snapping).
    #[default]
    Nearest,
    /// Return a site only if the position lies within its radius
    /// (hover and commit gestures).
    Strict,
}
