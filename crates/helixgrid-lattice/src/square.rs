//! Square lattice with 4-connected bonds (N/S/E/W).

use crate::error::{check_radius, LatticeError};
use crate::lattice::{Lattice, Neighbours};
use helixgrid_core::{LatticeCoord, LatticeKind, Parity, Position};

/// Bond offsets in `(d_row, d_col)` order: down, up, west, east.
const OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A square lattice of sites with unit radius `r`.
///
/// Site `(row, col)` sits at `(2r·col, 2r·row)`. A site is even iff
/// `row + col` is even. Neighbours are the four cardinal sites, so the
/// graph distance is the Manhattan distance.
///
/// # Examples
///
/// ```
/// use helixgrid_core::{LatticeCoord, Parity, Position};
/// use helixgrid_lattice::{Lattice, Square};
///
/// let sq = Square::new(1.0).unwrap();
/// let c = LatticeCoord::new(2, 3);
/// assert_eq!(sq.coordinate_to_position(c), Position::new(6.0, 4.0));
/// assert_eq!(sq.parity(c), Parity::Odd);
/// assert_eq!(sq.neighbours(c).len(), 4);
/// assert_eq!(sq.hop_lower_bound(c, LatticeCoord::new(0, 0)), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    radius: f64,
}

impl Square {
    /// Create a square lattice with unit radius `radius`.
    ///
    /// Returns `Err(LatticeError::InvalidRadius)` unless `radius` is finite
    /// and strictly positive.
    pub fn new(radius: f64) -> Result<Self, LatticeError> {
        Ok(Self {
            radius: check_radius(radius)?,
        })
    }

    /// Spacing between adjacent rows and columns.
    pub fn pitch(&self) -> f64 {
        2.0 * self.radius
    }
}

impl Lattice for Square {
    fn kind(&self) -> LatticeKind {
        LatticeKind::Square
    }

    fn radius(&self) -> f64 {
        self.radius
    }

    fn coordinate_to_position(&self, coord: LatticeCoord) -> Position {
        Position::new(
            f64::from(coord.column) * self.pitch(),
            f64::from(coord.row) * self.pitch(),
        )
    }

    fn nearest_coordinate(&self, model: Position) -> LatticeCoord {
        LatticeCoord::new(
            (model.y / self.pitch()).round() as i32,
            (model.x / self.pitch()).round() as i32,
        )
    }

    fn parity(&self, coord: LatticeCoord) -> Parity {
        Parity::from_even(coord.row.rem_euclid(2) == coord.column.rem_euclid(2))
    }

    fn neighbours(&self, coord: LatticeCoord) -> Neighbours {
        OFFSETS
            .iter()
            .filter_map(|&(d_row, d_col)| coord.offset(d_row, d_col))
            .collect()
    }

    fn hop_lower_bound(&self, a: LatticeCoord, b: LatticeCoord) -> f64 {
        // Manhattan distance is the exact hop count on an unobstructed grid.
        a.manhattan(b) as f64
    }
}
