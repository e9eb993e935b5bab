//! Honeycomb lattice with parity-offset rows.

use crate::error::{check_radius, LatticeError};
use crate::lattice::{Lattice, Neighbours};
use helixgrid_core::{LatticeCoord, LatticeKind, Parity, Position};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Bond offsets shared by every site: east, west.
const SIDE_OFFSETS: [(i32, i32); 2] = [(0, 1), (0, -1)];

/// A honeycomb lattice of sites with unit radius `r`.
///
/// Site `(row, col)` sits at `x = √3·r·col`. Its `y` is `3r·row` when the
/// site is even and `3r·row + r` when it is odd, where a site is even iff
/// `row` and `col` have the same parity (`rem_euclid(2)`).
///
/// Every site has three bonded neighbours at distance `2r`: the two
/// horizontal neighbours `(row, col ± 1)` plus `(row - 1, col)` for an even
/// site or `(row + 1, col)` for an odd one. Bonds always join an even site
/// to an odd site.
///
/// # Examples
///
/// ```
/// use helixgrid_core::{LatticeCoord, Parity, Position};
/// use helixgrid_lattice::{Honeycomb, Lattice};
///
/// let hc = Honeycomb::new(1.0).unwrap();
/// let origin = LatticeCoord::new(0, 0);
/// assert_eq!(hc.parity(origin), Parity::Even);
/// assert_eq!(
///     hc.neighbours(origin).as_slice(),
///     &[
///         LatticeCoord::new(0, 1),
///         LatticeCoord::new(0, -1),
///         LatticeCoord::new(-1, 0),
///     ],
/// );
///
/// // The odd site (0, 1) is raised by one radius.
/// let p = hc.coordinate_to_position(LatticeCoord::new(0, 1));
/// assert!((p.y - 1.0).abs() < 1e-12);
/// assert!((p.distance(Position::new(0.0, 0.0)) - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Honeycomb {
    radius: f64,
}

impl Honeycomb {
    /// Create a honeycomb lattice with unit radius `radius`.
    ///
    /// Returns `Err(LatticeError::InvalidRadius)` unless `radius` is finite
    /// and strictly positive.
    pub fn new(radius: f64) -> Result<Self, LatticeError> {
        Ok(Self {
            radius: check_radius(radius)?,
        })
    }

    /// Centre-to-centre distance of bonded sites.
    pub fn bond_length(&self) -> f64 {
        2.0 * self.radius
    }

    /// Horizontal spacing between adjacent columns.
    pub fn column_pitch(&self) -> f64 {
        SQRT_3 * self.radius
    }

    /// Vertical spacing between adjacent rows of the same parity offset.
    pub fn row_pitch(&self) -> f64 {
        3.0 * self.radius
    }

    fn is_even(coord: LatticeCoord) -> bool {
        coord.row.rem_euclid(2) == coord.column.rem_euclid(2)
    }
}

impl Lattice for Honeycomb {
    fn kind(&self) -> LatticeKind {
        LatticeKind::Honeycomb
    }

    fn radius(&self) -> f64 {
        self.radius
    }

    fn coordinate_to_position(&self, coord: LatticeCoord) -> Position {
        let x = f64::from(coord.column) * self.column_pitch();
        let base = f64::from(coord.row) * self.row_pitch();
        let y = if Self::is_even(coord) {
            base
        } else {
            base + self.radius
        };
        Position::new(x, y)
    }

    fn nearest_coordinate(&self, model: Position) -> LatticeCoord {
        // The closest centre is always within one row and one column of
        // this guess; scan the 3x3 window and keep the strictly closest.
        let guess = LatticeCoord::new(
            (model.y / self.row_pitch()).floor() as i32,
            (model.x / self.column_pitch()).round() as i32,
        );
        let mut best = guess;
        let mut best_dist = model.distance_sq(self.coordinate_to_position(guess));
        for d_row in -1..=1 {
            for d_col in -1..=1 {
                let Some(candidate) = guess.offset(d_row, d_col) else {
                    continue;
                };
                let dist = model.distance_sq(self.coordinate_to_position(candidate));
                if dist < best_dist {
                    best = candidate;
                    best_dist = dist;
                }
            }
        }
        best
    }

    fn parity(&self, coord: LatticeCoord) -> Parity {
        Parity::from_even(Self::is_even(coord))
    }

    fn neighbours(&self, coord: LatticeCoord) -> Neighbours {
        let vertical = if Self::is_even(coord) { -1 } else { 1 };
        SIDE_OFFSETS
            .iter()
            .copied()
            .chain(std::iter::once((vertical, 0)))
            .filter_map(|(d_row, d_col)| coord.offset(d_row, d_col))
            .collect()
    }

    fn hop_lower_bound(&self, a: LatticeCoord, b: LatticeCoord) -> f64 {
        // Each bond spans exactly one bond length.
        self.coordinate_to_position(a)
            .distance(self.coordinate_to_position(b))
            / self.bond_length()
    }
}
