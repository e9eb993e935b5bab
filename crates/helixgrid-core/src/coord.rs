//! Lattice coordinates and the parity classification of lattice sites.

use std::fmt;

/// A `(row, column)` site on a honeycomb or square lattice.
///
/// Coordinates are plain values: equality, hashing and ordering are all
/// by `(row, column)`. They are used as occupancy keys and as the
/// elements of planned paths.
///
/// # Examples
///
/// ```
/// use helixgrid_core::LatticeCoord;
///
/// let c = LatticeCoord::new(2, -3);
/// assert_eq!(c.offset(1, 1), Some(LatticeCoord::new(3, -2)));
/// assert_eq!(LatticeCoord::from((2, -3)), c);
/// assert_eq!(c.to_string(), "(2, -3)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LatticeCoord {
    /// Row index.
    pub row: i32,
    /// Column index.
    pub column: i32,
}

impl LatticeCoord {
    /// Create a coordinate from a row and a column.
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// The coordinate shifted by `(d_row, d_column)`.
    ///
    /// Returns `None` if either component would overflow `i32`.
    pub fn offset(self, d_row: i32, d_column: i32) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add(d_row)?,
            column: self.column.checked_add(d_column)?,
        })
    }

    /// Component-wise difference `self - origin` as `(d_row, d_column)`.
    ///
    /// Returns `None` on overflow.
    pub fn delta_from(self, origin: Self) -> Option<(i32, i32)> {
        Some((
            self.row.checked_sub(origin.row)?,
            self.column.checked_sub(origin.column)?,
        ))
    }

    /// Manhattan distance to `other` in index space.
    pub fn manhattan(self, other: Self) -> u64 {
        let dr = (i64::from(self.row) - i64::from(other.row)).unsigned_abs();
        let dc = (i64::from(self.column) - i64::from(other.column)).unsigned_abs();
        dr + dc
    }
}

impl From<(i32, i32)> for LatticeCoord {
    fn from((row, column): (i32, i32)) -> Self {
        Self { row, column }
    }
}

impl From<LatticeCoord> for (i32, i32) {
    fn from(c: LatticeCoord) -> Self {
        (c.row, c.column)
    }
}

impl fmt::Display for LatticeCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Binary classification of lattice sites.
///
/// Every single lattice step connects an even site to an odd one. Callers
/// keep separate even and odd helix-id pools and draw from the pool that
/// matches the parity of the site being populated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Parity {
    /// Even site (bit `0`).
    Even,
    /// Odd site (bit `1`).
    Odd,
}

impl Parity {
    /// `Even` when `even` is true, `Odd` otherwise.
    pub fn from_even(even: bool) -> Self {
        if even {
            Self::Even
        } else {
            Self::Odd
        }
    }

    /// Whether this is [`Parity::Even`].
    pub fn is_even(self) -> bool {
        self == Self::Even
    }

    /// `0` for even, `1` for odd.
    pub fn bit(self) -> u32 {
        match self {
            Self::Even => 0,
            Self::Odd => 1,
        }
    }

    /// The other parity.
    pub fn flipped(self) -> Self {
        match self {
            Self::Even => Self::Odd,
            Self::Odd => Self::Even,
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Even => write!(f, "even"),
            Self::Odd => write!(f, "odd"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn offset_overflow_is_none() {
        let c = LatticeCoord::new(i32::MAX, 0);
        assert_eq!(c.offset(1, 0), None);
        assert_eq!(c.offset(-1, 0), Some(LatticeCoord::new(i32::MAX - 1, 0)));
    }

    #[test]
    fn delta_from_origin() {
        let a = LatticeCoord::new(4, -1);
        let b = LatticeCoord::new(1, 2);
        assert_eq!(a.delta_from(b), Some((3, -3)));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut v = vec![
            LatticeCoord::new(1, 0),
            LatticeCoord::new(0, 5),
            LatticeCoord::new(0, -1),
        ];
        v.sort();
        assert_eq!(
            v,
            vec![
                LatticeCoord::new(0, -1),
                LatticeCoord::new(0, 5),
                LatticeCoord::new(1, 0),
            ]
        );
    }

    #[test]
    fn parity_bits() {
        assert_eq!(Parity::Even.bit(), 0);
        assert_eq!(Parity::Odd.bit(), 1);
        assert_eq!(Parity::Even.flipped(), Parity::Odd);
        assert_eq!(Parity::from_even(false), Parity::Odd);
    }

    proptest! {
        #[test]
        fn manhattan_is_symmetric(
            r1 in -1000i32..1000, c1 in -1000i32..1000,
            r2 in -1000i32..1000, c2 in -1000i32..1000,
        ) {
            let a = LatticeCoord::new(r1, c1);
            let b = LatticeCoord::new(r2, c2);
            prop_assert_eq!(a.manhattan(b), b.manhattan(a));
            prop_assert_eq!(a.manhattan(a), 0);
        }
    }
}
