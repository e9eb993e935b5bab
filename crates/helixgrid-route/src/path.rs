//! Planned routes and the per-site records handed to the model layer.

use helixgrid_core::{LatticeCoord, Parity, Position};
use helixgrid_lattice::Lattice;

/// An ordered chain of lattice sites, each one bond from the next.
///
/// An empty path means no route was found. A one-element path is the
/// degenerate route from a site to itself.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LatticePath {
    coords: Vec<LatticeCoord>,
}

impl LatticePath {
    /// The "no route" path.
    pub fn empty() -> Self {
        Self { coords: Vec::new() }
    }

    pub(crate) fn from_coords(coords: Vec<LatticeCoord>) -> Self {
        Self { coords }
    }

    /// First site, if any.
    pub fn start(&self) -> Option<LatticeCoord> {
        self.coords.first().copied()
    }

    /// Last site, if any.
    pub fn end(&self) -> Option<LatticeCoord> {
        self.coords.last().copied()
    }

    /// Number of sites on the path.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// `true` if no route was found.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Number of bonds traversed (`len - 1`, or 0 when empty).
    pub fn hops(&self) -> usize {
        self.coords.len().saturating_sub(1)
    }

    /// Sites from start to end.
    pub fn iter(&self) -> std::slice::Iter<'_, LatticeCoord> {
        self.coords.iter()
    }

    /// Sites as a slice.
    pub fn as_slice(&self) -> &[LatticeCoord] {
        &self.coords
    }

    /// Consume into the underlying vector.
    pub fn into_vec(self) -> Vec<LatticeCoord> {
        self.coords
    }

    /// Parity of each site under `lattice`.
    pub fn parities(&self, lattice: &dyn Lattice) -> Vec<Parity> {
        self.coords.iter().map(|&c| lattice.parity(c)).collect()
    }
}

impl<'a> IntoIterator for &'a LatticePath {
    type Item = &'a LatticeCoord;
    type IntoIter = std::slice::Iter<'a, LatticeCoord>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}

impl IntoIterator for LatticePath {
    type Item = LatticeCoord;
    type IntoIter = std::vec::IntoIter<LatticeCoord>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.into_iter()
    }
}

/// One site of a committed route, ready for helix creation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlannedHelix {
    /// Lattice site.
    pub coord: LatticeCoord,
    /// Model-space centre of the site.
    pub position: Position,
    /// Parity of the site, which selects the helix id pool.
    pub parity: Parity,
}

impl PlannedHelix {
    /// Describe `coord` under `lattice`.
    pub fn at(lattice: &dyn Lattice, coord: LatticeCoord) -> Self {
        Self {
            coord,
            position: lattice.coordinate_to_position(coord),
            parity: lattice.parity(coord),
        }
    }
}
