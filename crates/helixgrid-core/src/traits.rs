//! Core abstraction traits for occupancy queries.

use crate::coord::LatticeCoord;
use indexmap::{IndexMap, IndexSet};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::BuildHasher;

/// Read-only membership view over the lattice sites that already hold a
/// helix.
///
/// The planner reads occupancy through `&dyn Occupancy` and never mutates
/// it. Implementations must answer consistently for the duration of one
/// planning call; membership checks are expected to be O(1) (or O(log n)
/// for the ordered collections).
pub trait Occupancy {
    /// Whether `coord` holds a helix.
    fn is_occupied(&self, coord: LatticeCoord) -> bool;
}

impl<O: Occupancy + ?Sized> Occupancy for &O {
    fn is_occupied(&self, coord: LatticeCoord) -> bool {
        (**self).is_occupied(coord)
    }
}

impl<H, S: BuildHasher> Occupancy for HashMap<LatticeCoord, H, S> {
    fn is_occupied(&self, coord: LatticeCoord) -> bool {
        self.contains_key(&coord)
    }
}

impl<S: BuildHasher> Occupancy for HashSet<LatticeCoord, S> {
    fn is_occupied(&self, coord: LatticeCoord) -> bool {
        self.contains(&coord)
    }
}

impl<H, S: BuildHasher> Occupancy for IndexMap<LatticeCoord, H, S> {
    fn is_occupied(&self, coord: LatticeCoord) -> bool {
        self.contains_key(&coord)
    }
}

impl<S: BuildHasher> Occupancy for IndexSet<LatticeCoord, S> {
    fn is_occupied(&self, coord: LatticeCoord) -> bool {
        self.contains(&coord)
    }
}

impl<H> Occupancy for BTreeMap<LatticeCoord, H> {
    fn is_occupied(&self, coord: LatticeCoord) -> bool {
        self.contains_key(&coord)
    }
}

impl Occupancy for BTreeSet<LatticeCoord> {
    fn is_occupied(&self, coord: LatticeCoord) -> bool {
        self.contains(&coord)
    }
}
