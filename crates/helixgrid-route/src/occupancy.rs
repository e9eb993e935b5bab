//! Occupancy index: which lattice sites already carry a helix.

use helixgrid_core::{LatticeCoord, Occupancy, OccupancyError};
use indexmap::IndexMap;

/// Map from occupied lattice sites to the caller's helix handles.
///
/// Each site holds at most one helix. Iteration follows insertion order,
/// so fixtures built from the same input always enumerate identically.
/// The planner reads this only through [`Occupancy`].
///
/// # Examples
///
/// ```
/// use helixgrid_core::{LatticeCoord, Occupancy};
/// use helixgrid_route::OccupancySet;
///
/// let mut occ = OccupancySet::new();
/// occ.insert(LatticeCoord::new(0, 1), "vh0").unwrap();
/// assert!(occ.is_occupied(LatticeCoord::new(0, 1)));
/// assert!(occ.insert(LatticeCoord::new(0, 1), "vh1").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancySet<H> {
    sites: IndexMap<LatticeCoord, H>,
}

impl<H> Default for OccupancySet<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> OccupancySet<H> {
    /// Empty occupancy.
    pub fn new() -> Self {
        Self {
            sites: IndexMap::new(),
        }
    }

    /// Place `helix` at `coord`.
    ///
    /// Returns `Err(OccupancyError::AlreadyOccupied)` and leaves the set
    /// unchanged if another helix is already there.
    pub fn insert(&mut self, coord: LatticeCoord, helix: H) -> Result<(), OccupancyError> {
        match self.sites.entry(coord) {
            indexmap::map::Entry::Occupied(_) => Err(OccupancyError::AlreadyOccupied { coord }),
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(helix);
                Ok(())
            }
        }
    }

    /// Remove and return the helix at `coord`, if any.
    pub fn remove(&mut self, coord: LatticeCoord) -> Option<H> {
        self.sites.shift_remove(&coord)
    }

    /// The helix at `coord`, if any.
    pub fn get(&self, coord: LatticeCoord) -> Option<&H> {
        self.sites.get(&coord)
    }

    /// Number of occupied sites.
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// `true` if no site is occupied.
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Occupied sites in insertion order.
    pub fn coords(&self) -> impl Iterator<Item = LatticeCoord> + '_ {
        self.sites.keys().copied()
    }

    /// `(site, helix)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (LatticeCoord, &H)> + '_ {
        self.sites.iter().map(|(&c, h)| (c, h))
    }

    /// Build from `(site, helix)` pairs, failing on the first duplicate site.
    pub fn try_from_iter<I>(iter: I) -> Result<Self, OccupancyError>
    where
        I: IntoIterator<Item = (LatticeCoord, H)>,
    {
        let mut set = Self::new();
        for (coord, helix) in iter {
            set.insert(coord, helix)?;
        }
        Ok(set)
    }
}

impl<H> Occupancy for OccupancySet<H> {
    fn is_occupied(&self, coord: LatticeCoord) -> bool {
        self.sites.contains_key(&coord)
    }
}
