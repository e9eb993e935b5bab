//! Test utilities and mock types for helixgrid development.
//!
//! Provides occupancy fixtures, a query-recording [`CountingOccupancy`]
//! wrapper, a reference breadth-first search ([`bfs_hops`]) and the
//! path invariant checker [`assert_path_invariants`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::RefCell;
use std::collections::VecDeque;

use helixgrid_core::{LatticeCoord, Occupancy};
use helixgrid_lattice::Lattice;
use indexmap::{IndexMap, IndexSet};

pub use fixtures::{coord_set, enclosure, wall};

/// Occupancy wrapper that records every coordinate the code under test asks
/// about, in query order.
pub struct CountingOccupancy<O> {
    inner: O,
    queries: RefCell<Vec<LatticeCoord>>,
}

impl<O: Occupancy> CountingOccupancy<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            queries: RefCell::new(Vec::new()),
        }
    }

    /// Number of `is_occupied` calls so far.
    pub fn query_count(&self) -> usize {
        self.queries.borrow().len()
    }

    /// Every queried coordinate, in call order.
    pub fn queries(&self) -> Vec<LatticeCoord> {
        self.queries.borrow().clone()
    }

    /// Forget recorded queries.
    pub fn reset(&self) {
        self.queries.borrow_mut().clear();
    }
}

impl<O: Occupancy> Occupancy for CountingOccupancy<O> {
    fn is_occupied(&self, coord: LatticeCoord) -> bool {
        self.queries.borrow_mut().push(coord);
        self.inner.is_occupied(coord)
    }
}

/// Breadth-first hop count from `start` to `end`.
///
/// Follows the planner's rules: only sites accepted by `within` are
/// visited, and occupied sites are impassable except `start` and `end`.
/// Returns `None` if `end` is unreachable.
pub fn bfs_hops(
    lattice: &dyn Lattice,
    start: LatticeCoord,
    end: LatticeCoord,
    occupancy: &dyn Occupancy,
    within: impl Fn(LatticeCoord) -> bool,
) -> Option<usize> {
    if !within(start) || !within(end) {
        return None;
    }
    let mut dist: IndexMap<LatticeCoord, usize> = IndexMap::new();
    let mut queue = VecDeque::new();
    dist.insert(start, 0);
    queue.push_back(start);
    while let Some(site) = queue.pop_front() {
        let d = dist[&site];
        if site == end {
            return Some(d);
        }
        for nb in lattice.neighbours(site) {
            if dist.contains_key(&nb) || !within(nb) {
                continue;
            }
            if nb != end && occupancy.is_occupied(nb) {
                continue;
            }
            dist.insert(nb, d + 1);
            queue.push_back(nb);
        }
    }
    None
}

/// Assert every structural property a non-empty planned path must have.
///
/// Checks that `path` runs from `start` to `end`, that each step crosses
/// exactly one bond and flips parity, that no site repeats, and that
/// interior sites are unoccupied.
pub fn assert_path_invariants(
    lattice: &dyn Lattice,
    path: &[LatticeCoord],
    start: LatticeCoord,
    end: LatticeCoord,
    occupancy: &dyn Occupancy,
) {
    assert!(!path.is_empty(), "expected a path from {start} to {end}");
    assert_eq!(path[0], start, "path does not begin at start");
    assert_eq!(path[path.len() - 1], end, "path does not finish at end");

    let unique: IndexSet<_> = path.iter().copied().collect();
    assert_eq!(unique.len(), path.len(), "path revisits a site: {path:?}");

    for pair in path.windows(2) {
        assert!(
            lattice.are_neighbours(pair[0], pair[1]),
            "step {} -> {} is not a bond",
            pair[0],
            pair[1]
        );
        assert_ne!(
            lattice.parity(pair[0]),
            lattice.parity(pair[1]),
            "step {} -> {} keeps parity",
            pair[0],
            pair[1]
        );
    }

    if path.len() > 2 {
        for &site in &path[1..path.len() - 1] {
            assert!(
                !occupancy.is_occupied(site),
                "interior site {site} is occupied"
            );
        }
    }
}
