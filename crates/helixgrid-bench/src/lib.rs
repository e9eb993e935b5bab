//! Benchmark profiles and utilities for the helixgrid planner.
//!
//! Provides seeded planning workloads for benchmarks and examples:
//!
//! - [`reference_profile`]: a 30x32 part at 20% fill, the size of a
//!   freshly created honeycomb part
//! - [`stress_profile`]: a 120x120 part at 35% fill
//! - [`random_occupancy`]: deterministic helix placement via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use helixgrid_core::{HelixId, LatticeCoord, LatticeKind};
use helixgrid_lattice::Lattice;
use helixgrid_route::{HelixIdPool, LatticeExtent, OccupancySet, PathPlanner, PlannerConfig};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A planner, a populated part and the requests to run against it.
pub struct PlannerProfile {
    /// Planner bounded to the part's extent.
    pub planner: PathPlanner,
    /// Existing helices.
    pub occupancy: OccupancySet<HelixId>,
    /// `(start, end)` requests between free sites.
    pub requests: Vec<(LatticeCoord, LatticeCoord)>,
}

/// Build a reference benchmark profile: 30x32 sites, 20% occupied,
/// 64 requests.
pub fn reference_profile(kind: LatticeKind, seed: u64) -> PlannerProfile {
    build_profile(kind, 30, 32, 0.20, 64, seed)
}

/// Build a stress benchmark profile: 120x120 sites, 35% occupied,
/// 64 requests.
///
/// Same shape as [`reference_profile`] at 15x the site count.
pub fn stress_profile(kind: LatticeKind, seed: u64) -> PlannerProfile {
    build_profile(kind, 120, 120, 0.35, 64, seed)
}

fn build_profile(
    kind: LatticeKind,
    rows: u32,
    columns: u32,
    fill: f64,
    request_count: usize,
    seed: u64,
) -> PlannerProfile {
    let extent = LatticeExtent::from_size(rows, columns);
    let config = PlannerConfig {
        extent: Some(extent),
        ..PlannerConfig::default()
    };
    let planner = PathPlanner::for_kind(kind, 1.0, config).unwrap();
    let occupancy = random_occupancy(planner.lattice(), extent, fill, seed);
    let requests = random_requests(extent, &occupancy, request_count, seed ^ 0x5eed);
    PlannerProfile {
        planner,
        occupancy,
        requests,
    }
}

/// Occupy each site of `extent` with probability `fill`.
///
/// Helix ids come from a fresh [`HelixIdPool`] in row-major order, so
/// every id matches the parity of its site.
pub fn random_occupancy(
    lattice: &dyn Lattice,
    extent: LatticeExtent,
    fill: f64,
    seed: u64,
) -> OccupancySet<HelixId> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut pool = HelixIdPool::new();
    let mut occupancy = OccupancySet::new();
    for row in extent.min.row..=extent.max.row {
        for column in extent.min.column..=extent.max.column {
            if !rng.random_bool(fill.clamp(0.0, 1.0)) {
                continue;
            }
            let coord = LatticeCoord::new(row, column);
            let id = pool.next(lattice.parity(coord)).unwrap();
            occupancy.insert(coord, id).unwrap();
        }
    }
    occupancy
}

/// Up to `n` `(start, end)` pairs of free sites inside `extent`.
///
/// Gives up on a pair after 1000 occupied draws, so a nearly full
/// extent yields fewer pairs.
pub fn random_requests(
    extent: LatticeExtent,
    occupancy: &OccupancySet<HelixId>,
    n: usize,
    seed: u64,
) -> Vec<(LatticeCoord, LatticeCoord)> {
    use helixgrid_core::Occupancy;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let draw_free = |rng: &mut ChaCha8Rng| {
        (0..1000).find_map(|_| {
            let coord = LatticeCoord::new(
                rng.random_range(extent.min.row..=extent.max.row),
                rng.random_range(extent.min.column..=extent.max.column),
            );
            (!occupancy.is_occupied(coord)).then_some(coord)
        })
    };
    let mut requests = Vec::with_capacity(n);
    for _ in 0..n {
        let (Some(a), Some(b)) = (draw_free(&mut rng), draw_free(&mut rng)) else {
            break;
        };
        requests.push((a, b));
    }
    requests
}

#[cfg(test)]
mod tests {
    use super::*;
    use helixgrid_core::Occupancy;

    #[test]
    fn profiles_are_deterministic() {
        let a = reference_profile(LatticeKind::Honeycomb, 42);
        let b = reference_profile(LatticeKind::Honeycomb, 42);
        assert_eq!(a.occupancy, b.occupancy);
        assert_eq!(a.requests, b.requests);
        assert_eq!(a.requests.len(), 64);
    }

    #[test]
    fn occupancy_ids_match_site_parity() {
        let p = reference_profile(LatticeKind::Square, 7);
        assert!(!p.occupancy.is_empty());
        for (coord, id) in p.occupancy.iter() {
            assert_eq!(id.parity(), p.planner.lattice().parity(coord));
        }
    }

    #[test]
    fn requests_start_and_end_on_free_sites() {
        let p = stress_profile(LatticeKind::Honeycomb, 3);
        for &(a, b) in &p.requests {
            assert!(!p.occupancy.is_occupied(a));
            assert!(!p.occupancy.is_occupied(b));
        }
    }

    #[test]
    fn fill_extremes() {
        let lattice = helixgrid_lattice::Square::new(1.0).unwrap();
        let extent = LatticeExtent::from_size(5, 5);
        assert!(random_occupancy(&lattice, extent, 0.0, 1).is_empty());
        let full = random_occupancy(&lattice, extent, 1.0, 1);
        assert_eq!(full.len(), 25);
        assert!(random_requests(extent, &full, 4, 1).is_empty());
    }
}
