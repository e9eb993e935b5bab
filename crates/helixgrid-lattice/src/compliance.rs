//! Lattice trait compliance test helpers.
//!
//! These functions verify that a Lattice implementation satisfies the
//! invariants required by the trait contract over a finite window of
//! sites. Reused by every backend test module.

use crate::lattice::Lattice;
use crate::scale::ScaleFactor;
use crate::snap::Snap;
use helixgrid_core::LatticeCoord;
use indexmap::IndexSet;
use std::ops::RangeInclusive;

/// All sites with `row` in `rows` and `column` in `cols`, row-major.
pub fn window(rows: RangeInclusive<i32>, cols: RangeInclusive<i32>) -> Vec<LatticeCoord> {
    let mut out = Vec::new();
    for row in rows {
        for column in cols.clone() {
            out.push(LatticeCoord::new(row, column));
        }
    }
    out
}

/// Assert that every site has exactly `kind().degree()` distinct neighbours.
pub fn assert_neighbour_degree(lattice: &dyn Lattice, sites: &[LatticeCoord]) {
    let expected = lattice.kind().degree();
    for &site in sites {
        let unique: IndexSet<_> = lattice.neighbours(site).into_iter().collect();
        assert_eq!(
            unique.len(),
            expected,
            "{site} has {} distinct neighbours, expected {expected}",
            unique.len()
        );
        assert!(!unique.contains(&site), "{site} lists itself as a neighbour");
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(lattice: &dyn Lattice, sites: &[LatticeCoord]) {
    for &site in sites {
        for nb in lattice.neighbours(site) {
            assert!(
                lattice.neighbours(nb).contains(&site),
                "neighbour symmetry violated: {nb} in N({site}) but {site} not in N({nb})"
            );
        }
    }
}

/// Assert that every bond joins sites of opposite parity.
pub fn assert_neighbours_flip_parity(lattice: &dyn Lattice, sites: &[LatticeCoord]) {
    for &site in sites {
        for nb in lattice.neighbours(site) {
            assert_ne!(
                lattice.parity(site),
                lattice.parity(nb),
                "bond {site} - {nb} does not flip parity"
            );
        }
    }
}

/// Assert that bonded centres are exactly `2r` apart and that no unbonded
/// site in the window is that close.
pub fn assert_bond_length(lattice: &dyn Lattice, sites: &[LatticeCoord]) {
    let bond = 2.0 * lattice.radius();
    let tol = 1e-9 * bond.max(1.0);
    for &a in sites {
        let pa = lattice.coordinate_to_position(a);
        for &b in sites {
            if a == b {
                continue;
            }
            let d = pa.distance(lattice.coordinate_to_position(b));
            if lattice.are_neighbours(a, b) {
                assert!((d - bond).abs() <= tol, "bond {a} - {b} has length {d}, expected {bond}");
            } else {
                assert!(d > bond + tol, "unbonded {a} - {b} only {d} apart");
            }
        }
    }
}

/// Assert that every centre snaps back to its own site under both policies.
pub fn assert_round_trip(lattice: &dyn Lattice, sites: &[LatticeCoord]) {
    for &site in sites {
        let p = lattice.coordinate_to_position(site);
        for snap in [Snap::Nearest, Snap::Strict] {
            assert_eq!(
                lattice.position_to_coordinate(p, ScaleFactor::UNIT, snap),
                Some(site),
                "centre of {site} did not round-trip under {snap:?}"
            );
        }
    }
}

/// Assert the heuristic is consistent: zero at the target and never
/// dropping by more than one across a bond.
pub fn assert_hop_bound_consistent(lattice: &dyn Lattice, sites: &[LatticeCoord]) {
    for &target in sites {
        assert_eq!(lattice.hop_lower_bound(target, target), 0.0);
        for &site in sites {
            let h = lattice.hop_lower_bound(site, target);
            assert!(h >= 0.0, "negative bound from {site} to {target}");
            for nb in lattice.neighbours(site) {
                let h_nb = lattice.hop_lower_bound(nb, target);
                assert!(
                    h <= 1.0 + h_nb + 1e-9,
                    "inconsistent bound: h({site})={h} > 1 + h({nb})={h_nb} toward {target}"
                );
            }
        }
    }
}

/// Run all compliance checks over `sites`.
pub fn run_full_compliance(lattice: &dyn Lattice, sites: Vec<LatticeCoord>) {
    assert_neighbour_degree(lattice, &sites);
    assert_neighbours_symmetric(lattice, &sites);
    assert_neighbours_flip_parity(lattice, &sites);
    assert_bond_length(lattice, &sites);
    assert_round_trip(lattice, &sites);
    assert_hop_bound_consistent(lattice, &sites);
}
