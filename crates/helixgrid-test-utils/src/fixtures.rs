//! Reusable occupancy fixtures.
//!
//! - [`coord_set`]: occupancy from literal `(row, column)` pairs.
//! - [`enclosure`]: every bonded neighbour of a site, sealing it in.
//! - [`wall`]: a straight run of occupied sites along one row or column.

use helixgrid_core::LatticeCoord;
use helixgrid_lattice::Lattice;
use indexmap::IndexSet;

/// Occupancy holding exactly the listed `(row, column)` sites.
pub fn coord_set(sites: &[(i32, i32)]) -> IndexSet<LatticeCoord> {
    sites.iter().map(|&rc| LatticeCoord::from(rc)).collect()
}

/// Occupancy that surrounds `centre` on `lattice`, leaving `centre` free.
pub fn enclosure(lattice: &dyn Lattice, centre: LatticeCoord) -> IndexSet<LatticeCoord> {
    lattice.neighbours(centre).into_iter().collect()
}

/// Vertical wall at `column` covering rows `rows.0..=rows.1`.
pub fn wall(column: i32, rows: (i32, i32)) -> IndexSet<LatticeCoord> {
    (rows.0..=rows.1)
        .map(|row| LatticeCoord::new(row, column))
        .collect()
}
