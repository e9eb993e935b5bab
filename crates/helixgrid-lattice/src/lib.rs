//! Lattice geometry for helixgrid.
//!
//! This crate defines the [`Lattice`] trait, the spatial abstraction the
//! path planner searches over, along with one backend per
//! [`LatticeKind`](helixgrid_core::LatticeKind).
//!
//! # Backends
//!
//! - [`Honeycomb`]: three bonded neighbours per site, rows offset by parity
//! - [`Square`]: four bonded neighbours per site
//!
//! A backend is chosen once per design with [`build_lattice`] and used
//! through `dyn Lattice` afterwards.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod honeycomb;
pub mod lattice;
pub mod scale;
pub mod snap;
pub mod square;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::LatticeError;
pub use honeycomb::Honeycomb;
pub use lattice::{build_lattice, Lattice, Neighbours};
pub use scale::ScaleFactor;
pub use snap::Snap;
pub use square::Square;
