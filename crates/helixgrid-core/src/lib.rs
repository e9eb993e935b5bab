//! Core types and traits for the helixgrid lattice planner.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the values that flow between the lattice backends, the path planner
//! and the caller's model layer: lattice coordinates, parity, model-space
//! positions, helix identifiers, the [`Occupancy`] trait, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod error;
pub mod id;
pub mod kind;
pub mod position;
pub mod traits;

pub use coord::{LatticeCoord, Parity};
pub use error::{OccupancyError, ParseLatticeKindError};
pub use id::HelixId;
pub use kind::LatticeKind;
pub use position::Position;
pub use traits::Occupancy;
