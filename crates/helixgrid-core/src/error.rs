//! Error types shared across the helixgrid workspace.

use crate::coord::LatticeCoord;
use std::error::Error;
use std::fmt;

/// A string did not name a known [`LatticeKind`](crate::LatticeKind).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseLatticeKindError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseLatticeKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown lattice kind '{}'", self.input)
    }
}

impl Error for ParseLatticeKindError {}

/// Errors from building or mutating an occupancy snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OccupancyError {
    /// A second helix was placed on an already occupied coordinate.
    AlreadyOccupied {
        /// The contested coordinate.
        coord: LatticeCoord,
    },
}

impl fmt::Display for OccupancyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyOccupied { coord } => {
                write!(f, "coordinate {coord} is already occupied")
            }
        }
    }
}

impl Error for OccupancyError {}
