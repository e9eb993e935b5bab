//! Errors from constructing a planner.

use std::error::Error;
use std::fmt;

use helixgrid_lattice::LatticeError;

use crate::config::ConfigError;

/// Errors from [`PathPlanner::for_kind`](crate::PathPlanner::for_kind).
#[derive(Clone, Debug, PartialEq)]
pub enum BuildError {
    /// The lattice backend rejected its parameters.
    Lattice(LatticeError),
    /// The planner configuration failed validation.
    Config(ConfigError),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lattice(e) => write!(f, "lattice: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl Error for BuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Lattice(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<LatticeError> for BuildError {
    fn from(e: LatticeError) -> Self {
        Self::Lattice(e)
    }
}

impl From<ConfigError> for BuildError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
