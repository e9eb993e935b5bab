//! Planner configuration, validation, and error types.
//!
//! [`PlannerConfig`] bounds every search the [`PathPlanner`](crate::PathPlanner)
//! runs. [`validate()`](PlannerConfig::validate) is called by the planner
//! constructor, so an invalid configuration never reaches a search.

use std::error::Error;
use std::fmt;

use helixgrid_core::LatticeCoord;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`PlannerConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_expansions` is zero, so no search could ever expand a node.
    ZeroExpansionBudget,
    /// The extent's minimum corner lies past its maximum corner.
    InvalidExtent {
        /// Configured minimum corner.
        min: LatticeCoord,
        /// Configured maximum corner.
        max: LatticeCoord,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroExpansionBudget => write!(f, "max_expansions must be at least 1"),
            Self::InvalidExtent { min, max } => {
                write!(f, "extent minimum {min} exceeds maximum {max}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── LatticeExtent ──────────────────────────────────────────────────

/// Inclusive rectangle of lattice sites, the finite footprint of a part.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LatticeExtent {
    /// Lowest row and column inside the extent.
    pub min: LatticeCoord,
    /// Highest row and column inside the extent.
    pub max: LatticeCoord,
}

impl LatticeExtent {
    /// Extent spanning `min..=max` on both axes.
    pub const fn new(min: LatticeCoord, max: LatticeCoord) -> Self {
        Self { min, max }
    }

    /// Extent of `rows × columns` sites with its minimum corner at
    /// the origin, the usual shape of a freshly created part.
    ///
    /// Zero dimensions are clamped to one site.
    pub fn from_size(rows: u32, columns: u32) -> Self {
        let last = |n: u32| i32::try_from(n.saturating_sub(1)).unwrap_or(i32::MAX);
        Self {
            min: LatticeCoord::new(0, 0),
            max: LatticeCoord::new(last(rows), last(columns)),
        }
    }

    /// `true` iff `coord` lies inside the extent (bounds inclusive).
    pub fn contains(&self, coord: LatticeCoord) -> bool {
        (self.min.row..=self.max.row).contains(&coord.row)
            && (self.min.column..=self.max.column).contains(&coord.column)
    }

    /// `true` iff the minimum corner does not exceed the maximum corner.
    pub fn is_well_formed(&self) -> bool {
        self.min.row <= self.max.row && self.min.column <= self.max.column
    }
}

// ── PlannerConfig ──────────────────────────────────────────────────

/// Bounds applied to every path search.
///
/// A search explores only the bounding box of its start and end widened
/// by `margin` sites on every side, clipped to `extent` when one is set,
/// and gives up after `max_expansions` node expansions.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannerConfig {
    /// Sites added around the start/end bounding box. Default: 8.
    pub margin: u32,
    /// Node expansions allowed per request. Default: 100 000. Minimum: 1.
    pub max_expansions: usize,
    /// Finite lattice the part occupies. Default: unbounded.
    pub extent: Option<LatticeExtent>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            margin: 8,
            max_expansions: 100_000,
            extent: None,
        }
    }
}

impl PlannerConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. A search must be able to expand at least its start node.
        if self.max_expansions == 0 {
            return Err(ConfigError::ZeroExpansionBudget);
        }
        // 2. An extent, if present, must not be inverted.
        if let Some(extent) = self.extent {
            if !extent.is_well_formed() {
                return Err(ConfigError::InvalidExtent {
                    min: extent.min,
                    max: extent.max,
                });
            }
        }
        Ok(())
    }
}
