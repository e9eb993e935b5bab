//! helixgrid: shortest-path lattice routing for DNA-nanostructure design.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! helixgrid sub-crates. For most users, adding `helixgrid` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use helixgrid::prelude::*;
//!
//! // Route across a honeycomb part with one helix in the way.
//! let planner = PathPlanner::for_kind(LatticeKind::Honeycomb, 1.0, PlannerConfig::default())
//!     .unwrap();
//! let mut occupancy = OccupancySet::new();
//! occupancy.insert(LatticeCoord::new(0, 1), HelixId(1)).unwrap();
//!
//! let path = planner.preview(LatticeCoord::new(0, 0), LatticeCoord::new(0, 2), &occupancy);
//! assert_eq!(path.start(), Some(LatticeCoord::new(0, 0)));
//! assert_eq!(path.end(), Some(LatticeCoord::new(0, 2)));
//! assert!(!path.as_slice().contains(&LatticeCoord::new(0, 1)));
//!
//! // Every step alternates parity, which selects the helix id pool.
//! let parities = path.parities(planner.lattice());
//! assert!(parities.windows(2).all(|w| w[0] != w[1]));
//!
//! // Drive the SPA gesture: anchor (creating its helix), then extend.
//! let mut pool = HelixIdPool::from_used([HelixId(1)]);
//! let mut session = SpaSession::new();
//! let started = session
//!     .press(&planner, LatticeCoord::new(0, 0), true, &occupancy, &mut pool)
//!     .unwrap();
//! for h in started.helices() {
//!     occupancy.insert(h.helix.coord, h.id).unwrap();
//! }
//! let action = session
//!     .press(&planner, LatticeCoord::new(0, 2), true, &occupancy, &mut pool)
//!     .unwrap();
//! assert!(matches!(action, SpaAction::Extended { .. }));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `helixgrid-core` | Coordinates, parity, positions, helix ids, `Occupancy` |
//! | [`lattice`] | `helixgrid-lattice` | The `Lattice` trait and honeycomb/square backends |
//! | [`route`] | `helixgrid-route` | Planner, occupancy index, id pools, SPA session, paste hints |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types and traits (`helixgrid-core`).
///
/// Contains [`types::LatticeCoord`], [`types::Parity`], [`types::Position`],
/// [`types::HelixId`], and the [`types::Occupancy`] trait.
pub use helixgrid_core as types;

/// Lattice geometry (`helixgrid-lattice`).
///
/// Provides the [`lattice::Lattice`] trait and concrete backends:
/// [`lattice::Honeycomb`] and [`lattice::Square`].
pub use helixgrid_lattice as lattice;

/// Routing and gesture state (`helixgrid-route`).
///
/// [`route::PathPlanner`] for shortest paths, [`route::SpaSession`] for the
/// shortest-path-add gesture, [`route::preview_paste`] for clipboard hints.
pub use helixgrid_route as route;

/// Common imports for typical helixgrid usage.
///
/// ```rust
/// use helixgrid::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use helixgrid_core::{HelixId, LatticeCoord, LatticeKind, Occupancy, Parity, Position};

    // Lattice
    pub use helixgrid_lattice::{build_lattice, Lattice, ScaleFactor, Snap};

    // Routing
    pub use helixgrid_route::{
        CreateHint, HelixIdPool, LatticeExtent, LatticePath, OccupancySet, PathPlanner,
        PlannedHelix, PlannerConfig, SpaAction, SpaSession,
    };

    // Errors
    pub use helixgrid_core::{OccupancyError, ParseLatticeKindError};
    pub use helixgrid_lattice::LatticeError;
    pub use helixgrid_route::{BuildError, ConfigError, IdPoolExhausted};
}
