//! Shortest-path routing over helixgrid lattices.
//!
//! This crate holds everything between a pointer position and a list of
//! helices to create:
//!
//! - [`OccupancySet`]: the occupancy index of existing helices
//! - [`PathPlanner`]: bounded A* search producing [`LatticePath`]s and
//!   [`PlannedHelix`] records, configured by [`PlannerConfig`]
//! - [`HelixIdPool`]: parity-split helix id allocation
//! - [`SpaSession`]: the shortest-path-add gesture state machine
//! - [`preview_paste`]: clipboard placement hints
//!
//! Nothing here mutates the caller's model. Requests take occupancy
//! snapshots by shared reference and return fresh values.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod ids;
pub mod occupancy;
pub mod paste;
pub mod path;
pub mod planner;
pub mod session;

pub use config::{ConfigError, LatticeExtent, PlannerConfig};
pub use error::BuildError;
pub use ids::{HelixIdPool, IdPoolExhausted};
pub use occupancy::OccupancySet;
pub use paste::{preview_paste, ClipboardEntry, PastePreview};
pub use path::{LatticePath, PlannedHelix};
pub use planner::{PathPlanner, SearchWindow};
pub use session::{CreateHint, NewHelix, SpaAction, SpaSession};
