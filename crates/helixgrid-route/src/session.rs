//! State machine behind the shortest-path-add (SPA) gesture.
//!
//! Holding the SPA modifier and pressing on the lattice drops an anchor.
//! Each further modified press routes from the anchor to the pressed site,
//! requests helices on every free site along the way, and moves the anchor
//! there. Hovering in between previews the route with the ids it would use.

use helixgrid_core::{HelixId, LatticeCoord, Occupancy};
use log::debug;

use crate::ids::{HelixIdPool, IdPoolExhausted};
use crate::path::PlannedHelix;
use crate::planner::PathPlanner;

/// A helix the caller should create.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NewHelix {
    /// Where and with which parity.
    pub helix: PlannedHelix,
    /// Id reserved for it.
    pub id: HelixId,
}

/// A site highlighted during hover with the id it would receive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CreateHint {
    /// Highlighted site.
    pub coord: LatticeCoord,
    /// Id shown on the highlight.
    pub id: HelixId,
}

/// Outcome of [`SpaSession::press`].
#[derive(Clone, Debug, PartialEq)]
pub enum SpaAction {
    /// An anchor was dropped on the pressed site.
    Started {
        /// The new anchor.
        anchor: LatticeCoord,
        /// Helix to create on the anchor, unless one is already there.
        created: Option<NewHelix>,
    },
    /// A route was found; create `helices` and highlight the new anchor.
    Extended {
        /// Free sites along the route, in path order, with reserved ids.
        helices: Vec<NewHelix>,
        /// The new anchor (the pressed site).
        anchor: LatticeCoord,
    },
    /// No route from the anchor; the session ended.
    Aborted {
        /// Helix to create on the pressed site, as a plain press would.
        created: Option<NewHelix>,
    },
    /// Press without the modifier; the session ended (or was never active).
    Cleared,
}

impl SpaAction {
    /// Every helix the caller should create for this action, in order.
    pub fn helices(&self) -> &[NewHelix] {
        match self {
            Self::Started { created, .. } | Self::Aborted { created } => created.as_slice(),
            Self::Extended { helices, .. } => helices,
            Self::Cleared => &[],
        }
    }
}

/// Pure SPA gesture state: at most one remembered anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpaSession {
    anchor: Option<LatticeCoord>,
}

impl SpaSession {
    /// Inactive session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current anchor, if the gesture is in progress.
    pub fn anchor(&self) -> Option<LatticeCoord> {
        self.anchor
    }

    /// `true` while an anchor is held.
    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    /// Handle a press on `coord`.
    ///
    /// Every modified press asks for a helix on the pressed site: the
    /// first one alongside the new anchor, a routed one for each free site
    /// along the path, an unroutable one on that site alone. Returned ids
    /// are already claimed in `pool`. Sites already occupied, or outside
    /// the planner's extent, are skipped and not re-created.
    ///
    /// # Errors
    ///
    /// Returns [`IdPoolExhausted`] if a parity runs out of ids. The session
    /// is left unchanged.
    pub fn press(
        &mut self,
        planner: &PathPlanner,
        coord: LatticeCoord,
        spa_modifier: bool,
        occupancy: &dyn Occupancy,
        pool: &mut HelixIdPool,
    ) -> Result<SpaAction, IdPoolExhausted> {
        if !spa_modifier {
            if let Some(anchor) = self.anchor.take() {
                debug!("spa: cleared anchor {anchor}");
            }
            return Ok(SpaAction::Cleared);
        }
        let Some(anchor) = self.anchor else {
            let created = create_single(planner, coord, occupancy, pool)?;
            debug!("spa: anchored at {coord}");
            self.anchor = Some(coord);
            return Ok(SpaAction::Started {
                anchor: coord,
                created,
            });
        };

        let planned = planner.commit(anchor, coord, occupancy);
        if planned.is_empty() {
            let created = create_single(planner, coord, occupancy, pool)?;
            debug!("spa: no route {anchor} -> {coord}, aborting");
            self.anchor = None;
            return Ok(SpaAction::Aborted { created });
        }

        let free: Vec<PlannedHelix> = planned
            .into_iter()
            .filter(|h| !occupancy.is_occupied(h.coord))
            .collect();
        let mut staged = pool.clone();
        let ids = staged.assign(free.iter().map(|h| h.parity))?;
        *pool = staged;

        let helices: Vec<NewHelix> = free
            .into_iter()
            .zip(ids)
            .map(|(helix, id)| NewHelix { helix, id })
            .collect();
        debug!(
            "spa: extended {anchor} -> {coord} with {} new helices",
            helices.len()
        );
        self.anchor = Some(coord);
        Ok(SpaAction::Extended {
            helices,
            anchor: coord,
        })
    }

    /// Sites the next press on `coord` would populate, with their ids.
    ///
    /// Empty when no anchor is held or no route exists.
    pub fn hover(
        &self,
        planner: &PathPlanner,
        coord: LatticeCoord,
        occupancy: &dyn Occupancy,
        pool: &HelixIdPool,
    ) -> Result<Vec<CreateHint>, IdPoolExhausted> {
        let Some(anchor) = self.anchor else {
            return Ok(Vec::new());
        };
        let lattice = planner.lattice();
        let free: Vec<LatticeCoord> = planner
            .preview(anchor, coord, occupancy)
            .into_iter()
            .filter(|&c| !occupancy.is_occupied(c))
            .collect();
        let ids = pool.hint_ids(free.iter().map(|&c| lattice.parity(c)))?;
        Ok(free
            .into_iter()
            .zip(ids)
            .map(|(coord, id)| CreateHint { coord, id })
            .collect())
    }

    /// End the gesture (Escape).
    pub fn cancel(&mut self) {
        if let Some(anchor) = self.anchor.take() {
            debug!("spa: cancelled at {anchor}");
        }
    }

    /// End the gesture because a helix was removed from the model.
    pub fn helix_removed(&mut self) {
        if let Some(anchor) = self.anchor.take() {
            debug!("spa: helix removed, dropping anchor {anchor}");
        }
    }
}

/// Helix for a single pressed site, or `None` if the site is taken or
/// lies outside the part.
fn create_single(
    planner: &PathPlanner,
    coord: LatticeCoord,
    occupancy: &dyn Occupancy,
    pool: &mut HelixIdPool,
) -> Result<Option<NewHelix>, IdPoolExhausted> {
    let outside = planner
        .config()
        .extent
        .is_some_and(|extent| !extent.contains(coord));
    if outside || occupancy.is_occupied(coord) {
        return Ok(None);
    }
    let helix = PlannedHelix::at(planner.lattice(), coord);
    let id = pool.next(helix.parity)?;
    Ok(Some(NewHelix { helix, id }))
}
