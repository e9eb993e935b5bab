//! Shortest-path routing between lattice sites.
//!
//! [`PathPlanner`] runs a bounded A* search over the bond graph of its
//! lattice. Every bond costs one hop and the lattice's
//! [`hop_lower_bound`](Lattice::hop_lower_bound) guides the search, so
//! returned paths have the minimum number of hops inside the search window.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use helixgrid_core::{LatticeCoord, LatticeKind, Occupancy, Position};
use helixgrid_lattice::{build_lattice, Lattice, ScaleFactor, Snap};
use indexmap::{IndexMap, IndexSet};
use log::{debug, trace};

use crate::config::{ConfigError, PlannerConfig};
use crate::error::BuildError;
use crate::path::{LatticePath, PlannedHelix};

// ── SearchWindow ───────────────────────────────────────────────────

/// Inclusive row/column rectangle a single search may visit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchWindow {
    /// Lowest row and column.
    pub min: LatticeCoord,
    /// Highest row and column.
    pub max: LatticeCoord,
}

impl SearchWindow {
    /// `true` iff `coord` lies inside the window.
    pub fn contains(&self, coord: LatticeCoord) -> bool {
        (self.min.row..=self.max.row).contains(&coord.row)
            && (self.min.column..=self.max.column).contains(&coord.column)
    }

    /// Number of sites in the window.
    pub fn site_count(&self) -> u64 {
        let rows = i64::from(self.max.row) - i64::from(self.min.row) + 1;
        let cols = i64::from(self.max.column) - i64::from(self.min.column) + 1;
        rows.max(0).unsigned_abs() * cols.max(0).unsigned_abs()
    }
}

// ── Open-set ordering ──────────────────────────────────────────────

/// Frontier entry. Lowest estimate first, then earliest insertion.
#[derive(Debug)]
struct OpenEntry {
    estimate: f64,
    order: u64,
    hops: usize,
    coord: LatticeCoord,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: reverse both keys.
        other
            .estimate
            .total_cmp(&self.estimate)
            .then_with(|| other.order.cmp(&self.order))
    }
}

/// Why a search produced no route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NoRoute {
    OutsideExtent,
    Unreachable,
    BudgetExhausted,
}

// ── PathPlanner ────────────────────────────────────────────────────

/// Shortest-path router over one lattice.
///
/// The planner holds no mutable state: each request borrows an occupancy
/// snapshot, runs to completion, and returns a fresh result. It is
/// `Send + Sync` and can be shared across threads.
///
/// # Examples
///
/// ```
/// use helixgrid_core::{LatticeCoord, LatticeKind};
/// use helixgrid_route::{OccupancySet, PathPlanner, PlannerConfig};
///
/// let planner = PathPlanner::for_kind(LatticeKind::Honeycomb, 1.0, PlannerConfig::default())
///     .unwrap();
/// let occupancy = OccupancySet::<u32>::new();
/// let path = planner.preview(LatticeCoord::new(0, 0), LatticeCoord::new(0, 2), &occupancy);
/// assert_eq!(
///     path.as_slice(),
///     &[LatticeCoord::new(0, 0), LatticeCoord::new(0, 1), LatticeCoord::new(0, 2)]
/// );
/// ```
pub struct PathPlanner {
    lattice: Box<dyn Lattice>,
    config: PlannerConfig,
}

impl std::fmt::Debug for PathPlanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathPlanner")
            .field("kind", &self.lattice.kind())
            .field("radius", &self.lattice.radius())
            .field("config", &self.config)
            .finish()
    }
}

impl PathPlanner {
    /// Create a planner over `lattice`.
    ///
    /// Returns `Err` if `config` fails [`PlannerConfig::validate`].
    pub fn new(lattice: Box<dyn Lattice>, config: PlannerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { lattice, config })
    }

    /// Build the lattice for `kind` with unit radius `radius`, then the planner.
    pub fn for_kind(
        kind: LatticeKind,
        radius: f64,
        config: PlannerConfig,
    ) -> Result<Self, BuildError> {
        let lattice = build_lattice(kind, radius)?;
        Ok(Self::new(lattice, config)?)
    }

    /// The lattice being searched.
    pub fn lattice(&self) -> &dyn Lattice {
        &*self.lattice
    }

    /// The active search bounds.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Region a request from `start` to `end` may explore.
    ///
    /// Returns `None` when either endpoint lies outside the configured
    /// extent, in which case every request between them yields no route.
    pub fn search_window(&self, start: LatticeCoord, end: LatticeCoord) -> Option<SearchWindow> {
        if let Some(extent) = self.config.extent {
            if !extent.contains(start) || !extent.contains(end) {
                return None;
            }
        }
        let margin = i64::from(self.config.margin);
        let widen = |v: i32, delta: i64| -> i32 {
            let widened = (i64::from(v) + delta).clamp(i64::from(i32::MIN), i64::from(i32::MAX));
            i32::try_from(widened).unwrap_or(v)
        };
        let mut window = SearchWindow {
            min: LatticeCoord::new(
                widen(start.row.min(end.row), -margin),
                widen(start.column.min(end.column), -margin),
            ),
            max: LatticeCoord::new(
                widen(start.row.max(end.row), margin),
                widen(start.column.max(end.column), margin),
            ),
        };
        if let Some(extent) = self.config.extent {
            window.min.row = window.min.row.max(extent.min.row);
            window.min.column = window.min.column.max(extent.min.column);
            window.max.row = window.max.row.min(extent.max.row);
            window.max.column = window.max.column.min(extent.max.column);
        }
        Some(window)
    }

    /// Shortest route from `start` to `end` avoiding occupied sites.
    ///
    /// `start` and `end` themselves may be occupied. Returns `[start]`
    /// when they coincide and the empty path when no route exists inside
    /// the search bounds.
    pub fn preview(
        &self,
        start: LatticeCoord,
        end: LatticeCoord,
        occupancy: &dyn Occupancy,
    ) -> LatticePath {
        match self.search(start, end, occupancy) {
            Ok(coords) => LatticePath::from_coords(coords),
            Err(reason) => {
                debug!("no route {start} -> {end}: {reason:?}");
                LatticePath::empty()
            }
        }
    }

    /// Same route as [`preview`](Self::preview), with each site's model
    /// centre and parity attached for helix creation.
    ///
    /// An empty result means the gesture must be aborted.
    pub fn commit(
        &self,
        start: LatticeCoord,
        end: LatticeCoord,
        occupancy: &dyn Occupancy,
    ) -> Vec<PlannedHelix> {
        self.preview(start, end, occupancy)
            .iter()
            .map(|&coord| PlannedHelix::at(self.lattice(), coord))
            .collect()
    }

    /// [`preview`](Self::preview) between two scene positions, each snapped
    /// to its nearest site.
    pub fn preview_between(
        &self,
        start: Position,
        end: Position,
        scale: ScaleFactor,
        occupancy: &dyn Occupancy,
    ) -> LatticePath {
        match self.snap_pair(start, end, scale) {
            Some((a, b)) => self.preview(a, b, occupancy),
            None => LatticePath::empty(),
        }
    }

    /// [`commit`](Self::commit) between two scene positions, each snapped
    /// to its nearest site.
    pub fn commit_between(
        &self,
        start: Position,
        end: Position,
        scale: ScaleFactor,
        occupancy: &dyn Occupancy,
    ) -> Vec<PlannedHelix> {
        match self.snap_pair(start, end, scale) {
            Some((a, b)) => self.commit(a, b, occupancy),
            None => Vec::new(),
        }
    }

    fn snap_pair(
        &self,
        start: Position,
        end: Position,
        scale: ScaleFactor,
    ) -> Option<(LatticeCoord, LatticeCoord)> {
        let a = self
            .lattice
            .position_to_coordinate(start, scale, Snap::Nearest)?;
        let b = self
            .lattice
            .position_to_coordinate(end, scale, Snap::Nearest)?;
        Some((a, b))
    }

    fn search(
        &self,
        start: LatticeCoord,
        end: LatticeCoord,
        occupancy: &dyn Occupancy,
    ) -> Result<Vec<LatticeCoord>, NoRoute> {
        let window = self
            .search_window(start, end)
            .ok_or(NoRoute::OutsideExtent)?;
        if start == end {
            return Ok(vec![start]);
        }

        let lattice = self.lattice();
        let mut open = BinaryHeap::new();
        let mut came_from: IndexMap<LatticeCoord, LatticeCoord> = IndexMap::new();
        let mut best_hops: IndexMap<LatticeCoord, usize> = IndexMap::new();
        let mut closed: IndexSet<LatticeCoord> = IndexSet::new();
        let mut order = 0u64;
        let mut expansions = 0usize;

        best_hops.insert(start, 0);
        open.push(OpenEntry {
            estimate: lattice.hop_lower_bound(start, end),
            order,
            hops: 0,
            coord: start,
        });

        while let Some(entry) = open.pop() {
            if entry.coord == end {
                let path = reconstruct(&came_from, start, end);
                trace!(
                    "route {start} -> {end}: {} hops, {expansions} expansions, window {} sites",
                    path.len() - 1,
                    window.site_count()
                );
                return Ok(path);
            }
            if !closed.insert(entry.coord) {
                continue;
            }
            expansions += 1;
            if expansions > self.config.max_expansions {
                return Err(NoRoute::BudgetExhausted);
            }

            let hops = entry.hops + 1;
            for nb in lattice.neighbours(entry.coord) {
                if !window.contains(nb) || closed.contains(&nb) {
                    continue;
                }
                if nb != end && occupancy.is_occupied(nb) {
                    continue;
                }
                if best_hops.get(&nb).is_some_and(|&known| known <= hops) {
                    continue;
                }
                best_hops.insert(nb, hops);
                came_from.insert(nb, entry.coord);
                order += 1;
                open.push(OpenEntry {
                    estimate: hops as f64 + lattice.hop_lower_bound(nb, end),
                    order,
                    hops,
                    coord: nb,
                });
            }
        }

        trace!("route {start} -> {end}: frontier exhausted after {expansions} expansions");
        Err(NoRoute::Unreachable)
    }
}

/// Walk predecessor links back from `end` and return `start..=end`.
fn reconstruct(
    came_from: &IndexMap<LatticeCoord, LatticeCoord>,
    start: LatticeCoord,
    end: LatticeCoord,
) -> Vec<LatticeCoord> {
    let mut path = vec![end];
    let mut cursor = end;
    while cursor != start {
        match came_from.get(&cursor) {
            Some(&prev) => {
                path.push(prev);
                cursor = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LatticeExtent;
    use helixgrid_core::Parity;
    use helixgrid_lattice::{Honeycomb, Square};
    use helixgrid_test_utils::{
        assert_path_invariants, bfs_hops, coord_set, enclosure, wall, CountingOccupancy,
    };
    use indexmap::IndexSet;
    use proptest::prelude::*;

    fn c(row: i32, column: i32) -> LatticeCoord {
        LatticeCoord::new(row, column)
    }

    fn planner(kind: LatticeKind) -> PathPlanner {
        PathPlanner::for_kind(kind, 1.0, PlannerConfig::default()).unwrap()
    }

    fn planner_with(kind: LatticeKind, config: PlannerConfig) -> PathPlanner {
        PathPlanner::for_kind(kind, 1.0, config).unwrap()
    }

    fn empty() -> IndexSet<LatticeCoord> {
        IndexSet::new()
    }

    // ── Scenarios ──────────────────────────────────────────────

    #[test]
    fn honeycomb_straight_row() {
        let p = planner(LatticeKind::Honeycomb);
        let path = p.preview(c(0, 0), c(0, 2), &empty());
        assert_eq!(path.as_slice(), &[c(0, 0), c(0, 1), c(0, 2)]);
        assert_eq!(
            path.parities(p.lattice()),
            vec![Parity::Even, Parity::Odd, Parity::Even]
        );
    }

    #[test]
    fn square_detour_around_blocker() {
        let p = planner(LatticeKind::Square);
        let occ = coord_set(&[(0, 1)]);
        let path = p.preview(c(0, 0), c(0, 2), &occ);
        assert_eq!(path.len(), 5);
        assert!(!path.as_slice().contains(&c(0, 1)));
        assert_path_invariants(p.lattice(), path.as_slice(), c(0, 0), c(0, 2), &occ);
    }

    #[test]
    fn same_site_is_single_element() {
        for kind in [LatticeKind::Honeycomb, LatticeKind::Square] {
            let p = planner(kind);
            let occ = coord_set(&[(3, 3)]);
            assert_eq!(p.preview(c(3, 3), c(3, 3), &occ).as_slice(), &[c(3, 3)]);
        }
    }

    #[test]
    fn enclosed_start_has_no_route() {
        for kind in [LatticeKind::Honeycomb, LatticeKind::Square] {
            let p = planner(kind);
            let occ = enclosure(p.lattice(), c(0, 0));
            let path = p.preview(c(0, 0), c(6, 6), &occ);
            assert!(path.is_empty(), "{kind}: expected no route, got {path:?}");
            assert!(p.commit(c(0, 0), c(6, 6), &occ).is_empty());
        }
    }

    #[test]
    fn occupied_endpoints_are_exempt() {
        let p = planner(LatticeKind::Square);
        let occ = coord_set(&[(0, 0), (0, 3)]);
        let path = p.preview(c(0, 0), c(0, 3), &occ);
        assert_eq!(path.as_slice(), &[c(0, 0), c(0, 1), c(0, 2), c(0, 3)]);
    }

    #[test]
    fn wall_forces_route_through_gap() {
        let p = planner(LatticeKind::Square);
        // Wall at column 2 spanning rows -8..=3 leaves a gap at row 4.
        let occ = wall(2, (-8, 3));
        let path = p.preview(c(0, 0), c(0, 4), &occ);
        assert_path_invariants(p.lattice(), path.as_slice(), c(0, 0), c(0, 4), &occ);
        assert!(path.as_slice().contains(&c(4, 2)));
        assert_eq!(path.hops(), 4 + 4 + 4);
    }

    #[test]
    fn honeycomb_crosses_rows() {
        let p = planner(LatticeKind::Honeycomb);
        let path = p.preview(c(0, 0), c(3, 1), &empty());
        assert_path_invariants(p.lattice(), path.as_slice(), c(0, 0), c(3, 1), &empty());
        let window = p.search_window(c(0, 0), c(3, 1)).unwrap();
        let expected = bfs_hops(p.lattice(), c(0, 0), c(3, 1), &empty(), |x| {
            window.contains(x)
        })
        .unwrap();
        assert_eq!(path.hops(), expected);
    }

    // ── Commit mode ───────────────────────────────────────────

    #[test]
    fn commit_attaches_centres_and_parity() {
        let p = planner(LatticeKind::Honeycomb);
        let planned = p.commit(c(0, 0), c(0, 2), &empty());
        assert_eq!(planned.len(), 3);
        for h in &planned {
            assert_eq!(h.position, p.lattice().coordinate_to_position(h.coord));
            assert_eq!(h.parity, p.lattice().parity(h.coord));
        }
        let coords: Vec<_> = planned.iter().map(|h| h.coord).collect();
        assert_eq!(coords, p.preview(c(0, 0), c(0, 2), &empty()).into_vec());
    }

    #[test]
    fn between_snaps_scene_positions() {
        let p = planner(LatticeKind::Square);
        let sf = ScaleFactor::new(10.0).unwrap();
        // Square pitch is 2 model units, 20 scene units.
        let start = Position::new(1.0, -2.0);
        let end = Position::new(41.0, 3.0);
        let path = p.preview_between(start, end, sf, &empty());
        assert_eq!(path.start(), Some(c(0, 0)));
        assert_eq!(path.end(), Some(c(0, 2)));
        assert_eq!(p.commit_between(start, end, sf, &empty()).len(), 3);
    }

    #[test]
    fn between_rejects_non_finite_input() {
        let p = planner(LatticeKind::Square);
        let path = p.preview_between(
            Position::new(f64::NAN, 0.0),
            Position::new(0.0, 0.0),
            ScaleFactor::UNIT,
            &empty(),
        );
        assert!(path.is_empty());
    }

    // ── Search bounds ─────────────────────────────────────────

    #[test]
    fn budget_exhaustion_yields_empty_path() {
        let p = planner_with(
            LatticeKind::Square,
            PlannerConfig {
                max_expansions: 3,
                ..PlannerConfig::default()
            },
        );
        assert!(p.preview(c(0, 0), c(0, 10), &empty()).is_empty());
        // Short routes still fit in the budget.
        assert_eq!(p.preview(c(0, 0), c(0, 2), &empty()).len(), 3);
    }

    #[test]
    fn endpoints_outside_extent_have_no_route() {
        let p = planner_with(
            LatticeKind::Square,
            PlannerConfig {
                extent: Some(LatticeExtent::from_size(4, 4)),
                ..PlannerConfig::default()
            },
        );
        assert!(p.search_window(c(0, 0), c(0, 9)).is_none());
        assert!(p.preview(c(0, 0), c(0, 9), &empty()).is_empty());
        assert!(p.preview(c(-1, 0), c(-1, 0), &empty()).is_empty());
        assert_eq!(p.preview(c(0, 0), c(3, 3), &empty()).hops(), 6);
    }

    #[test]
    fn extent_clips_detours() {
        // A 2-row part with the middle of row 0 blocked: the only detour
        // runs through row 1, and nothing may step to row -1.
        let p = planner_with(
            LatticeKind::Square,
            PlannerConfig {
                extent: Some(LatticeExtent::from_size(2, 5)),
                ..PlannerConfig::default()
            },
        );
        let occ = coord_set(&[(0, 2)]);
        let path = p.preview(c(0, 0), c(0, 4), &occ);
        assert_path_invariants(p.lattice(), path.as_slice(), c(0, 0), c(0, 4), &occ);
        assert!(path.iter().all(|x| (0..=1).contains(&x.row)));

        let blocked = coord_set(&[(0, 2), (1, 2)]);
        assert!(p.preview(c(0, 0), c(0, 4), &blocked).is_empty());
    }

    #[test]
    fn window_widens_by_margin_and_saturates() {
        let p = planner_with(
            LatticeKind::Square,
            PlannerConfig {
                margin: 2,
                ..PlannerConfig::default()
            },
        );
        let w = p.search_window(c(5, 1), c(0, 3)).unwrap();
        assert_eq!(w.min, c(-2, -1));
        assert_eq!(w.max, c(7, 5));
        assert_eq!(w.site_count(), 10 * 7);

        let edge = p.search_window(c(i32::MAX, i32::MIN), c(i32::MAX, i32::MIN)).unwrap();
        assert_eq!(edge.max.row, i32::MAX);
        assert_eq!(edge.min.column, i32::MIN);
    }

    #[test]
    fn occupancy_queries_stay_inside_window() {
        let p = planner_with(
            LatticeKind::Honeycomb,
            PlannerConfig {
                margin: 1,
                ..PlannerConfig::default()
            },
        );
        let occ = CountingOccupancy::new(coord_set(&[(0, 2), (1, 2)]));
        let path = p.preview(c(0, 0), c(0, 4), &occ);
        assert!(!path.is_empty());
        let window = p.search_window(c(0, 0), c(0, 4)).unwrap();
        assert!(occ.query_count() > 0);
        assert!(occ.queries().iter().all(|&q| window.contains(q)));
        assert!(!occ.queries().contains(&c(0, 0)));
        assert!(!occ.queries().contains(&c(0, 4)));

        // A repeated request asks the same questions in the same order.
        let first = occ.queries();
        occ.reset();
        assert_eq!(occ.query_count(), 0);
        assert_eq!(p.preview(c(0, 0), c(0, 4), &occ), path);
        assert_eq!(occ.queries(), first);
    }

    // ── Construction ──────────────────────────────────────────

    #[test]
    fn invalid_config_is_rejected_up_front() {
        let bad = PlannerConfig {
            max_expansions: 0,
            ..PlannerConfig::default()
        };
        let err = PathPlanner::new(Box::new(Square::new(1.0).unwrap()), bad.clone()).unwrap_err();
        assert_eq!(err, ConfigError::ZeroExpansionBudget);
        assert!(matches!(
            PathPlanner::for_kind(LatticeKind::Square, 1.0, bad),
            Err(BuildError::Config(ConfigError::ZeroExpansionBudget))
        ));
        assert!(matches!(
            PathPlanner::for_kind(LatticeKind::Honeycomb, -1.0, PlannerConfig::default()),
            Err(BuildError::Lattice(_))
        ));
    }

    #[test]
    fn planner_exposes_backend() {
        let p = PathPlanner::new(Box::new(Honeycomb::new(2.0).unwrap()), PlannerConfig::default())
            .unwrap();
        assert!(p.lattice().downcast_ref::<Honeycomb>().is_some());
        assert_eq!(p.lattice().radius(), 2.0);
    }

    #[test]
    fn open_entry_orders_by_estimate_then_insertion() {
        let mut heap = BinaryHeap::new();
        for (estimate, order) in [(3.0, 0), (2.0, 2), (2.0, 1), (5.0, 3)] {
            heap.push(OpenEntry {
                estimate,
                order,
                hops: 0,
                coord: c(0, 0),
            });
        }
        let popped: Vec<u64> = std::iter::from_fn(|| heap.pop().map(|e| e.order)).collect();
        assert_eq!(popped, vec![1, 2, 0, 3]);
    }

    // ── Properties ────────────────────────────────────────────

    fn arb_kind() -> impl Strategy<Value = LatticeKind> {
        prop_oneof![Just(LatticeKind::Honeycomb), Just(LatticeKind::Square)]
    }

    fn arb_site() -> impl Strategy<Value = LatticeCoord> {
        (-6i32..6, -6i32..6).prop_map(|(r, col)| c(r, col))
    }

    fn arb_occupancy() -> impl Strategy<Value = IndexSet<LatticeCoord>> {
        proptest::collection::vec(arb_site(), 0..40).prop_map(|v| v.into_iter().collect())
    }

    proptest! {
        #[test]
        fn paths_are_valid_and_shortest(
            kind in arb_kind(),
            start in arb_site(),
            end in arb_site(),
            occ in arb_occupancy(),
        ) {
            let p = planner_with(kind, PlannerConfig { margin: 2, ..PlannerConfig::default() });
            let path = p.preview(start, end, &occ);
            let window = p.search_window(start, end).unwrap();
            let reference = bfs_hops(p.lattice(), start, end, &occ, |x| window.contains(x));
            match reference {
                None => prop_assert!(path.is_empty()),
                Some(hops) => {
                    assert_path_invariants(p.lattice(), path.as_slice(), start, end, &occ);
                    prop_assert_eq!(path.hops(), hops);
                }
            }
        }

        #[test]
        fn identical_requests_give_identical_paths(
            kind in arb_kind(),
            start in arb_site(),
            end in arb_site(),
            occ in arb_occupancy(),
        ) {
            let p = planner(kind);
            let first = p.preview(start, end, &occ);
            let second = p.preview(start, end, &occ);
            prop_assert_eq!(&first, &second);
            let fresh = planner(kind);
            prop_assert_eq!(first, fresh.preview(start, end, &occ));
        }

        #[test]
        fn same_endpoint_never_longer_than_one(kind in arb_kind(), site in arb_site(), occ in arb_occupancy()) {
            let p = planner(kind);
            prop_assert!(p.preview(site, site, &occ).len() <= 1);
        }
    }
}
