//! The core `Lattice` trait and `dyn Lattice` downcast support.

use crate::error::LatticeError;
use crate::honeycomb::Honeycomb;
use crate::scale::ScaleFactor;
use crate::snap::Snap;
use crate::square::Square;
use helixgrid_core::{LatticeCoord, LatticeKind, Parity, Position};
use smallvec::SmallVec;
use std::any::Any;

/// Neighbour list returned by [`Lattice::neighbours`].
///
/// Inline capacity of 6 keeps both backends allocation-free.
pub type Neighbours = SmallVec<[LatticeCoord; 6]>;

/// Geometry and bond topology of one lattice kind.
///
/// Every backend is parameterized by a unit radius `r` fixed at
/// construction. Model-space centres of bonded sites are exactly `2r`
/// apart, and every bond connects an even site to an odd one.
///
/// # Object Safety
///
/// The planner holds a `Box<dyn Lattice>` selected once per design. Use
/// `downcast_ref` to reach backend-specific helpers.
pub trait Lattice: Any + Send + Sync + 'static {
    /// Which topology this backend implements.
    fn kind(&self) -> LatticeKind;

    /// Unit radius of one lattice site in model units.
    fn radius(&self) -> f64;

    /// Exact model-space centre of `coord`.
    fn coordinate_to_position(&self, coord: LatticeCoord) -> Position;

    /// Site whose centre is closest to the model-space point `model`.
    ///
    /// Exact ties are resolved deterministically by the backend.
    /// Non-finite input saturates to the lattice's extreme indices.
    fn nearest_coordinate(&self, model: Position) -> LatticeCoord;

    /// Parity of `coord`.
    fn parity(&self, coord: LatticeCoord) -> Parity;

    /// Sites one bond away from `coord`, in a fixed backend-defined order.
    ///
    /// Each returned site has the opposite parity of `coord`. Sites whose
    /// indices would overflow `i32` are omitted.
    fn neighbours(&self, coord: LatticeCoord) -> Neighbours;

    /// Lower bound on the number of bonds between `a` and `b`.
    ///
    /// Never exceeds the true hop count and never drops by more than one
    /// across a single bond, so it is usable as an A* heuristic.
    fn hop_lower_bound(&self, a: LatticeCoord, b: LatticeCoord) -> f64;

    /// `true` iff `coord` has even parity.
    fn is_even_parity(&self, coord: LatticeCoord) -> bool {
        self.parity(coord).is_even()
    }

    /// Centre of `coord` in scene units.
    fn coordinate_to_scene_position(&self, coord: LatticeCoord, scale: ScaleFactor) -> Position {
        scale.to_scene(self.coordinate_to_position(coord))
    }

    /// Resolve a scene position to a lattice site.
    ///
    /// With [`Snap::Nearest`] this always returns the nearest site; with
    /// [`Snap::Strict`] it returns `None` unless the position lies within
    /// [`radius`](Self::radius) of that site's centre. Non-finite
    /// positions resolve to `None` under either policy.
    fn position_to_coordinate(
        &self,
        position: Position,
        scale: ScaleFactor,
        snap: Snap,
    ) -> Option<LatticeCoord> {
        if !position.is_finite() {
            return None;
        }
        let model = scale.to_model(position);
        let nearest = self.nearest_coordinate(model);
        match snap {
            Snap::Nearest => Some(nearest),
            Snap::Strict => {
                let centre = self.coordinate_to_position(nearest);
                (model.distance(centre) <= self.radius()).then_some(nearest)
            }
        }
    }

    /// `true` iff the scene position lies within `item_radius` (scene
    /// units) of the scaled centre of `coord`.
    fn is_within_lattice(
        &self,
        item_radius: f64,
        position: Position,
        coord: LatticeCoord,
        scale: ScaleFactor,
    ) -> bool {
        position.distance(self.coordinate_to_scene_position(coord, scale)) <= item_radius
    }

    /// `true` iff `a` and `b` are one bond apart.
    fn are_neighbours(&self, a: LatticeCoord, b: LatticeCoord) -> bool {
        self.neighbours(a).contains(&b)
    }
}

impl dyn Lattice {
    /// Attempt to downcast a trait object to a concrete backend.
    pub fn downcast_ref<T: Lattice>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}

/// Build the backend for `kind` with unit radius `radius`.
///
/// # Errors
///
/// Returns [`LatticeError::InvalidRadius`] if `radius` is not finite and
/// strictly positive.
///
/// # Examples
///
/// ```
/// use helixgrid_core::{LatticeCoord, LatticeKind};
/// use helixgrid_lattice::{build_lattice, Honeycomb};
///
/// let lattice = build_lattice(LatticeKind::Honeycomb, 1.0).unwrap();
/// assert_eq!(lattice.kind(), LatticeKind::Honeycomb);
/// assert_eq!(lattice.neighbours(LatticeCoord::new(0, 0)).len(), 3);
/// assert!(lattice.downcast_ref::<Honeycomb>().is_some());
///
/// assert!(build_lattice(LatticeKind::Square, -1.0).is_err());
/// ```
pub fn build_lattice(kind: LatticeKind, radius: f64) -> Result<Box<dyn Lattice>, LatticeError> {
    Ok(match kind {
        LatticeKind::Honeycomb => Box::new(Honeycomb::new(radius)?),
        LatticeKind::Square => Box::new(Square::new(radius)?),
    })
}
