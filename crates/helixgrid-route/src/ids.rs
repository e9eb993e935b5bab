//! Helix id allocation split by parity.
//!
//! Even lattice sites take even helix ids and odd sites take odd ones.
//! [`HelixIdPool`] hands out the lowest free id of the requested parity.

use std::collections::BTreeSet;
use std::error::Error;
use std::fmt;

use helixgrid_core::{HelixId, Parity};

/// Every id of the requested parity is already in use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdPoolExhausted {
    /// Parity that ran out.
    pub parity: Parity,
}

impl fmt::Display for IdPoolExhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no free {} helix ids", self.parity)
    }
}

impl Error for IdPoolExhausted {}

/// Set of helix ids already in use by the model.
///
/// # Examples
///
/// ```
/// use helixgrid_core::{HelixId, Parity};
/// use helixgrid_route::HelixIdPool;
///
/// let mut pool = HelixIdPool::from_used([HelixId(0), HelixId(1), HelixId(4)]);
/// assert_eq!(pool.peek(Parity::Even), Ok(HelixId(2)));
/// assert_eq!(pool.next(Parity::Even), Ok(HelixId(2)));
/// assert_eq!(pool.next(Parity::Even), Ok(HelixId(6)));
/// assert_eq!(pool.next(Parity::Odd), Ok(HelixId(3)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HelixIdPool {
    used: BTreeSet<u32>,
}

impl HelixIdPool {
    /// Pool with no ids in use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pool with `used` already taken.
    pub fn from_used<I: IntoIterator<Item = HelixId>>(used: I) -> Self {
        Self {
            used: used.into_iter().map(|id| id.0).collect(),
        }
    }

    /// `true` if `id` is taken.
    pub fn is_used(&self, id: HelixId) -> bool {
        self.used.contains(&id.0)
    }

    /// Number of ids taken.
    pub fn len(&self) -> usize {
        self.used.len()
    }

    /// `true` if no id is taken.
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// Largest id taken, if any.
    pub fn max_used(&self) -> Option<HelixId> {
        self.used.last().copied().map(HelixId)
    }

    /// Mark `id` as taken. Returns `false` if it already was.
    pub fn claim(&mut self, id: HelixId) -> bool {
        self.used.insert(id.0)
    }

    /// Return `id` to the pool. Returns `false` if it was not taken.
    pub fn release(&mut self, id: HelixId) -> bool {
        self.used.remove(&id.0)
    }

    /// Lowest free id of `parity`, without taking it.
    pub fn peek(&self, parity: Parity) -> Result<HelixId, IdPoolExhausted> {
        let mut candidate = parity.bit();
        while self.used.contains(&candidate) {
            candidate = candidate
                .checked_add(2)
                .ok_or(IdPoolExhausted { parity })?;
        }
        Ok(HelixId(candidate))
    }

    /// Take the lowest free id of `parity`.
    pub fn next(&mut self, parity: Parity) -> Result<HelixId, IdPoolExhausted> {
        let id = self.peek(parity)?;
        self.used.insert(id.0);
        Ok(id)
    }

    /// Take one id per entry of `parities`, each matching its entry's parity.
    ///
    /// On error, ids taken by earlier entries stay taken.
    pub fn assign<I>(&mut self, parities: I) -> Result<Vec<HelixId>, IdPoolExhausted>
    where
        I: IntoIterator<Item = Parity>,
    {
        parities.into_iter().map(|p| self.next(p)).collect()
    }

    /// The ids [`assign`](Self::assign) would return, leaving the pool
    /// untouched.
    pub fn hint_ids<I>(&self, parities: I) -> Result<Vec<HelixId>, IdPoolExhausted>
    where
        I: IntoIterator<Item = Parity>,
    {
        self.clone().assign(parities)
    }

    /// First id for a block of pasted helices: the smallest even id above
    /// every id in use, or 0 for an empty pool.
    ///
    /// # Errors
    ///
    /// Returns [`IdPoolExhausted`] for the even parity when no even id lies
    /// above the largest id in use.
    pub fn paste_base(&self) -> Result<HelixId, IdPoolExhausted> {
        match self.used.last() {
            None => Ok(HelixId(0)),
            Some(&max) => max
                .checked_add(2)
                .map(|above| HelixId(above & !1))
                .ok_or(IdPoolExhausted {
                    parity: Parity::Even,
                }),
        }
    }
}
