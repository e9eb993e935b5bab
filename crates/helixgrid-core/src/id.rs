//! Strongly-typed helix identifiers.

use crate::coord::Parity;
use std::fmt;

/// Identifies a virtual helix in the caller's model.
///
/// Helix numbers are split into an even and an odd pool; a helix placed
/// on an even lattice site takes an even number and vice versa.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HelixId(pub u32);

impl HelixId {
    /// Parity of the number itself.
    pub fn parity(self) -> Parity {
        Parity::from_even(self.0 % 2 == 0)
    }
}

impl fmt::Display for HelixId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for HelixId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parity_follows_number() {
        assert_eq!(HelixId(0).parity(), Parity::Even);
        assert_eq!(HelixId(7).parity(), Parity::Odd);
        assert_eq!(HelixId::from(12).to_string(), "12");
    }
}
