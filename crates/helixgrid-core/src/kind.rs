//! Lattice topology selector.

use crate::error::ParseLatticeKindError;
use std::fmt;
use std::str::FromStr;

/// The lattice topology of a design.
///
/// Chosen once when a design is created; every coordinate in the design
/// is interpreted against it.
///
/// # Examples
///
/// ```
/// use helixgrid_core::LatticeKind;
///
/// let kind: LatticeKind = "Honeycomb".parse().unwrap();
/// assert_eq!(kind, LatticeKind::Honeycomb);
/// assert!("hexagonal".parse::<LatticeKind>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LatticeKind {
    /// Honeycomb packing: three bonded neighbours per site.
    Honeycomb,
    /// Square packing: four bonded neighbours per site.
    Square,
}

impl LatticeKind {
    /// Number of bonded neighbours of every site.
    pub fn degree(self) -> usize {
        match self {
            Self::Honeycomb => 3,
            Self::Square => 4,
        }
    }

    /// Lower-case name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Honeycomb => "honeycomb",
            Self::Square => "square",
        }
    }
}

impl fmt::Display for LatticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LatticeKind {
    type Err = ParseLatticeKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "honeycomb" => Ok(Self::Honeycomb),
            "square" => Ok(Self::Square),
            _ => Err(ParseLatticeKindError {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_display() {
        for kind in [LatticeKind::Honeycomb, LatticeKind::Square] {
            assert_eq!(kind.to_string().parse::<LatticeKind>(), Ok(kind));
        }
    }

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(" SQUARE ".parse::<LatticeKind>(), Ok(LatticeKind::Square));
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "triangular".parse::<LatticeKind>().unwrap_err();
        assert_eq!(err.input, "triangular");
        assert_eq!(err.to_string(), "unknown lattice kind 'triangular'");
    }

    #[test]
    fn degrees() {
        assert_eq!(LatticeKind::Honeycomb.degree(), 3);
        assert_eq!(LatticeKind::Square.degree(), 4);
    }
}
