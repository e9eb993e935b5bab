//! Continuous model-space positions.

use std::ops::{Add, Sub};

/// A point in continuous space.
///
/// Positions are in *model* units unless a function says otherwise. A
/// *scene* position, as reported by a view, is the model position
/// multiplied by the view's scale factor. Views draw with y pointing
/// down; [`flip_y`](Position::flip_y) converts between the conventions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Position {
    /// Create a position.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Squared Euclidean distance to `other`.
    pub fn distance_sq(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Both components multiplied by `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// The same point with the vertical axis mirrored.
    pub fn flip_y(self) -> Self {
        Self::new(self.x, -self.y)
    }

    /// Whether both components are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_three_four_five() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
        assert!((a.distance_sq(b) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn flip_is_an_involution() {
        let p = Position::new(1.5, -2.0);
        assert_eq!(p.flip_y(), Position::new(1.5, 2.0));
        assert_eq!(p.flip_y().flip_y(), p);
    }

    #[test]
    fn arithmetic() {
        let p = Position::new(1.0, 2.0) + Position::new(0.5, -1.0);
        assert_eq!(p, Position::new(1.5, 1.0));
        assert_eq!(p - p, Position::default());
        assert_eq!(p.scaled(2.0), Position::new(3.0, 2.0));
    }
}
