//! Two-dimensional points in drawing space.

use std::fmt;

/// Round to 2 decimal places, normalising negative zero to zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}

/// A point in drawing space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    /// Create a point without rounding.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create a point with both coordinates rounded to 2 decimals.
    ///
    /// Generators produce their points through this constructor so that
    /// output precision is bounded at the point of production.
    pub fn rounded(x: f64, y: f64) -> Self {
        Self {
            x: round2(x),
            y: round2(y),
        }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Point2D) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Midpoint between this point and another, rounded.
    pub fn midpoint(self, other: Point2D) -> Point2D {
        Point2D::rounded((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Formats as `x y`, the coordinate pair form used in path data.
impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.23456), 1.23);
        assert_eq!(round2(-1.236), -1.24);
        assert_eq!(round2(100.0), 100.0);
    }

    #[test]
    fn test_round2_drops_negative_zero() {
        let z = round2(-0.000001);
        assert_eq!(z, 0.0);
        assert!(z.is_sign_positive());
        assert_eq!(format!("{}", Point2D::rounded(-1e-12, 3.0)), "0 3");
    }

    #[test]
    fn test_distance_and_midpoint() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(3.0, 4.0);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(a.midpoint(b), Point2D::new(1.5, 2.0));
    }
}
