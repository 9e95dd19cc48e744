//! Immutable 2D point

use crate::data::{DataError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A point in the plane
///
/// Coordinates are always finite, and negative zero is stored as zero, so equality,
/// ordering and hashing all agree. Ordering is lexicographic (x, then y).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Create a point
    ///
    /// # Panics
    /// If either coordinate is NaN or infinite. Use [`Point::try_new`] for
    /// untrusted input.
    pub fn new(x: f64, y: f64) -> Self {
        assert!(
            x.is_finite() && y.is_finite(),
            "point coordinates must be finite"
        );
        // +0.0 turns -0.0 into 0.0
        Self { x: x + 0.0, y: y + 0.0 }
    }

    /// Create a point, rejecting NaN and infinite coordinates
    pub fn try_new(x: f64, y: f64) -> Result<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(DataError::InvalidCoordinate { x, y });
        }
        Ok(Self::new(x, y))
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Squared Euclidean distance to another point
    #[inline]
    pub fn distance_squared_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance_to(&self, other: &Point) -> f64 {
        self.distance_squared_to(other).sqrt()
    }
}

impl Eq for Point {}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl TryFrom<[f64; 2]> for Point {
    type Error = DataError;

    fn try_from([x, y]: [f64; 2]) -> Result<Self> {
        Self::try_new(x, y)
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

impl TryFrom<geo::Coord<f64>> for Point {
    type Error = DataError;

    fn try_from(coord: geo::Coord<f64>) -> Result<Self> {
        Self::try_new(coord.x, coord.y)
    }
}

impl TryFrom<geo::Point<f64>> for Point {
    type Error = DataError;

    fn try_from(point: geo::Point<f64>) -> Result<Self> {
        Self::try_new(point.x(), point.y())
    }
}

impl From<Point> for geo::Coord<f64> {
    fn from(point: Point) -> Self {
        geo::Coord {
            x: point.x,
            y: point.y,
        }
    }
}

impl From<Point> for geo::Point<f64> {
    fn from(point: Point) -> Self {
        geo::Point::new(point.x, point.y)
    }
}
