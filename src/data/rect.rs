//! Axis-aligned rectangle with closed bounds

use crate::data::{DataError, Point, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Axis-aligned rectangle `[xmin, xmax] x [ymin, ymax]`
///
/// Bounds are inclusive on every side. A rectangle may be degenerate
/// (zero width and/or height), but never inverted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 4]", into = "[f64; 4]")]
pub struct Rectangle {
    xmin: f64,
    ymin: f64,
    xmax: f64,
    ymax: f64,
}

impl Rectangle {
    /// The unit square `[0, 1] x [0, 1]`
    pub const UNIT: Rectangle = Rectangle {
        xmin: 0.0,
        ymin: 0.0,
        xmax: 1.0,
        ymax: 1.0,
    };

    /// Create a rectangle, failing if `xmax < xmin`, `ymax < ymin` or any bound is NaN
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Result<Self> {
        let has_nan = [xmin, ymin, xmax, ymax].iter().any(|v| v.is_nan());
        if has_nan || xmax < xmin || ymax < ymin {
            return Err(DataError::InvalidRectangle {
                xmin,
                ymin,
                xmax,
                ymax,
            });
        }
        Ok(Self {
            xmin,
            ymin,
            xmax,
            ymax,
        })
    }

    /// Smallest rectangle containing both corners, in any order
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            xmin: a.x().min(b.x()),
            ymin: a.y().min(b.y()),
            xmax: a.x().max(b.x()),
            ymax: a.y().max(b.y()),
        }
    }

    #[inline]
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    #[inline]
    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    #[inline]
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    #[inline]
    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Check if the point lies inside or on the boundary
    #[inline]
    pub fn contains(&self, point: &Point) -> bool {
        point.x() >= self.xmin
            && point.x() <= self.xmax
            && point.y() >= self.ymin
            && point.y() <= self.ymax
    }

    /// Check if the two rectangles share at least one point (touching counts)
    #[inline]
    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.xmax >= other.xmin
            && self.xmin <= other.xmax
            && self.ymax >= other.ymin
            && self.ymin <= other.ymax
    }

    /// Squared Euclidean distance from the point to the closest point of the rectangle
    ///
    /// Zero when the point is contained.
    #[inline]
    pub fn distance_squared_to(&self, point: &Point) -> f64 {
        let dx = if point.x() < self.xmin {
            self.xmin - point.x()
        } else if point.x() > self.xmax {
            point.x() - self.xmax
        } else {
            0.0
        };
        let dy = if point.y() < self.ymin {
            self.ymin - point.y()
        } else if point.y() > self.ymax {
            point.y() - self.ymax
        } else {
            0.0
        };
        dx * dx + dy * dy
    }

    /// Euclidean distance from the point to the closest point of the rectangle
    pub fn distance_to(&self, point: &Point) -> f64 {
        self.distance_squared_to(point).sqrt()
    }

    /// Smallest rectangle covering this one and the point
    pub(crate) fn expanded_to(&self, point: &Point) -> Self {
        Self {
            xmin: self.xmin.min(point.x()),
            ymin: self.ymin.min(point.y()),
            xmax: self.xmax.max(point.x()),
            ymax: self.ymax.max(point.y()),
        }
    }

    /// Split at `x = at` into the left and right halves (both keep the split line)
    pub(crate) fn split_vertical(&self, at: f64) -> (Self, Self) {
        (
            Self {
                xmax: at,
                ..*self
            },
            Self { xmin: at, ..*self },
        )
    }

    /// Split at `y = at` into the bottom and top halves (both keep the split line)
    pub(crate) fn split_horizontal(&self, at: f64) -> (Self, Self) {
        (
            Self {
                ymax: at,
                ..*self
            },
            Self { ymin: at, ..*self },
        )
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        Self::UNIT
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.xmin, self.xmax, self.ymin, self.ymax
        )
    }
}

impl TryFrom<[f64; 4]> for Rectangle {
    type Error = DataError;

    fn try_from([xmin, ymin, xmax, ymax]: [f64; 4]) -> Result<Self> {
        Self::new(xmin, ymin, xmax, ymax)
    }
}

impl From<Rectangle> for [f64; 4] {
    fn from(rect: Rectangle) -> Self {
        [rect.xmin, rect.ymin, rect.xmax, rect.ymax]
    }
}

/// `geo::Rect` normalizes its corners, so this conversion only fails on NaN
impl TryFrom<geo::Rect<f64>> for Rectangle {
    type Error = DataError;

    fn try_from(rect: geo::Rect<f64>) -> Result<Self> {
        let min = rect.min();
        let max = rect.max();
        Self::new(min.x, min.y, max.x, max.y)
    }
}

impl From<Rectangle> for geo::Rect<f64> {
    fn from(rect: Rectangle) -> Self {
        geo::Rect::new(
            geo::Coord {
                x: rect.xmin,
                y: rect.ymin,
            },
            geo::Coord {
                x: rect.xmax,
                y: rect.ymax,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Rectangle {
        Rectangle::new(xmin, ymin, xmax, ymax).unwrap()
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        assert!(matches!(
            Rectangle::new(1.0, 0.0, 0.0, 1.0),
            Err(DataError::InvalidRectangle { .. })
        ));
        assert!(Rectangle::new(0.0, 1.0, 1.0, 0.0).is_err());
        assert!(Rectangle::new(0.0, f64::NAN, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_degenerate_is_valid() {
        let line = rect(0.5, 0.0, 0.5, 1.0);
        assert_eq!(line.width(), 0.0);
        assert!(line.contains(&Point::new(0.5, 0.3)));
        assert!(!line.contains(&Point::new(0.50001, 0.3)));

        let dot = rect(0.2, 0.2, 0.2, 0.2);
        assert!(dot.contains(&Point::new(0.2, 0.2)));
    }

    #[test]
    fn test_contains_is_closed() {
        let unit = rect(0.0, 0.0, 1.0, 1.0);
        assert!(unit.contains(&Point::new(0.5, 0.5)));
        assert!(unit.contains(&Point::new(0.0, 1.0)));
        assert!(unit.contains(&Point::new(1.0, 1.0)));
        assert!(!unit.contains(&Point::new(1.5, 1.5)));
        assert!(!unit.contains(&Point::new(-0.1, 0.5)));
        assert_eq!(unit, Rectangle::UNIT);
    }

    #[test]
    fn test_intersects() {
        let a = rect(0.0, 0.0, 1.0, 1.0);
        let b = rect(0.5, 0.5, 1.5, 1.5);
        let touching = rect(1.0, 0.0, 2.0, 1.0);
        let apart = rect(1.1, 1.1, 2.0, 2.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(a.intersects(&touching));
        assert!(!a.intersects(&apart));
        assert!(!apart.intersects(&a));
    }

    #[test]
    fn test_distance_to_point() {
        let unit = Rectangle::UNIT;
        assert_eq!(unit.distance_squared_to(&Point::new(0.5, 0.5)), 0.0);
        assert_eq!(unit.distance_squared_to(&Point::new(2.0, 0.5)), 1.0);
        assert_eq!(unit.distance_squared_to(&Point::new(-3.0, 0.5)), 9.0);
        assert_eq!(unit.distance_to(&Point::new(4.0, 5.0)), 5.0);
        assert_eq!(unit.distance_squared_to(&Point::new(0.5, -2.0)), 4.0);
    }

    #[test]
    fn test_splits_share_the_line() {
        let (left, right) = Rectangle::UNIT.split_vertical(0.3);
        assert_eq!(left, rect(0.0, 0.0, 0.3, 1.0));
        assert_eq!(right, rect(0.3, 0.0, 1.0, 1.0));

        let (bottom, top) = left.split_horizontal(0.6);
        assert_eq!(bottom, rect(0.0, 0.0, 0.3, 0.6));
        assert_eq!(top, rect(0.0, 0.6, 0.3, 1.0));
    }

    #[test]
    fn test_expanded_to() {
        let grown = Rectangle::UNIT.expanded_to(&Point::new(2.0, -1.0));
        assert_eq!(grown, rect(0.0, -1.0, 2.0, 1.0));
        assert_eq!(
            Rectangle::UNIT.expanded_to(&Point::new(0.5, 0.5)),
            Rectangle::UNIT
        );
    }

    #[test]
    fn test_from_corners() {
        let r = Rectangle::from_corners(Point::new(0.8, 0.1), Point::new(0.2, 0.9));
        assert_eq!(r, rect(0.2, 0.1, 0.8, 0.9));
    }

    #[test]
    fn test_display() {
        assert_eq!(rect(0.0, 0.25, 0.5, 1.0).to_string(), "[0, 0.5] x [0.25, 1]");
    }

    #[test]
    fn test_geo_and_serde_conversions() {
        let r = rect(0.1, 0.2, 0.3, 0.4);
        let geo_rect: geo::Rect<f64> = r.into();
        assert_eq!(Rectangle::try_from(geo_rect).unwrap(), r);

        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, "[0.1,0.2,0.3,0.4]");
        let back: Rectangle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);

        assert!(serde_json::from_str::<Rectangle>("[1.0,0.0,0.0,1.0]").is_err());
    }
}
