//! Brute-force point set
//!
//! Same query surface as [`KdTree`](crate::data::KdTree) with linear-time range
//! and nearest-neighbor queries. Useful as a reference implementation and for
//! small inputs.

use crate::data::{Point, Rectangle};
use std::collections::BTreeSet;

/// Ordered set of points with linear-time spatial queries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointSet {
    points: BTreeSet<Point>,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Add the point (no effect if an equal point is already present)
    pub fn insert(&mut self, point: Point) {
        self.points.insert(point);
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.points.contains(point)
    }

    /// All points inside `rect` (boundary included), in ascending order
    pub fn range(&self, rect: &Rectangle) -> Vec<Point> {
        self.points
            .iter()
            .filter(|point| rect.contains(point))
            .copied()
            .collect()
    }

    /// Closest point to `query`; ties go to the smallest point in lexicographic order
    pub fn nearest(&self, query: &Point) -> Option<Point> {
        let mut points = self.points.iter();
        let first = *points.next()?;
        let mut best = (first, query.distance_squared_to(&first));

        // Ascending iteration plus strict comparison keeps the smallest of equals
        for point in points {
            let distance = query.distance_squared_to(point);
            if distance < best.1 {
                best = (*point, distance);
            }
        }
        Some(best.0)
    }

    /// Points in ascending order
    pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ {
        self.points.iter()
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<Point> for PointSet {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}
