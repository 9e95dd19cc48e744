//! Common interface of the point index backends

use crate::data::{KdTree, Point, PointSet, Rectangle};

/// Insert-only spatial index over 2D points
pub trait PointIndex {
    /// Add a point; an equal point already present is replaced, never duplicated
    fn insert(&mut self, point: Point);

    fn contains(&self, point: &Point) -> bool;

    /// All points inside `rect`, boundary included
    fn range(&self, rect: &Rectangle) -> Vec<Point>;

    /// Closest point to `query`, smallest in lexicographic order among ties
    fn nearest(&self, query: &Point) -> Option<Point>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PointIndex for KdTree {
    fn insert(&mut self, point: Point) {
        KdTree::insert(self, point)
    }

    fn contains(&self, point: &Point) -> bool {
        KdTree::contains(self, point)
    }

    fn range(&self, rect: &Rectangle) -> Vec<Point> {
        KdTree::range(self, rect)
    }

    fn nearest(&self, query: &Point) -> Option<Point> {
        KdTree::nearest(self, query)
    }

    fn len(&self) -> usize {
        KdTree::len(self)
    }

    fn is_empty(&self) -> bool {
        KdTree::is_empty(self)
    }
}

impl PointIndex for PointSet {
    fn insert(&mut self, point: Point) {
        PointSet::insert(self, point)
    }

    fn contains(&self, point: &Point) -> bool {
        PointSet::contains(self, point)
    }

    fn range(&self, rect: &Rectangle) -> Vec<Point> {
        PointSet::range(self, rect)
    }

    fn nearest(&self, query: &Point) -> Option<Point> {
        PointSet::nearest(self, query)
    }

    fn len(&self) -> usize {
        PointSet::len(self)
    }
}
