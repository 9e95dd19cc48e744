//! K-d tree spatial index over 2D points
//!
//! Levels alternate between vertical splits (comparing x) at even depth and
//! horizontal splits (comparing y) at odd depth. Every node caches the size of
//! its subtree. Node regions are not stored; they are rebuilt while traversing,
//! starting from the root region (the unit square unless configured otherwise).
//!
//! All traversals use an explicit stack, so insertion-ordered (degenerate) trees
//! with a depth in the tens of thousands are handled without recursion.

use crate::data::{Point, Rectangle};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration for a [`KdTree`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Region assigned to the root node.
    /// Inserting a point outside of it grows the region to cover the point.
    /// Default: the unit square
    pub bounds: Rectangle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bounds: Rectangle::UNIT,
        }
    }
}

/// Orientation of the splitting line at a tree level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Axis {
    /// Split on x (even depth)
    Vertical,
    /// Split on y (odd depth)
    Horizontal,
}

/// Where a point goes relative to a node
enum Step {
    Left,
    Right,
    Match,
}

impl Axis {
    #[inline]
    fn next(self) -> Self {
        match self {
            Axis::Vertical => Axis::Horizontal,
            Axis::Horizontal => Axis::Vertical,
        }
    }

    /// (active, secondary) coordinates of the point for this axis
    #[inline]
    fn keys(self, point: &Point) -> (f64, f64) {
        match self {
            Axis::Vertical => (point.x(), point.y()),
            Axis::Horizontal => (point.y(), point.x()),
        }
    }

    /// Points equal on the active axis but not on the other one go left
    #[inline]
    fn locate(self, point: &Point, node_point: &Point) -> Step {
        let (key, secondary) = self.keys(point);
        let (node_key, node_secondary) = self.keys(node_point);
        if key < node_key || (key == node_key && secondary != node_secondary) {
            Step::Left
        } else if key > node_key {
            Step::Right
        } else {
            Step::Match
        }
    }

    /// Split a node region through the node's point into (left, right) child regions
    #[inline]
    fn split(self, region: &Rectangle, at: &Point) -> (Rectangle, Rectangle) {
        match self {
            Axis::Vertical => region.split_vertical(at.x()),
            Axis::Horizontal => region.split_horizontal(at.y()),
        }
    }
}

struct Node {
    point: Point,
    /// Nodes in the subtree rooted here, including this one
    size: usize,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn leaf(point: Point) -> Self {
        Self {
            point,
            size: 1,
            left: None,
            right: None,
        }
    }
}

/// One node of the partition, as seen by a visualizer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Split {
    /// Point stored at the node (the splitting line passes through it)
    pub point: Point,
    /// Orientation of the splitting line
    pub axis: Axis,
    /// Region covered by the node's subtree
    pub region: Rectangle,
    /// Depth of the node (0 = root)
    pub depth: usize,
}

/// 2D k-d tree supporting insertion, membership, range and nearest-neighbor queries
///
/// The tree is not rebalanced: its shape depends on insertion order, with expected
/// depth O(log N) for random input and O(N) for sorted input.
pub struct KdTree {
    root: Option<Box<Node>>,
    bounds: Rectangle,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl KdTree {
    /// Create an empty tree rooted at the unit square
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create an empty tree with the given configuration
    pub fn with_config(config: Config) -> Self {
        Self {
            root: None,
            bounds: config.bounds,
        }
    }

    /// Region currently assigned to the root node
    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of distinct points stored, in constant time
    pub fn len(&self) -> usize {
        self.root.as_ref().map_or(0, |node| node.size)
    }

    /// Insert a point
    ///
    /// A point equal to a stored one replaces it in place; the tree shape and size
    /// are unchanged.
    pub fn insert(&mut self, point: Point) {
        if !self.bounds.contains(&point) {
            self.bounds = self.bounds.expanded_to(&point);
            tracing::trace!("kd-tree bounds grown to {} for {}", self.bounds, point);
        }

        if let Some(stored) = self.get_mut(&point) {
            *stored = point;
            return;
        }

        // The point is new: every node on the way down gains one descendant
        let mut slot = &mut self.root;
        let mut axis = Axis::Vertical;
        while let Some(node) = slot {
            node.size += 1;
            slot = match axis.locate(&point, &node.point) {
                Step::Left => &mut node.left,
                // Matches were handled by the lookup above
                Step::Right | Step::Match => &mut node.right,
            };
            axis = axis.next();
        }
        *slot = Some(Box::new(Node::leaf(point)));
    }

    /// Stored point equal to `point`, if any
    pub fn get(&self, point: &Point) -> Option<&Point> {
        let mut current = self.root.as_deref();
        let mut axis = Axis::Vertical;
        while let Some(node) = current {
            current = match axis.locate(point, &node.point) {
                Step::Left => node.left.as_deref(),
                Step::Right => node.right.as_deref(),
                Step::Match => return Some(&node.point),
            };
            axis = axis.next();
        }
        None
    }

    fn get_mut(&mut self, point: &Point) -> Option<&mut Point> {
        let mut current = self.root.as_deref_mut();
        let mut axis = Axis::Vertical;
        while let Some(node) = current {
            current = match axis.locate(point, &node.point) {
                Step::Left => node.left.as_deref_mut(),
                Step::Right => node.right.as_deref_mut(),
                Step::Match => return Some(&mut node.point),
            };
            axis = axis.next();
        }
        None
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.get(point).is_some()
    }

    /// All stored points inside `rect` (boundary included), in no particular order
    ///
    /// Subtrees whose region does not intersect `rect` are skipped.
    pub fn range(&self, rect: &Rectangle) -> Vec<Point> {
        let mut found = Vec::new();
        let Some(root) = self.root.as_deref() else {
            return found;
        };

        let mut stack = vec![(root, Axis::Vertical, self.bounds)];
        while let Some((node, axis, region)) = stack.pop() {
            if rect.contains(&node.point) {
                found.push(node.point);
            }

            let (left_region, right_region) = axis.split(&region, &node.point);
            if let Some(right) = node.right.as_deref() {
                if rect.intersects(&right_region) {
                    stack.push((right, axis.next(), right_region));
                }
            }
            if let Some(left) = node.left.as_deref() {
                if rect.intersects(&left_region) {
                    stack.push((left, axis.next(), left_region));
                }
            }
        }

        tracing::trace!("range {} matched {} points", rect, found.len());
        found
    }

    /// Closest stored point to `query`, or `None` when the tree is empty
    ///
    /// Among points at the same minimal distance, the smallest in lexicographic
    /// order wins. `query` may lie anywhere, including outside the root region.
    pub fn nearest(&self, query: &Point) -> Option<Point> {
        let root = self.root.as_deref()?;
        let mut champion = root.point;
        let mut best = query.distance_squared_to(&champion);

        let mut stack = vec![(root, Axis::Vertical, self.bounds)];
        while let Some((node, axis, region)) = stack.pop() {
            // Strict comparison: a point at exactly `best` could still win the tie-break
            if region.distance_squared_to(query) > best {
                continue;
            }

            let distance = query.distance_squared_to(&node.point);
            if distance < best || (distance == best && node.point < champion) {
                champion = node.point;
                best = distance;
            }

            let (left_region, right_region) = axis.split(&region, &node.point);
            let left_first = if left_region.contains(query) {
                true
            } else if right_region.contains(query) {
                false
            } else {
                left_region.distance_squared_to(query) < right_region.distance_squared_to(query)
            };

            let left = node
                .left
                .as_deref()
                .map(|child| (child, axis.next(), left_region));
            let right = node
                .right
                .as_deref()
                .map(|child| (child, axis.next(), right_region));
            let (first, second) = if left_first {
                (left, right)
            } else {
                (right, left)
            };
            // LIFO: the promising side is pushed last so it is explored first
            stack.extend(second);
            stack.extend(first);
        }

        Some(champion)
    }

    /// Answer many nearest-neighbor queries in parallel
    pub fn nearest_many(&self, queries: &[Point]) -> Vec<Option<Point>> {
        tracing::debug!("running {} nearest queries", queries.len());
        queries.par_iter().map(|query| self.nearest(query)).collect()
    }

    /// Number of levels (0 for an empty tree)
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Stored points in pre-order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: self.root.as_deref().into_iter().collect(),
            remaining: self.len(),
        }
    }

    /// Pre-order description of the partition: every node with its splitting
    /// line and region
    pub fn splits(&self) -> Vec<Split> {
        let mut splits = Vec::with_capacity(self.len());
        let mut stack: Vec<(&Node, Axis, Rectangle, usize)> = self
            .root
            .as_deref()
            .map(|root| (root, Axis::Vertical, self.bounds, 0))
            .into_iter()
            .collect();

        while let Some((node, axis, region, depth)) = stack.pop() {
            splits.push(Split {
                point: node.point,
                axis,
                region,
                depth,
            });
            let (left_region, right_region) = axis.split(&region, &node.point);
            if let Some(right) = node.right.as_deref() {
                stack.push((right, axis.next(), right_region, depth + 1));
            }
            if let Some(left) = node.left.as_deref() {
                stack.push((left, axis.next(), left_region, depth + 1));
            }
        }
        splits
    }
}

impl Default for KdTree {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for KdTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KdTree")
            .field("len", &self.len())
            .field("bounds", &self.bounds)
            .finish()
    }
}

// The default drop glue recurses once per level, which overflows the stack on
// degenerate trees. Detach children first so every node is dropped as a leaf.
impl Drop for KdTree {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl FromIterator<Point> for KdTree {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut tree = KdTree::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<Point> for KdTree {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for point in iter {
            self.insert(point);
        }
    }
}

impl<'a> IntoIterator for &'a KdTree {
    type Item = &'a Point;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Pre-order iterator over the points of a [`KdTree`]
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Point;

    fn next(&mut self) -> Option<&'a Point> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        self.remaining -= 1;
        Some(&node.point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
