//! 2D Point Index Module
//!
//! This module provides spatial indexing of points in the plane. The core data
//! structure is a 2D k-d tree that answers membership, rectangle range and
//! nearest-neighbor queries while pruning the parts of the plane that cannot
//! contribute to the answer.
//!
//! # Architecture
//!
//! - **[`Point`]**: Immutable coordinate pair with lexicographic ordering
//! - **[`Rectangle`]**: Immutable axis-aligned rectangle with closed bounds
//! - **[`KdTree`]**: Spatial index with per-node subtree sizes and pruned queries
//! - **[`PointSet`]**: Brute-force ordered set with the same query surface
//! - **[`PointIndex`]**: Trait implemented by both backends
//!
//! # Usage Example
//!
//! ```rust
//! use kdtree_points::data::{KdTree, Point, Rectangle};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut tree = KdTree::new();
//! tree.insert(Point::new(0.5, 0.5));
//! tree.insert(Point::new(0.25, 0.25));
//! tree.insert(Point::new(0.75, 0.75));
//!
//! assert!(tree.contains(&Point::new(0.25, 0.25)));
//!
//! let inside = tree.range(&Rectangle::new(0.0, 0.0, 0.6, 0.6)?);
//! assert_eq!(inside.len(), 2);
//!
//! assert_eq!(tree.nearest(&Point::new(0.7, 0.8)), Some(Point::new(0.75, 0.75)));
//! # Ok(())
//! # }
//! ```
//!
//! # Performance Characteristics
//!
//! - **Insert / contains**: O(depth); depth is O(log N) for random input, O(N) worst case
//! - **Range**: O(R + log N) typical, where R is the number of results
//! - **Nearest**: O(log N) typical, O(N) worst case

mod index;
mod kdtree;
pub mod loader;
mod point;
mod point_set;
mod rect;

// Public API exports
pub use index::PointIndex;
pub use kdtree::{Axis, Config, Iter, KdTree, Split};
pub use point::Point;
pub use point_set::PointSet;
pub use rect::Rectangle;

/// Error types for the data module
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("Invalid rectangle: [{xmin}, {xmax}] x [{ymin}, {ymax}]")]
    InvalidRectangle {
        xmin: f64,
        ymin: f64,
        xmax: f64,
        ymax: f64,
    },

    #[error("Invalid coordinate: ({x}, {y})")]
    InvalidCoordinate { x: f64, y: f64 },

    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DataError>;
