//! KdTree Points - 2D spatial indexing of points
//!
//! This library stores points of the plane in a 2D k-d tree and answers
//! membership, axis-aligned range and nearest-neighbor queries, pruning the
//! subtrees whose region cannot contribute to the answer. A brute-force
//! [`PointSet`](data::PointSet) with the same query surface is provided as a
//! reference implementation.
//!
//! # Architecture
//!
//! - **[`data::Point`]** and **[`data::Rectangle`]**: immutable geometric primitives
//! - **[`data::KdTree`]**: the spatial index
//! - **[`data::PointSet`]**: brute-force backend
//! - **[`data::loader`]**: plain-text point file reader
//!
//! The `kdtree-points` binary loads a point file and runs a single query on it.

pub mod data;
