//! Query commands and their output

use super::settings::Command;
use super::{AppError, Result};
use kdtree_points::data::{Axis, KdTree, Point, PointIndex, PointSet, Rectangle, Split};
use serde::Serialize;
use std::fmt;

/// Result of a command, printable as text or JSON
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "kebab-case")]
pub enum Output {
    Range {
        rect: Rectangle,
        /// Sorted, so the output does not depend on the backend
        points: Vec<Point>,
    },
    Nearest {
        query: Point,
        nearest: Option<Point>,
        distance: Option<f64>,
    },
    Contains {
        query: Point,
        contains: bool,
    },
    Stats {
        backend: &'static str,
        size: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        height: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        bounds: Option<Rectangle>,
    },
    Splits {
        splits: Vec<Split>,
    },
}

pub fn execute_kd_tree(tree: &KdTree, command: &Command) -> Result<Output> {
    match command {
        Command::Stats => Ok(Output::Stats {
            backend: "kd-tree",
            size: tree.len(),
            height: Some(tree.height()),
            bounds: Some(tree.bounds()),
        }),
        Command::Splits => Ok(Output::Splits {
            splits: tree.splits(),
        }),
        query => execute_query(tree, "kd-tree", query),
    }
}

pub fn execute_point_set(set: &PointSet, command: &Command) -> Result<Output> {
    execute_query(set, "brute", command)
}

/// Commands every backend can answer through [`PointIndex`]
fn execute_query<I: PointIndex>(
    index: &I,
    backend: &'static str,
    command: &Command,
) -> Result<Output> {
    let output = match *command {
        Command::Range {
            xmin,
            ymin,
            xmax,
            ymax,
        } => {
            let rect = Rectangle::new(xmin, ymin, xmax, ymax)?;
            let mut points = index.range(&rect);
            points.sort();
            Output::Range { rect, points }
        }
        Command::Nearest { x, y } => {
            let query = Point::try_new(x, y)?;
            let nearest = index.nearest(&query);
            tracing::debug!("nearest to {} is {:?}", query, nearest);
            Output::Nearest {
                query,
                nearest,
                distance: nearest.map(|point| point.distance_to(&query)),
            }
        }
        Command::Contains { x, y } => {
            let query = Point::try_new(x, y)?;
            Output::Contains {
                query,
                contains: index.contains(&query),
            }
        }
        Command::Stats => Output::Stats {
            backend,
            size: index.len(),
            height: None,
            bounds: None,
        },
        Command::Splits => return Err(AppError::Unsupported("splits", backend)),
    };
    Ok(output)
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Range { points, .. } => {
                for point in points {
                    writeln!(f, "{point}")?;
                }
                Ok(())
            }
            Output::Nearest { nearest, .. } => match nearest {
                Some(point) => writeln!(f, "{point}"),
                None => writeln!(f, "none"),
            },
            Output::Contains { contains, .. } => writeln!(f, "{contains}"),
            Output::Stats {
                backend,
                size,
                height,
                bounds,
            } => {
                writeln!(f, "backend: {backend}")?;
                writeln!(f, "size: {size}")?;
                if let Some(height) = height {
                    writeln!(f, "height: {height}")?;
                }
                if let Some(bounds) = bounds {
                    writeln!(f, "bounds: {bounds}")?;
                }
                Ok(())
            }
            Output::Splits { splits } => {
                for split in splits {
                    let axis = match split.axis {
                        Axis::Vertical => "x",
                        Axis::Horizontal => "y",
                    };
                    writeln!(
                        f,
                        "{:indent$}{} split on {} within {}",
                        "",
                        split.point,
                        axis,
                        split.region,
                        indent = split.depth * 2
                    )?;
                }
                Ok(())
            }
        }
    }
}
